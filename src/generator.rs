//! Phase 1: enumerate the weighted rectangle poset with chain-dominance
//! pruning. For each `(row, col, right)` triple, only rectangles that
//! strictly improve on the previous emission in that chain are kept.

use crate::arena::RectId;
use crate::context::Context;
use crate::rect::Bounds;

/// Produces the pruned candidate list, sorted ascending by weight-to-cost
/// ratio (consumed from the back by the greedy matcher). Spans are not
/// materialized here; generation produces only geometric records.
pub fn generate(ctx: &mut Context) -> Vec<RectId> {
    let num_rows = ctx.grid().num_rows();
    let num_columns = ctx.grid().num_columns();
    let mut candidates = Vec::new();

    for top_row in 0..num_rows {
        for top_col in 0..num_columns {
            for right in top_col..num_columns {
                let mut previous_weight: Option<usize> = None;
                for bottom_row in top_row..num_rows {
                    let weight = ctx.grid().weight(top_row, top_col, bottom_row, right);
                    let improves = match previous_weight {
                        None => true,
                        Some(pw) => weight > pw,
                    };
                    if improves {
                        previous_weight = Some(weight);
                        let bounds = Bounds { top_row, top_col, bottom_row, bottom_col: right };
                        candidates.push(ctx.arena_mut().alloc(bounds, weight));
                    }
                }
            }
        }
    }

    candidates.sort_by_key(|&id| ctx.arena().get(id).ratio());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn grid_from_str(rows: &[&str]) -> Grid {
        Grid::new(rows.iter().map(|row| {
            row.chars().map(|c| if c == '@' { 1 } else { 0 }).collect()
        }).collect())
    }

    #[test]
    fn every_strawberry_has_a_singleton_candidate() {
        let grid = grid_from_str(&["@..", "...", "..@"]);
        let mut ctx = Context::new(grid.clone());
        let candidates = generate(&mut ctx);
        for &(r, c) in grid.strawberries() {
            let has_singleton = candidates.iter().any(|&id| {
                let b = ctx.arena().get(id).bounds();
                b.top_row == r && b.bottom_row == r && b.top_col == c && b.bottom_col == c
            });
            assert!(has_singleton, "missing singleton candidate for strawberry ({r},{c})");
        }
    }

    #[test]
    fn candidates_sorted_ascending_by_ratio() {
        let grid = grid_from_str(&["@.@"]);
        let mut ctx = Context::new(grid);
        let candidates = generate(&mut ctx);
        for pair in candidates.windows(2) {
            assert!(ctx.arena().get(pair[0]).ratio() <= ctx.arena().get(pair[1]).ratio());
        }
    }

    #[test]
    fn chain_weight_is_strictly_monotonic() {
        // Property 3: within a (top_row, top_col, bottom_col) chain, later
        // (larger bottom_row) emissions have strictly greater weight.
        let grid = grid_from_str(&["@..", "@..", "...", "@.."]);
        let mut ctx = Context::new(grid);
        let candidates = generate(&mut ctx);
        use std::collections::HashMap;
        let mut by_chain: HashMap<(usize, usize, usize), Vec<(usize, usize)>> = HashMap::new();
        for &id in &candidates {
            let b = ctx.arena().get(id).bounds();
            let w = ctx.arena().get(id).weight();
            by_chain.entry((b.top_row, b.top_col, b.bottom_col)).or_default().push((b.bottom_row, w));
        }
        for rows in by_chain.values() {
            let mut sorted = rows.clone();
            sorted.sort_by_key(|&(br, _)| br);
            for pair in sorted.windows(2) {
                assert!(pair[1].1 > pair[0].1, "chain weight not strictly increasing: {sorted:?}");
            }
        }
    }
}
