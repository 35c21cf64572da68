//! Phase 3: local search over joins. Repeatedly replaces two cover
//! members with their rectangular hull, reclassifying every other
//! member's intersection with that hull to preserve disjointness and
//! cardinality non-increase, choosing the most-improving join at each
//! step.

use crate::arena::RectId;
use crate::context::Context;
use crate::shade::{join_rectangles, Shade};
use crate::slice::{classify, IntersectionKind};

/// Runs local search to completion, mutating `cover` in place. Terminates
/// because each applied join either strictly decreases total cost or
/// strictly decreases cover cardinality, and cardinality is bounded below
/// by zero.
pub fn local_search(ctx: &mut Context, cover: &mut Vec<RectId>, k: usize) {
    loop {
        if cover.len() < 2 {
            return;
        }
        match best_shade(ctx, cover) {
            Some(shade) if shade.penalty <= 0 || cover.len() > k => {
                apply_shade(cover, &shade);
            }
            _ => return,
        }
    }
}

/// Builds a Shade for every unordered pair in `cover`, retains the ones
/// whose slice set contains no `Increasing` kind, and returns the one with
/// the lowest `(penalty, envelope.len())`.
fn best_shade(ctx: &mut Context, cover: &[RectId]) -> Option<Shade> {
    let mut best: Option<Shade> = None;

    for i in 0..cover.len() {
        for j in (i + 1)..cover.len() {
            let r1 = cover[i];
            let r2 = cover[j];
            if let Some(shade) = build_shade(ctx, cover, i, j, r1, r2) {
                let better = match &best {
                    None => true,
                    Some(b) => shade.is_better_than(b),
                };
                if better {
                    best = Some(shade);
                }
            }
        }
    }

    best
}

fn build_shade(ctx: &mut Context, cover: &[RectId], i: usize, j: usize, r1: RectId, r2: RectId) -> Option<Shade> {
    let join = join_rectangles(ctx, r1, r2);

    let mut envelope = Vec::new();
    let mut penumbra = Vec::new();

    for (idx, &r3) in cover.iter().enumerate() {
        if idx == i || idx == j {
            continue;
        }
        let slice = classify(ctx, join, r3);
        match slice.kind {
            IntersectionKind::Void => {}
            IntersectionKind::Decreasing => envelope.push(r3),
            IntersectionKind::NonIncreasing => {
                let bounds = slice.residual.expect("NonIncreasing slice always carries residual bounds");
                let weight = ctx.grid().weight(bounds.top_row, bounds.top_col, bounds.bottom_row, bounds.bottom_col);
                let residual_id = ctx.arena_mut().alloc(bounds, weight);
                let num_columns = ctx.num_columns();
                ctx.arena_mut().ensure_span(residual_id, num_columns);
                penumbra.push((r3, residual_id));
            }
            IntersectionKind::Increasing => return None, // cardinality would grow
        }
    }

    let cost_r1 = ctx.arena().get(r1).cost() as i64;
    let cost_r2 = ctx.arena().get(r2).cost() as i64;
    let cost_join = ctx.arena().get(join).cost() as i64;
    let envelope_cost: i64 = envelope.iter().map(|&e| ctx.arena().get(e).cost() as i64).sum();
    let area_saved: i64 = penumbra.iter()
        .map(|&(orig, residual)| (ctx.arena().get(orig).area() - ctx.arena().get(residual).area()) as i64)
        .sum();

    let penalty = cost_join - (cost_r1 + cost_r2 + envelope_cost + area_saved);
    Some(Shade { r1, r2, join, envelope, penumbra, penalty })
}

/// Removes `r1`, `r2`, and every envelope member from `cover`; replaces
/// every penumbra original with its residual in place; appends `join`.
fn apply_shade(cover: &mut Vec<RectId>, shade: &Shade) {
    let mut removed = vec![shade.r1, shade.r2];
    removed.extend(shade.envelope.iter().copied());

    let mut new_cover = Vec::with_capacity(cover.len());
    for &r in cover.iter() {
        if removed.contains(&r) {
            continue;
        }
        if let Some(&(_, residual)) = shade.penumbra.iter().find(|&&(original, _)| original == r) {
            new_cover.push(residual);
        } else {
            new_cover.push(r);
        }
    }
    new_cover.push(shade.join);
    *cover = new_cover;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::grid::Grid;
    use crate::matcher::greedy_cover;

    fn grid_from_str(rows: &[&str]) -> Grid {
        Grid::new(rows.iter().map(|row| {
            row.chars().map(|c| if c == '@' { 1 } else { 0 }).collect()
        }).collect())
    }

    fn solve_with_local_search(grid: Grid, k: usize) -> (Context, Vec<RectId>) {
        let mut ctx = Context::new(grid);
        let candidates = generate(&mut ctx);
        let (mut cover, _) = greedy_cover(&mut ctx, candidates);
        local_search(&mut ctx, &mut cover, k);
        (ctx, cover)
    }

    #[test]
    fn scenario_c_joins_two_separated_singletons() {
        // K=2, field `@...@`: joining costs 15, two singletons cost 22.
        let (ctx, cover) = solve_with_local_search(grid_from_str(&["@...@"]), 2);
        assert_eq!(cover.len(), 1);
        let total_cost: usize = cover.iter().map(|&id| ctx.arena().get(id).cost()).sum();
        assert_eq!(total_cost, 15);
    }

    #[test]
    fn scenario_e_disjointness_after_joins() {
        // K=3, strawberries at the four corners of a 3x3 grid.
        let (ctx, cover) = solve_with_local_search(grid_from_str(&["@.@", "...", "@.@"]), 3);
        for i in 0..cover.len() {
            for j in (i + 1)..cover.len() {
                assert!(ctx.arena().span(cover[i]).is_disjoint(ctx.arena().span(cover[j])));
            }
        }
        let num_columns = 3;
        for &(r, c) in ctx.grid().strawberries() {
            let bit = r * num_columns + c;
            assert!(cover.iter().any(|&id| ctx.arena().span(id).contains(bit)));
        }
    }

    #[test]
    fn terminates_when_cardinality_bound_already_met() {
        let (_, cover) = solve_with_local_search(grid_from_str(&["@.@"]), 2);
        assert!(cover.len() <= 2);
    }
}
