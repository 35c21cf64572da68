//! Orchestrates the full pipeline for one puzzle: the K<=1 convex-hull
//! shortcut, or generator -> greedy matcher -> local search -> labeler.

use crate::arena::{RectArena, RectId};
use crate::context::Context;
use crate::generator::generate;
use crate::grid::Grid;
use crate::label::label_cover;
use crate::matcher::greedy_cover;
use crate::rect::Bounds;
use crate::search::local_search;

/// The solved cover for one puzzle, ready for rendering.
#[derive(Debug)]
pub struct SolvedPuzzle {
    /// the cardinality bound the puzzle was solved under
    pub k: usize,
    /// the puzzle's grid
    pub grid: Grid,
    /// the arena backing every rectangle referenced by `labels`
    pub arena: RectArena,
    /// final cover members paired with their assigned label, in
    /// descending-ratio order
    pub labels: Vec<(RectId, char)>,
    /// sum of `cost` over `labels`
    pub total_cost: usize,
}

/// Solves one puzzle: a grid and its cardinality bound `k`.
pub fn solve(k: usize, grid: Grid) -> SolvedPuzzle {
    let mut ctx = Context::new(grid);

    let cover: Vec<RectId> = if ctx.grid().strawberries().is_empty() {
        Vec::new()
    } else if k <= 1 {
        convex_hull_cover(&mut ctx)
    } else {
        let candidates = generate(&mut ctx);
        let (mut cover, _covering_mask) = greedy_cover(&mut ctx, candidates);
        local_search(&mut ctx, &mut cover, k);
        cover
    };

    let labels = label_cover(ctx.arena(), &cover);
    let total_cost: usize = cover.iter().map(|&id| ctx.arena().get(id).cost()).sum();

    let (grid, arena) = ctx.into_parts();
    SolvedPuzzle { k, grid, arena, labels, total_cost }
}

/// K<=1 fast path: a single rectangle bounded by the min/max strawberry
/// row and column.
fn convex_hull_cover(ctx: &mut Context) -> Vec<RectId> {
    let straws = ctx.grid().strawberries();
    let min_row = straws.iter().map(|&(r, _)| r).min().expect("non-empty strawberries checked by caller");
    let max_row = straws.iter().map(|&(r, _)| r).max().expect("non-empty strawberries checked by caller");
    let min_col = straws.iter().map(|&(_, c)| c).min().expect("non-empty strawberries checked by caller");
    let max_col = straws.iter().map(|&(_, c)| c).max().expect("non-empty strawberries checked by caller");

    let bounds = Bounds { top_row: min_row, top_col: min_col, bottom_row: max_row, bottom_col: max_col };
    let weight = ctx.grid().weight(min_row, min_col, max_row, max_col);
    let id = ctx.arena_mut().alloc(bounds, weight);
    let num_columns = ctx.num_columns();
    ctx.arena_mut().ensure_span(id, num_columns);
    vec![id]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from_str(rows: &[&str]) -> Grid {
        Grid::new(rows.iter().map(|row| {
            row.chars().map(|c| if c == '@' { 1 } else { 0 }).collect()
        }).collect())
    }

    #[test]
    fn scenario_a_k1_single_strawberry() {
        let solved = solve(1, grid_from_str(&["@"]));
        assert_eq!(solved.labels.len(), 1);
        assert_eq!(solved.total_cost, 11);
        assert_eq!(solved.labels[0].1, 'A');
    }

    #[test]
    fn scenario_b_k1_corner_strawberries() {
        let solved = solve(1, grid_from_str(&["@..", "...", "..@"]));
        assert_eq!(solved.labels.len(), 1);
        assert_eq!(solved.total_cost, 19);
        let bounds = solved.arena.get(solved.labels[0].0).bounds();
        assert_eq!(bounds, Bounds { top_row: 0, top_col: 0, bottom_row: 2, bottom_col: 2 });
    }

    #[test]
    fn scenario_d_k1_forces_join_above_optimum() {
        let solved = solve(1, grid_from_str(&["@.@"]));
        assert_eq!(solved.labels.len(), 1);
        assert_eq!(solved.total_cost, 13);
    }

    #[test]
    fn scenario_c_k2_joins_separated_strawberries() {
        let solved = solve(2, grid_from_str(&["@...@"]));
        assert_eq!(solved.labels.len(), 1);
        assert_eq!(solved.total_cost, 15);
    }

    #[test]
    fn cost_equals_sum_of_member_costs() {
        let solved = solve(3, grid_from_str(&["@.@", "...", "@.@"]));
        let recomputed: usize = solved.labels.iter().map(|&(id, _)| solved.arena.get(id).cost()).sum();
        assert_eq!(recomputed, solved.total_cost);
    }

    #[test]
    fn empty_grid_has_empty_cover() {
        let solved = solve(2, grid_from_str(&["...", "..."]));
        assert_eq!(solved.labels.len(), 0);
        assert_eq!(solved.total_cost, 0);
    }
}
