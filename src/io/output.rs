//! Renders solved puzzles into the covering output format:
//! `Cardinality:`, `Cost:`, a `=` rule, the labeled field, a blank line,
//! per puzzle, followed by a trailing `Total Cost:` line.

use std::fmt::Write as _;

use crate::solver::SolvedPuzzle;

/// Renders one solved puzzle's output block (including its trailing
/// blank line).
pub fn render_puzzle(puzzle: &SolvedPuzzle) -> String {
    let grid = &puzzle.grid;
    let mut out = String::new();

    writeln!(out, "Cardinality:{}", puzzle.labels.len()).unwrap();
    writeln!(out, "Cost:{}", puzzle.total_cost).unwrap();
    writeln!(out, "{}", "=".repeat(grid.num_columns())).unwrap();

    let mut cells = vec![vec!['.'; grid.num_columns()]; grid.num_rows()];
    for &(id, label) in &puzzle.labels {
        let bounds = puzzle.arena.get(id).bounds();
        let row_span = bounds.bottom_row - bounds.top_row + 1;
        let col_span = bounds.bottom_col - bounds.top_col + 1;
        for row in cells.iter_mut().skip(bounds.top_row).take(row_span) {
            for cell in row.iter_mut().skip(bounds.top_col).take(col_span) {
                *cell = label;
            }
        }
    }
    for row in &cells {
        let line: String = row.iter().collect();
        writeln!(out, "{line}").unwrap();
    }
    writeln!(out).unwrap();

    out
}

/// Renders every solved puzzle followed by the `Total Cost:` summary line.
pub fn render_all(puzzles: &[SolvedPuzzle]) -> String {
    let mut out = String::new();
    let mut total = 0usize;
    for puzzle in puzzles {
        out.push_str(&render_puzzle(puzzle));
        total += puzzle.total_cost;
    }
    writeln!(out, "Total Cost: {total}").unwrap();
    out
}
