//! Per-run context: the grid plus the rectangle arena, passed explicitly
//! through the pipeline instead of living as process globals (see the
//! "Global mutable singletons" design note).

use crate::arena::RectArena;
use crate::grid::Grid;

/// Owns the grid and the rectangle arena for one puzzle solve.
#[derive(Debug)]
pub struct Context {
    grid: Grid,
    arena: RectArena,
}

impl Context {
    /// starts a fresh context for `grid`, with an empty arena
    pub fn new(grid: Grid) -> Self {
        Self { grid, arena: RectArena::new() }
    }

    /// the grid being solved
    pub fn grid(&self) -> &Grid { &self.grid }

    /// shared access to the arena
    pub fn arena(&self) -> &RectArena { &self.arena }

    /// mutable access to the arena (span materialization, allocation)
    pub fn arena_mut(&mut self) -> &mut RectArena { &mut self.arena }

    /// convenience: the grid's column count, used pervasively for span
    /// bit-index arithmetic
    pub fn num_columns(&self) -> usize { self.grid.num_columns() }

    /// disassembles the context into its grid and arena
    pub fn into_parts(self) -> (Grid, RectArena) { (self.grid, self.arena) }
}
