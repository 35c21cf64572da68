//! Grid state: the field matrix, the strawberry coordinate set, and the
//! weight query used throughout the solver.

/// A parsed puzzle field: a `num_rows` x `num_columns` matrix of 0/1 cells,
/// plus the coordinates of every strawberry, for fast iteration without
/// rescanning the matrix.
#[derive(Debug, Clone)]
pub struct Grid {
    num_rows: usize,
    num_columns: usize,
    cells: Vec<u8>,
    strawberries: Vec<(usize, usize)>,
}

impl Grid {
    /// Builds a grid from a row-major `0`/`1` matrix. All rows must have the
    /// same length; this is enforced by the input parser, not here.
    pub fn new(rows: Vec<Vec<u8>>) -> Self {
        let num_rows = rows.len();
        let num_columns = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(num_rows * num_columns);
        let mut strawberries = Vec::new();
        for (r, row) in rows.into_iter().enumerate() {
            debug_assert_eq!(row.len(), num_columns, "ragged grid row");
            for (c, cell) in row.into_iter().enumerate() {
                if cell != 0 {
                    strawberries.push((r, c));
                }
                cells.push(cell);
            }
        }
        Self { num_rows, num_columns, cells, strawberries }
    }

    /// number of rows
    pub fn num_rows(&self) -> usize { self.num_rows }

    /// number of columns
    pub fn num_columns(&self) -> usize { self.num_columns }

    /// coordinates of every strawberry in the grid
    pub fn strawberries(&self) -> &[(usize, usize)] { &self.strawberries }

    /// sum of cell values inside the inclusive rectangle `(top_row, top_col,
    /// bottom_row, bottom_col)`. Naive summation: area is at most 2500, a
    /// prefix-sum table would be premature here.
    pub fn weight(&self, top_row: usize, top_col: usize, bottom_row: usize, bottom_col: usize) -> usize {
        let mut total = 0usize;
        for r in top_row..=bottom_row {
            let row_base = r * self.num_columns;
            for c in top_col..=bottom_col {
                total += self.cells[row_base + c] as usize;
            }
        }
        total
    }
}
