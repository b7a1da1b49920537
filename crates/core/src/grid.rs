//! Grid module - manages the cell-color matrix
//!
//! The grid is an N x N matrix where each cell is uncolored or holds a palette
//! slot. Uses a flat vector for better cache locality; coordinates are
//! (row, col) with row 0 at the top. Out-of-range coordinates are a caller
//! bug and fail fast.

use colorbleed_types::{decode_cell, encode_cell, Cell};

/// The play grid - N x N cells using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new all-uncolored grid
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Create a grid from encoded rows (0 = uncolored, k = palette slot k-1)
    pub fn from_encoded(rows: &[Vec<u8>]) -> Self {
        let mut grid = Self::new(rows.len());
        grid.reset_from_encoded(rows);
        grid
    }

    /// Calculate flat index from (row, col), failing fast when out of range
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) out of range for {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }

    /// Grid side length in cells
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Set cell at (row, col)
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Number of colored (non-uncolored) cells
    pub fn colored_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Restore the grid from encoded rows without reallocating.
    ///
    /// The rows must match the grid dimensions; level validation guarantees
    /// this for catalog data.
    pub fn reset_from_encoded(&mut self, rows: &[Vec<u8>]) {
        assert_eq!(rows.len(), self.size, "row count must match grid size");
        for (row, codes) in rows.iter().enumerate() {
            assert_eq!(
                codes.len(),
                self.size,
                "row {row} length must match grid size"
            );
            for (col, &code) in codes.iter().enumerate() {
                self.cells[row * self.size + col] = decode_cell(code);
            }
        }
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the grid into `out` as one-byte codes, reusing its buffer
    pub fn write_codes(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|&cell| encode_cell(cell)));
    }
}
