//! Board module - manages the tile grid
//!
//! The board is a `columns x rows` grid where each cell holds a palette color
//! or `None` while pending refill mid-resolve. Stored as a flat vector in
//! row-major order for cache locality.
//! Coordinates: (column, row) with column 0 at the left and row 0 at the top.
//!
//! Out-of-range coordinates are a programming error: every caller works from
//! enumerated valid coordinates, so access asserts instead of returning a
//! recoverable failure.

use match3_types::{Cell, Tile, TileColor};

use crate::rng::{random_color, SimpleRng};

/// The tile grid, dimensions fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: u8,
    rows: u8,
    /// Flat tile storage, row-major order (row * columns + column).
    cells: Vec<Tile>,
}

impl Board {
    /// Create a new board with every tile set to the first palette color.
    pub fn new(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            cells: vec![Tile::default(); usize::from(columns) * usize::from(rows)],
        }
    }

    /// Calculate flat index from (column, row) coordinates.
    #[inline(always)]
    fn index(&self, column: u8, row: u8) -> usize {
        assert!(
            self.contains(column, row),
            "tile coordinate ({column}, {row}) outside {}x{} board",
            self.columns,
            self.rows
        );
        usize::from(row) * usize::from(self.columns) + usize::from(column)
    }

    /// Number of columns.
    pub fn columns(&self) -> u8 {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Check whether a coordinate lies on the board.
    pub fn contains(&self, column: u8, row: u8) -> bool {
        column < self.columns && row < self.rows
    }

    /// Get the tile at (column, row).
    pub fn tile(&self, column: u8, row: u8) -> Tile {
        self.cells[self.index(column, row)]
    }

    /// Get the color at (column, row).
    pub fn color(&self, column: u8, row: u8) -> Cell {
        self.tile(column, row).color
    }

    /// Set the color at (column, row), leaving the shift distance untouched.
    pub fn set_color(&mut self, column: u8, row: u8, color: Cell) {
        let idx = self.index(column, row);
        self.cells[idx].color = color;
    }

    /// Get the gravity-fall distance at (column, row).
    pub fn shift(&self, column: u8, row: u8) -> u8 {
        self.tile(column, row).shift
    }

    /// Set the gravity-fall distance at (column, row).
    pub fn set_shift(&mut self, column: u8, row: u8, shift: u8) {
        let idx = self.index(column, row);
        self.cells[idx].shift = shift;
    }

    /// Exchange the colors of two cells, leaving shift distances in place.
    ///
    /// No adjacency requirement at this layer; callers enforce it where it
    /// matters. Move enumeration relies on this being cheap and touching
    /// nothing beyond the two cells, since it probes hypothetical swaps with
    /// a swap-test-swap-back sequence.
    pub fn swap(&mut self, column1: u8, row1: u8, column2: u8, row2: u8) {
        let a = self.index(column1, row1);
        let b = self.index(column2, row2);
        let color = self.cells[a].color;
        self.cells[a].color = self.cells[b].color;
        self.cells[b].color = color;
    }

    /// Fill every cell with a uniformly sampled color from the palette.
    pub fn randomize(&mut self, rng: &mut SimpleRng, palette_size: u8) {
        for tile in &mut self.cells {
            tile.color = Some(random_color(rng, palette_size));
            tile.shift = 0;
        }
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }

    /// True when no cell is pending refill.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|tile| tile.color.is_some())
    }

    /// Set a color by palette index. Convenient for board setup in tests.
    pub fn set_color_index(&mut self, column: u8, row: u8, index: u8) {
        self.set_color(column, row, TileColor::from_index(index));
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(match3_types::DEFAULT_COLUMNS, match3_types::DEFAULT_ROWS)
    }
}
