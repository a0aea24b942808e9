//! TerrainGrid: generated island map with land/water queries.

/// What a single terrain cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Land,
    Water,
}

/// Generated terrain grid.
///
/// Cells are stored row-major (index = row * width + col). Queries take
/// signed coordinates so callers can probe outside the grid without
/// pre-checking bounds; everything out there is water.
#[derive(Debug, Clone)]
pub struct TerrainGrid {
    width: u32,
    height: u32,
    cells: Vec<CellKind>,
}

impl TerrainGrid {
    /// Create a TerrainGrid from pre-generated cells.
    pub fn new(width: u32, height: u32, cells: Vec<CellKind>) -> Self {
        debug_assert_eq!(cells.len(), (width * height) as usize);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether the cell at (col, row) is land.
    /// Any coordinate outside the grid reports false.
    pub fn is_land(&self, col: i32, row: i32) -> bool {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return false;
        }
        self.cells[(row as u32 * self.width + col as u32) as usize] == CellKind::Land
    }

    /// Check whether the cell at (col, row) is water. Exact negation of
    /// `is_land`, so coordinates outside the grid report true.
    pub fn is_water(&self, col: i32, row: i32) -> bool {
        !self.is_land(col, row)
    }

    /// Fraction of in-grid cells that are land.
    pub fn land_fraction(&self) -> f32 {
        if self.cells.is_empty() {
            return 0.0;
        }
        let land = self.cells.iter().filter(|c| **c == CellKind::Land).count();
        land as f32 / self.cells.len() as f32
    }
}
