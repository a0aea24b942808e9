//! World projection: converts between world-space positions and grid cells.
//!
//! The terrain grid spans [-PLAY_HALF_EXTENT, PLAY_HALF_EXTENT] on both
//! axes, so each cell covers WORLD_SPAN / width by WORLD_SPAN / height
//! world units. World origin (0, 0) maps to the grid center.

use glam::Vec2;

use breakwater_core::constants::{PLAY_HALF_EXTENT, WORLD_SPAN};

/// Mapping between world space and grid cells.
#[derive(Debug, Clone, Copy)]
pub struct WorldProjection {
    width: u32,
    height: u32,
    /// World units per cell along x.
    cell_width: f32,
    /// World units per cell along y.
    cell_height: f32,
}

impl WorldProjection {
    /// Create a projection for a grid of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cell_width: WORLD_SPAN / width as f32,
            cell_height: WORLD_SPAN / height as f32,
        }
    }

    /// Convert a world position to the (col, row) of the cell containing it.
    /// Returns None outside the grid span.
    pub fn world_to_cell(&self, pos: Vec2) -> Option<(u32, u32)> {
        let col = ((pos.x + PLAY_HALF_EXTENT) / self.cell_width).floor();
        let row = ((pos.y + PLAY_HALF_EXTENT) / self.cell_height).floor();
        if col < 0.0 || row < 0.0 || col >= self.width as f32 || row >= self.height as f32 {
            return None;
        }
        Some((col as u32, row as u32))
    }

    /// World position of a cell's center.
    pub fn cell_to_world(&self, col: u32, row: u32) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.cell_width - PLAY_HALF_EXTENT,
            (row as f32 + 0.5) * self.cell_height - PLAY_HALF_EXTENT,
        )
    }
}
