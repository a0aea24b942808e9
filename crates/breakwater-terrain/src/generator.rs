//! Island generation: a disc with a noise-roughened coastline.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use breakwater_core::constants::{COAST_NOISE_FACTOR, ISLAND_RADIUS_DIVISOR};

use crate::grid::{CellKind, TerrainGrid};

/// Generate an island terrain grid.
///
/// The island is a disc centered on the grid. A cell is land when its
/// distance to the center is under `base_radius + noise`, where
/// `base_radius = min(width, height) / ISLAND_RADIUS_DIVISOR` and each
/// cell draws an independent noise offset uniform in
/// [0, base_radius * COAST_NOISE_FACTOR). Cells are visited row-major,
/// so one seed always yields one map.
///
/// The center cell sits at distance 0 and is therefore always land.
pub fn generate_island(width: u32, height: u32, rng: &mut ChaCha8Rng) -> TerrainGrid {
    let center_col = (width / 2) as f32;
    let center_row = (height / 2) as f32;
    let base_radius = width.min(height) as f32 / ISLAND_RADIUS_DIVISOR;
    let noise_limit = base_radius * COAST_NOISE_FACTOR;

    let mut cells = Vec::with_capacity((width * height) as usize);
    for row in 0..height {
        for col in 0..width {
            let dx = col as f32 - center_col;
            let dy = row as f32 - center_row;
            let distance = (dx * dx + dy * dy).sqrt();
            let noise = rng.gen_range(0.0..noise_limit);
            cells.push(if distance < base_radius + noise {
                CellKind::Land
            } else {
                CellKind::Water
            });
        }
    }

    TerrainGrid::new(width, height, cells)
}
