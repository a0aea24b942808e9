//! Terrain system for BREAKWATER.
//!
//! Procedural island generation, land/water queries,
//! and world-to-grid projection.

pub use breakwater_core as core;

pub mod generator;
pub mod grid;
pub mod projection;

// Re-export key types for convenience.
pub use generator::generate_island;
pub use grid::{CellKind, TerrainGrid};
pub use projection::WorldProjection;
