//! Simulation engine for BREAKWATER.
//!
//! Owns the entity registry, advances the world one caller-timed frame at
//! a time, and produces WorldSnapshots for the render pass.

pub mod engine;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use breakwater_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use registry::EntityRegistry;

#[cfg(test)]
mod tests;
