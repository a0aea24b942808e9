//! Core types and definitions for the BREAKWATER simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, state snapshots, events, errors, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod components;
pub mod constants;
pub mod errors;
pub mod events;
pub mod state;
pub mod types;
