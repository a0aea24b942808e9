//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state; all state lives in components or on
//! the engine.

pub mod collision;
pub mod kinematics;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod tower_combat;
