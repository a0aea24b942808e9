//! Fundamental simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
///
/// The simulation never reads a clock. The caller owns the clock and
/// supplies each frame's delta time; this struct only accumulates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Completed frame count (increments by 1 each frame).
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}

/// Heading from one point toward another, in radians
/// (0 = +X, counter-clockwise).
pub fn heading(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}
