//! World snapshot, the complete drawable state returned from each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete drawable state built after each frame.
///
/// Entity views are sorted by id so two engines stepped identically
/// serialize to identical JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub towers: Vec<TowerView>,
    pub hostiles: Vec<HostileView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events raised during this frame, drained on snapshot build.
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
}

/// A tower as the render pass sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    /// Entity id bits, stable for the entity's lifetime.
    pub id: u64,
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    /// Engagement range for the range-ring overlay.
    pub range: f32,
    /// Cooldown remaining as a fraction of the full duration
    /// (0.0 = ready to fire). Drives the cooldown bar.
    pub cooldown_fraction: f32,
}

/// A hostile unit as the render pass sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileView {
    pub id: u64,
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    /// Facing toward the unit's objective, radians (0 = +X, counter-clockwise).
    pub heading: f32,
    pub health: f32,
}

/// A projectile as the render pass sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub friendly: bool,
}

/// Running totals for the session summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub hostiles_spawned: u32,
    pub hostiles_destroyed: u32,
    pub projectiles_fired: u32,
}
