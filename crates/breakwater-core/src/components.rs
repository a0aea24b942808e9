//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space position, axes in [-1, 1] with the island center at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Axis-aligned bounding size used by collision checks and rendering.
/// `Position` is the box center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub width: f32,
    pub height: f32,
}

/// Liveness flag carried by every simulation entity.
///
/// Combat queries, collision, and snapshots skip inactive entities; the
/// registry despawns them by the end of the frame that cleared the flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Active(pub bool);

/// Stationary defensive tower.
///
/// Two states: Idle (`cooldown_remaining == 0`, may fire) and OnCooldown
/// (`cooldown_remaining > 0`, may not). Towers start Idle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower {
    /// Maximum engagement distance in world units.
    pub range: f32,
    /// Damage carried by each projectile this tower launches.
    pub damage: f32,
    /// Full cooldown duration in seconds, restored on every shot.
    pub cooldown_secs: f32,
    /// Seconds until the tower may fire again. Floors at 0.
    pub cooldown_remaining: f32,
}

/// Hostile unit marching toward a fixed objective.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HostileUnit {
    /// Remaining hit points. Clamped to >= 0; 0 means destroyed.
    pub health: f32,
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Objective position, fixed at spawn.
    pub target: Vec2,
}

/// Straight-line projectile. Non-homing: `target` never changes after launch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Aim point, captured from the target's position at launch.
    pub target: Vec2,
    /// Damage applied to the hostile it strikes.
    pub damage: f32,
    /// Flight speed in world units per second.
    pub speed: f32,
    /// Only friendly projectiles collide with hostile units.
    pub friendly: bool,
    /// Remaining flight time in seconds; expires at 0 even short of the target.
    pub lifetime_secs: f32,
}
