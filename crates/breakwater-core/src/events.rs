//! Events emitted by the simulation for UI and audio feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One-shot notifications raised during a frame and drained into the
/// snapshot that ends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A hostile unit entered at the playable-area edge.
    HostileSpawned { position: Vec2 },
    /// A tower was placed on land.
    TowerPlaced { position: Vec2 },
    /// A tower launched a projectile.
    TowerFired { position: Vec2, target: Vec2 },
    /// A projectile struck a hostile that survived.
    HostileHit {
        position: Vec2,
        remaining_health: f32,
    },
    /// A projectile destroyed a hostile.
    HostileDestroyed { position: Vec2 },
}
