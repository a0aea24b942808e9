//! Hostile spawning system: timed arrivals at the playable-area edge.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use breakwater_core::constants::{PLAY_HALF_EXTENT, SPAWN_INTERVAL_SECS};
use breakwater_core::events::SimEvent;
use breakwater_core::state::ScoreView;

use crate::registry::EntityRegistry;
use crate::world_setup;

/// Accumulates frame time and owes one spawn per interval crossing.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    pub interval_secs: f32,
    pub elapsed_secs: f32,
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self::with_interval(SPAWN_INTERVAL_SECS)
    }
}

impl SpawnTimer {
    pub fn with_interval(interval_secs: f32) -> Self {
        Self {
            interval_secs,
            elapsed_secs: 0.0,
        }
    }
}

/// Advance the spawn timer; on expiry spawn one hostile at a random edge
/// point, marching on the island center.
///
/// Runs before the update pass, so a unit spawned here moves in the same
/// frame. The accumulator resets to zero on expiry: an oversized dt still
/// yields exactly one unit.
pub fn run(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    timer: &mut SpawnTimer,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreView,
    dt: f32,
) {
    timer.elapsed_secs += dt;
    if timer.elapsed_secs < timer.interval_secs {
        return;
    }
    timer.elapsed_secs = 0.0;

    let position = random_edge_point(rng);
    let _ = registry.add(world_setup::hostile_bundle(position, Vec2::ZERO));
    score.hostiles_spawned += 1;
    events.push(SimEvent::HostileSpawned { position });
}

/// Uniform point on the boundary of the playable square: one of the four
/// edges with equal probability, then uniform along it.
fn random_edge_point(rng: &mut ChaCha8Rng) -> Vec2 {
    let along = rng.gen_range(-PLAY_HALF_EXTENT..PLAY_HALF_EXTENT);
    match rng.gen_range(0..4u8) {
        0 => Vec2::new(-PLAY_HALF_EXTENT, along),
        1 => Vec2::new(PLAY_HALF_EXTENT, along),
        2 => Vec2::new(along, -PLAY_HALF_EXTENT),
        _ => Vec2::new(along, PLAY_HALF_EXTENT),
    }
}
