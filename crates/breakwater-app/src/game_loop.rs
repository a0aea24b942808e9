//! Real-time frame loop: paces the engine at a target cadence and logs
//! the events each frame raises.
//!
//! The engine itself is clock-free; this loop measures real elapsed time
//! with `Instant` and feeds it in as each frame's delta.

use std::time::{Duration, Instant};

use tracing::info;

use breakwater_core::events::SimEvent;
use breakwater_core::state::WorldSnapshot;
use breakwater_sim::engine::SimulationEngine;

/// Target frame rate of the runner loop.
const FRAME_RATE: u32 = 60;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// How far the schedule may slip before it resets instead of catching up.
const CATCH_UP_LIMIT: Duration = Duration::from_secs(1);

/// Run the engine in real time until `duration_secs` of simulated time
/// have elapsed. Returns the final frame's snapshot.
pub fn run(mut engine: SimulationEngine, duration_secs: f32) -> WorldSnapshot {
    let mut last_snapshot = None;
    let mut next_frame_time = Instant::now();
    let mut previous_frame = Instant::now();

    while engine.time().elapsed_secs < duration_secs {
        // 1. Measure the real time this frame covers
        let now = Instant::now();
        let dt = (now - previous_frame).as_secs_f32();
        previous_frame = now;

        // 2. Advance the simulation
        let snapshot = engine.step(dt);
        log_events(&snapshot.events);
        last_snapshot = Some(snapshot);

        // 3. Sleep until the next frame is due
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > CATCH_UP_LIMIT {
            // Too far behind; reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }

    last_snapshot.unwrap_or_default()
}

fn log_events(events: &[SimEvent]) {
    for event in events {
        match event {
            SimEvent::HostileSpawned { position } => info!(%position, "hostile spawned"),
            SimEvent::TowerPlaced { position } => info!(%position, "tower placed"),
            SimEvent::TowerFired { position, target } => {
                info!(%position, %target, "tower fired")
            }
            SimEvent::HostileHit {
                position,
                remaining_health,
            } => info!(%position, remaining_health, "hostile hit"),
            SimEvent::HostileDestroyed { position } => info!(%position, "hostile destroyed"),
        }
    }
}
