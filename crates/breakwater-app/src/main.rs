//! Headless runner: a real-time frame loop around the simulation engine.

use clap::Parser;
use glam::Vec2;
use tracing::{info, warn};

use breakwater_core::constants::SPAWN_INTERVAL_SECS;
use breakwater_sim::engine::{SimConfig, SimulationEngine};

mod game_loop;

#[derive(Parser, Debug)]
#[command(author, version, about = "Breakwater headless defense runner", long_about = None)]
struct Cli {
    /// RNG seed; a fixed seed replays the same island and the same spawns.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Simulated seconds to run before reporting the final score.
    #[arg(long, default_value_t = 60.0)]
    duration: f32,
    /// Seconds between hostile spawns.
    #[arg(long, default_value_t = SPAWN_INTERVAL_SECS)]
    spawn_interval: f32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut engine = SimulationEngine::new(SimConfig {
        seed: cli.seed,
        spawn_interval_secs: cli.spawn_interval,
        ..Default::default()
    });
    info!(
        seed = cli.seed,
        land_fraction = engine.terrain().land_fraction(),
        "island generated"
    );

    // The island center is always land; the session opens with one tower
    // guarding it.
    if let Err(error) = engine.place_tower(Vec2::ZERO) {
        warn!(%error, "initial tower placement refused");
    }

    let last = game_loop::run(engine, cli.duration);
    info!(
        frames = last.time.frame,
        hostiles_spawned = last.score.hostiles_spawned,
        hostiles_destroyed = last.score.hostiles_destroyed,
        projectiles_fired = last.score.projectiles_fired,
        "simulation complete"
    );
}
