//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the entity registry, terrain, and RNG, advances
//! one frame per `step` call, and produces `WorldSnapshot`s. Completely
//! headless (no window or clock dependency), enabling deterministic
//! testing: the caller supplies every frame's delta time.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use breakwater_core::constants::{DEFAULT_GRID_SIZE, SPAWN_INTERVAL_SECS};
use breakwater_core::errors::PlacementError;
use breakwater_core::events::SimEvent;
use breakwater_core::state::{ScoreView, WorldSnapshot};
use breakwater_core::types::SimTime;
use breakwater_terrain::{generate_island, TerrainGrid, WorldProjection};

use crate::registry::EntityRegistry;
use crate::systems;
use crate::systems::spawner::SpawnTimer;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same terrain, same spawns.
    pub seed: u64,
    /// Terrain grid width in cells.
    pub grid_width: u32,
    /// Terrain grid height in cells.
    pub grid_height: u32,
    /// Seconds between hostile spawns.
    pub spawn_interval_secs: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            grid_width: DEFAULT_GRID_SIZE,
            grid_height: DEFAULT_GRID_SIZE,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
        }
    }
}

/// The simulation engine. Owns the registry, terrain, and all sim state.
pub struct SimulationEngine {
    registry: EntityRegistry,
    terrain: TerrainGrid,
    projection: WorldProjection,
    time: SimTime,
    rng: ChaCha8Rng,
    spawn_timer: SpawnTimer,
    events: Vec<SimEvent>,
    score: ScoreView,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    /// Terrain is generated up front from the seeded RNG.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let terrain = generate_island(config.grid_width, config.grid_height, &mut rng);
        let projection = WorldProjection::new(config.grid_width, config.grid_height);
        Self {
            registry: EntityRegistry::new(),
            terrain,
            projection,
            time: SimTime::default(),
            rng,
            spawn_timer: SpawnTimer::with_interval(config.spawn_interval_secs),
            events: Vec::new(),
            score: ScoreView::default(),
        }
    }

    /// Advance the simulation by one frame of `dt` seconds and return the
    /// resulting snapshot.
    pub fn step(&mut self, dt: f32) -> WorldSnapshot {
        // 1. Timed spawning (direct add, so new units update this frame)
        systems::spawner::run(
            &mut self.registry,
            &mut self.rng,
            &mut self.spawn_timer,
            &mut self.events,
            &mut self.score,
            dt,
        );
        // 2. Update pass over every live entity
        self.registry
            .update_all(dt, &mut self.events, &mut self.score);
        // 3. Projectile-hostile collision resolution
        systems::collision::run(self.registry.world_mut(), &mut self.events, &mut self.score);
        // 4. End-of-frame purge of what collision deactivated
        self.registry.purge_inactive();
        // 5. Advance time and publish the drawable state
        self.time.advance(dt);
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(self.registry.world(), &self.time, events, &self.score)
    }

    /// Request a tower at an exact world position.
    ///
    /// The position must project into the terrain grid and the cell under
    /// it must be land; otherwise the request is refused and the world is
    /// left untouched.
    pub fn place_tower(&mut self, position: Vec2) -> Result<(), PlacementError> {
        let (col, row) = self
            .projection
            .world_to_cell(position)
            .ok_or(PlacementError::OutOfBounds)?;
        if self.terrain.is_water(col as i32, row as i32) {
            return Err(PlacementError::OnWater);
        }

        // Placement keeps the exact requested position; only the land
        // check works in cells.
        let _ = self.registry.add(world_setup::tower_bundle(position));
        self.events.push(SimEvent::TowerPlaced { position });
        Ok(())
    }

    /// The generated island. Static for the life of the engine; the render
    /// pass draws it cell by cell.
    pub fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    /// World-to-grid mapping used for placement and rendering.
    pub fn projection(&self) -> &WorldProjection {
        &self.projection
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only view of the live entities.
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Mutable registry access for scenario setup in tests.
    #[cfg(test)]
    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    /// Running score totals.
    #[cfg(test)]
    pub fn score(&self) -> ScoreView {
        self.score
    }
}
