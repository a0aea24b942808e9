//! EntityRegistry: the hecs world plus deferred-spawn bookkeeping.

use glam::Vec2;
use hecs::{Entity, EntityBuilder, EntityRef, World};

use breakwater_core::components::{Active, Position};
use breakwater_core::events::SimEvent;
use breakwater_core::state::ScoreView;

use crate::systems;

/// Owns the live entity collection.
///
/// Wraps `hecs::World` with the bookkeeping the frame contract needs:
/// entities added while an update pass is running are buffered and only
/// join the world when the pass ends, so nothing is ever updated in the
/// frame that created it.
pub struct EntityRegistry {
    world: World,
    /// Spawns requested while the update pass ran; flushed when it ends.
    pending: Vec<EntityBuilder>,
    /// Scratch for collect-then-despawn removal.
    despawn_buffer: Vec<Entity>,
    updating: bool,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            pending: Vec::new(),
            despawn_buffer: Vec::new(),
            updating: false,
        }
    }

    /// Add an entity to the registry.
    ///
    /// Outside an update pass the entity joins the world immediately and
    /// its handle is returned. During a pass the spawn is deferred until
    /// the pass ends and None is returned; the entity is absent from the
    /// live view until then and first updates on the next pass.
    pub fn add(&mut self, mut bundle: EntityBuilder) -> Option<Entity> {
        if self.updating {
            self.pending.push(bundle);
            None
        } else {
            Some(self.world.spawn(bundle.build()))
        }
    }

    /// Run one update pass over every live entity.
    ///
    /// Per-kind order: tower combat, then hostile movement, then projectile
    /// kinematics. Projectile launches requested by towers re-enter through
    /// [`Self::add`] while the pass is marked running, so they land in the
    /// pending buffer. Entities that deactivate during the pass are
    /// despawned before the buffer flushes.
    pub fn update_all(&mut self, dt: f32, events: &mut Vec<SimEvent>, score: &mut ScoreView) {
        self.begin_pass();
        let launches = systems::tower_combat::run(&mut self.world, events, score, dt);
        for bundle in launches {
            let _ = self.add(bundle);
        }
        systems::movement::run(&mut self.world, dt);
        systems::kinematics::run(&mut self.world, dt);
        self.purge_inactive();
        self.end_pass();
    }

    /// Remove every entity whose `Active` flag is false.
    /// Collect-then-despawn keeps iteration and removal separate.
    pub fn purge_inactive(&mut self) {
        self.despawn_buffer.clear();
        for (entity, active) in self.world.query_mut::<&Active>() {
            if !active.0 {
                self.despawn_buffer.push(entity);
            }
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }

    /// Nearest live entity to `origin` within `max_distance` that passes
    /// the predicate, together with its position. See [`nearest_where`].
    pub fn query_nearest<F>(
        &self,
        origin: Vec2,
        max_distance: f32,
        predicate: F,
    ) -> Option<(Entity, Vec2)>
    where
        F: FnMut(EntityRef<'_>) -> bool,
    {
        nearest_where(&self.world, origin, max_distance, predicate)
    }

    /// Read-only view of the live entities (the render pass iterates this).
    /// Entities pending from the current pass are not in it yet.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for systems that run between update passes.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Number of live entities.
    pub fn len(&self) -> u32 {
        self.world.len()
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    /// Whether the entity is currently live.
    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    fn begin_pass(&mut self) {
        self.updating = true;
    }

    /// Clear the pass flag and flush deferred spawns into the world.
    fn end_pass(&mut self) {
        self.updating = false;
        for mut bundle in self.pending.drain(..) {
            self.world.spawn(bundle.build());
        }
    }
}

/// Scan `world` for the live entity nearest `origin` that passes
/// `predicate`, at most `max_distance` away (inclusive).
///
/// Inactive entities and entities without a position never match; the
/// predicate only narrows further (by kind, say). The distance comparison
/// against the running best is strict, so on an exact tie the candidate
/// encountered first in iteration order wins. That order is arbitrary but
/// stable for a given world history.
pub fn nearest_where<F>(
    world: &World,
    origin: Vec2,
    max_distance: f32,
    mut predicate: F,
) -> Option<(Entity, Vec2)>
where
    F: FnMut(EntityRef<'_>) -> bool,
{
    let mut best: Option<(Entity, Vec2)> = None;
    let mut best_distance = f32::MAX;

    for entity_ref in world.iter() {
        let entity = entity_ref.entity();
        let Some(active) = entity_ref.get::<&Active>() else {
            continue;
        };
        if !active.0 {
            continue;
        }
        let Some(position) = entity_ref.get::<&Position>() else {
            continue;
        };
        let pos = position.0;
        let distance = origin.distance(pos);
        if distance > max_distance || distance >= best_distance {
            continue;
        }
        if !predicate(entity_ref) {
            continue;
        }
        best = Some((entity, pos));
        best_distance = distance;
    }

    best
}
