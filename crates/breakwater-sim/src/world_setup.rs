//! Entity bundle factories for spawning simulation entities.
//!
//! Bundles go through `EntityRegistry::add`, which defers spawns that
//! happen while an update pass runs.

use glam::Vec2;
use hecs::EntityBuilder;

use breakwater_core::components::*;
use breakwater_core::constants::*;

/// Bundle for a stationary tower at `position`. Towers start Idle.
pub fn tower_bundle(position: Vec2) -> EntityBuilder {
    let mut bundle = EntityBuilder::new();
    bundle.add(Position(position));
    bundle.add(Hitbox {
        width: TOWER_SIZE,
        height: TOWER_SIZE,
    });
    bundle.add(Active(true));
    bundle.add(Tower {
        range: TOWER_ATTACK_RANGE,
        damage: TOWER_ATTACK_DAMAGE,
        cooldown_secs: TOWER_COOLDOWN_SECS,
        cooldown_remaining: 0.0,
    });
    bundle
}

/// Bundle for a hostile unit spawned at `position`, marching on `target`.
pub fn hostile_bundle(position: Vec2, target: Vec2) -> EntityBuilder {
    let mut bundle = EntityBuilder::new();
    bundle.add(Position(position));
    bundle.add(Hitbox {
        width: HOSTILE_SIZE,
        height: HOSTILE_SIZE,
    });
    bundle.add(Active(true));
    bundle.add(HostileUnit {
        health: HOSTILE_HEALTH,
        speed: HOSTILE_SPEED,
        target,
    });
    bundle
}

/// Bundle for a friendly projectile launched from `origin` toward `aim`.
/// The aim point is frozen here; flight never retargets.
pub fn projectile_bundle(origin: Vec2, aim: Vec2, damage: f32) -> EntityBuilder {
    let mut bundle = EntityBuilder::new();
    bundle.add(Position(origin));
    bundle.add(Hitbox {
        width: PROJECTILE_SIZE,
        height: PROJECTILE_SIZE,
    });
    bundle.add(Active(true));
    bundle.add(Projectile {
        target: aim,
        damage,
        speed: PROJECTILE_SPEED,
        friendly: true,
        lifetime_secs: PROJECTILE_LIFETIME_SECS,
    });
    bundle
}
