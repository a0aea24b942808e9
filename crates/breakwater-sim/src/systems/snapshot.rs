//! Snapshot system: builds the drawable world state after each frame.

use hecs::World;

use breakwater_core::components::{Active, Hitbox, HostileUnit, Position, Projectile, Tower};
use breakwater_core::events::SimEvent;
use breakwater_core::state::{HostileView, ProjectileView, ScoreView, TowerView, WorldSnapshot};
use breakwater_core::types::{heading, SimTime};

/// Build a WorldSnapshot from the current world state.
///
/// Read-only. Views are sorted by entity id so identical worlds always
/// serialize to identical JSON.
pub fn build(
    world: &World,
    time: &SimTime,
    events: Vec<SimEvent>,
    score: &ScoreView,
) -> WorldSnapshot {
    let mut towers = Vec::new();
    for (entity, (tower, position, hitbox, active)) in world
        .query::<(&Tower, &Position, &Hitbox, &Active)>()
        .iter()
    {
        if !active.0 {
            continue;
        }
        let cooldown_fraction = if tower.cooldown_secs > 0.0 {
            tower.cooldown_remaining / tower.cooldown_secs
        } else {
            0.0
        };
        towers.push(TowerView {
            id: entity.to_bits().get(),
            position: position.0,
            width: hitbox.width,
            height: hitbox.height,
            range: tower.range,
            cooldown_fraction,
        });
    }
    towers.sort_by_key(|view| view.id);

    let mut hostiles = Vec::new();
    for (entity, (hostile, position, hitbox, active)) in world
        .query::<(&HostileUnit, &Position, &Hitbox, &Active)>()
        .iter()
    {
        if !active.0 {
            continue;
        }
        hostiles.push(HostileView {
            id: entity.to_bits().get(),
            position: position.0,
            width: hitbox.width,
            height: hitbox.height,
            heading: heading(position.0, hostile.target),
            health: hostile.health,
        });
    }
    hostiles.sort_by_key(|view| view.id);

    let mut projectiles = Vec::new();
    for (entity, (projectile, position, hitbox, active)) in world
        .query::<(&Projectile, &Position, &Hitbox, &Active)>()
        .iter()
    {
        if !active.0 {
            continue;
        }
        projectiles.push(ProjectileView {
            id: entity.to_bits().get(),
            position: position.0,
            width: hitbox.width,
            height: hitbox.height,
            friendly: projectile.friendly,
        });
    }
    projectiles.sort_by_key(|view| view.id);

    WorldSnapshot {
        time: *time,
        towers,
        hostiles,
        projectiles,
        events,
        score: *score,
    }
}
