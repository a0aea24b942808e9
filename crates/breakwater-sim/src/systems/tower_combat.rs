//! Tower combat system: cooldown decay, target selection, projectile launch.

use glam::Vec2;
use hecs::{Entity, EntityBuilder, World};

use breakwater_core::components::{Active, HostileUnit, Position, Tower};
use breakwater_core::events::SimEvent;
use breakwater_core::state::ScoreView;

use crate::registry::nearest_where;
use crate::world_setup;

/// Run tower combat for one frame. Returns the projectile bundles to
/// queue; the registry defers them until the pass ends, so a projectile
/// never flies in the frame that launched it.
///
/// Cooldowns decay first, flooring at 0. Every idle tower then looks for
/// the nearest active hostile within its range. A firing tower captures
/// the hostile's position at this instant as the frozen aim point and
/// restarts its cooldown at the full duration, so it fires at most one
/// projectile per frame.
pub fn run(
    world: &mut World,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreView,
    dt: f32,
) -> Vec<EntityBuilder> {
    // 1. Cooldown decay.
    for (_entity, (tower, active)) in world.query_mut::<(&mut Tower, &Active)>() {
        if !active.0 {
            continue;
        }
        tower.cooldown_remaining = (tower.cooldown_remaining - dt).max(0.0);
    }

    // 2. Collect firing solutions with read-only access
    //    (avoid borrow conflicts with hecs).
    let mut shots: Vec<(Entity, Vec2, Vec2, f32)> = Vec::new();
    {
        let mut towers = world.query::<(&Tower, &Position, &Active)>();
        for (entity, (tower, position, active)) in towers.iter() {
            if !active.0 || tower.cooldown_remaining > 0.0 {
                continue;
            }
            let origin = position.0;
            let target = nearest_where(world, origin, tower.range, |e| e.has::<HostileUnit>());
            if let Some((_, aim)) = target {
                shots.push((entity, origin, aim, tower.damage));
            }
        }
    }

    // 3. Apply: restart cooldowns and build the launch bundles.
    let mut launches = Vec::with_capacity(shots.len());
    for (entity, origin, aim, damage) in shots {
        if let Ok(mut tower) = world.get::<&mut Tower>(entity) {
            tower.cooldown_remaining = tower.cooldown_secs;
        }
        launches.push(world_setup::projectile_bundle(origin, aim, damage));
        score.projectiles_fired += 1;
        events.push(SimEvent::TowerFired {
            position: origin,
            target: aim,
        });
    }
    launches
}
