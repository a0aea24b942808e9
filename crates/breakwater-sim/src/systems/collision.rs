//! Collision resolution: friendly projectiles against hostile units.

use glam::Vec2;
use hecs::{Entity, World};

use breakwater_core::components::{Active, Hitbox, HostileUnit, Position, Projectile};
use breakwater_core::events::SimEvent;
use breakwater_core::state::ScoreView;

/// Resolve projectile-hostile collisions for this frame.
///
/// Gather-then-apply: both candidate lists are snapshotted first, then
/// hits are applied in order (avoids borrow conflicts with hecs). Each
/// projectile lands at most one hit per frame, and a hostile destroyed
/// earlier in the pass absorbs nothing further; later projectiles pass
/// it by. The quadratic scan is fine at this entity count.
pub fn run(world: &mut World, events: &mut Vec<SimEvent>, score: &mut ScoreView) {
    let mut projectiles: Vec<(Entity, Vec2, Hitbox, f32)> = Vec::new();
    for (entity, (position, hitbox, projectile, active)) in world
        .query::<(&Position, &Hitbox, &Projectile, &Active)>()
        .iter()
    {
        if active.0 && projectile.friendly {
            projectiles.push((entity, position.0, *hitbox, projectile.damage));
        }
    }

    let mut hostiles: Vec<(Entity, Vec2, Hitbox)> = Vec::new();
    for (entity, (position, hitbox, _hostile, active)) in world
        .query::<(&Position, &Hitbox, &HostileUnit, &Active)>()
        .iter()
    {
        if active.0 {
            hostiles.push((entity, position.0, *hitbox));
        }
    }

    for (projectile_entity, projectile_pos, projectile_box, damage) in projectiles {
        for (hostile_entity, hostile_pos, hostile_box) in &hostiles {
            if !is_active(world, *hostile_entity) {
                continue;
            }
            if !overlaps(projectile_pos, &projectile_box, *hostile_pos, hostile_box) {
                continue;
            }
            apply_damage(world, *hostile_entity, *hostile_pos, damage, events, score);
            deactivate(world, projectile_entity);
            break;
        }
    }
}

/// Axis-aligned bounding-box overlap on box centers. Strict inequalities:
/// boxes that merely touch do not collide.
fn overlaps(a_pos: Vec2, a_box: &Hitbox, b_pos: Vec2, b_box: &Hitbox) -> bool {
    (a_pos.x - b_pos.x).abs() * 2.0 < a_box.width + b_box.width
        && (a_pos.y - b_pos.y).abs() * 2.0 < a_box.height + b_box.height
}

fn is_active(world: &World, entity: Entity) -> bool {
    world.get::<&Active>(entity).map_or(false, |active| active.0)
}

fn deactivate(world: &mut World, entity: Entity) {
    if let Ok(mut active) = world.get::<&mut Active>(entity) {
        active.0 = false;
    }
}

/// Subtract damage from a hostile, clamping health at 0. Reaching exactly
/// 0 deactivates the unit; health is never observable below 0.
fn apply_damage(
    world: &mut World,
    entity: Entity,
    position: Vec2,
    damage: f32,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreView,
) {
    let remaining = match world.get::<&mut HostileUnit>(entity) {
        Ok(mut hostile) => {
            hostile.health = (hostile.health - damage).max(0.0);
            hostile.health
        }
        Err(_) => return,
    };

    if remaining == 0.0 {
        deactivate(world, entity);
        score.hostiles_destroyed += 1;
        events.push(SimEvent::HostileDestroyed { position });
    } else {
        events.push(SimEvent::HostileHit {
            position,
            remaining_health: remaining,
        });
    }
}
