//! Hostile movement system: march toward a fixed objective, hold on arrival.

use hecs::World;

use breakwater_core::components::{Active, HostileUnit, Position};
use breakwater_core::constants::HOSTILE_HOLD_DISTANCE;

/// Advance every active hostile toward its objective by
/// `normalize(target - position) * speed * dt`.
///
/// Units closer to the objective than HOSTILE_HOLD_DISTANCE hold position.
/// Arrival is not death: an arrived unit stays active, keeps occupying
/// space, and keeps soaking hits.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (position, hostile, active)) in
        world.query_mut::<(&mut Position, &HostileUnit, &Active)>()
    {
        if !active.0 {
            continue;
        }
        let offset = hostile.target - position.0;
        let distance = offset.length();
        if distance > HOSTILE_HOLD_DISTANCE {
            position.0 += offset / distance * hostile.speed * dt;
        }
    }
}
