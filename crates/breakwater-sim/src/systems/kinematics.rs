//! Projectile kinematics: straight-line flight, arrival, lifetime expiry.

use hecs::World;

use breakwater_core::components::{Active, Position, Projectile};
use breakwater_core::constants::PROJECTILE_ARRIVAL_EPSILON;

/// Fly every active projectile for one frame.
///
/// A projectile that begins the frame inside the arrival epsilon is spent
/// where it is: it does not move and does not burn lifetime that frame.
/// Otherwise it advances along the fixed aim line and burns `dt` of
/// lifetime, expiring at 0 even if the aim point was never reached.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (position, projectile, active)) in
        world.query_mut::<(&mut Position, &mut Projectile, &mut Active)>()
    {
        if !active.0 {
            continue;
        }
        let offset = projectile.target - position.0;
        let distance = offset.length();
        if distance < PROJECTILE_ARRIVAL_EPSILON {
            active.0 = false;
            continue;
        }
        position.0 += offset / distance * projectile.speed * dt;
        projectile.lifetime_secs -= dt;
        if projectile.lifetime_secs <= 0.0 {
            active.0 = false;
        }
    }
}
