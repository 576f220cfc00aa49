use crate::state::{BathState, BrownianState};
use glam::DVec2;

/// Reflect a particle that has left `[0, size]` on either axis.
///
/// The offending velocity component changes sign and the coordinate is
/// clamped onto the wall. The overshoot distance is discarded.
///
/// `size` is positive for any validated state. A non-positive `size` does not
/// panic; the coordinate just ends up at `size`.
#[inline]
pub fn reflect_into_domain(pos: &mut DVec2, vel: &mut DVec2, size: f64) {
    if pos.x < 0.0 || pos.x > size {
        vel.x = -vel.x;
        pos.x = pos.x.max(0.0).min(size);
    }
    if pos.y < 0.0 || pos.y > size {
        vel.y = -vel.y;
        pos.y = pos.y.max(0.0).min(size);
    }
}

/// Advance every particle by `dt` with explicit Euler (`x += v*dt`), then
/// apply the reflective walls of the `[0, domain_size]^2` box.
pub fn step(bath: &mut BathState, brownian: &mut BrownianState, dt: f64, domain_size: f64) {
    for (pos, vel) in bath.positions.iter_mut().zip(bath.velocities.iter_mut()) {
        *pos += *vel * dt;
        reflect_into_domain(pos, vel, domain_size);
    }

    brownian.position += brownian.velocity * dt;
    reflect_into_domain(&mut brownian.position, &mut brownian.velocity, domain_size);
}
