//! Collisions between the Brownian particle and bath molecules.
//!
//! Each colliding molecule is treated as two decoupled 1D elastic collisions,
//! one per axis. Molecules are processed in ascending index order and each one
//! sees the Brownian velocity left behind by the previous one.

use crate::state::{BathState, BrownianState, COLLISION_RADIUS};
use glam::DVec2;

/// Post-collision velocities of a 1D elastic collision.
///
/// `v1` belongs to the body of mass `m1` (the molecule), `v2` to the body of
/// mass `m2` (the Brownian particle). Returns `(v1', v2')`.
///
/// Both masses are validated strictly positive when a state is built, so
/// `m1 + m2` can never be zero here.
#[inline]
pub fn elastic_1d(m1: f64, m2: f64, v1: f64, v2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let v1f = ((m1 - m2) / total) * v1 + (2.0 * m2 / total) * v2;
    let v2f = (2.0 * m1 / total) * v1 - ((m1 - m2) / total) * v2;
    (v1f, v2f)
}

/// Apply [`elastic_1d`] to the x axis and then to the y axis.
#[inline]
pub fn elastic_per_axis(m1: f64, m2: f64, v1: DVec2, v2: DVec2) -> (DVec2, DVec2) {
    let (v1x, v2x) = elastic_1d(m1, m2, v1.x, v2.x);
    let (v1y, v2y) = elastic_1d(m1, m2, v1.y, v2.y);
    (DVec2::new(v1x, v1y), DVec2::new(v2x, v2y))
}

/// Indices of molecules strictly closer than [`COLLISION_RADIUS`] to `center`,
/// ascending.
pub fn find_colliding(positions: &[DVec2], center: DVec2) -> Vec<usize> {
    positions
        .iter()
        .enumerate()
        .filter(|(_, p)| p.distance(center) < COLLISION_RADIUS)
        .map(|(i, _)| i)
        .collect()
}

/// Resolve every collision for the current step in place.
///
/// Only velocities change; positions are left for the integrator. Returns the
/// number of molecules that collided.
pub fn resolve_collisions(
    bath: &mut BathState,
    brownian: &mut BrownianState,
    molecule_mass: f64,
    brownian_mass: f64,
) -> usize {
    // The capture set is fixed from pre-collision positions, which velocity
    // updates cannot change.
    let hits = find_colliding(&bath.positions, brownian.position);
    for &i in &hits {
        let (molecule, heavy) =
            elastic_per_axis(molecule_mass, brownian_mass, bath.velocities[i], brownian.velocity);
        bath.velocities[i] = molecule;
        brownian.velocity = heavy;
    }
    hits.len()
}
