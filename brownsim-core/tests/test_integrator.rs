//! Euler integration and reflective walls

use brownsim_core::integrator::{reflect_into_domain, step};
use brownsim_core::tests::test_helpers::{approx_eq_vec, bath_of};
use brownsim_core::BrownianState;
use glam::DVec2;

#[test]
fn test_reflection_flips_sign_and_clamps() {
    let size = 1.0;
    let eps = 1e-3;
    let mut pos = DVec2::new(size + eps, 0.5);
    let mut vel = DVec2::new(0.7, 0.2);

    reflect_into_domain(&mut pos, &mut vel, size);

    assert_eq!(pos.x, size);
    assert!(vel.x < 0.0);
    assert_eq!(vel.x, -0.7);
    assert_eq!(vel.y, 0.2);
}

#[test]
fn test_step_reflects_bath_and_brownian_alike() {
    let mut bath = bath_of(&[(DVec2::new(0.995, 0.005), DVec2::new(1.0, -1.0))]);
    let mut brownian = BrownianState::new(DVec2::new(0.995, 0.005), DVec2::new(1.0, -1.0));

    step(&mut bath, &mut brownian, 0.01, 1.0);

    assert_eq!(bath.positions[0], DVec2::new(1.0, 0.0));
    assert_eq!(bath.velocities[0], DVec2::new(-1.0, 1.0));
    assert_eq!(brownian.position, DVec2::new(1.0, 0.0));
    assert_eq!(brownian.velocity, DVec2::new(-1.0, 1.0));
}

#[test]
fn test_step_moves_by_velocity_times_dt() {
    let mut bath = bath_of(&[
        (DVec2::new(0.1, 0.2), DVec2::new(0.5, 0.25)),
        (DVec2::new(0.6, 0.6), DVec2::new(-2.0, 0.0)),
    ]);
    let mut brownian = BrownianState::new(DVec2::new(0.5, 0.5), DVec2::new(0.1, 0.1));

    step(&mut bath, &mut brownian, 0.1, 1.0);

    assert!(approx_eq_vec(bath.positions[0], DVec2::new(0.15, 0.225), 1e-12));
    assert!(approx_eq_vec(bath.positions[1], DVec2::new(0.4, 0.6), 1e-12));
    assert!(approx_eq_vec(brownian.position, DVec2::new(0.51, 0.51), 1e-12));
}

#[test]
fn test_large_overshoot_is_clamped_not_mirrored() {
    let mut pos = DVec2::new(-0.4, 3.0);
    let mut vel = DVec2::new(-1.0, 5.0);
    reflect_into_domain(&mut pos, &mut vel, 2.0);
    assert_eq!(pos, DVec2::new(0.0, 2.0));
    assert_eq!(vel, DVec2::new(1.0, -5.0));
}
