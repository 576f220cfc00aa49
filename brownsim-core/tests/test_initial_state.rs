//! Initial state generation and parameter validation

use brownsim_core::state::{BROWNIAN_START_POSITION, BROWNIAN_START_VELOCITY};
use brownsim_core::{
    build_initial_state, build_initial_state_seeded, BathState, BrownianState,
    InitialConditions, SimError, SimulationParameters, SimulationState, VelocityDistribution,
};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn params(count: usize) -> SimulationParameters {
    SimulationParameters {
        molecule_count: count,
        ..SimulationParameters::default()
    }
}

#[test]
fn test_generated_state_shape() {
    let mut rng = StdRng::seed_from_u64(1);
    let state = build_initial_state(params(1000), &InitialConditions::default(), &mut rng)
        .expect("valid");

    assert_eq!(state.bath().positions.len(), 1000);
    assert_eq!(state.bath().velocities.len(), 1000);
    assert_eq!(state.brownian().position, BROWNIAN_START_POSITION);
    assert_eq!(state.brownian().velocity, BROWNIAN_START_VELOCITY);
    assert!(state.is_contained());
}

#[test]
fn test_positions_scale_with_domain() {
    let p = SimulationParameters {
        domain_size: 10.0,
        ..params(2000)
    };
    let state =
        build_initial_state_seeded(p, &InitialConditions::default(), Some(5)).expect("valid");
    let max_x = state.bath().positions.iter().map(|p| p.x).fold(0.0, f64::max);
    assert!(max_x > 1.0 && max_x <= 10.0);
}

#[test]
fn test_zero_mean_speed_gives_resting_bath() {
    let conditions = InitialConditions {
        mean_speed: 0.0,
        distribution: VelocityDistribution::Gaussian,
    };
    let state = build_initial_state_seeded(params(10), &conditions, Some(2)).expect("valid");
    assert!(state.bath().velocities.iter().all(|v| *v == DVec2::ZERO));
}

#[test]
fn test_seed_reproducibility() {
    let conditions = InitialConditions::default();
    let a = build_initial_state_seeded(params(100), &conditions, Some(77)).expect("valid");
    let b = build_initial_state_seeded(params(100), &conditions, Some(77)).expect("valid");
    let c = build_initial_state_seeded(params(100), &conditions, Some(78)).expect("valid");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_invalid_parameters_rejected() {
    let base = params(10);
    let cases = [
        ("molecule_count", SimulationParameters { molecule_count: 0, ..base }),
        ("molecule_mass", SimulationParameters { molecule_mass: 0.0, ..base }),
        ("brownian_mass", SimulationParameters { brownian_mass: -1.0, ..base }),
        ("domain_size", SimulationParameters { domain_size: 0.0, ..base }),
        ("time_step", SimulationParameters { time_step: -0.01, ..base }),
        ("domain_size", SimulationParameters { domain_size: f64::INFINITY, ..base }),
    ];

    for (field, p) in cases {
        let err = build_initial_state_seeded(p, &InitialConditions::default(), Some(0))
            .expect_err("should reject");
        match err {
            SimError::InvalidParameter { name, .. } => assert_eq!(name, field),
            other => panic!("expected InvalidParameter for {}, got {:?}", field, other),
        }
    }
}

#[test]
fn test_invalid_mean_speed_rejected() {
    let conditions = InitialConditions {
        mean_speed: f64::NAN,
        ..InitialConditions::default()
    };
    let err = build_initial_state_seeded(params(10), &conditions, Some(0)).unwrap_err();
    assert!(err.to_string().contains("mean_speed"));
}

#[test]
fn test_explicit_state_validates_parameters() {
    let bath = BathState::new(vec![DVec2::splat(0.5)], vec![DVec2::ZERO]);
    let p = SimulationParameters { time_step: 0.0, ..params(1) };
    let result = SimulationState::new(p, bath, BrownianState::default());
    assert!(matches!(result, Err(SimError::InvalidParameter { name: "time_step", .. })));
}
