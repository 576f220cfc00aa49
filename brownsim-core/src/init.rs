//! Random initial conditions.
//!
//! Randomness is always injected: callers pass their own `Rng`, or a seed via
//! [`build_initial_state_seeded`].

use crate::error::{Result, SimError};
use crate::state::{BathState, BrownianState, SimulationParameters, SimulationState};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

pub const DEFAULT_MEAN_SPEED: f64 = 0.1;

/// How initial bath velocities are drawn. Both are zero-centred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityDistribution {
    /// Each component is `N(0, 1) * mean_speed`.
    #[default]
    Gaussian,
    /// Speed exactly `mean_speed` in a uniformly random direction.
    FixedSpeed,
}

impl VelocityDistribution {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, mean_speed: f64) -> DVec2 {
        match self {
            Self::Gaussian => {
                let vx: f64 = StandardNormal.sample(rng);
                let vy: f64 = StandardNormal.sample(rng);
                DVec2::new(vx, vy) * mean_speed
            }
            Self::FixedSpeed => {
                let theta = rng.gen_range(0.0..TAU);
                DVec2::new(theta.cos(), theta.sin()) * mean_speed
            }
        }
    }
}

/// Inputs to initial-condition generation that are not part of the physics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditions {
    /// Scale of the bath velocity distribution (>= 0).
    pub mean_speed: f64,
    pub distribution: VelocityDistribution,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            mean_speed: DEFAULT_MEAN_SPEED,
            distribution: VelocityDistribution::default(),
        }
    }
}

impl InitialConditions {
    pub fn validate(&self) -> Result<()> {
        if !self.mean_speed.is_finite() || self.mean_speed < 0.0 {
            return Err(SimError::invalid(
                "mean_speed",
                format!("must be finite and >= 0, got {}", self.mean_speed),
            ));
        }
        Ok(())
    }
}

/// Build a random initial state.
///
/// Bath positions are uniform in `[0, domain_size)^2` and velocities follow
/// `conditions.distribution`. The Brownian particle starts at
/// [`BROWNIAN_START_POSITION`](crate::state::BROWNIAN_START_POSITION) with
/// [`BROWNIAN_START_VELOCITY`](crate::state::BROWNIAN_START_VELOCITY).
///
/// Errors: `SimError::InvalidParameter` if `parameters` or `conditions` are out of range.
pub fn build_initial_state<R: Rng + ?Sized>(
    parameters: SimulationParameters,
    conditions: &InitialConditions,
    rng: &mut R,
) -> Result<SimulationState> {
    parameters.validate()?;
    conditions.validate()?;
    if conditions.mean_speed == 0.0 {
        log::warn!("mean_speed is 0: the bath starts at rest");
    }

    let n = parameters.molecule_count;
    let size = parameters.domain_size;
    let positions: Vec<DVec2> = (0..n)
        .map(|_| DVec2::new(rng.gen::<f64>() * size, rng.gen::<f64>() * size))
        .collect();
    let velocities: Vec<DVec2> = (0..n)
        .map(|_| conditions.distribution.sample(rng, conditions.mean_speed))
        .collect();

    SimulationState::new(
        parameters,
        BathState::new(positions, velocities),
        BrownianState::default(),
    )
}

/// [`build_initial_state`] with an internal `StdRng`, seeded from `seed` or
/// from OS entropy when `None`.
pub fn build_initial_state_seeded(
    parameters: SimulationParameters,
    conditions: &InitialConditions,
    seed: Option<u64>,
) -> Result<SimulationState> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    build_initial_state(parameters, conditions, &mut rng)
}
