use crate::error::{Result, SimError};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Capture radius around the Brownian particle. A molecule strictly closer
/// than this collides with it.
pub const COLLISION_RADIUS: f64 = 0.01;

pub const DEFAULT_MOLECULE_COUNT: usize = 10_000;
pub const DEFAULT_MOLECULE_MASS: f64 = 2.0;
pub const DEFAULT_BROWNIAN_MASS: f64 = 1.0;
pub const DEFAULT_DOMAIN_SIZE: f64 = 1.0;
pub const DEFAULT_TIME_STEP: f64 = 0.01;

/// Where the Brownian particle starts in a generated initial state.
pub const BROWNIAN_START_POSITION: DVec2 = DVec2::new(0.5, 0.5);
/// Initial velocity of the Brownian particle in a generated initial state.
pub const BROWNIAN_START_VELOCITY: DVec2 = DVec2::new(0.1, 0.1);

/// Immutable scalar configuration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    pub molecule_count: usize,
    pub molecule_mass: f64,
    pub brownian_mass: f64,
    /// Side length of the square domain `[0, domain_size]^2`.
    pub domain_size: f64,
    pub time_step: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            molecule_count: DEFAULT_MOLECULE_COUNT,
            molecule_mass: DEFAULT_MOLECULE_MASS,
            brownian_mass: DEFAULT_BROWNIAN_MASS,
            domain_size: DEFAULT_DOMAIN_SIZE,
            time_step: DEFAULT_TIME_STEP,
        }
    }
}

impl SimulationParameters {
    /// Check every scalar is in range.
    ///
    /// Errors:
    /// - `SimError::InvalidParameter` if `molecule_count` is zero or any mass,
    ///   the domain size or the time step is non-positive or non-finite.
    pub fn validate(&self) -> Result<()> {
        if self.molecule_count == 0 {
            return Err(SimError::invalid("molecule_count", "must be > 0"));
        }
        check_positive("molecule_mass", self.molecule_mass)?;
        check_positive("brownian_mass", self.brownian_mass)?;
        check_positive("domain_size", self.domain_size)?;
        check_positive("time_step", self.time_step)?;
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SimError::invalid(
            name,
            format!("must be finite and > 0, got {value}"),
        ));
    }
    Ok(())
}

/// The bath of light molecules, stored as two index-aligned contiguous arrays.
///
/// `velocities[i]` always belongs to the molecule at `positions[i]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BathState {
    pub positions: Vec<DVec2>,
    pub velocities: Vec<DVec2>,
}

impl BathState {
    pub fn new(positions: Vec<DVec2>, velocities: Vec<DVec2>) -> Self {
        Self {
            positions,
            velocities,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// The single heavy tracked particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrownianState {
    pub position: DVec2,
    pub velocity: DVec2,
}

impl BrownianState {
    pub fn new(position: DVec2, velocity: DVec2) -> Self {
        Self { position, velocity }
    }
}

impl Default for BrownianState {
    fn default() -> Self {
        Self::new(BROWNIAN_START_POSITION, BROWNIAN_START_VELOCITY)
    }
}

/// Full physical state of a run.
///
/// Only [`SimulationState::new`] can build one, so every state that reaches
/// the stepper has been validated. Deserialization goes through the same
/// checks. Cloning is a deep copy, which is what the stepper relies on when
/// it records snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StateRecord")]
pub struct SimulationState {
    pub(crate) parameters: SimulationParameters,
    pub(crate) bath: BathState,
    pub(crate) brownian: BrownianState,
}

/// Unchecked wire form of [`SimulationState`].
#[derive(Deserialize)]
struct StateRecord {
    parameters: SimulationParameters,
    bath: BathState,
    brownian: BrownianState,
}

impl TryFrom<StateRecord> for SimulationState {
    type Error = SimError;

    fn try_from(record: StateRecord) -> Result<Self> {
        Self::new(record.parameters, record.bath, record.brownian)
    }
}

impl SimulationState {
    /// Assemble a state from explicit parts.
    ///
    /// Errors:
    /// - `SimError::InvalidParameter` if `parameters` fail validation.
    /// - `SimError::ShapeMismatch` if the bath arrays disagree with `molecule_count`.
    /// - `SimError::NonFinite` if any position or velocity coordinate is NaN/inf.
    pub fn new(
        parameters: SimulationParameters,
        bath: BathState,
        brownian: BrownianState,
    ) -> Result<Self> {
        parameters.validate()?;
        if bath.positions.len() != parameters.molecule_count
            || bath.velocities.len() != parameters.molecule_count
        {
            return Err(SimError::ShapeMismatch {
                expected: parameters.molecule_count,
                positions: bath.positions.len(),
                velocities: bath.velocities.len(),
            });
        }
        if let Some(i) = bath.positions.iter().position(|p| !p.is_finite()) {
            return Err(SimError::NonFinite {
                what: format!("bath position {i}"),
            });
        }
        if let Some(i) = bath.velocities.iter().position(|v| !v.is_finite()) {
            return Err(SimError::NonFinite {
                what: format!("bath velocity {i}"),
            });
        }
        if !brownian.position.is_finite() {
            return Err(SimError::NonFinite {
                what: "brownian position".into(),
            });
        }
        if !brownian.velocity.is_finite() {
            return Err(SimError::NonFinite {
                what: "brownian velocity".into(),
            });
        }
        Ok(Self {
            parameters,
            bath,
            brownian,
        })
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    pub fn bath(&self) -> &BathState {
        &self.bath
    }

    pub fn brownian(&self) -> &BrownianState {
        &self.brownian
    }

    /// Take the state apart, e.g. to edit it and rebuild through [`SimulationState::new`].
    pub fn into_parts(self) -> (SimulationParameters, BathState, BrownianState) {
        (self.parameters, self.bath, self.brownian)
    }

    /// True if every bath and Brownian coordinate lies in `[0, domain_size]`.
    pub fn is_contained(&self) -> bool {
        let size = self.parameters.domain_size;
        let inside = |p: &DVec2| (0.0..=size).contains(&p.x) && (0.0..=size).contains(&p.y);
        self.bath.positions.iter().all(inside) && inside(&self.brownian.position)
    }
}
