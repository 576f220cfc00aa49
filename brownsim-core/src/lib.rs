pub mod collision;
pub mod diagnostics;
pub mod error;
pub mod init;
pub mod integrator;
pub mod runtime;
pub mod state;
pub mod trajectory;

pub use collision::{elastic_1d, resolve_collisions};
pub use diagnostics::format_error;
pub use error::{Result, SimError};
pub use init::{
    build_initial_state, build_initial_state_seeded, InitialConditions, VelocityDistribution,
};
pub use runtime::{run_simulation, step_simulation, StepReport, Stepper};
pub use state::{
    BathState, BrownianState, SimulationParameters, SimulationState, COLLISION_RADIUS,
};
pub use trajectory::{Frame, Trajectory};
