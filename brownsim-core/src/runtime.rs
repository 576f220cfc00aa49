use crate::collision::resolve_collisions;
use crate::integrator;
use crate::state::SimulationState;
use crate::trajectory::Trajectory;

/// Snapshots reserved up front. Longer runs grow the trajectory as they go.
const MAX_PREALLOCATED_SNAPSHOTS: usize = 4096;

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// 1-based number of the step just taken.
    pub step: usize,
    /// Molecules that collided with the Brownian particle during the step.
    pub collisions: usize,
}

/// Advance `state` by one time step: resolve collisions, then integrate and
/// reflect at the walls. Returns the number of collisions.
pub fn step_simulation(state: &mut SimulationState) -> usize {
    let params = state.parameters;
    let collisions = resolve_collisions(
        &mut state.bath,
        &mut state.brownian,
        params.molecule_mass,
        params.brownian_mass,
    );
    integrator::step(
        &mut state.bath,
        &mut state.brownian,
        params.time_step,
        params.domain_size,
    );
    collisions
}

/// Drives a run. Owns the live state exclusively until [`Stepper::run`]
/// hands back the recorded trajectory.
#[derive(Debug)]
pub struct Stepper {
    state: SimulationState,
    steps_taken: usize,
    record_initial: bool,
}

impl Stepper {
    pub fn new(initial: SimulationState) -> Self {
        Self {
            state: initial,
            steps_taken: 0,
            record_initial: false,
        }
    }

    /// Also record the state before the first step as trajectory index 0.
    pub fn record_initial(mut self, yes: bool) -> Self {
        self.record_initial = yes;
        self
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn into_state(self) -> SimulationState {
        self.state
    }

    pub fn step(&mut self) -> StepReport {
        let collisions = step_simulation(&mut self.state);
        self.steps_taken += 1;
        log::trace!("step {}: {} collision(s)", self.steps_taken, collisions);
        StepReport {
            step: self.steps_taken,
            collisions,
        }
    }

    /// Run exactly `step_count` steps, recording a deep copy of the state
    /// after each one.
    pub fn run(mut self, step_count: usize) -> Trajectory {
        let mut trajectory =
            Trajectory::with_capacity(snapshot_capacity(step_count, self.record_initial));
        if self.record_initial {
            trajectory.push(self.state.clone());
        }

        log::debug!(
            "running {} steps with {} molecules (dt = {})",
            step_count,
            self.state.parameters.molecule_count,
            self.state.parameters.time_step
        );
        let mut total_collisions = 0usize;
        for _ in 0..step_count {
            total_collisions += self.step().collisions;
            trajectory.push(self.state.clone());
        }
        log::debug!(
            "run finished: {} snapshots, {} collisions",
            trajectory.len(),
            total_collisions
        );

        trajectory
    }
}

fn snapshot_capacity(step_count: usize, record_initial: bool) -> usize {
    step_count
        .saturating_add(usize::from(record_initial))
        .min(MAX_PREALLOCATED_SNAPSHOTS)
}

/// Run `step_count` steps from `initial`. Index 0 of the result is the state
/// after the first step.
pub fn run_simulation(initial: SimulationState, step_count: usize) -> Trajectory {
    Stepper::new(initial).run(step_count)
}
