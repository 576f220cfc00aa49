use crate::error::Result;
use crate::state::{SimulationParameters, SimulationState};
use glam::DVec2;
use serde::Serialize;

/// Ordered snapshots produced by a run.
///
/// Snapshots are owned deep copies; iterating does not consume the
/// trajectory, so it can be replayed any number of times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    snapshots: Vec<SimulationState>,
}

/// What a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame<'a> {
    /// Bath positions for a scatter layer, omitted when molecules are hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molecules: Option<&'a [DVec2]>,
    /// Brownian position at this frame. A renderer accumulates these into the path.
    pub brownian: DVec2,
}

#[derive(Serialize)]
struct TrajectoryExport<'a> {
    parameters: Option<&'a SimulationParameters>,
    brownian_path: Vec<DVec2>,
    frames: Vec<Frame<'a>>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(capacity),
        }
    }

    /// Append a snapshot. Trajectories only grow.
    pub fn push(&mut self, snapshot: SimulationState) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SimulationState> {
        self.snapshots.get(index)
    }

    pub fn first(&self) -> Option<&SimulationState> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&SimulationState> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimulationState> {
        self.snapshots.iter()
    }

    pub fn snapshots(&self) -> &[SimulationState] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<SimulationState> {
        self.snapshots
    }

    /// Brownian positions in frame order, ready to draw as a polyline.
    pub fn brownian_path(&self) -> Vec<DVec2> {
        self.snapshots.iter().map(|s| s.brownian.position).collect()
    }

    pub fn frames(&self, show_molecules: bool) -> Vec<Frame<'_>> {
        self.snapshots
            .iter()
            .map(|s| Frame {
                molecules: show_molecules.then_some(s.bath.positions.as_slice()),
                brownian: s.brownian.position,
            })
            .collect()
    }

    /// Serialize the sink-facing view as JSON.
    pub fn to_json(&self, show_molecules: bool) -> Result<String> {
        let export = TrajectoryExport {
            parameters: self.first().map(|s| &s.parameters),
            brownian_path: self.brownian_path(),
            frames: self.frames(show_molecules),
        };
        Ok(serde_json::to_string(&export)?)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a SimulationState;
    type IntoIter = std::slice::Iter<'a, SimulationState>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

impl IntoIterator for Trajectory {
    type Item = SimulationState;
    type IntoIter = std::vec::IntoIter<SimulationState>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.into_iter()
    }
}
