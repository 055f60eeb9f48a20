//! Repair task and task chain model.
//!
//! A repair task restores one road segment. A task chain is the ordered,
//! non-empty manifest handed to the executor for one worker in one cycle.

use serde::{Deserialize, Serialize};

use super::{Position, RoadSegment};

/// A single repair action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairTask {
    /// Road segment to repair.
    pub target_id: String,
    /// Where the road is.
    pub target: Position,
    /// Health missing at planning time.
    pub hits_deficit: u32,
    /// Energy needed to restore full health.
    pub energy_cost: f64,
}

impl RepairTask {
    /// Creates a repair task for `road` at the given repair rate.
    pub fn for_road(road: &RoadSegment, repair_power: f64) -> Self {
        Self {
            target_id: road.id.clone(),
            target: road.pos,
            hits_deficit: road.hits_deficit(),
            energy_cost: road.repair_cost(repair_power),
        }
    }
}

/// An ordered, non-empty sequence of repair tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskChain {
    tasks: Vec<RepairTask>,
}

impl TaskChain {
    /// Composes tasks into a chain. Returns `None` for an empty input.
    pub fn chain(tasks: Vec<RepairTask>) -> Option<Self> {
        if tasks.is_empty() {
            None
        } else {
            Some(Self { tasks })
        }
    }

    /// Tasks in execution order.
    pub fn tasks(&self) -> &[RepairTask] {
        &self.tasks
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the chain holds no tasks. `false` for any chain returned by
    /// [`TaskChain::chain`].
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Targeted road ids in execution order.
    pub fn target_ids(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.target_id.as_str()).collect()
    }

    /// Total planned energy across all tasks.
    pub fn total_energy(&self) -> f64 {
        self.tasks.iter().map(|t| t.energy_cost).sum()
    }

    /// Consumes the chain, returning its tasks.
    pub fn into_tasks(self) -> Vec<RepairTask> {
        self.tasks
    }
}
