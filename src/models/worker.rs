//! Worker unit model.
//!
//! Workers carry energy up to a fixed capacity and may be in the middle
//! of a task. The scheduler never rewrites a worker's task; it hands back
//! a [`TaskChain`](super::TaskChain) for the executor to apply.

use serde::{Deserialize, Serialize};

use super::{Position, RoomName};

/// Task name used by workers currently repairing a structure.
pub const REPAIR_TASK: &str = "repair";

/// The task a worker is executing right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentTask {
    /// Task kind (e.g. `"repair"`, `"harvest"`).
    pub name: String,
    /// Where the task takes place.
    pub target: Position,
}

impl CurrentTask {
    /// Creates a task descriptor.
    pub fn new(name: impl Into<String>, target: Position) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }

    /// Creates a repair task descriptor.
    pub fn repair(target: Position) -> Self {
        Self::new(REPAIR_TASK, target)
    }
}

/// A mobile worker from the colony's general work pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerUnit {
    /// Stable worker identifier.
    pub id: String,
    /// Maximum energy the worker can carry.
    pub carry_capacity: u32,
    /// Energy currently carried.
    pub energy: u32,
    /// Task in progress, if any.
    pub task: Option<CurrentTask>,
}

impl WorkerUnit {
    /// Creates an idle, empty worker.
    pub fn new(id: impl Into<String>, carry_capacity: u32) -> Self {
        Self {
            id: id.into(),
            carry_capacity,
            energy: 0,
            task: None,
        }
    }

    /// Sets the carried energy.
    pub fn with_energy(mut self, energy: u32) -> Self {
        self.energy = energy;
        self
    }

    /// Sets the current task.
    pub fn with_task(mut self, task: CurrentTask) -> Self {
        self.task = Some(task);
        self
    }

    /// Whether the worker is executing a repair task.
    pub fn is_repairing(&self) -> bool {
        self.task.as_ref().is_some_and(|t| t.name == REPAIR_TASK)
    }

    /// Room targeted by the current repair task.
    pub fn repair_room(&self) -> Option<RoomName> {
        self.task
            .as_ref()
            .filter(|t| t.name == REPAIR_TASK)
            .map(|t| t.target.room)
    }
}
