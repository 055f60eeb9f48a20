//! Result of one planning cycle.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{RoomName, TaskChain};

/// A worker committed to a room, with its repair chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    /// Committed worker.
    pub worker_id: String,
    /// Room the worker repaves.
    pub room: RoomName,
    /// Repairs to perform. `None` when the worker holds the room but has
    /// nothing it can do right now (e.g. it carries no energy).
    pub chain: Option<TaskChain>,
}

/// Everything decided in one cycle, ready for the executor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CyclePlan {
    /// Cycle the plan was made in.
    pub cycle: u64,
    /// Committed workers in work-pool order.
    pub orders: Vec<WorkOrder>,
    /// Evaluated workers for which no room needs repaving.
    pub idle: Vec<String>,
}

impl CyclePlan {
    /// Creates an empty plan for `cycle`.
    pub fn new(cycle: u64) -> Self {
        Self {
            cycle,
            ..Default::default()
        }
    }

    /// The order for a worker, if it was committed.
    pub fn order_for(&self, worker_id: &str) -> Option<&WorkOrder> {
        self.orders.iter().find(|o| o.worker_id == worker_id)
    }

    /// Committed worker ids grouped by room.
    pub fn workers_by_room(&self) -> BTreeMap<RoomName, Vec<&str>> {
        let mut rooms: BTreeMap<RoomName, Vec<&str>> = BTreeMap::new();
        for order in &self.orders {
            rooms.entry(order.room).or_default().push(order.worker_id.as_str());
        }
        rooms
    }

    /// Energy planned across every chain.
    pub fn total_energy(&self) -> f64 {
        self.orders
            .iter()
            .filter_map(|o| o.chain.as_ref())
            .map(TaskChain::total_energy)
            .sum()
    }

    /// Number of repair tasks across every chain.
    pub fn task_count(&self) -> usize {
        self.orders
            .iter()
            .filter_map(|o| o.chain.as_ref())
            .map(TaskChain::len)
            .sum()
    }
}
