//! Per-cycle registry of room assignments.
//!
//! # Lifecycle
//!
//! 1. [`refresh`](AssignmentTracker::refresh) empties the registry at cycle start.
//! 2. [`init`](AssignmentTracker::init) re-registers workers already executing
//!    a repair task, so they count against room caps.
//! 3. [`register_worker_assignment`](AssignmentTracker::register_worker_assignment)
//!    commits newly planned workers.
//!
//! A worker is listed under at most one room. Registering it under a
//! second room moves it there.

use std::collections::HashMap;

use crate::models::{Colony, RoomName, WorkerUnit};

/// Room → ordered worker ids, scoped to one planning cycle.
#[derive(Debug, Clone, Default)]
pub struct AssignmentTracker {
    assignments: HashMap<RoomName, Vec<String>>,
}

impl AssignmentTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every assignment.
    pub fn refresh(&mut self) {
        self.assignments.clear();
    }

    /// Registers every colony worker currently executing a repair task
    /// under the room its task targets.
    pub fn init(&mut self, colony: &Colony) {
        for worker in colony.repairing_workers() {
            if let Some(room) = worker.repair_room() {
                self.register_worker_assignment(worker, room);
            }
        }
        tracing::debug!(
            colony = %colony.name,
            assigned = self.total_assigned(),
            "assignment registry rebuilt from active repair tasks"
        );
    }

    /// Adds `worker` to `room` unless already listed there.
    ///
    /// Returns `true` if the registry changed.
    pub fn register_worker_assignment(&mut self, worker: &WorkerUnit, room: RoomName) -> bool {
        if self.is_assigned(&worker.id, room) {
            return false;
        }

        if let Some(previous) = self.room_of(&worker.id) {
            tracing::debug!(worker = %worker.id, from = %previous, to = %room, "moving paver assignment");
            if let Some(ids) = self.assignments.get_mut(&previous) {
                ids.retain(|id| *id != worker.id);
                if ids.is_empty() {
                    self.assignments.remove(&previous);
                }
            }
        }

        self.assignments.entry(room).or_default().push(worker.id.clone());
        tracing::debug!(worker = %worker.id, room = %room, "registered paver");
        true
    }

    /// Worker ids assigned to `room` (empty if none).
    pub fn assigned_workers(&self, room: RoomName) -> &[String] {
        self.assignments
            .get(&room)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `worker_id` is assigned to `room`.
    pub fn is_assigned(&self, worker_id: &str, room: RoomName) -> bool {
        self.assigned_workers(room).iter().any(|id| id == worker_id)
    }

    /// Room the worker is assigned to, if any.
    pub fn room_of(&self, worker_id: &str) -> Option<RoomName> {
        self.assignments
            .iter()
            .find(|(_, ids)| ids.iter().any(|id| id == worker_id))
            .map(|(room, _)| *room)
    }

    /// Number of workers assigned to `room` other than `worker_id`.
    pub fn other_workers(&self, room: RoomName, worker_id: &str) -> usize {
        self.assigned_workers(room)
            .iter()
            .filter(|id| id.as_str() != worker_id)
            .count()
    }

    /// Total assignments across all rooms.
    pub fn total_assigned(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }
}
