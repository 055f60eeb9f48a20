//! Repave decisions: which room, if any, a worker should repair.
//!
//! # Room Verdict
//!
//! 1. If other workers assigned to the room already reach the cap → reject.
//! 2. A worker already assigned there continues while any road is repairable.
//! 3. A fresh worker is accepted if a road is critical, or if the total
//!    repair cost would use at least a full load.
//!
//! # Room Selection
//!
//! A worker mid-repair keeps its current room while the verdict holds.
//! Otherwise the colony's regions are scanned in order and the first
//! active, safe, accepting room wins (first-fit, not best-fit).

use serde::{Deserialize, Serialize};

use super::{AssignmentTracker, PlanningContext, RoadHealthClassifier};
use crate::models::{Region, RoomName, WorkerUnit};

/// Why a room was rejected for a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Other workers already fill the room's cap.
    AtCapacity,
    /// The worker is assigned but nothing is left below the repair threshold.
    NothingToRepair,
    /// No critical roads and too little total damage for a full load.
    InsufficientNeed,
}

/// Outcome of evaluating one worker against one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomVerdict {
    /// Already assigned and work remains.
    Continue,
    /// Not yet assigned and the room justifies a new paver.
    Fresh,
    /// The worker should not repave here.
    Reject(RejectReason),
}

impl RoomVerdict {
    /// Whether the worker should repave the room.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Reject(_))
    }
}

/// Per-worker room decision policy.
///
/// Borrows the cycle's classifier and tracker; build one per query.
#[derive(Debug)]
pub struct RepaveDecisionEngine<'a> {
    classifier: &'a mut RoadHealthClassifier,
    tracker: &'a AssignmentTracker,
    allowed_pavers_per_room: usize,
}

impl<'a> RepaveDecisionEngine<'a> {
    /// Creates an engine over the cycle's classifier and tracker.
    pub fn new(
        classifier: &'a mut RoadHealthClassifier,
        tracker: &'a AssignmentTracker,
        allowed_pavers_per_room: usize,
    ) -> Self {
        Self {
            classifier,
            tracker,
            allowed_pavers_per_room,
        }
    }

    /// Evaluates `worker` against `region`.
    pub fn evaluate_room(
        &mut self,
        ctx: &PlanningContext<'_>,
        worker: &WorkerUnit,
        region: &Region,
    ) -> RoomVerdict {
        let others = self.tracker.other_workers(region.name, &worker.id);
        if others >= self.allowed_pavers_per_room {
            return RoomVerdict::Reject(RejectReason::AtCapacity);
        }

        if self.tracker.is_assigned(&worker.id, region.name) {
            return if self.classifier.repairable_roads(ctx, region).is_empty() {
                RoomVerdict::Reject(RejectReason::NothingToRepair)
            } else {
                RoomVerdict::Continue
            };
        }

        if !self.classifier.critical_roads(ctx, region).is_empty() {
            return RoomVerdict::Fresh;
        }

        let cost = self.classifier.energy_to_repave(ctx, region);
        if cost >= f64::from(worker.carry_capacity) {
            RoomVerdict::Fresh
        } else {
            RoomVerdict::Reject(RejectReason::InsufficientNeed)
        }
    }

    /// Whether `worker` should take on (or keep) repair duty in `region`.
    pub fn worker_should_repave_room(
        &mut self,
        ctx: &PlanningContext<'_>,
        worker: &WorkerUnit,
        region: &Region,
    ) -> bool {
        let verdict = self.evaluate_room(ctx, worker, region);
        tracing::trace!(worker = %worker.id, room = %region.name, ?verdict, "room evaluated");
        verdict.is_accepted()
    }

    /// Picks the room `worker` should repave, or `None` if no room needs it.
    pub fn worker_should_repave(
        &mut self,
        ctx: &PlanningContext<'_>,
        worker: &WorkerUnit,
    ) -> Option<RoomName> {
        if let Some(region) = self.continuity_region(ctx, worker) {
            tracing::debug!(worker = %worker.id, room = %region.name, "continuing repave");
            return Some(region.name);
        }

        for region in &ctx.colony.regions {
            if region.is_workable() && self.worker_should_repave_room(ctx, worker, region) {
                tracing::debug!(worker = %worker.id, room = %region.name, "selected room for repave");
                return Some(region.name);
            }
        }

        tracing::debug!(worker = %worker.id, "no repaving needed");
        None
    }

    /// The room of the worker's current repair task, if it still qualifies.
    fn continuity_region<'c>(
        &mut self,
        ctx: &PlanningContext<'c>,
        worker: &WorkerUnit,
    ) -> Option<&'c Region> {
        let room = worker.repair_room()?;
        let Some(region) = ctx.colony.region(room) else {
            tracing::debug!(worker = %worker.id, room = %room, "repair task targets an unknown room");
            return None;
        };

        if !self.tracker.is_assigned(&worker.id, room) {
            return None;
        }

        self.worker_should_repave_room(ctx, worker, region)
            .then_some(region)
    }
}
