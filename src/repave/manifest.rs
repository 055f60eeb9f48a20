//! Greedy repair manifest construction.
//!
//! # Algorithm
//!
//! 1. Budget = energy the worker carries.
//! 2. First pick: the nearest (to the colony anchor) repairable road.
//! 3. Each later pick: the first repairable road in the same order that is
//!    untargeted, within range 1 of the previous pick, and affordable with
//!    the remaining budget.
//! 4. Stop when the budget is spent or no road qualifies.
//!
//! The adjacency rule keeps the route walkable without pathfinding. It is
//! a cheap heuristic, not an optimal route.
//!
//! # Complexity
//! O(k * n) for k picks over n repairable roads.

use std::collections::HashSet;

use super::{PlanningContext, RoadHealthClassifier};
use crate::models::{Position, Region, RepairTask, TaskChain, WorkerUnit};

/// Builds repair manifests from the cycle's classification.
#[derive(Debug)]
pub struct ManifestBuilder<'a> {
    classifier: &'a mut RoadHealthClassifier,
}

impl<'a> ManifestBuilder<'a> {
    /// Creates a builder over the cycle's classifier.
    pub fn new(classifier: &'a mut RoadHealthClassifier) -> Self {
        Self { classifier }
    }

    /// Builds the repair chain for `worker` in `region`.
    ///
    /// Returns `None` when nothing can be targeted (no energy, or no
    /// repairable road).
    pub fn build_paving_manifest(
        &mut self,
        ctx: &PlanningContext<'_>,
        worker: &WorkerUnit,
        region: &Region,
    ) -> Option<TaskChain> {
        let repair_power = self.classifier.repair_power();
        let roads = self.classifier.repairable_roads(ctx, region);

        let mut remaining = f64::from(worker.energy);
        let mut targeted: HashSet<&str> = HashSet::new();
        let mut previous: Option<Position> = None;
        let mut tasks = Vec::new();

        while remaining > 0.0 {
            let next = roads.iter().find(|road| {
                if !road.needs_repair() || targeted.contains(road.id.as_str()) {
                    return false;
                }
                match previous {
                    Some(prev) => {
                        ctx.topology.in_range(&prev, &road.pos, 1)
                            && road.repair_cost(repair_power) <= remaining
                    }
                    None => true,
                }
            });

            let Some(road) = next else {
                break;
            };

            tracing::trace!(worker = %worker.id, road = %road.id, pos = %road.pos, remaining, "road added to manifest");
            targeted.insert(road.id.as_str());
            remaining -= road.repair_cost(repair_power);
            previous = Some(road.pos);
            tasks.push(RepairTask::for_road(road, repair_power));
        }

        let chain = TaskChain::chain(tasks);
        tracing::debug!(
            worker = %worker.id,
            room = %region.name,
            tasks = chain.as_ref().map_or(0, TaskChain::len),
            "paving manifest built"
        );
        chain
    }
}
