//! Planning context for one cycle.

use crate::models::Colony;
use crate::world::{RoadPlan, Topology};

/// Read-only inputs for one planning cycle.
///
/// Bundles the explicit cycle number (used for cache expiry) with the
/// colony snapshot and the external oracles. Everything referenced here
/// is assumed unchanged until the cycle's planning completes.
#[derive(Debug, Clone, Copy)]
pub struct PlanningContext<'a> {
    /// Current planning cycle.
    pub cycle: u64,
    /// Colony snapshot.
    pub colony: &'a Colony,
    /// Distance oracle.
    pub topology: &'a dyn Topology,
    /// Road layout oracle.
    pub road_plan: &'a dyn RoadPlan,
}

impl<'a> PlanningContext<'a> {
    /// Creates a context at cycle 0.
    pub fn new(colony: &'a Colony, topology: &'a dyn Topology, road_plan: &'a dyn RoadPlan) -> Self {
        Self {
            cycle: 0,
            colony,
            topology,
            road_plan,
        }
    }

    /// Sets the current cycle.
    pub fn at_cycle(mut self, cycle: u64) -> Self {
        self.cycle = cycle;
        self
    }
}
