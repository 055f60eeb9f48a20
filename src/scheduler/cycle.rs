//! Cycle driver for road repair planning.
//!
//! # Algorithm
//!
//! 1. `refresh`: empty the assignment registry, drop stale cache entries.
//! 2. `init`: re-register workers already executing a repair task.
//! 3. For each idle or repairing worker in pool order: pick a room,
//!    register the worker there, build its repair chain.
//!
//! Steps must run in this order within a cycle; running decisions before
//! `init` undercounts workers already on the job.

use super::{CyclePlan, WorkOrder};
use crate::config::{ConfigError, RepaveConfig};
use crate::models::{Colony, Region, RoomName, TaskChain, WorkerUnit};
use crate::repave::{
    AssignmentTracker, ManifestBuilder, PlanningContext, RepaveDecisionEngine, RoadHealthClassifier,
    RoomVerdict,
};

/// Owns the cycle's classifier and assignment registry.
///
/// # Example
///
/// ```
/// use u_repave::models::{Colony, Position, Region, RoadSegment, RoomName, WorkerUnit};
/// use u_repave::repave::PlanningContext;
/// use u_repave::scheduler::RepaveScheduler;
/// use u_repave::world::{AcceptAllRoads, WorldTopology};
///
/// let room: RoomName = "W1N1".parse().unwrap();
/// let colony = Colony::new("home", Position::new(room, 25, 25))
///     .with_region(Region::new(room).with_road(
///         RoadSegment::new("road-1", Position::new(room, 26, 25), 5000).with_hits(500),
///     ))
///     .with_worker(WorkerUnit::new("worker-1", 50).with_energy(50));
///
/// let ctx = PlanningContext::new(&colony, &WorldTopology, &AcceptAllRoads).at_cycle(1);
/// let mut scheduler = RepaveScheduler::new();
/// let plan = scheduler.plan_cycle(&ctx);
///
/// assert_eq!(plan.orders.len(), 1);
/// assert_eq!(plan.orders[0].room, room);
/// ```
#[derive(Debug, Clone)]
pub struct RepaveScheduler {
    config: RepaveConfig,
    classifier: RoadHealthClassifier,
    tracker: AssignmentTracker,
}

impl RepaveScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::build(RepaveConfig::default())
    }

    /// Creates a scheduler with the given configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] if `config` fails
    /// [`RepaveConfig::validate`], e.g. a non-positive repair power.
    pub fn with_config(config: RepaveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RepaveConfig) -> Self {
        Self {
            classifier: RoadHealthClassifier::new(&config),
            tracker: AssignmentTracker::new(),
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &RepaveConfig {
        &self.config
    }

    /// Current assignment registry.
    pub fn tracker(&self) -> &AssignmentTracker {
        &self.tracker
    }

    /// Starts a new cycle: clears assignments and drops stale cache entries.
    pub fn refresh(&mut self, cycle: u64) {
        self.tracker.refresh();
        let purged = self.classifier.purge_expired(cycle);
        tracing::debug!(cycle, purged, "repave registry refreshed");
    }

    /// Rebuilds assignments from workers already repairing.
    pub fn init(&mut self, colony: &Colony) {
        self.tracker.init(colony);
    }

    /// Full verdict for `worker` in `region`.
    pub fn evaluate_room(
        &mut self,
        ctx: &PlanningContext<'_>,
        worker: &WorkerUnit,
        region: &Region,
    ) -> RoomVerdict {
        self.engine().evaluate_room(ctx, worker, region)
    }

    /// Whether `worker` should take on (or keep) repair duty in `region`.
    pub fn should_repave_room(
        &mut self,
        ctx: &PlanningContext<'_>,
        worker: &WorkerUnit,
        region: &Region,
    ) -> bool {
        self.engine().worker_should_repave_room(ctx, worker, region)
    }

    /// Room `worker` should repave, or `None`.
    pub fn worker_should_repave(
        &mut self,
        ctx: &PlanningContext<'_>,
        worker: &WorkerUnit,
    ) -> Option<RoomName> {
        self.engine().worker_should_repave(ctx, worker)
    }

    /// Commits `worker` to `room`. Returns `true` if the registry changed.
    pub fn register_worker_assignment(&mut self, worker: &WorkerUnit, room: RoomName) -> bool {
        self.tracker.register_worker_assignment(worker, room)
    }

    /// Worker ids committed to `room`.
    pub fn assigned_workers(&self, room: RoomName) -> &[String] {
        self.tracker.assigned_workers(room)
    }

    /// Repair chain for `worker` in `room`. `None` if the room is unknown
    /// or nothing can be targeted.
    pub fn build_paving_manifest(
        &mut self,
        ctx: &PlanningContext<'_>,
        worker: &WorkerUnit,
        room: RoomName,
    ) -> Option<TaskChain> {
        let region = ctx.colony.region(room)?;
        ManifestBuilder::new(&mut self.classifier).build_paving_manifest(ctx, worker, region)
    }

    /// Forgets cached classification for one region, e.g. after the
    /// driver learns its roads changed mid-window.
    pub fn invalidate_region(&mut self, region: &Region) {
        self.classifier.invalidate(region);
    }

    /// Runs a complete cycle over the colony's work pool.
    ///
    /// Workers busy with non-repair tasks are skipped.
    pub fn plan_cycle(&mut self, ctx: &PlanningContext<'_>) -> CyclePlan {
        self.refresh(ctx.cycle);
        self.init(ctx.colony);

        let mut plan = CyclePlan::new(ctx.cycle);
        for worker in &ctx.colony.workers {
            if worker.task.is_some() && !worker.is_repairing() {
                continue;
            }

            match self.worker_should_repave(ctx, worker) {
                Some(room) => {
                    self.register_worker_assignment(worker, room);
                    let chain = self.build_paving_manifest(ctx, worker, room);
                    plan.orders.push(WorkOrder {
                        worker_id: worker.id.clone(),
                        room,
                        chain,
                    });
                }
                None => plan.idle.push(worker.id.clone()),
            }
        }

        tracing::debug!(
            cycle = ctx.cycle,
            orders = plan.orders.len(),
            idle = plan.idle.len(),
            tasks = plan.task_count(),
            "repave cycle planned"
        );
        plan
    }

    fn engine(&mut self) -> RepaveDecisionEngine<'_> {
        RepaveDecisionEngine::new(
            &mut self.classifier,
            &self.tracker,
            self.config.allowed_pavers_per_room,
        )
    }
}

impl Default for RepaveScheduler {
    fn default() -> Self {
        Self::new()
    }
}
