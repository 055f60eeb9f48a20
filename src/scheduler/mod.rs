//! Cycle driver and planning results.
//!
//! `RepaveScheduler` exposes the per-cycle driver hooks (`refresh`, `init`,
//! `worker_should_repave`, `register_worker_assignment`,
//! `build_paving_manifest`) and `plan_cycle`, which runs them all in order
//! over the colony's work pool.
//!
//! `CyclePlan` collects the resulting work orders for the executor.

mod cycle;
mod plan;

pub use cycle::RepaveScheduler;
pub use plan::{CyclePlan, WorkOrder};
