//! Road repair policy: classification, assignment tracking, room
//! decisions, and manifest construction.
//!
//! # Components
//!
//! - [`RoadHealthClassifier`]: cached damage bands and repair cost per room
//! - [`AssignmentTracker`]: which workers are repaving which room this cycle
//! - [`RepaveDecisionEngine`]: room cap and need checks, room selection
//! - [`ManifestBuilder`]: greedy, adjacency-bounded repair chains
//!
//! The decision engine and manifest builder borrow the classifier (and
//! tracker) for the duration of a query; the
//! [`RepaveScheduler`](crate::scheduler::RepaveScheduler) owns them.

mod classifier;
mod context;
mod decision;
mod manifest;
mod tracker;

pub use classifier::RoadHealthClassifier;
pub use context::PlanningContext;
pub use decision::{RejectReason, RepaveDecisionEngine, RoomVerdict};
pub use manifest::ManifestBuilder;
pub use tracker::AssignmentTracker;
