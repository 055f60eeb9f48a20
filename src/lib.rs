//! Road maintenance scheduling for the U-Engine ecosystem.
//!
//! Each planning cycle decides which room every free worker should repair,
//! which roads it repairs and in what order, and caps how many workers
//! share a room.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `RoomName`, `Position`, `RoadSegment`,
//!   `WorkerUnit`, `Region`, `Colony`, `RepairTask`, `TaskChain`
//! - **`world`**: Collaborator traits (`Topology`, `RoadPlan`) and defaults
//! - **`cache`**: Cycle-scoped memoization with TTL
//! - **`repave`**: Classifier, assignment tracker, decision engine, manifest builder
//! - **`scheduler`**: Per-cycle driver (`RepaveScheduler`) and `CyclePlan`
//! - **`config`**: Policy parameters (`RepaveConfig`)
//! - **`validation`**: Input integrity checks for colony snapshots
//!
//! # Execution Model
//!
//! Single-threaded and synchronous. The driver supplies a consistent
//! snapshot and an explicit cycle number; nothing here reads a clock.

pub mod cache;
pub mod config;
pub mod models;
pub mod repave;
pub mod scheduler;
pub mod validation;
pub mod world;
