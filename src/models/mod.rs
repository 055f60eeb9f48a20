//! Road maintenance domain models.
//!
//! Plain data snapshots supplied by the surrounding system each cycle,
//! plus the repair tasks the scheduler hands back.
//!
//! # Domain Mappings
//!
//! | u-repave | Role |
//! |----------|------|
//! | Colony | Owning aggregate: anchor, ordered regions, work pool |
//! | Region | Room with activity/safety flags and roads |
//! | RoadSegment | Degradable structure with current/max health |
//! | WorkerUnit | Carrier with capacity, energy, optional task |
//! | TaskChain | Repair manifest for one worker in one cycle |

mod position;
mod region;
mod road;
mod task;
mod worker;

pub use position::{Position, RoomName, RoomNameError, ROOM_SIZE};
pub use region::{Colony, Region};
pub use road::RoadSegment;
pub use task::{RepairTask, TaskChain};
pub use worker::{CurrentTask, WorkerUnit, REPAIR_TASK};
