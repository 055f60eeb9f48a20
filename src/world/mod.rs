//! External collaborators consulted during planning.
//!
//! The scheduler does not own map geometry or the road layout. It asks
//! a [`Topology`] for distances and a [`RoadPlan`] whether a road belongs
//! at a tile. Default implementations cover the common cases.

mod road_plan;
mod topology;

pub use road_plan::{AcceptAllRoads, PlannedRoads};
pub use topology::WorldTopology;

use crate::models::Position;
use std::fmt::Debug;

/// Distance oracle between positions, possibly in different rooms.
pub trait Topology: Debug {
    /// Tile distance from `a` to `b`.
    fn distance(&self, a: &Position, b: &Position) -> u32;

    /// Whether `b` lies within `range` tiles of `a`.
    fn in_range(&self, a: &Position, b: &Position, range: u32) -> bool {
        self.distance(a, b) <= range
    }
}

/// Road layout oracle.
pub trait RoadPlan: Debug {
    /// Whether the layout wants a road at `pos`.
    fn road_should_be_here(&self, pos: &Position) -> bool;
}
