//! Regions (rooms) and the colony that owns them.
//!
//! The colony is the aggregate the scheduler plans for. Its region list
//! order is significant: region selection scans it first-fit.

use serde::{Deserialize, Serialize};

use super::{Position, RoadSegment, RoomName, WorkerUnit};

/// A room containing road segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    /// Room name.
    pub name: RoomName,
    /// Whether the colony currently operates in this room.
    pub active: bool,
    /// Whether the room is free of hostiles.
    pub safe: bool,
    /// Road segments in the room.
    pub roads: Vec<RoadSegment>,
}

impl Region {
    /// Creates an active, safe region without roads.
    pub fn new(name: RoomName) -> Self {
        Self {
            name,
            active: true,
            safe: true,
            roads: Vec::new(),
        }
    }

    /// Sets the activity flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets the safety flag.
    pub fn with_safe(mut self, safe: bool) -> Self {
        self.safe = safe;
        self
    }

    /// Adds a road segment.
    pub fn with_road(mut self, road: RoadSegment) -> Self {
        self.roads.push(road);
        self
    }

    /// Adds several road segments.
    pub fn with_roads(mut self, roads: impl IntoIterator<Item = RoadSegment>) -> Self {
        self.roads.extend(roads);
        self
    }

    /// Whether the region may receive new repair work.
    pub fn is_workable(&self) -> bool {
        self.active && self.safe
    }
}

/// The owning aggregate: ordered regions plus the general work pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Colony {
    /// Colony identifier.
    pub name: String,
    /// Centre of operations; roads are ranked by distance from here.
    pub anchor: Position,
    /// Regions in scan order.
    pub regions: Vec<Region>,
    /// Workers in the general work pool.
    pub workers: Vec<WorkerUnit>,
}

impl Colony {
    /// Creates an empty colony anchored at `anchor`.
    pub fn new(name: impl Into<String>, anchor: Position) -> Self {
        Self {
            name: name.into(),
            anchor,
            regions: Vec::new(),
            workers: Vec::new(),
        }
    }

    /// Appends a region (scan order = insertion order).
    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    /// Adds a worker to the pool.
    pub fn with_worker(mut self, worker: WorkerUnit) -> Self {
        self.workers.push(worker);
        self
    }

    /// Looks up a region by name.
    pub fn region(&self, name: RoomName) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Looks up a worker by id.
    pub fn worker(&self, id: &str) -> Option<&WorkerUnit> {
        self.workers.iter().find(|w| w.id == id)
    }

    /// Workers currently executing a repair task.
    pub fn repairing_workers(&self) -> impl Iterator<Item = &WorkerUnit> {
        self.workers.iter().filter(|w| w.is_repairing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CurrentTask;

    fn room(name: &str) -> RoomName {
        name.parse().unwrap()
    }

    #[test]
    fn test_region_flags() {
        let r = Region::new(room("W1N1"));
        assert!(r.is_workable());
        assert!(!r.clone().with_active(false).is_workable());
        assert!(!r.with_safe(false).is_workable());
    }

    #[test]
    fn test_colony_lookup() {
        let anchor = Position::new(room("W1N1"), 25, 25);
        let colony = Colony::new("home", anchor)
            .with_region(Region::new(room("W1N1")))
            .with_region(Region::new(room("W2N1")))
            .with_worker(WorkerUnit::new("W1", 50));

        assert!(colony.region(room("W2N1")).is_some());
        assert!(colony.region(room("W3N1")).is_none());
        assert!(colony.worker("W1").is_some());
        assert!(colony.worker("W9").is_none());
    }

    #[test]
    fn test_repairing_workers() {
        let anchor = Position::new(room("W1N1"), 25, 25);
        let colony = Colony::new("home", anchor)
            .with_worker(WorkerUnit::new("idle", 50))
            .with_worker(WorkerUnit::new("busy", 50).with_task(CurrentTask::repair(anchor)))
            .with_worker(WorkerUnit::new("other", 50).with_task(CurrentTask::new("build", anchor)));

        let ids: Vec<&str> = colony.repairing_workers().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["busy"]);
    }
}
