//! Road layout oracles.

use std::collections::HashSet;

use super::RoadPlan;
use crate::models::Position;

/// Accepts every existing road as planned.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllRoads;

impl RoadPlan for AcceptAllRoads {
    fn road_should_be_here(&self, _pos: &Position) -> bool {
        true
    }
}

/// An explicit set of tiles where roads belong.
///
/// Roads outside the set are abandoned: they are never scheduled for
/// repair and are left to decay.
#[derive(Debug, Clone, Default)]
pub struct PlannedRoads {
    tiles: HashSet<Position>,
}

impl PlannedRoads {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a planned tile.
    pub fn with_tile(mut self, pos: Position) -> Self {
        self.tiles.insert(pos);
        self
    }

    /// Adds a planned tile in place.
    pub fn insert(&mut self, pos: Position) {
        self.tiles.insert(pos);
    }

    /// Number of planned tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl FromIterator<Position> for PlannedRoads {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl RoadPlan for PlannedRoads {
    fn road_should_be_here(&self, pos: &Position) -> bool {
        self.tiles.contains(pos)
    }
}
