//! Road segment model.
//!
//! A road segment is a position-fixed structure that decays over time.
//! The scheduler only reads it; decay and repair are applied elsewhere.

use serde::{Deserialize, Serialize};

use super::Position;

/// A degradable road segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    /// Stable structure identifier.
    pub id: String,
    /// Tile the segment occupies.
    pub pos: Position,
    /// Current health.
    pub hits: u32,
    /// Maximum health.
    pub hits_max: u32,
}

impl RoadSegment {
    /// Creates a road at full health.
    pub fn new(id: impl Into<String>, pos: Position, hits_max: u32) -> Self {
        Self {
            id: id.into(),
            pos,
            hits: hits_max,
            hits_max,
        }
    }

    /// Sets the current health.
    pub fn with_hits(mut self, hits: u32) -> Self {
        self.hits = hits;
        self
    }

    /// Missing health (0 when full or overfull).
    pub fn hits_deficit(&self) -> u32 {
        self.hits_max.saturating_sub(self.hits)
    }

    /// Whether any health is missing.
    pub fn needs_repair(&self) -> bool {
        self.hits < self.hits_max
    }

    /// Whether health is strictly below `fraction` of the maximum.
    pub fn below_fraction(&self, fraction: f64) -> bool {
        f64::from(self.hits) < fraction * f64::from(self.hits_max)
    }

    /// Energy needed to restore full health at the given repair rate.
    pub fn repair_cost(&self, repair_power: f64) -> f64 {
        f64::from(self.hits_deficit()) / repair_power
    }
}
