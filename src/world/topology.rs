//! Grid topology over world coordinates.

use super::Topology;
use crate::models::Position;

/// Chebyshev (king-move) distance on the global tile grid.
///
/// Rooms tile seamlessly, so positions in neighbouring rooms are measured
/// through the shared edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldTopology;

impl Topology for WorldTopology {
    fn distance(&self, a: &Position, b: &Position) -> u32 {
        let dx = a.world_x().abs_diff(b.world_x());
        let dy = a.world_y().abs_diff(b.world_y());
        dx.max(dy)
    }
}
