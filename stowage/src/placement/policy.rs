use crate::entities::PlacedItem;
use crate::geometry::primitives::{Dimensions, Point};

/// Strategy for finding a valid position for one oriented footprint against
/// the current packed state.
///
/// The returned position must satisfy two conditions: the occupied box lies
/// entirely within `[0, container]` on every axis, and it overlaps none of
/// the boxes in `placed`. Implementations must be deterministic; the
/// session's reproducibility guarantee rests on it.
///
/// This seam exists so the exhaustive [`GridScan`](crate::placement::GridScan)
/// can later be swapped for an extreme-point or free-space search without
/// touching the session contract.
pub trait PlacementPolicy {
    fn find_position(
        &self,
        oriented: Dimensions,
        container: Dimensions,
        placed: &[PlacedItem],
    ) -> Option<Point>;
}
