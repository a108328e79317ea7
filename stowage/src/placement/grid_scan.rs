use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::entities::PlacedItem;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Aabb, Dimensions, Point};
use crate::placement::PlacementPolicy;

/// Deterministic first-fit grid scan.
///
/// Candidate minimum corners are visited on a fixed `step` grid, bottom to
/// top (y), then front to back (z), then left to right (x); the first
/// collision-free candidate wins. This yields a reproducible bottom-first,
/// front-first, left-first packing bias that naturally stacks layer by
/// layer, at the cost of optimality.
///
/// Worst case is O(containerVolume / step³ × placedItemCount), acceptable
/// while the step stays coarse relative to item sizes. The step is the knob
/// to bound latency on large containers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridScan {
    /// Distance between candidate positions, in millimeters.
    pub step: u64,
}

impl GridScan {
    pub const DEFAULT_STEP: u64 = 50;

    pub fn new(step: u64) -> Self {
        assert!(step > 0, "grid step must be positive");
        GridScan { step }
    }
}

impl Default for GridScan {
    fn default() -> Self {
        GridScan::new(Self::DEFAULT_STEP)
    }
}

impl PlacementPolicy for GridScan {
    fn find_position(
        &self,
        oriented: Dimensions,
        container: Dimensions,
        placed: &[PlacedItem],
    ) -> Option<Point> {
        // the caller guarantees `oriented` fits within `container`, so the
        // candidate ranges are in bounds by construction
        let x_lim = container.length - oriented.length;
        let y_lim = container.height - oriented.height;
        let z_lim = container.width - oriented.width;
        let step = self.step as usize;

        iproduct!(
            (0..=y_lim).step_by(step),
            (0..=z_lim).step_by(step),
            (0..=x_lim).step_by(step)
        )
        .map(|(y, z, x)| Point(x, y, z))
        .find(|&pos| {
            let candidate = Aabb::from_min_corner(pos, oriented);
            placed.iter().all(|pi| !pi.bbox.collides_with(&candidate))
        })
    }
}
