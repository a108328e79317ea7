use itertools::Itertools;
use log::error;

use crate::entities::PlacedItem;
use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Aabb, Dimensions, Point};

//Various checks to verify correctness of the state of a session
//Used in debug_assert!() blocks

/// True if no pair of placed items overlaps. Touching faces are allowed.
pub fn placements_disjoint(placed: &[PlacedItem]) -> bool {
    for (a, b) in placed.iter().tuple_combinations() {
        if a.bbox.collides_with(&b.bbox) {
            let overlap = Aabb::intersection(a.bbox, b.bbox).expect("colliding boxes overlap");
            error!(
                "items {} and {} overlap in {:?} ({} mm³)",
                a.item.id,
                b.item.id,
                overlap,
                overlap.volume()
            );
            return false;
        }
    }
    true
}

/// True if every placed item lies entirely within the container envelope.
pub fn placements_within_container(placed: &[PlacedItem], container: Dimensions) -> bool {
    let envelope = Aabb::from_min_corner(Point::ORIGIN, container);
    placed.iter().all(|pi| {
        let inside = envelope.relation_to(pi.bbox) == GeoRelation::Surrounding;
        if !inside {
            error!(
                "item {} at {} leaves the container envelope {}",
                pi.item.id, pi.position, container
            );
        }
        inside
    })
}

/// True if the running volume tally equals the sum of placed item volumes.
pub fn volume_tally_matches(placed: &[PlacedItem], used_volume: u64) -> bool {
    let sum: u64 = placed.iter().map(|pi| pi.volume()).sum();
    if sum != used_volume {
        error!("volume tally {used_volume} does not match placed sum {sum}");
    }
    sum == used_volume
}
