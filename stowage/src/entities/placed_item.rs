use crate::entities::Item;
use crate::geometry::primitives::{Aabb, Dimensions, Point};
use crate::placement::Rotation;

/// Represents an [`Item`] that has been placed in a
/// [`PackingSession`](crate::entities::PackingSession).
///
/// Created only by a successful commit and immutable thereafter;
/// repositioning is expressed as remove + re-add.
#[derive(Clone, Debug)]
pub struct PlacedItem {
    pub item: Item,
    /// Minimum corner of the occupied box, in container-local coordinates.
    pub position: Point,
    /// The rotation the item was placed in.
    pub rotation: Rotation,
    /// The box occupied by the item, cached at placement time.
    pub bbox: Aabb,
}

impl PlacedItem {
    pub fn new(item: Item, position: Point, rotation: Rotation) -> Self {
        let bbox = Aabb::from_min_corner(position, rotation.orient(item.dims));
        PlacedItem {
            item,
            position,
            rotation,
            bbox,
        }
    }

    /// The item's dimensions as placed.
    pub fn oriented_dims(&self) -> Dimensions {
        self.rotation.orient(self.item.dims)
    }

    /// As-placed volume in mm³. Rotation preserves volume, so this equals
    /// the item's base volume.
    pub fn volume(&self) -> u64 {
        self.item.volume()
    }
}
