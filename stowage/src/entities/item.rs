use anyhow::Result;
use anyhow::ensure;

use crate::geometry::primitives::Dimensions;

/// Semantic category of an [`Item`]. Informational only: the engine treats
/// every item as its bounding cuboid regardless of category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemType {
    Box,
    BigBag,
    Sack,
    Barrel,
    Roll,
}

/// A product unit to be placed in a [`Container`](crate::entities::Container).
///
/// A request for N units of the same product is issued as N independent
/// placement calls; each unit may land in a different position and rotation.
#[derive(Clone, Debug)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub item_type: ItemType,
    pub dims: Dimensions,
    /// Weight of one unit, in kilograms. Passed through to callers, not
    /// used by the placement search.
    pub weight: f64,
    /// Whether other items may be stacked on top of this one. Currently
    /// data-only: the search prevents geometric overlap, not stacking order.
    pub can_stack: bool,
    /// Display color, opaque to the engine.
    pub color: String,
}

impl Item {
    pub fn new(
        id: String,
        name: String,
        item_type: ItemType,
        dims: Dimensions,
        weight: f64,
        can_stack: bool,
        color: String,
    ) -> Result<Item> {
        ensure!(
            weight.is_finite() && weight >= 0.0,
            "invalid item weight: {weight}"
        );
        Ok(Item {
            id,
            name,
            item_type,
            dims,
            weight,
            can_stack,
            color,
        })
    }

    /// Volume of one unit in mm³. Invariant under rotation.
    pub fn volume(&self) -> u64 {
        self.dims.volume()
    }
}
