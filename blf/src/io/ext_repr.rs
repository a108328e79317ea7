use serde::{Deserialize, Serialize};

use stowage::entities::{Availability, ItemType};

/// External representation of a set of [`Dimensions`](stowage::geometry::primitives::Dimensions),
/// in millimeters.
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtDimensions {
    pub length: u64,
    pub width: u64,
    pub height: u64,
}

#[derive(Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ExtAvailability {
    Available,
    Limited,
    Unavailable,
}

impl From<ExtAvailability> for Availability {
    fn from(ext: ExtAvailability) -> Self {
        match ext {
            ExtAvailability::Available => Availability::Available,
            ExtAvailability::Limited => Availability::Limited,
            ExtAvailability::Unavailable => Availability::Unavailable,
        }
    }
}

/// External representation of a [`Container`](stowage::entities::Container).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtContainer {
    /// Unique identifier of the container
    pub id: String,
    /// Display name, e.g. "20' STANDARD"
    pub name: String,
    /// Interior usable envelope
    pub dimensions: ExtDimensions,
    /// Maximum payload weight in kilograms
    pub max_weight: f64,
    pub availability: ExtAvailability,
    /// Cost tag, passed through untouched
    pub cost: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum ExtItemType {
    Box,
    BigBag,
    Sack,
    Barrel,
    Roll,
}

impl From<ExtItemType> for ItemType {
    fn from(ext: ExtItemType) -> Self {
        match ext {
            ExtItemType::Box => ItemType::Box,
            ExtItemType::BigBag => ItemType::BigBag,
            ExtItemType::Sack => ItemType::Sack,
            ExtItemType::Barrel => ItemType::Barrel,
            ExtItemType::Roll => ItemType::Roll,
        }
    }
}

/// External representation of an [`Item`](stowage::entities::Item), with the
/// requested quantity. The engine places one unit per call; the driver
/// expands the quantity into independent placement requests.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ExtItemType,
    pub dimensions: ExtDimensions,
    /// Weight of one unit in kilograms
    pub weight: f64,
    /// Number of units to place
    pub quantity: usize,
    /// Display color for visualization
    pub color: String,
    /// Whether other items may be stacked on top (data-only)
    pub can_stack: bool,
}

/// A packing scenario: one container and the items to stuff into it.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtScenario {
    pub container: ExtContainer,
    pub items: Vec<ExtItem>,
}

/// External representation of a [`PlacedItem`](stowage::entities::PlacedItem).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPlacedItem {
    /// The id of the item in the scenario
    pub item_id: String,
    /// Minimum corner of the occupied box (x, y, z)
    pub position: (u64, u64, u64),
    /// Euler angles (x, y, z) in degrees of the rotation used
    pub rotation: (u16, u16, u16),
}

/// External representation of a finished stuffing run over one container.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSolution {
    pub container_id: String,
    /// The units placed, in placement order
    pub placed_items: Vec<ExtPlacedItem>,
    /// Units that could not be placed, by item id
    pub rejected_units: Vec<String>,
    /// Volumes in mm³
    pub total_volume: u64,
    pub used_volume: u64,
    pub remaining_volume: u64,
    /// Used volume as a rounded percentage of the total
    pub utilization: u8,
    /// Sum of placed unit weights in kilograms
    pub placed_weight: f64,
}
