use crate::geometry::primitives::Dimensions;

/// Commercial availability of a [`Container`]. Opaque to the engine, passed
/// through for higher-level planning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Available,
    Limited,
    Unavailable,
}

/// A container in which [`Item`](crate::entities::Item)'s can be placed.
///
/// `dims` is the interior usable envelope. Positivity of all three extents
/// is enforced by [`Dimensions::try_new`] at construction of the envelope.
#[derive(Clone, Debug)]
pub struct Container {
    pub id: String,
    pub name: String,
    pub dims: Dimensions,
    /// Maximum payload weight in kilograms. Not enforced by the placement
    /// search; exposed for higher-level planning.
    pub max_weight: f64,
    pub availability: Availability,
    /// Cost tag in the catalog's currency, opaque to the engine.
    pub cost: f64,
}

impl Container {
    pub fn new(
        id: String,
        name: String,
        dims: Dimensions,
        max_weight: f64,
        availability: Availability,
        cost: f64,
    ) -> Container {
        Container {
            id,
            name,
            dims,
            max_weight,
            availability,
            cost,
        }
    }

    /// Total interior volume in mm³.
    pub fn volume(&self) -> u64 {
        self.dims.volume()
    }
}
