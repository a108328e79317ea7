use crate::geometry::primitives::Dimensions;

/// One of the axis-aligned rotations in which an item can be placed.
///
/// Only three of the six possible permutations are enumerated: items are
/// palletized upright and never placed on their side *and* rotated, nor
/// inverted. See [`Rotation::UPRIGHT_SET`] for the fixed candidate order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Placed as entered.
    None,
    /// Rotated 90° about the vertical axis: length and width swap.
    Vertical,
    /// Rotated 90° about a horizontal axis: length and height swap.
    Lateral,
}

impl Rotation {
    /// Candidate rotations in the order the placement search tries them.
    /// The order is part of the engine contract: first-fit placement takes
    /// the first rotation for which a position exists.
    pub const UPRIGHT_SET: [Rotation; 3] = [Rotation::None, Rotation::Vertical, Rotation::Lateral];

    /// The dimensions of an item with base dimensions `dims` once placed in
    /// this rotation.
    pub fn orient(&self, dims: Dimensions) -> Dimensions {
        match self {
            Rotation::None => dims,
            Rotation::Vertical => Dimensions {
                length: dims.width,
                width: dims.length,
                height: dims.height,
            },
            Rotation::Lateral => Dimensions {
                length: dims.height,
                width: dims.width,
                height: dims.length,
            },
        }
    }

    /// Euler angles (x, y, z) in degrees realizing this rotation, as
    /// consumed by visualization layers.
    pub fn euler_degrees(&self) -> (u16, u16, u16) {
        match self {
            Rotation::None => (0, 0, 0),
            Rotation::Vertical => (0, 0, 90),
            Rotation::Lateral => (90, 0, 0),
        }
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (x, y, z) = self.euler_degrees();
        write!(f, "r({x},{y},{z})")
    }
}

/// An item footprint oriented in a specific rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrientedDims {
    pub dims: Dimensions,
    pub rotation: Rotation,
}

/// Enumerates the oriented footprints of `dims` that fit within `container`
/// on all three axes, in the fixed order of [`Rotation::UPRIGHT_SET`].
///
/// Acts as a cheap prefilter: orientations exceeding the container envelope
/// are discarded before any position search runs. An empty iterator means
/// the item cannot fit regardless of the packed state.
pub fn feasible_orientations(
    dims: Dimensions,
    container: Dimensions,
) -> impl Iterator<Item = OrientedDims> {
    Rotation::UPRIGHT_SET
        .into_iter()
        .map(move |rotation| OrientedDims {
            dims: rotation.orient(dims),
            rotation,
        })
        .filter(move |od| od.dims.fits_within(&container))
}
