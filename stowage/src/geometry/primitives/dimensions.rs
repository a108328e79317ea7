use anyhow::Result;
use anyhow::ensure;

/// Exterior dimensions of a cuboid, in millimeters. All three extents are
/// strictly positive once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash)]
pub struct Dimensions {
    pub length: u64,
    pub width: u64,
    pub height: u64,
}

impl Dimensions {
    pub fn try_new(length: u64, width: u64, height: u64) -> Result<Self> {
        ensure!(
            length > 0 && width > 0 && height > 0,
            "invalid dimensions, length: {length}, width: {width}, height: {height}"
        );
        Ok(Dimensions {
            length,
            width,
            height,
        })
    }

    pub fn volume(&self) -> u64 {
        self.length * self.width * self.height
    }

    /// True if a cuboid with these dimensions fits within `other` without
    /// rotating, i.e. every extent is at most the corresponding extent of
    /// `other`.
    pub fn fits_within(&self, other: &Dimensions) -> bool {
        self.length <= other.length && self.width <= other.width && self.height <= other.height
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.width, self.height)
    }
}
