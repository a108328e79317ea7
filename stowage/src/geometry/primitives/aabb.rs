use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Dimensions;
use crate::geometry::primitives::Point;
use anyhow::Result;
use anyhow::ensure;

///Axis-aligned box
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub struct Aabb {
    pub x_min: u64,
    pub y_min: u64,
    pub z_min: u64,
    pub x_max: u64,
    pub y_max: u64,
    pub z_max: u64,
}

impl Aabb {
    pub fn try_new(
        x_min: u64,
        y_min: u64,
        z_min: u64,
        x_max: u64,
        y_max: u64,
        z_max: u64,
    ) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max && z_min < z_max,
            "invalid box, x: [{x_min},{x_max}], y: [{y_min},{y_max}], z: [{z_min},{z_max}]"
        );
        Ok(Aabb {
            x_min,
            y_min,
            z_min,
            x_max,
            y_max,
            z_max,
        })
    }

    /// The box occupied by a cuboid with dimensions `dims` whose minimum
    /// corner sits at `min`. The x-extent is the length, the y-extent the
    /// height and the z-extent the width.
    pub fn from_min_corner(min: Point, dims: Dimensions) -> Self {
        Aabb {
            x_min: min.x(),
            y_min: min.y(),
            z_min: min.z(),
            x_max: min.x() + dims.length,
            y_max: min.y() + dims.height,
            z_max: min.z() + dims.width,
        }
    }

    pub fn min_corner(&self) -> Point {
        Point(self.x_min, self.y_min, self.z_min)
    }

    pub fn volume(&self) -> u64 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min) * (self.z_max - self.z_min)
    }

    /// Returns the geometric relation between `self` and another [`Aabb`].
    /// Optimized for `GeoRelation::Disjoint`
    #[inline(always)]
    pub fn relation_to(&self, other: Aabb) -> GeoRelation {
        if !self.collides_with(&other) {
            return GeoRelation::Disjoint;
        }
        if self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.z_min <= other.z_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
            && self.z_max >= other.z_max
        {
            return GeoRelation::Surrounding;
        }
        if self.x_min >= other.x_min
            && self.y_min >= other.y_min
            && self.z_min >= other.z_min
            && self.x_max <= other.x_max
            && self.y_max <= other.y_max
            && self.z_max <= other.z_max
        {
            return GeoRelation::Enclosed;
        }
        GeoRelation::Intersecting
    }

    /// Returns the largest box contained in both `a` and `b`, or `None` if
    /// their interiors do not overlap.
    pub fn intersection(a: Aabb, b: Aabb) -> Option<Aabb> {
        let x_min = u64::max(a.x_min, b.x_min);
        let y_min = u64::max(a.y_min, b.y_min);
        let z_min = u64::max(a.z_min, b.z_min);
        let x_max = u64::min(a.x_max, b.x_max);
        let y_max = u64::min(a.y_max, b.y_max);
        let z_max = u64::min(a.z_max, b.z_max);
        if x_min < x_max && y_min < y_max && z_min < z_max {
            Some(Aabb {
                x_min,
                y_min,
                z_min,
                x_max,
                y_max,
                z_max,
            })
        } else {
            None
        }
    }
}

impl CollidesWith<Aabb> for Aabb {
    // strict inequalities: boxes touching on a face are not colliding
    #[inline(always)]
    fn collides_with(&self, other: &Aabb) -> bool {
        u64::max(self.x_min, other.x_min) < u64::min(self.x_max, other.x_max)
            && u64::max(self.y_min, other.y_min) < u64::min(self.y_max, other.y_max)
            && u64::max(self.z_min, other.z_min) < u64::min(self.z_max, other.z_max)
    }
}
