/// Geometric primitive representing a position in container-local
/// coordinates, in millimeters, with the origin at one bottom corner of the
/// container.
///
/// Axis convention: x runs along the container length, y is vertical (along
/// the height), z runs across the width.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash)]
pub struct Point(pub u64, pub u64, pub u64);

impl Point {
    pub const ORIGIN: Point = Point(0, 0, 0);

    pub fn x(&self) -> u64 {
        self.0
    }

    pub fn y(&self) -> u64 {
        self.1
    }

    pub fn z(&self) -> u64 {
        self.2
    }
}

impl From<Point> for (u64, u64, u64) {
    fn from(p: Point) -> Self {
        (p.0, p.1, p.2)
    }
}

impl From<(u64, u64, u64)> for Point {
    fn from(p: (u64, u64, u64)) -> Self {
        Point(p.0, p.1, p.2)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}
