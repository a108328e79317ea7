/// Geometric relation between two solids.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum GeoRelation {
    Surrounding,
    Enclosed,
    Intersecting,
    Disjoint,
}
