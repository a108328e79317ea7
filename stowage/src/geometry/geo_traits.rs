/// Trait for types that can detect collisions between `Self` and `T`.
///
/// Collisions are defined on closed interiors: two solids sharing only a
/// boundary face are *not* colliding, so items may be placed flush against
/// each other or against the container walls.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}
