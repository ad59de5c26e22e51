//! Traits which, typically, may be imported without concern: `use contour::prelude::*`.

/// Behaviour for multiple (0 to many) items T to be collected together.
// Needs to be imported in order to implement a custom `Collectable`.
pub trait Collectable<T> {
    /// Add a value to this `Collectable`.
    fn add(&mut self, item: T);

    /// Empty this `Collectable`.
    /// Invoked when its descriptor matches, before any values are added, so
    /// that re-binding the same inputs reproduces the collection rather than
    /// extending it.
    fn clear(&mut self);
}
