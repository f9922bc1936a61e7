/// A request for capacity, consumed when constructing a [`Vector`](super::Vector) with
/// [`Vector::with_hint`](super::Vector::with_hint) or [`From`].
///
/// # Examples
/// ```
/// # use simple_vector::collections::contiguous::{ReserveHint, Vector};
/// let vec: Vector<String> = ReserveHint::new(16).into();
/// assert_eq!(vec.cap(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveHint {
    cap: usize,
}

impl ReserveHint {
    /// Creates a hint requesting `cap` slots.
    pub const fn new(cap: usize) -> ReserveHint {
        ReserveHint { cap }
    }

    /// Returns the requested capacity.
    pub const fn cap(&self) -> usize {
        self.cap
    }
}
