//! Error types reported by the contiguous collections.

use derive_more::{Display, Error};

/// An index was outside the bounds of a collection. Returned by checked accessors such as
/// [`Vector::at`](super::Vector::at), and used as the panic message when an operation's position
/// precondition is violated.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the collection at the time of access.
    pub len: usize,
}

/// A requested capacity would produce an allocation larger than [`isize::MAX`] bytes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;
