//! Contiguous collection types. Namely [`Buffer`], a uniquely owned block sized at runtime, and
//! [`Vector`] for contiguous collections that vary in length.
#![warn(missing_docs)]

pub mod buffer;
pub mod error;
pub mod vector;

#[doc(inline)]
pub use buffer::{Buffer, IntoIter};
#[doc(inline)]
pub use error::{CapacityOverflow, IndexOutOfBounds};
#[doc(inline)]
pub use vector::{ReserveHint, Vector};
