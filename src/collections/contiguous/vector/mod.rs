//! A module containing [`Vector`] and associated types.
//!
//! Other than [`ReserveHint`], which requests a capacity up front, the only included type is
//! [`IntoIter`] for owned iteration over a Vector, which is a re-export of
//! [`buffer::IntoIter`](super::buffer::IntoIter). [`IterMut`](std::slice::IterMut) and
//! [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod hint;
mod iter;
mod vector;

pub use hint::*;
pub use iter::*;
pub use vector::*;
