//! A module containing [`Buffer`] and associated types.
//!
//! Currently, the only other included type is [`IntoIter`] for owned iteration over a Buffer (and
//! a [`Vector`](super::Vector)). [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter)
//! from [`std::slice`] are used for borrowed iteration.
//!
//! [`Buffer`] is also re-exported under the parent module.

mod buffer;
mod iter;
mod tests;

pub use buffer::*;
pub use iter::*;
