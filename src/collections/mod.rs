//! General-purpose collection types.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! provides slice functionality such as iteration, searching and unchecked access without
//! repeating it on each type.

pub mod contiguous;
