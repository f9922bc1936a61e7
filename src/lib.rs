//! A minimal growable array, written from the ground up on top of its own owning buffer.
//!
//! # Structure
//! The crate is two strictly layered types under [`collections::contiguous`]:
//! - [`Buffer`](collections::contiguous::Buffer) is the sole owner of a heap block whose size is
//!   fixed at construction. It knows nothing about length versus capacity. It can't be cloned, only
//!   moved, released or adopted.
//! - [`Vector`](collections::contiguous::Vector) holds exactly one Buffer plus a length. Every
//!   change of capacity allocates a new Buffer, moves the live values into it and drops the old
//!   one, so the Buffer is never extended in place.
//!
//! Neither type uses [`Vec`] internally.
//!
//! # Error Handling
//! Out of range access through [`Vector::at`](collections::contiguous::Vector::at) is the only
//! reported error, as an [`IndexOutOfBounds`](collections::contiguous::IndexOutOfBounds) value.
//! Breaking a method's position precondition (inserting past the end, erasing from an empty
//! Vector, indexing out of bounds) panics with the same error as its message. Only the `unsafe`
//! accessors leave violations unchecked. Allocation failure is handed to
//! [`handle_alloc_error`](std::alloc::handle_alloc_error) as is.
//!
//! Errors are small structs implementing [`Error`](std::error::Error), derived with `derive_more`.
//!
//! # Features
//! - `alloc-trace` (default): emit a `log` trace record for each allocation, reallocation and
//!   deallocation of backing storage.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
