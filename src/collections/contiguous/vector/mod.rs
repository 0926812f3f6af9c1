//! A module containing [`Vector`], a growable contiguous collection.
//!
//! Borrowed iteration is provided through [`Deref<Target = [T]>`](std::ops::Deref), the same as
//! indexing. [`Vector`] is also re-exported under the parent module.

mod tests;
mod vector;

pub use vector::*;
