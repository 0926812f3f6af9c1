//! General-purpose container types, grouped by how they store their elements.
//!
//! # Method
//! Every container owns its storage outright: contiguous and circular types hold a single raw
//! allocation, while linked types and the tree hold a chain of individually boxed nodes. Where it
//! saves repeating functionality, [`Vector`](contiguous::Vector) implements
//! [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut).
//!
//! Each family sits behind a feature of the same name, all of which are enabled by default.

#[cfg(any(feature = "contiguous", feature = "circ"))]
pub(crate) mod buffer;

#[cfg(feature = "tree")]
pub mod binary_tree;
#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
