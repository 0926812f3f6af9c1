//! A small library of fundamental container types, each written from the ground up over raw
//! allocations or heap nodes rather than on top of [`Vec`] or [`std::collections`].
//!
//! # Purpose
//! Every container here is a self-contained abstract data type: a growable [`Vector`], singly and
//! doubly linked lists, array and linked queues, array and linked stacks, and a binary search
//! tree. None of them depends on another. The interesting part of each is the bookkeeping: who
//! owns which allocation, when a buffer grows or shrinks, and which indices or links need to be
//! fixed up after every structural change.
//!
//! # Error Handling
//! Operations that can fail on an empty container or an out of bounds index come in two forms. The
//! `try_` form returns a [`Result`] with a strongly typed error from [`error`], while the plain form
//! panics with the message of that same error. Failing operations never modify the container.
//!
//! Allocation failure isn't recoverable here. Containers call
//! [`handle_alloc_error`](std::alloc::handle_alloc_error) as recommended, and a layout larger than
//! [`isize::MAX`] bytes panics with [`CapacityOverflow`](error::CapacityOverflow).
//!
//! # Logging
//! Reallocations are reported through the [`log`] facade at `trace` level. Nothing is printed
//! unless the caller installs a logger.
//!
//! [`Vector`]: collections::contiguous::Vector
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error;
