//! Error types shared by every container in this crate.

use derive_more::{Display, Error, From, IsVariant};

/// The operation needs at least one element, but the container is empty.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Operation requires at least one element, but the container is empty!")]
pub struct EmptyContainer;

/// A positional access or insertion used an index outside of the bounds of the container.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// The memory layout of a buffer would exceed [`isize::MAX`] bytes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// Either of the recoverable errors produced by a container.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrEmpty {
    IndexOutOfBounds(IndexOutOfBounds),
    EmptyContainer(EmptyContainer),
}
