//! The owned allocation shared by the array-backed containers.

mod buffer;
mod tests;

pub(crate) use buffer::*;
