//! Circular collection types, which reuse a fixed allocation as a ring by wrapping their indices.

pub mod queue;

#[doc(inline)]
pub use queue::ArrayQueue;
