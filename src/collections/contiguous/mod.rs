//! Contiguous collection types: [`Vector`] for a growable array and [`ArrayStack`] for a stack
//! stored in one.

pub mod stack;
pub mod vector;

#[doc(inline)]
pub use stack::ArrayStack;
#[doc(inline)]
pub use vector::Vector;
