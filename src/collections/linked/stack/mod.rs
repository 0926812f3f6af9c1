mod linked_stack;
mod tests;

pub use linked_stack::*;
