mod array_stack;
mod tests;

pub use array_stack::*;
