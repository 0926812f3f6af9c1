mod array_queue;

pub use array_queue::*;
