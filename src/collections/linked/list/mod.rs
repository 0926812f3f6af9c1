mod length;
mod linked_list;
mod node;
mod tests;

pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
