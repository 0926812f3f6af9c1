pub(crate) mod alloc;
pub mod error;
pub(crate) mod fmt;
pub(crate) mod panic;
pub(crate) mod result;
