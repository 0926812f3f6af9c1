use std::num::NonZero;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The length of a non-empty list. Being non-zero, it makes an empty [`ListContents`] impossible
/// to construct.
///
/// [`ListContents`]: super::ListContents
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);

impl Length {
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the length after adding one element.
    ///
    /// # Panics
    /// Panics with [`CapacityOverflow`] if the length can't be represented.
    pub fn increment(self) -> Length {
        Length(self.0.checked_add(1).ok_or(CapacityOverflow).throw())
    }

    /// Returns the length after removing one element, or [`None`] if that would leave the list
    /// empty.
    pub const fn decrement(self) -> Option<Length> {
        match NonZero::new(self.0.get() - 1) {
            Some(len) => Some(Length(len)),
            None => None,
        }
    }

    pub const fn last_index(self) -> usize {
        self.0.get() - 1
    }
}
