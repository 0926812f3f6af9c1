use std::fmt::{self, Debug, Formatter};

/// Formats through the wrapped closure, allowing a container's contents to be nested inside
/// [`Formatter::debug_struct`] without collecting them first.
pub(crate) struct DebugWith<F: Fn(&mut Formatter<'_>) -> fmt::Result>(pub F);

impl<F: Fn(&mut Formatter<'_>) -> fmt::Result> Debug for DebugWith<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}

pub(crate) const fn debug_with<F>(fmt: F) -> DebugWith<F>
where
    F: Fn(&mut Formatter<'_>) -> fmt::Result,
{
    DebugWith(fmt)
}
