use std::fmt;

use crate::cursor::{Cursor, CursorError};

trait DynCursor<'a, T> {
    fn dyn_advance(&mut self) -> bool;
    fn dyn_try_current(&self) -> Result<T, CursorError>;
    fn dyn_clone(&self) -> Box<dyn DynCursor<'a, T> + 'a>;
}

impl<'a, C> DynCursor<'a, C::Item> for C
where
    C: Cursor + Clone + 'a,
{
    fn dyn_advance(&mut self) -> bool {
        self.advance()
    }

    fn dyn_try_current(&self) -> Result<C::Item, CursorError> {
        self.try_current()
    }

    fn dyn_clone(&self) -> Box<dyn DynCursor<'a, C::Item> + 'a> {
        Box::new(self.clone())
    }
}

/// A type-erased, clonable cursor.
///
/// Compositions whose shape is only known at runtime, such as [`merge_all`] over a `Vec` of
/// sources, have no nameable concrete type. They are built out of `BoxedCursor`s instead.
///
/// [`merge_all`]: crate::cursor::merge_all
pub struct BoxedCursor<'a, T> {
    inner: Box<dyn DynCursor<'a, T> + 'a>,
}

impl<'a, T> BoxedCursor<'a, T> {
    /// Erases the type of `cursor`.
    pub fn new<C>(cursor: C) -> Self
    where
        C: Cursor<Item = T> + Clone + 'a,
    {
        Self {
            inner: Box::new(cursor),
        }
    }
}

impl<T> Clone for BoxedCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.dyn_clone(),
        }
    }
}

impl<T> fmt::Debug for BoxedCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedCursor").finish_non_exhaustive()
    }
}

impl<T> Cursor for BoxedCursor<'_, T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> bool {
        self.inner.dyn_advance()
    }

    #[inline]
    fn try_current(&self) -> Result<T, CursorError> {
        self.inner.dyn_try_current()
    }
}
