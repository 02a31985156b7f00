use std::fmt;
use std::marker::PhantomData;

use crate::cursor::{Cursor, CursorError};

/// A cursor over no elements. It is the identity for [`Chain`](crate::cursor::Chain) and
/// [`Merge`](crate::cursor::Merge).
pub struct Empty<T> {
    started: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    /// A cursor with no elements.
    pub fn new() -> Self {
        Self {
            started: false,
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Self {
            started: self.started,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Empty").field("started", &self.started).finish()
    }
}

impl<T> Cursor for Empty<T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> bool {
        self.started = true;
        false
    }

    #[inline]
    fn try_current(&self) -> Result<T, CursorError> {
        if self.started {
            Err(CursorError::Exhausted)
        } else {
            Err(CursorError::Unstarted)
        }
    }
}
