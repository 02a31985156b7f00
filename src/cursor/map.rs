use crate::cursor::{Cursor, CursorError};

/// A cursor that transforms every element of its source.
///
/// The transform is applied each time [`Cursor::current`] is called and its result is not
/// cached, so it must be pure for clones to replay the same sequence.
///
/// This `struct` is created by [`Cursor::map`].
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    mapper: F,
}

impl<S, F> Map<S, F> {
    /// Applies `mapper` to each element of `source` as it is read.
    pub fn new(source: S, mapper: F) -> Self {
        Self { source, mapper }
    }

    /// Returns the source cursor.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<U, S, F> Cursor for Map<S, F>
where
    S: Cursor,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn advance(&mut self) -> bool {
        self.source.advance()
    }

    #[inline]
    fn try_current(&self) -> Result<U, CursorError> {
        self.source.try_current().map(&self.mapper)
    }
}
