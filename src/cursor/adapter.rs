use std::fmt;
use std::iter::FusedIterator;

use crate::cursor::{Cursor, CursorError};

/// Lifts a [`std::iter::Iterator`] into a cursor.
///
/// The iterator must be [`Clone`] for the cursor to be, and its items must be [`Clone`] because
/// the cursor hands out the current element any number of times.
///
/// ```
/// use navlist::cursor::{to_vec, Cursor, IterCursor};
/// use navlist::NaturalOrder;
///
/// let evens = IterCursor::new((0..10).step_by(2));
/// let odds = IterCursor::new((1..10).step_by(2));
/// assert_eq!(to_vec(evens.merge_by(odds, NaturalOrder)), (0..10).collect::<Vec<_>>());
/// ```
pub struct IterCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
    started: bool,
}

impl<I: Iterator> IterCursor<I> {
    /// Wraps anything iterable. Nothing is pulled from it until the first `advance`.
    pub fn new<T: IntoIterator<IntoIter = I>>(iter: T) -> Self {
        Self {
            iter: iter.into_iter(),
            current: None,
            started: false,
        }
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            current: self.current.clone(),
            started: self.started,
        }
    }
}

impl<I> fmt::Debug for IterCursor<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCursor")
            .field("iter", &self.iter)
            .field("current", &self.current)
            .field("started", &self.started)
            .finish()
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        if self.started && self.current.is_none() {
            return false;
        }

        self.started = true;
        self.current = self.iter.next();
        self.current.is_some()
    }

    #[inline]
    fn try_current(&self) -> Result<I::Item, CursorError> {
        match &self.current {
            Some(item) => Ok(item.clone()),
            None if self.started => Err(CursorError::Exhausted),
            None => Err(CursorError::Unstarted),
        }
    }
}

/// A [`std::iter::Iterator`] over the elements a cursor has not visited yet.
///
/// This `struct` is created by [`Cursor::steps`].
#[derive(Debug, Clone)]
pub struct Steps<C> {
    cursor: C,
    done: bool,
}

impl<C> Steps<C> {
    /// Drives `cursor` as an iterator.
    pub fn new(cursor: C) -> Self {
        Self { cursor, done: false }
    }

    /// Returns the underlying cursor, positioned at the last element yielded.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Steps<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.done {
            return None;
        }
        if !self.cursor.advance() {
            self.done = true;
            return None;
        }

        self.cursor.try_current().ok()
    }
}

impl<C: Cursor> FusedIterator for Steps<C> {}
