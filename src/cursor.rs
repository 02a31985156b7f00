//! A small algebra of forward cursors.
//!
//! A cursor starts positioned *before* its first element. [`Cursor::advance`] moves it one step
//! and reports whether it landed on an element; [`Cursor::current`] reads that element. Cursors
//! are cheap to [`Clone`]: a clone is an independent traversal at the same position, so the usual
//! way to read a sequence twice is to clone the cursor before consuming it.
//!
//! Composite cursors own their sources, and cloning one clones its sources transitively:
//!
//! ```
//! use navlist::cursor::{Cursor, SliceCursor, to_vec};
//!
//! let odd = SliceCursor::new(&[1, 3, 5]);
//! let even = SliceCursor::new(&[2, 3, 4]);
//!
//! let merged = odd.merge_by(even, |a: &&i32, b: &&i32| a.cmp(b)).map(|x| x * 10);
//! assert_eq!(to_vec(merged), vec![10, 20, 30, 30, 40, 50]);
//! ```
pub mod adapter;
pub mod boxed;
pub mod chain;
pub mod consume;
pub mod empty;
pub mod error;
pub mod map;
pub mod merge;
pub mod slice;
pub mod take_while;

pub use adapter::{IterCursor, Steps};
pub use boxed::BoxedCursor;
pub use chain::{chain_all, Chain};
pub use consume::*;
pub use empty::Empty;
pub use error::CursorError;
pub use map::Map;
pub use merge::{merge_all, Merge};
pub use slice::SliceCursor;
pub use take_while::TakeWhile;

use crate::core::comparator::Comparator;

/// A forward-only traversal over a fixed logical sequence.
pub trait Cursor {
    type Item;

    /// Moves to the next element. Returns `false` once the sequence is exhausted, and keeps
    /// returning `false` after that.
    fn advance(&mut self) -> bool;

    /// Reads the element under the cursor, or reports why there is none.
    fn try_current(&self) -> Result<Self::Item, CursorError>;

    /// Reads the element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if called before the first successful [`advance`](Cursor::advance) or after
    /// `advance` returned `false`. Both are misuse of the cursor, not absence of data.
    #[track_caller]
    fn current(&self) -> Self::Item {
        match self.try_current() {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    /// Lazily applies `mapper` to every element. The mapper runs on each call to `current`, so it
    /// should be pure.
    fn map<U, F>(self, mapper: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, mapper)
    }

    /// Yields elements while `predicate` accepts them and stops for good at the first rejected
    /// one.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Yields every element of `self`, then every element of `next`.
    fn chain<N>(self, next: N) -> Chain<Self, N>
    where
        Self: Sized,
        N: Cursor<Item = Self::Item>,
    {
        Chain::new(self, next)
    }

    /// Merges two cursors that are both sorted under `comparator`. On ties `self` goes first.
    fn merge_by<R, C>(self, right: R, comparator: C) -> Merge<Self, R, C>
    where
        Self: Sized,
        R: Cursor<Item = Self::Item>,
        C: Comparator<Self::Item>,
    {
        Merge::new(self, right, comparator)
    }

    /// Erases the concrete cursor type.
    fn boxed<'a>(self) -> BoxedCursor<'a, Self::Item>
    where
        Self: Sized + Clone + 'a,
    {
        BoxedCursor::new(self)
    }

    /// Adapts the cursor into a [`std::iter::Iterator`].
    fn steps(self) -> Steps<Self>
    where
        Self: Sized,
    {
        Steps::new(self)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    #[inline]
    fn try_current(&self) -> Result<Self::Item, CursorError> {
        (**self).try_current()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    #[inline]
    fn try_current(&self) -> Result<Self::Item, CursorError> {
        (**self).try_current()
    }
}
