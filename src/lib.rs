//! A sorted list with navigable queries, and a small algebra of cursors to walk and combine
//! ordered sequences lazily.
//!
//! [`SortedList`] keeps its elements in one contiguous buffer, sorted by a caller-supplied
//! [`Comparator`]. Lookups and range views are binary searches; inserts and removals shift the
//! buffer. Duplicates are allowed and keep their insertion order.
//!
//! Range views and full scans are [`cursor::SliceCursor`]s, which plug into the combinators of
//! the [`cursor`] module:
//!
//! ```
//! use navlist::cursor::{to_vec, Cursor};
//! use navlist::SortedList;
//!
//! let recent = SortedList::from_iter([4, 9, 1, 7]);
//! let archived = SortedList::from_iter([3, 8, 2, 6]);
//!
//! let scan = recent
//!     .sub(&2, &8, true, false)
//!     .merge_by(archived.sub(&2, &8, true, false), recent.view_order());
//! assert_eq!(to_vec(scan), vec![&2, &3, &4, &6, &7]);
//! ```
pub mod core;
pub mod cursor;

pub use crate::core::comparator::{ByKey, Comparator, NaturalOrder, Reversed};
pub use crate::core::linked_list::{LinkedList, ListCursor, NodeId};
pub use crate::cursor::{Cursor, CursorError, SliceCursor};

use crate::core::search::{lower_bound, resolve, upper_bound};
#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Bound, Index, RangeBounds};
use tracing::trace;

/// A list kept sorted by a [`Comparator`].
///
/// Elements that compare equal are duplicates. All of them are kept, in the order they were
/// inserted, and every query that lands on a run of duplicates says which end of the run it
/// returns: an exact `floor` hit is the first of the run, an exact `ceiling` hit the last.
///
/// Reads borrow the list: a cursor returned by [`head`], [`tail`], [`sub`] and friends points
/// into the list's storage, so the list cannot be mutated while such a cursor is alive.
///
/// [`head`]: SortedList::head
/// [`tail`]: SortedList::tail
/// [`sub`]: SortedList::sub
///
/// # Examples
///
/// ```
/// use navlist::SortedList;
///
/// let mut list = SortedList::from_iter([5, 1, 3]);
/// list.insert(3);
///
/// assert_eq!(list.first(), Some(&1));
/// assert_eq!(list.last(), Some(&5));
/// assert_eq!(list.floor(&2), Some(&1));
/// assert_eq!(list.ceiling(&2), Some(&3));
/// assert_eq!(list.higher(&3), Some(&5));
/// assert_eq!(list.lower(&3), Some(&1));
///
/// assert_eq!(list.remove(&3), Some(3));
/// assert_eq!(list.to_vec(), vec![1, 3, 5]);
/// ```
#[derive(Clone)]
pub struct SortedList<T, C = NaturalOrder> {
    values: Vec<T>,
    comparator: C,
}

impl<T: Ord> SortedList<T> {
    /// Makes a new, empty `SortedList` ordered by `T`'s [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use navlist::SortedList;
    ///
    /// let mut list: SortedList<i32> = SortedList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> SortedList<T, C>
where
    C: Comparator<T>,
{
    /// Makes a new, empty `SortedList` ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            values: Vec::new(),
            comparator,
        }
    }

    /// Makes a new, empty `SortedList` ordered by `comparator`, with room for `capacity`
    /// elements before it reallocates.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Sorts `values` by `comparator` and takes ownership of them. The sort is stable, so
    /// duplicates keep their relative order from `values`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navlist::SortedList;
    ///
    /// let list = SortedList::from_vec(vec![3, 1, 2], |a: &i32, b: &i32| b.cmp(a));
    /// assert_eq!(list.to_vec(), vec![3, 2, 1]);
    /// ```
    pub fn from_vec(mut values: Vec<T>, comparator: C) -> Self {
        values.sort_by(|a, b| comparator.compare(a, b));

        Self { values, comparator }
    }

    /// Returns the comparator the list is ordered by.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.values.clear();
        trace!("cleared sorted list");
    }

    /// Inserts `value` after any elements that compare equal to it. `O(n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navlist::{ByKey, SortedList};
    ///
    /// let mut list = SortedList::with_comparator(ByKey(|pair: &(u8, char)| pair.0));
    /// list.insert((1, 'a'));
    /// list.insert((0, 'z'));
    /// list.insert((1, 'b'));
    /// assert_eq!(list.to_vec(), vec![(0, 'z'), (1, 'a'), (1, 'b')]);
    /// ```
    pub fn insert(&mut self, value: T) {
        let idx = upper_bound(&self.values, &value, &self.comparator);
        self.values.insert(idx, value);

        trace!(index = idx, len = self.values.len(), "inserted into sorted list");
    }

    /// Inserts every element of `values` with a single stable sort. Duplicates already in the
    /// list stay in front of the new ones.
    pub fn insert_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.values.len();
        self.values.extend(values);
        let comparator = &self.comparator;
        self.values.sort_by(|a, b| comparator.compare(a, b));

        trace!(
            added = self.values.len() - before,
            len = self.values.len(),
            "batch inserted into sorted list"
        );
    }

    /// Merges `values`, which must already be sorted by this list's comparator, in linear time.
    /// On ties the list's own elements come first.
    ///
    /// # Panics
    ///
    /// Panics if `values` is not sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use navlist::SortedList;
    ///
    /// let mut list = SortedList::from_iter([1, 4, 9]);
    /// list.merge_sorted([2, 4, 10]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 4, 4, 9, 10]);
    /// ```
    pub fn merge_sorted<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let incoming: Vec<T> = values.into_iter().collect();
        assert!(
            incoming
                .windows(2)
                .all(|pair| !self.comparator.compare(&pair[0], &pair[1]).is_gt()),
            "merge_sorted called with input that is not sorted by the list's comparator"
        );

        let existing = mem::take(&mut self.values);
        let mut merged = Vec::with_capacity(existing.len() + incoming.len());
        let mut left = existing.into_iter().peekable();
        let mut right = incoming.into_iter().peekable();

        loop {
            let take_left = match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => !self.comparator.compare(l, r).is_gt(),
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };

            merged.extend(if take_left { left.next() } else { right.next() });
        }

        self.values = merged;
        trace!(len = self.values.len(), "merged sorted input into sorted list");
    }

    /// Removes the first element that compares equal to `value` and returns it. Only one of
    /// several duplicates is removed per call.
    ///
    /// # Examples
    ///
    /// ```
    /// use navlist::SortedList;
    ///
    /// let mut list = SortedList::from_iter([1, 2, 2, 3]);
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert_eq!(list.remove(&7), None);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let idx = lower_bound(&self.values, value, &self.comparator);
        if idx == self.values.len() || !self.comparator.compare(&self.values[idx], value).is_eq() {
            return None;
        }

        let removed = self.values.remove(idx);
        trace!(index = idx, len = self.values.len(), "removed from sorted list");

        Some(removed)
    }

    /// Removes every element for which `predicate` returns `true` and returns them in list
    /// order. The predicate need not have anything to do with the list's ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use navlist::SortedList;
    ///
    /// let mut list = SortedList::from_iter(1..=6);
    /// assert_eq!(list.remove_where(|x| x % 2 == 0), vec![2, 4, 6]);
    /// assert_eq!(list.to_vec(), vec![1, 3, 5]);
    /// ```
    pub fn remove_where<P>(&mut self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        let (removed, kept): (Vec<T>, Vec<T>) =
            mem::take(&mut self.values).into_iter().partition(|value| predicate(value));
        self.values = kept;

        trace!(removed = removed.len(), len = self.values.len(), "evicted from sorted list");
        removed
    }

    /// Returns the smallest element, or `None` if the list is empty.
    pub fn first(&self) -> Option<&T> {
        self.values.first()
    }

    /// Returns the largest element, or `None` if the list is empty.
    pub fn last(&self) -> Option<&T> {
        self.values.last()
    }

    /// Returns the element at position `idx` in sorted order.
    pub fn get_index(&self, idx: usize) -> Option<&T> {
        self.values.get(idx)
    }

    /// Returns the number of elements ordered strictly before `value`, which is also the
    /// position `value` would be inserted at if it had no duplicates in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use navlist::SortedList;
    ///
    /// let list = SortedList::from_iter([1, 2, 2, 3]);
    /// assert_eq!(list.rank(&2), 1);
    /// assert_eq!(list.rank(&100), 4);
    /// ```
    pub fn rank(&self, value: &T) -> usize {
        lower_bound(&self.values, value, &self.comparator)
    }

    /// Returns `true` if an element equal to `value` is in the list.
    pub fn contains(&self, value: &T) -> bool {
        self.values
            .get(self.rank(value))
            .is_some_and(|found| self.comparator.compare(found, value).is_eq())
    }

    /// Returns the greatest element less than or equal to `probe`, or `None` if every element is
    /// greater. On an exact hit the first of the equal elements is returned; otherwise the last
    /// element ordered before `probe`.
    ///
    /// A probe ordered after every element returns the last element straight away, without
    /// comparing it to the probe again.
    ///
    /// # Examples
    ///
    /// ```
    /// use navlist::{ByKey, SortedList};
    ///
    /// let list = SortedList::from_vec(
    ///     vec![(1, 'a'), (2, 'a'), (2, 'b'), (3, 'a')],
    ///     ByKey(|pair: &(u8, char)| pair.0),
    /// );
    /// assert_eq!(list.floor(&(2, '_')), Some(&(2, 'a')));
    /// assert_eq!(list.floor(&(0, '_')), None);
    /// ```
    pub fn floor(&self, probe: &T) -> Option<&T> {
        let start = lower_bound(&self.values, probe, &self.comparator);
        match self.values.get(start) {
            None => self.values.last(),
            Some(found) if self.comparator.compare(found, probe).is_eq() => Some(found),
            Some(_) => start.checked_sub(1).map(|idx| &self.values[idx]),
        }
    }

    /// Returns the greatest element strictly less than `probe`. Among duplicates, the last one is
    /// returned.
    pub fn lower(&self, probe: &T) -> Option<&T> {
        lower_bound(&self.values, probe, &self.comparator)
            .checked_sub(1)
            .map(|idx| &self.values[idx])
    }

    /// Returns the least element greater than or equal to `probe`. On an exact hit the last of
    /// the equal elements is returned; otherwise the first element ordered after `probe`.
    pub fn ceiling(&self, probe: &T) -> Option<&T> {
        let start = lower_bound(&self.values, probe, &self.comparator);
        let end = start + upper_bound(&self.values[start..], probe, &self.comparator);
        if start < end {
            Some(&self.values[end - 1])
        } else {
            self.values.get(start)
        }
    }

    /// Returns the least element strictly greater than `probe`. Among duplicates, the first one
    /// is returned.
    pub fn higher(&self, probe: &T) -> Option<&T> {
        self.values.get(upper_bound(&self.values, probe, &self.comparator))
    }

    /// A cursor over every element, in order.
    pub fn cursor(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(&self.values)
    }

    /// A cursor over every element, from the largest down.
    pub fn cursor_rev(&self) -> SliceCursor<'_, T> {
        SliceCursor::new_reversed(&self.values)
    }

    /// A cursor over the elements less than `to_key`, or less than or equal to it if `inclusive`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navlist::cursor::to_vec;
    /// use navlist::SortedList;
    ///
    /// let list = SortedList::from_iter([1, 2, 2, 3]);
    /// assert_eq!(to_vec(list.head(&2, false)), vec![&1]);
    /// assert_eq!(to_vec(list.head(&2, true)), vec![&1, &2, &2]);
    /// ```
    pub fn head(&self, to_key: &T, inclusive: bool) -> SliceCursor<'_, T> {
        self.view(Bound::Unbounded, end_bound(to_key, inclusive))
    }

    /// A cursor over the elements greater than `from_key`, or greater than or equal to it if
    /// `inclusive`.
    pub fn tail(&self, from_key: &T, inclusive: bool) -> SliceCursor<'_, T> {
        self.view(start_bound(from_key, inclusive), Bound::Unbounded)
    }

    /// A cursor over the elements between `from_key` and `to_key`, each end included or excluded
    /// as requested. The cursor is empty, not an error, when the bounds enclose nothing or
    /// `from_key` is ordered after `to_key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navlist::cursor::to_vec;
    /// use navlist::SortedList;
    ///
    /// let list = SortedList::from_iter(1..=5);
    /// assert_eq!(to_vec(list.sub(&2, &4, true, false)), vec![&2, &3]);
    /// assert_eq!(to_vec(list.sub(&2, &4, false, true)), vec![&3, &4]);
    /// assert!(to_vec(list.sub(&2, &2, true, false)).is_empty());
    /// assert!(to_vec(list.sub(&4, &2, true, true)).is_empty());
    /// ```
    pub fn sub(
        &self,
        from_key: &T,
        to_key: &T,
        from_inclusive: bool,
        to_inclusive: bool,
    ) -> SliceCursor<'_, T> {
        self.view(
            start_bound(from_key, from_inclusive),
            end_bound(to_key, to_inclusive),
        )
    }

    /// A cursor over every element that compares equal to `value`, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use navlist::cursor::to_vec;
    /// use navlist::{ByKey, SortedList};
    ///
    /// let list = SortedList::from_vec(
    ///     vec![(2, 'x'), (1, 'a'), (2, 'y'), (3, 'b'), (2, 'z')],
    ///     ByKey(|pair: &(i32, char)| pair.0),
    /// );
    /// let twos: Vec<char> = to_vec(list.get(&(2, '_'))).into_iter().map(|pair| pair.1).collect();
    /// assert_eq!(twos, vec!['x', 'y', 'z']);
    /// ```
    pub fn get(&self, value: &T) -> SliceCursor<'_, T> {
        self.sub(value, value, true, true)
    }

    /// A cursor over the elements inside `range`, the [`RangeBounds`] spelling of
    /// [`sub`](SortedList::sub).
    ///
    /// # Examples
    ///
    /// ```
    /// use navlist::cursor::to_vec;
    /// use navlist::SortedList;
    ///
    /// let list = SortedList::from_iter(0..10);
    /// assert_eq!(to_vec(list.range(3..6)), vec![&3, &4, &5]);
    /// assert_eq!(to_vec(list.range(..=1)), vec![&0, &1]);
    /// assert_eq!(to_vec(list.range(8..)), vec![&8, &9]);
    /// ```
    pub fn range<R>(&self, range: R) -> SliceCursor<'_, T>
    where
        R: RangeBounds<T>,
    {
        self.view(range.start_bound(), range.end_bound())
    }

    /// The list's comparator lifted to the `&T` items its cursors yield, for merging views of
    /// lists that share an order.
    pub fn view_order(&self) -> impl Fn(&&T, &&T) -> Ordering + Copy + '_ {
        move |a: &&T, b: &&T| self.comparator.compare(*a, *b)
    }

    fn view(&self, start: Bound<&T>, end: Bound<&T>) -> SliceCursor<'_, T> {
        match resolve(&self.values, start, end, &self.comparator) {
            Some((start_idx, end_idx)) => SliceCursor::new(&self.values[start_idx..end_idx]),
            None => SliceCursor::new(&[]),
        }
    }
}

impl<T, C> SortedList<T, C> {
    /// The elements as a sorted slice.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Gets an iterator that visits the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Copies the elements out, in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.clone()
    }

    /// Consumes the list, returning its elements in order.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

fn start_bound<T>(key: &T, inclusive: bool) -> Bound<&T> {
    if inclusive {
        Bound::Included(key)
    } else {
        Bound::Excluded(key)
    }
}

fn end_bound<T>(key: &T, inclusive: bool) -> Bound<&T> {
    start_bound(key, inclusive)
}

impl<T, C: Default + Comparator<T>> Default for SortedList<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SortedList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.values).finish()
    }
}

impl<T: Ord> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), NaturalOrder)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedList<T> {
    /// Converts a `[T; N]` into a `SortedList<T>`.
    ///
    /// ```
    /// use navlist::SortedList;
    ///
    /// let list1 = SortedList::from([1, 2, 3, 4]);
    /// let list2: SortedList<_> = [4, 3, 2, 1].into();
    /// assert_eq!(list1.to_vec(), list2.to_vec());
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_vec(Vec::from(arr), NaturalOrder)
    }
}

impl<T, C: Comparator<T>> Extend<T> for SortedList<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T, C> Index<usize> for SortedList<T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl<'a, T, C> IntoIterator for &'a SortedList<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T, C> IntoIterator for SortedList<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Serializes as a sequence in sorted order. To deserialize, read a `Vec<T>` and hand it to
/// [`SortedList::from_vec`] together with the comparator.
#[cfg(feature = "serde")]
impl<T: Serialize, C> Serialize for SortedList<T, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.values)
    }
}
