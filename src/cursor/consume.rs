//! Single-pass algorithms over any [`Cursor`].
//!
//! Each of these takes the cursor by value and drives it forward from wherever it currently is,
//! so the elements already visited are not considered. [`Clone`] the cursor first to keep a
//! restartable copy. Passing `&mut cursor` instead leaves the cursor where the algorithm
//! stopped.
use core::cmp::Ordering;

use crate::cursor::Cursor;

/// Collects the remaining elements.
pub fn to_vec<C: Cursor>(mut cursor: C) -> Vec<C::Item> {
    let mut items = Vec::new();
    while cursor.advance() {
        items.push(cursor.current());
    }

    items
}

/// Whether any remaining element compares equal to `probe`.
///
/// The probe may be of a different type than the elements, e.g. a bare key looked up among
/// records.
pub fn contains<C, Q, F>(mut cursor: C, probe: &Q, compare: F) -> bool
where
    C: Cursor,
    Q: ?Sized,
    F: Fn(&C::Item, &Q) -> Ordering,
{
    while cursor.advance() {
        if compare(&cursor.current(), probe).is_eq() {
            return true;
        }
    }

    false
}

/// The first remaining element that satisfies `predicate`.
pub fn first_where<C, P>(mut cursor: C, predicate: P) -> Option<C::Item>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    while cursor.advance() {
        let item = cursor.current();
        if predicate(&item) {
            return Some(item);
        }
    }

    None
}

/// The last remaining element that satisfies `predicate`. Always walks the whole cursor.
pub fn last_where<C, P>(mut cursor: C, predicate: P) -> Option<C::Item>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    let mut last = None;
    while cursor.advance() {
        let item = cursor.current();
        if predicate(&item) {
            last = Some(item);
        }
    }

    last
}

/// Whether every remaining element satisfies `predicate`. True for an exhausted cursor.
pub fn every<C, P>(mut cursor: C, predicate: P) -> bool
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    while cursor.advance() {
        if !predicate(&cursor.current()) {
            return false;
        }
    }

    true
}

/// Whether at least one remaining element satisfies `predicate`.
pub fn any<C, P>(mut cursor: C, predicate: P) -> bool
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    while cursor.advance() {
        if predicate(&cursor.current()) {
            return true;
        }
    }

    false
}

/// Whether exactly one remaining element satisfies `predicate`. Stops at the second match.
pub fn single_where<C, P>(mut cursor: C, predicate: P) -> bool
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    let mut found = false;
    while cursor.advance() {
        if predicate(&cursor.current()) {
            if found {
                return false;
            }
            found = true;
        }
    }

    found
}

/// The remaining element at `index`, counting from zero.
pub fn element_at<C: Cursor>(mut cursor: C, index: usize) -> Option<C::Item> {
    let mut remaining = index;
    while cursor.advance() {
        if remaining == 0 {
            return Some(cursor.current());
        }
        remaining -= 1;
    }

    None
}

/// Number of remaining elements.
pub fn count<C: Cursor>(mut cursor: C) -> usize {
    let mut count = 0;
    while cursor.advance() {
        count += 1;
    }

    count
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cursor::{Empty, SliceCursor};

    const WORDS: [&str; 5] = ["a", "b", "c", "d", "e"];

    fn words() -> SliceCursor<'static, &'static str> {
        SliceCursor::new(&WORDS)
    }

    #[test]
    fn collects() {
        assert_eq!(to_vec(words()).len(), 5);
        assert!(to_vec(Empty::<u8>::new()).is_empty());
    }

    #[test]
    fn contains_with_foreign_probe() {
        let compare = |item: &&&str, probe: &str| (**item).cmp(probe);
        assert!(contains(words(), "c", compare));
        assert!(!contains(words(), "z", compare));
    }

    #[test]
    fn first_and_last_where() {
        let numbers = [1, 2, 3, 4, 5, 6];
        let even = |x: &&i32| **x % 2 == 0;

        assert_eq!(first_where(SliceCursor::new(&numbers), even), Some(&2));
        assert_eq!(last_where(SliceCursor::new(&numbers), even), Some(&6));
        assert_eq!(first_where(SliceCursor::new(&numbers), |x| **x > 6), None);
        assert_eq!(last_where(SliceCursor::new(&numbers), |x| **x > 6), None);
    }

    #[test]
    fn quantifiers() {
        let numbers = [2, 4, 6, 7];
        assert!(!every(SliceCursor::new(&numbers), |x| **x % 2 == 0));
        assert!(every(SliceCursor::new(&numbers[..3]), |x| **x % 2 == 0));
        assert!(every(Empty::<i32>::new(), |_| false));

        assert!(any(SliceCursor::new(&numbers), |x| **x == 7));
        assert!(!any(SliceCursor::new(&numbers), |x| **x == 8));
        assert!(!any(Empty::<i32>::new(), |_| true));
    }

    #[test]
    fn single_match() {
        let numbers = [1, 2, 2, 3];
        assert!(single_where(SliceCursor::new(&numbers), |x| **x == 1));
        assert!(!single_where(SliceCursor::new(&numbers), |x| **x == 2));
        assert!(!single_where(SliceCursor::new(&numbers), |x| **x == 4));
    }

    #[test]
    fn index_access() {
        assert_eq!(element_at(words(), 0), Some(&"a"));
        assert_eq!(element_at(words(), 4), Some(&"e"));
        assert_eq!(element_at(words(), 5), None);
    }

    #[test]
    fn consumes_from_current_position() {
        let mut cursor = words();
        cursor.advance();
        cursor.advance();

        assert_eq!(count(cursor.clone()), 3);
        assert_eq!(element_at(&mut cursor, 1), Some(&"d"));
        assert_eq!(*cursor.current(), "d");
    }
}
