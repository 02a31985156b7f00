//! Bound searches over a slice that is sorted under a [`Comparator`].
//!
//! Every navigable query and range view of [`SortedList`](crate::SortedList) reduces to the two
//! partition points below. For a probe `k` and a run of duplicates equal to `k`:
//!
//! ```text
//!   [ 1, 2, 4, 4, 4, 7 ]
//!           ^        ^
//!           |        upper_bound(4) = 5, first element >  4
//!           lower_bound(4) = 2,         first element >= 4
//! ```
use core::ops::Bound;

use crate::core::comparator::Comparator;

/// Index of the first element that is not less than `probe`, or `haystack.len()`.
#[inline]
pub fn lower_bound<T, C>(haystack: &[T], probe: &T, comparator: &C) -> usize
where
    C: Comparator<T> + ?Sized,
{
    haystack.partition_point(|item| comparator.compare(item, probe).is_lt())
}

/// Index of the first element that is greater than `probe`, or `haystack.len()`.
#[inline]
pub fn upper_bound<T, C>(haystack: &[T], probe: &T, comparator: &C) -> usize
where
    C: Comparator<T> + ?Sized,
{
    haystack.partition_point(|item| comparator.compare(item, probe).is_le())
}

/// First index inside a range that starts at `bound`.
#[inline]
pub fn start_index<T, C>(haystack: &[T], bound: Bound<&T>, comparator: &C) -> usize
where
    C: Comparator<T> + ?Sized,
{
    match bound {
        Bound::Included(probe) => lower_bound(haystack, probe, comparator),
        Bound::Excluded(probe) => upper_bound(haystack, probe, comparator),
        Bound::Unbounded => 0,
    }
}

/// One past the last index inside a range that ends at `bound`.
#[inline]
pub fn end_index<T, C>(haystack: &[T], bound: Bound<&T>, comparator: &C) -> usize
where
    C: Comparator<T> + ?Sized,
{
    match bound {
        Bound::Included(probe) => upper_bound(haystack, probe, comparator),
        Bound::Excluded(probe) => lower_bound(haystack, probe, comparator),
        Bound::Unbounded => haystack.len(),
    }
}

/// Resolves a pair of bounds to a half-open index range. Returns `None` when the range holds no
/// element, including the case where the start key is ordered after the end key.
pub fn resolve<T, C>(
    haystack: &[T],
    start: Bound<&T>,
    end: Bound<&T>,
    comparator: &C,
) -> Option<(usize, usize)>
where
    C: Comparator<T> + ?Sized,
{
    if let (Some(from), Some(to)) = (bound_key(start), bound_key(end)) {
        if comparator.compare(from, to).is_gt() {
            return None;
        }
    }

    let start_idx = start_index(haystack, start, comparator);
    let end_idx = end_index(haystack, end, comparator);

    if start_idx >= end_idx {
        return None;
    }

    Some((start_idx, end_idx))
}

fn bound_key<T>(bound: Bound<&T>) -> Option<&T> {
    match bound {
        Bound::Included(key) | Bound::Excluded(key) => Some(key),
        Bound::Unbounded => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::comparator::NaturalOrder;
    use std::ops::Bound::*;

    const HAYSTACK: [i32; 6] = [1, 2, 4, 4, 4, 7];

    #[test]
    fn bounds_around_duplicates() {
        assert_eq!(lower_bound(&HAYSTACK, &4, &NaturalOrder), 2);
        assert_eq!(upper_bound(&HAYSTACK, &4, &NaturalOrder), 5);
        assert_eq!(lower_bound(&HAYSTACK, &3, &NaturalOrder), 2);
        assert_eq!(upper_bound(&HAYSTACK, &3, &NaturalOrder), 2);
    }

    #[test]
    fn bounds_past_the_ends() {
        assert_eq!(lower_bound(&HAYSTACK, &0, &NaturalOrder), 0);
        assert_eq!(upper_bound(&HAYSTACK, &0, &NaturalOrder), 0);
        assert_eq!(lower_bound(&HAYSTACK, &8, &NaturalOrder), 6);
        assert_eq!(upper_bound(&HAYSTACK, &8, &NaturalOrder), 6);
        assert_eq!(lower_bound::<i32, _>(&[], &8, &NaturalOrder), 0);
    }

    #[test]
    fn resolve_ranges() {
        assert_eq!(resolve(&HAYSTACK, Included(&4), Included(&4), &NaturalOrder), Some((2, 5)));
        assert_eq!(resolve(&HAYSTACK, Excluded(&2), Excluded(&7), &NaturalOrder), Some((2, 5)));
        assert_eq!(resolve(&HAYSTACK, Unbounded, Excluded(&4), &NaturalOrder), Some((0, 2)));
        assert_eq!(resolve(&HAYSTACK, Excluded(&4), Unbounded, &NaturalOrder), Some((5, 6)));
        assert_eq!(resolve(&HAYSTACK, Unbounded, Unbounded, &NaturalOrder), Some((0, 6)));
    }

    #[test]
    fn resolve_empty_ranges() {
        assert_eq!(resolve(&HAYSTACK, Included(&2), Excluded(&2), &NaturalOrder), None);
        assert_eq!(resolve(&HAYSTACK, Included(&5), Included(&6), &NaturalOrder), None);
        assert_eq!(resolve(&HAYSTACK, Included(&7), Included(&1), &NaturalOrder), None);
        assert_eq!(resolve(&HAYSTACK, Excluded(&7), Unbounded, &NaturalOrder), None);
        assert_eq!(resolve::<i32, _>(&[], Unbounded, Unbounded, &NaturalOrder), None);
    }
}
