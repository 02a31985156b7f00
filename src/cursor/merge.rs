use tracing::debug;

use crate::core::comparator::Comparator;
use crate::cursor::{BoxedCursor, Cursor, CursorError, Empty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Lazily merges two cursors that are each sorted under the same comparator.
///
/// At every step the smaller head is exposed. Equal heads are taken from the left source first,
/// so merging is stable: elements of `left` precede their duplicates in `right`. Once one side
/// runs dry the merge passes the other one through.
///
/// This `struct` is created by [`Cursor::merge_by`]. See [`merge_all`] for more than two sources.
///
/// ```
/// use navlist::cursor::{to_vec, Cursor, SliceCursor};
/// use navlist::NaturalOrder;
///
/// let merged = SliceCursor::new(&[1, 3, 5]).merge_by(SliceCursor::new(&[2, 3, 4]), NaturalOrder);
/// assert_eq!(to_vec(merged), vec![&1, &2, &3, &3, &4, &5]);
/// ```
#[derive(Debug, Clone)]
pub struct Merge<L, R, C> {
    left: L,
    right: R,
    comparator: C,
    left_live: bool,
    right_live: bool,
    started: bool,
    current: Option<Side>,
}

impl<L, R, C> Merge<L, R, C>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
    C: Comparator<L::Item>,
{
    /// Interleaves two sorted cursors. Equal elements come from `left` first.
    pub fn new(left: L, right: R, comparator: C) -> Self {
        Self {
            left,
            right,
            comparator,
            left_live: false,
            right_live: false,
            started: false,
            current: None,
        }
    }

    fn pick(&self) -> Option<Side> {
        let left = if self.left_live { self.left.try_current().ok() } else { None };
        let right = if self.right_live { self.right.try_current().ok() } else { None };

        match (left, right) {
            (Some(left), Some(right)) => {
                if self.comparator.compare(&left, &right).is_gt() {
                    Some(Side::Right)
                } else {
                    Some(Side::Left)
                }
            }
            (Some(_), None) => Some(Side::Left),
            (None, Some(_)) => Some(Side::Right),
            (None, None) => None,
        }
    }
}

impl<L, R, C> Cursor for Merge<L, R, C>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
    C: Comparator<L::Item>,
{
    type Item = L::Item;

    fn advance(&mut self) -> bool {
        if !self.started {
            self.started = true;
            self.left_live = self.left.advance();
            self.right_live = self.right.advance();
        } else {
            match self.current {
                Some(Side::Left) => self.left_live = self.left.advance(),
                Some(Side::Right) => self.right_live = self.right.advance(),
                None => return false,
            }
        }

        self.current = self.pick();
        self.current.is_some()
    }

    fn try_current(&self) -> Result<L::Item, CursorError> {
        match self.current {
            Some(Side::Left) => self.left.try_current(),
            Some(Side::Right) => self.right.try_current(),
            None if self.started => Err(CursorError::Exhausted),
            None => Err(CursorError::Unstarted),
        }
    }
}

/// Merges any number of sorted cursors into one sorted cursor.
///
/// The list is split at its midpoint, each half is merged recursively and the two results are
/// merged, which costs `O(n log k)` comparisons for `k` sources. Ties favour the source that
/// comes earlier in `cursors`. No cursors gives an empty cursor.
pub fn merge_all<'a, S, C>(cursors: Vec<S>, comparator: C) -> BoxedCursor<'a, S::Item>
where
    S: Cursor + Clone + 'a,
    S::Item: 'a,
    C: Comparator<S::Item> + Clone + 'a,
{
    debug!(sources = cursors.len(), "merging sorted cursors");

    merge_balanced(cursors, &comparator)
}

fn merge_balanced<'a, S, C>(mut cursors: Vec<S>, comparator: &C) -> BoxedCursor<'a, S::Item>
where
    S: Cursor + Clone + 'a,
    S::Item: 'a,
    C: Comparator<S::Item> + Clone + 'a,
{
    match cursors.len() {
        0 => Empty::new().boxed(),
        1 => BoxedCursor::new(cursors.remove(0)),
        len => {
            let right = cursors.split_off(len / 2);
            let left = merge_balanced(cursors, comparator);
            let right = merge_balanced(right, comparator);

            left.merge_by(right, comparator.clone()).boxed()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::comparator::{ByKey, NaturalOrder};
    use crate::cursor::{to_vec, SliceCursor};
    use rand::{Rng, SeedableRng};

    #[test]
    fn interleaves() {
        let merged =
            SliceCursor::new(&[1, 3, 5]).merge_by(SliceCursor::new(&[2, 3, 4]), NaturalOrder);
        assert_eq!(to_vec(merged), vec![&1, &2, &3, &3, &4, &5]);
    }

    #[test]
    fn ties_prefer_left() {
        let left = [(1, 'l'), (2, 'l')];
        let right = [(1, 'r'), (2, 'r'), (3, 'r')];
        let by_key = ByKey(|pair: &&(i32, char)| pair.0);

        let merged = SliceCursor::new(&left).merge_by(SliceCursor::new(&right), by_key);
        assert_eq!(
            to_vec(merged),
            vec![&(1, 'l'), &(1, 'r'), &(2, 'l'), &(2, 'r'), &(3, 'r')]
        );
    }

    #[test]
    fn one_side_empty() {
        let merged = Empty::new().merge_by(SliceCursor::new(&[1, 2]), NaturalOrder);
        assert_eq!(to_vec(merged), vec![&1, &2]);

        let merged = SliceCursor::new(&[1, 2]).merge_by(Empty::new(), NaturalOrder);
        assert_eq!(to_vec(merged), vec![&1, &2]);
    }

    #[test]
    fn state_errors() {
        let mut merged = SliceCursor::new(&[1]).merge_by(SliceCursor::new(&[2]), NaturalOrder);
        assert_eq!(merged.try_current(), Err(CursorError::Unstarted));
        assert!(merged.advance());
        assert!(merged.advance());
        assert!(!merged.advance());
        assert!(!merged.advance());
        assert_eq!(merged.try_current(), Err(CursorError::Exhausted));
    }

    #[test]
    fn clone_mid_merge() {
        let mut merged =
            SliceCursor::new(&[1, 4]).merge_by(SliceCursor::new(&[2, 3]), NaturalOrder);
        merged.advance();
        merged.advance();
        let clone = merged.clone();

        assert_eq!(to_vec(merged), vec![&3, &4]);
        assert_eq!(*clone.current(), 2);
        assert_eq!(to_vec(clone), vec![&3, &4]);
    }

    #[test]
    fn merge_all_sources() {
        let sources: [&[u32]; 5] = [&[1, 5, 9], &[2, 6], &[], &[0, 3, 7, 10], &[4, 8]];
        let cursors = sources.iter().map(|source| SliceCursor::new(*source)).collect();

        let merged = merge_all(cursors, NaturalOrder);
        assert_eq!(to_vec(merged.map(|x| *x)), (0..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn merge_all_edge_counts() {
        let none = merge_all(Vec::<SliceCursor<'_, u8>>::new(), NaturalOrder);
        assert!(to_vec(none).is_empty());

        let one = merge_all(vec![SliceCursor::new(&[3, 1, 2])], NaturalOrder);
        assert_eq!(to_vec(one), vec![&3, &1, &2]);
    }

    #[test]
    fn merge_all_is_stable_across_sources() {
        let sources = [[(0, 0), (1, 0)], [(0, 1), (1, 1)], [(0, 2), (1, 2)]];
        let cursors = sources.iter().map(|source| SliceCursor::new(&source[..])).collect();
        let by_key = ByKey(|pair: &&(u8, u8)| pair.0);

        let merged: Vec<(u8, u8)> = to_vec(merge_all(cursors, by_key).map(|pair| *pair));
        assert_eq!(merged, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn merge_all_random() {
        let mut rng = rand::rngs::StdRng::from_seed([7u8; 32]);
        let mut sources: Vec<Vec<i64>> = (0..9)
            .map(|_| {
                let len = rng.gen_range(0..50);
                (0..len).map(|_| rng.gen_range(-100..100)).collect()
            })
            .collect();
        sources.iter_mut().for_each(|source| source.sort());

        let mut expected: Vec<i64> = sources.iter().flatten().copied().collect();
        expected.sort();

        let cursors = sources.iter().map(|source| SliceCursor::new(source.as_slice())).collect();
        let merged = merge_all(cursors, NaturalOrder).map(|x| *x);
        assert_eq!(to_vec(merged), expected);
    }
}
