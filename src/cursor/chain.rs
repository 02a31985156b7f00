use tracing::debug;

use crate::cursor::{BoxedCursor, Cursor, CursorError, Empty};

/// A cursor that exhausts its first source and then continues with the second.
///
/// This `struct` is created by [`Cursor::chain`]. See [`chain_all`] for more than two sources.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
    on_second: bool,
}

impl<A, B> Chain<A, B> {
    /// Visits all of `first`, then all of `second`.
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            on_second: false,
        }
    }
}

impl<A, B> Cursor for Chain<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        if !self.on_second {
            if self.first.advance() {
                return true;
            }
            self.on_second = true;
        }

        self.second.advance()
    }

    #[inline]
    fn try_current(&self) -> Result<A::Item, CursorError> {
        if self.on_second {
            self.second.try_current()
        } else {
            self.first.try_current()
        }
    }
}

/// Concatenates any number of cursors, in order, by right-folding [`Chain`].
///
/// No cursors gives an empty cursor.
pub fn chain_all<'a, C>(cursors: Vec<C>) -> BoxedCursor<'a, C::Item>
where
    C: Cursor + Clone + 'a,
    C::Item: 'a,
{
    debug!(sources = cursors.len(), "chaining cursors");

    let mut rest = cursors.into_iter().rev();
    let Some(last) = rest.next() else {
        return Empty::new().boxed();
    };

    rest.fold(last.boxed(), |tail, head| head.chain(tail).boxed())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cursor::{to_vec, SliceCursor};

    #[test]
    fn first_then_second() {
        let cursor = SliceCursor::new(&[1, 2]).chain(SliceCursor::new(&[3, 4]));
        assert_eq!(to_vec(cursor), vec![&1, &2, &3, &4]);
    }

    #[test]
    fn empty_sides() {
        let left_empty = Empty::new().chain(SliceCursor::new(&[1]));
        assert_eq!(to_vec(left_empty), vec![&1]);

        let right_empty = SliceCursor::new(&[1]).chain(Empty::new());
        assert_eq!(to_vec(right_empty), vec![&1]);
    }

    #[test]
    fn current_tracks_active_side() {
        let mut cursor = SliceCursor::new(&['a']).chain(SliceCursor::new(&['b']));
        assert_eq!(cursor.try_current(), Err(CursorError::Unstarted));
        cursor.advance();
        assert_eq!(*cursor.current(), 'a');
        cursor.advance();
        assert_eq!(*cursor.current(), 'b');
        assert!(!cursor.advance());
        assert_eq!(cursor.try_current(), Err(CursorError::Exhausted));
    }

    #[test]
    fn clone_copies_both_sides() {
        let mut cursor = SliceCursor::new(&[1]).chain(SliceCursor::new(&[2, 3]));
        cursor.advance();
        cursor.advance();

        let clone = cursor.clone();
        assert_eq!(to_vec(cursor), vec![&3]);
        assert_eq!(*clone.current(), 2);
        assert_eq!(to_vec(clone), vec![&3]);
    }

    #[test]
    fn chain_many() {
        let parts: [&[i32]; 4] = [&[1, 2], &[], &[3], &[4, 5]];
        let cursors = parts.iter().map(|part| SliceCursor::new(*part)).collect();
        assert_eq!(to_vec(chain_all(cursors)), vec![&1, &2, &3, &4, &5]);
    }

    #[test]
    fn chain_none() {
        let cursor = chain_all(Vec::<SliceCursor<'_, u8>>::new());
        assert!(to_vec(cursor).is_empty());
    }
}
