use crate::cursor::{Cursor, CursorError};

/// A cursor over the longest prefix of its source whose elements satisfy a predicate.
///
/// The first rejected element ends the traversal for good: later elements are never looked at,
/// even if they would pass. That makes it a cheap upper bound on an ordered scan, e.g. "walk the
/// tail from `k` while the key still shares a prefix".
///
/// This `struct` is created by [`Cursor::take_while`].
#[derive(Debug, Clone)]
pub struct TakeWhile<S, P> {
    source: S,
    predicate: P,
    stopped: bool,
}

impl<S, P> TakeWhile<S, P> {
    /// Yields elements of `source` until `predicate` first rejects one.
    pub fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            stopped: false,
        }
    }
}

impl<S, P> Cursor for TakeWhile<S, P>
where
    S: Cursor,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> bool {
        if self.stopped {
            return false;
        }

        let accepted = self.source.advance()
            && match self.source.try_current() {
                Ok(item) => (self.predicate)(&item),
                Err(_) => false,
            };
        if !accepted {
            self.stopped = true;
        }

        accepted
    }

    fn try_current(&self) -> Result<S::Item, CursorError> {
        if self.stopped {
            return Err(CursorError::Exhausted);
        }

        self.source.try_current()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cursor::{to_vec, SliceCursor};

    #[test]
    fn takes_prefix() {
        let cursor = SliceCursor::new(&[1, 2, 3, 10, 4, 5]).take_while(|x| **x < 5);
        assert_eq!(to_vec(cursor), vec![&1, &2, &3]);
    }

    #[test]
    fn stops_permanently() {
        let mut cursor = SliceCursor::new(&[1, 9, 2, 3]).take_while(|x| **x < 5);
        assert!(cursor.advance());
        assert!(!cursor.advance());
        assert!(!cursor.advance());
        assert!(!cursor.advance());
        assert_eq!(cursor.try_current(), Err(CursorError::Exhausted));
    }

    #[test]
    fn rejecting_first_element_yields_nothing() {
        let cursor = SliceCursor::new(&[7, 1]).take_while(|x| **x < 5);
        assert!(to_vec(cursor).is_empty());
    }

    #[test]
    fn exhausted_source() {
        let mut cursor = SliceCursor::new(&[1, 2]).take_while(|_| true);
        assert!(cursor.advance());
        assert!(cursor.advance());
        assert!(!cursor.advance());
        assert_eq!(cursor.try_current(), Err(CursorError::Exhausted));
    }

    #[test]
    fn clone_keeps_stopped_state() {
        let mut cursor = SliceCursor::new(&[1, 8, 2]).take_while(|x| **x < 5);
        cursor.advance();
        let fresh = cursor.clone();
        cursor.advance();

        let mut stopped = cursor.clone();
        assert!(!stopped.advance());
        assert_eq!(to_vec(fresh), Vec::<&i32>::new());
    }
}
