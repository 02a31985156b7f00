use crate::cursor::{Cursor, CursorError};

/// A reversible cursor over a borrowed slice.
///
/// This is what [`SortedList`](crate::SortedList) hands out for full scans and range views. It
/// borrows the list's storage, so the list cannot be mutated while the cursor is alive.
///
/// ```
/// use navlist::cursor::{Cursor, SliceCursor};
///
/// let mut cursor = SliceCursor::new(&["a", "b", "c"]);
/// assert!(cursor.advance());
/// assert!(cursor.advance());
/// assert_eq!(*cursor.current(), "b");
///
/// cursor.reverse();
/// assert!(cursor.advance());
/// assert_eq!(*cursor.current(), "a");
/// assert!(!cursor.advance());
/// ```
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    // 0 is before the first element, `slice.len() + 1` is past the last one, and anything in
    // between points at `slice[position - 1]`.
    position: usize,
    forward: bool,
}

impl<'a, T> SliceCursor<'a, T> {
    /// A cursor that walks `slice` front to back.
    pub fn new(slice: &'a [T]) -> Self {
        Self {
            slice,
            position: 0,
            forward: true,
        }
    }

    /// A cursor that walks `slice` back to front.
    pub fn new_reversed(slice: &'a [T]) -> Self {
        Self {
            slice,
            position: slice.len() + 1,
            forward: false,
        }
    }

    /// Flips the direction of travel. The cursor keeps its position, so the next `advance` goes
    /// back the way it came.
    pub fn reverse(&mut self) {
        self.forward = !self.forward;
    }

    /// Returns `true` if the cursor walks front to back.
    pub fn is_forward(&self) -> bool {
        self.forward
    }

    /// Moves back to before the first element in the current direction.
    pub fn reset(&mut self) {
        self.position = if self.forward { 0 } else { self.slice.len() + 1 };
    }

    /// Number of elements that further calls to `advance` would visit.
    pub fn remaining(&self) -> usize {
        if self.forward {
            self.slice.len().saturating_sub(self.position)
        } else {
            self.position.saturating_sub(1)
        }
    }

    /// The slice being walked.
    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    /// Number of elements in the walked slice.
    pub fn len(&self) -> usize {
        self.slice.len()
    }

    /// Returns `true` if the walked slice is empty.
    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slice: self.slice,
            position: self.position,
            forward: self.forward,
        }
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn advance(&mut self) -> bool {
        if self.forward {
            if self.position <= self.slice.len() {
                self.position += 1;
            }
        } else if self.position > 0 {
            self.position -= 1;
        }

        self.position >= 1 && self.position <= self.slice.len()
    }

    #[inline]
    fn try_current(&self) -> Result<&'a T, CursorError> {
        if self.position >= 1 && self.position <= self.slice.len() {
            return Ok(&self.slice[self.position - 1]);
        }

        let before_start = if self.forward {
            self.position == 0
        } else {
            self.position > self.slice.len()
        };

        if before_start {
            Err(CursorError::Unstarted)
        } else {
            Err(CursorError::Exhausted)
        }
    }
}
