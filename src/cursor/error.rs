use thiserror::Error;

/// Misuse of a [`Cursor`](crate::cursor::Cursor).
///
/// These are programming errors on the caller's side. Running out of data is never reported
/// through this type: navigable queries answer with `None`, and range views hand back a cursor
/// that yields nothing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorError {
    /// `current` was read before the first successful `advance`.
    #[error("cursor read before the first successful advance")]
    Unstarted,
    /// `current` was read after `advance` returned `false`.
    #[error("cursor read after it was exhausted")]
    Exhausted,
}
