use crate::cursor::Cursor;
use thiserror::Error;

/// Outcome of a parser that cannot fail: the parsed value and the cursor
/// positioned after whatever it consumed. No flag is carried; the type
/// existing at all is the success proof.
pub type PureResult<'code, T> = (T, Cursor<'code>);

/// Outcome of a parser that can fail. `Ok` carries value and new cursor,
/// `Err` carries a [`Miss`]. `?` propagates misses the same way it
/// propagates any other error.
pub type ParseResult<'code, T> = Result<PureResult<'code, T>, Miss<'code>>;

/// The single engine-level failure: the input at this cursor was not
/// recognized. There is deliberately no distinction between "malformed"
/// and "absent" input, and no message; callers wanting diagnostics build
/// them on top.
///
/// A miss always carries the cursor the failing parser was *invoked*
/// with, so a failed attempt observably consumed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no match ({} bytes of input left)", .cursor.len())]
pub struct Miss<'code> {
    cursor: Cursor<'code>,
}

impl<'code> Miss<'code> {
    /// A miss at the given input cursor.
    pub fn at(cursor: Cursor<'code>) -> Self {
        Miss { cursor }
    }

    /// The cursor the failing parser was invoked with.
    pub fn cursor(&self) -> Cursor<'code> {
        self.cursor
    }
}
