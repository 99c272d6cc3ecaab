use std::cmp::Ordering;

/// Immutable view into a contiguous input buffer.
///
/// A cursor is a window over bytes owned by the caller; the caller keeps
/// the buffer alive for the whole parse and the cursor never copies it.
/// Cursors are copied by value at every branch point, which is what makes
/// backtracking free: a failed alternative drops its copy and the
/// original window is untouched.
///
/// `Null` marks a cursor that no parser has produced yet. It behaves like
/// an empty window for every read, comparison, and slice, but can be told
/// apart from a genuinely empty one with [`Cursor::is_null`].
#[derive(Debug, Clone, Copy)]
pub enum Cursor<'code> {
    View { text: &'code [u8] },
    Null,
}

impl<'code> Cursor<'code> {
    pub fn new(text: &'code [u8]) -> Self {
        Cursor::View { text }
    }

    pub fn null() -> Self {
        Cursor::Null
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cursor::Null)
    }

    /// The bytes still in view. A null cursor views nothing.
    pub fn bytes(&self) -> &'code [u8] {
        match self {
            Cursor::View { text } => text,
            Cursor::Null => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }

    /// The first byte in view, if any.
    pub fn first(&self) -> Option<u8> {
        self.bytes().first().copied()
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.bytes().starts_with(prefix)
    }

    pub fn starts_with_byte(&self, byte: u8) -> bool {
        self.first() == Some(byte)
    }

    /// A cursor positioned `offset` bytes further in. Clamps to the end
    /// of the window rather than reading past it.
    pub fn advance(self, offset: usize) -> Self {
        match self {
            Cursor::View { text } => Cursor::View {
                text: &text[offset.min(text.len())..],
            },
            Cursor::Null => Cursor::Null,
        }
    }

    /// A sub-window of at most `count` bytes starting at `offset`. Both
    /// bounds clamp to the end of the window.
    pub fn slice(self, offset: usize, count: usize) -> Self {
        match self {
            Cursor::View { text } => {
                let start = offset.min(text.len());
                let end = start + count.min(text.len() - start);
                Cursor::View {
                    text: &text[start..end],
                }
            }
            Cursor::Null => Cursor::Null,
        }
    }

    /// The viewed bytes as UTF-8 text, when they are valid UTF-8.
    pub fn as_str(&self) -> Option<&'code str> {
        std::str::from_utf8(self.bytes()).ok()
    }
}

impl<'code> From<&'code str> for Cursor<'code> {
    fn from(text: &'code str) -> Self {
        Cursor::new(text.as_bytes())
    }
}

impl<'code> From<&'code [u8]> for Cursor<'code> {
    fn from(text: &'code [u8]) -> Self {
        Cursor::new(text)
    }
}

/// Cursors compare by the byte sequence they view, not by position in the
/// buffer. A null cursor compares equal to an empty one.
impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes() == other.bytes()
    }
}

impl Eq for Cursor<'_> {}

impl PartialEq<&str> for Cursor<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes() == other.as_bytes()
    }
}

impl PartialEq<&[u8]> for Cursor<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes() == *other
    }
}

/// Lexicographic byte order. A strict prefix sorts before the longer
/// sequence, so the empty (or null) cursor is the minimum.
impl Ord for Cursor<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes().cmp(other.bytes())
    }
}

impl PartialOrd for Cursor<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_view() {
        let cursor = Cursor::from("hello");
        assert_eq!(cursor.len(), 5);
        assert!(!cursor.is_empty());
        assert!(!cursor.is_null());
        assert_eq!(cursor.first(), Some(b'h'));
    }

    #[test]
    fn test_null_acts_empty() {
        let cursor = Cursor::null();
        assert!(cursor.is_null());
        assert!(cursor.is_empty());
        assert_eq!(cursor.len(), 0);
        assert_eq!(cursor.first(), None);
        assert_eq!(cursor.bytes(), b"");
    }

    #[test]
    fn test_null_distinguished_from_empty() {
        let null = Cursor::null();
        let empty = Cursor::from("");
        assert!(null.is_null());
        assert!(!empty.is_null());
        // but they view the same (zero-length) byte sequence
        assert_eq!(null, empty);
    }

    #[test]
    fn test_starts_with() {
        let cursor = Cursor::from("hello world");
        assert!(cursor.starts_with(b"hello"));
        assert!(cursor.starts_with(b""));
        assert!(!cursor.starts_with(b"world"));
        assert!(cursor.starts_with_byte(b'h'));
        assert!(!cursor.starts_with_byte(b'w'));
    }

    #[test]
    fn test_starts_with_longer_than_view() {
        let cursor = Cursor::from("ab");
        assert!(!cursor.starts_with(b"abc"));
    }

    #[test]
    fn test_advance() {
        let cursor = Cursor::from("hello");
        assert_eq!(cursor.advance(2), "llo");
        assert_eq!(cursor.advance(5), "");
        // past the end clamps instead of panicking
        assert_eq!(cursor.advance(100), "");
    }

    #[test]
    fn test_slice_clamps() {
        let cursor = Cursor::from("hello");
        assert_eq!(cursor.slice(1, 3), "ell");
        assert_eq!(cursor.slice(3, 100), "lo");
        assert_eq!(cursor.slice(100, 100), "");
    }

    #[test]
    fn test_equality_by_content() {
        let buffer = "abcabc";
        let first = Cursor::from(buffer).slice(0, 3);
        let second = Cursor::from(buffer).slice(3, 3);
        // different positions in the buffer, same characters
        assert_eq!(first, second);
        assert_ne!(first, Cursor::from("abd"));
    }

    #[test]
    fn test_lexicographic_order() {
        assert!(Cursor::from("abc") < Cursor::from("abd"));
        assert!(Cursor::from("ab") < Cursor::from("abc"));
        assert!(Cursor::from("") < Cursor::from("a"));
        assert!(Cursor::null() < Cursor::from("a"));
        assert_eq!(
            Cursor::from("abc").cmp(&Cursor::from("abc")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_copy_independence() {
        let cursor = Cursor::from("abcd");
        let saved = cursor;
        let advanced = cursor.advance(2);
        assert_eq!(advanced, "cd");
        assert_eq!(saved, "abcd");
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Cursor::from("hej").as_str(), Some("hej"));
        let bad: &[u8] = &[0xff, 0xfe];
        assert_eq!(Cursor::new(bad).as_str(), None);
    }
}
