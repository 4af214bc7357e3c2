/// A cursor for byte-by-byte scanning with position tracking.
///
/// Callers only stop on ASCII bytes, so every position they slice at is a
/// char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances to just past the next occurrence of `b`, returning the text
    /// skipped over (without `b`). Leaves the cursor untouched if `b` never occurs.
    pub fn take_until(&mut self, b: u8) -> Option<&'a str> {
        let rest = self.s.get(self.i..)?;
        let offset = rest.bytes().position(|x| x == b)?;
        let taken = &rest[..offset];
        self.i += offset + 1;
        Some(taken)
    }

    /// The unread part of the input.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.rest(), "ello");
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("<b>x");
        assert!(cur.starts_with(b"<b>"));
        assert!(!cur.starts_with(b"</b>"));
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("ab");
        assert!(!cur.starts_with(b"abcdef"));
        cur.bump();
        assert!(!cur.starts_with(b"bc"));
        assert!(cur.starts_with(b"b"));
    }

    #[test]
    fn take_until_consumes_delimiter() {
        let mut cur = Cursor::new("<size=16>rest");
        cur.bump();
        assert_eq!(cur.take_until(b'>'), Some("size=16"));
        assert_eq!(cur.rest(), "rest");
    }

    #[test]
    fn take_until_missing_delimiter_leaves_cursor() {
        let mut cur = Cursor::new("<unclosed");
        cur.bump();
        assert_eq!(cur.take_until(b'>'), None);
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert!(cur.eof());
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.peek(), None);
    }
}
