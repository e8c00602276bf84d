//! Scan cursor over the bytes of an input string.

use crate::text::ascii::is_space;

/// Byte position cursor used by the grammar scanners.
///
/// Every move is expressed against the underlying `&str`, and the slice
/// helpers hand back subslices of it. Positions only ever stop on ASCII
/// delimiter bytes or the end of input, so the returned ranges always fall
/// on UTF-8 boundaries.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The byte under the cursor, or `None` at end of input.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Advance past the current byte.
    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    pub(crate) fn skip_spaces(&mut self) {
        while let Some(b) = self.peek() {
            if !is_space(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Advance to the next occurrence of `target` (or end of input),
    /// discarding everything in between. The target byte is not consumed.
    pub(crate) fn skip_until(&mut self, target: u8) {
        while let Some(b) = self.peek() {
            if b == target {
                break;
            }
            self.pos += 1;
        }
    }

    /// Consume bytes while `pred` holds and return them as a slice.
    pub(crate) fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Consume bytes up to (not including) `target` or end of input, and
    /// return them as a slice.
    pub(crate) fn take_until(&mut self, target: u8) -> &'a str {
        self.take_while(|b| b != target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_spaces() {
        let mut cur = Cursor::new(" \t\x0bx");
        cur.skip_spaces();
        assert_eq!(cur.peek(), Some(b'x'));
    }

    #[test]
    fn test_take_until_leaves_target() {
        let mut cur = Cursor::new("abc]rest");
        assert_eq!(cur.take_until(b']'), "abc");
        assert_eq!(cur.peek(), Some(b']'));
    }

    #[test]
    fn test_take_until_missing_target() {
        let mut cur = Cursor::new("abc");
        assert_eq!(cur.take_until(b']'), "abc");
        assert!(cur.is_at_end());
    }

    #[test]
    fn test_skip_until() {
        let mut cur = Cursor::new("junk:rest");
        cur.skip_until(b':');
        assert_eq!(cur.peek(), Some(b':'));
        cur.skip_until(b'@');
        assert!(cur.is_at_end());
    }
}
