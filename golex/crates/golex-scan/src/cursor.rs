//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which maintains the read
//! position while the scanner walks the source one character at a time.
//! It tracks the character offset, line and column reported in token
//! positions, plus the matching byte index used to slice lexemes.

use crate::position::Position;

/// A cursor over source text.
///
/// [`advance`](Cursor::advance) is the only way to move forward; every
/// other method is a read-only lookahead.
///
/// # Example
///
/// ```
/// use golex_scan::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb");
/// assert_eq!(cursor.current(), Some('a'));
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('b'));
/// assert_eq!(cursor.line(), 2);
/// assert_eq!(cursor.column(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte index in the source.
    byte_pos: usize,

    /// Characters consumed so far.
    offset: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte_pos: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the character `n` positions ahead (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use golex_scan::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek(0), Some('a'));
    /// assert_eq!(cursor.peek(2), Some('c'));
    /// assert_eq!(cursor.peek(3), None);
    /// ```
    #[inline]
    pub fn peek(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes one character.
    ///
    /// The offset always grows by one. A newline bumps the line and resets
    /// the column to 1; any other character bumps the column. Does nothing
    /// at end of input.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.current() else {
            return;
        };

        self.byte_pos += c.len_utf8();
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use golex_scan::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<=");
    /// assert!(cursor.match_char('<'));
    /// assert!(!cursor.match_char('<'));
    /// assert!(cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `pred` holds.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.byte_pos >= self.source.len()
    }

    /// Snapshot of the cursor as a [`Position`].
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }

    /// Current byte index, usable as a start mark for [`slice_from`](Cursor::slice_from).
    #[inline]
    pub fn byte_pos(&self) -> usize {
        self.byte_pos
    }

    /// Characters consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the source text between byte index `start` and the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use golex_scan::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("var x");
    /// let start = cursor.byte_pos();
    /// cursor.eat_while(|c| c.is_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "var");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.byte_pos]
    }

    /// Returns the unconsumed rest of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.byte_pos..]
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("var x = 42");
        assert_eq!(cursor.current(), Some('v'));
        assert_eq!(cursor.position(), Position::START);
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        cursor.advance();
        assert_eq!(cursor.current(), Some('b'));
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current(), None);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), Position::new(1, 1, 2));
    }

    #[test]
    fn test_offset_counts_chars_not_bytes() {
        let mut cursor = Cursor::new("αβγ");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current(), Some('γ'));
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.byte_pos(), 4);
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd\n\ne");
        cursor.eat_while(|c| c != 'e');
        assert_eq!(cursor.line(), 4);
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.offset(), 7);
    }

    #[test]
    fn test_carriage_return_is_a_column() {
        let mut cursor = Cursor::new("a\r\nb");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), Position::new(2, 1, 3));
        cursor.advance();
        assert_eq!(cursor.position(), Position::new(3, 2, 1));
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new(">>=");
        assert!(cursor.match_char('>'));
        assert!(cursor.match_char('>'));
        assert!(!cursor.match_char('>'));
        assert!(cursor.match_char('='));
        assert!(!cursor.match_char('='));
    }

    #[test]
    fn test_slice_and_remaining() {
        let mut cursor = Cursor::new("päckage main");
        let start = cursor.byte_pos();
        cursor.eat_while(|c| !c.is_whitespace());
        assert_eq!(cursor.slice_from(start), "päckage");
        assert_eq!(cursor.remaining(), " main");
        assert_eq!(cursor.source(), "päckage main");
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), None);
        cursor.advance();
        assert_eq!(cursor.position(), Position::START);
    }
}
