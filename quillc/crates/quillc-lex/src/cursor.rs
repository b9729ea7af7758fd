//! Character cursor for traversing raw source bytes.
//!
//! The cursor decodes UTF-8 one character at a time and keeps a single
//! character of lookahead. Two positions are tracked: the position of the
//! lookahead character and the position the next decoded character will
//! receive. Decoding never panics; an invalid byte becomes a terminal
//! [`Lookahead::Invalid`] that the scanner turns into an error.

use std::borrow::Cow;

use quillc_util::Position;

/// The outcome of decoding one character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookahead {
    /// A successfully decoded character
    Char(char),
    /// No bytes remain
    End,
    /// The bytes at this offset are not valid UTF-8; holds the first byte
    Invalid(u8),
}

impl Lookahead {
    /// The decoded character, if any.
    #[inline]
    pub fn char(self) -> Option<char> {
        match self {
            Lookahead::Char(c) => Some(c),
            Lookahead::End | Lookahead::Invalid(_) => None,
        }
    }

    /// Returns true if this is exactly the character `expected`.
    #[inline]
    pub fn is(self, expected: char) -> bool {
        self == Lookahead::Char(expected)
    }

    /// Returns true for `End` and `Invalid`; advancing past these is a no-op.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Lookahead::Char(_))
    }
}

/// A cursor over source bytes with one character of lookahead.
///
/// # Example
///
/// ```
/// use quillc_lex::cursor::{Cursor, Lookahead};
/// use quillc_util::Position;
///
/// let mut cursor = Cursor::new("é=".as_bytes());
/// assert_eq!(cursor.current(), Lookahead::Char('é'));
/// assert_eq!(cursor.advance(), Lookahead::Char('='));
/// assert_eq!(cursor.position(), Position::new(1, 2));
/// assert_eq!(cursor.advance(), Lookahead::End);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The raw input.
    input: &'a [u8],

    /// Byte offset where the lookahead character starts.
    lookahead_offset: usize,

    /// Byte offset just past the lookahead character.
    offset: usize,

    /// The lookahead character.
    current: Lookahead,

    /// Position of the lookahead character.
    position: Position,

    /// Position the next decoded character will receive.
    next_position: Position,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor and decodes the first character.
    pub fn new(input: &'a [u8]) -> Self {
        let mut cursor = Self {
            input,
            lookahead_offset: 0,
            offset: 0,
            current: Lookahead::End,
            position: Position::START,
            next_position: Position::START,
        };
        cursor.current = cursor.decode();
        cursor
    }

    /// The lookahead character.
    #[inline]
    pub fn current(&self) -> Lookahead {
        self.current
    }

    /// Position of the lookahead character.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Byte offset where the lookahead character starts.
    #[inline]
    pub fn lookahead_offset(&self) -> usize {
        self.lookahead_offset
    }

    /// The raw byte immediately after the lookahead character.
    ///
    /// This looks at bytes, not characters, so it never decodes and never
    /// disturbs a pending decode error. Returns `None` once the lookahead is
    /// `End` or `Invalid`.
    #[inline]
    pub fn peek_byte(&self) -> Option<u8> {
        if self.current.is_terminal() {
            return None;
        }
        self.input.get(self.offset).copied()
    }

    /// Returns true when no characters remain.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current == Lookahead::End
    }

    /// Consumes the lookahead character and decodes the next one.
    ///
    /// Once the cursor reaches `End` or `Invalid` it stays there.
    pub fn advance(&mut self) -> Lookahead {
        if !self.current.is_terminal() {
            self.current = self.decode();
        }
        self.current
    }

    /// Consumes the lookahead if it is `expected`.
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current.is(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// The text from `start` up to (not including) the lookahead character.
    ///
    /// Everything before the lookahead has been decoded successfully, so the
    /// result borrows from the input.
    pub fn slice_from(&self, start: usize) -> Cow<'a, str> {
        let end = self.lookahead_offset.max(start);
        String::from_utf8_lossy(&self.input[start..end])
    }

    fn decode(&mut self) -> Lookahead {
        self.position = self.next_position;
        self.lookahead_offset = self.offset;

        let rest = &self.input[self.offset..];
        let Some(&first) = rest.first() else {
            return Lookahead::End;
        };

        match decode_char(rest) {
            Some((c, width)) => {
                self.offset += width;
                self.next_position = if c == '\n' {
                    self.next_position.next_line()
                } else {
                    self.next_position.next_column()
                };
                Lookahead::Char(c)
            },
            None => Lookahead::Invalid(first),
        }
    }
}

/// Decodes the UTF-8 character at the front of `bytes`.
///
/// Returns the character and its encoded width, or `None` for truncated,
/// overlong, surrogate or otherwise malformed sequences.
fn decode_char(bytes: &[u8]) -> Option<(char, usize)> {
    let width = match *bytes.first()? {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };
    let encoded = bytes.get(..width)?;
    let c = std::str::from_utf8(encoded).ok()?.chars().next()?;
    Some((c, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut cursor = Cursor::new(b"");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), Position::START);
        assert_eq!(cursor.advance(), Lookahead::End);
        assert_eq!(cursor.position(), Position::START);
    }

    #[test]
    fn test_newline_moves_to_next_line() {
        let mut cursor = Cursor::new(b"a\nb");
        assert_eq!(cursor.advance(), Lookahead::Char('\n'));
        assert_eq!(cursor.position(), Position::new(1, 2));
        assert_eq!(cursor.advance(), Lookahead::Char('b'));
        assert_eq!(cursor.position(), Position::new(2, 1));
        assert_eq!(cursor.advance(), Lookahead::End);
        assert_eq!(cursor.position(), Position::new(2, 2));
    }

    #[test]
    fn test_columns_count_characters() {
        let mut cursor = Cursor::new("日本x".as_bytes());
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current(), Lookahead::Char('x'));
        assert_eq!(cursor.position(), Position::new(1, 3));
        assert_eq!(cursor.lookahead_offset(), 6);
    }

    #[test]
    fn test_invalid_byte_is_sticky() {
        let mut cursor = Cursor::new(b"a\xffb");
        assert_eq!(cursor.advance(), Lookahead::Invalid(0xff));
        assert_eq!(cursor.position(), Position::new(1, 2));
        assert_eq!(cursor.advance(), Lookahead::Invalid(0xff));
        assert_eq!(cursor.position(), Position::new(1, 2));
    }

    #[test]
    fn test_truncated_sequence_is_invalid() {
        let cursor = Cursor::new(&[0xE6, 0x97]);
        assert_eq!(cursor.current(), Lookahead::Invalid(0xE6));
    }

    #[test]
    fn test_overlong_and_surrogate_are_invalid() {
        assert_eq!(Cursor::new(&[0xC0, 0xAF]).current(), Lookahead::Invalid(0xC0));
        assert_eq!(Cursor::new(&[0xED, 0xA0, 0x80]).current(), Lookahead::Invalid(0xED));
    }

    #[test]
    fn test_peek_byte_sees_raw_bytes() {
        let mut cursor = Cursor::new(b"/\xff");
        assert_eq!(cursor.current(), Lookahead::Char('/'));
        assert_eq!(cursor.peek_byte(), Some(0xff));
        cursor.advance();
        assert_eq!(cursor.current(), Lookahead::Invalid(0xff));
        assert_eq!(cursor.peek_byte(), None);
    }

    #[test]
    fn test_peek_byte_at_end() {
        let mut cursor = Cursor::new(b"/");
        assert_eq!(cursor.peek_byte(), None);
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek_byte(), None);
        assert_eq!(Cursor::new(b"\xff/").peek_byte(), None);
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new(b"=>");
        assert!(!cursor.match_char('>'));
        assert!(cursor.match_char('='));
        assert!(cursor.match_char('>'));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new(b"abc def");
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.slice_from(0), "abc");
        assert_eq!(cursor.slice_from(3), "");
    }
}
