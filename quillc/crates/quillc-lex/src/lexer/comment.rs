//! Whitespace and comment skipping.

use crate::cursor::Lookahead;
use crate::unicode::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and `//` line comments.
    ///
    /// Runs before every token. The second `/` of a comment opener is read
    /// as a raw byte so that a lone `/` followed by an invalid byte still
    /// lexes as division before the decode error is reported.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.cursor.current().char().is_some_and(is_whitespace) {
                self.cursor.advance();
            }

            if self.cursor.current().is('/') && self.cursor.peek_byte() == Some(b'/') {
                self.skip_line_comment();
            } else {
                return;
            }
        }
    }

    /// Skips a comment through its terminating LF, or to end of input.
    fn skip_line_comment(&mut self) {
        loop {
            match self.cursor.current() {
                Lookahead::Char('\n') => {
                    self.cursor.advance();
                    return;
                },
                Lookahead::Char(_) => {
                    self.cursor.advance();
                },
                Lookahead::End | Lookahead::Invalid(_) => return,
            }
        }
    }
}
