//! String literal lexing.

use crate::cursor::Lookahead;
use crate::error::{LexError, LexErrorKind};
use crate::token::{Item, TokenKind};
use crate::unicode::is_line_break;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a double-quoted string literal.
    ///
    /// The value is the raw text between the quotes. There are no escape
    /// sequences, so a backslash is an ordinary character and a string can
    /// never contain `"`. A CR or LF before the closing quote is an error, as
    /// is running out of input. Reaching an invalid byte also counts as an
    /// unterminated string. Both errors point at the opening quote.
    pub(crate) fn lex_string(&mut self) -> Result<Item, LexError> {
        self.cursor.advance();
        let start = self.cursor.lookahead_offset();

        loop {
            match self.cursor.current() {
                Lookahead::Char('"') => break,
                Lookahead::Char(c) if is_line_break(c) => {
                    return Err(self.error(LexErrorKind::NewlineInString));
                },
                Lookahead::Char(_) => {
                    self.cursor.advance();
                },
                Lookahead::End | Lookahead::Invalid(_) => {
                    return Err(self.error(LexErrorKind::UnterminatedString));
                },
            }
        }

        let content = self.cursor.slice_from(start);
        let item = Item::with_value(TokenKind::String, self.token_start, content);
        self.cursor.advance();
        Ok(item)
    }
}
