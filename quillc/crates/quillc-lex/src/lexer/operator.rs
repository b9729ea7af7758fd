//! Operator lexing.
//!
//! Single-character punctuation is handled directly by the dispatcher. This
//! module covers the characters that may start a longer token.

use crate::error::{LexError, LexErrorKind};
use crate::token::{Item, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `=` or `==`.
    pub(crate) fn lex_equals(&mut self) -> Item {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.item(TokenKind::Equal)
        } else {
            self.item(TokenKind::Assign)
        }
    }

    /// Lexes `<` or `<=`.
    pub(crate) fn lex_less(&mut self) -> Item {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.item(TokenKind::Lte)
        } else {
            self.item(TokenKind::Lt)
        }
    }

    /// Lexes `>` or `>=`.
    pub(crate) fn lex_greater(&mut self) -> Item {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.item(TokenKind::Gte)
        } else {
            self.item(TokenKind::Gt)
        }
    }

    /// Lexes `!=`. A bare `!` is an error; negation is spelled `not`.
    pub(crate) fn lex_bang(&mut self) -> Result<Item, LexError> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            return Ok(self.item(TokenKind::NotEqual));
        }

        // Line breaks and control characters would split the message.
        let found = match self.cursor.current().char() {
            Some(c) if !c.is_whitespace() && !c.is_control() => format!("!{c}"),
            _ => "!".to_string(),
        };
        Err(self.error(LexErrorKind::ExpectedNotEqual { found }))
    }

    /// Lexes `.` or `...`. Exactly two dots is an error.
    pub(crate) fn lex_dot(&mut self) -> Result<Item, LexError> {
        self.cursor.advance();
        if !self.cursor.match_char('.') {
            return Ok(self.item(TokenKind::Dot));
        }
        if self.cursor.match_char('.') {
            Ok(self.item(TokenKind::Ellipsis))
        } else {
            Err(self.error(LexErrorKind::UnexpectedDotDot))
        }
    }
}
