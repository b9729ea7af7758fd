//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Item, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers match `[A-Za-z_][A-Za-z0-9_]*`. The whole run is read
    /// before the keyword lookup, so `iffy` is a name and not `if`.
    pub(crate) fn lex_identifier(&mut self) -> Item {
        let start = self.cursor.lookahead_offset();
        self.cursor.advance();
        while self.cursor.current().char().is_some_and(is_ident_continue) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        match keyword_from_ident(&text) {
            Some(keyword) => self.item(keyword),
            None => Item::with_value(TokenKind::Name, self.token_start, text),
        }
    }
}
