//! Integer literal lexing.

use crate::token::{Item, TokenKind};
use crate::unicode::is_decimal_digit;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an unsigned decimal integer.
    ///
    /// The digits are kept verbatim, leading zeros included; converting and
    /// range-checking the value is left to later stages. There are no signs,
    /// radix prefixes or separators, so `0x321` is the integer `0` followed
    /// by the name `x321`.
    pub(crate) fn lex_number(&mut self) -> Item {
        let start = self.cursor.lookahead_offset();
        while self.cursor.current().char().is_some_and(is_decimal_digit) {
            self.cursor.advance();
        }

        let digits = self.cursor.slice_from(start);
        Item::with_value(TokenKind::Int, self.token_start, digits)
    }
}
