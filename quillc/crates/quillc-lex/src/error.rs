//! Lexical errors.
//!
//! A [`LexError`] is what [`Lexer::next_item`](crate::Lexer::next_item)
//! returns when it cannot produce a token. It carries an `Illegal` item
//! positioned where the failing token started. [`TokenizeError`] is the
//! whole-input form returned by [`tokenize`](crate::tokenize), whose
//! message is prefixed with that position and the token kind.

use quillc_util::{DiagnosticCode, Position};
use thiserror::Error;

use crate::token::{Item, TokenKind};

/// What went wrong while scanning a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// The input is not valid UTF-8 at this point
    #[error("invalid UTF-8 byte 0x{0:02x}")]
    InvalidUtf8(u8),

    /// Input ended (or stopped decoding) before the closing quote
    #[error("didn't find end quote in string")]
    UnterminatedString,

    /// A CR or LF appeared inside a string literal
    #[error("can't have newline in string")]
    NewlineInString,

    /// `!` was not followed by `=`
    #[error("expected `!=`, found `{found}`")]
    ExpectedNotEqual {
        /// What was found instead, starting with the `!`
        found: String,
    },

    /// Exactly two dots
    #[error("unexpected `..`")]
    UnexpectedDotDot,

    /// A character that does not start any token
    #[error("unexpected character `{}`", .0.escape_debug())]
    UnexpectedChar(char),
}

impl LexErrorKind {
    /// The stable diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexErrorKind::InvalidUtf8(_) => DiagnosticCode::E_LEXER_INVALID_ENCODING,
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexErrorKind::NewlineInString => DiagnosticCode::E_LEXER_NEWLINE_IN_STRING,
            LexErrorKind::ExpectedNotEqual { .. } | LexErrorKind::UnexpectedDotDot => {
                DiagnosticCode::E_LEXER_MALFORMED_OPERATOR
            },
            LexErrorKind::UnexpectedChar(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
        }
    }

    /// A short suggestion for fixing the input, when there is an obvious one.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexErrorKind::UnterminatedString => Some("close the literal with `\"`"),
            LexErrorKind::NewlineInString => Some("string literals must fit on one line"),
            LexErrorKind::ExpectedNotEqual { .. } => Some("use `not` for logical negation"),
            LexErrorKind::UnexpectedDotDot => Some("use `.` or `...`"),
            LexErrorKind::InvalidUtf8(_) => Some("source files must be UTF-8 encoded"),
            LexErrorKind::UnexpectedChar(_) => None,
        }
    }
}

/// A failure to scan one token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LexError {
    /// The cause
    pub kind: LexErrorKind,
    /// An `Illegal` item at the start of the failing token
    pub item: Item,
}

impl LexError {
    /// Creates an error positioned at `position`.
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        Self {
            kind,
            item: Item::new(TokenKind::Illegal, position),
        }
    }

    /// Where the failing token started.
    #[inline]
    pub fn position(&self) -> Position {
        self.item.position
    }
}

/// A failure to tokenize a whole input.
///
/// ```
/// use quillc_lex::tokenize;
///
/// let err = tokenize("x = \"abc").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "at pos 1:5, Illegal token: didn't find end quote in string"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("at pos {position}, {token} token: {source}")]
pub struct TokenizeError {
    /// Where the failing token started
    pub position: Position,
    /// Kind of the item attached to the failure
    pub token: TokenKind,
    /// The underlying cause
    #[source]
    pub source: LexErrorKind,
}

impl From<LexError> for TokenizeError {
    fn from(err: LexError) -> Self {
        Self {
            position: err.item.position,
            token: err.item.kind,
            source: err.kind,
        }
    }
}

/// Result type for single-token scanning.
pub type Result<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages() {
        assert_eq!(LexErrorKind::InvalidUtf8(0xff).to_string(), "invalid UTF-8 byte 0xff");
        assert_eq!(LexErrorKind::InvalidUtf8(0x0a).to_string(), "invalid UTF-8 byte 0x0a");
        assert_eq!(
            LexErrorKind::ExpectedNotEqual { found: "!x".into() }.to_string(),
            "expected `!=`, found `!x`"
        );
        assert_eq!(LexErrorKind::UnexpectedChar('#').to_string(), "unexpected character `#`");
        assert_eq!(LexErrorKind::UnexpectedChar('\0').to_string(), "unexpected character `\\0`");
    }

    #[test]
    fn test_lex_error_carries_illegal_item() {
        let err = LexError::new(LexErrorKind::UnexpectedDotDot, Position::new(3, 4));
        assert_eq!(err.item.kind, TokenKind::Illegal);
        assert!(err.item.value.is_empty());
        assert_eq!(err.position(), Position::new(3, 4));
        assert_eq!(err.to_string(), "unexpected `..`");
    }

    #[test]
    fn test_tokenize_error_wraps_cause() {
        let err = TokenizeError::from(LexError::new(LexErrorKind::NewlineInString, Position::new(2, 1)));
        assert_eq!(err.to_string(), "at pos 2:1, Illegal token: can't have newline in string");
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("can't have newline in string"));
    }

    #[test]
    fn test_codes() {
        assert_eq!(LexErrorKind::UnexpectedChar('#').code().as_str(), "E1001");
        assert_eq!(LexErrorKind::UnexpectedDotDot.code().as_str(), "E1004");
        assert_eq!(LexErrorKind::InvalidUtf8(0x80).code().as_str(), "E1005");
    }
}
