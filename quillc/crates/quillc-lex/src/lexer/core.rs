//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, the per-character dispatch and
//! the rule that a lexer stops for good after end-of-input or an error.

use std::iter::FusedIterator;

use quillc_util::Position;
use tracing::trace;

use crate::cursor::{Cursor, Lookahead};
use crate::error::{LexError, LexErrorKind};
use crate::token::{Item, TokenKind};
use crate::unicode::{is_decimal_digit, is_ident_start};

/// Lexer for the Quill language.
///
/// The lexer turns raw source bytes into [`Item`]s one at a time. After it
/// has returned end-of-input or an error, every further call returns that
/// same outcome again.
///
/// # Example
///
/// ```
/// use quillc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x != 1");
/// assert_eq!(lexer.next_item().unwrap().kind, TokenKind::Name);
/// assert_eq!(lexer.next_item().unwrap().kind, TokenKind::NotEqual);
/// assert_eq!(lexer.next_item().unwrap().value, "1");
/// assert_eq!(lexer.next_item().unwrap().kind, TokenKind::EndOfInput);
/// assert_eq!(lexer.next_item().unwrap().kind, TokenKind::EndOfInput);
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Character cursor over the input.
    pub(crate) cursor: Cursor<'a>,

    /// Position of the first character of the token being scanned.
    pub(crate) token_start: Position,

    /// The end-of-input item or error that stopped this lexer.
    halted: Option<Result<Item, LexError>>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over anything byte-like: `&str`, `&[u8]`, `Vec<u8>`.
    ///
    /// The input does not have to be valid UTF-8; invalid bytes are reported
    /// when the lexer reaches them.
    pub fn new<S>(input: &'a S) -> Self
    where
        S: AsRef<[u8]> + ?Sized,
    {
        Self {
            cursor: Cursor::new(input.as_ref()),
            token_start: Position::START,
            halted: None,
        }
    }

    /// Returns the next item.
    ///
    /// Whitespace and comments are skipped first. End-of-input is reported
    /// as `Ok` with [`TokenKind::EndOfInput`]; every lexical error is `Err`
    /// and carries an `Illegal` item positioned at the start of the failing
    /// token.
    pub fn next_item(&mut self) -> Result<Item, LexError> {
        if let Some(halted) = &self.halted {
            return halted.clone();
        }

        let result = self.scan_item();
        match &result {
            Ok(item) if item.kind != TokenKind::EndOfInput => {
                trace!(kind = %item.kind, position = %item.position, value = %item.value, "scanned item");
            },
            Ok(item) => {
                trace!(position = %item.position, "reached end of input");
                self.halted = Some(result.clone());
            },
            Err(err) => {
                trace!(position = %err.position(), error = %err, "lexical error");
                self.halted = Some(result.clone());
            },
        }
        result
    }

    /// Returns true once end-of-input or an error has been returned.
    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    fn scan_item(&mut self) -> Result<Item, LexError> {
        self.skip_whitespace_and_comments();
        self.token_start = self.cursor.position();

        let c = match self.cursor.current() {
            Lookahead::Char(c) => c,
            Lookahead::End => return Ok(Item::new(TokenKind::EndOfInput, self.token_start)),
            Lookahead::Invalid(byte) => return Err(self.error(LexErrorKind::InvalidUtf8(byte))),
        };

        match c {
            c if is_ident_start(c) => Ok(self.lex_identifier()),
            c if is_decimal_digit(c) => Ok(self.lex_number()),
            '"' => self.lex_string(),

            ':' => Ok(self.single(TokenKind::Colon)),
            ',' => Ok(self.single(TokenKind::Comma)),
            '{' => Ok(self.single(TokenKind::LBrace)),
            '[' => Ok(self.single(TokenKind::LBracket)),
            '(' => Ok(self.single(TokenKind::LParen)),
            '-' => Ok(self.single(TokenKind::Minus)),
            '%' => Ok(self.single(TokenKind::Modulo)),
            '+' => Ok(self.single(TokenKind::Plus)),
            '}' => Ok(self.single(TokenKind::RBrace)),
            ']' => Ok(self.single(TokenKind::RBracket)),
            ')' => Ok(self.single(TokenKind::RParen)),
            '*' => Ok(self.single(TokenKind::Times)),
            // A `//` comment was already skipped, so this is division.
            '/' => Ok(self.single(TokenKind::Divide)),

            '=' => Ok(self.lex_equals()),
            '<' => Ok(self.lex_less()),
            '>' => Ok(self.lex_greater()),
            '!' => self.lex_bang(),
            '.' => self.lex_dot(),

            c => Err(self.error(LexErrorKind::UnexpectedChar(c))),
        }
    }

    /// Consumes one character and returns an item of `kind`.
    pub(crate) fn single(&mut self, kind: TokenKind) -> Item {
        self.cursor.advance();
        self.item(kind)
    }

    /// An item of `kind` at the current token start.
    #[inline]
    pub(crate) fn item(&self, kind: TokenKind) -> Item {
        Item::new(kind, self.token_start)
    }

    /// An error at the current token start.
    #[inline]
    pub(crate) fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.token_start)
    }
}

/// Yields items up to (not including) end-of-input.
///
/// An error is yielded once and then iteration ends.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<crate::token::Item, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.halted, Some(Err(_))) {
            return None;
        }
        match self.next_item() {
            Ok(item) if item.kind == TokenKind::EndOfInput => None,
            result => Some(result),
        }
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
