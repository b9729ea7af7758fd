//! quillc-lex - Lexical scanner for the Quill language
//!
//! This crate turns raw source bytes into a sequence of [`Item`]s, each a
//! [`TokenKind`] with the 1-based line/column of its first character and,
//! for integers, names and strings, the literal text.
//!
//! # Example Usage
//!
//! ```
//! use quillc_lex::{tokenize, Lexer, TokenKind};
//!
//! // Pull items one at a time
//! let mut lexer = Lexer::new("func f(x) { return x }");
//! assert_eq!(lexer.next_item().unwrap().kind, TokenKind::Func);
//!
//! // Or scan everything at once
//! let items = tokenize("1 // comment\n2").unwrap();
//! assert_eq!(items[1].position.to_string(), "2:1");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, keyword table and [`Item`]
//! - [`lexer`] - The pull-based scanner
//! - [`cursor`] - UTF-8 decoding with one character of lookahead
//! - [`unicode`] - Character classes
//! - [`error`] - Lexical error types
//! - [`tokenize`](fn@tokenize) - Whole-input driver
//!
//! # Tokens
//!
//! - **Punctuation**: `=` `:` `,` `/` `.` `>` `{` `[` `(` `<` `-` `%` `+`
//!   `}` `]` `)` `*` and the longer `==` `>=` `<=` `!=` `...`
//! - **Keywords**: `and` `else` `false` `for` `func` `if` `in` `nil` `not`
//!   `or` `return` `true` `while`
//! - **Literals**: unsigned decimal integers, double-quoted strings without
//!   escapes, ASCII identifiers
//!
//! Whitespace is space, tab, CR and LF. `//` starts a comment that runs to the
//! end of the line. Scanning stops for good at the end of input or at the
//! first error.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod tokenize;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::{Cursor, Lookahead};
pub use error::{LexError, LexErrorKind, Result, TokenizeError};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Item, TokenKind, KEYWORDS};
pub use tokenize::tokenize;
