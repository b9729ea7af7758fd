//! Lexer module.
//!
//! The lexer is split by token family:
//! - `core` - Lexer struct, dispatch and the stop-after-terminal rule
//! - `comment` - whitespace and `//` comment skipping
//! - `identifier` - identifiers and keywords
//! - `number` - unsigned decimal integers
//! - `string` - double-quoted string literals
//! - `operator` - one-, two- and three-character punctuation

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
