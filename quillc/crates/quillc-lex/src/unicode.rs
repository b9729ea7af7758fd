//! Character classes used by the scanner.
//!
//! Identifiers and integers are ASCII only. A non-ASCII letter outside a
//! string literal is an unexpected character.

/// Returns true if `c` can start an identifier.
///
/// ```
/// use quillc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('Z'));
/// assert!(!is_ident_start('7'));
/// assert!(!is_ident_start('é'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true for `0` through `9`.
#[inline]
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true for the four whitespace characters: space, tab, CR and LF.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Returns true for characters that end a line.
#[inline]
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\r' | '\n')
}
