//! All-or-nothing tokenization of a whole input.

use tracing::debug;

use crate::error::TokenizeError;
use crate::token::{Item, TokenKind};
use crate::Lexer;

/// Scans `input` to the end and returns every item, in order.
///
/// The end-of-input item is not included. On the first lexical error the
/// items scanned so far are discarded and the error is returned instead.
///
/// # Examples
///
/// ```
/// use quillc_lex::{tokenize, TokenKind};
///
/// let items = tokenize("while i < 10 { i = i + 1 }").unwrap();
/// assert_eq!(items.len(), 11);
/// assert_eq!(items[0].kind, TokenKind::While);
/// assert!(tokenize("a .. b").is_err());
/// ```
pub fn tokenize(input: impl AsRef<[u8]>) -> Result<Vec<Item>, TokenizeError> {
    let input = input.as_ref();
    let mut lexer = Lexer::new(input);
    let mut items = Vec::new();

    loop {
        match lexer.next_item() {
            Ok(item) if item.kind == TokenKind::EndOfInput => break,
            Ok(item) => items.push(item),
            Err(err) => {
                debug!(
                    bytes = input.len(),
                    scanned = items.len(),
                    position = %err.position(),
                    "tokenization failed: {err}"
                );
                return Err(err.into());
            },
        }
    }

    debug!(bytes = input.len(), items = items.len(), "tokenized input");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexErrorKind;
    use quillc_util::Position;

    fn item(kind: TokenKind, line: u32, column: u32, value: &str) -> Item {
        Item::with_value(kind, Position::new(line, column), value)
    }

    #[test]
    fn test_integers_and_minus() {
        let items = tokenize("1234 0 42 -42 1234x 0x321").unwrap();
        assert_eq!(
            items,
            vec![
                item(TokenKind::Int, 1, 1, "1234"),
                item(TokenKind::Int, 1, 6, "0"),
                item(TokenKind::Int, 1, 8, "42"),
                item(TokenKind::Minus, 1, 11, ""),
                item(TokenKind::Int, 1, 12, "42"),
                item(TokenKind::Int, 1, 15, "1234"),
                item(TokenKind::Name, 1, 19, "x"),
                item(TokenKind::Int, 1, 21, "0"),
                item(TokenKind::Name, 1, 22, "x321"),
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("\"unterminated").unwrap_err();
        assert_eq!(err.position, Position::START);
        assert_eq!(err.token, TokenKind::Illegal);
        assert_eq!(err.source, LexErrorKind::UnterminatedString);
        assert_eq!(
            err.to_string(),
            "at pos 1:1, Illegal token: didn't find end quote in string"
        );
    }

    #[test]
    fn test_empty_and_blank_inputs() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \n\t// c\n").unwrap().is_empty());
    }

    #[test]
    fn test_error_discards_earlier_items() {
        let err = tokenize("a b c\n  #").unwrap_err();
        assert_eq!(err.source, LexErrorKind::UnexpectedChar('#'));
        assert_eq!(err.position, Position::new(2, 3));
    }

    #[test]
    fn test_bytes_input() {
        let items = tokenize(vec![b'o', b'r']).unwrap();
        assert_eq!(items[0].kind, TokenKind::Or);

        let err = tokenize(b"ok \x80").unwrap_err();
        assert_eq!(err.to_string(), "at pos 1:4, Illegal token: invalid UTF-8 byte 0x80");
    }
}
