//! Edge case tests for quillc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Item, LexErrorKind, Lexer, TokenKind};
    use quillc_util::Position;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|i| i.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(tokenize("").unwrap().is_empty());
        assert_eq!(
            Lexer::new("").next_item().unwrap(),
            Item::new(TokenKind::EndOfInput, Position::START)
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let items = tokenize(format!("x = {name}")).unwrap();
        assert_eq!(items[2].value, name);
    }

    #[test]
    fn test_edge_long_line_columns() {
        let source = format!("{}x", " ".repeat(5000));
        let items = tokenize(&source).unwrap();
        assert_eq!(items[0].position, Position::new(1, 5001));
    }

    #[test]
    fn test_edge_no_whitespace() {
        assert_eq!(
            kinds("f(a,b)==c"),
            vec![
                TokenKind::Name,
                TokenKind::LParen,
                TokenKind::Name,
                TokenKind::Comma,
                TokenKind::Name,
                TokenKind::RParen,
                TokenKind::Equal,
                TokenKind::Name,
            ]
        );
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let items = tokenize("a\r\nb\r\n").unwrap();
        assert_eq!(items[1].position, Position::new(2, 1));
    }

    #[test]
    fn test_edge_lone_cr_does_not_start_a_line() {
        let items = tokenize("a\rb").unwrap();
        assert_eq!(items[1].position, Position::new(1, 3));
    }

    #[test]
    fn test_edge_comment_without_trailing_newline() {
        assert_eq!(kinds("x // trailing"), vec![TokenKind::Name]);
    }

    #[test]
    fn test_edge_comment_start_inside_string() {
        let items = tokenize("\"http://x\"").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].value, "http://x");
    }

    #[test]
    fn test_edge_division_then_comment() {
        assert_eq!(kinds("a / b // c"), vec![TokenKind::Name, TokenKind::Divide, TokenKind::Name]);
        assert_eq!(kinds("a ///"), vec![TokenKind::Name]);
    }

    #[test]
    fn test_edge_dots() {
        assert_eq!(kinds("."), vec![TokenKind::Dot]);
        assert_eq!(kinds(". . ."), vec![TokenKind::Dot, TokenKind::Dot, TokenKind::Dot]);
        assert_eq!(kinds("..."), vec![TokenKind::Ellipsis]);
        assert_eq!(kinds("......"), vec![TokenKind::Ellipsis, TokenKind::Ellipsis]);
        assert_eq!(tokenize("..").unwrap_err().source, LexErrorKind::UnexpectedDotDot);
        assert_eq!(tokenize(".. .").unwrap_err().source, LexErrorKind::UnexpectedDotDot);
    }

    #[test]
    fn test_edge_bang_at_end() {
        let err = tokenize("x !").unwrap_err();
        assert_eq!(err.source, LexErrorKind::ExpectedNotEqual { found: "!".into() });
        assert_eq!(err.position, Position::new(1, 3));
    }

    #[test]
    fn test_edge_multibyte_before_error() {
        let err = tokenize("\"日本\" #").unwrap_err();
        assert_eq!(err.source, LexErrorKind::UnexpectedChar('#'));
        assert_eq!(err.position, Position::new(1, 6));
    }

    #[test]
    fn test_edge_byte_order_mark_is_unexpected() {
        let err = tokenize("\u{FEFF}x").unwrap_err();
        assert_eq!(err.source, LexErrorKind::UnexpectedChar('\u{FEFF}'));
    }

    #[test]
    fn test_edge_invalid_utf8_after_token() {
        let err = tokenize(b"abc\xc0").unwrap_err();
        assert_eq!(err.source, LexErrorKind::InvalidUtf8(0xc0));
        assert_eq!(err.position, Position::new(1, 4));
    }

    #[test]
    fn test_edge_invalid_utf8_after_newline() {
        let err = tokenize(b"a\n\n  \xff").unwrap_err();
        assert_eq!(err.position, Position::new(3, 3));
    }

    #[test]
    fn test_edge_stickiness_after_invalid_utf8() {
        let mut lexer = Lexer::new(b"\xe2\x82");
        let first = lexer.next_item().unwrap_err();
        for _ in 0..3 {
            assert_eq!(lexer.next_item().unwrap_err(), first);
        }
    }

    #[test]
    fn test_edge_string_with_comment_and_operators() {
        let items = tokenize("\"a // b ... != ..\"").unwrap();
        assert_eq!(items[0].value, "a // b ... != ..");
    }
}
