//! Turning lexical errors into diagnostics.

use quillc_lex::{LexErrorKind, TokenizeError};
use quillc_util::{Diagnostic, DiagnosticBuilder, SourceFile, SourceSnippet};

/// Builds the diagnostic shown when `file` fails to scan.
///
/// The snippet underlines the offending text: the whole `!x` or `..` for
/// malformed operators, a single character otherwise.
pub fn lex_diagnostic(file: &SourceFile, err: &TokenizeError) -> Diagnostic {
    let position = err.position;
    let mut builder = DiagnosticBuilder::error(err.source.to_string())
        .code(err.source.code())
        .location(file.name(), position);

    if let Ok(line) = file.line(position.line) {
        let start = position.column as usize;
        let snippet = SourceSnippet::new(
            line.into_owned(),
            position.line as usize,
            start,
            start + underline_width(&err.source),
            label(&err.source),
        );
        builder = builder.snippet(snippet);
    }

    if let Some(help) = err.source.help() {
        builder = builder.help(help);
    }

    builder.build()
}

fn underline_width(kind: &LexErrorKind) -> usize {
    match kind {
        LexErrorKind::ExpectedNotEqual { found } => found.chars().count(),
        LexErrorKind::UnexpectedDotDot => 2,
        _ => 1,
    }
}

fn label(kind: &LexErrorKind) -> Option<&'static str> {
    match kind {
        LexErrorKind::UnterminatedString | LexErrorKind::NewlineInString => {
            Some("string starts here")
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quillc_lex::tokenize;

    fn diagnose(source: &str) -> Diagnostic {
        let file = SourceFile::new(0, "main.ql", source);
        let err = tokenize(file.bytes()).unwrap_err();
        lex_diagnostic(&file, &err)
    }

    #[test]
    fn test_unterminated_string_render() {
        let expected = "\
error[E1002]: didn't find end quote in string
  --> main.ql:2:5
    |
  2 | y = \"abc
    |     ^ string starts here
    = help: close the literal with `\"`
";
        assert_eq!(diagnose("x = 1\ny = \"abc").render(), expected);
    }

    #[test]
    fn test_malformed_operator_underline() {
        let diag = diagnose("a !b");
        assert_eq!(diag.code.map(|c| c.as_str()), Some("E1004".to_string()));
        assert_eq!(diag.snippets[0].start_column, 3);
        assert_eq!(diag.snippets[0].end_column, 5);
        assert!(diag.render().contains("    |   ^^\n"));
    }

    #[test]
    fn test_bang_before_newline_keeps_header_on_one_line() {
        let rendered = diagnose("x !\ny").render();
        let header = rendered.lines().next().unwrap();
        assert_eq!(header, "error[E1004]: expected `!=`, found `!`");
        assert!(rendered.contains("  1 | x !\n    |   ^\n"));
    }

    #[test]
    fn test_unexpected_character_has_no_help() {
        let diag = diagnose("  @");
        assert_eq!(diag.message, "unexpected character `@`");
        assert!(diag.helps.is_empty());
        assert_eq!(diag.location, Some(("main.ql".to_string(), quillc_util::Position::new(1, 3))));
    }

    #[test]
    fn test_invalid_utf8_snippet_is_lossy() {
        let file = SourceFile::new(0, "bad.ql", vec![b'o', b'k', b' ', 0xff]);
        let err = tokenize(file.bytes()).unwrap_err();
        let diag = lex_diagnostic(&file, &err);
        assert_eq!(diag.message, "invalid UTF-8 byte 0xff");
        assert_eq!(diag.snippets[0].line, "ok \u{FFFD}");
        assert_eq!(diag.snippets[0].start_column, 4);
    }
}
