//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating and formatting front-end
//! diagnostics: an error message with a code, a location, a source snippet
//! and optional help lines.
//!
//! # Examples
//!
//! ```
//! use quillc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, SourceSnippet};
//! use quillc_util::span::Position;
//!
//! let diag = DiagnosticBuilder::error("unexpected `..`")
//!     .code(DiagnosticCode::E_LEXER_MALFORMED_OPERATOR)
//!     .location("main.ql", Position::new(1, 3))
//!     .snippet(SourceSnippet::new("a ..b", 1, 3, 5, None))
//!     .help("use `.` for member access or `...` for an ellipsis")
//!     .build();
//!
//! let rendered = diag.render();
//! assert!(rendered.starts_with("error[E1004]: unexpected `..`"));
//! assert!(rendered.contains("--> main.ql:1:3"));
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::Position;
use std::fmt;

/// Diagnostic severity level
///
/// The scanner only ever stops with an error, so that is the one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops the front-end
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// File name and position the diagnostic points at
    pub location: Option<(String, Position)>,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create an error diagnostic without a location
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            location: None,
            code: None,
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Render the diagnostic the way it is shown on a terminal.
    ///
    /// ```text
    /// error[E1002]: didn't find end quote in string
    ///   --> main.ql:1:5
    ///    |
    ///  1 | x = "abc
    ///    |     ^
    ///    = help: close the literal with `"`
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();

        match self.code {
            Some(code) => out.push_str(&format!("{}[{}]: {}\n", self.level, code, self.message)),
            None => out.push_str(&format!("{}: {}\n", self.level, self.message)),
        }

        let gutter = self
            .snippets
            .iter()
            .map(|s| s.line_number.to_string().len())
            .max()
            .unwrap_or(0)
            .max(3);

        if let Some((file, position)) = &self.location {
            out.push_str(&format!("{:>width$}--> {}:{}\n", "", file, position, width = gutter - 1));
        }

        for snippet in &self.snippets {
            out.push_str(&format!("{:>width$} |\n", "", width = gutter));
            out.push_str(&snippet.format_with_gutter(gutter));
            out.push('\n');
        }

        for help in &self.helps {
            out.push_str(&format!("{:>width$} = help: {}\n", "", help, width = gutter));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some((file, position)) => write!(f, "{}:{}: {}: {}", file, position, self.level, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_display() {
        let diag = Diagnostic::error("boom");
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.to_string(), "error: boom");
    }

    #[test]
    fn test_display_with_location() {
        let diag = DiagnosticBuilder::error("unexpected `#`")
            .location("a.ql", Position::new(2, 4))
            .build();
        assert_eq!(diag.to_string(), "a.ql:2:4: error: unexpected `#`");
    }

    #[test]
    fn test_render_layout() {
        let diag = DiagnosticBuilder::error("didn't find end quote in string")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
            .location("main.ql", Position::new(1, 5))
            .snippet(SourceSnippet::new("x = \"abc", 1, 5, 6, None))
            .help("close the literal with `\"`")
            .build();

        let expected = "\
error[E1002]: didn't find end quote in string
  --> main.ql:1:5
    |
  1 | x = \"abc
    |     ^
    = help: close the literal with `\"`
";
        assert_eq!(diag.render(), expected);
    }

    #[test]
    fn test_render_without_location() {
        let diag = Diagnostic::error("nothing to scan");
        assert_eq!(diag.render(), "error: nothing to scan\n");
    }
}
