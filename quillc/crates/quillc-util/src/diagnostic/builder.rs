//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode};
use crate::span::Position;

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with optional
/// highlighting of the specific range.
///
/// # Examples
///
/// ```
/// use quillc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("x = 1 .. 2", 1, 7, 9, Some("here"));
/// assert_eq!(snippet.format_with_gutter(3), "  1 | x = 1 .. 2\n    |       ^^ here");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<&str>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(str::to_string),
        }
    }

    /// Format the snippet with a line-number gutter of `gutter` columns.
    ///
    /// Returns the source line with a caret (^) line underneath pointing to
    /// the relevant range. Several snippets of one diagnostic share a gutter
    /// so they line up.
    pub fn format_with_gutter(&self, gutter: usize) -> String {
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = gutter
        ));

        result.push_str(&format!("{:>width$} | ", "", width = gutter));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use quillc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
///
/// let diag = DiagnosticBuilder::error("unexpected character `#`")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .help("`#` does not start any token")
///     .build();
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::error(message),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Set the file and position the diagnostic points at
    pub fn location(mut self, file: impl Into<String>, position: Position) -> Self {
        self.diagnostic.location = Some((file.into(), position));
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.diagnostic.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }
}
