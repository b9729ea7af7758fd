//! quillc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate holds the small set of types shared by every stage of the
//! quillc front-end: source positions, loaded source files, and the
//! diagnostic model used to report errors back to the user.
//!
//! CONTENTS:
//! ---------
//! 1. [`span`] - `Position` (1-based line/column) and the `SourceMap` that
//!    owns the raw bytes of every loaded file.
//!
//! 2. [`diagnostic`] - `Diagnostic`, its fluent `DiagnosticBuilder`, stable
//!    `DiagnosticCode`s and `SourceSnippet` rendering with a caret marker.
//!
//! 3. [`error`] - errors raised while querying the source map.
//
// POSITIONS VS. OFFSETS:
// ----------------------
// The scanner reports positions as line/column pairs where the column counts
// decoded characters, not bytes. Byte offsets are only used internally by
// the source map to slice out whole lines for snippets.

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Level, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, Position, SourceFile, SourceMap};
