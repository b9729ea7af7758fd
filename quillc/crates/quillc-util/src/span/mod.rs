//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! 1-based line/column positions and file identification.
//!
//! # Examples
//!
//! ```
//! use quillc_util::span::Position;
//!
//! let pos = Position::new(2, 7);
//! assert_eq!(pos.to_string(), "2:7");
//! assert!(Position::START < pos);
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

use std::fmt;

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
///
/// # Examples
///
/// ```
/// use quillc_util::span::FileId;
///
/// let id = FileId(0);
/// assert_eq!(id.index(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FileId(pub usize);

impl FileId {
    /// Get the raw index value
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// A location in source text
///
/// Both fields are 1-based. The column counts decoded characters, not bytes,
/// so `"é="` places `=` at column 2. A newline moves to the next line and
/// resets the column to 1.
///
/// Positions order by line first, then column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a new position
    ///
    /// # Examples
    ///
    /// ```
    /// use quillc_util::span::Position;
    ///
    /// let pos = Position::new(1, 5);
    /// assert_eq!(pos.line, 1);
    /// assert_eq!(pos.column, 5);
    /// ```
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position one character further along the same line.
    #[inline]
    pub const fn next_column(self) -> Self {
        Self {
            line: self.line,
            column: self.column + 1,
        }
    }

    /// The first column of the following line.
    #[inline]
    pub const fn next_line(self) -> Self {
        Self {
            line: self.line + 1,
            column: 1,
        }
    }
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
