//! Source map for managing loaded source files.
//!
//! Files are stored as raw bytes: the scanner is responsible for decoding and
//! for reporting invalid UTF-8, so the source map never rejects a file. Lines
//! are decoded lossily only when a snippet is rendered.

use std::borrow::Cow;
use std::sync::Arc;

use super::FileId;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use quillc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.ql", "x = 1\ny = 2");
/// assert_eq!(file.name(), "main.ql");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line(2).unwrap(), "y = 2");
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: String,
    /// Raw file content
    content: Arc<[u8]>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let content: Arc<[u8]> = content.into().into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &[u8]) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .iter()
                .enumerate()
                .filter(|&(_, &b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw file content
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// An empty file has one (empty) line, matching the scanner which places
    /// end-of-input at `1:1`.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the text of a line (1-based), without its line terminator.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD.
    pub fn line(&self, line: u32) -> SourceMapResult<Cow<'_, str>> {
        let index = (line as usize)
            .checked_sub(1)
            .filter(|&i| i < self.line_count())
            .ok_or(SourceMapError::InvalidLineNumber {
                line,
                max_lines: self.line_count(),
            })?;

        let start = self.line_starts[index];
        let mut end = self
            .line_starts
            .get(index + 1)
            .map_or(self.content.len(), |&next| next - 1);
        if end > start && self.content[end - 1] == b'\r' {
            end -= 1;
        }

        Ok(String::from_utf8_lossy(&self.content[start..end]))
    }

}

/// Owns every source file loaded during a session
#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create an empty source map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, returning its identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use quillc_util::span::SourceMap;
    ///
    /// let mut map = SourceMap::new();
    /// let id = map.add_file("a.ql", "1 + 2");
    /// assert_eq!(map.get_file(id).unwrap().name(), "a.ql");
    /// ```
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> FileId {
        let id = self.files.len();
        self.files.push(Arc::new(SourceFile::new(id, name, content)));
        FileId(id)
    }

    /// Get a file by identifier
    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.files
            .get(id.index())
            .cloned()
            .ok_or(SourceMapError::FileNotFound(id.index()))
    }
}
