//! quillc-drv - Driver for the Quill front-end
//!
//! Loads source files into a [`SourceMap`], runs the scanner over them and
//! renders the result: a token listing for `quillc tokens`, a summary line
//! per file for `quillc check`, or a diagnostic when scanning fails.

pub mod config;
pub mod error;
pub mod output;
pub mod report;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use quillc_lex::{tokenize, Item};
use quillc_util::{FileId, SourceMap};
use tracing::debug;

pub use config::{Config, OutputFormat};
pub use error::{DriverError, Result};

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Options for `quillc tokens` after flags and configuration are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokensOptions {
    /// Output format
    pub format: OutputFormat,
    /// Include `line:col` in text output
    pub show_positions: bool,
}

impl From<&Config> for TokensOptions {
    fn from(config: &Config) -> Self {
        Self {
            format: config.format,
            show_positions: config.show_positions,
        }
    }
}

/// State for one driver invocation.
pub struct Session {
    /// Effective configuration
    pub config: Config,
    /// Every source file loaded so far
    pub sources: SourceMap,
}

impl Session {
    /// Create a session with no files loaded.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sources: SourceMap::new(),
        }
    }

    /// Add in-memory source text.
    pub fn add_source(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> FileId {
        self.sources.add_file(name, content)
    }

    /// Read a file from disk, or standard input when `path` is `-`.
    pub fn load(&mut self, path: &Path) -> Result<FileId> {
        let (name, content) = if path == Path::new("-") {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|source| DriverError::Read {
                    path: STDIN_NAME.to_string(),
                    source,
                })?;
            (STDIN_NAME.to_string(), buf)
        } else {
            let name = path.display().to_string();
            let content = std::fs::read(path).map_err(|source| DriverError::Read {
                path: name.clone(),
                source,
            })?;
            (name, content)
        };

        debug!(file = %name, bytes = content.len(), "loaded source");
        Ok(self.add_source(name, content))
    }

    /// Scan a loaded file.
    ///
    /// A lexical error becomes [`DriverError::Lex`] with a diagnostic that
    /// points into the file.
    pub fn lex(&self, id: FileId) -> Result<Vec<Item>> {
        let file = self.sources.get_file(id)?;
        tokenize(file.bytes()).map_err(|err| {
            debug!(
                file = %file.name(),
                id = file.id().index(),
                position = %err.position,
                "scan failed"
            );
            DriverError::Lex(Box::new(report::lex_diagnostic(&file, &err)))
        })
    }

    /// Print the token stream of every file.
    ///
    /// Stops at the first file that fails to scan. With several files, text
    /// output puts a `# <path>` header before each listing.
    pub fn run_tokens(
        &mut self,
        paths: &[PathBuf],
        options: TokensOptions,
        out: &mut impl Write,
    ) -> Result<()> {
        let headers = paths.len() > 1;
        for path in paths {
            let id = self.load(path)?;
            let items = self.lex(id)?;

            match options.format {
                OutputFormat::Text => {
                    if headers {
                        writeln!(out, "# {}", self.sources.get_file(id)?.name())?;
                    }
                    out.write_all(output::render_text(&items, options.show_positions).as_bytes())?;
                },
                OutputFormat::Json => writeln!(out, "{}", output::render_json(&items)?)?,
            }
        }
        Ok(())
    }

    /// Scan every file and report `ok: <path> (<n> tokens)` for each.
    ///
    /// Files that fail are rendered as diagnostics on `err` and checking
    /// continues; the result is [`DriverError::CheckFailed`] if any failed.
    pub fn run_check(
        &mut self,
        paths: &[PathBuf],
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<()> {
        let mut failed = 0;
        for path in paths {
            let id = self.load(path)?;
            match self.lex(id) {
                Ok(items) => {
                    let file = self.sources.get_file(id)?;
                    writeln!(out, "ok: {} ({} tokens)", file.name(), items.len())?;
                },
                Err(DriverError::Lex(diagnostic)) => {
                    failed += 1;
                    write!(err, "{}", diagnostic.render())?;
                },
                Err(other) => return Err(other),
            }
        }

        if failed > 0 {
            return Err(DriverError::CheckFailed {
                failed,
                total: paths.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quillc_lex::TokenKind;

    #[test]
    fn test_lex_in_memory_source() {
        let mut session = Session::new(Config::default());
        let id = session.add_source("mem.ql", "for x in xs { }");
        let items = session.lex(id).unwrap();
        assert_eq!(items[0].kind, TokenKind::For);
        assert_eq!(items.len(), 6);
    }

    #[test]
    fn test_lex_error_becomes_diagnostic() {
        let mut session = Session::new(Config::default());
        let id = session.add_source("bad.ql", "a .. b");
        let err = session.lex(id).unwrap_err();
        let diagnostic = err.diagnostic().unwrap();
        assert_eq!(diagnostic.to_string(), "bad.ql:1:3: error: unexpected `..`");
    }

    #[test]
    fn test_missing_file() {
        let mut session = Session::new(Config::default());
        let err = session.load(Path::new("/definitely/not/here.ql")).unwrap_err();
        assert!(matches!(err, DriverError::Read { .. }));
    }

    #[test]
    fn test_options_from_config() {
        let config = Config {
            format: OutputFormat::Json,
            show_positions: false,
            color: true,
        };
        let options = TokensOptions::from(&config);
        assert_eq!(options.format, OutputFormat::Json);
        assert!(!options.show_positions);
    }
}
