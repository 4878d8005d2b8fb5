// File: crates/liftplot/src/error.rs
// Summary: Error taxonomy for loading, configuring and charting a workout log.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input path argument was not supplied.
    #[error("Usage: {program} <input-file>")]
    Usage { program: String },

    /// Input unreadable, output directory uncreatable, or an output file unwritable.
    #[error("cannot access {}: {}", .path.display(), .source)]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed header, row, date or numeric field. `line` is 1-based.
    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("rendering failed: {0:#}")]
    Render(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn file_access(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::FileAccess { path: path.as_ref().to_path_buf(), source }
    }

    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        Error::Parse { line, message: message.into() }
    }

    /// Map a csv error onto the taxonomy; `origin` names the input for I/O failures.
    pub fn from_csv(origin: &Path, err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Error::file_access(origin, source),
            csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
                Error::parse(line, format!("expected {expected_len} fields, found {len}"))
            }
            csv::ErrorKind::Utf8 { err, .. } => Error::parse(line, format!("invalid UTF-8: {err}")),
            other => Error::parse(line, format!("{other:?}")),
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage { .. } => 2,
            _ => 1,
        }
    }
}
