//! Error types for loading, parsing and printing records.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for record sorting operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a sort run.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        /// Path given on the command line.
        path: PathBuf,
        source: io::Error,
    },

    /// Reading failed part way through the input.
    #[error("read error at line {line}: {source}")]
    Read { line: usize, source: io::Error },

    /// A field is not an integer (strict mode only).
    #[error("line {line}: invalid field {token:?}: {reason}")]
    Parse {
        line: usize,
        token: String,
        reason: String,
    },

    /// A line carries fewer than four fields (strict mode only).
    #[error("line {line}: expected at least 4 fields, found {found}")]
    ShortLine { line: usize, found: usize },

    /// The output file could not be created.
    #[error("cannot create {}: {source}", path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("write error: {0}")]
    Write(#[source] io::Error),
}
