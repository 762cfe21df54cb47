//! Error taxonomy for the generation pipeline.
//!
//! Every variant is terminal: the caller is expected to fix its input or
//! configuration and run again.

use std::io;
use std::path::PathBuf;

/// Errors produced while loading a vocabulary or generating its source file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file does not exist.
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// No RDF syntax could be determined from the hint or the file name.
    #[error("unknown RDF format: {0}")]
    UnknownFormat(String),

    /// The input document is not well-formed in the selected syntax.
    #[error("failed to parse {}: {message}", .path.display())]
    Parse {
        /// Input file that failed to parse.
        path: PathBuf,
        /// Parser message, including line and column when the parser reports them.
        message: String,
    },

    /// The vocabulary configuration cannot produce a source file.
    #[error("generation failed: {0}")]
    Generation(String),

    /// Reading the input or writing the destination failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// File the operation was acting on.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
