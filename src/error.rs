//! Error types for script building and renderer invocation.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or running a script.
///
/// A renderer that starts but exits nonzero is not an error; see
/// [`crate::RunStatus::Failed`].
#[derive(Error, Debug)]
pub enum Error {
    /// Writing to the script sink failed. The partially written script must be discarded.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The output file extension does not map to a known terminal.
    #[error("Unsupported Format {ext:?}")]
    UnsupportedFormat {
        /// Extension as found on the path, including the leading dot (empty if none).
        ext: String,
    },

    /// The renderer process could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        /// Program name that was attempted.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: io::Error,
    },

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
