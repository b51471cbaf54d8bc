//! Error types for the deckmodel library.

use std::io;
use thiserror::Error;

/// Result type alias for deckmodel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a content model.
///
/// Conditions local to a single block, table or run (missing tables,
/// spans outside the declared grid, absent font metadata) are absorbed
/// during reconciliation and logged; they never surface here. Only a
/// source that cannot be read at all, or a failed serialization of the
/// finished model, produces an `Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source bytes cannot be opened or parsed at all.
    #[error("Unreadable source document: {0}")]
    UnreadableSource(String),

    /// The analysis backend rejected or failed on the document.
    #[error("Document analysis failed ({backend}): {message}")]
    Analysis {
        /// Name of the backend that failed
        backend: String,
        /// Backend-specific failure description
        message: String,
    },

    /// Error during rendering (JSON, Markdown).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
