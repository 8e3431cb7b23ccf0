//! Error types for cbr-bic
//!
//! Every pipeline stage reports failure through the single [`Error`] enum;
//! there is no per-stage recovery or retry, so errors propagate straight to
//! the top-level caller.

use thiserror::Error;

/// Result type alias for cbr-bic operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cbr-bic
///
/// One variant per failure class in the pipeline. Missing data that the
/// flattener deliberately tolerates (an entry without accounts, a document
/// without a resolvable entry list) never surfaces here; those cases
/// produce empty output instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Network error (request could not be sent or completed)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("HTTP error: {status} {status_text}")]
    Http {
        /// The HTTP status code returned by the server
        status: u16,
        /// The canonical reason phrase for the status
        status_text: String,
    },

    /// Archive could not be opened or has no entries
    #[error("archive error: {0}")]
    Archive(String),

    /// I/O error (filesystem read/write/rename)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed XML document
    #[error("parse error: {0}")]
    Parse(String),

    /// Document parsed but a required field is absent
    #[error("schema error: directory entry {bic:?} is missing {field}")]
    Schema {
        /// The BIC of the offending entry, when it could be read
        bic: Option<String>,
        /// The attribute or child element that was expected
        field: &'static str,
    },
}
