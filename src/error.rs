//! Error types for MatrixMarket ingestion and layout conversion

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the crate's error
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors raised while reading or converting a sparse matrix
///
/// Every error is terminal for the call that produced it: no partial
/// coordinate sequence or compressed matrix is ever returned alongside one.
#[derive(Error, Debug)]
pub enum MatrixError {
    /// The input file could not be opened
    #[error("Can't open the file {}: {}", .path.display(), .source)]
    FileOpen {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Reading from an already opened stream failed
    #[error("I/O error while reading matrix: {0}")]
    Io(#[from] io::Error),

    /// Banner, header tokens or size line are missing or malformed
    #[error("Not a valid MatrixMarket file: {reason}")]
    InvalidHeader {
        /// What was wrong with the header
        reason: String,
    },

    /// Storage format other than `coordinate`
    #[error("The format '{format}' is not supported")]
    UnsupportedFormat {
        /// Format token as read from the banner
        format: String,
    },

    /// Field kind the reader cannot materialize
    #[error("The field '{field}' is not supported")]
    UnsupportedField {
        /// Field token as read from the banner, or a description
        field: String,
    },

    /// A data line is missing a required token or holds an invalid one
    #[error("Malformed entry at line {line}: {reason}")]
    MalformedEntry {
        /// 1-based line number in the input
        line: usize,
        /// What was wrong with the entry
        reason: String,
    },

    /// Requested layout is not a compressed row or column layout
    #[error("In convert, matrix format '{layout}' is not supported")]
    UnsupportedLayout {
        /// Layout name that was requested
        layout: String,
    },

    /// A view was requested over a matrix stored in the other layout
    #[error("Layout mismatch: expected {expected}, found {found}")]
    LayoutMismatch {
        /// Layout the view needs
        expected: &'static str,
        /// Layout the matrix is stored in
        found: &'static str,
    },

    /// The converter broke one of its own invariants
    #[error("Internal consistency error: {reason}")]
    InternalConsistency {
        /// Which invariant was violated
        reason: String,
    },
}

impl MatrixError {
    /// Returns true if the error signals a defect in this crate rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, MatrixError::InternalConsistency { .. })
    }

    pub(crate) fn invalid_header(reason: impl Into<String>) -> Self {
        MatrixError::InvalidHeader {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        MatrixError::MalformedEntry {
            line,
            reason: reason.into(),
        }
    }
}
