//! Error types for `asar2tar`

use thiserror::Error;

/// The error type for asar conversion operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from stream operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended before a required field or byte run was fully read.
    #[error("unexpected end of asar input")]
    TruncatedInput,

    // ==================== Preamble Errors ====================
    /// A preamble marker or length field is inconsistent or out of range.
    #[error("malformed asar preamble: {message}")]
    MalformedPreamble {
        /// Description of the violated framing rule.
        message: String,
    },

    // ==================== Header Errors ====================
    /// The header payload does not decode as JSON, lacks a `files` map, or
    /// its alignment padding contains non-zero bytes.
    #[error("malformed asar header: {message}")]
    MalformedHeader {
        /// Description of what failed to decode or validate.
        message: String,
    },

    // ==================== File Tree Errors ====================
    /// A file descriptor field has the wrong type or an invalid value.
    #[error("malformed entry '{path}': {message}")]
    MalformedEntry {
        /// Slash-joined path of the offending entry.
        path: String,
        /// Description of the invalid field.
        message: String,
    },

    /// A name in the file tree is empty, contains a separator, or is a
    /// relative-directory token.
    #[error("unsafe path segment: {name:?}")]
    UnsafePath {
        /// The rejected name.
        name: String,
    },

    // ==================== Layout Errors ====================
    /// The offset-sorted file records do not exactly tile the data region.
    #[error("non-contiguous data layout: expected offset {expected}, found {found}")]
    NonContiguousLayout {
        /// Offset at which the next record was required to start.
        expected: u64,
        /// Offset the record actually declared.
        found: u64,
    },
}

impl Error {
    /// Classify a read failure, folding `UnexpectedEof` into `TruncatedInput`.
    pub(crate) fn from_read(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::TruncatedInput
        } else {
            Error::Io(err)
        }
    }
}

/// A specialized Result type for asar conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
