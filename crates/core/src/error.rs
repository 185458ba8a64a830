//! Error types for archwire
//!
//! The serialization protocol itself reports failure as a plain `bool`. The
//! types here carry the detail around that boolean: archives record the first
//! stream failure as an [`ArchiveError`], and the typed entry points turn a
//! failed pass into an [`Error`].
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::limits::LimitError;
use std::io;
use thiserror::Error;

/// Result type alias for archwire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why an archive's stream stopped being healthy
///
/// Recorded once, on the first failure; the archive stays unhealthy after that.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchiveError {
    /// Input ended in the middle of a value
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEof {
        /// Bytes consumed before the read that failed
        offset: u64,
    },

    /// Varint does not fit the requested integer width
    #[error("varint overflows {bits}-bit integer at byte {offset}")]
    VarintOverflow {
        /// Width of the target integer
        bits: u32,
        /// Offset of the varint's first byte
        offset: u64,
    },

    /// Varint carries a redundant trailing zero group
    #[error("non-canonical varint at byte {offset}")]
    NonCanonicalVarint {
        /// Offset of the varint's first byte
        offset: u64,
    },

    /// A decoded or written length broke a configured limit
    #[error("limit exceeded: {0}")]
    Limit(#[from] LimitError),

    /// A string payload was not valid UTF-8
    #[error("invalid UTF-8 in string at byte {offset}")]
    InvalidUtf8 {
        /// Offset of the string payload
        offset: u64,
    },

    /// A boolean byte was neither 0 nor 1
    #[error("invalid boolean byte {value:#04x} at byte {offset}")]
    InvalidBool {
        /// The byte that was read
        value: u8,
        /// Offset of the byte
        offset: u64,
    },

    /// `end_array` without a matching `begin_array`
    #[error("unbalanced array framing: end_array with no open array")]
    Unbalanced,

    /// Underlying reader or writer failed
    #[error("I/O error ({kind:?}): {message}")]
    Io {
        /// Error kind reported by the stream
        kind: io::ErrorKind,
        /// Error message reported by the stream
        message: String,
    },
}

impl From<io::Error> for ArchiveError {
    fn from(e: io::Error) -> Self {
        ArchiveError::Io {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

/// Error returned by the typed serialization entry points
#[derive(Debug, Error)]
pub enum Error {
    /// The archive's stream failed
    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// A serialization routine returned false while the stream was healthy
    ///
    /// This is how a wrong pair length or a custom type's own validation
    /// failure surfaces.
    #[error("value of type {type_name} rejected by its serialization routine")]
    Rejected {
        /// `std::any::type_name` of the value being serialized
        type_name: &'static str,
    },

    /// Decoding succeeded but input remained
    #[error("{remaining} trailing bytes after value")]
    TrailingBytes {
        /// Bytes left unconsumed
        remaining: usize,
    },

    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// I/O error outside an archive pass (opening files, flushing sinks)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Build a [`Error::Rejected`] naming the type `T`
    pub fn rejected<T: ?Sized>() -> Self {
        Error::Rejected {
            type_name: std::any::type_name::<T>(),
        }
    }
}
