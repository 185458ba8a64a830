//! Size limits for decoded data
//!
//! Readers enforce these limits before allocating or descending, so a hostile
//! length prefix can't make a decode reserve gigabytes or recurse without
//! bound. Writers enforce the same limits so that anything written can also
//! be read back with the same configuration.

use thiserror::Error;

/// Size limits applied while reading and writing archives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum element count accepted by `begin_array` (default: 1M elements)
    pub max_array_len: usize,

    /// Maximum length of a variable-size blob or string (default: 16MB)
    pub max_blob_len: usize,

    /// Maximum array nesting depth (default: 64)
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_array_len: 1_000_000,
            max_blob_len: 16 * 1024 * 1024, // 16MB
            max_nesting_depth: 64,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    ///
    /// Lets unit tests hit the limit checks without building huge inputs.
    pub fn with_small_limits() -> Self {
        Limits {
            max_array_len: 16,
            max_blob_len: 64,
            max_nesting_depth: 4,
        }
    }

    /// Check that every limit is usable
    ///
    /// `max_array_len` must admit a pair; the other limits must be non-zero.
    pub fn validate(&self) -> Result<(), LimitError> {
        if self.max_array_len < 2 {
            return Err(LimitError::Unusable {
                name: "max_array_len",
                min: 2,
            });
        }
        if self.max_blob_len == 0 {
            return Err(LimitError::Unusable {
                name: "max_blob_len",
                min: 1,
            });
        }
        if self.max_nesting_depth == 0 {
            return Err(LimitError::Unusable {
                name: "max_nesting_depth",
                min: 1,
            });
        }
        Ok(())
    }

    /// Validate an array element count
    pub fn check_array_len(&self, len: usize) -> Result<(), LimitError> {
        if len > self.max_array_len {
            return Err(LimitError::ArrayTooLong {
                actual: len,
                max: self.max_array_len,
            });
        }
        Ok(())
    }

    /// Validate a blob or string length
    pub fn check_blob_len(&self, len: usize) -> Result<(), LimitError> {
        if len > self.max_blob_len {
            return Err(LimitError::BlobTooLong {
                actual: len,
                max: self.max_blob_len,
            });
        }
        Ok(())
    }

    /// Validate the depth an array would open at
    pub fn check_depth(&self, depth: usize) -> Result<(), LimitError> {
        if depth > self.max_nesting_depth {
            return Err(LimitError::NestingTooDeep {
                actual: depth,
                max: self.max_nesting_depth,
            });
        }
        Ok(())
    }
}

/// Limit validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Array count exceeds maximum
    #[error("array too long: {actual} elements exceeds maximum {max}")]
    ArrayTooLong {
        /// Decoded or requested element count
        actual: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Blob or string length exceeds maximum
    #[error("blob too long: {actual} bytes exceeds maximum {max}")]
    BlobTooLong {
        /// Decoded or requested length in bytes
        actual: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Arrays nested deeper than allowed
    #[error("nesting too deep: depth {actual} exceeds maximum {max}")]
    NestingTooDeep {
        /// Depth the array would open at
        actual: usize,
        /// Maximum allowed
        max: usize,
    },

    /// A limit is set below its usable minimum
    #[error("limit {name} must be at least {min}")]
    Unusable {
        /// Field name of the limit
        name: &'static str,
        /// Smallest usable value
        min: usize,
    },
}
