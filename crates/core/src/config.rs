//! Archive configuration
//!
//! Configuration shared by every archive: size limits and how the typed
//! entry points treat leftover input.

use crate::limits::{LimitError, Limits};

/// Archive configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    /// Size limits enforced while reading and writing
    pub limits: Limits,
    /// Whether `from_bytes` fails when input remains after the value (default: true)
    pub reject_trailing_bytes: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        ArchiveConfig {
            limits: Limits::default(),
            reject_trailing_bytes: true,
        }
    }
}

impl ArchiveConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config for testing
    ///
    /// Uses small limits so tests can hit them cheaply.
    pub fn for_testing() -> Self {
        ArchiveConfig {
            limits: Limits::with_small_limits(),
            reject_trailing_bytes: true,
        }
    }

    /// Set the maximum array element count (builder pattern).
    pub fn with_max_array_len(mut self, len: usize) -> Self {
        self.limits.max_array_len = len;
        self
    }

    /// Set the maximum blob/string length (builder pattern).
    pub fn with_max_blob_len(mut self, len: usize) -> Self {
        self.limits.max_blob_len = len;
        self
    }

    /// Set the maximum array nesting depth (builder pattern).
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.limits.max_nesting_depth = depth;
        self
    }

    /// Allow or reject input left over after a decoded value (builder pattern).
    pub fn with_reject_trailing_bytes(mut self, reject: bool) -> Self {
        self.reject_trailing_bytes = reject;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()?;
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A limit is unusable
    #[error("Invalid limits: {0}")]
    InvalidLimits(#[from] LimitError),
}
