//! Core types for archwire
//!
//! This crate defines the foundational types shared by every archive:
//! - Direction: whether a pass reads or writes
//! - Limits: size limits enforced on decoded lengths
//! - ArchiveConfig: limits plus entry-point behavior
//! - Error: error type hierarchy (ArchiveError for stream failures)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod limits;
pub mod types;

pub use config::{ArchiveConfig, ConfigError};
pub use error::{ArchiveError, Error, Result};
pub use limits::{LimitError, Limits};
pub use types::Direction;
