//! Leveled, category-gated logging for archwire
//!
//! Five functions, one per [`Level`], each taking a free-form category name
//! and preformatted arguments. A message is emitted only when the global
//! [`CategoryFilter`] allows its level for its category; the return value
//! reports that decision so callers can skip expensive follow-up work.
//!
//! Emission goes through `tracing`, with the category attached as a field, so
//! whatever subscriber the application installs receives the events.
//!
//! ```ignore
//! use archwire_log::{log_debug, set_filter, CategoryFilter};
//!
//! set_filter("*:WARNING,serialization:DEBUG".parse()?);
//! let emitted = log_debug!("serialization", "pair count {} != 2", count);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod level;

pub use filter::{CategoryFilter, FilterParseError};
pub use level::Level;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt;

/// Environment variable read by [`init_from_env`]
pub const LOG_ENV_VAR: &str = "ARCHWIRE_LOG";

static FILTER: Lazy<RwLock<CategoryFilter>> =
    Lazy::new(|| RwLock::new(CategoryFilter::default()));

/// Replace the global filter
pub fn set_filter(filter: CategoryFilter) {
    *FILTER.write() = filter;
}

/// Snapshot of the global filter
pub fn filter() -> CategoryFilter {
    FILTER.read().clone()
}

/// Whether a message at `level` for `category` would be emitted
pub fn allowed(level: Level, category: &str) -> bool {
    FILTER.read().allows(level, category)
}

/// Load the global filter from [`LOG_ENV_VAR`]
///
/// Returns `Ok(false)` and leaves the filter untouched when the variable is
/// unset.
pub fn init_from_env() -> Result<bool, FilterParseError> {
    match std::env::var(LOG_ENV_VAR) {
        Ok(spec) => {
            set_filter(spec.parse()?);
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

/// Install a `tracing_subscriber` formatter that prints every event
///
/// Gating is done by the category filter, so the subscriber itself accepts
/// all levels. Returns false if a global subscriber was already installed.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .try_init()
        .is_ok()
}

fn emit(level: Level, category: &str, args: fmt::Arguments<'_>) -> bool {
    if !allowed(level, category) {
        return false;
    }
    match level {
        Level::Error => tracing::error!(category, "{}", args),
        Level::Warning => tracing::warn!(category, "{}", args),
        Level::Info => tracing::info!(category, "{}", args),
        Level::Debug => tracing::debug!(category, "{}", args),
        Level::Trace => tracing::trace!(category, "{}", args),
    }
    true
}

/// Emit at [`Level::Error`]
pub fn error(category: &str, args: fmt::Arguments<'_>) -> bool {
    emit(Level::Error, category, args)
}

/// Emit at [`Level::Warning`]
pub fn warning(category: &str, args: fmt::Arguments<'_>) -> bool {
    emit(Level::Warning, category, args)
}

/// Emit at [`Level::Info`]
pub fn info(category: &str, args: fmt::Arguments<'_>) -> bool {
    emit(Level::Info, category, args)
}

/// Emit at [`Level::Debug`]
pub fn debug(category: &str, args: fmt::Arguments<'_>) -> bool {
    emit(Level::Debug, category, args)
}

/// Emit at [`Level::Trace`]
pub fn trace(category: &str, args: fmt::Arguments<'_>) -> bool {
    emit(Level::Trace, category, args)
}

/// `log_error!(category, "format", args...)`
#[macro_export]
macro_rules! log_error {
    ($category:expr, $($arg:tt)+) => {
        $crate::error($category, ::std::format_args!($($arg)+))
    };
}

/// `log_warning!(category, "format", args...)`
#[macro_export]
macro_rules! log_warning {
    ($category:expr, $($arg:tt)+) => {
        $crate::warning($category, ::std::format_args!($($arg)+))
    };
}

/// `log_info!(category, "format", args...)`
#[macro_export]
macro_rules! log_info {
    ($category:expr, $($arg:tt)+) => {
        $crate::info($category, ::std::format_args!($($arg)+))
    };
}

/// `log_debug!(category, "format", args...)`
#[macro_export]
macro_rules! log_debug {
    ($category:expr, $($arg:tt)+) => {
        $crate::debug($category, ::std::format_args!($($arg)+))
    };
}

/// `log_trace!(category, "format", args...)`
#[macro_export]
macro_rules! log_trace {
    ($category:expr, $($arg:tt)+) => {
        $crate::trace($category, ::std::format_args!($($arg)+))
    };
}
