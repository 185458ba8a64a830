//! Shared archive types

use std::fmt;

/// Direction of a serialization pass
///
/// Fixed for the lifetime of an archive: every archive type declares its
/// direction as an associated constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The archive fills values from its input stream
    Read,
    /// The archive writes values to its output stream
    Write,
}

impl Direction {
    /// True for [`Direction::Read`]
    pub const fn is_read(self) -> bool {
        matches!(self, Direction::Read)
    }

    /// True for [`Direction::Write`]
    pub const fn is_write(self) -> bool {
        matches!(self, Direction::Write)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Read => write!(f, "read"),
            Direction::Write => write!(f, "write"),
        }
    }
}
