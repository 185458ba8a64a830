//! The archive contract
//!
//! An archive is one serialization pass over one stream. Its direction is a
//! property of its type, so a serialization routine written once against
//! `A: Archive` runs unchanged for reading and writing: on write the archive
//! takes values from the `&mut` references it is handed, on read it stores
//! decoded values into them.
//!
//! Failures never unwind. The first failure marks the archive unhealthy and
//! records an [`ArchiveError`]; every later primitive is a no-op. Routines
//! check [`Archive::good`] after each step and return `false` to abort.

use crate::varint::VarintWord;
use archwire_core::{ArchiveError, Direction};

/// A directional serialization stream with array framing
pub trait Archive {
    /// Direction of every pass over this archive type
    const DIRECTION: Direction;

    /// Open an array of `*count` elements
    ///
    /// Write direction emits `*count`. Read direction decodes the element
    /// count and stores it into `count`.
    fn begin_array(&mut self, count: &mut usize);

    /// Boundary between two sibling elements of the open array
    fn delimit_array(&mut self);

    /// Close the innermost open array
    fn end_array(&mut self);

    /// Variable-length unsigned integer
    fn serialize_varint<V: VarintWord>(&mut self, value: &mut V);

    /// Single raw byte
    fn serialize_byte(&mut self, value: &mut u8);

    /// Fixed-size raw bytes; the length is not written
    fn serialize_blob(&mut self, blob: &mut [u8]);

    /// Length-prefixed UTF-8 string
    fn serialize_string(&mut self, value: &mut String);

    /// Whether the stream is still healthy
    fn good(&self) -> bool;

    /// First failure recorded on this archive, if any
    fn error(&self) -> Option<&ArchiveError>;

    /// Mark the archive unhealthy
    ///
    /// For routines that detect invalid data the stream itself accepted.
    /// Keeps the first recorded error.
    fn fail(&mut self, error: ArchiveError);

    /// Bytes consumed (read) or produced (write) so far
    fn position(&self) -> u64;

    /// True when [`Archive::DIRECTION`] is [`Direction::Read`]
    fn is_reading(&self) -> bool {
        Self::DIRECTION.is_read()
    }
}
