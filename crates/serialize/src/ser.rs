//! The generic serialization routine and its leaf implementations
//!
//! [`Serialize`] is the recursive entry point every serializable type
//! supplies. One routine covers both directions: against a writing archive it
//! emits `self`, against a reading archive it overwrites `self` with the
//! decoded value.
//!
//! # Leaf formats
//!
//! - `u8`: one raw byte
//! - `i8`: one raw byte, two's-complement bits
//! - `bool`: one byte, `0` or `1`; anything else fails the archive
//! - `[u8; N]`: `N` raw bytes (hashes, keys)
//! - `String`: varint byte length, then UTF-8
//!
//! Wider integers are not leaf types; inside a pair they are encoded as
//! varints by [`crate::element`].

use archwire_archive::Archive;
use archwire_core::ArchiveError;

/// A type that can serialize itself through an [`Archive`]
///
/// Returns `false` on failure. When the failure comes from the stream the
/// archive is already unhealthy; a routine may also return `false` on its own
/// (for example a length it refuses) while the archive stays healthy.
pub trait Serialize {
    /// Write `self` to, or read `self` from, `ar`
    fn serialize<A: Archive>(&mut self, ar: &mut A) -> bool;
}

impl Serialize for u8 {
    fn serialize<A: Archive>(&mut self, ar: &mut A) -> bool {
        ar.serialize_byte(self);
        ar.good()
    }
}

impl Serialize for i8 {
    fn serialize<A: Archive>(&mut self, ar: &mut A) -> bool {
        let mut byte = self.to_ne_bytes()[0];
        ar.serialize_byte(&mut byte);
        if ar.is_reading() {
            *self = i8::from_ne_bytes([byte]);
        }
        ar.good()
    }
}

impl Serialize for bool {
    fn serialize<A: Archive>(&mut self, ar: &mut A) -> bool {
        let mut byte = u8::from(*self);
        ar.serialize_byte(&mut byte);
        if !ar.good() {
            return false;
        }
        if ar.is_reading() {
            match byte {
                0 => *self = false,
                1 => *self = true,
                value => {
                    let offset = ar.position().saturating_sub(1);
                    ar.fail(ArchiveError::InvalidBool { value, offset });
                    return false;
                }
            }
        }
        true
    }
}

impl<const N: usize> Serialize for [u8; N] {
    fn serialize<A: Archive>(&mut self, ar: &mut A) -> bool {
        ar.serialize_blob(self);
        ar.good()
    }
}

impl Serialize for String {
    fn serialize<A: Archive>(&mut self, ar: &mut A) -> bool {
        ar.serialize_string(self);
        ar.good()
    }
}
