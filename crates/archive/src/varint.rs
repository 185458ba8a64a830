//! Variable-length integer encoding (LEB128)
//!
//! Unsigned LEB128: each byte carries 7 bits of the value, least significant
//! group first, and the high bit says whether another byte follows. Values
//! below 128 take one byte; a `u64` takes at most 10, a `u128` at most 19.
//!
//! Decoding is strict. A varint whose value does not fit the target width is
//! an overflow, and a varint ending in a redundant zero group (`0x80 0x00`
//! instead of `0x00`) is non-canonical. Both are rejected so every value has
//! exactly one encoding.

use std::fmt;
use thiserror::Error;

/// Maximum bytes for a 128-bit varint (ceil(128/7) = 19)
pub const MAX_VARINT_BYTES: usize = 19;

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer widths the archive's varint primitive accepts
///
/// Implemented for `u16`, `u32`, `u64` and `u128`; sealed.
pub trait VarintWord:
    Copy + Default + Eq + fmt::Debug + fmt::Display + sealed::Sealed + 'static
{
    /// Width in bits
    const BITS: u32;

    /// Widen to `u128`
    fn to_u128(self) -> u128;

    /// Narrow from `u128`; callers guarantee the value fits
    fn from_u128(value: u128) -> Self;
}

macro_rules! impl_varint_word {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl VarintWord for $ty {
                const BITS: u32 = <$ty>::BITS;

                fn to_u128(self) -> u128 {
                    u128::from(self)
                }

                fn from_u128(value: u128) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_varint_word!(u16, u32, u64, u128);

/// Varint decoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VarintError {
    /// Value does not fit the target width
    #[error("varint overflows {bits}-bit integer")]
    Overflow {
        /// Width of the target integer
        bits: u32,
    },

    /// Redundant trailing zero group
    #[error("non-canonical varint")]
    NonCanonical,

    /// Input ended before the final byte
    #[error("truncated varint")]
    Truncated,
}

/// Number of bytes `value` encodes to
pub fn varint_len<V: VarintWord>(value: V) -> usize {
    let mut value = value.to_u128();
    let mut len = 1;
    while value >= 0x80 {
        value >>= 7;
        len += 1;
    }
    len
}

/// Encode `value` into `buf`, returning the number of bytes written.
pub fn encode_varint<V: VarintWord>(value: V, buf: &mut [u8; MAX_VARINT_BYTES]) -> usize {
    let mut value = value.to_u128();
    let mut i = 0;
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf[i] = byte;
            return i + 1;
        }
        buf[i] = byte | 0x80;
        i += 1;
    }
}

/// Encode `value` and append it to `out`.
pub fn encode_varint_to_vec<V: VarintWord>(value: V, out: &mut Vec<u8>) {
    let mut buf = [0u8; MAX_VARINT_BYTES];
    let len = encode_varint(value, &mut buf);
    out.extend_from_slice(&buf[..len]);
}

/// Decode a varint from the front of `buf`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode_varint<V: VarintWord>(buf: &[u8]) -> Result<(V, usize), VarintError> {
    let mut decoder = VarintDecoder::new();
    for (i, &byte) in buf.iter().enumerate() {
        if decoder.push::<V>(byte)? {
            return Ok((decoder.finish(), i + 1));
        }
    }
    Err(VarintError::Truncated)
}

/// Byte-at-a-time varint decoder
///
/// Lets stream readers validate each byte as it arrives without buffering.
#[derive(Debug, Default)]
pub struct VarintDecoder {
    value: u128,
    shift: u32,
}

impl VarintDecoder {
    /// Start a new varint
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next byte; returns `Ok(true)` once the varint is complete.
    pub fn push<V: VarintWord>(&mut self, byte: u8) -> Result<bool, VarintError> {
        let group = byte & 0x7F;
        if self.shift >= V::BITS
            || (self.shift + 7 >= V::BITS && u32::from(group) >> (V::BITS - self.shift) != 0)
        {
            return Err(VarintError::Overflow { bits: V::BITS });
        }
        if byte == 0 && self.shift != 0 {
            return Err(VarintError::NonCanonical);
        }

        self.value |= u128::from(group) << self.shift;
        if byte & 0x80 == 0 {
            return Ok(true);
        }
        self.shift += 7;
        Ok(false)
    }

    /// Value decoded so far, narrowed to `V`
    pub fn finish<V: VarintWord>(self) -> V {
        V::from_u128(self.value)
    }
}
