//! Varint integer codec
//!
//! Unsigned widths go straight to the archive's varint primitive. Signed
//! widths are reinterpreted bit-for-bit as the unsigned type of the same
//! width before encoding, and reinterpreted back after decoding, so `-1i32`
//! travels as `u32::MAX` and `i64::MIN` as `1 << 63`. The conversion goes
//! through the native byte representation, never through a value cast.
//!
//! Negative numbers therefore always take the maximum varint length for their
//! width. That is the price of a bit-exact mapping.

use archwire_archive::Archive;

/// Integer types encoded as varints
pub trait VarintElement: Copy {
    /// Whether the value is bit-reinterpreted through its unsigned twin
    const SIGNED: bool;

    /// Write `self` as a varint to, or read it from, `ar`
    ///
    /// Returns the archive's health after the step.
    fn serialize_varint_element<A: Archive>(&mut self, ar: &mut A) -> bool;
}

macro_rules! varint_unsigned {
    ($($unsigned:ty),* $(,)?) => {
        $(
            impl VarintElement for $unsigned {
                const SIGNED: bool = false;

                fn serialize_varint_element<A: Archive>(&mut self, ar: &mut A) -> bool {
                    ar.serialize_varint(self);
                    ar.good()
                }
            }
        )*
    };
}

macro_rules! varint_signed {
    ($($signed:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl VarintElement for $signed {
                const SIGNED: bool = true;

                fn serialize_varint_element<A: Archive>(&mut self, ar: &mut A) -> bool {
                    let mut bits = <$unsigned>::from_ne_bytes(self.to_ne_bytes());
                    ar.serialize_varint(&mut bits);
                    if ar.is_reading() {
                        *self = <$signed>::from_ne_bytes(bits.to_ne_bytes());
                    }
                    ar.good()
                }
            }
        )*
    };
}

varint_unsigned!(u16, u32, u64, u128);
varint_signed!(i16 => u16, i32 => u32, i64 => u64, i128 => u128);

#[cfg(test)]
mod tests {
    use super::*;
    use archwire_archive::{BinaryReader, BinaryWriter};

    fn encode<T: VarintElement>(mut value: T) -> Vec<u8> {
        let mut ar = BinaryWriter::new(Vec::new());
        assert!(value.serialize_varint_element(&mut ar));
        ar.into_inner()
    }

    fn decode<T: VarintElement + Default>(bytes: &[u8]) -> Option<T> {
        let mut ar = BinaryReader::new(bytes);
        let mut value = T::default();
        value.serialize_varint_element(&mut ar).then_some(value)
    }

    #[test]
    fn test_unsigned_is_plain_varint() {
        assert_eq!(encode(300u32), [0xAC, 0x02]);
        assert_eq!(encode(0u16), [0x00]);
        assert_eq!(decode::<u64>(&[0xAC, 0x02]), Some(300));
    }

    #[test]
    fn test_negative_one_is_all_ones() {
        assert_eq!(encode(-1i16), encode(u16::MAX));
        assert_eq!(encode(-1i32), encode(u32::MAX));
        assert_eq!(encode(-1i64), encode(u64::MAX));
        assert_eq!(encode(-1i128), encode(u128::MAX));
    }

    #[test]
    fn test_minimum_values_are_sign_bit() {
        assert_eq!(encode(i16::MIN), encode(1u16 << 15));
        assert_eq!(encode(i32::MIN), encode(1u32 << 31));
        assert_eq!(encode(i64::MIN), encode(1u64 << 63));
        assert_eq!(encode(i128::MIN), encode(1u128 << 127));
    }

    #[test]
    fn test_signed_roundtrip_edges() {
        for v in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(decode::<i32>(&encode(v)), Some(v));
        }
        for v in [i64::MIN, -1, 0, i64::MAX] {
            assert_eq!(decode::<i64>(&encode(v)), Some(v));
        }
        for v in [i16::MIN, -300, i16::MAX] {
            assert_eq!(decode::<i16>(&encode(v)), Some(v));
        }
        for v in [i128::MIN, -1, i128::MAX] {
            assert_eq!(decode::<i128>(&encode(v)), Some(v));
        }
    }

    #[test]
    fn test_positive_signed_matches_unsigned() {
        assert_eq!(encode(300i32), encode(300u32));
    }

    #[test]
    fn test_signed_decode_overflow_fails() {
        // u16::MAX + 1 does not fit an i16's unsigned twin
        assert_eq!(decode::<i16>(&[0x80, 0x80, 0x04]), None);
    }

    #[test]
    fn test_failed_decode_leaves_value() {
        let mut ar = BinaryReader::new(&[0x80u8][..]);
        let mut value = -7i32;
        assert!(!value.serialize_varint_element(&mut ar));
        assert_eq!(value, -7);
    }

    #[test]
    fn test_signedness_flags() {
        assert!(!<u64 as VarintElement>::SIGNED);
        assert!(<i64 as VarintElement>::SIGNED);
    }
}
