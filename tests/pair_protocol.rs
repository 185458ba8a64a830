//! End-to-end tests for the pair protocol
//!
//! Covers the observable guarantees of the pair codec through the public API:
//! - Round-trip for every supported element type
//! - Sign fidelity at the minimum values
//! - Length guard for counts 0, 1 and 3
//! - Truncation guard (no partially-populated pair escapes)
//! - Short-circuit on first-element failure
//! - Nesting

use archwire::{
    from_bytes, serialize_pair, strategy_of, to_bytes, Archive, ArchiveError, BinaryReader,
    BinaryWriter, ElementStrategy, Error, Serialize,
};
use std::cell::Cell;
use std::rc::Rc;

/// Helper to encode a pair through the binary writer
fn encode<T: Serialize>(mut value: T) -> Vec<u8> {
    to_bytes(&mut value).unwrap()
}

#[test]
fn test_roundtrip_integer_widths() {
    let value = ((u16::MAX, u32::MAX), (u64::MAX, u128::MAX));
    assert_eq!(from_bytes::<((u16, u32), (u64, u128))>(&encode(value)).unwrap(), value);

    let value = ((i16::MAX, i32::MAX), (i64::MAX, i128::MAX));
    assert_eq!(from_bytes::<((i16, i32), (i64, i128))>(&encode(value)).unwrap(), value);
}

#[test]
fn test_roundtrip_leaf_types() {
    let value = ((0xFFu8, -128i8), (true, [7u8; 32]));
    assert_eq!(from_bytes::<((u8, i8), (bool, [u8; 32]))>(&encode(value)).unwrap(), value);

    let value = ("key".to_string(), "värde".to_string());
    assert_eq!(from_bytes::<(String, String)>(&encode(value.clone())).unwrap(), value);
}

#[test]
fn test_sign_fidelity_minimum_first_element() {
    let bytes = encode((i32::MIN, 1u32));
    // count, then 1 << 31 as a 5-byte varint, then 1
    assert_eq!(bytes, [0x02, 0x80, 0x80, 0x80, 0x80, 0x08, 0x01]);
    assert_eq!(from_bytes::<(i32, u32)>(&bytes).unwrap(), (i32::MIN, 1));

    for (a, b) in [(i64::MIN, -1i64), (-1, i64::MIN), (0, i64::MAX)] {
        assert_eq!(from_bytes::<(i64, i64)>(&encode((a, b))).unwrap(), (a, b));
    }
}

#[test]
fn test_length_guard() {
    for count in [0u8, 1, 3] {
        // Element bytes that would decode fine if the count were accepted
        let bytes = [count, 0x05, 0x06, 0x07];
        let mut ar = BinaryReader::new(&bytes[..]);
        let mut pair = (0u32, 0u32);
        assert!(!serialize_pair(&mut ar, &mut pair), "count {count} accepted");
        assert_eq!(ar.position(), 1, "count {count}: consumed element bytes");
        assert_eq!(pair, (0, 0));

        assert!(matches!(
            from_bytes::<(u32, u32)>(&bytes),
            Err(Error::Rejected { .. })
        ));
    }
}

#[test]
fn test_truncation_guard() {
    let bytes = encode((1234u64, 5678u64));
    // count + first element, nothing after
    let truncated = &bytes[..3];

    let result = from_bytes::<(u64, u64)>(truncated);
    assert!(matches!(
        result,
        Err(Error::Archive(ArchiveError::UnexpectedEof { offset: 3 }))
    ));
}

#[test]
fn test_truncated_count_varint() {
    let result = from_bytes::<(u64, u64)>(&[0x82]);
    assert!(matches!(
        result,
        Err(Error::Archive(ArchiveError::UnexpectedEof { .. }))
    ));
}

/// Element stub that counts calls and fails on demand
#[derive(Clone, Default)]
struct Probe {
    calls: Rc<Cell<usize>>,
    fail: bool,
}

impl Serialize for Probe {
    fn serialize<A: Archive>(&mut self, ar: &mut A) -> bool {
        self.calls.set(self.calls.get() + 1);
        let mut marker = 0u8;
        marker.serialize(ar) && !self.fail
    }
}

#[test]
fn test_short_circuit_on_first_failure() {
    let first = Probe {
        fail: true,
        ..Probe::default()
    };
    let second = Probe::default();
    let mut pair = (first.clone(), second.clone());

    let mut ar = BinaryReader::new(&[0x02, 0x00, 0x00][..]);
    assert!(!serialize_pair(&mut ar, &mut pair));
    assert_eq!(first.calls.get(), 1);
    assert_eq!(second.calls.get(), 0, "second element must not be decoded");
    // The failure came from the element, not the stream
    assert!(ar.good());
}

#[test]
fn test_short_circuit_on_stream_failure() {
    let second = Probe::default();
    let mut pair = (0u64, second.clone());

    // count, then a varint that never terminates
    let mut ar = BinaryReader::new(&[0x02, 0x80][..]);
    assert!(!serialize_pair(&mut ar, &mut pair));
    assert_eq!(second.calls.get(), 0);
}

#[test]
fn test_both_elements_called_on_success() {
    let first = Probe::default();
    let second = Probe::default();
    let mut pair = (first.clone(), second.clone());

    let mut ar = BinaryWriter::new(Vec::new());
    assert!(serialize_pair(&mut ar, &mut pair));
    assert_eq!((first.calls.get(), second.calls.get()), (1, 1));
    assert_eq!(ar.into_inner(), [0x02, 0x00, 0x00]);
}

#[test]
fn test_nested_pair_roundtrip() {
    let value = ((i32::MIN, 42u64), (-1i16, "inner".to_string()));
    let bytes = encode(value.clone());
    assert_eq!(bytes[0], 0x02);
    assert_eq!(bytes[1], 0x02);
    assert_eq!(
        from_bytes::<((i32, u64), (i16, String))>(&bytes).unwrap(),
        value
    );
}

#[test]
fn test_nested_inner_length_checked() {
    // Outer pair is fine, inner claims three elements
    let bytes = [0x02, 0x03, 0x01, 0x02, 0x03, 0x04];
    assert!(matches!(
        from_bytes::<((u32, u32), u32)>(&bytes),
        Err(Error::Rejected { .. })
    ));
}

#[test]
fn test_dispatch_is_static() {
    assert_eq!(strategy_of::<i64>(), ElementStrategy::Varint { signed: true });
    assert_eq!(strategy_of::<u32>(), ElementStrategy::Varint { signed: false });
    assert_eq!(strategy_of::<Probe>(), ElementStrategy::Recursive);
    assert_eq!(strategy_of::<(i64, i64)>(), ElementStrategy::Recursive);
}
