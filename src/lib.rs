//! archwire - symmetric archive serialization
//!
//! One routine per type serves both directions: written against
//! [`Archive`], it encodes when handed a writer and decodes when handed a
//! reader. Pairs are framed as two-element arrays, and their integer elements
//! travel as LEB128 varints, signed widths bit-reinterpreted as unsigned.
//!
//! # Quick Start
//!
//! ```ignore
//! use archwire::{from_bytes, to_bytes, to_json};
//!
//! let mut pair = ((7u16, -1i64), "seven".to_string());
//! let bytes = to_bytes(&mut pair)?;
//! let back: ((u16, i64), String) = from_bytes(&bytes)?;
//! assert_eq!(back, pair);
//!
//! assert_eq!(to_json(&mut pair)?, r#"[[7, 18446744073709551615], "seven"]"#);
//! ```
//!
//! # Crates
//!
//! - `archwire-core`: direction, limits, configuration, errors
//! - `archwire-log`: category-gated leveled logging
//! - `archwire-archive`: the archive contract and its binary/JSON streams
//! - `archwire-serialize`: varint codec, element dispatch, pair codec

pub use archwire_archive::{
    varint, Archive, BinaryReader, BinaryWriter, JsonWriter, VarintWord,
};
pub use archwire_core::{
    ArchiveConfig, ArchiveError, ConfigError, Direction, Error, LimitError, Limits, Result,
};
pub use archwire_serialize::{
    from_bytes, from_bytes_with_config, from_reader, serialize_pair, strategy_of, to_bytes,
    to_bytes_with_config, to_json, to_writer, ElementStrategy, PairElement, Serialize,
    VarintElement, LOG_CATEGORY, PAIR_LEN,
};

/// Category-gated logging
pub use archwire_log as log;
