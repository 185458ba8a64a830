//! Archives for archwire
//!
//! This crate provides the stream side of serialization:
//!
//! - [`Archive`]: the directional contract serialization routines are written against
//! - [`BinaryWriter`] / [`BinaryReader`]: compact binary format with LEB128 varints
//! - [`JsonWriter`]: write-only JSON rendering for debugging
//! - [`varint`]: the LEB128 codec itself

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod archive;
pub mod binary;
pub mod json;
mod state;
pub mod varint;

pub use archive::Archive;
pub use binary::{BinaryReader, BinaryWriter};
pub use json::JsonWriter;
pub use varint::{
    decode_varint, encode_varint, encode_varint_to_vec, varint_len, VarintDecoder, VarintError,
    VarintWord, MAX_VARINT_BYTES,
};

// Re-export core types used in the Archive signature
pub use archwire_core::{ArchiveConfig, ArchiveError, Direction};
