//! Serialization routines for archwire
//!
//! - [`Serialize`]: the recursive routine every serializable type supplies
//! - [`varint`]: varint codec for fixed-width integers, with sign reinterpretation
//! - [`element`]: compile-time choice between the varint codec and [`Serialize`]
//! - [`pair`]: the two-element framed composite
//! - [`api`]: `to_bytes` / `from_bytes` / `to_json` convenience entry points
//!
//! ```ignore
//! use archwire_serialize::{from_bytes, to_bytes};
//!
//! let mut pair = (i32::MIN, "min".to_string());
//! let bytes = to_bytes(&mut pair)?;
//! let back: (i32, String) = from_bytes(&bytes)?;
//! assert_eq!(back, pair);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod element;
pub mod pair;
pub mod ser;
pub mod varint;

pub use api::{
    from_bytes, from_bytes_with_config, from_reader, run, to_bytes, to_bytes_with_config,
    to_json, to_writer,
};
pub use element::{strategy_of, ElementStrategy, PairElement};
pub use pair::{serialize_pair, PAIR_LEN};
pub use ser::Serialize;
pub use varint::VarintElement;

/// Logging category for serialization failures
pub const LOG_CATEGORY: &str = "serialization";
