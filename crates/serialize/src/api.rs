//! Typed entry points
//!
//! Run one serialization pass and turn its boolean outcome into a
//! [`Result`]. Decoding goes into a fresh `T::default()` that is dropped on
//! failure, so a partially decoded value never reaches the caller.

use crate::ser::Serialize;
use crate::LOG_CATEGORY;
use archwire_archive::{Archive, BinaryReader, BinaryWriter, JsonWriter};
use archwire_core::{ArchiveConfig, Error, Result};
use archwire_log::log_debug;
use std::io::{Read, Write};

/// Run `value` through `ar` and classify the outcome
pub fn run<A: Archive, T: Serialize>(ar: &mut A, value: &mut T) -> Result<()> {
    let ok = value.serialize(ar);
    if let Some(e) = ar.error() {
        log_debug!(
            LOG_CATEGORY,
            "{} pass over {} failed: {}",
            A::DIRECTION,
            std::any::type_name::<T>(),
            e
        );
        return Err(Error::Archive(e.clone()));
    }
    if !ok {
        log_debug!(
            LOG_CATEGORY,
            "{} pass over {} rejected",
            A::DIRECTION,
            std::any::type_name::<T>()
        );
        return Err(Error::rejected::<T>());
    }
    Ok(())
}

/// Encode `value` in the binary format
pub fn to_bytes<T: Serialize>(value: &mut T) -> Result<Vec<u8>> {
    to_bytes_with_config(value, &ArchiveConfig::default())
}

/// Encode `value` in the binary format under `config`'s limits
pub fn to_bytes_with_config<T: Serialize>(value: &mut T, config: &ArchiveConfig) -> Result<Vec<u8>> {
    to_writer(Vec::new(), value, config)
}

/// Encode `value` into `writer` and hand the writer back
pub fn to_writer<W: Write, T: Serialize>(
    writer: W,
    value: &mut T,
    config: &ArchiveConfig,
) -> Result<W> {
    config.validate()?;
    let mut ar = BinaryWriter::with_config(writer, config);
    run(&mut ar, value)?;
    if !ar.flush() {
        return Err(ar.error().cloned().map_or_else(|| Error::rejected::<T>(), Error::Archive));
    }
    Ok(ar.into_inner())
}

/// Decode a `T` from the binary format
///
/// Fails with [`Error::TrailingBytes`] if input remains after the value.
pub fn from_bytes<T: Serialize + Default>(bytes: &[u8]) -> Result<T> {
    from_bytes_with_config(bytes, &ArchiveConfig::default())
}

/// Decode a `T` from the binary format under `config`
pub fn from_bytes_with_config<T: Serialize + Default>(
    bytes: &[u8],
    config: &ArchiveConfig,
) -> Result<T> {
    config.validate()?;
    let mut ar = BinaryReader::with_config(bytes, config);
    let mut value = T::default();
    run(&mut ar, &mut value)?;
    let remaining = ar.remaining();
    if config.reject_trailing_bytes && remaining > 0 {
        return Err(Error::TrailingBytes { remaining });
    }
    Ok(value)
}

/// Decode one `T` from `reader`
///
/// Reads exactly the bytes of one value; anything after it is left in the
/// reader.
pub fn from_reader<R: Read, T: Serialize + Default>(reader: R, config: &ArchiveConfig) -> Result<T> {
    config.validate()?;
    let mut ar = BinaryReader::with_config(reader, config);
    let mut value = T::default();
    run(&mut ar, &mut value)?;
    Ok(value)
}

/// Render `value` as JSON text
pub fn to_json<T: Serialize>(value: &mut T) -> Result<String> {
    let mut ar = JsonWriter::new(Vec::new());
    run(&mut ar, value)?;
    String::from_utf8(ar.into_inner())
        .map_err(|e| Error::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
