//! JSON text archive
//!
//! Write-only. Produces a human-readable rendering of the same routines the
//! binary archives run, which is handy for logs and debugging dumps:
//!
//! - arrays print as `[a, b]` (this is where `delimit_array` matters)
//! - varints and bytes print as decimal numbers
//! - blobs print as quoted lowercase hex
//! - strings print as escaped JSON strings

use crate::archive::Archive;
use crate::state::StreamState;
use crate::varint::VarintWord;
use archwire_core::{ArchiveConfig, ArchiveError, Direction};
use std::fmt::Write as _;
use std::io::Write;

/// Archive that renders values as JSON text
pub struct JsonWriter<W> {
    writer: W,
    state: StreamState,
}

impl<W: Write> JsonWriter<W> {
    /// Create a writer with the default configuration
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, &ArchiveConfig::default())
    }

    /// Create a writer enforcing `config`'s limits
    pub fn with_config(writer: W, config: &ArchiveConfig) -> Self {
        JsonWriter {
            writer,
            state: StreamState::new(config.limits.clone()),
        }
    }

    /// Consume the archive and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Number of arrays currently open
    pub fn depth(&self) -> usize {
        self.state.depth()
    }

    fn write_str(&mut self, text: &str) {
        if !self.state.good() {
            return;
        }
        match self.writer.write_all(text.as_bytes()) {
            Ok(()) => self.state.position += text.len() as u64,
            Err(e) => self.state.fail(e.into()),
        }
    }
}

impl<W: Write> Archive for JsonWriter<W> {
    const DIRECTION: Direction = Direction::Write;

    fn begin_array(&mut self, count: &mut usize) {
        if !self.state.check_array_len(*count) || !self.state.open_array() {
            return;
        }
        self.write_str("[");
    }

    fn delimit_array(&mut self) {
        self.write_str(", ");
    }

    fn end_array(&mut self) {
        if !self.state.good() {
            return;
        }
        self.state.close_array();
        self.write_str("]");
    }

    fn serialize_varint<V: VarintWord>(&mut self, value: &mut V) {
        self.write_str(&value.to_string());
    }

    fn serialize_byte(&mut self, value: &mut u8) {
        self.write_str(&value.to_string());
    }

    fn serialize_blob(&mut self, blob: &mut [u8]) {
        let mut hex = String::with_capacity(blob.len() * 2 + 2);
        hex.push('"');
        for byte in blob.iter() {
            // Writing to a String cannot fail
            let _ = write!(hex, "{byte:02x}");
        }
        hex.push('"');
        self.write_str(&hex);
    }

    fn serialize_string(&mut self, value: &mut String) {
        if !self.state.check_blob_len(value.len()) {
            return;
        }
        match serde_json::to_string(value.as_str()) {
            Ok(quoted) => self.write_str(&quoted),
            Err(e) => self.state.fail(ArchiveError::Io {
                kind: std::io::ErrorKind::InvalidData,
                message: e.to_string(),
            }),
        }
    }

    fn good(&self) -> bool {
        self.state.good()
    }

    fn error(&self) -> Option<&ArchiveError> {
        self.state.error()
    }

    fn fail(&mut self, error: ArchiveError) {
        self.state.fail(error);
    }

    fn position(&self) -> u64 {
        self.state.position
    }
}
