//! Binary archives
//!
//! # Binary Format
//!
//! - **Varints**: unsigned LEB128 (see [`crate::varint`])
//! - **Array framing**: element count as a varint; delimiters and array ends
//!   write nothing
//! - **Bytes**: one raw byte
//! - **Blobs**: raw bytes, length fixed by the type
//! - **Strings**: byte length as a varint, then UTF-8 bytes
//!
//! [`BinaryWriter`] and [`BinaryReader`] are exact mirrors: a value written by
//! one reads back through the other with the same routine.

use crate::archive::Archive;
use crate::state::StreamState;
use crate::varint::{encode_varint, VarintDecoder, VarintError, VarintWord, MAX_VARINT_BYTES};
use archwire_core::{ArchiveConfig, ArchiveError, Direction};
use std::io::{self, BufRead, Read, Write};

/// Archive that writes the binary format to any `Write`
pub struct BinaryWriter<W> {
    writer: W,
    state: StreamState,
}

impl<W: Write> BinaryWriter<W> {
    /// Create a writer with the default configuration
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, &ArchiveConfig::default())
    }

    /// Create a writer enforcing `config`'s limits
    pub fn with_config(writer: W, config: &ArchiveConfig) -> Self {
        BinaryWriter {
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

    /// Flush the underlying writer, recording a failure on the archive
    pub fn flush(&mut self) -> bool {
        if !self.state.good() {
            return false;
        }
        if let Err(e) = self.writer.flush() {
            self.state.fail(e.into());
            return false;
        }
        true
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        if !self.state.good() {
            return;
        }
        match self.writer.write_all(bytes) {
            Ok(()) => self.state.position += bytes.len() as u64,
            Err(e) => self.state.fail(e.into()),
        }
    }

    fn write_varint<V: VarintWord>(&mut self, value: V) {
        let mut buf = [0u8; MAX_VARINT_BYTES];
        let len = encode_varint(value, &mut buf);
        self.write_bytes(&buf[..len]);
    }
}

impl<W: Write> Archive for BinaryWriter<W> {
    const DIRECTION: Direction = Direction::Write;

    fn begin_array(&mut self, count: &mut usize) {
        if !self.state.check_array_len(*count) || !self.state.open_array() {
            return;
        }
        self.write_varint(*count as u64);
    }

    fn delimit_array(&mut self) {}

    fn end_array(&mut self) {
        self.state.close_array();
    }

    fn serialize_varint<V: VarintWord>(&mut self, value: &mut V) {
        self.write_varint(*value);
    }

    fn serialize_byte(&mut self, value: &mut u8) {
        self.write_bytes(&[*value]);
    }

    fn serialize_blob(&mut self, blob: &mut [u8]) {
        self.write_bytes(blob);
    }

    fn serialize_string(&mut self, value: &mut String) {
        if !self.state.check_blob_len(value.len()) {
            return;
        }
        self.write_varint(value.len() as u64);
        self.write_bytes(value.as_bytes());
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

/// Archive that reads the binary format from any `Read`
pub struct BinaryReader<R> {
    reader: R,
    state: StreamState,
}

impl<R: Read> BinaryReader<R> {
    /// Create a reader with the default configuration
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, &ArchiveConfig::default())
    }

    /// Create a reader enforcing `config`'s limits
    pub fn with_config(reader: R, config: &ArchiveConfig) -> Self {
        BinaryReader {
            reader,
            state: StreamState::new(config.limits.clone()),
        }
    }

    /// Consume the archive and return the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Number of arrays currently open
    pub fn depth(&self) -> usize {
        self.state.depth()
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> bool {
        if !self.state.good() {
            return false;
        }
        match self.reader.read_exact(buf) {
            Ok(()) => {
                self.state.position += buf.len() as u64;
                true
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                self.state.fail(ArchiveError::UnexpectedEof {
                    offset: self.state.position,
                });
                false
            }
            Err(e) => {
                self.state.fail(e.into());
                false
            }
        }
    }

    fn read_varint<V: VarintWord>(&mut self) -> Option<V> {
        let start = self.state.position;
        let mut decoder = VarintDecoder::new();
        loop {
            let mut byte = [0u8; 1];
            if !self.read_exact(&mut byte) {
                return None;
            }
            match decoder.push::<V>(byte[0]) {
                Ok(true) => return Some(decoder.finish()),
                Ok(false) => {}
                Err(e) => {
                    self.state.fail(varint_error(e, start));
                    return None;
                }
            }
        }
    }

    fn read_len(&mut self) -> Option<usize> {
        let start = self.state.position;
        let len = self.read_varint::<u64>()?;
        match usize::try_from(len) {
            Ok(len) => Some(len),
            Err(_) => {
                self.state.fail(ArchiveError::VarintOverflow {
                    bits: usize::BITS,
                    offset: start,
                });
                None
            }
        }
    }
}

impl<R: BufRead> BinaryReader<R> {
    /// Whether the input is exhausted
    ///
    /// An I/O error while peeking counts as not exhausted; the next read
    /// reports it.
    pub fn is_eof(&mut self) -> bool {
        matches!(self.reader.fill_buf(), Ok(buf) if buf.is_empty())
    }
}

impl<'a> BinaryReader<&'a [u8]> {
    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.reader.len()
    }
}

fn varint_error(e: VarintError, offset: u64) -> ArchiveError {
    match e {
        VarintError::Overflow { bits } => ArchiveError::VarintOverflow { bits, offset },
        VarintError::NonCanonical => ArchiveError::NonCanonicalVarint { offset },
        VarintError::Truncated => ArchiveError::UnexpectedEof { offset },
    }
}

impl<R: Read> Archive for BinaryReader<R> {
    const DIRECTION: Direction = Direction::Read;

    fn begin_array(&mut self, count: &mut usize) {
        if !self.state.open_array() {
            return;
        }
        if let Some(len) = self.read_len() {
            if self.state.check_array_len(len) {
                *count = len;
            }
        }
    }

    fn delimit_array(&mut self) {}

    fn end_array(&mut self) {
        self.state.close_array();
    }

    fn serialize_varint<V: VarintWord>(&mut self, value: &mut V) {
        if let Some(v) = self.read_varint() {
            *value = v;
        }
    }

    fn serialize_byte(&mut self, value: &mut u8) {
        let mut byte = [0u8; 1];
        if self.read_exact(&mut byte) {
            *value = byte[0];
        }
    }

    fn serialize_blob(&mut self, blob: &mut [u8]) {
        self.read_exact(blob);
    }

    fn serialize_string(&mut self, value: &mut String) {
        let Some(len) = self.read_len() else {
            return;
        };
        if !self.state.check_blob_len(len) {
            return;
        }
        let offset = self.state.position;
        let mut bytes = vec![0u8; len];
        if !self.read_exact(&mut bytes) {
            return;
        }
        match String::from_utf8(bytes) {
            Ok(s) => *value = s,
            Err(_) => self.state.fail(ArchiveError::InvalidUtf8 { offset }),
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
