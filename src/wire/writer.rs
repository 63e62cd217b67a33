//! # Wire Writer - Primitive Encoding
//!
//! Mirror image of the reader: little-endian scalars, boolean sentinel
//! words, and length-prefixed byte strings padded to the 4-byte
//! boundary, appended to a growable buffer. Scalar writes cannot fail;
//! byte-string writes fail only when the payload exceeds what the 3-byte
//! length field can describe.

use crate::constants::{
    ALIGNMENT, BOOL_FALSE, BOOL_TRUE, LONG_LEN_MARKER, MAX_BYTES_LEN, SHORT_LEN_MAX,
};
use crate::error::{SchemaError, SchemaResult};

/// Append-only encode buffer
#[derive(Debug, Clone, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with preallocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Bytes written so far
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been written
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// View the encoded bytes without consuming the writer
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the writer and return the encoded bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Write a signed 32-bit integer
    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Write an unsigned 32-bit word (constructor IDs, flags words, counts)
    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Write a signed 64-bit integer
    pub fn write_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Write a 128-bit integer
    pub fn write_i128(&mut self, value: i128) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Write a 256-bit value
    pub fn write_u256(&mut self, value: &[u8; 32]) {
        self.buf.extend_from_slice(value);
    }

    /// Write an IEEE-754 double
    pub fn write_f64(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Write a boolean sentinel word
    pub fn write_bool(&mut self, value: bool) {
        self.write_u32(if value { BOOL_TRUE } else { BOOL_FALSE });
    }

    /// Write a length-prefixed byte string with padding
    pub fn write_bytes(&mut self, payload: &[u8]) -> SchemaResult<()> {
        let len = payload.len();
        if len > MAX_BYTES_LEN {
            return Err(SchemaError::OversizedBytes { len });
        }

        let prefix_len = if len <= SHORT_LEN_MAX {
            self.buf.push(len as u8);
            1
        } else {
            self.buf.push(LONG_LEN_MARKER);
            self.buf.push(len as u8);
            self.buf.push((len >> 8) as u8);
            self.buf.push((len >> 16) as u8);
            4
        };

        self.buf.extend_from_slice(payload);

        let padding = (ALIGNMENT - (prefix_len + len) % ALIGNMENT) % ALIGNMENT;
        self.buf.extend(std::iter::repeat(0u8).take(padding));

        Ok(())
    }

    /// Write a length-prefixed UTF-8 string
    pub fn write_string(&mut self, value: &str) -> SchemaResult<()> {
        self.write_bytes(value.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::WireReader;

    #[test]
    fn scalars_roundtrip() {
        let mut writer = WireWriter::new();
        writer.write_i32(-42);
        writer.write_i64(i64::MIN);
        writer.write_i128(i128::MAX);
        writer.write_f64(-0.125);
        writer.write_u256(&[9u8; 32]);

        let bytes = writer.into_bytes();
        let mut reader = WireReader::new(&bytes);
        assert_eq!(reader.read_i32().unwrap(), -42);
        assert_eq!(reader.read_i64().unwrap(), i64::MIN);
        assert_eq!(reader.read_i128().unwrap(), i128::MAX);
        assert_eq!(reader.read_f64().unwrap(), -0.125);
        assert_eq!(reader.read_u256().unwrap(), [9u8; 32]);
        assert!(reader.is_at_end());
    }

    #[test]
    fn bool_words_are_exact() {
        let mut writer = WireWriter::new();
        writer.write_bool(true);
        writer.write_bool(false);
        let bytes = writer.into_bytes();
        assert_eq!(&bytes[..4], &BOOL_TRUE.to_le_bytes());
        assert_eq!(&bytes[4..], &BOOL_FALSE.to_le_bytes());
    }

    #[test]
    fn short_form_framing() {
        let mut writer = WireWriter::new();
        writer.write_bytes(b"ok").unwrap();
        // 1-byte prefix + 2 payload + 1 pad
        assert_eq!(writer.as_bytes(), &[2, b'o', b'k', 0]);
    }

    #[test]
    fn long_form_framing() {
        let mut writer = WireWriter::new();
        writer.write_bytes(&[0xCD; 254]).unwrap();
        let bytes = writer.as_bytes();
        assert_eq!(bytes[0], LONG_LEN_MARKER);
        assert_eq!(&bytes[1..4], &[254, 0, 0]);
        // 4-byte prefix + 254 payload + 2 pad
        assert_eq!(bytes.len(), 260);
        assert_eq!(&bytes[258..], &[0, 0]);
    }

    #[test]
    fn encoded_size_always_aligned() {
        for len in 0..=300usize {
            let payload = vec![0x5A; len];
            let mut writer = WireWriter::new();
            writer.write_bytes(&payload).unwrap();
            assert_eq!(writer.len() % ALIGNMENT, 0, "len {len} not aligned");

            let mut reader = WireReader::new(writer.as_bytes());
            assert_eq!(reader.read_bytes().unwrap(), payload);
            assert!(reader.is_at_end());
        }
    }

    #[test]
    fn oversized_payload_rejected() {
        let payload = vec![0u8; MAX_BYTES_LEN + 1];
        let mut writer = WireWriter::new();
        let err = writer.write_bytes(&payload).unwrap_err();
        assert_eq!(
            err,
            SchemaError::OversizedBytes {
                len: MAX_BYTES_LEN + 1
            }
        );
    }
}
