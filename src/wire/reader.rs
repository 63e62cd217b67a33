//! # Wire Reader - Primitive Decoding
//!
//! ## Purpose
//!
//! Bounds-checked decoding of the scalar wire types from an in-memory
//! byte slice. Every multi-byte value is little-endian. The reader tracks
//! its position explicitly so that every error can name the exact offset
//! at which decoding failed.
//!
//! ## Format Support
//!
//! - Fixed-width scalars: `i32`/`u32` (4 bytes), `i64` (8), `i128` (16),
//!   256-bit values (32), IEEE-754 `f64` (8)
//! - Booleans: one full 4-byte word holding one of two reserved sentinels
//! - Byte strings: variable-width length prefix (1 byte below 254, else a
//!   marker byte followed by a 3-byte little-endian length), payload, and
//!   zero padding up to the next 4-byte boundary
//! - UTF-8 strings: byte-string framing plus UTF-8 validation

use byteorder::{ByteOrder, LittleEndian};
use num_enum::TryFromPrimitive;

use crate::constants::{ALIGNMENT, BOOL_FALSE, BOOL_TRUE, SHORT_LEN_MAX};
use crate::error::{ParseError, ParseResult};

/// The two words a boolean field may hold on the wire
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
enum BoolWord {
    True = BOOL_TRUE,
    False = BOOL_FALSE,
}

/// Cursor over an immutable byte slice
///
/// Each decode call owns its reader exclusively; there is no shared
/// mutable state between concurrent decodes of independent buffers.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Create a reader positioned at the start of `buf`
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True once every byte has been consumed
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Consume exactly `n` bytes, or fail without consuming any
    #[inline]
    fn take(&mut self, n: usize) -> ParseResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(ParseError::truncated(n, self.remaining(), self.pos));
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read a signed 32-bit integer
    pub fn read_i32(&mut self) -> ParseResult<i32> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }

    /// Read an unsigned 32-bit word (constructor IDs, flags words, counts)
    pub fn read_u32(&mut self) -> ParseResult<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    /// Read a signed 64-bit integer
    pub fn read_i64(&mut self) -> ParseResult<i64> {
        Ok(LittleEndian::read_i64(self.take(8)?))
    }

    /// Read a 128-bit integer (nonces in the handshake types)
    pub fn read_i128(&mut self) -> ParseResult<i128> {
        Ok(LittleEndian::read_i128(self.take(16)?))
    }

    /// Read a 256-bit value as a little-endian byte array
    pub fn read_u256(&mut self) -> ParseResult<[u8; 32]> {
        let slice = self.take(32)?;
        let mut out = [0u8; 32];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// Read an IEEE-754 double
    pub fn read_f64(&mut self) -> ParseResult<f64> {
        Ok(LittleEndian::read_f64(self.take(8)?))
    }

    /// Read a boolean sentinel word
    ///
    /// Any word other than the two reserved constants is rejected; there
    /// is no best-guess interpretation of a malformed boolean.
    pub fn read_bool(&mut self) -> ParseResult<bool> {
        let offset = self.pos;
        let word = self.read_u32()?;
        match BoolWord::try_from(word) {
            Ok(BoolWord::True) => Ok(true),
            Ok(BoolWord::False) => Ok(false),
            Err(_) => Err(ParseError::InvalidBoolSentinel { word, offset }),
        }
    }

    /// Read a length-prefixed byte string and skip its padding
    pub fn read_bytes(&mut self) -> ParseResult<Vec<u8>> {
        let first = self.take(1)?[0];
        let (len, prefix_len) = if first as usize <= SHORT_LEN_MAX {
            (first as usize, 1)
        } else {
            let len_bytes = self.take(3)?;
            (LittleEndian::read_u24(len_bytes) as usize, 4)
        };

        let payload = self.take(len)?.to_vec();

        let padding = (ALIGNMENT - (prefix_len + len) % ALIGNMENT) % ALIGNMENT;
        self.take(padding)?;

        Ok(payload)
    }

    /// Read a length-prefixed UTF-8 string
    pub fn read_string(&mut self) -> ParseResult<String> {
        let offset = self.pos;
        let bytes = self.read_bytes()?;
        String::from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8 { offset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_scalars_little_endian() {
        let mut data = Vec::new();
        data.extend_from_slice(&0x1234_5678i32.to_le_bytes());
        data.extend_from_slice(&(-9i64).to_le_bytes());
        data.extend_from_slice(&2.5f64.to_le_bytes());

        let mut reader = WireReader::new(&data);
        assert_eq!(reader.read_i32().unwrap(), 0x1234_5678);
        assert_eq!(reader.read_i64().unwrap(), -9);
        assert_eq!(reader.read_f64().unwrap(), 2.5);
        assert!(reader.is_at_end());
    }

    #[test]
    fn reads_negative_int() {
        let data = (-1i32).to_le_bytes();
        let mut reader = WireReader::new(&data);
        assert_eq!(reader.read_i32().unwrap(), -1);
    }

    #[test]
    fn truncated_scalar_reports_offset() {
        let data = [0u8; 6];
        let mut reader = WireReader::new(&data);
        reader.read_i32().unwrap();
        let err = reader.read_i32().unwrap_err();
        assert_eq!(
            err,
            ParseError::Truncated {
                need: 4,
                got: 2,
                offset: 4
            }
        );
    }

    #[test]
    fn bool_sentinels_roundtrip() {
        let mut data = Vec::new();
        data.extend_from_slice(&BOOL_TRUE.to_le_bytes());
        data.extend_from_slice(&BOOL_FALSE.to_le_bytes());

        let mut reader = WireReader::new(&data);
        assert!(reader.read_bool().unwrap());
        assert!(!reader.read_bool().unwrap());
    }

    #[test]
    fn bad_bool_sentinel_rejected() {
        let data = 0xDEAD_BEEFu32.to_le_bytes();
        let mut reader = WireReader::new(&data);
        let err = reader.read_bool().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidBoolSentinel {
                word: 0xDEAD_BEEF,
                offset: 0
            }
        );
    }

    #[test]
    fn short_form_bytes_with_padding() {
        // len=2, payload "ok", 1 pad byte: 4 bytes total
        let data = [2, b'o', b'k', 0];
        let mut reader = WireReader::new(&data);
        assert_eq!(reader.read_bytes().unwrap(), b"ok");
        assert!(reader.is_at_end());
    }

    #[test]
    fn long_form_bytes() {
        // 300-byte payload: marker 254, u24 length, payload, no padding (4 + 300 aligned)
        let mut data = vec![254, 0x2C, 0x01, 0x00];
        data.extend(std::iter::repeat(0xAB).take(300));
        let mut reader = WireReader::new(&data);
        let payload = reader.read_bytes().unwrap();
        assert_eq!(payload.len(), 300);
        assert!(payload.iter().all(|&b| b == 0xAB));
        assert!(reader.is_at_end());
    }

    #[test]
    fn truncated_payload_rejected() {
        // Claims 10 bytes, provides 3
        let data = [10, 1, 2, 3];
        let mut reader = WireReader::new(&data);
        let err = reader.read_bytes().unwrap_err();
        assert!(matches!(err, ParseError::Truncated { need: 10, .. }));
    }

    #[test]
    fn missing_padding_rejected() {
        // len=2 plus payload but the pad byte is cut off
        let data = [2, b'o', b'k'];
        let mut reader = WireReader::new(&data);
        let err = reader.read_bytes().unwrap_err();
        assert!(matches!(err, ParseError::Truncated { need: 1, got: 0, .. }));
    }

    #[test]
    fn invalid_utf8_rejected() {
        let data = [2, 0xFF, 0xFE, 0];
        let mut reader = WireReader::new(&data);
        let err = reader.read_string().unwrap_err();
        assert_eq!(err, ParseError::InvalidUtf8 { offset: 0 });
    }

    #[test]
    fn int128_and_u256() {
        let mut data = Vec::new();
        data.extend_from_slice(&0x0102_0304_0506_0708_090A_0B0C_0D0E_0F10i128.to_le_bytes());
        data.extend_from_slice(&[7u8; 32]);

        let mut reader = WireReader::new(&data);
        assert_eq!(
            reader.read_i128().unwrap(),
            0x0102_0304_0506_0708_090A_0B0C_0D0E_0F10
        );
        assert_eq!(reader.read_u256().unwrap(), [7u8; 32]);
    }
}
