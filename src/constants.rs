//! # Wire Format Constants - TL Core Constants
//!
//! Central registry of wire-level constants used throughout the codec.
//! These values are fixed by the TL schema convention and must remain
//! stable for wire compatibility with existing peers.

/// Sentinel word encoding boolean `true`
///
/// Booleans are not single bytes on the wire: each occupies a full 4-byte
/// word holding one of two reserved constants. The constants are schema
/// facts and are preserved bit for bit.
pub const BOOL_TRUE: u32 = 0x997275B5;

/// Sentinel word encoding boolean `false`
pub const BOOL_FALSE: u32 = 0xBC799737;

/// Longest byte string encodable with the 1-byte length prefix
///
/// Payloads up to 253 bytes use `[len: u8][payload][padding]`. Longer
/// payloads switch to the marker form below.
pub const SHORT_LEN_MAX: usize = 253;

/// Marker byte introducing the 3-byte length form
///
/// Payloads of 254 bytes or more are framed as
/// `[254][len: u24 LE][payload][padding]`.
pub const LONG_LEN_MARKER: u8 = 254;

/// Largest payload the 3-byte length field can describe
pub const MAX_BYTES_LEN: usize = 0x00FF_FFFF;

/// Wire alignment unit in bytes
///
/// Every length-prefixed byte string is zero padded so its total encoded
/// size (prefix + payload + padding) is a multiple of this.
pub const ALIGNMENT: usize = 4;
