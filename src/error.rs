//! # Codec Error Types
//!
//! Two taxonomies, split by direction:
//!
//! - [`ParseError`] covers everything that can go wrong while decoding a
//!   byte stream. Every variant carries the stream offset at which the
//!   failure was detected.
//! - [`SchemaError`] covers construction and encoding: a field assignment
//!   that does not match its schema, or a record that cannot be written
//!   without producing a stream that would not decode back.
//!
//! Both surface unchanged to the caller of the outermost operation. The
//! codec never recovers locally and never substitutes defaults on an error
//! path; optional-field defaults are a success-path concern handled by the
//! record codec.

use thiserror::Error;

/// Errors raised while decoding wire bytes
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Stream ended before a primitive, blob, or vector could be fully read
    #[error("truncated input at offset {offset}: need {need} bytes, got {got}")]
    Truncated {
        need: usize,
        got: usize,
        offset: usize,
    },

    /// A boolean word matched neither reserved sentinel
    #[error("invalid bool sentinel 0x{word:08x} at offset {offset}")]
    InvalidBoolSentinel { word: u32, offset: usize },

    /// A string field's payload is not valid UTF-8
    #[error("invalid UTF-8 in string at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// A polymorphic field's constructor ID has no registered decoder
    #[error("unknown constructor 0x{id:08x} at offset {offset}")]
    UnknownConstructor { id: u32, offset: usize },

    /// A typed decode found a different constructor than the schema expects
    #[error("constructor mismatch: expected 0x{expected:08x}, got 0x{actual:08x}")]
    ConstructorMismatch { expected: u32, actual: u32 },
}

impl ParseError {
    /// Create a truncation error
    #[inline]
    pub fn truncated(need: usize, got: usize, offset: usize) -> Self {
        Self::Truncated { need, got, offset }
    }

    /// Create an unknown-constructor error
    #[inline]
    pub fn unknown_constructor(id: u32, offset: usize) -> Self {
        Self::UnknownConstructor { id, offset }
    }
}

/// Result type for decode operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Errors raised while constructing or encoding records
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Field name not declared by the record's schema
    #[error("type {type_name} has no field named {field}")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },

    /// A required field was never assigned
    #[error("missing required field {field} of type {type_name}")]
    MissingField {
        type_name: &'static str,
        field: &'static str,
    },

    /// A field was assigned a value of the wrong kind
    #[error("field {field} of type {type_name} expects {expected}, got {actual}")]
    WrongKind {
        type_name: &'static str,
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// Fields sharing one flag bit disagree about presence
    ///
    /// The schema gates several fields with the same bit; encoding is
    /// refused unless all of them agree, since the single bit cannot
    /// represent a mixed state.
    #[error("fields {first} and {second} of type {type_name} share flag bit {bit} but disagree about presence")]
    SharedFlagConflict {
        type_name: &'static str,
        bit: u8,
        first: &'static str,
        second: &'static str,
    },

    /// Byte string longer than the 3-byte length field can describe
    #[error("byte string of {len} bytes exceeds maximum encodable length")]
    OversizedBytes { len: usize },

    /// Two schemas registered under the same constructor ID
    #[error("constructor 0x{id:08x} registered twice ({existing} and {duplicate})")]
    DuplicateConstructor {
        id: u32,
        existing: &'static str,
        duplicate: &'static str,
    },
}

/// Result type for construction and encode operations
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;
