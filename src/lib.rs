//! # TL Protocol - Schema-Driven Binary Wire Codec
//!
//! Codec for the TL binary wire format: little-endian primitives,
//! count-prefixed vectors, constructor-ID dispatch, and a single generic
//! record encoder/decoder driven by static schema tables.
//!
//! ## API Surface
//!
//! - **Wire primitives**: [`WireReader`], [`WireWriter`] - scalar,
//!   boolean-sentinel, and padded byte-string codecs over in-memory
//!   buffers
//! - **Vectors**: [`read_vector`], [`write_vector`] - count-prefixed
//!   homogeneous sequences
//! - **Schema tables**: [`schema::TypeSchema`] and the built-in
//!   [`schema::mtproto`] tables - record layouts as data
//! - **Dispatch**: [`Registry`] - constructor-ID resolution for
//!   polymorphic fields
//! - **Records**: [`Record`], [`Value`], [`RecordBuilder`] - construct,
//!   encode, decode
//!
//! ## Quick Start
//!
//! ```
//! use tl_protocol::{Record, RecordBuilder, Registry, WireReader};
//! use tl_protocol::schema::mtproto;
//!
//! // Build and encode a record
//! let pong = RecordBuilder::new(&mtproto::PONG)
//!     .set_long("msg_id", 0x1122334455667788)
//!     .set_long("ping_id", 42)
//!     .build()?;
//! let bytes = pong.to_bytes()?;
//!
//! // Typed decode when the expected layout is known
//! let mut reader = WireReader::new(&bytes);
//! let decoded = Record::read(&mtproto::PONG, &mut reader, Registry::standard())?;
//! assert_eq!(decoded.long("ping_id"), Some(42));
//!
//! // Polymorphic decode when it is not
//! let any = Registry::standard().decode_any_bytes(&bytes)?;
//! assert_eq!(any.type_name(), "Pong");
//! # Ok::<(), tl_protocol::ProtocolError>(())
//! ```
//!
//! ## Design Notes
//!
//! The roughly 800 record types of the schema are not hand-written
//! classes here; each is a [`schema::TypeSchema`] table interpreted at
//! runtime by [`Record::read`] and [`Record::write`]. Adding a type
//! means adding a table, not code.
//!
//! Decoding is synchronous and allocation-bounded: a decode either
//! completes in time proportional to the input or fails with an error
//! naming the offending offset. The registry is immutable after
//! initialization and safe for concurrent readers.

use thiserror::Error;

pub mod builder;
pub mod constants;
pub mod error;
pub mod record;
pub mod registry;
pub mod schema;
pub mod validation;
pub mod wire;

pub use builder::RecordBuilder;
pub use constants::{BOOL_FALSE, BOOL_TRUE, MAX_BYTES_LEN};
pub use error::{ParseError, ParseResult, SchemaError, SchemaResult};
pub use record::{Record, Value};
pub use registry::Registry;
pub use schema::{generate_markdown_table, FieldKind, FieldSchema, Presence, TypeInfo, TypeSchema};
#[cfg(feature = "serialization")]
pub use schema::generate_json;
pub use validation::validate_record;
pub use wire::{read_vector, write_vector, WireReader, WireWriter};

/// Protocol errors
///
/// Unifies both taxonomies for callers that do not care which side of
/// the codec failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;
