//! # Wire Layer - Primitive and Vector Codecs
//!
//! The lowest layer of the codec: fixed-width little-endian scalars,
//! sentinel-encoded booleans, length-prefixed padded byte strings, and
//! count-prefixed homogeneous vectors.
//!
//! All decoding goes through [`WireReader`], a cursor over an in-memory
//! byte slice; all encoding goes through [`WireWriter`], a growable
//! buffer. Neither performs I/O. A failed read reports the offset where
//! the failure was detected and leaves the cursor wherever consumption
//! stopped; callers treat any failure as fatal to the whole decode.

pub mod reader;
pub mod vector;
pub mod writer;

pub use reader::WireReader;
pub use vector::{read_vector, write_vector};
pub use writer::WireWriter;
