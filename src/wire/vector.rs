//! # Vector Codec - Count-Prefixed Sequences
//!
//! Homogeneous sequences are encoded as a 4-byte little-endian element
//! count followed by the elements in order, with no per-element framing
//! beyond each element's own encoding. The codec is generic over an
//! element closure so the same loop serves primitives, byte strings, and
//! registry-dispatched records.

use crate::error::{ParseResult, SchemaResult};
use crate::wire::{WireReader, WireWriter};

/// Decode a count-prefixed sequence
///
/// A count of zero yields an empty vector. Element failures propagate
/// unchanged; there is no partial-vector recovery. The declared count is
/// not trusted for preallocation, so a hostile count cannot force a
/// large allocation before element reads start failing.
pub fn read_vector<'a, T, F>(reader: &mut WireReader<'a>, mut read_elem: F) -> ParseResult<Vec<T>>
where
    F: FnMut(&mut WireReader<'a>) -> ParseResult<T>,
{
    let count = reader.read_u32()? as usize;

    // Every element occupies at least 4 bytes, which bounds a sane capacity.
    let mut items = Vec::with_capacity(count.min(reader.remaining() / 4));
    for _ in 0..count {
        items.push(read_elem(reader)?);
    }
    Ok(items)
}

/// Encode a count-prefixed sequence
pub fn write_vector<T, F>(writer: &mut WireWriter, items: &[T], mut write_elem: F) -> SchemaResult<()>
where
    F: FnMut(&mut WireWriter, &T) -> SchemaResult<()>,
{
    writer.write_u32(items.len() as u32);
    for item in items {
        write_elem(writer, item)?;
    }
    Ok(())
}
