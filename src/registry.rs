//! # Tagged Union Registry - Constructor Dispatch
//!
//! ## Purpose
//!
//! Polymorphic fields carry no static type; the concrete layout is only
//! known once the leading 4-byte constructor ID has been read. The
//! registry maps each ID to its schema table and is the single
//! validation point separating a well-formed stream from one using an
//! unsupported schema version: an unrecognized ID is always an error,
//! never a best-guess record.
//!
//! ## Lifecycle
//!
//! A registry is populated once and read-only afterwards. The built-in
//! tables are exposed through [`Registry::standard`], a process-wide
//! instance initialized on first use; concurrent decoders may consult it
//! freely without locking.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{ParseError, ParseResult, SchemaError, SchemaResult};
use crate::record::Record;
use crate::schema::{mtproto, TypeSchema};
use crate::wire::WireReader;

/// Constructor-ID to schema lookup table
#[derive(Debug, Default)]
pub struct Registry {
    types: HashMap<u32, &'static TypeSchema>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema table
    ///
    /// Every constructor ID maps to exactly one schema; registering a
    /// second table under an already-taken ID is refused.
    pub fn register(&mut self, schema: &'static TypeSchema) -> SchemaResult<()> {
        if let Some(existing) = self.types.insert(schema.constructor_id, schema) {
            if existing.name != schema.name {
                self.types.insert(schema.constructor_id, existing);
                return Err(SchemaError::DuplicateConstructor {
                    id: schema.constructor_id,
                    existing: existing.name,
                    duplicate: schema.name,
                });
            }
        }
        Ok(())
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True if no types are registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// True if the given constructor ID has a registered schema
    pub fn contains(&self, constructor_id: u32) -> bool {
        self.types.contains_key(&constructor_id)
    }

    /// Resolve a constructor ID read at the given stream offset
    pub fn resolve(&self, constructor_id: u32, offset: usize) -> ParseResult<&'static TypeSchema> {
        self.types
            .get(&constructor_id)
            .copied()
            .ok_or_else(|| ParseError::unknown_constructor(constructor_id, offset))
    }

    /// Decode a record whose concrete type is not known until its ID is read
    ///
    /// Consumes the 4-byte constructor ID, resolves it, and delegates
    /// the remaining field decoding to the resolved schema. The ID is
    /// consumed exactly once project-wide; field decoding never re-reads
    /// it.
    pub fn decode_any(&self, reader: &mut WireReader<'_>) -> ParseResult<Record> {
        let offset = reader.position();
        let constructor_id = reader.read_u32()?;
        let schema = self.resolve(constructor_id, offset)?;

        #[cfg(feature = "observability")]
        tracing::trace!(
            constructor_id,
            type_name = schema.name,
            offset,
            "dispatching constructor"
        );

        Record::read_fields(schema, reader, self)
    }

    /// Decode a record from a complete byte slice
    pub fn decode_any_bytes(&self, bytes: &[u8]) -> ParseResult<Record> {
        self.decode_any(&mut WireReader::new(bytes))
    }

    /// The process-wide registry holding every built-in schema
    pub fn standard() -> &'static Registry {
        static STANDARD: Lazy<Registry> = Lazy::new(|| {
            let mut registry = Registry::new();
            for schema in mtproto::TYPES {
                registry
                    .register(schema)
                    .expect("builtin schema tables contain a duplicate constructor ID");
            }

            #[cfg(feature = "observability")]
            tracing::debug!(types = registry.len(), "standard registry initialized");

            registry
        });
        &STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RecordBuilder;

    #[test]
    fn standard_registry_holds_all_builtins() {
        let registry = Registry::standard();
        assert_eq!(registry.len(), mtproto::TYPES.len());
        assert!(registry.contains(mtproto::PONG.constructor_id));
        assert!(registry.contains(mtproto::SEND_MESSAGE.constructor_id));
    }

    #[test]
    fn unknown_constructor_rejected() {
        let registry = Registry::standard();
        let err = registry.resolve(0xFFFF_FFFF, 12).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownConstructor {
                id: 0xFFFF_FFFF,
                offset: 12
            }
        );
    }

    #[test]
    fn decode_any_dispatches_on_id() {
        let pong = RecordBuilder::new(&mtproto::PONG)
            .set_long("msg_id", 5)
            .set_long("ping_id", 6)
            .build()
            .unwrap();
        let bytes = pong.to_bytes().unwrap();

        let decoded = Registry::standard().decode_any_bytes(&bytes).unwrap();
        assert_eq!(decoded.type_name(), "Pong");
        assert_eq!(decoded, pong);
    }

    #[test]
    fn decode_any_rejects_unregistered_stream() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x0BAD_F00Du32.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 8]);

        let err = Registry::standard().decode_any_bytes(&bytes).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownConstructor {
                id: 0x0BAD_F00D,
                offset: 0
            }
        ));
    }

    #[test]
    fn duplicate_registration_refused() {
        static CLASH: TypeSchema = TypeSchema {
            name: "PongClash",
            constructor_id: 0x347773C5,
            fields: &[],
        };

        let mut registry = Registry::new();
        registry.register(&mtproto::PONG).unwrap();
        let err = registry.register(&CLASH).unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateConstructor {
                id: 0x347773C5,
                existing: "Pong",
                duplicate: "PongClash",
            }
        );
        // The original mapping survives the refused insert.
        assert_eq!(registry.resolve(0x347773C5, 0).unwrap().name, "Pong");
    }

    #[test]
    fn reregistering_same_schema_is_idempotent() {
        let mut registry = Registry::new();
        registry.register(&mtproto::PONG).unwrap();
        registry.register(&mtproto::PONG).unwrap();
        assert_eq!(registry.len(), 1);
    }
}
