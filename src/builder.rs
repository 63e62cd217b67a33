//! # Record Builder - Construction System
//!
//! ## Purpose
//!
//! Fluent construction of immutable [`Record`] values against a schema
//! table. Setters accumulate field assignments without failing;
//! [`RecordBuilder::build`] runs the full validation pass (field names,
//! kinds, required presence, shared-bit agreement) and only then
//! produces the record. A record that leaves the builder encodes without
//! further schema surprises.
//!
//! ## Examples
//!
//! ```
//! use tl_protocol::builder::RecordBuilder;
//! use tl_protocol::schema::mtproto;
//!
//! let pong = RecordBuilder::new(&mtproto::PONG)
//!     .set_long("msg_id", 7)
//!     .set_long("ping_id", 8)
//!     .build()?;
//!
//! let bytes = pong.to_bytes()?;
//! # Ok::<(), tl_protocol::ProtocolError>(())
//! ```

use crate::error::{SchemaError, SchemaResult};
use crate::record::{Record, Value};
use crate::schema::{Presence, TypeSchema};
use crate::validation::validate_record;

/// Builder for constructing records field by field
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    schema: &'static TypeSchema,
    fields: Vec<Option<Value>>,
    unknown: Option<String>,
}

impl RecordBuilder {
    /// Start building a record of the given type
    pub fn new(schema: &'static TypeSchema) -> Self {
        Self {
            schema,
            fields: vec![None; schema.fields.len()],
            unknown: None,
        }
    }

    /// Assign a field by name
    ///
    /// An unknown name is remembered and reported by [`build`]
    /// (Self::build); the fluent chain itself never fails.
    pub fn set(mut self, name: &str, value: Value) -> Self {
        match self.schema.field_index(name) {
            Some(index) => self.fields[index] = Some(value),
            None => {
                if self.unknown.is_none() {
                    self.unknown = Some(name.to_string());
                }
            }
        }
        self
    }

    /// Assign a signed 32-bit field
    pub fn set_int(self, name: &str, value: i32) -> Self {
        self.set(name, Value::Int(value))
    }

    /// Assign a signed 64-bit field
    pub fn set_long(self, name: &str, value: i64) -> Self {
        self.set(name, Value::Long(value))
    }

    /// Assign a 128-bit field
    pub fn set_int128(self, name: &str, value: i128) -> Self {
        self.set(name, Value::Int128(value))
    }

    /// Assign a 256-bit field
    pub fn set_int256(self, name: &str, value: [u8; 32]) -> Self {
        self.set(name, Value::Int256(value))
    }

    /// Assign a double field
    pub fn set_double(self, name: &str, value: f64) -> Self {
        self.set(name, Value::Double(value))
    }

    /// Assign a boolean field
    pub fn set_bool(self, name: &str, value: bool) -> Self {
        self.set(name, Value::Bool(value))
    }

    /// Assign a byte-string field
    pub fn set_bytes(self, name: &str, value: impl Into<Vec<u8>>) -> Self {
        self.set(name, Value::Bytes(value.into()))
    }

    /// Assign a string field
    pub fn set_string(self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, Value::String(value.into()))
    }

    /// Assign a nested record field
    pub fn set_record(self, name: &str, value: Record) -> Self {
        self.set(name, Value::Record(Box::new(value)))
    }

    /// Assign a vector field
    pub fn set_vector(self, name: &str, items: Vec<Value>) -> Self {
        self.set(name, Value::Vector(items))
    }

    /// Validate the assignment and produce an immutable record
    pub fn build(mut self) -> SchemaResult<Record> {
        if let Some(field) = self.unknown {
            return Err(SchemaError::UnknownField {
                type_name: self.schema.name,
                field,
            });
        }

        // Unassigned flag booleans default to false.
        for (field, slot) in self.schema.fields.iter().zip(self.fields.iter_mut()) {
            if slot.is_none() && matches!(field.presence, Presence::TrueFlag(_)) {
                *slot = Some(Value::Bool(false));
            }
        }

        let record = Record::from_parts(self.schema, self.fields);
        validate_record(&record)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::mtproto;

    #[test]
    fn unknown_field_reported_at_build() {
        let err = RecordBuilder::new(&mtproto::PONG)
            .set_long("msg_id", 1)
            .set_long("ping_id", 2)
            .set_long("pign_id", 3)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownField {
                type_name: "Pong",
                field: "pign_id".to_string(),
            }
        );
    }

    #[test]
    fn true_flags_default_to_false() {
        let record = RecordBuilder::new(&mtproto::INIT_TAKEOUT_SESSION)
            .build()
            .unwrap();
        assert_eq!(record.boolean("contacts"), Some(false));
        assert_eq!(record.boolean("files"), Some(false));
        assert_eq!(record.flags_word(), 0);
    }

    #[test]
    fn built_record_is_immutable_value() {
        let a = RecordBuilder::new(&mtproto::PONG)
            .set_long("msg_id", 1)
            .set_long("ping_id", 2)
            .build()
            .unwrap();
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn later_assignment_wins() {
        let record = RecordBuilder::new(&mtproto::PONG)
            .set_long("msg_id", 1)
            .set_long("msg_id", 10)
            .set_long("ping_id", 2)
            .build()
            .unwrap();
        assert_eq!(record.long("msg_id"), Some(10));
    }
}
