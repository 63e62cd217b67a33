//! # Record Codec - Schema-Driven Encode/Decode
//!
//! ## Purpose
//!
//! One generic encoder/decoder for every record type. The wire layout of
//! a type lives in its [`TypeSchema`] table; this module interprets the
//! table: constructor ID, optional flags word, then each field in
//! declared order through the primitive, vector, and registry codecs.
//!
//! ## Construction and Mutation
//!
//! A [`Record`] is built either by decoding bytes or through
//! [`RecordBuilder`](crate::builder::RecordBuilder); it is immutable
//! afterwards. Fields are owned values, nested records are owned boxes,
//! and the type graph is acyclic, so no aliasing arises.
//!
//! ## Optional Fields
//!
//! An optional field whose flag bit is clear is stored as `None`. An
//! explicitly present empty vector is `Some` and still sets its bit when
//! encoding; absent and present-but-empty round-trip distinctly. The
//! empty-sequence convenience for absent vector fields is provided by
//! [`Record::vector`], which yields an empty slice instead of `None`.

use crate::error::{ParseError, ParseResult, SchemaResult};
use crate::registry::Registry;
use crate::schema::{FieldKind, FieldSchema, Presence, TypeSchema};
use crate::validation::validate_record;
use crate::wire::{read_vector, write_vector, WireReader, WireWriter};

/// One decoded or constructed field value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Long(i64),
    Int128(i128),
    Int256([u8; 32]),
    Double(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    String(String),
    Record(Box<Record>),
    Vector(Vec<Value>),
}

impl Value {
    /// Human-readable kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Int128(_) => "int128",
            Value::Int256(_) => "int256",
            Value::Double(_) => "double",
            Value::Bool(_) => "bool",
            Value::Bytes(_) => "bytes",
            Value::String(_) => "string",
            Value::Record(_) => "object",
            Value::Vector(_) => "vector",
        }
    }

    /// True if this value can occupy a field of the given kind
    ///
    /// Vectors check every element against the declared element kind;
    /// `Object` accepts any record.
    pub fn matches(&self, kind: &FieldKind) -> bool {
        match (self, kind) {
            (Value::Int(_), FieldKind::Int) => true,
            (Value::Long(_), FieldKind::Long) => true,
            (Value::Int128(_), FieldKind::Int128) => true,
            (Value::Int256(_), FieldKind::Int256) => true,
            (Value::Double(_), FieldKind::Double) => true,
            (Value::Bool(_), FieldKind::Bool) => true,
            (Value::Bytes(_), FieldKind::Bytes) => true,
            (Value::String(_), FieldKind::String) => true,
            (Value::Record(_), FieldKind::Object) => true,
            (Value::Vector(items), FieldKind::Vector(elem)) => {
                items.iter().all(|v| v.matches(elem))
            }
            _ => false,
        }
    }
}

/// One concrete schema-defined value: a constructor ID plus its fields
///
/// Field storage parallels the schema's declared order; optional fields
/// that are absent hold `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: &'static TypeSchema,
    fields: Vec<Option<Value>>,
}

static NO_VALUES: &[Value] = &[];

impl Record {
    /// Assemble a record from already-validated parts
    pub(crate) fn from_parts(schema: &'static TypeSchema, fields: Vec<Option<Value>>) -> Self {
        Self { schema, fields }
    }

    /// The schema table describing this record's layout
    pub fn schema(&self) -> &'static TypeSchema {
        self.schema
    }

    /// Wire-format discriminant of this record's type
    pub fn constructor_id(&self) -> u32 {
        self.schema.constructor_id
    }

    /// Schema name of this record's type
    pub fn type_name(&self) -> &'static str {
        self.schema.name
    }

    /// Field value by name; `None` for absent optionals and unknown names
    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = self.schema.field_index(name)?;
        self.fields[index].as_ref()
    }

    /// True if the named optional field holds a value
    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate `(field schema, stored value)` pairs in wire order
    pub fn iter<'a>(
        &'a self,
    ) -> impl Iterator<Item = (&'static FieldSchema, Option<&'a Value>)> + 'a {
        self.schema
            .fields
            .iter()
            .zip(self.fields.iter().map(Option::as_ref))
    }

    /// Typed accessor: signed 32-bit field
    pub fn int(&self, name: &str) -> Option<i32> {
        match self.get(name) {
            Some(Value::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Typed accessor: signed 64-bit field
    pub fn long(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(Value::Long(v)) => Some(*v),
            _ => None,
        }
    }

    /// Typed accessor: boolean field
    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(Value::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// Typed accessor: string field
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::String(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Typed accessor: byte-string field
    pub fn bytes(&self, name: &str) -> Option<&[u8]> {
        match self.get(name) {
            Some(Value::Bytes(v)) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Typed accessor: nested record field
    pub fn record(&self, name: &str) -> Option<&Record> {
        match self.get(name) {
            Some(Value::Record(v)) => Some(v),
            _ => None,
        }
    }

    /// Typed accessor: vector field, empty slice when absent
    pub fn vector(&self, name: &str) -> &[Value] {
        match self.get(name) {
            Some(Value::Vector(items)) => items,
            _ => NO_VALUES,
        }
    }

    /// Decode a record of a known type
    ///
    /// Consumes the 4-byte constructor ID and checks it against the
    /// schema, then delegates to the field loop. The ID is consumed
    /// exactly once; no decoder re-reads it.
    pub fn read(
        schema: &'static TypeSchema,
        reader: &mut WireReader<'_>,
        registry: &Registry,
    ) -> ParseResult<Self> {
        let actual = reader.read_u32()?;
        if actual != schema.constructor_id {
            return Err(ParseError::ConstructorMismatch {
                expected: schema.constructor_id,
                actual,
            });
        }
        Self::read_fields(schema, reader, registry)
    }

    /// Decode the flags word and field list, the ID already consumed
    pub(crate) fn read_fields(
        schema: &'static TypeSchema,
        reader: &mut WireReader<'_>,
        registry: &Registry,
    ) -> ParseResult<Self> {
        let flags = if schema.has_flags() {
            reader.read_u32()?
        } else {
            0
        };

        #[cfg(feature = "observability")]
        tracing::trace!(type_name = schema.name, flags, "decoding record fields");

        let mut fields = Vec::with_capacity(schema.fields.len());
        for field in schema.fields {
            let value = match field.presence {
                Presence::Required => Some(read_value(&field.kind, reader, registry)?),
                Presence::TrueFlag(bit) => Some(Value::Bool(flags & (1 << bit) != 0)),
                Presence::Flag(bit) => {
                    if flags & (1 << bit) != 0 {
                        Some(read_value(&field.kind, reader, registry)?)
                    } else {
                        None
                    }
                }
            };
            fields.push(value);
        }

        Ok(Self { schema, fields })
    }

    /// Compute the flags word from per-field presence
    ///
    /// `Flag` fields set their bit when a value is stored, including an
    /// explicitly present empty vector. `TrueFlag` fields set their bit
    /// when the stored boolean is true.
    pub fn flags_word(&self) -> u32 {
        let mut flags = 0u32;
        for (field, value) in self.iter() {
            match field.presence {
                Presence::Required => {}
                Presence::Flag(bit) => {
                    if value.is_some() {
                        flags |= 1 << bit;
                    }
                }
                Presence::TrueFlag(bit) => {
                    if matches!(value, Some(Value::Bool(true))) {
                        flags |= 1 << bit;
                    }
                }
            }
        }
        flags
    }

    /// Encode this record into the writer
    ///
    /// Validates the field assignment against the schema first; a record
    /// whose same-bit optional fields disagree about presence is refused
    /// before any bytes are produced.
    pub fn write(&self, writer: &mut WireWriter) -> SchemaResult<()> {
        validate_record(self)?;

        writer.write_u32(self.schema.constructor_id);
        if self.schema.has_flags() {
            writer.write_u32(self.flags_word());
        }

        for (field, value) in self.iter() {
            if matches!(field.presence, Presence::TrueFlag(_)) {
                continue;
            }
            if let Some(value) = value {
                write_value(value, writer)?;
            }
        }
        Ok(())
    }

    /// Encode this record into a fresh byte vector
    pub fn to_bytes(&self) -> SchemaResult<Vec<u8>> {
        let mut writer = WireWriter::new();
        self.write(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Encode this record and render the bytes as lowercase hex
    ///
    /// Intended for trace output and test fixtures.
    pub fn to_hex(&self) -> SchemaResult<String> {
        Ok(hex::encode(self.to_bytes()?))
    }
}

/// Decode one value of the given kind
fn read_value(
    kind: &FieldKind,
    reader: &mut WireReader<'_>,
    registry: &Registry,
) -> ParseResult<Value> {
    Ok(match kind {
        FieldKind::Int => Value::Int(reader.read_i32()?),
        FieldKind::Long => Value::Long(reader.read_i64()?),
        FieldKind::Int128 => Value::Int128(reader.read_i128()?),
        FieldKind::Int256 => Value::Int256(reader.read_u256()?),
        FieldKind::Double => Value::Double(reader.read_f64()?),
        FieldKind::Bool => Value::Bool(reader.read_bool()?),
        FieldKind::Bytes => Value::Bytes(reader.read_bytes()?),
        FieldKind::String => Value::String(reader.read_string()?),
        FieldKind::Object => Value::Record(Box::new(registry.decode_any(reader)?)),
        FieldKind::Vector(elem) => Value::Vector(read_vector(reader, |r| {
            read_value(elem, r, registry)
        })?),
    })
}

/// Encode one value
fn write_value(value: &Value, writer: &mut WireWriter) -> SchemaResult<()> {
    match value {
        Value::Int(v) => writer.write_i32(*v),
        Value::Long(v) => writer.write_i64(*v),
        Value::Int128(v) => writer.write_i128(*v),
        Value::Int256(v) => writer.write_u256(v),
        Value::Double(v) => writer.write_f64(*v),
        Value::Bool(v) => writer.write_bool(*v),
        Value::Bytes(v) => writer.write_bytes(v)?,
        Value::String(v) => writer.write_string(v)?,
        Value::Record(record) => record.write(writer)?,
        Value::Vector(items) => write_vector(writer, items, |w, item| write_value(item, w))?,
    }
    Ok(())
}
