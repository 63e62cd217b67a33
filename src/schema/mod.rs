//! # Schema Tables - Record Layouts as Data
//!
//! ## Purpose
//!
//! A record type is fully described by a static table: its constructor
//! ID, its fields in wire order, and for each field a kind and a
//! presence rule. One generic encoder/decoder interprets these tables at
//! runtime, replacing the thousands of near-identical per-type classes a
//! schema compiler would otherwise emit.
//!
//! ## Presence Rules
//!
//! A type that declares at least one non-`Required` field carries a
//! 4-byte flags word immediately after its constructor ID:
//!
//! - [`Presence::Flag`] fields contribute payload bytes only when their
//!   bit is set
//! - [`Presence::TrueFlag`] fields live entirely in the flags word: the
//!   bit IS the boolean value and no payload bytes follow
//!
//! Several types in the schema gate two different fields with the same
//! bit. That is a schema fact replicated here exactly, not a defect; the
//! validation layer enforces that such fields agree before encoding.

pub mod mtproto;

/// Wire kind of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Signed 32-bit little-endian integer
    Int,
    /// Signed 64-bit little-endian integer
    Long,
    /// 128-bit little-endian integer
    Int128,
    /// 256-bit little-endian value
    Int256,
    /// IEEE-754 double
    Double,
    /// Boolean sentinel word
    Bool,
    /// Length-prefixed padded byte string
    Bytes,
    /// Length-prefixed padded UTF-8 string
    String,
    /// Nested record decoded polymorphically through the registry
    Object,
    /// Count-prefixed homogeneous sequence of the element kind
    Vector(&'static FieldKind),
}

impl FieldKind {
    /// Human-readable kind name for error messages
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Int => "int",
            FieldKind::Long => "long",
            FieldKind::Int128 => "int128",
            FieldKind::Int256 => "int256",
            FieldKind::Double => "double",
            FieldKind::Bool => "bool",
            FieldKind::Bytes => "bytes",
            FieldKind::String => "string",
            FieldKind::Object => "object",
            FieldKind::Vector(_) => "vector",
        }
    }
}

/// When a field's bytes appear on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Always present, read and written unconditionally
    Required,
    /// Present only when the given flags-word bit (LSB-first) is set
    Flag(u8),
    /// Boolean carried by the flags-word bit itself, no payload bytes
    TrueFlag(u8),
}

/// One field of a record type, in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
}

impl FieldSchema {
    /// A mandatory field
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Required,
        }
    }

    /// An optional field gated by a flags-word bit
    pub const fn flagged(name: &'static str, kind: FieldKind, bit: u8) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Flag(bit),
        }
    }

    /// A boolean encoded entirely in the flags word
    pub const fn true_flag(name: &'static str, bit: u8) -> Self {
        Self {
            name,
            kind: FieldKind::Bool,
            presence: Presence::TrueFlag(bit),
        }
    }

    /// True for `Flag` and `TrueFlag` fields
    pub fn is_optional(&self) -> bool {
        !matches!(self.presence, Presence::Required)
    }
}

/// Complete wire layout of one record type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSchema {
    pub name: &'static str,
    pub constructor_id: u32,
    pub fields: &'static [FieldSchema],
}

impl TypeSchema {
    /// True if the type carries a flags word after its constructor ID
    pub fn has_flags(&self) -> bool {
        self.fields.iter().any(FieldSchema::is_optional)
    }

    /// Index of a field by name
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Field schema by name
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Summary used for documentation and tooling
    pub fn type_info(&self) -> TypeInfo {
        TypeInfo {
            name: self.name,
            constructor_id: format!("0x{:08x}", self.constructor_id),
            field_count: self.fields.len(),
            optional_fields: self.fields.iter().filter(|f| f.is_optional()).count(),
            has_flags: self.has_flags(),
        }
    }
}

/// Introspection summary of one type
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct TypeInfo {
    pub name: &'static str,
    pub constructor_id: String,
    pub field_count: usize,
    pub optional_fields: usize,
    pub has_flags: bool,
}

/// Render the given types as a JSON array of [`TypeInfo`] summaries
#[cfg(feature = "serialization")]
pub fn generate_json(types: &[&TypeSchema]) -> serde_json::Result<String> {
    let infos: Vec<TypeInfo> = types.iter().map(|schema| schema.type_info()).collect();
    serde_json::to_string_pretty(&infos)
}

/// Render a markdown table describing the given types
///
/// Useful for keeping protocol documentation in sync with the tables.
pub fn generate_markdown_table(types: &[&TypeSchema]) -> String {
    let mut out = String::from("| Type | Constructor | Fields | Optional |\n|------|-------------|--------|----------|\n");
    for schema in types {
        let info = schema.type_info();
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            info.name, info.constructor_id, info.field_count, info.optional_fields
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    static PLAIN: TypeSchema = TypeSchema {
        name: "Plain",
        constructor_id: 0x1111_2222,
        fields: &[
            FieldSchema::required("a", FieldKind::Int),
            FieldSchema::required("b", FieldKind::String),
        ],
    };

    static FLAGGED: TypeSchema = TypeSchema {
        name: "Flagged",
        constructor_id: 0x3333_4444,
        fields: &[
            FieldSchema::true_flag("quick", 0),
            FieldSchema::flagged("extra", FieldKind::Long, 1),
            FieldSchema::required("base", FieldKind::Int),
        ],
    };

    #[test]
    fn flags_detection() {
        assert!(!PLAIN.has_flags());
        assert!(FLAGGED.has_flags());
    }

    #[test]
    fn field_lookup() {
        assert_eq!(PLAIN.field_index("b"), Some(1));
        assert_eq!(PLAIN.field_index("missing"), None);
        assert_eq!(FLAGGED.field("extra").unwrap().kind, FieldKind::Long);
    }

    #[test]
    fn type_info_summarizes() {
        let info = FLAGGED.type_info();
        assert_eq!(info.constructor_id, "0x33334444");
        assert_eq!(info.field_count, 3);
        assert_eq!(info.optional_fields, 2);
        assert!(info.has_flags);
    }

    #[test]
    fn markdown_table_lists_types() {
        let table = generate_markdown_table(&[&PLAIN, &FLAGGED]);
        assert!(table.contains("| Plain | 0x11112222 | 2 | 0 |"));
        assert!(table.contains("| Flagged | 0x33334444 | 3 | 2 |"));
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn json_export_lists_types() {
        let json = generate_json(&[&PLAIN]).unwrap();
        assert!(json.contains("\"name\": \"Plain\""));
        assert!(json.contains("\"constructor_id\": \"0x11112222\""));
    }
}
