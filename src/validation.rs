//! # Record Validation - Schema Conformance
//!
//! One gate for every encode path: `RecordBuilder::build` and
//! [`Record::write`] both run the checks here before any bytes are
//! produced. Decoding needs no counterpart; a decoded record conforms
//! by construction.
//!
//! Checks, in order:
//! 1. every required field holds a value
//! 2. every stored value matches its declared kind (vector elements
//!    recursively)
//! 3. fields sharing one flag bit agree about presence, since a single
//!    bit cannot represent a mixed state

use std::collections::HashMap;

use crate::error::{SchemaError, SchemaResult};
use crate::record::{Record, Value};
use crate::schema::Presence;

/// Validate a field assignment against its schema
pub fn validate_record(record: &Record) -> SchemaResult<()> {
    let schema = record.schema();

    for (field, value) in record.iter() {
        match value {
            None => {
                if !field.is_optional() || matches!(field.presence, Presence::TrueFlag(_)) {
                    return Err(SchemaError::MissingField {
                        type_name: schema.name,
                        field: field.name,
                    });
                }
            }
            Some(value) => {
                if !value.matches(&field.kind) {
                    return Err(SchemaError::WrongKind {
                        type_name: schema.name,
                        field: field.name,
                        expected: field.kind.name(),
                        actual: value.kind_name(),
                    });
                }
            }
        }
    }

    check_shared_bits(record)
}

/// Reject records whose same-bit optional fields disagree about presence
fn check_shared_bits(record: &Record) -> SchemaResult<()> {
    let schema = record.schema();
    let mut states: HashMap<u8, (&'static str, bool)> = HashMap::new();

    for (field, value) in record.iter() {
        let (bit, set) = match field.presence {
            Presence::Required => continue,
            Presence::Flag(bit) => (bit, value.is_some()),
            Presence::TrueFlag(bit) => (bit, matches!(value, Some(Value::Bool(true)))),
        };

        match states.get(&bit) {
            None => {
                states.insert(bit, (field.name, set));
            }
            Some(&(first, first_set)) => {
                if first_set != set {
                    return Err(SchemaError::SharedFlagConflict {
                        type_name: schema.name,
                        bit,
                        first,
                        second: field.name,
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RecordBuilder;
    use crate::schema::mtproto;

    #[test]
    fn missing_required_field_rejected() {
        let err = RecordBuilder::new(&mtproto::PONG)
            .set_long("msg_id", 1)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                type_name: "Pong",
                field: "ping_id",
            }
        );
    }

    #[test]
    fn wrong_kind_rejected() {
        let err = RecordBuilder::new(&mtproto::PONG)
            .set_long("msg_id", 1)
            .set_int("ping_id", 2)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::WrongKind {
                type_name: "Pong",
                field: "ping_id",
                expected: "long",
                actual: "int",
            }
        );
    }

    #[test]
    fn wrong_vector_element_kind_rejected() {
        use crate::record::Value;

        let err = RecordBuilder::new(&mtproto::MSGS_ACK)
            .set_vector("msg_ids", vec![Value::Long(1), Value::Int(2)])
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::WrongKind { field: "msg_ids", .. }));
    }

    #[test]
    fn shared_bit_disagreement_rejected() {
        // files (bit 5, true flag) set without file_max_size (bit 5, gated int)
        let err = RecordBuilder::new(&mtproto::INIT_TAKEOUT_SESSION)
            .set_bool("files", true)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::SharedFlagConflict {
                type_name: "InitTakeoutSession",
                bit: 5,
                first: "files",
                second: "file_max_size",
            }
        );
    }

    #[test]
    fn shared_bit_agreement_accepted() {
        let both = RecordBuilder::new(&mtproto::INIT_TAKEOUT_SESSION)
            .set_bool("files", true)
            .set_int("file_max_size", 1_000_000)
            .build()
            .unwrap();
        assert_eq!(both.flags_word() & (1 << 5), 1 << 5);

        let neither = RecordBuilder::new(&mtproto::INIT_TAKEOUT_SESSION)
            .build()
            .unwrap();
        assert_eq!(neither.flags_word() & (1 << 5), 0);
    }

    #[test]
    fn paired_string_and_object_share_bit() {
        // InstallTheme bit 1 gates format and theme together.
        let err = RecordBuilder::new(&mtproto::INSTALL_THEME)
            .set_string("format", "android")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::SharedFlagConflict { bit: 1, .. }
        ));
    }
}
