//! # Built-in MTProto Schema Tables
//!
//! Static layout tables for the core MTProto types: the handshake and
//! service records plus a representative set of API functions exercising
//! every presence rule. Constructor IDs, field order, and flag-bit
//! assignments are schema facts and are replicated verbatim; changing
//! any of them breaks wire compatibility with existing peers.
//!
//! Bit indices are LSB-first, so a schema condition of `flags & 4`
//! appears here as bit 2.

use super::{FieldKind, FieldSchema, TypeSchema};

const LONG: FieldKind = FieldKind::Long;
const OBJECT: FieldKind = FieldKind::Object;

// ---------------------------------------------------------------------
// Handshake types
// ---------------------------------------------------------------------

pub static RES_PQ: TypeSchema = TypeSchema {
    name: "ResPQ",
    constructor_id: 0x05162463,
    fields: &[
        FieldSchema::required("nonce", FieldKind::Int128),
        FieldSchema::required("server_nonce", FieldKind::Int128),
        FieldSchema::required("pq", FieldKind::Bytes),
        FieldSchema::required("server_public_key_fingerprints", FieldKind::Vector(&LONG)),
    ],
};

pub static PQ_INNER_DATA: TypeSchema = TypeSchema {
    name: "PQInnerData",
    constructor_id: 0x83C95AEC,
    fields: &[
        FieldSchema::required("pq", FieldKind::Bytes),
        FieldSchema::required("p", FieldKind::Bytes),
        FieldSchema::required("q", FieldKind::Bytes),
        FieldSchema::required("nonce", FieldKind::Int128),
        FieldSchema::required("server_nonce", FieldKind::Int128),
        FieldSchema::required("new_nonce", FieldKind::Int256),
    ],
};

pub static PQ_INNER_DATA_DC: TypeSchema = TypeSchema {
    name: "PQInnerDataDc",
    constructor_id: 0xA9F55F95,
    fields: &[
        FieldSchema::required("pq", FieldKind::Bytes),
        FieldSchema::required("p", FieldKind::Bytes),
        FieldSchema::required("q", FieldKind::Bytes),
        FieldSchema::required("nonce", FieldKind::Int128),
        FieldSchema::required("server_nonce", FieldKind::Int128),
        FieldSchema::required("new_nonce", FieldKind::Int256),
        FieldSchema::required("dc", FieldKind::Int),
    ],
};

pub static PQ_INNER_DATA_TEMP: TypeSchema = TypeSchema {
    name: "PQInnerDataTemp",
    constructor_id: 0x3C6A84D4,
    fields: &[
        FieldSchema::required("pq", FieldKind::Bytes),
        FieldSchema::required("p", FieldKind::Bytes),
        FieldSchema::required("q", FieldKind::Bytes),
        FieldSchema::required("nonce", FieldKind::Int128),
        FieldSchema::required("server_nonce", FieldKind::Int128),
        FieldSchema::required("new_nonce", FieldKind::Int256),
        FieldSchema::required("expires_in", FieldKind::Int),
    ],
};

pub static PQ_INNER_DATA_TEMP_DC: TypeSchema = TypeSchema {
    name: "PQInnerDataTempDc",
    constructor_id: 0x56FDDF88,
    fields: &[
        FieldSchema::required("pq", FieldKind::Bytes),
        FieldSchema::required("p", FieldKind::Bytes),
        FieldSchema::required("q", FieldKind::Bytes),
        FieldSchema::required("nonce", FieldKind::Int128),
        FieldSchema::required("server_nonce", FieldKind::Int128),
        FieldSchema::required("new_nonce", FieldKind::Int256),
        FieldSchema::required("dc", FieldKind::Int),
        FieldSchema::required("expires_in", FieldKind::Int),
    ],
};

pub static BIND_AUTH_KEY_INNER: TypeSchema = TypeSchema {
    name: "BindAuthKeyInner",
    constructor_id: 0x75A3F765,
    fields: &[
        FieldSchema::required("nonce", FieldKind::Long),
        FieldSchema::required("temp_auth_key_id", FieldKind::Long),
        FieldSchema::required("perm_auth_key_id", FieldKind::Long),
        FieldSchema::required("temp_session_id", FieldKind::Long),
        FieldSchema::required("expires_at", FieldKind::Int),
    ],
};

pub static SERVER_DH_PARAMS_FAIL: TypeSchema = TypeSchema {
    name: "ServerDHParamsFail",
    constructor_id: 0x79CB045D,
    fields: &[
        FieldSchema::required("nonce", FieldKind::Int128),
        FieldSchema::required("server_nonce", FieldKind::Int128),
        FieldSchema::required("new_nonce_hash", FieldKind::Int128),
    ],
};

pub static SERVER_DH_PARAMS_OK: TypeSchema = TypeSchema {
    name: "ServerDHParamsOk",
    constructor_id: 0xD0E8075C,
    fields: &[
        FieldSchema::required("nonce", FieldKind::Int128),
        FieldSchema::required("server_nonce", FieldKind::Int128),
        FieldSchema::required("encrypted_answer", FieldKind::Bytes),
    ],
};

pub static SERVER_DH_INNER_DATA: TypeSchema = TypeSchema {
    name: "ServerDHInnerData",
    constructor_id: 0xB5890DBA,
    fields: &[
        FieldSchema::required("nonce", FieldKind::Int128),
        FieldSchema::required("server_nonce", FieldKind::Int128),
        FieldSchema::required("g", FieldKind::Int),
        FieldSchema::required("dh_prime", FieldKind::Bytes),
        FieldSchema::required("g_a", FieldKind::Bytes),
        FieldSchema::required("server_time", FieldKind::Int),
    ],
};

pub static CLIENT_DH_INNER_DATA: TypeSchema = TypeSchema {
    name: "ClientDHInnerData",
    constructor_id: 0x6643B654,
    fields: &[
        FieldSchema::required("nonce", FieldKind::Int128),
        FieldSchema::required("server_nonce", FieldKind::Int128),
        FieldSchema::required("retry_id", FieldKind::Long),
        FieldSchema::required("g_b", FieldKind::Bytes),
    ],
};

pub static DH_GEN_OK: TypeSchema = TypeSchema {
    name: "DhGenOk",
    constructor_id: 0x3BCBF734,
    fields: &[
        FieldSchema::required("nonce", FieldKind::Int128),
        FieldSchema::required("server_nonce", FieldKind::Int128),
        FieldSchema::required("new_nonce_hash1", FieldKind::Int128),
    ],
};

pub static DH_GEN_RETRY: TypeSchema = TypeSchema {
    name: "DhGenRetry",
    constructor_id: 0x46DC1FB9,
    fields: &[
        FieldSchema::required("nonce", FieldKind::Int128),
        FieldSchema::required("server_nonce", FieldKind::Int128),
        FieldSchema::required("new_nonce_hash2", FieldKind::Int128),
    ],
};

pub static DH_GEN_FAIL: TypeSchema = TypeSchema {
    name: "DhGenFail",
    constructor_id: 0xA69DAE02,
    fields: &[
        FieldSchema::required("nonce", FieldKind::Int128),
        FieldSchema::required("server_nonce", FieldKind::Int128),
        FieldSchema::required("new_nonce_hash3", FieldKind::Int128),
    ],
};

pub static DESTROY_AUTH_KEY_OK: TypeSchema = TypeSchema {
    name: "DestroyAuthKeyOk",
    constructor_id: 0xF660E1D4,
    fields: &[],
};

pub static DESTROY_AUTH_KEY_NONE: TypeSchema = TypeSchema {
    name: "DestroyAuthKeyNone",
    constructor_id: 0x0A9F2259,
    fields: &[],
};

pub static DESTROY_AUTH_KEY_FAIL: TypeSchema = TypeSchema {
    name: "DestroyAuthKeyFail",
    constructor_id: 0xEA109B13,
    fields: &[],
};

// ---------------------------------------------------------------------
// Service messages
// ---------------------------------------------------------------------

pub static MSGS_ACK: TypeSchema = TypeSchema {
    name: "MsgsAck",
    constructor_id: 0x62D6B459,
    fields: &[FieldSchema::required("msg_ids", FieldKind::Vector(&LONG))],
};

pub static BAD_MSG_NOTIFICATION: TypeSchema = TypeSchema {
    name: "BadMsgNotification",
    constructor_id: 0xA7EFF811,
    fields: &[
        FieldSchema::required("bad_msg_id", FieldKind::Long),
        FieldSchema::required("bad_msg_seqno", FieldKind::Int),
        FieldSchema::required("error_code", FieldKind::Int),
    ],
};

pub static BAD_SERVER_SALT: TypeSchema = TypeSchema {
    name: "BadServerSalt",
    constructor_id: 0xEDAB447B,
    fields: &[
        FieldSchema::required("bad_msg_id", FieldKind::Long),
        FieldSchema::required("bad_msg_seqno", FieldKind::Int),
        FieldSchema::required("error_code", FieldKind::Int),
        FieldSchema::required("new_server_salt", FieldKind::Long),
    ],
};

pub static MSGS_STATE_REQ: TypeSchema = TypeSchema {
    name: "MsgsStateReq",
    constructor_id: 0xDA69FB52,
    fields: &[FieldSchema::required("msg_ids", FieldKind::Vector(&LONG))],
};

pub static MSGS_STATE_INFO: TypeSchema = TypeSchema {
    name: "MsgsStateInfo",
    constructor_id: 0x04DEB57D,
    fields: &[
        FieldSchema::required("req_msg_id", FieldKind::Long),
        FieldSchema::required("info", FieldKind::String),
    ],
};

pub static MSGS_ALL_INFO: TypeSchema = TypeSchema {
    name: "MsgsAllInfo",
    constructor_id: 0x8CC0D131,
    fields: &[
        FieldSchema::required("msg_ids", FieldKind::Vector(&LONG)),
        FieldSchema::required("info", FieldKind::String),
    ],
};

pub static MSG_DETAILED_INFO: TypeSchema = TypeSchema {
    name: "MsgDetailedInfo",
    constructor_id: 0x276D3EC6,
    fields: &[
        FieldSchema::required("msg_id", FieldKind::Long),
        FieldSchema::required("answer_msg_id", FieldKind::Long),
        FieldSchema::required("bytes", FieldKind::Int),
        FieldSchema::required("status", FieldKind::Int),
    ],
};

pub static MSG_NEW_DETAILED_INFO: TypeSchema = TypeSchema {
    name: "MsgNewDetailedInfo",
    constructor_id: 0x809DB6DF,
    fields: &[
        FieldSchema::required("answer_msg_id", FieldKind::Long),
        FieldSchema::required("bytes", FieldKind::Int),
        FieldSchema::required("status", FieldKind::Int),
    ],
};

pub static MSG_RESEND_REQ: TypeSchema = TypeSchema {
    name: "MsgResendReq",
    constructor_id: 0x7D861A08,
    fields: &[FieldSchema::required("msg_ids", FieldKind::Vector(&LONG))],
};

pub static RPC_RESULT: TypeSchema = TypeSchema {
    name: "RpcResult",
    constructor_id: 0xF35C6D01,
    fields: &[
        FieldSchema::required("req_msg_id", FieldKind::Long),
        FieldSchema::required("result", FieldKind::Object),
    ],
};

pub static RPC_ERROR: TypeSchema = TypeSchema {
    name: "RpcError",
    constructor_id: 0x2144CA19,
    fields: &[
        FieldSchema::required("error_code", FieldKind::Int),
        FieldSchema::required("error_message", FieldKind::String),
    ],
};

pub static RPC_ANSWER_UNKNOWN: TypeSchema = TypeSchema {
    name: "RpcAnswerUnknown",
    constructor_id: 0x5E2AD36E,
    fields: &[],
};

pub static RPC_ANSWER_DROPPED_RUNNING: TypeSchema = TypeSchema {
    name: "RpcAnswerDroppedRunning",
    constructor_id: 0xCD78E586,
    fields: &[],
};

pub static RPC_ANSWER_DROPPED: TypeSchema = TypeSchema {
    name: "RpcAnswerDropped",
    constructor_id: 0xA43AD8B7,
    fields: &[
        FieldSchema::required("msg_id", FieldKind::Long),
        FieldSchema::required("seq_no", FieldKind::Int),
        FieldSchema::required("bytes", FieldKind::Int),
    ],
};

pub static PONG: TypeSchema = TypeSchema {
    name: "Pong",
    constructor_id: 0x347773C5,
    fields: &[
        FieldSchema::required("msg_id", FieldKind::Long),
        FieldSchema::required("ping_id", FieldKind::Long),
    ],
};

pub static DESTROY_SESSION_OK: TypeSchema = TypeSchema {
    name: "DestroySessionOk",
    constructor_id: 0xE22045FC,
    fields: &[FieldSchema::required("session_id", FieldKind::Long)],
};

pub static DESTROY_SESSION_NONE: TypeSchema = TypeSchema {
    name: "DestroySessionNone",
    constructor_id: 0x62D350C9,
    fields: &[FieldSchema::required("session_id", FieldKind::Long)],
};

pub static NEW_SESSION_CREATED: TypeSchema = TypeSchema {
    name: "NewSessionCreated",
    constructor_id: 0x9EC20908,
    fields: &[
        FieldSchema::required("first_msg_id", FieldKind::Long),
        FieldSchema::required("unique_id", FieldKind::Long),
        FieldSchema::required("server_salt", FieldKind::Long),
    ],
};

pub static HTTP_WAIT: TypeSchema = TypeSchema {
    name: "HttpWait",
    constructor_id: 0x9299359F,
    fields: &[
        FieldSchema::required("max_delay", FieldKind::Int),
        FieldSchema::required("wait_after", FieldKind::Int),
        FieldSchema::required("max_wait", FieldKind::Int),
    ],
};

pub static IP_PORT: TypeSchema = TypeSchema {
    name: "IpPort",
    constructor_id: 0xD433AD73,
    fields: &[
        FieldSchema::required("ipv4", FieldKind::Int),
        FieldSchema::required("port", FieldKind::Int),
    ],
};

pub static IP_PORT_SECRET: TypeSchema = TypeSchema {
    name: "IpPortSecret",
    constructor_id: 0x37982646,
    fields: &[
        FieldSchema::required("ipv4", FieldKind::Int),
        FieldSchema::required("port", FieldKind::Int),
        FieldSchema::required("secret", FieldKind::Bytes),
    ],
};

pub static ACCESS_POINT_RULE: TypeSchema = TypeSchema {
    name: "AccessPointRule",
    constructor_id: 0x4679B65F,
    fields: &[
        FieldSchema::required("phone_prefix_rules", FieldKind::String),
        FieldSchema::required("dc_id", FieldKind::Int),
        FieldSchema::required("ips", FieldKind::Vector(&OBJECT)),
    ],
};

// ---------------------------------------------------------------------
// API functions: flag-gated layouts
// ---------------------------------------------------------------------

pub static GET_MESSAGES: TypeSchema = TypeSchema {
    name: "GetMessages",
    constructor_id: 0x63C66506,
    fields: &[FieldSchema::required("id", FieldKind::Vector(&OBJECT))],
};

pub static GET_DIALOGS: TypeSchema = TypeSchema {
    name: "GetDialogs",
    constructor_id: 0xA0EE3B73,
    fields: &[
        FieldSchema::true_flag("exclude_pinned", 0),
        FieldSchema::flagged("folder_id", FieldKind::Int, 1),
        FieldSchema::required("offset_date", FieldKind::Int),
        FieldSchema::required("offset_id", FieldKind::Int),
        FieldSchema::required("offset_peer", FieldKind::Object),
        FieldSchema::required("limit", FieldKind::Int),
        FieldSchema::required("hash", FieldKind::Int),
    ],
};

pub static GET_HISTORY: TypeSchema = TypeSchema {
    name: "GetHistory",
    constructor_id: 0xDCBB8260,
    fields: &[
        FieldSchema::required("peer", FieldKind::Object),
        FieldSchema::required("offset_id", FieldKind::Int),
        FieldSchema::required("offset_date", FieldKind::Int),
        FieldSchema::required("add_offset", FieldKind::Int),
        FieldSchema::required("limit", FieldKind::Int),
        FieldSchema::required("max_id", FieldKind::Int),
        FieldSchema::required("min_id", FieldKind::Int),
        FieldSchema::required("hash", FieldKind::Int),
    ],
};

pub static SEARCH: TypeSchema = TypeSchema {
    name: "Search",
    constructor_id: 0x0C352EEC,
    fields: &[
        FieldSchema::required("peer", FieldKind::Object),
        FieldSchema::required("q", FieldKind::String),
        FieldSchema::flagged("from_id", FieldKind::Object, 0),
        FieldSchema::flagged("top_msg_id", FieldKind::Int, 1),
        FieldSchema::required("filter", FieldKind::Object),
        FieldSchema::required("min_date", FieldKind::Int),
        FieldSchema::required("max_date", FieldKind::Int),
        FieldSchema::required("offset_id", FieldKind::Int),
        FieldSchema::required("add_offset", FieldKind::Int),
        FieldSchema::required("limit", FieldKind::Int),
        FieldSchema::required("max_id", FieldKind::Int),
        FieldSchema::required("min_id", FieldKind::Int),
        FieldSchema::required("hash", FieldKind::Int),
    ],
};

pub static SEND_MESSAGE: TypeSchema = TypeSchema {
    name: "SendMessage",
    constructor_id: 0x520C3870,
    fields: &[
        FieldSchema::true_flag("no_webpage", 1),
        FieldSchema::true_flag("silent", 5),
        FieldSchema::true_flag("background", 6),
        FieldSchema::true_flag("clear_draft", 7),
        FieldSchema::required("peer", FieldKind::Object),
        FieldSchema::flagged("reply_to_msg_id", FieldKind::Int, 0),
        FieldSchema::required("message", FieldKind::String),
        FieldSchema::required("random_id", FieldKind::Long),
        FieldSchema::flagged("reply_markup", FieldKind::Object, 2),
        FieldSchema::flagged("entities", FieldKind::Vector(&OBJECT), 3),
        FieldSchema::flagged("schedule_date", FieldKind::Int, 10),
    ],
};

pub static SEARCH_COUNTER: TypeSchema = TypeSchema {
    name: "SearchCounter",
    constructor_id: 0xE844EBFF,
    fields: &[
        FieldSchema::true_flag("inexact", 1),
        FieldSchema::required("filter", FieldKind::Object),
        FieldSchema::required("count", FieldKind::Int),
    ],
};

// Bit 2 gates both offset fields: they are present or absent together.
pub static GET_EXPORTED_CHAT_INVITES: TypeSchema = TypeSchema {
    name: "GetExportedChatInvites",
    constructor_id: 0xA2B5A3F6,
    fields: &[
        FieldSchema::true_flag("revoked", 3),
        FieldSchema::required("peer", FieldKind::Object),
        FieldSchema::required("admin_id", FieldKind::Object),
        FieldSchema::flagged("offset_date", FieldKind::Int, 2),
        FieldSchema::flagged("offset_link", FieldKind::String, 2),
        FieldSchema::required("limit", FieldKind::Int),
    ],
};

// Bit 5 doubles as the `files` boolean and the gate for `file_max_size`.
pub static INIT_TAKEOUT_SESSION: TypeSchema = TypeSchema {
    name: "InitTakeoutSession",
    constructor_id: 0xF05B4804,
    fields: &[
        FieldSchema::true_flag("contacts", 0),
        FieldSchema::true_flag("message_users", 1),
        FieldSchema::true_flag("message_chats", 2),
        FieldSchema::true_flag("message_megagroups", 3),
        FieldSchema::true_flag("message_channels", 4),
        FieldSchema::true_flag("files", 5),
        FieldSchema::flagged("file_max_size", FieldKind::Int, 5),
    ],
};

// Bit 1 gates both the format string and the theme object.
pub static INSTALL_THEME: TypeSchema = TypeSchema {
    name: "InstallTheme",
    constructor_id: 0x7AE43737,
    fields: &[
        FieldSchema::true_flag("dark", 0),
        FieldSchema::flagged("format", FieldKind::String, 1),
        FieldSchema::flagged("theme", FieldKind::Object, 1),
    ],
};

/// Every built-in type, in registration order
pub static TYPES: &[&TypeSchema] = &[
    &RES_PQ,
    &PQ_INNER_DATA,
    &PQ_INNER_DATA_DC,
    &PQ_INNER_DATA_TEMP,
    &PQ_INNER_DATA_TEMP_DC,
    &BIND_AUTH_KEY_INNER,
    &SERVER_DH_PARAMS_FAIL,
    &SERVER_DH_PARAMS_OK,
    &SERVER_DH_INNER_DATA,
    &CLIENT_DH_INNER_DATA,
    &DH_GEN_OK,
    &DH_GEN_RETRY,
    &DH_GEN_FAIL,
    &DESTROY_AUTH_KEY_OK,
    &DESTROY_AUTH_KEY_NONE,
    &DESTROY_AUTH_KEY_FAIL,
    &MSGS_ACK,
    &BAD_MSG_NOTIFICATION,
    &BAD_SERVER_SALT,
    &MSGS_STATE_REQ,
    &MSGS_STATE_INFO,
    &MSGS_ALL_INFO,
    &MSG_DETAILED_INFO,
    &MSG_NEW_DETAILED_INFO,
    &MSG_RESEND_REQ,
    &RPC_RESULT,
    &RPC_ERROR,
    &RPC_ANSWER_UNKNOWN,
    &RPC_ANSWER_DROPPED_RUNNING,
    &RPC_ANSWER_DROPPED,
    &PONG,
    &DESTROY_SESSION_OK,
    &DESTROY_SESSION_NONE,
    &NEW_SESSION_CREATED,
    &HTTP_WAIT,
    &IP_PORT,
    &IP_PORT_SECRET,
    &ACCESS_POINT_RULE,
    &GET_MESSAGES,
    &GET_DIALOGS,
    &GET_HISTORY,
    &SEARCH,
    &SEND_MESSAGE,
    &SEARCH_COUNTER,
    &GET_EXPORTED_CHAT_INVITES,
    &INIT_TAKEOUT_SESSION,
    &INSTALL_THEME,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn constructor_ids_are_unique() {
        let mut seen = HashSet::new();
        for schema in TYPES {
            assert!(
                seen.insert(schema.constructor_id),
                "duplicate constructor 0x{:08x} ({})",
                schema.constructor_id,
                schema.name
            );
        }
    }

    #[test]
    fn field_names_are_unique_per_type() {
        for schema in TYPES {
            let mut seen = HashSet::new();
            for field in schema.fields {
                assert!(
                    seen.insert(field.name),
                    "{} declares {} twice",
                    schema.name,
                    field.name
                );
            }
        }
    }

    #[test]
    fn handshake_types_have_no_flags() {
        assert!(!RES_PQ.has_flags());
        assert!(!PQ_INNER_DATA.has_flags());
        assert!(!PONG.has_flags());
    }

    #[test]
    fn shared_bit_layouts_match_schema() {
        use crate::schema::Presence;

        let date = GET_EXPORTED_CHAT_INVITES.field("offset_date").unwrap();
        let link = GET_EXPORTED_CHAT_INVITES.field("offset_link").unwrap();
        assert_eq!(date.presence, Presence::Flag(2));
        assert_eq!(link.presence, Presence::Flag(2));

        let files = INIT_TAKEOUT_SESSION.field("files").unwrap();
        let max = INIT_TAKEOUT_SESSION.field("file_max_size").unwrap();
        assert_eq!(files.presence, Presence::TrueFlag(5));
        assert_eq!(max.presence, Presence::Flag(5));

        let format = INSTALL_THEME.field("format").unwrap();
        let theme = INSTALL_THEME.field("theme").unwrap();
        assert_eq!(format.presence, Presence::Flag(1));
        assert_eq!(theme.presence, Presence::Flag(1));
    }
}
