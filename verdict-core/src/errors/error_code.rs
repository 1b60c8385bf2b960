//! Stable machine-readable error codes.
//!
//! Codes are part of the public contract: callers map them to user-facing
//! messages without string-matching Display output.

/// Maps every error variant to a stable code string.
pub trait VerdictErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const ENGINE_NEGATIVE_WITNESS_COUNT: &str = "ENGINE_NEGATIVE_WITNESS_COUNT";
pub const ENGINE_EMPTY_CASE_TYPE: &str = "ENGINE_EMPTY_CASE_TYPE";
pub const ENGINE_EMPTY_EVIDENCE_SIGNAL: &str = "ENGINE_EMPTY_EVIDENCE_SIGNAL";

pub const PROVIDER_UNAVAILABLE: &str = "PROVIDER_UNAVAILABLE";
pub const PROVIDER_EMPTY_RESPONSE: &str = "PROVIDER_EMPTY_RESPONSE";
pub const PROVIDER_NO_JSON_PAYLOAD: &str = "PROVIDER_NO_JSON_PAYLOAD";
pub const PROVIDER_MALFORMED_JSON: &str = "PROVIDER_MALFORMED_JSON";
pub const PROVIDER_SCHEMA_MISMATCH: &str = "PROVIDER_SCHEMA_MISMATCH";

pub const CONFIG_PARSE_FAILED: &str = "CONFIG_PARSE_FAILED";
pub const CONFIG_OUT_OF_RANGE: &str = "CONFIG_OUT_OF_RANGE";
