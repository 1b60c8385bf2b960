//! Errors from external prediction providers and their response boundary.

use super::error_code::{self, VerdictErrorCode};

/// Errors raised by hosted prediction services or while parsing their
/// responses.
///
/// Provider responses are duck-typed LLM output; the boundary either yields a
/// validated result or one of these explicit failures — never a best-effort
/// structural guess.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider {provider} unavailable: {message}")]
    Unavailable { provider: String, message: String },

    #[error("Provider {provider} returned an empty response")]
    EmptyResponse { provider: String },

    #[error("No JSON payload found in provider response")]
    NoJsonPayload,

    #[error("Malformed JSON in provider response: {message}")]
    MalformedJson { message: String },

    #[error("Provider response field {field} failed validation: {message}")]
    SchemaMismatch {
        field: &'static str,
        message: String,
    },
}

impl VerdictErrorCode for ProviderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::PROVIDER_UNAVAILABLE,
            Self::EmptyResponse { .. } => error_code::PROVIDER_EMPTY_RESPONSE,
            Self::NoJsonPayload => error_code::PROVIDER_NO_JSON_PAYLOAD,
            Self::MalformedJson { .. } => error_code::PROVIDER_MALFORMED_JSON,
            Self::SchemaMismatch { .. } => error_code::PROVIDER_SCHEMA_MISMATCH,
        }
    }
}
