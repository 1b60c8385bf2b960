//! Configuration loading errors.

use super::error_code::{self, VerdictErrorCode};

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {message}")]
    ParseFailed { message: String },

    #[error("Config value {field} = {value} is out of range")]
    OutOfRange { field: &'static str, value: f64 },
}

impl VerdictErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ParseFailed { .. } => error_code::CONFIG_PARSE_FAILED,
            Self::OutOfRange { .. } => error_code::CONFIG_OUT_OF_RANGE,
        }
    }
}
