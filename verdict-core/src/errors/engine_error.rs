//! Input validation errors for the prediction engine.

use super::error_code::{self, VerdictErrorCode};

/// Errors raised for invalid prediction input.
///
/// The engine never recovers from these internally; the caller either fixes
/// the input or maps the error to a user-facing message. For valid input the
/// engine cannot fail — it performs no I/O and has no other error source.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Witness count must be non-negative, got {count}")]
    NegativeWitnessCount { count: i64 },

    #[error("Case type is empty")]
    EmptyCaseType,

    #[error("Evidence signal is empty")]
    EmptyEvidenceSignal,
}

impl VerdictErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeWitnessCount { .. } => error_code::ENGINE_NEGATIVE_WITNESS_COUNT,
            Self::EmptyCaseType => error_code::ENGINE_EMPTY_CASE_TYPE,
            Self::EmptyEvidenceSignal => error_code::ENGINE_EMPTY_EVIDENCE_SIGNAL,
        }
    }
}
