//! External prediction providers and the deterministic fallback.
//!
//! Hosted AI services produce the same result shape from a natural-language
//! prompt; when one answers with a usable response it is preferred, and the
//! deterministic engine is the offline/error path. Provider internals (HTTP,
//! prompts, API keys) live in the surrounding application behind the
//! `PredictionProvider` trait — the engine holds no ambient credentials.

pub mod response;

use verdict_core::errors::{EngineError, ProviderError};
use verdict_core::types::case::CaseInput;
use verdict_core::types::prediction::PredictionResult;

use crate::predictor::OutcomePredictor;

/// A hosted prediction service.
pub trait PredictionProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Ask the provider for a prediction.
    fn predict(&self, input: &CaseInput) -> Result<PredictionResult, ProviderError>;
}

/// Providers in preference order, with the deterministic engine as the
/// guaranteed fallback.
pub struct FallbackPredictor {
    providers: Vec<Box<dyn PredictionProvider>>,
    engine: OutcomePredictor,
}

impl FallbackPredictor {
    /// Create with no providers — every prediction uses the engine.
    pub fn new(engine: OutcomePredictor) -> Self {
        Self {
            providers: Vec::new(),
            engine,
        }
    }

    /// Append a provider; earlier registrations are preferred.
    pub fn with_provider(mut self, provider: Box<dyn PredictionProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Predict via the first provider that returns a valid result, falling
    /// back to the deterministic engine.
    ///
    /// Invalid input fails fast before any provider is asked; for valid
    /// input the caller always receives a result. Provider output is
    /// re-validated against the engine's invariants — a provider that
    /// violates them is treated as failed.
    pub fn predict(&self, input: &CaseInput) -> Result<PredictionResult, EngineError> {
        input.validate()?;
        for provider in &self.providers {
            let attempt = provider
                .predict(input)
                .and_then(|result| response::validate_result(result, self.engine.config()));
            match attempt {
                Ok(result) => return Ok(result),
                Err(error) => {
                    tracing::warn!(
                        provider = provider.name(),
                        %error,
                        "provider failed, falling through"
                    );
                }
            }
        }
        self.engine.predict(input)
    }
}
