//! OutcomePredictor — end-to-end prediction pipeline.
//!
//! Chains the stages in evaluation order:
//! (1) input validation
//! (2) evidence-signal interpretation
//! (3) outcome classification
//! (4) confidence scoring
//! (5) factor ranking
//! (6) narrative composition

use rayon::prelude::*;

use verdict_core::config::EngineConfig;
use verdict_core::errors::EngineError;
use verdict_core::types::case::{CaseInput, CrimeKind};
use verdict_core::types::prediction::PredictionResult;

use crate::signal::SignalKind;
use crate::statutes::StatuteIndex;
use crate::{classify, confidence, factors, narrative};

/// Deterministic outcome predictor — the offline fallback path.
///
/// Pure and reentrant: every call reads only its arguments and allocates
/// only local values, so a single instance can serve concurrent callers
/// without synchronization.
pub struct OutcomePredictor {
    config: EngineConfig,
    statutes: StatuteIndex,
}

impl OutcomePredictor {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create with custom engine configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            statutes: StatuteIndex::new(),
        }
    }

    /// The active engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Predict the outcome for a single case.
    pub fn predict(&self, input: &CaseInput) -> Result<PredictionResult, EngineError> {
        self.run(input, false)
    }

    /// Predict with the richer output: a statistical-context paragraph and a
    /// case-facts-aware explanation when facts were supplied.
    pub fn predict_detailed(&self, input: &CaseInput) -> Result<PredictionResult, EngineError> {
        self.run(input, true)
    }

    /// Predict a batch of cases in parallel. Each element fails or succeeds
    /// independently.
    pub fn predict_batch(&self, inputs: &[CaseInput]) -> Vec<Result<PredictionResult, EngineError>> {
        inputs.par_iter().map(|input| self.predict(input)).collect()
    }

    fn run(&self, input: &CaseInput, detailed: bool) -> Result<PredictionResult, EngineError> {
        input.validate()?;
        let witnesses = input.witnesses();
        let signal = SignalKind::classify(&input.evidence_signal, &self.statutes);
        let kind = CrimeKind::detect(&input.case_type);

        let classification = classify::classify(&input.case_type, witnesses, &signal);
        let confidence = confidence::score(&classification, kind, &self.config);
        let factors = factors::rank(witnesses, &signal, kind);

        let mut explanation = narrative::explanation(
            classification.outcome,
            confidence,
            &input.case_type,
            witnesses,
            &input.evidence_signal,
        );
        if detailed {
            if let Some(facts) = input.case_facts.as_deref() {
                explanation = narrative::explanation_with_facts(
                    facts,
                    witnesses,
                    &input.evidence_signal,
                    &input.case_type,
                    &explanation,
                );
            }
        }
        let statistical_context =
            detailed.then(|| narrative::statistical_context(kind, witnesses, &signal));

        tracing::debug!(
            rule = ?classification.rule,
            outcome = %classification.outcome,
            confidence,
            "prediction complete"
        );

        Ok(PredictionResult {
            outcome: classification.outcome,
            confidence,
            explanation,
            statistical_context,
            factors,
        })
    }
}

impl Default for OutcomePredictor {
    fn default() -> Self {
        Self::new()
    }
}
