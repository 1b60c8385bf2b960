//! Tagged-variant parsing of provider responses.
//!
//! Hosted models return JSON embedded in prose, sometimes fenced, sometimes
//! wrapped in container objects. Every shape is parsed into a validated
//! structure or an explicit error — never a best-effort structural guess.

use serde::{Deserialize, Serialize};

use verdict_core::config::EngineConfig;
use verdict_core::errors::ProviderError;
use verdict_core::types::prediction::{Factor, Outcome, PredictionResult};

use crate::factors::sort_by_importance;

/// Raw prediction shape as produced by provider prompts. Field names follow
/// the prompt contract ("factor", not "name").
#[derive(Debug, Deserialize)]
struct RawPrediction {
    outcome: String,
    confidence: f64,
    explanation: String,
    #[serde(default)]
    factors: Vec<RawFactor>,
}

#[derive(Debug, Deserialize)]
struct RawFactor {
    factor: String,
    importance: f64,
    #[serde(default)]
    reference: Option<String>,
}

/// A precedent case returned by the similar-cases prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarCase {
    pub id: String,
    pub title: String,
    pub court: String,
    pub date: String,
    pub outcome: String,
    pub crime_type: String,
    pub relevance: f64,
    #[serde(default)]
    pub key_facts: Vec<String>,
}

/// The shapes providers use for case lists: a bare array or a wrapper
/// object keyed `cases`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CaseListShape {
    Bare(Vec<SimilarCase>),
    Wrapped { cases: Vec<SimilarCase> },
}

/// Parse a prediction out of a raw provider response.
pub fn parse_prediction(
    raw: &str,
    config: &EngineConfig,
) -> Result<PredictionResult, ProviderError> {
    let payload = extract_json_object(raw).ok_or(ProviderError::NoJsonPayload)?;
    let parsed: RawPrediction =
        serde_json::from_str(payload).map_err(|e| ProviderError::MalformedJson {
            message: e.to_string(),
        })?;

    let outcome =
        Outcome::parse_str(parsed.outcome.trim()).ok_or_else(|| ProviderError::SchemaMismatch {
            field: "outcome",
            message: format!("unknown outcome {:?}", parsed.outcome),
        })?;

    let factors = parsed
        .factors
        .into_iter()
        .map(|f| Factor {
            name: f.factor,
            importance: f.importance,
            reference: f.reference,
        })
        .collect();

    validate_result(
        PredictionResult {
            outcome,
            confidence: parsed.confidence,
            explanation: parsed.explanation,
            statistical_context: None,
            factors,
        },
        config,
    )
}

/// Parse a similar-case list out of a raw provider response.
pub fn parse_case_list(raw: &str) -> Result<Vec<SimilarCase>, ProviderError> {
    let payload = extract_json_payload(raw).ok_or(ProviderError::NoJsonPayload)?;
    let shape: CaseListShape =
        serde_json::from_str(payload).map_err(|e| ProviderError::MalformedJson {
            message: e.to_string(),
        })?;
    let cases = match shape {
        CaseListShape::Bare(cases) => cases,
        CaseListShape::Wrapped { cases } => cases,
    };
    for case in &cases {
        if !case.relevance.is_finite() || !(0.0..=100.0).contains(&case.relevance) {
            return Err(ProviderError::SchemaMismatch {
                field: "relevance",
                message: format!("relevance {} outside [0, 100]", case.relevance),
            });
        }
    }
    Ok(cases)
}

/// Validate a provider-shaped result against the engine's invariants and
/// normalize it (confidence clamped into bounds, factors re-sorted).
pub fn validate_result(
    mut result: PredictionResult,
    config: &EngineConfig,
) -> Result<PredictionResult, ProviderError> {
    if !result.confidence.is_finite() || !(0.0..=1.0).contains(&result.confidence) {
        return Err(ProviderError::SchemaMismatch {
            field: "confidence",
            message: format!("confidence {} outside [0, 1]", result.confidence),
        });
    }
    if result.explanation.trim().is_empty() {
        return Err(ProviderError::SchemaMismatch {
            field: "explanation",
            message: "explanation is empty".to_string(),
        });
    }
    if result.factors.is_empty() {
        return Err(ProviderError::SchemaMismatch {
            field: "factors",
            message: "factor list is empty".to_string(),
        });
    }
    for factor in &result.factors {
        if !factor.importance.is_finite() || !(0.0..=1.0).contains(&factor.importance) {
            return Err(ProviderError::SchemaMismatch {
                field: "factors",
                message: format!(
                    "factor {:?} importance {} outside [0, 1]",
                    factor.name, factor.importance
                ),
            });
        }
    }

    result.confidence = result.confidence.clamp(
        config.effective_confidence_floor(),
        config.effective_confidence_ceiling(),
    );
    sort_by_importance(&mut result.factors);
    Ok(result)
}

/// Extract the outermost JSON object from surrounding prose or fences.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Extract the outermost JSON array from surrounding prose or fences.
fn extract_json_array(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    (end > start).then(|| &raw[start..=end])
}

/// Pick the payload window by whichever opener appears first.
fn extract_json_payload(raw: &str) -> Option<&str> {
    match (raw.find('{'), raw.find('[')) {
        (Some(obj), Some(arr)) => {
            if arr < obj {
                extract_json_array(raw)
            } else {
                extract_json_object(raw)
            }
        }
        (Some(_), None) => extract_json_object(raw),
        (None, Some(_)) => extract_json_array(raw),
        (None, None) => None,
    }
}
