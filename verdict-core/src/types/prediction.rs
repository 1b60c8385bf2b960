//! Prediction output types — the engine's sole product.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Predicted disposition of a case. Closed set — the engine never emits
/// anything outside these three labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Conviction,
    Acquittal,
    Settlement,
}

impl Outcome {
    /// All three outcomes.
    pub fn all() -> &'static [Outcome] {
        &[Self::Conviction, Self::Acquittal, Self::Settlement]
    }

    /// Outcome label as used on the wire and in history views.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Conviction => "Conviction",
            Self::Acquittal => "Acquittal",
            Self::Settlement => "Settlement",
        }
    }

    /// Lowercase form used inside narrative text.
    pub fn lowercase(&self) -> &'static str {
        match self {
            Self::Conviction => "conviction",
            Self::Acquittal => "acquittal",
            Self::Settlement => "settlement",
        }
    }

    /// Parse from a label, tolerating case differences.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "conviction" => Some(Self::Conviction),
            "acquittal" => Some(Self::Acquittal),
            "settlement" => Some(Self::Settlement),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named contributor to a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub name: String,
    /// Normalized importance weight in [0, 1].
    pub importance: f64,
    /// Explanatory sentence citing the synthetic statistic behind the weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// The prediction produced for one `CaseInput`.
///
/// Created fresh per prediction call and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub outcome: Outcome,
    /// Deliberately bounded away from certainty: always within [0.3, 0.9].
    pub confidence: f64,
    pub explanation: String,
    /// Present only when the caller requested the richer output mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistical_context: Option<String>,
    /// Sorted by importance descending; 3 or 4 entries.
    pub factors: SmallVec<[Factor; 4]>,
}

impl PredictionResult {
    /// Confidence as the rounded percentage cited in narrative text.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}
