//! Case input types — the facts a caller supplies per prediction request.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// A single prediction request. Immutable once constructed; the engine
/// reads it and never writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseInput {
    /// Freeform case-type label, conventionally `"Criminal - <CrimeKind>"`.
    pub case_type: String,
    /// Number of witnesses. Signed so deserialized caller input carries the
    /// invalid negative case into `validate` instead of failing in serde.
    pub witness_count: i64,
    /// Either an evidence-strength label (Strong/Moderate/Weak) or a
    /// statute/FIR-section string such as "IPC 302".
    pub evidence_signal: String,
    /// Free text describing the case. Used only for display interpolation,
    /// never parsed for logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_facts: Option<String>,
}

impl CaseInput {
    /// Create an input without case facts.
    pub fn new(
        case_type: impl Into<String>,
        witness_count: i64,
        evidence_signal: impl Into<String>,
    ) -> Self {
        Self {
            case_type: case_type.into(),
            witness_count,
            evidence_signal: evidence_signal.into(),
            case_facts: None,
        }
    }

    /// Attach free-text case facts.
    pub fn with_facts(mut self, facts: impl Into<String>) -> Self {
        self.case_facts = Some(facts.into());
        self
    }

    /// Reject inputs the engine must not silently misclassify.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.witness_count < 0 {
            return Err(EngineError::NegativeWitnessCount {
                count: self.witness_count,
            });
        }
        if self.case_type.trim().is_empty() {
            return Err(EngineError::EmptyCaseType);
        }
        if self.evidence_signal.trim().is_empty() {
            return Err(EngineError::EmptyEvidenceSignal);
        }
        Ok(())
    }

    /// Witness count as unsigned. Callers must `validate` first; a negative
    /// count saturates to zero here.
    pub fn witnesses(&self) -> u32 {
        self.witness_count.max(0) as u32
    }
}

/// Whether a case-type label describes a criminal matter.
pub fn is_criminal(case_type: &str) -> bool {
    contains_ignore_case(case_type, "criminal")
}

/// The specific category within a criminal case type.
///
/// Detection is by substring, never equality — case-type labels are freeform
/// caller input and vary across the surrounding application's forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrimeKind {
    Theft,
    Assault,
    Fraud,
    Homicide,
    DrugPossession,
}

impl CrimeKind {
    /// All five kinds.
    pub fn all() -> &'static [CrimeKind] {
        &[
            Self::Theft,
            Self::Assault,
            Self::Fraud,
            Self::Homicide,
            Self::DrugPossession,
        ]
    }

    /// Kind name as displayed in case-type labels.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Theft => "Theft",
            Self::Assault => "Assault",
            Self::Fraud => "Fraud",
            Self::Homicide => "Homicide",
            Self::DrugPossession => "Drug Possession",
        }
    }

    /// Detect the kind from a freeform case-type label.
    ///
    /// "Drug" alone matches: labels vary between "Drug Possession" and
    /// "Drugs" across callers.
    pub fn detect(case_type: &str) -> Option<CrimeKind> {
        if contains_ignore_case(case_type, "theft") {
            Some(Self::Theft)
        } else if contains_ignore_case(case_type, "assault") {
            Some(Self::Assault)
        } else if contains_ignore_case(case_type, "fraud") {
            Some(Self::Fraud)
        } else if contains_ignore_case(case_type, "homicide") {
            Some(Self::Homicide)
        } else if contains_ignore_case(case_type, "drug") {
            Some(Self::DrugPossession)
        } else {
            None
        }
    }
}

impl fmt::Display for CrimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(needle)
}
