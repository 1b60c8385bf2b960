//! Scoring engine configuration.

use serde::{Deserialize, Serialize};

use crate::types::case::CrimeKind;

/// Tunable constants for the scoring engine.
///
/// Every field is optional in config files; `effective_*` accessors supply
/// the canonical defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Lower confidence bound. Default: 0.3.
    pub confidence_floor: Option<f64>,
    /// Upper confidence bound. Default: 0.9.
    pub confidence_ceiling: Option<f64>,
    /// Confidence assigned when a criminal settlement is remapped to
    /// conviction. Default: 0.6.
    pub remap_confidence: Option<f64>,
    /// Case-type bonus for theft. Default: 0.10.
    pub theft_bonus: Option<f64>,
    /// Case-type bonus for homicide. Default: 0.15.
    pub homicide_bonus: Option<f64>,
    /// Case-type bonus for drug possession. Default: 0.20.
    pub drug_bonus: Option<f64>,
}

impl EngineConfig {
    pub fn effective_confidence_floor(&self) -> f64 {
        self.confidence_floor.unwrap_or(0.3)
    }

    pub fn effective_confidence_ceiling(&self) -> f64 {
        self.confidence_ceiling.unwrap_or(0.9)
    }

    pub fn effective_remap_confidence(&self) -> f64 {
        self.remap_confidence.unwrap_or(0.6)
    }

    pub fn effective_theft_bonus(&self) -> f64 {
        self.theft_bonus.unwrap_or(0.10)
    }

    pub fn effective_homicide_bonus(&self) -> f64 {
        self.homicide_bonus.unwrap_or(0.15)
    }

    pub fn effective_drug_bonus(&self) -> f64 {
        self.drug_bonus.unwrap_or(0.20)
    }

    /// Additive confidence bonus for a crime kind. Assault and fraud carry
    /// none.
    pub fn bonus_for(&self, kind: CrimeKind) -> f64 {
        match kind {
            CrimeKind::Theft => self.effective_theft_bonus(),
            CrimeKind::Homicide => self.effective_homicide_bonus(),
            CrimeKind::DrugPossession => self.effective_drug_bonus(),
            CrimeKind::Assault | CrimeKind::Fraud => 0.0,
        }
    }
}
