//! Confidence scoring — base by decision path, kind bonuses, bounded result.

use verdict_core::config::EngineConfig;
use verdict_core::types::case::CrimeKind;

use crate::classify::Classification;

/// Compute the bounded confidence for a classification.
///
/// The base is the fired rule's value; a surviving settlement-to-conviction
/// remap overrides it with the configured remap confidence. When a kind
/// override replaced the outcome, the generic base is kept and the kind
/// bonus is applied additively on top — bonuses never select a different
/// base. The result is clamped to the configured bounds.
pub fn score(
    classification: &Classification,
    kind: Option<CrimeKind>,
    config: &EngineConfig,
) -> f64 {
    let mut confidence = if classification.remapped_from_settlement {
        config.effective_remap_confidence()
    } else {
        classification.rule.base_confidence()
    };

    if let Some(kind) = kind {
        confidence += config.bonus_for(kind);
    }

    confidence.clamp(
        config.effective_confidence_floor(),
        config.effective_confidence_ceiling(),
    )
}
