//! Outcome classification — ordered heuristic rules over the case facts.

use verdict_core::types::case::{is_criminal, CrimeKind};
use verdict_core::types::prediction::Outcome;

use crate::signal::{EvidenceStrength, SectionClass, SignalKind};

/// The generic rule that decided the outcome, before kind overrides.
///
/// Each rule carries the base confidence of its decision path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionRule {
    /// More than five witnesses.
    ManyWitnesses,
    /// Strong evidence with fewer than three witnesses.
    StrongFewWitnesses,
    /// Weak evidence.
    WeakEvidence,
    /// Section-mode signal matching a serious statute.
    SeriousSection,
    /// Section-mode signal matching a minor statute.
    MinorSection,
    /// No rule fired.
    DefaultSettlement,
}

impl DecisionRule {
    /// Base confidence for the decision path this rule represents.
    pub fn base_confidence(&self) -> f64 {
        match self {
            Self::ManyWitnesses => 0.7,
            Self::StrongFewWitnesses => 0.8,
            Self::WeakEvidence => 0.6,
            Self::SeriousSection => 0.8,
            Self::MinorSection => 0.6,
            Self::DefaultSettlement => 0.5,
        }
    }
}

/// Outcome plus the decision path that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub outcome: Outcome,
    /// Generic rule that fired before any remap or kind override.
    pub rule: DecisionRule,
    /// Criminal settlement remapped to conviction, and the remap survived.
    pub remapped_from_settlement: bool,
    /// Crime-kind override that replaced the generic outcome, if any.
    pub kind_override: Option<CrimeKind>,
}

/// Classify a case into an outcome.
///
/// Generic rules run first (first match wins), then the criminal
/// settlement-to-conviction remap, then the homicide and drug-possession
/// overrides. An override replaces the remap, so `remapped_from_settlement`
/// only reports a remap that survived to the final outcome.
pub fn classify(case_type: &str, witness_count: u32, signal: &SignalKind) -> Classification {
    let (mut outcome, rule) = generic_outcome(witness_count, signal);

    let mut remapped = false;
    if is_criminal(case_type) && outcome == Outcome::Settlement {
        outcome = Outcome::Conviction;
        remapped = true;
    }

    let mut kind_override = None;
    match CrimeKind::detect(case_type) {
        Some(CrimeKind::Homicide) => {
            outcome = if witness_count > 3 {
                Outcome::Conviction
            } else {
                Outcome::Acquittal
            };
            kind_override = Some(CrimeKind::Homicide);
            remapped = false;
        }
        Some(CrimeKind::DrugPossession) => {
            outcome = Outcome::Conviction;
            kind_override = Some(CrimeKind::DrugPossession);
            remapped = false;
        }
        _ => {}
    }

    Classification {
        outcome,
        rule,
        remapped_from_settlement: remapped,
        kind_override,
    }
}

fn generic_outcome(witness_count: u32, signal: &SignalKind) -> (Outcome, DecisionRule) {
    if witness_count > 5 {
        return (Outcome::Conviction, DecisionRule::ManyWitnesses);
    }
    match signal {
        SignalKind::Strength(EvidenceStrength::Strong) if witness_count < 3 => {
            (Outcome::Settlement, DecisionRule::StrongFewWitnesses)
        }
        SignalKind::Strength(EvidenceStrength::Weak) => {
            (Outcome::Acquittal, DecisionRule::WeakEvidence)
        }
        SignalKind::Section(SectionClass::Serious) => {
            (Outcome::Conviction, DecisionRule::SeriousSection)
        }
        SignalKind::Section(SectionClass::Minor) => {
            (Outcome::Acquittal, DecisionRule::MinorSection)
        }
        _ => (Outcome::Settlement, DecisionRule::DefaultSettlement),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(s: EvidenceStrength) -> SignalKind {
        SignalKind::Strength(s)
    }

    fn section(c: SectionClass) -> SignalKind {
        SignalKind::Section(c)
    }

    // --- Generic rules, first match wins ---

    #[test]
    fn test_many_witnesses_convict() {
        let c = classify("Civil - Contract Dispute", 6, &strength(EvidenceStrength::Weak));
        assert_eq!(c.outcome, Outcome::Conviction);
        assert_eq!(c.rule, DecisionRule::ManyWitnesses);
    }

    #[test]
    fn test_strong_few_witnesses_settle() {
        let c = classify("Civil - Property Dispute", 1, &strength(EvidenceStrength::Strong));
        assert_eq!(c.outcome, Outcome::Settlement);
        assert_eq!(c.rule, DecisionRule::StrongFewWitnesses);
    }

    #[test]
    fn test_strong_with_three_witnesses_falls_through() {
        // Strong evidence but witness_count >= 3: the settlement rule does
        // not fire and nothing else matches a strength signal.
        let c = classify("Civil - Property Dispute", 3, &strength(EvidenceStrength::Strong));
        assert_eq!(c.rule, DecisionRule::DefaultSettlement);
        assert_eq!(c.outcome, Outcome::Settlement);
    }

    #[test]
    fn test_weak_evidence_acquit() {
        let c = classify("Civil - Property Dispute", 4, &strength(EvidenceStrength::Weak));
        assert_eq!(c.outcome, Outcome::Acquittal);
        assert_eq!(c.rule, DecisionRule::WeakEvidence);
    }

    #[test]
    fn test_serious_section_convict() {
        let c = classify("Civil - Personal Injury", 0, &section(SectionClass::Serious));
        assert_eq!(c.outcome, Outcome::Conviction);
        assert_eq!(c.rule, DecisionRule::SeriousSection);
    }

    #[test]
    fn test_minor_section_acquit() {
        let c = classify("Civil - Personal Injury", 0, &section(SectionClass::Minor));
        assert_eq!(c.outcome, Outcome::Acquittal);
        assert_eq!(c.rule, DecisionRule::MinorSection);
    }

    // --- Criminal remap ---

    #[test]
    fn test_criminal_settlement_remaps_to_conviction() {
        let c = classify("Criminal - Fraud", 1, &strength(EvidenceStrength::Strong));
        assert_eq!(c.outcome, Outcome::Conviction);
        assert!(c.remapped_from_settlement);
        assert_eq!(c.kind_override, None);
    }

    #[test]
    fn test_non_criminal_settlement_stands() {
        let c = classify("Civil - Property Dispute", 1, &strength(EvidenceStrength::Strong));
        assert_eq!(c.outcome, Outcome::Settlement);
        assert!(!c.remapped_from_settlement);
    }

    // --- Kind overrides ---

    #[test]
    fn test_homicide_override_by_witness_count() {
        let few = classify("Criminal - Homicide", 3, &strength(EvidenceStrength::Strong));
        assert_eq!(few.outcome, Outcome::Acquittal);
        assert_eq!(few.kind_override, Some(CrimeKind::Homicide));

        let many = classify("Criminal - Homicide", 4, &strength(EvidenceStrength::Weak));
        assert_eq!(many.outcome, Outcome::Conviction);
        assert_eq!(many.kind_override, Some(CrimeKind::Homicide));
    }

    #[test]
    fn test_drug_override_always_convicts() {
        let c = classify("Criminal - Drug Possession", 0, &strength(EvidenceStrength::Weak));
        assert_eq!(c.outcome, Outcome::Conviction);
        assert_eq!(c.kind_override, Some(CrimeKind::DrugPossession));
    }

    #[test]
    fn test_override_clears_surviving_remap() {
        // Strong + 1 witness settles, remaps to conviction for criminal,
        // then the drug override replaces the remap.
        let c = classify("Criminal - Drug Possession", 1, &strength(EvidenceStrength::Strong));
        assert_eq!(c.outcome, Outcome::Conviction);
        assert!(!c.remapped_from_settlement);
        assert_eq!(c.rule, DecisionRule::StrongFewWitnesses);
    }

    #[test]
    fn test_unknown_case_type_skips_remap_and_overrides() {
        let c = classify("", 1, &strength(EvidenceStrength::Strong));
        assert_eq!(c.outcome, Outcome::Settlement);
        assert!(!c.remapped_from_settlement);
        assert_eq!(c.kind_override, None);
    }
}
