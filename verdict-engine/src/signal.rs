//! Evidence-signal interpretation.
//!
//! Two calling conventions exist among the surrounding application's
//! callers: a coarse strength label (Strong/Moderate/Weak) or a statute/FIR
//! section string such as "IPC 302". The engine detects which kind it
//! received by pattern — there is no separate mode flag.

use serde::{Deserialize, Serialize};

use crate::statutes::StatuteIndex;

/// Coarse evidence-strength label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvidenceStrength {
    Strong,
    Moderate,
    Weak,
}

impl EvidenceStrength {
    /// Label as shown in forms.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
        }
    }

    /// Parse from a label, tolerating case and surrounding whitespace.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strong" => Some(Self::Strong),
            "moderate" => Some(Self::Moderate),
            "weak" => Some(Self::Weak),
            _ => None,
        }
    }
}

/// Charge-severity class derived from a statute/FIR-section string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionClass {
    /// Homicide- or sexual-assault-equivalent statute.
    Serious,
    /// Simple-hurt or insult-equivalent statute.
    Minor,
    /// No known section token matched.
    Unclassified,
}

/// The interpreted evidence signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalKind {
    /// Evidence-strength mode.
    Strength(EvidenceStrength),
    /// FIR/statute-section mode.
    Section(SectionClass),
}

impl SignalKind {
    /// Interpret a raw evidence signal.
    ///
    /// A recognized strength label wins; anything else is treated as a
    /// section string and classified through the statute index.
    pub fn classify(raw: &str, statutes: &StatuteIndex) -> SignalKind {
        match EvidenceStrength::parse_str(raw) {
            Some(strength) => SignalKind::Strength(strength),
            None => SignalKind::Section(statutes.classify_section(raw)),
        }
    }

    /// Top evidence tier: strong label or serious section.
    pub fn is_strong_tier(&self) -> bool {
        matches!(
            self,
            SignalKind::Strength(EvidenceStrength::Strong) | SignalKind::Section(SectionClass::Serious)
        )
    }

    /// Bottom evidence tier: weak label or minor section.
    pub fn is_weak_tier(&self) -> bool {
        matches!(
            self,
            SignalKind::Strength(EvidenceStrength::Weak) | SignalKind::Section(SectionClass::Minor)
        )
    }

    /// Name of the factor this signal mode produces.
    pub fn factor_name(&self) -> &'static str {
        match self {
            SignalKind::Strength(_) => "Evidence Strength",
            SignalKind::Section(_) => "FIR Section",
        }
    }

    /// Strength word used when narrative templates need a tier adjective.
    pub fn tier_word(&self) -> &'static str {
        if self.is_strong_tier() {
            "strong"
        } else if self.is_weak_tier() {
            "weak"
        } else {
            "moderate"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_labels_parse() {
        assert_eq!(EvidenceStrength::parse_str("Strong"), Some(EvidenceStrength::Strong));
        assert_eq!(EvidenceStrength::parse_str(" weak "), Some(EvidenceStrength::Weak));
        assert_eq!(EvidenceStrength::parse_str("MODERATE"), Some(EvidenceStrength::Moderate));
        assert_eq!(EvidenceStrength::parse_str("IPC 302"), None);
    }

    #[test]
    fn test_classify_prefers_strength_mode() {
        let statutes = StatuteIndex::new();
        assert_eq!(
            SignalKind::classify("Strong", &statutes),
            SignalKind::Strength(EvidenceStrength::Strong)
        );
    }

    #[test]
    fn test_classify_falls_through_to_section_mode() {
        let statutes = StatuteIndex::new();
        assert_eq!(
            SignalKind::classify("IPC 302", &statutes),
            SignalKind::Section(SectionClass::Serious)
        );
        assert_eq!(
            SignalKind::classify("IPC 323", &statutes),
            SignalKind::Section(SectionClass::Minor)
        );
        assert_eq!(
            SignalKind::classify("Section 999", &statutes),
            SignalKind::Section(SectionClass::Unclassified)
        );
    }

    #[test]
    fn test_tier_helpers() {
        let strong = SignalKind::Strength(EvidenceStrength::Strong);
        let serious = SignalKind::Section(SectionClass::Serious);
        let weak = SignalKind::Strength(EvidenceStrength::Weak);
        let minor = SignalKind::Section(SectionClass::Minor);
        let moderate = SignalKind::Strength(EvidenceStrength::Moderate);
        let unclassified = SignalKind::Section(SectionClass::Unclassified);

        assert!(strong.is_strong_tier() && serious.is_strong_tier());
        assert!(weak.is_weak_tier() && minor.is_weak_tier());
        assert!(!moderate.is_strong_tier() && !moderate.is_weak_tier());
        assert_eq!(unclassified.tier_word(), "moderate");
        assert_eq!(serious.factor_name(), "FIR Section");
        assert_eq!(strong.factor_name(), "Evidence Strength");
    }
}
