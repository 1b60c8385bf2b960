//! Statute knowledge for FIR/section-mode signals.
//!
//! Section groupings follow the Indian Penal Code and NDPS Act tables the
//! surrounding application exposes in its case forms. Classification is
//! token-based: digit runs in the raw signal are matched against known
//! section codes, never substring-matched.

use rustc_hash::FxHashMap;

use verdict_core::types::case::CrimeKind;

use crate::signal::SectionClass;

/// A statute family and its section codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRef {
    /// Statute family, e.g. "IPC" or "NDPS Act".
    pub law: &'static str,
    /// Section codes within the family.
    pub codes: &'static [&'static str],
}

/// Sections typically charged for each crime kind.
pub fn sections_for(kind: CrimeKind) -> &'static [SectionRef] {
    match kind {
        CrimeKind::Theft => &[SectionRef {
            law: "IPC",
            codes: &["378", "379", "380", "381", "382"],
        }],
        CrimeKind::Assault => &[SectionRef {
            law: "IPC",
            codes: &["351", "352", "353", "354", "355", "356", "357", "358"],
        }],
        CrimeKind::Fraud => &[SectionRef {
            law: "IPC",
            codes: &["415", "416", "417", "418", "419", "420"],
        }],
        CrimeKind::Homicide => &[SectionRef {
            law: "IPC",
            codes: &["299", "300", "301", "302", "303", "304", "304A"],
        }],
        CrimeKind::DrugPossession => &[
            SectionRef {
                law: "NDPS Act",
                codes: &["20", "21", "22", "27"],
            },
            SectionRef {
                law: "IPC",
                codes: &["120B"],
            },
        ],
    }
}

/// Homicide range and the sexual-assault statute.
const SERIOUS_TOKENS: &[&str] = &["299", "300", "302", "304", "376"];
/// Simple hurt, affray, insult.
const MINOR_TOKENS: &[&str] = &["323", "358", "504"];

/// Token-to-class index for section classification.
pub struct StatuteIndex {
    classes: FxHashMap<&'static str, SectionClass>,
}

impl StatuteIndex {
    pub fn new() -> Self {
        let mut classes = FxHashMap::default();
        for token in SERIOUS_TOKENS {
            classes.insert(*token, SectionClass::Serious);
        }
        for token in MINOR_TOKENS {
            classes.insert(*token, SectionClass::Minor);
        }
        Self { classes }
    }

    /// Classify a raw section string, e.g. "IPC 302" or "u/s 323 IPC".
    ///
    /// Maximal digit runs are matched against the known tokens; first hit
    /// wins; no hit means `Unclassified`.
    pub fn classify_section(&self, raw: &str) -> SectionClass {
        for token in digit_runs(raw) {
            if let Some(class) = self.classes.get(token.as_str()) {
                return *class;
            }
        }
        SectionClass::Unclassified
    }
}

impl Default for StatuteIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a raw signal into maximal digit runs.
fn digit_runs(raw: &str) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            current.push(ch);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}
