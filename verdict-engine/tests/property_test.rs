//! Property tests — invariants that must hold for ANY valid input, not just
//! hand-crafted cases.

use proptest::prelude::*;

use verdict_core::types::case::{is_criminal, CaseInput};
use verdict_core::types::prediction::{Outcome, PredictionResult};
use verdict_engine::predictor::OutcomePredictor;

const SIGNALS: &[&str] = &[
    "Strong",
    "Moderate",
    "Weak",
    "IPC 302",
    "IPC 304A",
    "IPC 323",
    "Section 504",
    "u/s 376 IPC",
    "BNS 111",
];

const CASE_TYPES: &[&str] = &[
    "Criminal - Theft",
    "Criminal - Assault",
    "Criminal - Fraud",
    "Criminal - Homicide",
    "Criminal - Drug Possession",
    "Criminal - Vandalism",
    "Civil - Property Dispute",
    "Civil - Personal Injury",
    "Contract - Breach",
    "Family - Divorce",
];

fn assert_invariants(input: &CaseInput, result: &PredictionResult) {
    // Confidence bounds.
    assert!(
        (0.3..=0.9).contains(&result.confidence),
        "confidence {} out of bounds for {:?}",
        result.confidence,
        input
    );

    // Closed outcome set (the type guarantees it; keep the label honest).
    assert!(Outcome::parse_str(result.outcome.name()).is_some());

    // Criminal cases never settle.
    if is_criminal(&input.case_type) {
        assert_ne!(
            result.outcome,
            Outcome::Settlement,
            "criminal case settled: {:?}",
            input
        );
    }

    // Factor list shape: 3-4 entries, sorted non-increasing, weights in [0,1].
    assert!(
        result.factors.len() == 3 || result.factors.len() == 4,
        "unexpected factor count {} for {:?}",
        result.factors.len(),
        input
    );
    assert!(result
        .factors
        .windows(2)
        .all(|w| w[0].importance >= w[1].importance));
    assert!(result
        .factors
        .iter()
        .all(|f| (0.0..=1.0).contains(&f.importance)));

    // Explanation cites the rounded percentage.
    assert!(!result.explanation.is_empty());
    assert!(result
        .explanation
        .contains(&format!("{}%", result.confidence_percent())));
}

// ═══════════════════════════════════════════════════════════════════════════
// FULL-GRID SWEEP
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn property_invariants_hold_across_grid() {
    let predictor = OutcomePredictor::new();
    for case_type in CASE_TYPES {
        for signal in SIGNALS {
            for witnesses in 0..=12 {
                let input = CaseInput::new(*case_type, witnesses, *signal);
                let result = predictor.predict(&input).unwrap();
                assert_invariants(&input, &result);
            }
        }
    }
}

#[test]
fn property_detailed_mode_adds_context_and_keeps_invariants() {
    let predictor = OutcomePredictor::new();
    for case_type in CASE_TYPES {
        for signal in SIGNALS {
            let input = CaseInput::new(*case_type, 3, *signal);
            let result = predictor.predict_detailed(&input).unwrap();
            assert_invariants(&input, &result);
            let context = result.statistical_context.as_deref().unwrap();
            assert!(!context.is_empty());
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ARBITRARY INPUTS
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn property_arbitrary_case_types(
        case_type in "[A-Za-z][A-Za-z -]{0,39}",
        witnesses in 0i64..=50,
        signal_idx in 0usize..SIGNALS.len(),
    ) {
        let predictor = OutcomePredictor::new();
        let input = CaseInput::new(case_type, witnesses, SIGNALS[signal_idx]);
        let result = predictor.predict(&input).unwrap();
        assert_invariants(&input, &result);
    }

    #[test]
    fn property_negative_witness_count_always_rejected(
        witnesses in i64::MIN..0,
    ) {
        let predictor = OutcomePredictor::new();
        let input = CaseInput::new("Criminal - Theft", witnesses, "Strong");
        prop_assert!(predictor.predict(&input).is_err());
    }

    #[test]
    fn property_arbitrary_signals_never_panic(
        signal in "[A-Za-z0-9 /]{1,20}",
        witnesses in 0i64..=20,
    ) {
        let predictor = OutcomePredictor::new();
        let input = CaseInput::new("Criminal - Fraud", witnesses, signal.clone());
        match predictor.predict(&input) {
            Ok(result) => assert_invariants(&input, &result),
            // Only an all-whitespace signal may be rejected.
            Err(_) => prop_assert!(signal.trim().is_empty()),
        }
    }
}
