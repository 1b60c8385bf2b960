//! Determinism tests — identical inputs always produce identical outputs,
//! serially and through the parallel batch path.

use verdict_core::types::case::CaseInput;
use verdict_engine::predictor::OutcomePredictor;

fn input_grid() -> Vec<CaseInput> {
    let case_types = [
        "Criminal - Theft",
        "Criminal - Assault",
        "Criminal - Fraud",
        "Criminal - Homicide",
        "Criminal - Drug Possession",
        "Civil - Property Dispute",
        "Family - Divorce",
    ];
    let signals = ["Strong", "Moderate", "Weak", "IPC 302", "IPC 323", "Section 999"];

    let mut inputs = Vec::new();
    for case_type in case_types {
        for signal in signals {
            for witnesses in 0..=8 {
                inputs.push(CaseInput::new(case_type, witnesses, signal));
            }
        }
    }
    inputs
}

#[test]
fn determinism_repeated_predictions_are_bit_identical() {
    let predictor = OutcomePredictor::new();
    for input in input_grid() {
        let first = serde_json::to_string(&predictor.predict(&input).unwrap()).unwrap();
        for _ in 0..5 {
            let next = serde_json::to_string(&predictor.predict(&input).unwrap()).unwrap();
            assert_eq!(first, next, "divergent prediction for {:?}", input);
        }
    }
}

#[test]
fn determinism_detailed_predictions_are_bit_identical() {
    let predictor = OutcomePredictor::new();
    let input = CaseInput::new("Criminal - Homicide", 5, "IPC 302")
        .with_facts("body recovered from the canal");
    let first = serde_json::to_string(&predictor.predict_detailed(&input).unwrap()).unwrap();
    for _ in 0..5 {
        let next = serde_json::to_string(&predictor.predict_detailed(&input).unwrap()).unwrap();
        assert_eq!(first, next);
    }
}

#[test]
fn determinism_batch_matches_sequential() {
    let predictor = OutcomePredictor::new();
    let inputs = input_grid();
    let batch = predictor.predict_batch(&inputs);
    assert_eq!(batch.len(), inputs.len());
    for (input, batched) in inputs.iter().zip(batch) {
        assert_eq!(batched.unwrap(), predictor.predict(input).unwrap());
    }
}

#[test]
fn determinism_separate_instances_agree() {
    let a = OutcomePredictor::new();
    let b = OutcomePredictor::new();
    for input in input_grid() {
        assert_eq!(a.predict(&input).unwrap(), b.predict(&input).unwrap());
    }
}
