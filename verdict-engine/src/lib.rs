//! # verdict-engine
//!
//! Prediction engine for the Verdict case-outcome tool.
//! Contains evidence-signal interpretation, the statute index, the outcome
//! classifier, confidence scorer, factor ranker, narrative composer, and the
//! provider fallback boundary.

pub mod classify;
pub mod confidence;
pub mod factors;
pub mod narrative;
pub mod predictor;
pub mod provider;
pub mod signal;
pub mod statutes;

pub use predictor::OutcomePredictor;
pub use provider::{FallbackPredictor, PredictionProvider};
