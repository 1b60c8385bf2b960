//! # verdict-core
//!
//! Foundation crate for the Verdict prediction engine.
//! Defines the domain types, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{EngineConfig, VerdictConfig};
pub use errors::error_code::VerdictErrorCode;
pub use errors::{ConfigError, EngineError, ProviderError};
pub use types::case::{is_criminal, CaseInput, CrimeKind};
pub use types::prediction::{Factor, Outcome, PredictionResult};
