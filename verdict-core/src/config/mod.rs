//! Configuration for the Verdict workspace.

mod engine_config;

pub use engine_config::EngineConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VerdictConfig {
    pub engine: EngineConfig,
}

impl VerdictConfig {
    /// Parse and validate a TOML config document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: VerdictConfig = toml::from_str(raw).map_err(|e| ConfigError::ParseFailed {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the engine cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let engine = &self.engine;
        let checks = [
            ("engine.confidence_floor", engine.effective_confidence_floor()),
            ("engine.confidence_ceiling", engine.effective_confidence_ceiling()),
            ("engine.remap_confidence", engine.effective_remap_confidence()),
            ("engine.theft_bonus", engine.effective_theft_bonus()),
            ("engine.homicide_bonus", engine.effective_homicide_bonus()),
            ("engine.drug_bonus", engine.effective_drug_bonus()),
        ];
        for (field, value) in checks {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if engine.effective_confidence_floor() > engine.effective_confidence_ceiling() {
            return Err(ConfigError::OutOfRange {
                field: "engine.confidence_floor",
                value: engine.effective_confidence_floor(),
            });
        }
        Ok(())
    }
}
