use std::fs;
use std::path::Path;

use crate::prelude::*;

/// Knobs of a training run.
///
/// Serialized with camelCase keys (`batchSize`, `trainStart`, `evalStart`);
/// missing keys fall back to [`TrainingConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TrainingConfig {
    pub epochs: usize,
    pub alpha: f64,
    pub batch_size: usize,
    pub train_start: f64,
    pub eval_start: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 70_000,
            alpha: 0.0005,
            batch_size: 100,
            train_start: 0.,
            eval_start: 0.5,
        }
    }
}

impl TrainingConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Rejects values the training loop cannot run with. A large `alpha` is
    /// accepted; divergence is the caller's concern.
    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(TrainError::InvalidConfig("epochs must be at least 1".into()));
        }
        if self.batch_size == 0 {
            return Err(TrainError::InvalidConfig("batchSize must be at least 1".into()));
        }
        for (name, value) in [
            ("alpha", self.alpha),
            ("trainStart", self.train_start),
            ("evalStart", self.eval_start),
        ] {
            if !value.is_finite() {
                return Err(TrainError::InvalidConfig(format!("{name} must be finite, got {value}")));
            }
        }
        Ok(())
    }
}
