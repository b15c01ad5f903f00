use std::collections::HashMap;
use std::fs;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::LinearModelConfig;
use crate::error::ModelError;
use crate::features::{FeatureVector, FEATURE_NAMES};
use crate::traits::ScorePredictor;

#[derive(Debug, Deserialize)]
struct WeightsFile {
    bias: f64,
    weights: HashMap<String, f64>,
}

/// Linear regression over the fixed feature layout. The weights artifact is
/// JSON keyed by feature name; every feature must be covered and unknown
/// keys are rejected so a stale artifact fails loudly at startup.
#[derive(Debug, Clone)]
pub struct LinearScoreModel {
    bias: f64,
    weights: Vec<f64>,
}

impl LinearScoreModel {
    pub fn from_config(config: &LinearModelConfig) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(&config.weights_path)?;
        let parsed: WeightsFile = serde_json::from_str(&raw)?;
        Self::from_weights(parsed.bias, &parsed.weights)
    }

    pub fn from_weights(bias: f64, named: &HashMap<String, f64>) -> Result<Self, ModelError> {
        for name in named.keys() {
            if !FEATURE_NAMES.contains(&name.as_str()) {
                return Err(ModelError::Config(format!("unknown weight: {name}")));
            }
        }
        let weights = FEATURE_NAMES
            .iter()
            .map(|name| {
                named
                    .get(*name)
                    .copied()
                    .ok_or_else(|| ModelError::Config(format!("missing weight: {name}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bias, weights })
    }

    fn evaluate(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        if features.len() != self.weights.len() {
            return Err(ModelError::Encoding(format!(
                "expected {} features, got {}",
                self.weights.len(),
                features.len()
            )));
        }
        let dot: f64 = self
            .weights
            .iter()
            .zip(features.values())
            .map(|(weight, value)| weight * value)
            .sum();
        Ok(self.bias + dot)
    }
}

#[async_trait]
impl ScorePredictor for LinearScoreModel {
    fn name(&self) -> &'static str {
        "linear"
    }

    async fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        self.evaluate(features)
    }
}
