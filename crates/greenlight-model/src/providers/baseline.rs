use async_trait::async_trait;

use crate::error::ModelError;
use crate::features::FeatureVector;
use crate::traits::ScorePredictor;

// Constants the shipped regressor was fit against; changing them means a
// different model, not a different configuration.
const FLAT_PRICE_PER_MWH: f64 = 0.12;
const ROI_CAP: f64 = 30.0;

/// The deterministic composite the trained regressor approximates: half
/// capped ROI, 30% social reach, 20% inverted risk. Serves as the default
/// predictor when no weights file or remote endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineScoreModel;

impl BaselineScoreModel {
    pub fn new() -> Self {
        Self
    }

    fn score(features: &FeatureVector) -> Result<f64, ModelError> {
        let get = |name: &'static str| {
            features
                .value(name)
                .ok_or_else(|| ModelError::Encoding(format!("missing feature: {name}")))
        };

        let setup_cost = get("setup_cost")?;
        let maintenance_cost = get("maintenance_cost")?;
        let duration_years = get("duration_years")?;
        let generation = get("expected_generation_mwh")?;
        let beneficiaries = get("beneficiary_count")?;
        let jobs = get("job_creation_count")?;
        let co2 = get("co2_saved_tons_per_year")?;
        let risk = get("risk_score")?;

        let total_cost = setup_cost + maintenance_cost * duration_years;
        let total_revenue = generation * FLAT_PRICE_PER_MWH * duration_years;
        let roi = if total_cost > 0.0 {
            (((total_revenue - total_cost) / total_cost) * 100.0).min(ROI_CAP)
        } else {
            0.0
        };
        let roi_score = roi.max(0.0);

        let social_score = (beneficiaries / 50_000.0).min(1.0) * 40.0
            + (jobs / 1_000.0).min(1.0) * 30.0
            + (co2 / 50_000.0).min(1.0) * 30.0;

        let safety_score = 100.0 - risk;

        let composite = 0.5 * roi_score + 0.3 * social_score + 0.2 * safety_score;
        Ok(composite.clamp(0.0, 100.0))
    }
}

#[async_trait]
impl ScorePredictor for BaselineScoreModel {
    fn name(&self) -> &'static str {
        "baseline"
    }

    async fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        Self::score(features)
    }
}
