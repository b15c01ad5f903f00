use std::sync::Arc;

use thiserror::Error;

use greenlight_core::{
    analyze_cost_benefit, analyze_roi, assess_risk, assess_social_impact,
    synthesize_recommendation, EvaluationResult, ProjectInput, TariffSchedule,
};
use greenlight_model::{encode_features, ModelError, ScorePredictor};

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("scoring failure: {0}")]
    Scoring(#[source] ModelError),

    #[error("internal evaluation error: {0}")]
    Internal(String),
}

/// One evaluation pipeline: a shared read-only predictor plus the tariff
/// schedule. Holds no per-call state, so a single instance serves
/// concurrent callers.
pub struct Evaluator {
    predictor: Arc<dyn ScorePredictor>,
    tariff: TariffSchedule,
}

impl Evaluator {
    pub fn new(predictor: Arc<dyn ScorePredictor>, tariff: TariffSchedule) -> Self {
        Self { predictor, tariff }
    }

    pub fn predictor_name(&self) -> &'static str {
        self.predictor.name()
    }

    /// Full evaluation of one validated project. Either every section of
    /// the result is produced or the call fails; a predictor fault surfaces
    /// once as `Scoring` and is never retried.
    pub async fn evaluate(
        &self,
        project: &ProjectInput,
    ) -> Result<EvaluationResult, EvaluationError> {
        let features = encode_features(project);
        let raw = self
            .predictor
            .predict(&features)
            .await
            .map_err(EvaluationError::Scoring)?;
        if !raw.is_finite() {
            return Err(EvaluationError::Scoring(ModelError::InvalidResponse(
                "predictor returned a non-finite score".to_string(),
            )));
        }
        let ml_score = raw.clamp(0.0, 100.0);

        let cost_benefit = analyze_cost_benefit(project, &self.tariff);
        let roi = analyze_roi(project, &cost_benefit);
        let risk = assess_risk(project.risk_score);
        let social_impact = assess_social_impact(project);
        let recommendation =
            synthesize_recommendation(project, ml_score, &cost_benefit, &roi, &risk, &social_impact);

        Ok(EvaluationResult {
            ml_score,
            cost_benefit,
            roi,
            risk,
            social_impact,
            recommendation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use greenlight_core::{ProjectType, Region, RiskLevel};
    use greenlight_model::BaselineScoreModel;

    struct FixedPredictor(f64);

    #[async_trait]
    impl ScorePredictor for FixedPredictor {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn predict(&self, _features: &greenlight_model::FeatureVector) -> Result<f64, ModelError> {
            Ok(self.0)
        }
    }

    struct BrokenPredictor;

    #[async_trait]
    impl ScorePredictor for BrokenPredictor {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn predict(&self, _features: &greenlight_model::FeatureVector) -> Result<f64, ModelError> {
            Err(ModelError::InvalidResponse("no score".to_string()))
        }
    }

    fn urban_solar() -> ProjectInput {
        ProjectInput {
            project_name: Some("Coastal Array".to_string()),
            project_type: ProjectType::Solar,
            region: Region::Urban,
            capacity_mw: 100.0,
            setup_cost: 50_000_000.0,
            maintenance_cost: 2_000_000.0,
            duration_years: 25,
            expected_generation_mwh: 150_000.0,
            co2_saved_tons_per_year: 75_000.0,
            beneficiary_count: 100_000,
            risk_score: 30.0,
            subsidy_eligible: true,
            job_creation_count: 200,
        }
    }

    fn baseline_evaluator() -> Evaluator {
        Evaluator::new(
            Arc::new(BaselineScoreModel::new()),
            TariffSchedule::default(),
        )
    }

    #[tokio::test]
    async fn full_pipeline_for_urban_solar() {
        let out = baseline_evaluator().evaluate(&urban_solar()).await.unwrap();

        assert!((out.ml_score - 36.8).abs() < 1e-9);
        assert_eq!(out.risk.risk_level, RiskLevel::Low);
        assert!((out.risk.risk_factor - 0.85).abs() < 1e-12);
        assert!((out.social_impact.social_impact_score - 76.0).abs() < 1e-9);
        assert!((out.cost_benefit.total_cost - 100_000_000.0).abs() < 1e-6);
        assert!((out.cost_benefit.ratio - 0.94297).abs() < 1e-9);
        assert_eq!(out.roi.yearly_projection.len(), 25);
        assert_eq!(out.recommendation.label, "Not Recommended");
        assert_eq!(out.recommendation.key_factors.len(), 10);
        assert!((out.recommendation.confidence - 41.4).abs() < 1e-9);
    }

    #[tokio::test]
    async fn evaluation_is_deterministic() {
        let evaluator = baseline_evaluator();
        let project = urban_solar();
        let first = evaluator.evaluate(&project).await.unwrap();
        let second = evaluator.evaluate(&project).await.unwrap();
        let a = serde_json::to_value(&first).unwrap();
        let b = serde_json::to_value(&second).unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn predictor_output_is_clamped() {
        let evaluator = Evaluator::new(Arc::new(FixedPredictor(250.0)), TariffSchedule::default());
        let out = evaluator.evaluate(&urban_solar()).await.unwrap();
        assert!((out.ml_score - 100.0).abs() < f64::EPSILON);
        assert_eq!(out.recommendation.label, "Strongly Recommend");

        let evaluator = Evaluator::new(Arc::new(FixedPredictor(-3.0)), TariffSchedule::default());
        let out = evaluator.evaluate(&urban_solar()).await.unwrap();
        assert!(out.ml_score.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn non_finite_score_is_a_scoring_failure() {
        let evaluator = Evaluator::new(
            Arc::new(FixedPredictor(f64::NAN)),
            TariffSchedule::default(),
        );
        let err = evaluator.evaluate(&urban_solar()).await.unwrap_err();
        assert!(matches!(err, EvaluationError::Scoring(_)));
    }

    #[tokio::test]
    async fn predictor_fault_propagates_without_partial_result() {
        let evaluator = Evaluator::new(Arc::new(BrokenPredictor), TariffSchedule::default());
        let err = evaluator.evaluate(&urban_solar()).await.unwrap_err();
        assert!(matches!(
            err,
            EvaluationError::Scoring(ModelError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn high_risk_discounts_adjusted_roi() {
        let mut project = urban_solar();
        project.risk_score = 80.0;
        let out = baseline_evaluator().evaluate(&project).await.unwrap();
        assert_eq!(out.risk.risk_level, RiskLevel::High);
        assert!((out.risk.risk_factor - 0.6).abs() < 1e-12);
        assert!((out.roi.risk_adjusted_roi - out.roi.roi_percentage * 0.6).abs() < 1e-9);
    }
}
