use serde::Serialize;

use crate::cost_benefit::CostBenefit;
use crate::recommendation::Recommendation;
use crate::risk::RiskAssessment;
use crate::roi::RoiAnalysis;
use crate::social::SocialImpact;

/// The complete evaluation for one project, assembled fresh per call and
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub ml_score: f64,
    pub cost_benefit: CostBenefit,
    pub roi: RoiAnalysis,
    pub risk: RiskAssessment,
    pub social_impact: SocialImpact,
    pub recommendation: Recommendation,
}
