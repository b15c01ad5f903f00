use serde::Serialize;

use crate::cost_benefit::CostBenefit;
use crate::project::{ProjectInput, ProjectType, Region};
use crate::risk::{RiskAssessment, RiskLevel};
use crate::roi::RoiAnalysis;
use crate::social::SocialImpact;

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub label: &'static str,
    pub confidence: f64,
    pub key_factors: Vec<&'static str>,
}

pub fn recommendation_label(ml_score: f64) -> &'static str {
    if ml_score >= 80.0 {
        "Strongly Recommend"
    } else if ml_score >= 60.0 {
        "Recommend"
    } else if ml_score >= 40.0 {
        "Consider"
    } else {
        "Not Recommended"
    }
}

/// Confidence starts from the model score and shifts with how strongly the
/// risk and social signals agree with it, clamped to [0, 100].
fn confidence(ml_score: f64, risk_score: f64, social_impact_score: f64) -> f64 {
    let adjustment = 0.1 * (social_impact_score - 50.0) - 0.1 * (risk_score - 50.0);
    (ml_score + adjustment).clamp(0.0, 100.0)
}

/// Ten fixed narrative factors in display order; consumers show a prefix.
pub fn synthesize_recommendation(
    project: &ProjectInput,
    ml_score: f64,
    cost_benefit: &CostBenefit,
    roi: &RoiAnalysis,
    risk: &RiskAssessment,
    social: &SocialImpact,
) -> Recommendation {
    let roi_factor = if roi.roi_percentage > 15.0 {
        "High ROI potential"
    } else if roi.roi_percentage > 5.0 {
        "Moderate ROI"
    } else {
        "Low ROI potential"
    };

    let risk_profile = match risk.risk_level {
        RiskLevel::Low => "Low risk profile",
        RiskLevel::Medium => "Moderate risk",
        RiskLevel::High => "High risk profile",
    };

    let social_factor = if social.social_impact_score > 70.0 {
        "Strong social impact"
    } else if social.social_impact_score > 40.0 {
        "Moderate social impact"
    } else {
        "Limited social impact"
    };

    let environmental_factor = if project.co2_saved_tons_per_year > 1_000.0 {
        "Significant environmental benefits"
    } else if project.co2_saved_tons_per_year > 500.0 {
        "Moderate environmental benefits"
    } else {
        "Limited environmental impact"
    };

    let jobs_factor = if project.job_creation_count > 100 {
        "High job creation potential"
    } else if project.job_creation_count > 50 {
        "Moderate job creation"
    } else {
        "Limited job creation"
    };

    let region_factor = match project.region {
        Region::Urban => "Urban development focus",
        Region::Rural => "Rural development focus",
        Region::SemiUrban => "Semi-urban development",
    };

    let type_factor = match project.project_type {
        ProjectType::Solar => "Solar energy benefits",
        ProjectType::Wind => "Wind energy benefits",
        ProjectType::Hybrid => "Hybrid energy benefits",
    };

    let subsidy_factor = if project.subsidy_eligible {
        "Government subsidy eligible"
    } else {
        "No subsidy benefits"
    };

    let beneficiary_factor = if project.beneficiary_count > 10_000 {
        "Large beneficiary base"
    } else if project.beneficiary_count > 5_000 {
        "Moderate beneficiary base"
    } else {
        "Limited beneficiary reach"
    };

    let cost_factor = if cost_benefit.ratio > 1.5 {
        "Cost-effective investment"
    } else if cost_benefit.ratio > 1.0 {
        "Moderate cost efficiency"
    } else {
        "High cost investment"
    };

    Recommendation {
        label: recommendation_label(ml_score),
        confidence: confidence(ml_score, risk.risk_score, social.social_impact_score),
        key_factors: vec![
            roi_factor,
            risk_profile,
            social_factor,
            environmental_factor,
            jobs_factor,
            region_factor,
            type_factor,
            subsidy_factor,
            beneficiary_factor,
            cost_factor,
        ],
    }
}
