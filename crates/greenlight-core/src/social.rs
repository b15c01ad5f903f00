use serde::Serialize;

use crate::project::ProjectInput;

// Saturation points: reach beyond these earns no extra credit.
const BENEFICIARY_SATURATION: f64 = 50_000.0;
const JOB_SATURATION: f64 = 1_000.0;
const CO2_SATURATION: f64 = 50_000.0;

#[derive(Debug, Clone, Serialize)]
pub struct SocialImpact {
    pub beneficiaries: u64,
    pub job_creation: u64,
    pub co2_saved: f64,
    pub social_impact_score: f64,
}

/// Capped composite: beneficiaries up to 40 points, jobs and CO2 up to 30
/// each, so the score is bounded to [0, 100] by construction.
pub fn assess_social_impact(project: &ProjectInput) -> SocialImpact {
    let beneficiaries_term =
        (project.beneficiary_count as f64 / BENEFICIARY_SATURATION).min(1.0) * 40.0;
    let jobs_term = (project.job_creation_count as f64 / JOB_SATURATION).min(1.0) * 30.0;
    let co2_term = (project.co2_saved_tons_per_year / CO2_SATURATION).min(1.0) * 30.0;

    SocialImpact {
        beneficiaries: project.beneficiary_count,
        job_creation: project.job_creation_count,
        co2_saved: project.co2_saved_tons_per_year,
        social_impact_score: beneficiaries_term + jobs_term + co2_term,
    }
}
