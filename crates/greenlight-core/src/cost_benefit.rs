use serde::Serialize;

use crate::pricing::TariffSchedule;
use crate::project::ProjectInput;

#[derive(Debug, Clone, Serialize)]
pub struct CostBreakdown {
    pub setup: f64,
    pub maintenance: f64,
    pub energy_revenue: f64,
    pub environmental_benefit: f64,
    pub social_benefit: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostBenefit {
    pub total_cost: f64,
    pub total_benefit: f64,
    pub ratio: f64,
    pub breakdown: CostBreakdown,
}

/// Monetizes the project over its full duration. Benefit is energy revenue
/// at the effective tariff plus carbon and beneficiary valuations; the
/// ratio is the exact quotient, zero when there is no cost to divide by.
pub fn analyze_cost_benefit(project: &ProjectInput, tariff: &TariffSchedule) -> CostBenefit {
    let years = f64::from(project.duration_years);
    let maintenance = project.maintenance_cost * years;
    let total_cost = project.setup_cost + maintenance;

    let price = tariff.price_per_mwh(
        project.project_type,
        project.region,
        project.subsidy_eligible,
    );
    let energy_revenue = project.expected_generation_mwh * price * years;
    let environmental_benefit =
        project.co2_saved_tons_per_year * tariff.carbon_price_per_ton * years;
    let social_benefit =
        project.beneficiary_count as f64 * tariff.social_value_per_beneficiary * years;

    let total_benefit = energy_revenue + environmental_benefit + social_benefit;
    let ratio = if total_cost > 0.0 {
        total_benefit / total_cost
    } else {
        0.0
    };

    CostBenefit {
        total_cost,
        total_benefit,
        ratio,
        breakdown: CostBreakdown {
            setup: project.setup_cost,
            maintenance,
            energy_revenue,
            environmental_benefit,
            social_benefit,
        },
    }
}
