use serde::Serialize;

use crate::cost_benefit::CostBenefit;
use crate::project::ProjectInput;
use crate::risk::risk_factor;

const ROI_BOUND: f64 = 100.0;

#[derive(Debug, Clone, Serialize)]
pub struct YearlyRoi {
    pub year: u32,
    pub roi: f64,
    pub cumulative_revenue: f64,
    pub cumulative_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoiAnalysis {
    pub annual_revenue: f64,
    pub total_revenue: f64,
    pub total_investment: f64,
    pub roi_percentage: f64,
    pub risk_adjusted_roi: f64,
    pub yearly_projection: Vec<YearlyRoi>,
}

fn bounded_roi(revenue: f64, cost: f64) -> f64 {
    if cost > 0.0 {
        (((revenue - cost) / cost) * 100.0).clamp(-ROI_BOUND, ROI_BOUND)
    } else {
        0.0
    }
}

/// Return on investment counts the energy component only; environmental and
/// social valuations stay in the cost-benefit view. The projection walks
/// year 1 through the full duration with cumulative revenue against setup
/// plus accrued maintenance.
pub fn analyze_roi(project: &ProjectInput, cost_benefit: &CostBenefit) -> RoiAnalysis {
    let years = f64::from(project.duration_years);
    let total_revenue = cost_benefit.breakdown.energy_revenue;
    let annual_revenue = total_revenue / years;
    let total_investment = cost_benefit.total_cost;

    let roi_percentage = bounded_roi(total_revenue, total_investment);
    let risk_adjusted_roi = roi_percentage * risk_factor(project.risk_score);

    let yearly_projection = (1..=project.duration_years)
        .map(|year| {
            let cumulative_revenue = annual_revenue * f64::from(year);
            let cumulative_cost = project.setup_cost + project.maintenance_cost * f64::from(year);
            YearlyRoi {
                year,
                roi: bounded_roi(cumulative_revenue, cumulative_cost),
                cumulative_revenue,
                cumulative_cost,
            }
        })
        .collect();

    RoiAnalysis {
        annual_revenue,
        total_revenue,
        total_investment,
        roi_percentage,
        risk_adjusted_roi,
        yearly_projection,
    }
}
