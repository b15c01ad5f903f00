use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Banding uses the 40/70 split: scores up to 40 are Low, up to 70
    /// Medium, above that High.
    pub fn from_score(risk_score: f64) -> Self {
        if risk_score <= 40.0 {
            RiskLevel::Low
        } else if risk_score <= 70.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub risk_score: f64,
    pub risk_factor: f64,
    pub risk_level: RiskLevel,
}

/// Risk discounts effective ROI linearly, down to half at the top of the
/// scale.
pub fn risk_factor(risk_score: f64) -> f64 {
    1.0 - (risk_score / 100.0) * 0.5
}

pub fn assess_risk(risk_score: f64) -> RiskAssessment {
    RiskAssessment {
        risk_score,
        risk_factor: risk_factor(risk_score),
        risk_level: RiskLevel::from_score(risk_score),
    }
}
