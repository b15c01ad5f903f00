use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    Solar,
    Wind,
    Hybrid,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Solar => "Solar",
            ProjectType::Wind => "Wind",
            ProjectType::Hybrid => "Hybrid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Urban,
    Rural,
    #[serde(rename = "Semi-Urban")]
    SemiUrban,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Urban => "Urban",
            Region::Rural => "Rural",
            Region::SemiUrban => "Semi-Urban",
        }
    }
}

/// One project proposal. Field constraints (positive costs, duration 1-50,
/// risk 0-100) are enforced at the boundary before this struct reaches the
/// evaluation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub project_type: ProjectType,
    pub region: Region,
    pub capacity_mw: f64,
    pub setup_cost: f64,
    pub maintenance_cost: f64,
    pub duration_years: u32,
    pub expected_generation_mwh: f64,
    pub co2_saved_tons_per_year: f64,
    pub beneficiary_count: u64,
    pub risk_score: f64,
    pub subsidy_eligible: bool,
    pub job_creation_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_round_trips_hyphenated_name() {
        let parsed: Region = serde_json::from_str("\"Semi-Urban\"").unwrap();
        assert_eq!(parsed, Region::SemiUrban);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"Semi-Urban\"");
    }

    #[test]
    fn project_name_is_optional() {
        let raw = r#"{
            "project_type": "Solar",
            "region": "Urban",
            "capacity_mw": 100.0,
            "setup_cost": 50000000.0,
            "maintenance_cost": 2000000.0,
            "duration_years": 25,
            "expected_generation_mwh": 150000.0,
            "co2_saved_tons_per_year": 75000.0,
            "beneficiary_count": 100000,
            "risk_score": 30.0,
            "subsidy_eligible": true,
            "job_creation_count": 200
        }"#;
        let parsed: ProjectInput = serde_json::from_str(raw).unwrap();
        assert!(parsed.project_name.is_none());
        assert_eq!(parsed.project_type, ProjectType::Solar);
        assert_eq!(parsed.duration_years, 25);
    }
}
