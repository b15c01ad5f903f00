use greenlight_core::{ProjectInput, ProjectType, Region};

/// Canonical model input layout: the nine numeric fields in dataset column
/// order, then one-hot project type and region, then the subsidy flag.
pub const FEATURE_NAMES: [&str; 16] = [
    "capacity_mw",
    "setup_cost",
    "maintenance_cost",
    "duration_years",
    "expected_generation_mwh",
    "co2_saved_tons_per_year",
    "beneficiary_count",
    "risk_score",
    "job_creation_count",
    "type_solar",
    "type_wind",
    "type_hybrid",
    "region_urban",
    "region_rural",
    "region_semi_urban",
    "subsidy_eligible",
];

#[derive(Debug, Clone)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .and_then(|index| self.values.get(index).copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

pub fn encode_features(project: &ProjectInput) -> FeatureVector {
    let one_hot = |hit: bool| if hit { 1.0 } else { 0.0 };
    let values = vec![
        project.capacity_mw,
        project.setup_cost,
        project.maintenance_cost,
        f64::from(project.duration_years),
        project.expected_generation_mwh,
        project.co2_saved_tons_per_year,
        project.beneficiary_count as f64,
        project.risk_score,
        project.job_creation_count as f64,
        one_hot(project.project_type == ProjectType::Solar),
        one_hot(project.project_type == ProjectType::Wind),
        one_hot(project.project_type == ProjectType::Hybrid),
        one_hot(project.region == Region::Urban),
        one_hot(project.region == Region::Rural),
        one_hot(project.region == Region::SemiUrban),
        one_hot(project.subsidy_eligible),
    ];
    FeatureVector { values }
}
