use greenlight_core::ProjectInput;

/// Boundary enforcement of the input constraints. The evaluation pipeline
/// assumes these already hold and performs no re-validation.
pub fn validate(project: &ProjectInput) -> Result<(), String> {
    let positive = [
        ("capacity_mw", project.capacity_mw),
        ("setup_cost", project.setup_cost),
        ("maintenance_cost", project.maintenance_cost),
        ("expected_generation_mwh", project.expected_generation_mwh),
        ("co2_saved_tons_per_year", project.co2_saved_tons_per_year),
    ];
    for (name, value) in positive {
        if !value.is_finite() {
            return Err(format!("{name} must be a finite number"));
        }
        if value <= 0.0 {
            return Err(format!("{name} must be greater than 0"));
        }
    }

    if project.beneficiary_count == 0 {
        return Err("beneficiary_count must be greater than 0".to_string());
    }
    if project.job_creation_count == 0 {
        return Err("job_creation_count must be greater than 0".to_string());
    }
    if project.duration_years == 0 || project.duration_years > 50 {
        return Err("duration_years must be between 1 and 50".to_string());
    }
    if !project.risk_score.is_finite() || project.risk_score < 0.0 || project.risk_score > 100.0 {
        return Err("risk_score must be between 0 and 100".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenlight_core::{ProjectType, Region};

    fn valid() -> ProjectInput {
        ProjectInput {
            project_name: None,
            project_type: ProjectType::Hybrid,
            region: Region::SemiUrban,
            capacity_mw: 75.0,
            setup_cost: 30_000_000.0,
            maintenance_cost: 1_500_000.0,
            duration_years: 20,
            expected_generation_mwh: 120_000.0,
            co2_saved_tons_per_year: 30_000.0,
            beneficiary_count: 25_000,
            risk_score: 35.0,
            subsidy_eligible: true,
            job_creation_count: 150,
        }
    }

    #[test]
    fn accepts_a_well_formed_project() {
        assert!(validate(&valid()).is_ok());
    }

    #[test]
    fn rejects_non_positive_costs() {
        let mut project = valid();
        project.setup_cost = 0.0;
        assert!(validate(&project).unwrap_err().contains("setup_cost"));

        let mut project = valid();
        project.maintenance_cost = -1.0;
        assert!(validate(&project).unwrap_err().contains("maintenance_cost"));
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let mut project = valid();
        project.capacity_mw = f64::NAN;
        assert!(validate(&project).unwrap_err().contains("finite"));

        let mut project = valid();
        project.risk_score = f64::INFINITY;
        assert!(validate(&project).unwrap_err().contains("risk_score"));
    }

    #[test]
    fn rejects_out_of_range_duration() {
        let mut project = valid();
        project.duration_years = 0;
        assert!(validate(&project).is_err());
        project.duration_years = 51;
        assert!(validate(&project).is_err());
        project.duration_years = 50;
        assert!(validate(&project).is_ok());
    }

    #[test]
    fn rejects_out_of_range_risk() {
        let mut project = valid();
        project.risk_score = 100.1;
        assert!(validate(&project).is_err());
        project.risk_score = 100.0;
        assert!(validate(&project).is_ok());
        project.risk_score = 0.0;
        assert!(validate(&project).is_ok());
    }

    #[test]
    fn rejects_zero_counts() {
        let mut project = valid();
        project.beneficiary_count = 0;
        assert!(validate(&project).is_err());

        let mut project = valid();
        project.job_creation_count = 0;
        assert!(validate(&project).is_err());
    }
}
