use serde::{Deserialize, Serialize};

use crate::project::{ProjectType, Region};

/// Effective energy price: type base rate x region demand multiplier x
/// subsidy uplift. All values are deployment tuning, only the structure is
/// contract. Carbon price and per-beneficiary value ride along because the
/// benefit valuation shares the same tuning lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TariffSchedule {
    pub solar_base: f64,
    pub wind_base: f64,
    pub hybrid_base: f64,
    pub urban_multiplier: f64,
    pub semi_urban_multiplier: f64,
    pub rural_multiplier: f64,
    pub subsidy_uplift: f64,
    pub carbon_price_per_ton: f64,
    pub social_value_per_beneficiary: f64,
}

impl Default for TariffSchedule {
    fn default() -> Self {
        Self {
            solar_base: 0.06,
            wind_base: 0.052,
            hybrid_base: 0.065,
            urban_multiplier: 1.2,
            semi_urban_multiplier: 1.0,
            rural_multiplier: 0.8,
            subsidy_uplift: 1.1,
            carbon_price_per_ton: 50.0,
            social_value_per_beneficiary: 0.1,
        }
    }
}

impl TariffSchedule {
    pub fn price_per_mwh(
        &self,
        project_type: ProjectType,
        region: Region,
        subsidy_eligible: bool,
    ) -> f64 {
        let base = match project_type {
            ProjectType::Solar => self.solar_base,
            ProjectType::Wind => self.wind_base,
            ProjectType::Hybrid => self.hybrid_base,
        };
        let regional = match region {
            Region::Urban => self.urban_multiplier,
            Region::SemiUrban => self.semi_urban_multiplier,
            Region::Rural => self.rural_multiplier,
        };
        let uplift = if subsidy_eligible {
            self.subsidy_uplift
        } else {
            1.0
        };
        base * regional * uplift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urban_solar_with_subsidy_stacks_all_multipliers() {
        let tariff = TariffSchedule::default();
        let price = tariff.price_per_mwh(ProjectType::Solar, Region::Urban, true);
        assert!((price - 0.06 * 1.2 * 1.1).abs() < 1e-12);
    }

    #[test]
    fn rural_wind_without_subsidy_discounts_base() {
        let tariff = TariffSchedule::default();
        let price = tariff.price_per_mwh(ProjectType::Wind, Region::Rural, false);
        assert!((price - 0.052 * 0.8).abs() < 1e-12);
    }

    #[test]
    fn semi_urban_is_the_baseline_region() {
        let tariff = TariffSchedule::default();
        let price = tariff.price_per_mwh(ProjectType::Hybrid, Region::SemiUrban, false);
        assert!((price - tariff.hybrid_base).abs() < 1e-12);
    }
}
