use serde::{Deserialize, Serialize};

use super::metrics::{number, present, MetricValue, SupplierMetrics};

/// Below this ratio the authoritative scorer may cap results.
pub const CAP_WARNING_RATIO: f64 = 0.70;
pub const CAPPED_SCORE: u8 = 50;

/// Key disclosures the authoritative scorer relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMetric {
    EmissionIntensity,
    RenewableEnergyPercent,
    WaterIntensity,
    WasteIntensity,
    InjuryRate,
    TrainingHours,
    WageRatio,
    Diversity,
    BoardDiversity,
    BoardIndependence,
    TransparencyScore,
    AntiCorruptionPolicy,
}

impl KeyMetric {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::EmissionIntensity,
            Self::RenewableEnergyPercent,
            Self::WaterIntensity,
            Self::WasteIntensity,
            Self::InjuryRate,
            Self::TrainingHours,
            Self::WageRatio,
            Self::Diversity,
            Self::BoardDiversity,
            Self::BoardIndependence,
            Self::TransparencyScore,
            Self::AntiCorruptionPolicy,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EmissionIntensity => "emission_intensity",
            Self::RenewableEnergyPercent => "renewable_energy_percent",
            Self::WaterIntensity => "water_intensity",
            Self::WasteIntensity => "waste_intensity",
            Self::InjuryRate => "injury_rate",
            Self::TrainingHours => "training_hours",
            Self::WageRatio => "wage_ratio",
            Self::Diversity => "diversity",
            Self::BoardDiversity => "board_diversity",
            Self::BoardIndependence => "board_independence",
            Self::TransparencyScore => "transparency_score",
            Self::AntiCorruptionPolicy => "anti_corruption_policy",
        }
    }

    /// Intensity metrics need positive revenue; zero-valued numerators still count.
    pub fn is_disclosed(self, metrics: &SupplierMetrics) -> bool {
        let has_revenue = || number(&metrics.revenue) > 0.0;
        match self {
            Self::EmissionIntensity => {
                let emissions = metrics
                    .total_emissions
                    .as_ref()
                    .or(metrics.co2_emissions.as_ref());
                has_revenue() && emissions.map(MetricValue::is_number).unwrap_or(false)
            }
            Self::RenewableEnergyPercent => present(&metrics.renewable_energy_percent),
            Self::WaterIntensity => has_revenue() && present(&metrics.water_usage),
            Self::WasteIntensity => has_revenue() && present(&metrics.waste_generated),
            Self::InjuryRate => present(&metrics.injury_rate),
            Self::TrainingHours => present(&metrics.training_hours),
            Self::WageRatio => present(&metrics.living_wage_ratio),
            Self::Diversity => {
                present(&metrics.gender_diversity_percent)
                    || present(&metrics.diversity_inclusion_score)
            }
            Self::BoardDiversity => present(&metrics.board_diversity),
            Self::BoardIndependence => present(&metrics.board_independence),
            Self::TransparencyScore => present(&metrics.transparency_score),
            Self::AntiCorruptionPolicy => metrics
                .anti_corruption_policy
                .as_ref()
                .map(MetricValue::is_flag)
                .unwrap_or(false),
        }
    }
}

/// Share of the key disclosure checklist a record satisfies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessResult {
    pub present: u32,
    pub total: u32,
    pub ratio: f64,
    pub missing: Vec<KeyMetric>,
}

impl CompletenessResult {
    pub fn below_cap_threshold(&self) -> bool {
        self.ratio < CAP_WARNING_RATIO
    }

    /// Display hint about the authoritative scorer; nothing here enforces the cap.
    pub fn cap_warning(&self) -> Option<String> {
        if self.below_cap_threshold() {
            Some(format!(
                "Data completeness is {:.0}%: scores may be capped at {} if below {:.0}%",
                self.ratio * 100.0,
                CAPPED_SCORE,
                CAP_WARNING_RATIO * 100.0
            ))
        } else {
            None
        }
    }
}

pub fn estimate_completeness(metrics: &SupplierMetrics) -> CompletenessResult {
    let mut present = 0u32;
    let mut total = 0u32;
    let mut missing = Vec::new();

    for check in KeyMetric::ordered() {
        total += 1;
        if check.is_disclosed(metrics) {
            present += 1;
        } else {
            missing.push(check);
        }
    }

    let ratio = if total > 0 {
        f64::from(present) / f64::from(total)
    } else {
        0.0
    };

    CompletenessResult {
        present,
        total,
        ratio,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disclosed() -> SupplierMetrics {
        SupplierMetrics {
            revenue: Some(100.0.into()),
            total_emissions: Some(50.0.into()),
            renewable_energy_percent: Some(20.0.into()),
            water_usage: Some(0.0.into()),
            waste_generated: Some(0.0.into()),
            injury_rate: Some(2.0.into()),
            training_hours: Some(10.0.into()),
            living_wage_ratio: Some(1.0.into()),
            gender_diversity_percent: Some(40.0.into()),
            board_diversity: Some(0.5.into()),
            board_independence: Some(60.0.into()),
            transparency_score: Some(0.7.into()),
            anti_corruption_policy: Some(true.into()),
            ..SupplierMetrics::default()
        }
    }

    #[test]
    fn empty_record_discloses_nothing() {
        let result = estimate_completeness(&SupplierMetrics::default());
        assert_eq!(result.present, 0);
        assert_eq!(result.total, 12);
        assert_eq!(result.ratio, 0.0);
        assert_eq!(result.missing.len(), 12);
        assert!(result.cap_warning().is_some());
    }

    #[test]
    fn full_disclosure_counts_zero_valued_intensities() {
        let result = estimate_completeness(&disclosed());
        assert_eq!(result.present, 12);
        assert_eq!(result.total, 12);
        assert_eq!(result.ratio, 1.0);
        assert!(result.missing.is_empty());
        assert_eq!(result.cap_warning(), None);
    }

    #[test]
    fn textual_policy_flag_does_not_count() {
        let mut metrics = disclosed();
        metrics.anti_corruption_policy = Some("true".into());
        let result = estimate_completeness(&metrics);
        assert_eq!(result.present, 11);
        assert_eq!(result.missing, vec![KeyMetric::AntiCorruptionPolicy]);
    }

    #[test]
    fn intensities_require_positive_revenue() {
        let mut metrics = disclosed();
        metrics.revenue = Some(0.0.into());
        let result = estimate_completeness(&metrics);
        assert_eq!(result.present, 9);
        assert_eq!(
            result.missing,
            vec![
                KeyMetric::EmissionIntensity,
                KeyMetric::WaterIntensity,
                KeyMetric::WasteIntensity
            ]
        );
    }

    #[test]
    fn co2_emissions_stand_in_for_total_emissions() {
        let mut metrics = disclosed();
        metrics.total_emissions = None;
        metrics.co2_emissions = Some(0.0.into());
        assert!(KeyMetric::EmissionIntensity.is_disclosed(&metrics));

        metrics.co2_emissions = Some("1200".into());
        assert!(!KeyMetric::EmissionIntensity.is_disclosed(&metrics));
    }

    #[test]
    fn either_diversity_measure_satisfies_the_check() {
        let metrics = SupplierMetrics {
            diversity_inclusion_score: Some(0.0.into()),
            ..SupplierMetrics::default()
        };
        assert!(KeyMetric::Diversity.is_disclosed(&metrics));
    }

    #[test]
    fn empty_text_is_missing() {
        let metrics = SupplierMetrics {
            injury_rate: Some("".into()),
            training_hours: Some("12".into()),
            ..SupplierMetrics::default()
        };
        let result = estimate_completeness(&metrics);
        assert!(result.missing.contains(&KeyMetric::InjuryRate));
        assert!(!result.missing.contains(&KeyMetric::TrainingHours));
    }
}
