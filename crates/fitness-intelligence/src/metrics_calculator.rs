// ABOUTME: Body metrics calculator: BMI and category, Mifflin-St Jeor BMR, TDEE estimates
// ABOUTME: Also age-predicted maximum heart rate and percent-of-max training zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics Calculator Module
//!
//! Pure functions over a [`BodyProfile`]. Every entry point validates the
//! profile against [`ProfileLimits`](crate::config::ProfileLimits) first.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - Fox, S.M. et al. (1971). Physical activity and coronary heart disease. *Ann Clin Res*, 3(6).

use std::fmt;

use fitness_core::errors::{AppError, AppResult};
use fitness_core::models::{ActivityLevel, BodyProfile, Gender};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::MaxHrAlgorithm;
use crate::config::{BmiThresholds, BmrConfig, IntelligenceConfig, ZoneBand};

/// BMI category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value; every boundary belongs to the higher category
    #[must_use]
    pub fn classify(bmi: f64, thresholds: &BmiThresholds) -> Self {
        if bmi >= thresholds.obese_min {
            Self::Obese
        } else if bmi >= thresholds.overweight_min {
            Self::Overweight
        } else if bmi >= thresholds.normal_min {
            Self::Normal
        } else {
            Self::Underweight
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }

    /// Report label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named heart-rate training zone
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrainingZone {
    /// Low intensity, aerobic base
    FatBurn,
    /// Moderate intensity, cardiovascular fitness
    Cardio,
    /// High intensity, anaerobic threshold work
    Peak,
}

impl TrainingZone {
    /// Report label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FatBurn => "Fat Burn Zone",
            Self::Cardio => "Cardio Zone",
            Self::Peak => "Peak Zone",
        }
    }
}

/// A training zone resolved to bpm for one person
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeartRateZone {
    /// Zone name
    pub zone: TrainingZone,
    /// Lower bound as percent of max HR
    pub lower_pct: u8,
    /// Upper bound as percent of max HR
    pub upper_pct: u8,
    /// Lower bound (bpm)
    pub min_bpm: u32,
    /// Upper bound (bpm)
    pub max_bpm: u32,
}

impl HeartRateZone {
    fn resolve(zone: TrainingZone, band: ZoneBand, max_hr: f64) -> Self {
        let (min_bpm, max_bpm) = band.bpm_range(max_hr);
        Self {
            zone,
            lower_pct: band.lower_pct,
            upper_pct: band.upper_pct,
            min_bpm,
            max_bpm,
        }
    }
}

/// TDEE at one activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TdeeEstimate {
    /// Activity level
    pub activity: ActivityLevel,
    /// Multiplier applied to BMR
    pub multiplier: f64,
    /// Estimated TDEE (kcal/day)
    pub tdee: f64,
}

/// Complete metrics for one profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsResult {
    /// Body Mass Index (kg/m²)
    pub bmi: f64,
    /// BMI category
    pub bmi_category: BmiCategory,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Sedentary TDEE (kcal/day); the profile carries no activity level
    pub tdee: f64,
    /// TDEE at every activity level, least to most active
    pub tdee_estimates: Vec<TdeeEstimate>,
    /// Maximum heart rate (bpm)
    pub max_heart_rate: u32,
    /// Formula used for maximum heart rate
    pub max_hr_algorithm: MaxHrAlgorithm,
    /// Training zones in ascending intensity
    pub heart_rate_zones: Vec<HeartRateZone>,
}

/// Body Mass Index: `weight_kg / height_m²`
#[must_use]
pub fn calculate_bmi(profile: &BodyProfile) -> f64 {
    let height_m = profile.height_m();
    profile.weight_kg / (height_m * height_m)
}

/// Mifflin-St Jeor BMR without validation
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn calculate_mifflin_st_jeor(profile: &BodyProfile, config: &BmrConfig) -> f64 {
    let gender_constant = match profile.gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };
    config.msj_age_coef.mul_add(
        f64::from(profile.age),
        config
            .msj_weight_coef
            .mul_add(profile.weight_kg, config.msj_height_coef * profile.height_cm),
    ) + gender_constant
}

/// Validated BMR
///
/// # Errors
///
/// Returns `InvalidInput` if the profile is invalid or its BMR is not positive
pub fn compute_bmr(profile: &BodyProfile, config: &IntelligenceConfig) -> AppResult<f64> {
    config.metrics.limits.check(profile)?;
    let bmr = calculate_mifflin_st_jeor(profile, &config.nutrition.bmr);
    if bmr <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Profile yields a non-positive BMR ({bmr:.2} kcal/day); check weight, height and age"
        )));
    }
    Ok(bmr)
}

/// Compute BMI, BMR, TDEE estimates, max HR and training zones
///
/// # Errors
///
/// Returns `InvalidInput` for non-positive, non-finite or implausible profile fields
pub fn compute_metrics(
    profile: &BodyProfile,
    config: &IntelligenceConfig,
) -> AppResult<MetricsResult> {
    let bmr = compute_bmr(profile, config)?;
    let bmi = calculate_bmi(profile);
    let bmi_category = BmiCategory::classify(bmi, &config.metrics.bmi);

    let factors = &config.nutrition.activity_factors;
    let tdee_estimates: Vec<TdeeEstimate> = ActivityLevel::ALL
        .iter()
        .map(|&activity| {
            let multiplier = factors.factor(activity);
            TdeeEstimate {
                activity,
                multiplier,
                tdee: bmr * multiplier,
            }
        })
        .collect();
    let tdee = bmr * factors.factor(ActivityLevel::Sedentary);

    let algorithm = config.metrics.max_hr_algorithm;
    let max_hr = algorithm.estimate(profile.age, profile.gender).round();
    if max_hr <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Age {} yields a non-positive maximum heart rate",
            profile.age
        )));
    }

    let heart_rate_zones = config
        .metrics
        .heart_rate_zones
        .bands()
        .into_iter()
        .map(|(zone, band)| HeartRateZone::resolve(zone, band, max_hr))
        .collect();

    debug!(
        bmi,
        bmi_category = bmi_category.as_str(),
        bmr,
        max_hr,
        algorithm = algorithm.name(),
        "Computed body metrics"
    );

    Ok(MetricsResult {
        bmi,
        bmi_category,
        bmr,
        tdee,
        tdee_estimates,
        max_heart_rate: max_hr as u32,
        max_hr_algorithm: algorithm,
        heart_rate_zones,
    })
}

/// Compute metrics for many profiles in parallel, preserving input order
#[must_use]
pub fn compute_metrics_batch(
    profiles: &[BodyProfile],
    config: &IntelligenceConfig,
) -> Vec<AppResult<MetricsResult>> {
    profiles
        .par_iter()
        .map(|profile| compute_metrics(profile, config))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn reference_profile() -> BodyProfile {
        BodyProfile::new(75.0, 175.0, 30, Gender::Male).unwrap()
    }

    #[test]
    fn test_bmi_category_lower_bounds_closed() {
        let thresholds = BmiThresholds::default();
        assert_eq!(BmiCategory::classify(18.49, &thresholds), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5, &thresholds), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0, &thresholds), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0, &thresholds), BmiCategory::Obese);
    }

    #[test]
    fn test_female_bmr_constant() {
        let profile = BodyProfile::new(60.0, 165.0, 25, Gender::Female).unwrap();
        let bmr = calculate_mifflin_st_jeor(&profile, &BmrConfig::default());
        assert!((bmr - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn test_reference_profile_zones() {
        let metrics = compute_metrics(&reference_profile(), &IntelligenceConfig::default()).unwrap();
        assert_eq!(metrics.max_heart_rate, 190);
        let bounds: Vec<(u32, u32)> = metrics
            .heart_rate_zones
            .iter()
            .map(|zone| (zone.min_bpm, zone.max_bpm))
            .collect();
        assert_eq!(bounds, vec![(114, 133), (133, 152), (152, 171)]);
    }

    #[test]
    fn test_non_positive_bmr_rejected() {
        // Tiny, elderly profile: 10*2 + 6.25*20 - 5*110 - 161 < 0
        let profile = BodyProfile::new(2.0, 20.0, 110, Gender::Female).unwrap();
        let err = compute_metrics(&profile, &IntelligenceConfig::default()).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
