// ABOUTME: Metrics policy configuration: BMI thresholds, heart-rate zones, profile limits
// ABOUTME: Zone bands are percent-of-max-HR pairs; limits bound plausible body measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_core::constants::defaults;
use fitness_core::constants::units::PERCENT;
use fitness_core::errors::{AppError, AppResult};
use fitness_core::models::BodyProfile;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::algorithms::MaxHrAlgorithm;
use crate::metrics_calculator::TrainingZone;

/// Metrics calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// BMI category boundaries
    pub bmi: BmiThresholds,
    /// Heart-rate training zone bands
    pub heart_rate_zones: HeartRateZonesConfig,
    /// Maximum heart rate formula
    pub max_hr_algorithm: MaxHrAlgorithm,
    /// Plausibility ceilings for body measurements
    pub limits: ProfileLimits,
}

/// BMI category lower bounds (each inclusive)
///
/// Reference: WHO (2000). Obesity: preventing and managing the global epidemic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BmiThresholds {
    /// Lower bound of "normal" (18.5)
    pub normal_min: f64,
    /// Lower bound of "overweight" (25.0)
    pub overweight_min: f64,
    /// Lower bound of "obese" (30.0)
    pub obese_min: f64,
}

impl Default for BmiThresholds {
    fn default() -> Self {
        Self {
            normal_min: defaults::BMI_NORMAL_MIN,
            overweight_min: defaults::BMI_OVERWEIGHT_MIN,
            obese_min: defaults::BMI_OBESE_MIN,
        }
    }
}

/// One zone as a percent-of-max-HR band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneBand {
    /// Lower bound (percent of max HR)
    pub lower_pct: u8,
    /// Upper bound (percent of max HR)
    pub upper_pct: u8,
}

impl ZoneBand {
    /// Create a band from a `(lower, upper)` percent pair
    #[must_use]
    pub const fn new((lower_pct, upper_pct): (u8, u8)) -> Self {
        Self {
            lower_pct,
            upper_pct,
        }
    }

    /// Bpm range for a max heart rate: `round(max_hr x pct)` on both ends
    #[must_use]
    pub fn bpm_range(&self, max_hr: f64) -> (u32, u32) {
        let bpm = |pct: u8| (max_hr * f64::from(pct) / PERCENT).round() as u32;
        (bpm(self.lower_pct), bpm(self.upper_pct))
    }
}

/// Heart-rate zone configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeartRateZonesConfig {
    /// Fat-burn zone (60-70%)
    pub fat_burn: ZoneBand,
    /// Cardio zone (70-80%)
    pub cardio: ZoneBand,
    /// Peak zone (80-90%)
    pub peak: ZoneBand,
}

impl Default for HeartRateZonesConfig {
    fn default() -> Self {
        Self {
            fat_burn: ZoneBand::new(defaults::FAT_BURN_ZONE_PERCENT),
            cardio: ZoneBand::new(defaults::CARDIO_ZONE_PERCENT),
            peak: ZoneBand::new(defaults::PEAK_ZONE_PERCENT),
        }
    }
}

impl HeartRateZonesConfig {
    /// Zones in ascending intensity order
    #[must_use]
    pub const fn bands(&self) -> [(TrainingZone, ZoneBand); 3] {
        [
            (TrainingZone::FatBurn, self.fat_burn),
            (TrainingZone::Cardio, self.cardio),
            (TrainingZone::Peak, self.peak),
        ]
    }

    /// Validate that bands are within 0-100, non-empty, sorted and non-overlapping
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first offending band
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut previous_upper = 0;
        for (_, band) in self.bands() {
            if band.upper_pct > 100 {
                return Err(ConfigError::ValueOutOfRange(
                    "Heart rate zone percentages must be between 0 and 100",
                ));
            }
            if band.lower_pct >= band.upper_pct {
                return Err(ConfigError::InvalidRange(
                    "Heart rate zone lower bound must be < upper bound",
                ));
            }
            if band.lower_pct < previous_upper {
                return Err(ConfigError::InvalidRange(
                    "Heart rate zones must be ascending and must not overlap",
                ));
            }
            previous_upper = band.upper_pct;
        }
        Ok(())
    }
}

/// Upper plausibility limits for body measurements
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProfileLimits {
    /// Maximum bodyweight (kg)
    pub max_weight_kg: f64,
    /// Maximum height (cm)
    pub max_height_cm: f64,
    /// Maximum age (years)
    pub max_age_years: u32,
}

impl Default for ProfileLimits {
    fn default() -> Self {
        Self {
            max_weight_kg: defaults::MAX_WEIGHT_KG,
            max_height_cm: defaults::MAX_HEIGHT_CM,
            max_age_years: defaults::MAX_AGE_YEARS,
        }
    }
}

impl ProfileLimits {
    /// Validate a profile's positivity invariants and plausibility ceilings
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field
    pub fn check(&self, profile: &BodyProfile) -> AppResult<()> {
        profile.validate()?;
        if profile.weight_kg > self.max_weight_kg {
            return Err(AppError::invalid_input(format!(
                "Weight must be at most {} kg, got {}",
                self.max_weight_kg, profile.weight_kg
            )));
        }
        if profile.height_cm > self.max_height_cm {
            return Err(AppError::invalid_input(format!(
                "Height must be at most {} cm, got {}",
                self.max_height_cm, profile.height_cm
            )));
        }
        if profile.age > self.max_age_years {
            return Err(AppError::invalid_input(format!(
                "Age must be between 1 and {} years, got {}",
                self.max_age_years, profile.age
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_bpm_rounds_both_ends() {
        let band = ZoneBand::new((60, 70));
        assert_eq!(band.bpm_range(190.0), (114, 133));
        let band = ZoneBand::new((70, 80));
        assert_eq!(band.bpm_range(187.0), (131, 150));
    }

    #[test]
    fn test_overlapping_zones_rejected() {
        let zones = HeartRateZonesConfig {
            cardio: ZoneBand::new((65, 80)),
            ..HeartRateZonesConfig::default()
        };
        assert!(matches!(zones.validate(), Err(ConfigError::InvalidRange(_))));
        assert!(HeartRateZonesConfig::default().validate().is_ok());
    }
}
