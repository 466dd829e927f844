// ABOUTME: Intelligence policy configuration for the metrics and nutrition calculators
// ABOUTME: Defaults, FITNESS_* environment overrides, validation, and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Zone percentages, macro splits, calorie adjustments, activity multipliers
//! and BMI thresholds are policy, not physiology. They live here so they can
//! be tuned without touching the calculators. Calculators receive the config
//! by reference; [`IntelligenceConfig::global`] is only for outer layers.
//!
//! # Module Structure
//!
//! - `metrics` - BMI thresholds, heart-rate zones, max-HR algorithm, profile limits
//! - `nutrition` - BMR coefficients, activity factors, goal adjustments, splits
//! - `error` - Validation errors

/// Validation errors raised while loading policy
pub mod error;
/// Body-metrics policy
pub mod metrics;
/// Nutrition policy
pub mod nutrition;

pub use error::ConfigError;
pub use metrics::{BmiThresholds, HeartRateZonesConfig, MetricsConfig, ProfileLimits, ZoneBand};
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, HydrationConfig, MacroSplit,
    MacroSplitsConfig, NutritionConfig, ProteinConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for BMI, heart-rate zones and profile limits
    pub metrics: MetricsConfig,
    /// Configuration for TDEE, calorie targets and macro splits
    pub nutrition: NutritionConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_metrics()?;
        self.validate_nutrition()
    }

    fn validate_metrics(&self) -> Result<(), ConfigError> {
        let metrics = &self.metrics;

        let bmi = &metrics.bmi;
        if bmi.normal_min <= 0.0
            || bmi.normal_min >= bmi.overweight_min
            || bmi.overweight_min >= bmi.obese_min
        {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be positive and ascending",
            ));
        }

        metrics.heart_rate_zones.validate()?;

        let limits = &metrics.limits;
        if limits.max_weight_kg <= 0.0 || limits.max_height_cm <= 0.0 || limits.max_age_years == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Profile limits must be positive",
            ));
        }

        Ok(())
    }

    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if nutr.bmr.msj_weight_coef <= 0.0 || nutr.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        nutr.activity_factors.validate()?;

        let adjustments = &nutr.goal_adjustments;
        if adjustments.weight_loss_deficit_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weight loss deficit must be positive",
            ));
        }
        let (surplus_min, surplus_max) = GoalAdjustmentsConfig::SURPLUS_RANGE_KCAL;
        if !(surplus_min..=surplus_max).contains(&adjustments.muscle_gain_surplus_kcal) {
            return Err(ConfigError::ValueOutOfRange(
                "Muscle gain surplus must be between 300 and 500 kcal",
            ));
        }

        nutr.macro_splits.validate()?;

        if nutr.protein.general_g_per_kg <= 0.0
            || nutr.protein.body_composition_g_per_kg > 3.0
            || nutr.protein.general_g_per_kg > nutr.protein.body_composition_g_per_kg
        {
            return Err(ConfigError::ValueOutOfRange(
                "Protein targets must be positive, at most 3.0 g/kg, general <= body composition",
            ));
        }
        if nutr.protein.meals_per_day == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Protein meals per day must be at least 1",
            ));
        }

        if nutr.hydration.ml_per_kg <= 0.0
            || nutr.hydration.base_activity_extra_ml < 0.0
            || nutr.hydration.high_activity_extra_ml < nutr.hydration.base_activity_extra_ml
        {
            return Err(ConfigError::ValueOutOfRange(
                "Hydration allowances must be positive and high activity >= base",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Metrics overrides
        Self::apply_env_var("FITNESS_BMI_NORMAL_MIN", &mut self.metrics.bmi.normal_min)?;
        Self::apply_env_var(
            "FITNESS_BMI_OVERWEIGHT_MIN",
            &mut self.metrics.bmi.overweight_min,
        )?;
        Self::apply_env_var("FITNESS_BMI_OBESE_MIN", &mut self.metrics.bmi.obese_min)?;
        Self::apply_env_var(
            "FITNESS_MAX_HR_ALGORITHM",
            &mut self.metrics.max_hr_algorithm,
        )?;

        let zones = &mut self.metrics.heart_rate_zones;
        Self::apply_env_var("FITNESS_ZONE_FAT_BURN_LOWER_PCT", &mut zones.fat_burn.lower_pct)?;
        Self::apply_env_var("FITNESS_ZONE_FAT_BURN_UPPER_PCT", &mut zones.fat_burn.upper_pct)?;
        Self::apply_env_var("FITNESS_ZONE_CARDIO_LOWER_PCT", &mut zones.cardio.lower_pct)?;
        Self::apply_env_var("FITNESS_ZONE_CARDIO_UPPER_PCT", &mut zones.cardio.upper_pct)?;
        Self::apply_env_var("FITNESS_ZONE_PEAK_LOWER_PCT", &mut zones.peak.lower_pct)?;
        Self::apply_env_var("FITNESS_ZONE_PEAK_UPPER_PCT", &mut zones.peak.upper_pct)?;

        let limits = &mut self.metrics.limits;
        Self::apply_env_var("FITNESS_MAX_WEIGHT_KG", &mut limits.max_weight_kg)?;
        Self::apply_env_var("FITNESS_MAX_HEIGHT_CM", &mut limits.max_height_cm)?;
        Self::apply_env_var("FITNESS_MAX_AGE_YEARS", &mut limits.max_age_years)?;

        // Nutrition overrides
        let adjustments = &mut self.nutrition.goal_adjustments;
        Self::apply_env_var(
            "FITNESS_WEIGHT_LOSS_DEFICIT_KCAL",
            &mut adjustments.weight_loss_deficit_kcal,
        )?;
        Self::apply_env_var(
            "FITNESS_MUSCLE_GAIN_SURPLUS_KCAL",
            &mut adjustments.muscle_gain_surplus_kcal,
        )?;

        let protein = &mut self.nutrition.protein;
        Self::apply_env_var(
            "FITNESS_PROTEIN_BODY_COMPOSITION_G_PER_KG",
            &mut protein.body_composition_g_per_kg,
        )?;
        Self::apply_env_var(
            "FITNESS_PROTEIN_GENERAL_G_PER_KG",
            &mut protein.general_g_per_kg,
        )?;
        Self::apply_env_var("FITNESS_PROTEIN_MEALS_PER_DAY", &mut protein.meals_per_day)?;

        Self::apply_env_var(
            "FITNESS_WATER_ML_PER_KG",
            &mut self.nutrition.hydration.ml_per_kg,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_surplus_outside_range_rejected() {
        let mut config = IntelligenceConfig::default();
        config.nutrition.goal_adjustments.muscle_gain_surplus_kcal = 750.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_bmi_thresholds_must_ascend() {
        let mut config = IntelligenceConfig::default();
        config.metrics.bmi.obese_min = 24.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }
}
