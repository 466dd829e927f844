// ABOUTME: Nutrition policy configuration: BMR coefficients, activity factors, goal splits
// ABOUTME: Also protein-per-kg targets and hydration allowances used by the nutritionist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Policy Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use fitness_core::constants::defaults;
use fitness_core::models::{ActivityLevel, FitnessGoal};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Nutrition calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie deficit/surplus per goal
    pub goal_adjustments: GoalAdjustmentsConfig,
    /// Macro split per nutrition goal
    pub macro_splits: MacroSplitsConfig,
    /// Protein targets per kg bodyweight
    pub protein: ProteinConfig,
    /// Daily water allowance
    pub hydration: HydrationConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard training 2x/day): 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }

    /// Validate range (1.0-2.5) and strictly ascending order
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a factor is out of range or the order is broken
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sedentary < 1.0 || self.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        let factors = ActivityLevel::ALL.map(|level| self.factor(level));
        if factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }
}

/// Calorie adjustments applied to TDEE per goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Daily deficit for weight loss (500 kcal, ~0.5 kg/week)
    pub weight_loss_deficit_kcal: f64,
    /// Daily surplus for muscle gain (300-500 kcal)
    pub muscle_gain_surplus_kcal: f64,
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        Self {
            weight_loss_deficit_kcal: defaults::WEIGHT_LOSS_DEFICIT_KCAL,
            muscle_gain_surplus_kcal: defaults::MUSCLE_GAIN_SURPLUS_KCAL,
        }
    }
}

impl GoalAdjustmentsConfig {
    /// Accepted lean-bulk surplus range (kcal)
    pub const SURPLUS_RANGE_KCAL: (f64, f64) = (300.0, 500.0);

    /// Signed adjustment for a nutrition goal (kcal)
    #[must_use]
    pub fn adjustment_kcal(&self, goal: FitnessGoal) -> f64 {
        match goal {
            FitnessGoal::WeightLoss => -self.weight_loss_deficit_kcal,
            FitnessGoal::MuscleGain => self.muscle_gain_surplus_kcal,
            _ => 0.0,
        }
    }
}

/// Macro split in percent of calories (protein, carbs, fats)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fats_pct: u8,
}

impl MacroSplit {
    /// Create a split without checking the sum; call [`MacroSplit::validate`] on untrusted input
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fats_pct: u8) -> Self {
        Self {
            protein_pct,
            carbs_pct,
            fats_pct,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub fn total(&self) -> u16 {
        u16::from(self.protein_pct) + u16::from(self.carbs_pct) + u16::from(self.fats_pct)
    }

    /// Validate that the percentages sum to exactly 100
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` with the actual sum
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.total();
        if sum == 100 {
            Ok(())
        } else {
            Err(ConfigError::InvalidWeights(format!(
                "macro percentages must sum to 100, got {sum} ({}/{}/{})",
                self.protein_pct, self.carbs_pct, self.fats_pct
            )))
        }
    }
}

/// Macro split for every nutrition goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroSplitsConfig {
    /// Weight loss: 30/35/35
    pub weight_loss: MacroSplit,
    /// Muscle gain: 25/45/30
    pub muscle_gain: MacroSplit,
    /// Maintenance: 25/50/25
    pub maintenance: MacroSplit,
    /// Performance: 20/55/25
    pub performance: MacroSplit,
}

impl Default for MacroSplitsConfig {
    fn default() -> Self {
        Self {
            weight_loss: MacroSplit::new(30, 35, 35),
            muscle_gain: MacroSplit::new(25, 45, 30),
            maintenance: MacroSplit::new(25, 50, 25),
            performance: MacroSplit::new(20, 55, 25),
        }
    }
}

impl MacroSplitsConfig {
    /// Split for a goal, `None` for goals without a nutrition plan
    #[must_use]
    pub const fn for_goal(&self, goal: FitnessGoal) -> Option<MacroSplit> {
        match goal {
            FitnessGoal::WeightLoss => Some(self.weight_loss),
            FitnessGoal::MuscleGain => Some(self.muscle_gain),
            FitnessGoal::Maintenance => Some(self.maintenance),
            FitnessGoal::Performance => Some(self.performance),
            FitnessGoal::Strength | FitnessGoal::Endurance | FitnessGoal::GeneralFitness => None,
        }
    }

    /// Validate that every goal's split sums to 100
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the goal
    pub fn validate(&self) -> Result<(), ConfigError> {
        for goal in FitnessGoal::NUTRITION_GOALS {
            let Some(split) = self.for_goal(goal) else {
                continue;
            };
            let sum = split.total();
            if sum != 100 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{goal} macro percentages must sum to 100, got {sum}"
                )));
            }
        }
        Ok(())
    }
}

/// Protein intake targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProteinConfig {
    /// Weight loss and muscle gain (2.2 g/kg)
    pub body_composition_g_per_kg: f64,
    /// Everything else (1.6 g/kg)
    pub general_g_per_kg: f64,
    /// Meals and snacks the daily target is spread over
    pub meals_per_day: u8,
}

impl Default for ProteinConfig {
    fn default() -> Self {
        Self {
            body_composition_g_per_kg: defaults::PROTEIN_BODY_COMPOSITION_G_PER_KG,
            general_g_per_kg: defaults::PROTEIN_GENERAL_G_PER_KG,
            meals_per_day: defaults::PROTEIN_MEALS_PER_DAY,
        }
    }
}

impl ProteinConfig {
    /// Protein g/kg for a goal
    #[must_use]
    pub const fn g_per_kg(&self, goal: FitnessGoal) -> f64 {
        match goal {
            FitnessGoal::WeightLoss | FitnessGoal::MuscleGain => self.body_composition_g_per_kg,
            _ => self.general_g_per_kg,
        }
    }
}

/// Daily water allowance
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Base requirement (35 ml/kg)
    pub ml_per_kg: f64,
    /// Extra for active and very active levels (500 ml)
    pub high_activity_extra_ml: f64,
    /// Extra for other levels (250 ml)
    pub base_activity_extra_ml: f64,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            ml_per_kg: defaults::WATER_ML_PER_KG,
            high_activity_extra_ml: defaults::WATER_EXERCISE_HIGH_ML,
            base_activity_extra_ml: defaults::WATER_EXERCISE_BASE_ML,
        }
    }
}

impl HydrationConfig {
    /// Exercise allowance for an activity level (ml)
    #[must_use]
    pub const fn exercise_extra_ml(&self, level: ActivityLevel) -> f64 {
        if level.is_high() {
            self.high_activity_extra_ml
        } else {
            self.base_activity_extra_ml
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_default_splits_sum_to_100() {
        let splits = MacroSplitsConfig::default();
        for goal in FitnessGoal::NUTRITION_GOALS {
            assert_eq!(splits.for_goal(goal).unwrap().total(), 100, "{goal}");
        }
        assert!(splits.validate().is_ok());
    }

    #[test]
    fn test_bad_split_names_goal() {
        let splits = MacroSplitsConfig {
            performance: MacroSplit::new(20, 55, 30),
            ..MacroSplitsConfig::default()
        };
        let err = splits.validate().unwrap_err();
        assert!(err.to_string().contains("performance"));
        assert!(err.to_string().contains("105"));
    }

    #[test]
    fn test_activity_factors_must_ascend() {
        let factors = ActivityFactorsConfig {
            light: 1.6,
            ..ActivityFactorsConfig::default()
        };
        assert!(matches!(factors.validate(), Err(ConfigError::InvalidRange(_))));
        assert!(ActivityFactorsConfig::default().validate().is_ok());
    }
}
