// ABOUTME: Nutrition calculator: TDEE, goal-adjusted calorie targets, and macro splits
// ABOUTME: Converts split percentages to grams with 4/4/9 kcal per gram, plus protein and water
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Composes with the metrics calculator's BMR. Grams are always derived from
//! the exact (unrounded) calorie target, so `protein_g·4 + carbs_g·4 +
//! fats_g·9` reproduces it; `target_calories` is that target rounded.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). *American Journal of Clinical Nutrition*, 51(2), 241-247.
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use fitness_core::constants::energy::{
    CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM,
};
use fitness_core::constants::units::{ML_PER_GLASS, PERCENT};
use fitness_core::errors::{AppError, AppResult};
use fitness_core::models::{ActivityLevel, BodyProfile, FitnessGoal};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{IntelligenceConfig, MacroSplit};
use crate::metrics_calculator::compute_bmr;

/// How the calorie target was derived from the body profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyBudget {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Activity level used
    pub activity: ActivityLevel,
    /// Multiplier applied to BMR
    pub activity_multiplier: f64,
    /// Adjustment actually applied to TDEE (kcal, signed)
    pub adjustment_kcal: f64,
    /// Whether the weight-loss deficit was cut short by the BMR floor
    pub floored_at_bmr: bool,
    /// Unrounded calorie target (kcal/day)
    pub exact_target_kcal: f64,
}

/// Daily protein target from bodyweight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProteinGuidance {
    /// Grams per kg bodyweight
    pub g_per_kg: f64,
    /// Daily target (g)
    pub daily_g: f64,
    /// Meals and snacks per day
    pub meals_per_day: u8,
    /// Per meal (g)
    pub per_meal_g: f64,
}

/// Daily water target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HydrationPlan {
    /// Bodyweight-based requirement (ml)
    pub base_ml: f64,
    /// Exercise allowance (ml)
    pub exercise_ml: f64,
    /// Total (ml)
    pub total_ml: f64,
    /// Total in 250 ml glasses
    pub glasses: f64,
}

/// Calorie target and macro breakdown for a nutrition goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionResult {
    /// Nutrition goal
    pub goal: FitnessGoal,
    /// Daily calorie target, rounded (kcal)
    pub target_calories: u32,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fats (g)
    pub fats_g: f64,
    /// Percent split the grams were derived from
    pub split: MacroSplit,
    /// Meals and snacks the daily protein is spread across
    pub meals_per_day: u8,
    /// Present when computed from a body profile
    pub energy: Option<EnergyBudget>,
    /// Present when computed from a body profile
    pub protein_guidance: Option<ProteinGuidance>,
    /// Present when computed from a body profile
    pub hydration: Option<HydrationPlan>,
}

impl NutritionResult {
    /// Calories implied by the macro grams (4/4/9)
    #[must_use]
    pub fn macro_calories(&self) -> f64 {
        FAT_KCAL_PER_GRAM.mul_add(
            self.fats_g,
            PROTEIN_KCAL_PER_GRAM.mul_add(self.protein_g, CARBS_KCAL_PER_GRAM * self.carbs_g),
        )
    }
}

/// Total Daily Energy Expenditure: BMR x activity multiplier
///
/// # Errors
///
/// Returns `InvalidInput` if the profile is invalid
pub fn compute_tdee(
    profile: &BodyProfile,
    activity: ActivityLevel,
    config: &IntelligenceConfig,
) -> AppResult<f64> {
    let bmr = compute_bmr(profile, config)?;
    Ok(bmr * config.nutrition.activity_factors.factor(activity))
}

/// Calorie target and macros for a profile using the configured split for `goal`
///
/// # Errors
///
/// Returns `InvalidInput` if the profile is invalid or `goal` has no nutrition plan
pub fn compute_nutrition_needs(
    profile: &BodyProfile,
    activity: ActivityLevel,
    goal: FitnessGoal,
    config: &IntelligenceConfig,
) -> AppResult<NutritionResult> {
    let goal = goal.require_nutrition_goal()?;
    let split = config
        .nutrition
        .macro_splits
        .for_goal(goal)
        .ok_or_else(|| AppError::internal(format!("No macro split configured for {goal}")))?;
    build_nutrition_result(profile, activity, goal, split, config)
}

/// Same as [`compute_nutrition_needs`] with a caller-supplied split
///
/// # Errors
///
/// Returns `InvalidInput` if the split does not sum to 100, the profile is
/// invalid, or `goal` has no nutrition plan
pub fn compute_nutrition_needs_with_split(
    profile: &BodyProfile,
    activity: ActivityLevel,
    goal: FitnessGoal,
    split: MacroSplit,
    config: &IntelligenceConfig,
) -> AppResult<NutritionResult> {
    split
        .validate()
        .map_err(|e| AppError::invalid_input(e.to_string()))?;
    let goal = goal.require_nutrition_goal()?;
    build_nutrition_result(profile, activity, goal, split, config)
}

/// Macro targets for a known calorie budget, without a body profile
///
/// # Errors
///
/// Returns `InvalidInput` if calories are zero or `goal` has no nutrition plan
pub fn compute_macro_targets(
    goal: FitnessGoal,
    calories: u32,
    config: &IntelligenceConfig,
) -> AppResult<NutritionResult> {
    let goal = goal.require_nutrition_goal()?;
    if calories == 0 {
        return Err(AppError::invalid_input(
            "Calories must be a positive number of kcal",
        ));
    }
    let split = config
        .nutrition
        .macro_splits
        .for_goal(goal)
        .ok_or_else(|| AppError::internal(format!("No macro split configured for {goal}")))?;
    let (protein_g, carbs_g, fats_g) = macro_grams(split, f64::from(calories));

    Ok(NutritionResult {
        goal,
        target_calories: calories,
        protein_g,
        carbs_g,
        fats_g,
        split,
        meals_per_day: config.nutrition.protein.meals_per_day,
        energy: None,
        protein_guidance: None,
        hydration: None,
    })
}

/// Grams of (protein, carbs, fats) for a split of `calories`
#[must_use]
pub fn macro_grams(split: MacroSplit, calories: f64) -> (f64, f64, f64) {
    let grams = |pct: u8, kcal_per_gram: f64| f64::from(pct) * calories / kcal_per_gram / PERCENT;
    (
        grams(split.protein_pct, PROTEIN_KCAL_PER_GRAM),
        grams(split.carbs_pct, CARBS_KCAL_PER_GRAM),
        grams(split.fats_pct, FAT_KCAL_PER_GRAM),
    )
}

fn build_nutrition_result(
    profile: &BodyProfile,
    activity: ActivityLevel,
    goal: FitnessGoal,
    split: MacroSplit,
    config: &IntelligenceConfig,
) -> AppResult<NutritionResult> {
    let energy = energy_budget(profile, activity, goal, config)?;
    let (protein_g, carbs_g, fats_g) = macro_grams(split, energy.exact_target_kcal);

    debug!(
        goal = goal.as_str(),
        activity = activity.as_str(),
        tdee = energy.tdee,
        target = energy.exact_target_kcal,
        floored = energy.floored_at_bmr,
        "Computed nutrition needs"
    );

    Ok(NutritionResult {
        goal,
        target_calories: energy.exact_target_kcal.round() as u32,
        protein_g,
        carbs_g,
        fats_g,
        split,
        meals_per_day: config.nutrition.protein.meals_per_day,
        energy: Some(energy),
        protein_guidance: Some(protein_guidance(profile, goal, config)),
        hydration: Some(hydration_plan(profile, activity, config)),
    })
}

fn energy_budget(
    profile: &BodyProfile,
    activity: ActivityLevel,
    goal: FitnessGoal,
    config: &IntelligenceConfig,
) -> AppResult<EnergyBudget> {
    let bmr = compute_bmr(profile, config)?;
    let activity_multiplier = config.nutrition.activity_factors.factor(activity);
    let tdee = bmr * activity_multiplier;

    let requested = tdee + config.nutrition.goal_adjustments.adjustment_kcal(goal);
    let floored_at_bmr = goal == FitnessGoal::WeightLoss && requested < bmr;
    let exact_target_kcal = if floored_at_bmr { bmr } else { requested };

    Ok(EnergyBudget {
        bmr,
        tdee,
        activity,
        activity_multiplier,
        adjustment_kcal: exact_target_kcal - tdee,
        floored_at_bmr,
        exact_target_kcal,
    })
}

fn protein_guidance(
    profile: &BodyProfile,
    goal: FitnessGoal,
    config: &IntelligenceConfig,
) -> ProteinGuidance {
    let protein = &config.nutrition.protein;
    let g_per_kg = protein.g_per_kg(goal);
    let daily_g = profile.weight_kg * g_per_kg;
    ProteinGuidance {
        g_per_kg,
        daily_g,
        meals_per_day: protein.meals_per_day,
        per_meal_g: daily_g / f64::from(protein.meals_per_day),
    }
}

fn hydration_plan(
    profile: &BodyProfile,
    activity: ActivityLevel,
    config: &IntelligenceConfig,
) -> HydrationPlan {
    let hydration = &config.nutrition.hydration;
    let base_ml = profile.weight_kg * hydration.ml_per_kg;
    let exercise_ml = hydration.exercise_extra_ml(activity);
    let total_ml = base_ml + exercise_ml;
    HydrationPlan {
        base_ml,
        exercise_ml,
        total_ml,
        glasses: total_ml / ML_PER_GLASS,
    }
}
