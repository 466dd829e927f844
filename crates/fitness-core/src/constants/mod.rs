// ABOUTME: Physiological and nutritional constants shared by calculators and formatters
// ABOUTME: Fixed facts (kcal per gram, unit conversions) and default policy values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants
//!
//! Values in [`energy`] and [`units`] are nutritional facts and unit
//! conversions; they are not tunable. Values in [`defaults`] seed the
//! configurable policy in the intelligence crate.

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Protein energy density (kcal per gram)
    pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
    /// Carbohydrate energy density (kcal per gram)
    pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
    /// Fat energy density (kcal per gram)
    pub const FAT_KCAL_PER_GRAM: f64 = 9.0;
}

/// Unit conversions
pub mod units {
    /// Centimeters per meter
    pub const CM_PER_METER: f64 = 100.0;
    /// Milliliters in one glass of water
    pub const ML_PER_GLASS: f64 = 250.0;
    /// Percentage scale
    pub const PERCENT: f64 = 100.0;
}

/// Default policy values used to seed `IntelligenceConfig`
pub mod defaults {
    /// BMI lower bound of the "normal" category (inclusive)
    pub const BMI_NORMAL_MIN: f64 = 18.5;
    /// BMI lower bound of the "overweight" category (inclusive)
    pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
    /// BMI lower bound of the "obese" category (inclusive)
    pub const BMI_OBESE_MIN: f64 = 30.0;

    /// Fat-burn zone as percent of max heart rate
    pub const FAT_BURN_ZONE_PERCENT: (u8, u8) = (60, 70);
    /// Cardio zone as percent of max heart rate
    pub const CARDIO_ZONE_PERCENT: (u8, u8) = (70, 80);
    /// Peak zone as percent of max heart rate
    pub const PEAK_ZONE_PERCENT: (u8, u8) = (80, 90);

    /// Daily deficit for weight loss (~0.5 kg per week)
    pub const WEIGHT_LOSS_DEFICIT_KCAL: f64 = 500.0;
    /// Daily surplus for a lean bulk
    pub const MUSCLE_GAIN_SURPLUS_KCAL: f64 = 300.0;

    /// Protein target for body-composition goals (g/kg)
    pub const PROTEIN_BODY_COMPOSITION_G_PER_KG: f64 = 2.2;
    /// Protein target otherwise (g/kg)
    pub const PROTEIN_GENERAL_G_PER_KG: f64 = 1.6;
    /// Meals and snacks protein is spread over
    pub const PROTEIN_MEALS_PER_DAY: u8 = 5;

    /// Base water requirement (ml per kg bodyweight)
    pub const WATER_ML_PER_KG: f64 = 35.0;
    /// Extra water for active and very active people (ml)
    pub const WATER_EXERCISE_HIGH_ML: f64 = 500.0;
    /// Extra water for everyone else (ml)
    pub const WATER_EXERCISE_BASE_ML: f64 = 250.0;

    /// Plausibility ceiling for bodyweight (kg)
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Plausibility ceiling for height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Plausibility ceiling for age (years)
    pub const MAX_AGE_YEARS: u32 = 120;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Library/service name
    pub const FITNESS_AI: &str = "fitness_ai";
    /// Workout specialist agent name
    pub const WORKOUT_SPECIALIST: &str = "workout_specialist";
    /// Nutritionist agent name
    pub const NUTRITIONIST: &str = "nutritionist";
}
