// ABOUTME: Fitness calculation engine: body metrics, nutrition needs, and plan formatting
// ABOUTME: Pure synchronous functions parameterized by an explicit IntelligenceConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Intelligence
//!
//! Deterministic calculators behind the workout specialist and the
//! nutritionist. Nothing here performs I/O or reads global state; policy
//! values arrive through [`IntelligenceConfig`].
//!
//! ## Modules
//!
//! - **`metrics_calculator`**: BMI, BMR, TDEE estimates, max HR, training zones
//! - **`nutrition_calculator`**: TDEE per activity, calorie targets, macro grams
//! - **plans**: workout/meal plan text and fixed-section reports
//! - **config**: policy constants with env overrides and validation
//! - **algorithms**: max heart rate formulas

/// Maximum heart rate estimation formulas
pub mod algorithms;

/// Policy configuration (splits, zones, thresholds, multipliers)
pub mod config;

/// BMI, BMR, TDEE and heart-rate zone calculations
pub mod metrics_calculator;

/// TDEE, calorie target and macronutrient calculations
pub mod nutrition_calculator;

/// Workout and meal plan formatters
pub mod plans;

pub use algorithms::MaxHrAlgorithm;
pub use config::{ConfigError, IntelligenceConfig, MacroSplit};
pub use metrics_calculator::{
    compute_bmr, compute_metrics, compute_metrics_batch, BmiCategory, HeartRateZone,
    MetricsResult, TdeeEstimate, TrainingZone,
};
pub use nutrition_calculator::{
    compute_macro_targets, compute_nutrition_needs, compute_nutrition_needs_with_split,
    compute_tdee, EnergyBudget, HydrationPlan, NutritionResult, ProteinGuidance,
};
pub use plans::{format_meal_plan, format_metrics_report, format_nutrition_report, format_workout_plan};
