// ABOUTME: Template-driven plan and report formatters used by the specialist agents
// ABOUTME: Pure presentation over validated requests and precomputed calculator results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meal plan formatter and food lists per dietary restriction
pub mod meal;
/// Metrics and nutrition text reports
pub mod reports;
/// Workout program catalog and formatter
pub mod workout;

pub use meal::{food_suggestions, format_meal_plan, FoodSuggestions};
pub use reports::{format_metrics_report, format_nutrition_report};
pub use workout::{exercise_list, format_workout_plan, TrainingFocus};
