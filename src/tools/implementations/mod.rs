// ABOUTME: Module containing the tool implementations organized by specialist
// ABOUTME: Each submodule corresponds to a tool category with feature flag support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Implementations
//!
//! - `workout` - create_workout_plan, calculate_training_metrics
//! - `nutrition` - create_meal_plan, calculate_nutrition_needs
//!
//! Each category is conditionally compiled based on feature flags.

/// Shared argument parsing
pub mod params;

// Workout tools: create_workout_plan, calculate_training_metrics
#[cfg(feature = "tools-workout")]
pub mod workout;

// Nutrition tools: create_meal_plan, calculate_nutrition_needs
#[cfg(feature = "tools-nutrition")]
pub mod nutrition;
