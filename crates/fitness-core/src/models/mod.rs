// ABOUTME: Domain models for body measurements, goals, activity levels and plan requests
// ABOUTME: Closed enums parsed from snake_case wire names, validated request records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Domain Models
//!
//! Every string-typed parameter an agent can send (gender, activity, goal,
//! level, equipment, restriction) is a closed enum here. Parsing happens once,
//! at the boundary, and unknown values fail with `InvalidInput`.

mod activity;
mod goal;
mod plan;
mod profile;

pub use activity::ActivityLevel;
pub use goal::FitnessGoal;
pub use plan::{DietaryRestriction, Equipment, ExperienceLevel, MealPlanRequest, WorkoutPlanRequest};
pub use profile::{BodyProfile, Gender};

/// Normalize a user-supplied enum token: trim, lowercase, `-`/space to `_`
pub(crate) fn normalize_token(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Render a list of accepted wire names for error messages
pub(crate) fn accepted_values(values: &[&str]) -> String {
    values.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("  Very-Active "), "very_active");
        assert_eq!(normalize_token("Gluten Free"), "gluten_free");
        assert_eq!(normalize_token("home_gym"), "home_gym");
    }
}
