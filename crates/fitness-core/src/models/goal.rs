// ABOUTME: Fitness goal enumeration shared by the workout and nutrition specialists
// ABOUTME: Each consumer decides which goals it supports; nutrition accepts a subset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{accepted_values, normalize_token};
use crate::errors::{AppError, AppResult};

/// Primary goal of the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric deficit, fat loss
    WeightLoss,
    /// Caloric surplus, hypertrophy
    MuscleGain,
    /// Caloric balance
    Maintenance,
    /// Maximal strength on compound lifts
    Strength,
    /// Cardiovascular endurance
    Endurance,
    /// Overall health and fitness
    GeneralFitness,
    /// Fueling for sport performance
    Performance,
}

impl FitnessGoal {
    /// All goals
    pub const ALL: [Self; 7] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::Maintenance,
        Self::Strength,
        Self::Endurance,
        Self::GeneralFitness,
        Self::Performance,
    ];

    /// Goals that carry a calorie adjustment and macro split
    pub const NUTRITION_GOALS: [Self; 4] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::Maintenance,
        Self::Performance,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Maintenance => "maintenance",
            Self::Strength => "strength",
            Self::Endurance => "endurance",
            Self::GeneralFitness => "general_fitness",
            Self::Performance => "performance",
        }
    }

    /// Display label ("Muscle Gain")
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Maintenance => "Maintenance",
            Self::Strength => "Strength",
            Self::Endurance => "Endurance",
            Self::GeneralFitness => "General Fitness",
            Self::Performance => "Performance",
        }
    }

    /// Whether the nutrition calculator has a split for this goal
    #[must_use]
    pub const fn is_nutrition_goal(&self) -> bool {
        matches!(
            self,
            Self::WeightLoss | Self::MuscleGain | Self::Maintenance | Self::Performance
        )
    }

    /// Reject goals the nutrition calculator cannot plan for
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` listing the supported nutrition goals
    pub fn require_nutrition_goal(self) -> AppResult<Self> {
        if self.is_nutrition_goal() {
            Ok(self)
        } else {
            Err(AppError::invalid_input(format!(
                "Goal '{self}' has no nutrition plan. Nutrition goals are: {}",
                accepted_values(&Self::NUTRITION_GOALS.map(|goal| goal.as_str()))
            )))
        }
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "weight_loss" | "fat_loss" => Ok(Self::WeightLoss),
            "muscle_gain" | "hypertrophy" => Ok(Self::MuscleGain),
            "maintenance" => Ok(Self::Maintenance),
            "strength" => Ok(Self::Strength),
            "endurance" => Ok(Self::Endurance),
            "general_fitness" => Ok(Self::GeneralFitness),
            "performance" => Ok(Self::Performance),
            _ => Err(AppError::invalid_input(format!(
                "Invalid goal '{s}'. Must be one of: {}",
                accepted_values(&Self::ALL.map(|goal| goal.as_str()))
            ))),
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrition_goal_subset() {
        assert!(FitnessGoal::Performance.require_nutrition_goal().is_ok());
        let err = FitnessGoal::Strength.require_nutrition_goal().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err
            .message
            .contains("weight_loss, muscle_gain, maintenance, performance"));
    }

    #[test]
    fn test_parse_rejects_unknown_goal() {
        assert_eq!(
            "Muscle Gain".parse::<FitnessGoal>().unwrap(),
            FitnessGoal::MuscleGain
        );
        assert!("get_huge".parse::<FitnessGoal>().is_err());
    }
}
