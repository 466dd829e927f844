// ABOUTME: Workout and meal plan request records with construction-time validation
// ABOUTME: Experience level, equipment and dietary restriction enums for plan templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{accepted_values, normalize_token, FitnessGoal};
use crate::errors::{AppError, AppResult};

/// Training experience of the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Less than ~6 months of structured training
    Beginner,
    /// Consistent training for 6 months to 2 years
    Intermediate,
    /// Multiple years of structured training
    Advanced,
}

impl ExperienceLevel {
    /// All levels
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "beginner" | "novice" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" | "expert" => Ok(Self::Advanced),
            _ => Err(AppError::invalid_input(format!(
                "Invalid level '{s}'. Must be one of: {}",
                accepted_values(&Self::ALL.map(|level| level.as_str()))
            ))),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equipment available for training
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// Bodyweight only
    None,
    /// Dumbbells and resistance bands
    #[default]
    Basic,
    /// Commercial gym
    Gym,
    /// Home gym with rack, weights and machines
    HomeGym,
}

impl Equipment {
    /// All equipment options
    pub const ALL: [Self; 4] = [Self::None, Self::Basic, Self::Gym, Self::HomeGym];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic => "basic",
            Self::Gym => "gym",
            Self::HomeGym => "home_gym",
        }
    }
}

impl FromStr for Equipment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "none" | "bodyweight" => Ok(Self::None),
            "basic" => Ok(Self::Basic),
            "gym" | "full_gym" => Ok(Self::Gym),
            "home_gym" => Ok(Self::HomeGym),
            _ => Err(AppError::invalid_input(format!(
                "Invalid equipment '{s}'. Must be one of: {}",
                accepted_values(&Self::ALL.map(|equipment| equipment.as_str()))
            ))),
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary restriction used to pick food suggestions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRestriction {
    /// No restriction
    #[default]
    None,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// No gluten
    GlutenFree,
    /// No dairy
    DairyFree,
}

impl DietaryRestriction {
    /// All restrictions
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Vegetarian,
        Self::Vegan,
        Self::GlutenFree,
        Self::DairyFree,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::GlutenFree => "gluten_free",
            Self::DairyFree => "dairy_free",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::GlutenFree => "Gluten Free",
            Self::DairyFree => "Dairy Free",
        }
    }
}

impl FromStr for DietaryRestriction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "none" | "" => Ok(Self::None),
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            "gluten_free" => Ok(Self::GlutenFree),
            "dairy_free" | "lactose_free" => Ok(Self::DairyFree),
            _ => Err(AppError::invalid_input(format!(
                "Invalid dietary restriction '{s}'. Must be one of: {}",
                accepted_values(&Self::ALL.map(|restriction| restriction.as_str()))
            ))),
        }
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request for a workout plan
///
/// Fields are private: a value of this type always has `days_per_week` in 1-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWorkoutPlanRequest")]
pub struct WorkoutPlanRequest {
    goal: FitnessGoal,
    level: ExperienceLevel,
    days_per_week: u8,
    equipment: Equipment,
}

#[derive(Deserialize)]
struct RawWorkoutPlanRequest {
    goal: FitnessGoal,
    level: ExperienceLevel,
    days_per_week: u8,
    #[serde(default)]
    equipment: Equipment,
}

impl TryFrom<RawWorkoutPlanRequest> for WorkoutPlanRequest {
    type Error = AppError;

    fn try_from(raw: RawWorkoutPlanRequest) -> Result<Self, Self::Error> {
        Self::new(raw.goal, raw.level, raw.days_per_week, raw.equipment)
    }
}

impl WorkoutPlanRequest {
    /// Valid training days per week
    pub const DAYS_PER_WEEK: RangeInclusive<u8> = 1..=7;

    /// Build a validated request
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `days_per_week` is outside 1-7
    pub fn new(
        goal: FitnessGoal,
        level: ExperienceLevel,
        days_per_week: u8,
        equipment: Equipment,
    ) -> AppResult<Self> {
        if !Self::DAYS_PER_WEEK.contains(&days_per_week) {
            return Err(AppError::invalid_input(format!(
                "days_per_week must be between 1 and 7, got {days_per_week}"
            )));
        }
        Ok(Self {
            goal,
            level,
            days_per_week,
            equipment,
        })
    }

    /// Training goal
    #[must_use]
    pub const fn goal(&self) -> FitnessGoal {
        self.goal
    }

    /// Experience level
    #[must_use]
    pub const fn level(&self) -> ExperienceLevel {
        self.level
    }

    /// Training days per week (1-7)
    #[must_use]
    pub const fn days_per_week(&self) -> u8 {
        self.days_per_week
    }

    /// Available equipment
    #[must_use]
    pub const fn equipment(&self) -> Equipment {
        self.equipment
    }
}

/// Request for a meal plan
///
/// Fields are private: the goal always has a macro split and calories are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMealPlanRequest")]
pub struct MealPlanRequest {
    goal: FitnessGoal,
    target_calories: u32,
    restriction: DietaryRestriction,
}

#[derive(Deserialize)]
struct RawMealPlanRequest {
    goal: FitnessGoal,
    target_calories: u32,
    #[serde(default)]
    restriction: DietaryRestriction,
}

impl TryFrom<RawMealPlanRequest> for MealPlanRequest {
    type Error = AppError;

    fn try_from(raw: RawMealPlanRequest) -> Result<Self, Self::Error> {
        Self::new(raw.goal, raw.target_calories, raw.restriction)
    }
}

impl MealPlanRequest {
    /// Build a validated request
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if calories are zero or the goal has no macro split
    pub fn new(
        goal: FitnessGoal,
        target_calories: u32,
        restriction: DietaryRestriction,
    ) -> AppResult<Self> {
        let goal = goal.require_nutrition_goal()?;
        if target_calories == 0 {
            return Err(AppError::invalid_input(
                "target_calories must be a positive number of kcal",
            ));
        }
        Ok(Self {
            goal,
            target_calories,
            restriction,
        })
    }

    /// Nutrition goal
    #[must_use]
    pub const fn goal(&self) -> FitnessGoal {
        self.goal
    }

    /// Daily calorie target (kcal)
    #[must_use]
    pub const fn target_calories(&self) -> u32 {
        self.target_calories
    }

    /// Dietary restriction
    #[must_use]
    pub const fn restriction(&self) -> DietaryRestriction {
        self.restriction
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_request_rejects_days_out_of_range() {
        for days in [0, 8, 9] {
            let err = WorkoutPlanRequest::new(
                FitnessGoal::Strength,
                ExperienceLevel::Beginner,
                days,
                Equipment::Gym,
            )
            .unwrap_err();
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn test_workout_request_deserialize_validates() {
        let ok: WorkoutPlanRequest = serde_json::from_value(serde_json::json!({
            "goal": "endurance",
            "level": "intermediate",
            "days_per_week": 4
        }))
        .unwrap();
        assert_eq!(ok.equipment(), Equipment::Basic);

        let bad = serde_json::from_value::<WorkoutPlanRequest>(serde_json::json!({
            "goal": "endurance",
            "level": "intermediate",
            "days_per_week": 9
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_meal_request_requires_nutrition_goal() {
        assert!(MealPlanRequest::new(FitnessGoal::Endurance, 2000, DietaryRestriction::None).is_err());
        assert!(MealPlanRequest::new(FitnessGoal::Maintenance, 0, DietaryRestriction::None).is_err());
        let req =
            MealPlanRequest::new(FitnessGoal::Maintenance, 2200, DietaryRestriction::Vegan).unwrap();
        assert_eq!(req.target_calories(), 2200);
    }

    #[test]
    fn test_restriction_parsing() {
        assert_eq!(
            "Gluten-Free".parse::<DietaryRestriction>().unwrap(),
            DietaryRestriction::GlutenFree
        );
        assert!("carnivore".parse::<DietaryRestriction>().is_err());
    }
}
