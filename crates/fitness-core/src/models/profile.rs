// ABOUTME: Body measurement profile and biological gender used by BMR and BMI formulas
// ABOUTME: Validates that weight, height and age are present, finite and positive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{accepted_values, normalize_token};
use crate::constants::units::CM_PER_METER;
use crate::errors::{AppError, AppResult};

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal Mifflin-St Jeor constant)
    Male,
    /// Female (-161 kcal Mifflin-St Jeor constant)
    Female,
}

impl Gender {
    /// All accepted values
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(AppError::invalid_input(format!(
                "Invalid gender '{s}'. Must be one of: {}",
                accepted_values(&["male", "female"])
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body measurements consumed by the metrics and nutrition calculators
///
/// Fields are public so agents can build profiles from structured output;
/// every calculator entry point calls [`BodyProfile::validate`] first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years
    pub age: u32,
    /// Biological gender for the BMR constant
    pub gender: Gender,
}

impl BodyProfile {
    /// Build a validated profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if weight or height is not a positive finite
    /// number or age is zero
    pub fn new(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> AppResult<Self> {
        let profile = Self {
            weight_kg,
            height_cm,
            age,
            gender,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the positivity invariants
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weight must be a positive number of kilograms, got {}",
                self.weight_kg
            )));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Height must be a positive number of centimeters, got {}",
                self.height_cm
            )));
        }
        if self.age == 0 {
            return Err(AppError::invalid_input(
                "Age must be a positive number of years",
            ));
        }
        Ok(())
    }

    /// Height in meters
    #[must_use]
    pub fn height_m(&self) -> f64 {
        self.height_cm / CM_PER_METER
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parsing() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" female ".parse::<Gender>().unwrap(), Gender::Female);
        let err = "other".parse::<Gender>().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.message.contains("male, female"));
    }

    #[test]
    fn test_profile_rejects_non_positive_fields() {
        assert!(BodyProfile::new(0.0, 175.0, 30, Gender::Male).is_err());
        assert!(BodyProfile::new(75.0, -1.0, 30, Gender::Male).is_err());
        assert!(BodyProfile::new(75.0, 175.0, 0, Gender::Male).is_err());
        assert!(BodyProfile::new(f64::NAN, 175.0, 30, Gender::Male).is_err());
        assert!(BodyProfile::new(75.0, 175.0, 30, Gender::Female).is_ok());
    }

    #[test]
    fn test_profile_serde_uses_wire_names() {
        let profile = BodyProfile::new(75.0, 175.0, 30, Gender::Female).unwrap();
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["gender"], "female");
    }
}
