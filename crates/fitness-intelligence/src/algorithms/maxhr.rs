// ABOUTME: Maximum heart rate estimation algorithms using age-predicted formulas
// ABOUTME: Implements Fox (default), Tanaka, Nes, and Gulati formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use fitness_core::errors::AppError;
use fitness_core::models::Gender;
use serde::{Deserialize, Serialize};

/// Maximum heart rate estimation algorithm
///
/// - `Fox`: Classic 220-age (±10-12 bpm error, tends to overestimate)
/// - `Tanaka`: 208-0.7xage (±7-8 bpm error)
/// - `Nes`: 211-0.64xage (±6-7 bpm error, validated in large cohort)
/// - `Gulati`: 206-0.88xage (women-specific, ±7-8 bpm error)
///
/// # Scientific References
///
/// - Fox, S.M. et al. (1971). "Physical activity and coronary heart disease." *Ann Clin Res*, 3(6), 404-432.
/// - Tanaka, H. et al. (2001). "Age-predicted maximal heart rate revisited." *J Am Coll Cardiol*, 37(1), 153-156.
/// - Nes, B.M. et al. (2013). "Age-predicted maximal heart rate." *Scand J Med Sci Sports*, 23(6), 697-704.
/// - Gulati, M. et al. (2010). "Heart rate response to exercise stress testing." *Circulation*, 122(2), 130-137.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaxHrAlgorithm {
    /// Fox formula: 220 - age
    ///
    /// The formula coaches quote and the agents' reports assume
    #[default]
    Fox,

    /// Tanaka formula: 208 - 0.7 x age
    ///
    /// Meta-analysis of 18,712 subjects, more accurate for older adults
    Tanaka,

    /// Nes formula: 211 - 0.64 x age
    ///
    /// Derived from the Norwegian HUNT study
    Nes,

    /// Gulati formula: 206 - 0.88 x age
    ///
    /// Women-specific; male profiles fall back to Tanaka
    Gulati,
}

impl MaxHrAlgorithm {
    /// Estimate maximum heart rate (bpm, unrounded) from age
    ///
    /// Age bounds are enforced by the caller's profile validation.
    #[must_use]
    pub fn estimate(&self, age: u32, gender: Gender) -> f64 {
        let age_f64 = f64::from(age);

        match (self, gender) {
            (Self::Fox, _) => 220.0 - age_f64,
            (Self::Tanaka, _) | (Self::Gulati, Gender::Male) => {
                0.7f64.mul_add(-age_f64, 208.0)
            }
            (Self::Nes, _) => 0.64f64.mul_add(-age_f64, 211.0),
            (Self::Gulati, Gender::Female) => 0.88f64.mul_add(-age_f64, 206.0),
        }
    }

    /// Get algorithm name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fox => "fox",
            Self::Tanaka => "tanaka",
            Self::Nes => "nes",
            Self::Gulati => "gulati",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Fox => "220 - age",
            Self::Tanaka => "208 - 0.7 x age",
            Self::Nes => "211 - 0.64 x age",
            Self::Gulati => "206 - 0.88 x age",
        }
    }
}

impl FromStr for MaxHrAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fox" => Ok(Self::Fox),
            "tanaka" => Ok(Self::Tanaka),
            "nes" => Ok(Self::Nes),
            "gulati" => Ok(Self::Gulati),
            other => Err(AppError::invalid_input(format!(
                "Unknown MaxHR algorithm: '{other}'. Valid options: fox, tanaka, nes, gulati"
            ))),
        }
    }
}

impl fmt::Display for MaxHrAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_fox_is_default() {
        assert_eq!(MaxHrAlgorithm::default(), MaxHrAlgorithm::Fox);
        assert!((MaxHrAlgorithm::Fox.estimate(30, Gender::Male) - 190.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gulati_falls_back_to_tanaka_for_men() {
        let male = MaxHrAlgorithm::Gulati.estimate(40, Gender::Male);
        let tanaka = MaxHrAlgorithm::Tanaka.estimate(40, Gender::Male);
        assert!((male - tanaka).abs() < f64::EPSILON);

        let female = MaxHrAlgorithm::Gulati.estimate(40, Gender::Female);
        assert!((female - 170.8).abs() < 1e-9);
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("Tanaka".parse::<MaxHrAlgorithm>().unwrap(), MaxHrAlgorithm::Tanaka);
        assert!("karvonen".parse::<MaxHrAlgorithm>().is_err());
    }
}
