// ABOUTME: Configuration error types for intelligence policy validation
// ABOUTME: Every variant maps to ConfigInvalid; covers ranges, env overrides and split sums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for intelligence policy validation.

use fitness_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Bounds are unordered or overlapping (e.g., zone lower >= upper)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an override value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Percentages don't sum to 100
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, err.to_string()).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_is_config_invalid() {
        let errors = [
            ConfigError::InvalidRange("zone_2"),
            ConfigError::Parse("FITNESS_MAX_HR_ALGORITHM".into()),
            ConfigError::InvalidWeights("sum is 95".into()),
            ConfigError::ValueOutOfRange("meals_per_day"),
        ];
        for err in errors {
            let message = err.to_string();
            let app = AppError::from(err);
            assert_eq!(app.code, ErrorCode::ConfigInvalid);
            assert_eq!(app.message, message);
        }
    }
}
