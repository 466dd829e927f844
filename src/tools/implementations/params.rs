// ABOUTME: Argument extraction helpers shared by the tool implementations
// ABOUTME: Turn loosely typed JSON arguments into validated domain values or InvalidInput errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Language models send numbers as strings and omit optional fields, so the
//! helpers accept numeric strings and treat `null` like a missing argument.

use std::str::FromStr;

use fitness_core::models::{BodyProfile, Gender};
use serde_json::Value;

use crate::errors::{AppError, AppResult, ToolError};

fn invalid(tool: &str, name: &str, reason: impl Into<String>) -> AppError {
    ToolError::invalid_parameter(tool, name, reason).into()
}

/// Reject anything but a JSON object
///
/// # Errors
///
/// Returns `InvalidInput` when `args` is not an object
pub fn ensure_object(args: &Value, tool: &str) -> AppResult<()> {
    if args.is_object() {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "Arguments for tool '{tool}' must be a JSON object"
        )))
    }
}

fn present<'a>(args: &'a Value, name: &str) -> Option<&'a Value> {
    args.get(name).filter(|value| !value.is_null())
}

fn required<'a>(args: &'a Value, tool: &str, name: &str) -> AppResult<&'a Value> {
    present(args, name).ok_or_else(|| ToolError::missing_parameter(tool, name).into())
}

/// Required number
///
/// # Errors
///
/// Returns `InvalidInput` if missing or not numeric
pub fn required_f64(args: &Value, tool: &str, name: &str) -> AppResult<f64> {
    let value = required(args, tool, name)?;
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.ok_or_else(|| invalid(tool, name, format!("must be a number, got {value}")))
}

/// Required whole number, possibly negative
///
/// # Errors
///
/// Returns `InvalidInput` if missing, fractional or not numeric
pub fn required_integer(args: &Value, tool: &str, name: &str) -> AppResult<i64> {
    let value = required(args, tool, name)?;
    let integer = match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.fract().abs() < f64::EPSILON && float.abs() < 1e15)
                .map(|float| float as i64)
        }),
        Value::String(raw) => raw.trim().parse::<i64>().ok(),
        _ => None,
    };
    integer.ok_or_else(|| invalid(tool, name, format!("must be a whole number, got {value}")))
}

/// Closed-enum argument, falling back to `default` when absent
///
/// # Errors
///
/// Returns `InvalidInput` if missing without a default, not a string, or not
/// one of the accepted values
pub fn enum_arg<T>(args: &Value, tool: &str, name: &str, default: Option<T>) -> AppResult<T>
where
    T: FromStr<Err = AppError>,
{
    let raw = match (present(args, name), default) {
        (None, Some(default)) => return Ok(default),
        (None, None) => return Err(ToolError::missing_parameter(tool, name).into()),
        (Some(Value::String(raw)), _) => raw,
        (Some(other), _) => return Err(invalid(tool, name, format!("must be a string, got {other}"))),
    };
    raw.parse::<T>().map_err(|e| invalid(tool, name, e.message))
}

/// Age in whole years
///
/// # Errors
///
/// Returns `InvalidInput` for a missing, fractional, zero or negative age
pub fn age(args: &Value, tool: &str) -> AppResult<u32> {
    let raw = required_integer(args, tool, "age")?;
    u32::try_from(raw)
        .ok()
        .filter(|&years| years > 0)
        .ok_or_else(|| invalid(tool, "age", format!("must be a positive number of years, got {raw}")))
}

/// Body profile from `weight`, `height`, `age` and `gender`
///
/// # Errors
///
/// Returns `InvalidInput` if any measurement is missing or invalid
pub fn body_profile(args: &Value, tool: &str, default_gender: Option<Gender>) -> AppResult<BodyProfile> {
    let weight_kg = required_f64(args, tool, "weight")?;
    let height_cm = required_f64(args, tool, "height")?;
    let age = age(args, tool)?;
    let gender = enum_arg(args, tool, "gender", default_gender)?;
    BodyProfile::new(weight_kg, height_cm, age, gender)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use fitness_core::errors::ErrorCode;
    use fitness_core::models::ActivityLevel;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_numeric_strings_accepted() {
        let args = json!({ "weight": "75.5", "days": "4" });
        assert!((required_f64(&args, "t", "weight").unwrap() - 75.5).abs() < f64::EPSILON);
        assert_eq!(required_integer(&args, "t", "days").unwrap(), 4);
    }

    #[test]
    fn test_negative_age_rejected() {
        let err = age(&json!({ "age": -1 }), "t").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("got -1"));
    }

    #[test]
    fn test_missing_and_null_are_the_same() {
        let err = required_f64(&json!({ "weight": null }), "t", "weight").unwrap_err();
        assert!(err.message.contains("Missing required parameter 'weight'"));
    }

    #[test]
    fn test_enum_default_and_rejection() {
        let level: ActivityLevel =
            enum_arg(&json!({}), "t", "activity", Some(ActivityLevel::Moderate)).unwrap();
        assert_eq!(level, ActivityLevel::Moderate);
        let err = enum_arg::<ActivityLevel>(&json!({ "activity": "couch" }), "t", "activity", None)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}
