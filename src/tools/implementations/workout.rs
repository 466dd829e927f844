// ABOUTME: Workout specialist tools: workout plan creation and training metrics
// ABOUTME: Implements create_workout_plan and calculate_training_metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Tools
//!
//! - `CreateWorkoutPlanTool` - Catalog-driven workout plan for a goal and level
//! - `CalculateTrainingMetricsTool` - BMI, BMR, TDEE estimates and heart-rate zones

use async_trait::async_trait;
use chrono::Utc;
use fitness_core::models::{
    Equipment, ExperienceLevel, FitnessGoal, Gender, WorkoutPlanRequest,
};
use fitness_intelligence::{compute_metrics, format_metrics_report, format_workout_plan};
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::{AppError, AppResult, ToolError};
use crate::tools::context::ToolExecutionContext;
use crate::tools::implementations::params;
use crate::tools::result::ToolResult;
use crate::tools::schema::JsonSchema;
use crate::tools::traits::{McpTool, ToolCapabilities, ToolCategory};

// ============================================================================
// CreateWorkoutPlanTool
// ============================================================================

/// Tool for creating a workout plan from the program catalog
pub struct CreateWorkoutPlanTool;

#[async_trait]
impl McpTool for CreateWorkoutPlanTool {
    fn name(&self) -> &'static str {
        "create_workout_plan"
    }

    fn description(&self) -> &'static str {
        "Create a personalized workout plan for a fitness goal, experience level, weekly schedule and available equipment"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            &[
                (
                    "goal",
                    "string",
                    "Fitness goal: weight_loss, muscle_gain, strength, endurance, general_fitness, maintenance, performance",
                ),
                (
                    "level",
                    "string",
                    "Experience level: beginner, intermediate, advanced",
                ),
                ("days", "integer", "Training days per week (1-7)"),
                (
                    "equipment",
                    "string",
                    "Available equipment: none, basic, gym, home_gym (default: basic)",
                ),
            ],
            &["goal", "level", "days"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::PLANNING | ToolCapabilities::TRAINING
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Workout
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let tool = self.name();
        params::ensure_object(&args, tool)?;
        debug!(request_id = %ctx.request_id, "Creating workout plan");

        let goal: FitnessGoal = params::enum_arg(&args, tool, "goal", None)?;
        let level: ExperienceLevel = params::enum_arg(&args, tool, "level", None)?;
        let raw_days = params::required_integer(&args, tool, "days")?;
        let days = u8::try_from(raw_days).map_err(|_| {
            AppError::from(ToolError::invalid_parameter(
                tool,
                "days",
                format!("must be between 1 and 7, got {raw_days}"),
            ))
        })?;
        let equipment: Equipment =
            params::enum_arg(&args, tool, "equipment", Some(Equipment::default()))?;

        let request = WorkoutPlanRequest::new(goal, level, days, equipment)?;
        let plan = format_workout_plan(&request)?;

        Ok(ToolResult::ok(json!({
            "report": plan,
            "request": request,
            "specialist": self.category().specialist(),
            "calculated_at": Utc::now().to_rfc3339(),
        })))
    }
}

// ============================================================================
// CalculateTrainingMetricsTool
// ============================================================================

/// Tool for calculating body metrics and heart-rate training zones
pub struct CalculateTrainingMetricsTool;

#[async_trait]
impl McpTool for CalculateTrainingMetricsTool {
    fn name(&self) -> &'static str {
        "calculate_training_metrics"
    }

    fn description(&self) -> &'static str {
        "Calculate BMI, BMR, daily calorie estimates per activity level, maximum heart rate and heart-rate training zones"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            &[
                ("weight", "number", "Body weight in kilograms"),
                ("height", "number", "Height in centimeters"),
                ("age", "integer", "Age in years"),
                (
                    "gender",
                    "string",
                    "Gender for the BMR formula: male or female (default: male)",
                ),
            ],
            &["weight", "height", "age"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::ANALYTICS
            | ToolCapabilities::REQUIRES_PROFILE
            | ToolCapabilities::TRAINING
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Workout
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let tool = self.name();
        params::ensure_object(&args, tool)?;
        debug!(request_id = %ctx.request_id, "Calculating training metrics");

        let profile = params::body_profile(&args, tool, Some(Gender::Male))?;
        let metrics = compute_metrics(&profile, ctx.config())?;
        let report = format_metrics_report(&profile, &metrics)?;

        Ok(ToolResult::ok(json!({
            "report": report,
            "profile": profile,
            "metrics": serde_json::to_value(&metrics)?,
            "calculated_at": Utc::now().to_rfc3339(),
        })))
    }
}

/// Create all workout specialist tools for registration
#[must_use]
pub fn create_workout_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(CreateWorkoutPlanTool),
        Box::new(CalculateTrainingMetricsTool),
    ]
}
