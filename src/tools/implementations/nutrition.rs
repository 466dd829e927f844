// ABOUTME: Nutritionist tools: meal plan creation and daily nutrition needs
// ABOUTME: Implements create_meal_plan and calculate_nutrition_needs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Tools
//!
//! - `CreateMealPlanTool` - Meal plan around a known calorie budget
//! - `CalculateNutritionNeedsTool` - TDEE, goal calories, macros, protein and hydration

use async_trait::async_trait;
use chrono::Utc;
use fitness_core::models::{ActivityLevel, DietaryRestriction, FitnessGoal, MealPlanRequest};
use fitness_intelligence::{
    compute_macro_targets, compute_nutrition_needs, format_meal_plan, format_nutrition_report,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::{AppError, AppResult, ToolError};
use crate::tools::context::ToolExecutionContext;
use crate::tools::implementations::params;
use crate::tools::result::ToolResult;
use crate::tools::schema::JsonSchema;
use crate::tools::traits::{McpTool, ToolCapabilities, ToolCategory};

const NUTRITION_GOAL_DESCRIPTION: &str =
    "Nutrition goal: weight_loss, muscle_gain, maintenance, performance";

// ============================================================================
// CreateMealPlanTool
// ============================================================================

/// Tool for creating a meal plan around a daily calorie target
pub struct CreateMealPlanTool;

#[async_trait]
impl McpTool for CreateMealPlanTool {
    fn name(&self) -> &'static str {
        "create_meal_plan"
    }

    fn description(&self) -> &'static str {
        "Create a personalized meal plan with macronutrient breakdown and food suggestions for a calorie target and dietary restriction"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            &[
                ("goal", "string", NUTRITION_GOAL_DESCRIPTION),
                ("calories", "integer", "Daily calorie target (kcal)"),
                (
                    "restrictions",
                    "string",
                    "Dietary restriction: none, vegetarian, vegan, gluten_free, dairy_free (default: none)",
                ),
            ],
            &["goal", "calories"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::PLANNING | ToolCapabilities::NUTRITION
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Nutrition
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let tool = self.name();
        params::ensure_object(&args, tool)?;
        debug!(request_id = %ctx.request_id, "Creating meal plan");

        let goal: FitnessGoal = params::enum_arg(&args, tool, "goal", None)?;
        let raw_calories = params::required_integer(&args, tool, "calories")?;
        let calories = u32::try_from(raw_calories).map_err(|_| {
            AppError::from(ToolError::invalid_parameter(
                tool,
                "calories",
                format!("must be a positive number of kcal, got {raw_calories}"),
            ))
        })?;
        let restriction: DietaryRestriction = params::enum_arg(
            &args,
            tool,
            "restrictions",
            Some(DietaryRestriction::default()),
        )?;

        let request = MealPlanRequest::new(goal, calories, restriction)?;
        let nutrition = compute_macro_targets(request.goal(), request.target_calories(), ctx.config())?;
        let plan = format_meal_plan(&request, &nutrition)?;

        Ok(ToolResult::ok(json!({
            "report": plan,
            "request": request,
            "nutrition": serde_json::to_value(&nutrition)?,
            "specialist": self.category().specialist(),
            "calculated_at": Utc::now().to_rfc3339(),
        })))
    }
}

// ============================================================================
// CalculateNutritionNeedsTool
// ============================================================================

/// Tool for calculating daily calorie, macronutrient, protein and water needs
pub struct CalculateNutritionNeedsTool;

#[async_trait]
impl McpTool for CalculateNutritionNeedsTool {
    fn name(&self) -> &'static str {
        "calculate_nutrition_needs"
    }

    fn description(&self) -> &'static str {
        "Calculate daily calorie target, macronutrients, protein and hydration needs from body measurements, activity level and goal"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            &[
                ("weight", "number", "Body weight in kilograms"),
                ("height", "number", "Height in centimeters"),
                ("age", "integer", "Age in years"),
                ("gender", "string", "Gender: male or female"),
                (
                    "activity",
                    "string",
                    "Activity level: sedentary, light, moderate, active, very_active",
                ),
                ("goal", "string", NUTRITION_GOAL_DESCRIPTION),
            ],
            &["weight", "height", "age", "gender", "activity", "goal"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::ANALYTICS
            | ToolCapabilities::REQUIRES_PROFILE
            | ToolCapabilities::NUTRITION
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Nutrition
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let tool = self.name();
        params::ensure_object(&args, tool)?;
        debug!(request_id = %ctx.request_id, "Calculating nutrition needs");

        let profile = params::body_profile(&args, tool, None)?;
        let activity: ActivityLevel = params::enum_arg(&args, tool, "activity", None)?;
        let goal: FitnessGoal = params::enum_arg(&args, tool, "goal", None)?;

        let nutrition = compute_nutrition_needs(&profile, activity, goal, ctx.config())?;
        let report = format_nutrition_report(&profile, &nutrition)?;

        Ok(ToolResult::ok(json!({
            "report": report,
            "profile": profile,
            "activity": activity,
            "nutrition": serde_json::to_value(&nutrition)?,
            "calculated_at": Utc::now().to_rfc3339(),
        })))
    }
}

/// Create all nutritionist tools for registration
#[must_use]
pub fn create_nutrition_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(CreateMealPlanTool),
        Box::new(CalculateNutritionNeedsTool),
    ]
}
