// ABOUTME: Integration tests for the tool registry and the four specialist tools
// ABOUTME: Exercises registration, category routing, schemas, argument validation and execution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{create_test_registry, reference_profile_args};
use fitness_ai::errors::ErrorCode;
use fitness_ai::tools::implementations::workout::CreateWorkoutPlanTool;
use fitness_ai::tools::{ToolCapabilities, ToolCategory, ToolRegistry};
use serde_json::json;

#[test]
fn test_builtin_tools_registered() {
    let (registry, _) = create_test_registry();

    assert_eq!(registry.len(), 4);
    assert_eq!(
        registry.tool_names(),
        vec![
            "calculate_nutrition_needs",
            "calculate_training_metrics",
            "create_meal_plan",
            "create_workout_plan",
        ]
    );
}

#[test]
fn test_tools_grouped_by_specialist() {
    let (registry, _) = create_test_registry();

    let mut workout = registry.tools_in_category(ToolCategory::Workout);
    workout.sort_unstable();
    assert_eq!(
        workout,
        vec!["calculate_training_metrics", "create_workout_plan"]
    );

    let mut nutrition = registry.tools_in_category(ToolCategory::Nutrition);
    nutrition.sort_unstable();
    assert_eq!(
        nutrition,
        vec!["calculate_nutrition_needs", "create_meal_plan"]
    );

    for tool in registry.tools_for(ToolCategory::Nutrition) {
        assert_eq!(tool.category().specialist(), "nutritionist");
    }
    assert_eq!(
        registry.categories(),
        vec![ToolCategory::Workout, ToolCategory::Nutrition]
    );
}

#[test]
fn test_duplicate_registration_rejected() {
    let mut registry = ToolRegistry::new();
    registry.try_register(Arc::new(CreateWorkoutPlanTool)).unwrap();

    let err = registry
        .try_register(Arc::new(CreateWorkoutPlanTool))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_schemas_list_required_arguments() {
    let (registry, _) = create_test_registry();
    let schemas = registry.all_schemas();
    assert_eq!(schemas.len(), 4);

    let nutrition = schemas
        .iter()
        .find(|schema| schema.name == "calculate_nutrition_needs")
        .unwrap();
    let required = nutrition.input_schema.required.clone().unwrap();
    for arg in ["weight", "height", "age", "gender", "activity", "goal"] {
        assert!(required.iter().any(|name| name == arg), "{arg}");
    }

    let serialized = serde_json::to_value(nutrition).unwrap();
    assert!(serialized.get("inputSchema").is_some());
}

#[test]
fn test_filter_by_capabilities() {
    let (registry, _) = create_test_registry();

    let planners = registry.filter_by_capabilities(ToolCapabilities::PLANNING);
    let mut names: Vec<&str> = planners.iter().map(|tool| tool.name()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["create_meal_plan", "create_workout_plan"]);

    let profile_tools = registry.filter_by_capabilities(ToolCapabilities::REQUIRES_PROFILE);
    assert!(profile_tools
        .iter()
        .all(|tool| tool.name().starts_with("calculate_")));
}

#[tokio::test]
async fn test_unknown_tool_is_not_found() {
    let (registry, ctx) = create_test_registry();
    let err = registry
        .execute("calculate_vo2max", json!({}), &ctx)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_training_metrics_tool() {
    let (registry, ctx) = create_test_registry();
    let result = registry
        .execute("calculate_training_metrics", reference_profile_args(), &ctx)
        .await
        .unwrap();

    assert!(!result.is_error);
    let report = result.report().unwrap();
    assert!(report.starts_with("FITNESS METRICS CALCULATED:"));
    assert_eq!(result.content["metrics"]["max_heart_rate"], 190);
    assert_eq!(result.content["metrics"]["bmi_category"], "normal");
}

#[tokio::test]
async fn test_training_metrics_gender_defaults_to_male() {
    let (registry, ctx) = create_test_registry();
    let result = registry
        .execute(
            "calculate_training_metrics",
            json!({ "weight": 75, "height": 175, "age": 30 }),
            &ctx,
        )
        .await
        .unwrap();
    assert_eq!(result.content["profile"]["gender"], "male");
}

#[tokio::test]
async fn test_nutrition_needs_tool() {
    let (registry, ctx) = create_test_registry();
    let mut args = reference_profile_args();
    args["activity"] = json!("moderate");
    args["goal"] = json!("weight_loss");

    let result = registry
        .execute("calculate_nutrition_needs", args, &ctx)
        .await
        .unwrap();

    assert!(result
        .report()
        .unwrap()
        .starts_with("COMPREHENSIVE NUTRITIONAL NEEDS:"));
    assert_eq!(result.content["nutrition"]["target_calories"], 2133);
    assert_eq!(result.content["activity"], "moderate");
}

#[tokio::test]
async fn test_nutrition_needs_requires_every_argument() {
    let (registry, ctx) = create_test_registry();
    let err = registry
        .execute("calculate_nutrition_needs", reference_profile_args(), &ctx)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_invalid_arguments_are_invalid_input() {
    let (registry, ctx) = create_test_registry();

    let cases = [
        json!({ "weight": 75, "height": 175, "age": -1, "gender": "male" }),
        json!({ "weight": 75, "height": 175, "age": 30, "gender": "other" }),
        json!({ "weight": 0, "height": 175, "age": 30 }),
        json!({ "weight": "heavy", "height": 175, "age": 30 }),
        json!({ "weight": 75, "height": 175, "age": 30.5 }),
        json!("not an object"),
    ];
    for args in cases {
        let err = registry
            .execute("calculate_training_metrics", args.clone(), &ctx.next_request())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "{args}");
    }
}

#[tokio::test]
async fn test_invalid_nutrition_arguments_are_invalid_input() {
    let (registry, ctx) = create_test_registry();

    let cases = [
        ("age", json!(-1)),
        ("age", json!(0)),
        ("gender", json!("other")),
        ("weight", json!(0)),
        ("height", json!(-175)),
        ("activity", json!("couch")),
        ("goal", json!("endurance")),
    ];
    for (field, value) in cases {
        let mut args = reference_profile_args();
        args["activity"] = json!("moderate");
        args["goal"] = json!("weight_loss");
        args[field] = value.clone();

        let err = registry
            .execute("calculate_nutrition_needs", args, &ctx.next_request())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "{field}={value}");
    }
}

#[tokio::test]
async fn test_numeric_strings_accepted() {
    let (registry, ctx) = create_test_registry();
    let result = registry
        .execute(
            "calculate_training_metrics",
            json!({ "weight": "75", "height": "175", "age": "30" }),
            &ctx,
        )
        .await
        .unwrap();
    assert_eq!(result.content["metrics"]["max_heart_rate"], 190);
}

#[tokio::test]
async fn test_workout_plan_tool() {
    let (registry, ctx) = create_test_registry();
    let result = registry
        .execute(
            "create_workout_plan",
            json!({
                "goal": "muscle_gain",
                "level": "advanced",
                "days": 5,
                "equipment": "gym",
            }),
            &ctx,
        )
        .await
        .unwrap();

    let report = result.report().unwrap();
    assert!(report.contains("Muscle Gain"));
    assert!(report.contains("advanced"));
    assert!(report.contains("5 days per week"));
    assert_eq!(result.content["specialist"], "workout_specialist");
}

#[tokio::test]
async fn test_workout_plan_days_validated() {
    let (registry, ctx) = create_test_registry();
    for days in [0, 8, -3, 300] {
        let err = registry
            .execute(
                "create_workout_plan",
                json!({ "goal": "strength", "level": "beginner", "days": days }),
                &ctx,
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "days {days}");
    }
}

#[tokio::test]
async fn test_meal_plan_tool() {
    let (registry, ctx) = create_test_registry();
    let result = registry
        .execute(
            "create_meal_plan",
            json!({ "goal": "muscle_gain", "calories": 2800, "restrictions": "vegetarian" }),
            &ctx,
        )
        .await
        .unwrap();

    let report = result.report().unwrap();
    assert!(report.starts_with("PERSONALIZED MEAL PLAN:"));
    assert!(report.contains("Daily Calories: 2800"));
    assert!(report.contains("Vegetarian"));
    assert_eq!(result.content["specialist"], "nutritionist");
}

#[tokio::test]
async fn test_meal_plan_rejects_non_nutrition_goal() {
    let (registry, ctx) = create_test_registry();
    let err = registry
        .execute(
            "create_meal_plan",
            json!({ "goal": "endurance", "calories": 2500 }),
            &ctx,
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
