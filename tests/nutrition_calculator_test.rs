// ABOUTME: Integration tests for the nutrition calculator
// ABOUTME: Covers calorie targets, macro splits, protein and hydration guidance, and goal validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, default_config, female_profile, reference_profile};
use fitness_ai::errors::ErrorCode;
use fitness_ai::intelligence::{
    compute_macro_targets, compute_nutrition_needs, compute_nutrition_needs_with_split,
    compute_tdee, MacroSplit,
};
use fitness_ai::models::{ActivityLevel, BodyProfile, FitnessGoal, Gender};

#[test]
fn test_weight_loss_for_reference_profile() {
    let result = compute_nutrition_needs(
        &reference_profile(),
        ActivityLevel::Moderate,
        FitnessGoal::WeightLoss,
        &default_config(),
    )
    .unwrap();

    assert_eq!(result.goal, FitnessGoal::WeightLoss);
    assert_eq!(result.target_calories, 2133);
    assert_eq!(result.split, MacroSplit::new(30, 35, 35));
    assert_close(result.protein_g, 159.979_687_5, 1e-6);
    assert_close(result.carbs_g, 186.642_968_75, 1e-6);
    assert_close(result.fats_g, 82.952_430_6, 1e-6);

    let energy = result.energy.unwrap();
    assert_close(energy.bmr, 1698.75, 1e-9);
    assert_close(energy.tdee, 2633.0625, 1e-6);
    assert_close(energy.adjustment_kcal, -500.0, 1e-9);
    assert!(!energy.floored_at_bmr);
}

#[test]
fn test_goal_adjustments_against_tdee() {
    let config = default_config();
    let profile = reference_profile();
    let tdee = compute_tdee(&profile, ActivityLevel::Moderate, &config).unwrap();

    let target = |goal| {
        compute_nutrition_needs(&profile, ActivityLevel::Moderate, goal, &config)
            .unwrap()
            .target_calories
    };

    assert_eq!(target(FitnessGoal::MuscleGain), (tdee + 300.0).round() as u32);
    assert_eq!(target(FitnessGoal::Maintenance), tdee.round() as u32);
    assert_eq!(target(FitnessGoal::Performance), tdee.round() as u32);
}

#[test]
fn test_default_splits_per_goal() {
    let config = default_config();
    let cases = [
        (FitnessGoal::WeightLoss, MacroSplit::new(30, 35, 35)),
        (FitnessGoal::MuscleGain, MacroSplit::new(25, 45, 30)),
        (FitnessGoal::Maintenance, MacroSplit::new(25, 50, 25)),
        (FitnessGoal::Performance, MacroSplit::new(20, 55, 25)),
    ];
    for (goal, split) in cases {
        let result =
            compute_nutrition_needs(&reference_profile(), ActivityLevel::Light, goal, &config)
                .unwrap();
        assert_eq!(result.split, split, "{goal}");
        assert_eq!(result.split.total(), 100);
    }
}

#[test]
fn test_macro_calories_match_target() {
    let config = default_config();
    for goal in FitnessGoal::NUTRITION_GOALS {
        for activity in ActivityLevel::ALL {
            let result =
                compute_nutrition_needs(&female_profile(), activity, goal, &config).unwrap();
            let diff = (result.macro_calories() - f64::from(result.target_calories)).abs();
            assert!(diff <= 1.0, "{goal}/{activity}: off by {diff}");
        }
    }
}

#[test]
fn test_non_nutrition_goals_rejected() {
    let config = default_config();
    for goal in [
        FitnessGoal::Strength,
        FitnessGoal::Endurance,
        FitnessGoal::GeneralFitness,
    ] {
        let err = compute_nutrition_needs(
            &reference_profile(),
            ActivityLevel::Moderate,
            goal,
            &config,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("weight_loss"));
    }
}

#[test]
fn test_deficit_never_drops_below_bmr() {
    let mut config = default_config();
    config.nutrition.goal_adjustments.weight_loss_deficit_kcal = 1500.0;
    let small = BodyProfile::new(50.0, 155.0, 60, Gender::Female).unwrap();

    let result =
        compute_nutrition_needs(&small, ActivityLevel::Sedentary, FitnessGoal::WeightLoss, &config)
            .unwrap();
    let energy = result.energy.unwrap();

    assert!(energy.floored_at_bmr);
    assert_eq!(result.target_calories, energy.bmr.round() as u32);
}

#[test]
fn test_protein_guidance_by_goal() {
    let config = default_config();
    let profile = reference_profile();

    let loss = compute_nutrition_needs(
        &profile,
        ActivityLevel::Moderate,
        FitnessGoal::WeightLoss,
        &config,
    )
    .unwrap()
    .protein_guidance
    .unwrap();
    assert_close(loss.g_per_kg, 2.2, 1e-9);
    assert_close(loss.daily_g, 165.0, 1e-9);
    assert_eq!(loss.meals_per_day, 5);
    assert_close(loss.per_meal_g, 33.0, 1e-9);

    let maintenance = compute_nutrition_needs(
        &profile,
        ActivityLevel::Moderate,
        FitnessGoal::Maintenance,
        &config,
    )
    .unwrap()
    .protein_guidance
    .unwrap();
    assert_close(maintenance.g_per_kg, 1.6, 1e-9);
    assert_close(maintenance.daily_g, 120.0, 1e-9);
}

#[test]
fn test_hydration_scales_with_activity() {
    let config = default_config();
    let profile = BodyProfile::new(80.0, 180.0, 35, Gender::Male).unwrap();

    let active = compute_nutrition_needs(
        &profile,
        ActivityLevel::Active,
        FitnessGoal::Maintenance,
        &config,
    )
    .unwrap()
    .hydration
    .unwrap();
    assert_close(active.base_ml, 2800.0, 1e-9);
    assert_close(active.total_ml, 3300.0, 1e-9);
    assert_close(active.glasses, 13.2, 1e-9);

    let light = compute_nutrition_needs(
        &profile,
        ActivityLevel::Light,
        FitnessGoal::Maintenance,
        &config,
    )
    .unwrap()
    .hydration
    .unwrap();
    assert_close(light.total_ml, 3050.0, 1e-9);
}

#[test]
fn test_custom_split_must_sum_to_100() {
    let config = default_config();
    let err = compute_nutrition_needs_with_split(
        &reference_profile(),
        ActivityLevel::Moderate,
        FitnessGoal::Maintenance,
        MacroSplit::new(40, 40, 30),
        &config,
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let result = compute_nutrition_needs_with_split(
        &reference_profile(),
        ActivityLevel::Moderate,
        FitnessGoal::Maintenance,
        MacroSplit::new(40, 40, 20),
        &config,
    )
    .unwrap();
    assert_eq!(result.split, MacroSplit::new(40, 40, 20));
    assert_close(result.protein_g, 2633.0625 * 0.4 / 4.0, 1e-6);
}

#[test]
fn test_macro_targets_without_profile() {
    let config = default_config();
    let result = compute_macro_targets(FitnessGoal::WeightLoss, 2000, &config).unwrap();

    assert_eq!(result.target_calories, 2000);
    assert_close(result.protein_g, 150.0, 1e-9);
    assert_close(result.carbs_g, 175.0, 1e-9);
    assert!(result.energy.is_none());
    assert!(result.protein_guidance.is_none());
    assert!(result.hydration.is_none());

    assert!(compute_macro_targets(FitnessGoal::WeightLoss, 0, &config).is_err());
    assert!(compute_macro_targets(FitnessGoal::Strength, 2000, &config).is_err());
}

#[test]
fn test_nutrition_is_idempotent() {
    let config = default_config();
    let run = || {
        compute_nutrition_needs(
            &reference_profile(),
            ActivityLevel::VeryActive,
            FitnessGoal::MuscleGain,
            &config,
        )
        .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_invalid_profile_fields_rejected() {
    let config = default_config();
    let invalid = [
        BodyProfile {
            weight_kg: 0.0,
            ..reference_profile()
        },
        BodyProfile {
            height_cm: -175.0,
            ..reference_profile()
        },
        BodyProfile {
            weight_kg: f64::NAN,
            ..reference_profile()
        },
        BodyProfile {
            age: 0,
            ..reference_profile()
        },
    ];

    for profile in invalid {
        let tdee = compute_tdee(&profile, ActivityLevel::Moderate, &config).unwrap_err();
        assert_eq!(tdee.code, ErrorCode::InvalidInput, "{profile:?}");

        let needs = compute_nutrition_needs(
            &profile,
            ActivityLevel::Moderate,
            FitnessGoal::WeightLoss,
            &config,
        )
        .unwrap_err();
        assert_eq!(needs.code, ErrorCode::InvalidInput, "{profile:?}");
    }
}
