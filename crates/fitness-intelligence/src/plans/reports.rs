// ABOUTME: Fixed-section text reports for metrics and nutrition results
// ABOUTME: The agents relay these to users; numbers come straight from the calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Write as _};

use fitness_core::errors::{AppError, AppResult};
use fitness_core::models::{ActivityLevel, BodyProfile};

use crate::metrics_calculator::MetricsResult;
use crate::nutrition_calculator::NutritionResult;

/// Render the training metrics report
///
/// # Errors
///
/// Returns an error only if writing to the output buffer fails
pub fn format_metrics_report(
    profile: &BodyProfile,
    metrics: &MetricsResult,
) -> AppResult<String> {
    let mut out = String::new();
    write_metrics(&mut out, profile, metrics)
        .map_err(|e| AppError::internal(format!("Failed to render metrics report: {e}")))?;
    Ok(out)
}

/// Render the nutrition needs report; sections without data are omitted
///
/// # Errors
///
/// Returns an error only if writing to the output buffer fails
pub fn format_nutrition_report(
    profile: &BodyProfile,
    nutrition: &NutritionResult,
) -> AppResult<String> {
    let mut out = String::new();
    write_nutrition(&mut out, profile, nutrition)
        .map_err(|e| AppError::internal(format!("Failed to render nutrition report: {e}")))?;
    Ok(out)
}

fn write_metrics(out: &mut String, profile: &BodyProfile, metrics: &MetricsResult) -> fmt::Result {
    writeln!(out, "FITNESS METRICS CALCULATED:")?;
    writeln!(out)?;
    writeln!(out, "Body Composition:")?;
    writeln!(
        out,
        "- BMI: {:.1} ({})",
        metrics.bmi,
        metrics.bmi_category.label()
    )?;
    writeln!(out, "- Height: {} cm", profile.height_cm)?;
    writeln!(out, "- Weight: {} kg", profile.weight_kg)?;
    writeln!(out)?;
    writeln!(out, "Metabolic Rate:")?;
    writeln!(
        out,
        "- BMR (Base Metabolic Rate): {:.0} calories/day",
        metrics.bmr
    )?;
    writeln!(out, "- TDEE Estimates:")?;
    for estimate in &metrics.tdee_estimates {
        writeln!(
            out,
            "  • {}: {:.0} calories/day",
            estimate.activity.label(),
            estimate.tdee
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Heart Rate Training Zones:")?;
    for zone in &metrics.heart_rate_zones {
        writeln!(
            out,
            "- {}: {}-{} bpm ({}-{}% max HR)",
            zone.zone.label(),
            zone.min_bpm,
            zone.max_bpm,
            zone.lower_pct,
            zone.upper_pct
        )?;
    }
    writeln!(
        out,
        "- Maximum Heart Rate: {} bpm ({})",
        metrics.max_heart_rate,
        metrics.max_hr_algorithm.formula()
    )?;
    writeln!(out)?;
    writeln!(out, "Training Recommendations:")?;
    writeln!(out, "- Monitor heart rate during workouts")?;
    writeln!(out, "- Track progress with weekly measurements")?;
    writeln!(out, "- Adjust calorie intake based on activity level")?;
    write!(out, "- Focus on consistency over intensity for beginners")
}

fn write_nutrition(
    out: &mut String,
    profile: &BodyProfile,
    nutrition: &NutritionResult,
) -> fmt::Result {
    writeln!(out, "COMPREHENSIVE NUTRITIONAL NEEDS:")?;
    writeln!(out)?;
    writeln!(out, "Personal Information:")?;
    writeln!(out, "- Gender: {}", profile.gender.label())?;
    writeln!(out, "- Age: {} years", profile.age)?;
    writeln!(out, "- Weight: {} kg", profile.weight_kg)?;
    writeln!(out, "- Height: {} cm", profile.height_cm)?;
    if let Some(energy) = &nutrition.energy {
        writeln!(out, "- Activity Level: {}", energy.activity.label())?;
    }
    writeln!(out)?;

    writeln!(out, "Caloric Requirements:")?;
    if let Some(energy) = &nutrition.energy {
        writeln!(
            out,
            "- BMR (Base Metabolic Rate): {:.0} calories/day",
            energy.bmr
        )?;
        writeln!(
            out,
            "- TDEE (Total Daily Energy): {:.0} calories/day",
            energy.tdee
        )?;
    }
    writeln!(
        out,
        "- Target Calories for {}: {} calories/day",
        nutrition.goal.label(),
        nutrition.target_calories
    )?;
    if nutrition.energy.is_some_and(|energy| energy.floored_at_bmr) {
        writeln!(
            out,
            "- Deficit limited so intake does not drop below BMR"
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Macronutrient Split:")?;
    writeln!(
        out,
        "- Protein: {:.0}g ({}%)",
        nutrition.protein_g, nutrition.split.protein_pct
    )?;
    writeln!(
        out,
        "- Carbohydrates: {:.0}g ({}%)",
        nutrition.carbs_g, nutrition.split.carbs_pct
    )?;
    writeln!(
        out,
        "- Fats: {:.0}g ({}%)",
        nutrition.fats_g, nutrition.split.fats_pct
    )?;
    writeln!(out)?;

    if let Some(protein) = &nutrition.protein_guidance {
        writeln!(out, "Protein Requirements:")?;
        writeln!(out, "- Daily Protein Target: {:.0}g", protein.daily_g)?;
        writeln!(
            out,
            "- Protein per meal ({} meals): {:.0}g",
            protein.meals_per_day, protein.per_meal_g
        )?;
        writeln!(
            out,
            "- Protein per kg body weight: {:.1}g/kg",
            protein.g_per_kg
        )?;
        writeln!(out)?;
    }

    if let Some(water) = &nutrition.hydration {
        writeln!(out, "Hydration Requirements:")?;
        writeln!(
            out,
            "- Daily Water Target: {:.0}ml ({:.1} glasses)",
            water.total_ml, water.glasses
        )?;
        writeln!(out, "- Base requirement: {:.0}ml", water.base_ml)?;
        writeln!(out, "- Exercise addition: {:.0}ml", water.exercise_ml)?;
        writeln!(out, "- Pre-workout: 250ml (1 hour before)")?;
        writeln!(out, "- During workout: 150-250ml every 15-20 minutes")?;
        writeln!(out, "- Post-workout: 150% of fluid lost through sweat")?;
        writeln!(out)?;
    }

    writeln!(out, "Micronutrient Focus Areas:")?;
    for line in MICRONUTRIENTS {
        writeln!(out, "- {line}")?;
    }
    writeln!(out)?;
    writeln!(out, "Meal Timing Recommendations:")?;
    writeln!(out, "- Eat within 1 hour of waking")?;
    writeln!(out, "- Pre-workout: Carbs 1-2 hours before")?;
    writeln!(out, "- Post-workout: Protein + carbs within 30 minutes")?;
    write!(out, "- Last meal: 2-3 hours before bed")?;

    if nutrition
        .energy
        .is_some_and(|energy| energy.activity >= ActivityLevel::Active)
    {
        write!(
            out,
            "\n- Add a carbohydrate snack on double-session days"
        )?;
    }
    Ok(())
}

const MICRONUTRIENTS: [&str; 6] = [
    "Vitamin D: Bone health and immune function",
    "B-Complex: Energy metabolism",
    "Iron: Oxygen transport (especially for active individuals)",
    "Omega-3: Anti-inflammatory and recovery",
    "Magnesium: Muscle function and recovery",
    "Zinc: Immune function and protein synthesis",
];
