// ABOUTME: Meal plan formatter for the nutritionist
// ABOUTME: Embeds precomputed macro numbers; dietary restriction selects the food lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Write as _};

use fitness_core::errors::{AppError, AppResult};
use fitness_core::models::{DietaryRestriction, MealPlanRequest};
use tracing::debug;

use crate::nutrition_calculator::NutritionResult;

/// Food suggestions for one dietary restriction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodSuggestions {
    /// Protein sources
    pub protein: &'static str,
    /// Carbohydrate sources
    pub carbs: &'static str,
    /// Fat sources
    pub fats: &'static str,
}

/// Food list for a restriction
#[must_use]
pub const fn food_suggestions(restriction: DietaryRestriction) -> FoodSuggestions {
    match restriction {
        DietaryRestriction::None => FoodSuggestions {
            protein: "Chicken, fish, eggs, Greek yogurt, lean beef, cottage cheese",
            carbs: "Rice, oats, sweet potato, quinoa, fruits, whole grain bread",
            fats: "Avocado, nuts, olive oil, salmon, seeds",
        },
        DietaryRestriction::Vegetarian => FoodSuggestions {
            protein: "Eggs, Greek yogurt, legumes, tofu, cheese, protein powder",
            carbs: "Rice, oats, sweet potato, quinoa, fruits, whole grains",
            fats: "Avocado, nuts, olive oil, seeds, nut butters",
        },
        DietaryRestriction::Vegan => FoodSuggestions {
            protein: "Legumes, tofu, tempeh, seitan, plant protein powder, nuts",
            carbs: "Rice, oats, sweet potato, quinoa, fruits, whole grains",
            fats: "Avocado, nuts, olive oil, seeds, tahini, coconut",
        },
        DietaryRestriction::GlutenFree => FoodSuggestions {
            protein: "Chicken, fish, eggs, Greek yogurt, legumes, quinoa",
            carbs: "Rice, quinoa, sweet potato, fruits, GF oats, potatoes",
            fats: "Avocado, nuts, olive oil, salmon, seeds",
        },
        DietaryRestriction::DairyFree => FoodSuggestions {
            protein: "Chicken, fish, eggs, legumes, tofu, plant protein",
            carbs: "Rice, oats, sweet potato, quinoa, fruits, vegetables",
            fats: "Avocado, nuts, olive oil, coconut oil, seeds",
        },
    }
}

/// Render a meal plan around an already computed nutrition result
///
/// # Errors
///
/// Returns `InvalidInput` if the request's goal differs from the result's, or
/// its calories differ from the result's target by more than 1 kcal
pub fn format_meal_plan(req: &MealPlanRequest, nutrition: &NutritionResult) -> AppResult<String> {
    if req.goal() != nutrition.goal {
        return Err(AppError::invalid_input(format!(
            "Meal plan goal '{}' does not match nutrition result goal '{}'",
            req.goal(),
            nutrition.goal
        )));
    }
    if req.target_calories().abs_diff(nutrition.target_calories) > 1 {
        return Err(AppError::invalid_input(format!(
            "Meal plan calories {} do not match nutrition target {}",
            req.target_calories(),
            nutrition.target_calories
        )));
    }

    let mut out = String::new();
    render(&mut out, *req, nutrition)
        .map_err(|e| AppError::internal(format!("Failed to render meal plan: {e}")))?;

    debug!(
        goal = req.goal().as_str(),
        calories = req.target_calories(),
        restriction = req.restriction().as_str(),
        "Formatted meal plan"
    );
    Ok(out)
}

fn render(out: &mut String, req: MealPlanRequest, nutrition: &NutritionResult) -> fmt::Result {
    let split = nutrition.split;
    let foods = food_suggestions(req.restriction());
    let per_meal = nutrition.protein_g / f64::from(nutrition.meals_per_day.max(1));

    writeln!(out, "PERSONALIZED MEAL PLAN:")?;
    writeln!(out, "Goal: {}", req.goal().label())?;
    writeln!(out, "Daily Calories: {}", req.target_calories())?;
    writeln!(out, "Dietary Restrictions: {}", req.restriction().label())?;
    writeln!(out)?;
    writeln!(out, "MACRONUTRIENT BREAKDOWN:")?;
    writeln!(
        out,
        "- Protein: {:.0}g ({}% of calories)",
        nutrition.protein_g, split.protein_pct
    )?;
    writeln!(
        out,
        "- Carbohydrates: {:.0}g ({}% of calories)",
        nutrition.carbs_g, split.carbs_pct
    )?;
    writeln!(
        out,
        "- Fats: {:.0}g ({}% of calories)",
        nutrition.fats_g, split.fats_pct
    )?;
    writeln!(out)?;
    writeln!(out, "MEAL STRUCTURE:")?;
    writeln!(out, "- 3 main meals + 2 healthy snacks")?;
    writeln!(
        out,
        "- Protein with every meal (aim for {per_meal:.0}g per meal/snack)"
    )?;
    writeln!(out, "- Vegetables with lunch and dinner")?;
    writeln!(out, "- Pre/post workout nutrition timing")?;
    writeln!(out)?;
    writeln!(out, "FOOD RECOMMENDATIONS:")?;
    writeln!(out, "Protein Sources: {}", foods.protein)?;
    writeln!(out, "Carbohydrate Sources: {}", foods.carbs)?;
    writeln!(out, "Healthy Fats: {}", foods.fats)?;
    writeln!(out)?;
    writeln!(out, "HYDRATION & TIMING:")?;
    writeln!(out, "- 8-10 glasses of water daily")?;
    writeln!(out, "- Extra water around workouts")?;
    writeln!(out, "- Eat protein within 2 hours post-workout")?;
    writeln!(out, "- Space meals 3-4 hours apart")?;
    writeln!(out)?;
    write!(
        out,
        "Duration: Follow for 2-4 weeks, then reassess and adjust based on progress"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vegan_foods_have_no_animal_protein() {
        let foods = food_suggestions(DietaryRestriction::Vegan);
        for animal in ["Chicken", "fish", "eggs", "yogurt", "cheese"] {
            assert!(!foods.protein.contains(animal), "{animal}");
        }
    }

    #[test]
    fn test_dairy_free_foods_have_no_dairy() {
        let foods = food_suggestions(DietaryRestriction::DairyFree);
        assert!(!foods.protein.contains("yogurt"));
        assert!(!foods.protein.contains("cheese"));
    }
}
