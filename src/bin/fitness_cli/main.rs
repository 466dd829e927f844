// ABOUTME: Fitness AI CLI - runs the specialist tools from the command line without an LLM
// ABOUTME: Metrics, nutrition, workout and meal plans, tool listing, raw tool calls and config info
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Body metrics and heart-rate zones
//! fitness-ai-cli metrics --weight 75 --height 175 --age 30 --gender male
//!
//! # Daily nutrition needs as JSON
//! fitness-ai-cli --format json nutrition --weight 75 --height 175 --age 30 \
//!     --gender male --activity moderate --goal weight_loss
//!
//! # Workout and meal plans
//! fitness-ai-cli workout-plan --goal muscle_gain --level advanced --days 5 --equipment gym
//! fitness-ai-cli meal-plan --goal maintenance --calories 2400 --restrictions vegan
//!
//! # Tools as the agents see them
//! fitness-ai-cli tools list --category nutritionist
//! fitness-ai-cli tools call create_workout_plan --args '{"goal":"strength","level":"beginner","days":3}'
//!
//! # Effective configuration (secrets redacted)
//! fitness-ai-cli info
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fitness_ai::config::IntelligenceConfig;
use fitness_ai::errors::{AppError, AppResult};
use fitness_ai::logging::{LogFormat, LoggingConfig};
use fitness_ai::tools::{ToolExecutionContext, ToolRegistry};
use serde_json::json;
use tracing::debug;

use helpers::display::{print_error, OutputFormat};

#[derive(Parser)]
#[command(
    name = "fitness-ai-cli",
    about = "Fitness AI calculator tools",
    long_about = "Run the workout specialist and nutritionist tools directly: body metrics, nutrition needs, workout and meal plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text, global = true)]
    format: FormatArg,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Body measurements shared by the metrics and nutrition commands
#[derive(Args)]
struct ProfileArgs {
    /// Body weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Height in centimeters
    #[arg(long)]
    height: f64,

    /// Age in years
    #[arg(long, allow_negative_numbers = true)]
    age: i64,

    /// Gender: male or female
    #[arg(long, default_value = "male")]
    gender: String,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// BMI, BMR, TDEE estimates, max heart rate and training zones
    Metrics {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Daily calories, macros, protein and hydration
    Nutrition {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Activity level: sedentary, light, moderate, active, very_active
        #[arg(long)]
        activity: String,

        /// Goal: weight_loss, muscle_gain, maintenance, performance
        #[arg(long)]
        goal: String,
    },

    /// Workout plan for a goal and experience level
    WorkoutPlan {
        /// Goal: weight_loss, muscle_gain, strength, endurance, general_fitness, maintenance, performance
        #[arg(long)]
        goal: String,

        /// Experience level: beginner, intermediate, advanced
        #[arg(long)]
        level: String,

        /// Training days per week (1-7)
        #[arg(long, allow_negative_numbers = true)]
        days: i64,

        /// Equipment: none, basic, gym, home_gym
        #[arg(long, default_value = "basic")]
        equipment: String,
    },

    /// Meal plan for a calorie target
    MealPlan {
        /// Goal: weight_loss, muscle_gain, maintenance, performance
        #[arg(long)]
        goal: String,

        /// Daily calories (kcal)
        #[arg(long, allow_negative_numbers = true)]
        calories: i64,

        /// Dietary restriction: none, vegetarian, vegan, gluten_free, dairy_free
        #[arg(long, default_value = "none")]
        restrictions: String,
    },

    /// Inspect and call registered tools
    Tools {
        #[command(subcommand)]
        action: ToolsCommand,
    },

    /// Show effective agent and calculator configuration
    Info,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ToolsCommand {
    /// List tools, optionally for one specialist
    List {
        /// Category or specialist: workout, nutrition, workout_specialist, nutritionist
        #[arg(long)]
        category: Option<String>,
    },

    /// Call a tool with JSON arguments
    Call {
        /// Tool name
        name: String,

        /// Arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = OutputFormat::from(cli.format);

    let level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = LoggingConfig::from_env()
        .with_level(level)
        .with_format(LogFormat::Compact)
        .init()
    {
        eprintln!("Logging unavailable: {e}");
    }

    match run(cli.command, format).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e, format);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, format: OutputFormat) -> AppResult<()> {
    let config = Arc::new(IntelligenceConfig::load().map_err(AppError::from)?);
    let registry = ToolRegistry::with_builtin_tools();
    let context = ToolExecutionContext::new(Arc::clone(&config));
    debug!(tools = registry.len(), "CLI ready");

    match command {
        Command::Metrics { profile } => {
            let args = profile_json(&profile);
            commands::tools::call(&registry, &context, "calculate_training_metrics", args, format)
                .await
        }
        Command::Nutrition {
            profile,
            activity,
            goal,
        } => {
            let mut args = profile_json(&profile);
            args["activity"] = json!(activity);
            args["goal"] = json!(goal);
            commands::tools::call(&registry, &context, "calculate_nutrition_needs", args, format)
                .await
        }
        Command::WorkoutPlan {
            goal,
            level,
            days,
            equipment,
        } => {
            let args = json!({ "goal": goal, "level": level, "days": days, "equipment": equipment });
            commands::tools::call(&registry, &context, "create_workout_plan", args, format).await
        }
        Command::MealPlan {
            goal,
            calories,
            restrictions,
        } => {
            let args = json!({ "goal": goal, "calories": calories, "restrictions": restrictions });
            commands::tools::call(&registry, &context, "create_meal_plan", args, format).await
        }
        Command::Tools { action } => match action {
            ToolsCommand::List { category } => {
                commands::tools::list(&registry, category.as_deref(), format)
            }
            ToolsCommand::Call { name, args } => {
                let args = serde_json::from_str(&args).map_err(|e| {
                    AppError::invalid_input(format!("--args must be a JSON object: {e}"))
                })?;
                commands::tools::call(&registry, &context, &name, args, format).await
            }
        },
        Command::Info => commands::info::show(&registry, &config, format),
    }
}

fn profile_json(profile: &ProfileArgs) -> serde_json::Value {
    json!({
        "weight": profile.weight,
        "height": profile.height,
        "age": profile.age,
        "gender": profile.gender,
    })
}
