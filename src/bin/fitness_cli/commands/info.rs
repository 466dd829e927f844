// ABOUTME: Info command for fitness-ai-cli
// ABOUTME: Shows agent configuration (redacted), calculator policy and registered tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_ai::config::{AgentConfig, IntelligenceConfig};
use fitness_ai::errors::AppResult;
use fitness_ai::tools::ToolRegistry;
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::helpers::display::{print_json, print_rows, OutputFormat};

/// Print effective configuration
pub fn show(registry: &ToolRegistry, config: &IntelligenceConfig, format: OutputFormat) -> AppResult<()> {
    let agent = AgentConfig::from_env().unwrap_or_else(|e| {
        warn!("Agent configuration invalid ({}), showing defaults", e.message);
        AgentConfig::default()
    });
    if agent.require_api_key().is_err() {
        warn!("OPENAI_API_KEY is not set; the agents cannot start without it");
    }

    let summary = agent.summary();
    let metrics = &config.metrics;
    let nutrition = &config.nutrition;

    match format {
        OutputFormat::Json => {
            let agent_json: Map<String, Value> = summary
                .iter()
                .map(|(key, value)| ((*key).to_owned(), Value::String(value.clone())))
                .collect();
            print_json(&json!({
                "version": env!("CARGO_PKG_VERSION"),
                "agent": agent_json,
                "intelligence": config,
                "tools": registry.tool_names(),
            }))
        }
        OutputFormat::Text => {
            print_rows("Agent", &summary);
            print_rows(
                "Calculator policy",
                &[
                    ("max_hr_algorithm", metrics.max_hr_algorithm.formula().to_owned()),
                    (
                        "bmi_thresholds",
                        format!(
                            "{} / {} / {}",
                            metrics.bmi.normal_min, metrics.bmi.overweight_min, metrics.bmi.obese_min
                        ),
                    ),
                    (
                        "weight_loss_deficit",
                        format!("{} kcal", nutrition.goal_adjustments.weight_loss_deficit_kcal),
                    ),
                    (
                        "muscle_gain_surplus",
                        format!("{} kcal", nutrition.goal_adjustments.muscle_gain_surplus_kcal),
                    ),
                ],
            );
            let tools: Vec<(&str, String)> = registry
                .categories()
                .into_iter()
                .map(|category| (category.specialist(), registry.tools_in_category(category).join(", ")))
                .collect();
            print_rows("Tools", &tools);
            Ok(())
        }
    }
}
