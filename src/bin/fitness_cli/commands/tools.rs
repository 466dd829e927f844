// ABOUTME: Tool commands for fitness-ai-cli
// ABOUTME: Lists registered tools per specialist and executes a tool by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_ai::errors::AppResult;
use fitness_ai::tools::{ToolCategory, ToolExecutionContext, ToolRegistry, ToolSchema};
use serde_json::{json, Value};
use tracing::info;

use crate::helpers::display::{print_json, print_tool_result, OutputFormat};

/// Execute one tool and print its result
pub async fn call(
    registry: &ToolRegistry,
    context: &ToolExecutionContext,
    name: &str,
    args: Value,
    format: OutputFormat,
) -> AppResult<()> {
    info!("Calling tool {}", name);
    let result = registry.execute(name, args, context).await?;
    print_tool_result(&result, format)
}

/// List tools, grouped by specialist
pub fn list(registry: &ToolRegistry, category: Option<&str>, format: OutputFormat) -> AppResult<()> {
    let categories = match category {
        Some(raw) => vec![raw.parse::<ToolCategory>()?],
        None => registry.categories(),
    };

    match format {
        OutputFormat::Json => {
            let groups: Vec<Value> = categories
                .iter()
                .map(|&category| {
                    json!({
                        "category": category,
                        "specialist": category.specialist(),
                        "tools": registry.schemas_for(category),
                    })
                })
                .collect();
            print_json(&groups)
        }
        OutputFormat::Text => {
            for category in categories {
                println!("{} ({category})", category.specialist());
                for schema in registry.schemas_for(category) {
                    print_schema(&schema);
                }
                println!();
            }
            Ok(())
        }
    }
}

fn print_schema(schema: &ToolSchema) {
    println!("  {}", schema.name);
    println!("    {}", schema.description);
    let required = schema.input_schema.required.clone().unwrap_or_default();
    let is_required = |name: &str| required.iter().any(|r| r == name);
    if let Some(properties) = &schema.input_schema.properties {
        let mut names: Vec<&str> = properties.keys().map(String::as_str).collect();
        names.sort_unstable_by(|a, b| is_required(b).cmp(&is_required(a)).then(a.cmp(b)));
        for name in names {
            let marker = if is_required(name) { "*" } else { " " };
            if let Some(property) = properties.get(name) {
                println!(
                    "    {marker} {name} ({}): {}",
                    property.property_type,
                    property.description.as_deref().unwrap_or("")
                );
            }
        }
    }
}
