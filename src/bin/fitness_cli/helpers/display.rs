// ABOUTME: Output formatting helpers for fitness-ai-cli
// ABOUTME: Prints tool results, tool lists and errors as text or pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_ai::errors::{AppError, ErrorResponse};
use fitness_ai::tools::ToolResult;
use serde::Serialize;
use serde_json::Value;

/// How command output is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a tool result: its report as text, or the whole payload as JSON
pub fn print_tool_result(result: &ToolResult, format: OutputFormat) -> Result<(), AppError> {
    match (format, result.report()) {
        (OutputFormat::Text, Some(report)) => {
            println!("{report}");
            Ok(())
        }
        (OutputFormat::Text, None) => print_json(&result.content),
        (OutputFormat::Json, _) => print_json(&result.content),
    }
}

/// Print an error to stderr (text) or stdout (JSON error body)
pub fn print_error(error: &AppError, format: OutputFormat) {
    match format {
        OutputFormat::Text => eprintln!("Error: {error}"),
        OutputFormat::Json => {
            let body = serde_json::to_string_pretty(&ErrorResponse::from(error))
                .unwrap_or_else(|_| Value::String(error.to_string()).to_string());
            println!("{body}");
        }
    }
}

/// Print `label: value` rows aligned on the colon
pub fn print_rows(title: &str, rows: &[(&str, String)]) {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    for (label, value) in rows {
        println!("  {label:<width$} : {value}");
    }
    println!();
}
