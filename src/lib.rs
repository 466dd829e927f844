// ABOUTME: Main library entry point for the Fitness AI tool layer
// ABOUTME: Exposes the calculation engine to a supervisor agent and its two specialists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness AI
//!
//! A supervisor agent routes user questions to a workout specialist or a
//! nutritionist. Each specialist calls a small set of deterministic tools
//! backed by the `fitness-intelligence` calculators. This crate provides
//! those tools, their registry, the agent configuration and logging setup.
//!
//! ## Architecture
//!
//! - **fitness-core**: errors, domain models, constants
//! - **fitness-intelligence**: metrics and nutrition calculators, plan formatters
//! - **tools** (this crate): named tools with JSON schemas, grouped per specialist
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitness_ai::errors::AppResult;
//! use fitness_ai::tools::{ToolExecutionContext, ToolRegistry};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let registry = ToolRegistry::with_builtin_tools();
//!     let context = ToolExecutionContext::default();
//!     let result = registry
//!         .execute(
//!             "calculate_training_metrics",
//!             json!({ "weight": 75, "height": 175, "age": 30, "gender": "male" }),
//!             &context,
//!         )
//!         .await?;
//!     println!("{}", result.report().unwrap_or_default());
//!     Ok(())
//! }
//! ```

/// Agent runtime and calculator policy configuration
pub mod config;

/// Error types shared with the calculators
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Tools the specialist agents call
pub mod tools;

pub use fitness_core::{constants, models};
pub use fitness_intelligence as intelligence;
