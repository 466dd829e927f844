// ABOUTME: Tool layer exposing the calculators to the supervisor and specialist agents
// ABOUTME: Tool trait, registry, schemas, execution context, results and implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tools
//!
//! The agent layer discovers tools through [`ToolRegistry`], hands each
//! specialist the schemas of its own category, and executes calls by name
//! with JSON arguments.

/// Per-call execution context
pub mod context;
/// Tool implementations by specialist
pub mod implementations;
/// Tool registry
pub mod registry;
/// Tool results
pub mod result;
/// Argument schemas
pub mod schema;
/// Tool trait, capabilities and categories
pub mod traits;

pub use context::ToolExecutionContext;
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use schema::{JsonSchema, PropertySchema, ToolSchema};
pub use traits::{McpTool, ToolCapabilities, ToolCategory};
