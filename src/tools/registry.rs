// ABOUTME: Central registry for calculator tools with per-specialist categories and execution
// ABOUTME: Provides tool discovery, schema listing, and feature-flag-based registration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Registry
//!
//! Central registry for tools, providing:
//! - Tool registration and lookup
//! - Category lists per specialist agent
//! - Feature-flag-based conditional registration
//! - Schema generation for the agents' function-calling setup

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::{AppResult, ToolError};

use super::context::ToolExecutionContext;
use super::result::ToolResult;
use super::schema::ToolSchema;
use super::traits::{McpTool, ToolCapabilities, ToolCategory};

/// Central registry for tools.
///
/// Built once at startup and then shared immutably (wrap it in an `Arc`).
///
/// # Example
///
/// ```
/// use fitness_ai::tools::registry::ToolRegistry;
///
/// let mut registry = ToolRegistry::new();
/// registry.register_builtin_tools();
/// assert!(registry.contains("calculate_training_metrics"));
/// ```
pub struct ToolRegistry {
    /// Registered tools by name
    tools: HashMap<String, Arc<dyn McpTool>>,
    /// Tool names per category, in registration order
    categories: HashMap<ToolCategory, Vec<String>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            categories: HashMap::new(),
        }
    }

    /// Registry with every tool enabled by feature flags
    #[must_use]
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_tools();
        registry
    }

    /// Register a tool under its own category
    ///
    /// # Returns
    ///
    /// `true` if the tool was registered, `false` if a tool with the same name exists
    pub fn register(&mut self, tool: Arc<dyn McpTool>) -> bool {
        let name = tool.name().to_owned();

        if self.tools.contains_key(&name) {
            warn!("Tool '{}' is already registered, skipping", name);
            return false;
        }

        debug!(
            "Registering tool '{}' ({}) with capabilities: {}",
            name,
            tool.category(),
            tool.capabilities().describe()
        );
        self.categories
            .entry(tool.category())
            .or_default()
            .push(name.clone());
        self.tools.insert(name, tool);
        true
    }

    /// Register a tool, failing on a duplicate name
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the name is taken
    pub fn try_register(&mut self, tool: Arc<dyn McpTool>) -> AppResult<()> {
        let name = tool.name();
        if self.register(tool) {
            Ok(())
        } else {
            Err(ToolError::already_registered(name).into())
        }
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpTool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// All tool names, sorted
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Tools owned by one specialist, in registration order
    #[must_use]
    pub fn tools_for(&self, category: ToolCategory) -> Vec<&Arc<dyn McpTool>> {
        self.categories
            .get(&category)
            .map(|names| names.iter().filter_map(|name| self.tools.get(name)).collect())
            .unwrap_or_default()
    }

    /// Tool names owned by one specialist, in registration order
    #[must_use]
    pub fn tools_in_category(&self, category: ToolCategory) -> Vec<&str> {
        self.categories
            .get(&category)
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Categories that have at least one tool
    #[must_use]
    pub fn categories(&self) -> Vec<ToolCategory> {
        ToolCategory::ALL
            .into_iter()
            .filter(|category| self.categories.contains_key(category))
            .collect()
    }

    /// Schemas of one specialist's tools
    #[must_use]
    pub fn schemas_for(&self, category: ToolCategory) -> Vec<ToolSchema> {
        self.tools_for(category)
            .into_iter()
            .map(|tool| schema_of(tool.as_ref()))
            .collect()
    }

    /// All tool schemas, sorted by name
    #[must_use]
    pub fn all_schemas(&self) -> Vec<ToolSchema> {
        self.tool_names()
            .into_iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| schema_of(tool.as_ref()))
            .collect()
    }

    /// Filter tools by capabilities
    #[must_use]
    pub fn filter_by_capabilities(&self, required: ToolCapabilities) -> Vec<&Arc<dyn McpTool>> {
        self.tools
            .values()
            .filter(|tool| tool.capabilities().contains(required))
            .collect()
    }

    /// Execute a tool by name
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown tool, otherwise whatever the
    /// tool returns (`InvalidInput` for bad arguments)
    pub async fn execute(
        &self,
        name: &str,
        args: Value,
        context: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let tool = self.get(name).ok_or_else(|| ToolError::not_found(name))?;

        let started = Instant::now();
        let outcome = tool.execute(args, context).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        match &outcome {
            Ok(_) => info!(
                request.id = %context.request_id,
                tool.name = name,
                tool.duration_ms = duration_ms,
                "Tool call succeeded"
            ),
            Err(e) => warn!(
                request.id = %context.request_id,
                tool.name = name,
                tool.duration_ms = duration_ms,
                error.code = e.code.as_str(),
                "Tool call failed: {}",
                e.message
            ),
        }
        outcome
    }

    /// Register all built-in tools based on feature flags
    pub fn register_builtin_tools(&mut self) {
        info!("Registering built-in tools...");

        #[cfg(feature = "tools-workout")]
        self.register_workout_tools();

        #[cfg(feature = "tools-nutrition")]
        self.register_nutrition_tools();

        info!("Registered {} built-in tools", self.tools.len());
    }

    /// Register workout specialist tools
    #[cfg(feature = "tools-workout")]
    fn register_workout_tools(&mut self) {
        use super::implementations::workout::create_workout_tools;

        debug!(
            "Registering workout tools (registry has {} tools)",
            self.tools.len()
        );
        for tool in create_workout_tools() {
            self.register(Arc::from(tool));
        }
        info!(
            "Registered workout tools (registry now has {} tools)",
            self.tools.len()
        );
    }

    /// Register nutritionist tools
    #[cfg(feature = "tools-nutrition")]
    fn register_nutrition_tools(&mut self) {
        use super::implementations::nutrition::create_nutrition_tools;

        debug!(
            "Registering nutrition tools (registry has {} tools)",
            self.tools.len()
        );
        for tool in create_nutrition_tools() {
            self.register(Arc::from(tool));
        }
        info!(
            "Registered nutrition tools (registry now has {} tools)",
            self.tools.len()
        );
    }
}

fn schema_of(tool: &dyn McpTool) -> ToolSchema {
    ToolSchema {
        name: tool.name().to_owned(),
        description: tool.description().to_owned(),
        input_schema: tool.input_schema(),
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tool_count", &self.tools.len())
            .field("tools", &self.tool_names())
            .field("categories", &self.categories())
            .finish()
    }
}
