// ABOUTME: Defines the McpTool trait, ToolCapabilities flags and the specialist ToolCategory
// ABOUTME: Tools implement this trait to be registered and executed via the ToolRegistry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Trait and Capabilities
//!
//! Every calculator or formatter the agents can call implements [`McpTool`]:
//! - metadata (name, description, input schema)
//! - capability flags for discovery and logging
//! - async execution against a [`ToolExecutionContext`]

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use bitflags::bitflags;
use fitness_core::constants::service_names;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{AppError, AppResult};

use super::context::ToolExecutionContext;
use super::result::ToolResult;
use super::schema::JsonSchema;

bitflags! {
    /// Capabilities that tools declare for filtering and discovery
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool computes numbers from measurements
        const ANALYTICS = 0b0000_0001;
        /// Tool renders a plan from a catalog
        const PLANNING = 0b0000_0010;
        /// Tool needs body measurements (weight, height, age, gender)
        const REQUIRES_PROFILE = 0b0000_0100;
        /// Tool output concerns training
        const TRAINING = 0b0000_1000;
        /// Tool output concerns diet
        const NUTRITION = 0b0001_0000;
    }
}

impl ToolCapabilities {
    /// Check if tool performs calculations
    #[must_use]
    pub const fn is_analytics(self) -> bool {
        self.contains(Self::ANALYTICS)
    }

    /// Check if tool produces a plan
    #[must_use]
    pub const fn is_planning(self) -> bool {
        self.contains(Self::PLANNING)
    }

    /// Check if tool needs a body profile
    #[must_use]
    pub const fn requires_profile(self) -> bool {
        self.contains(Self::REQUIRES_PROFILE)
    }

    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let names = [
            (Self::ANALYTICS, "analytics"),
            (Self::PLANNING, "planning"),
            (Self::REQUIRES_PROFILE, "requires_profile"),
            (Self::TRAINING, "training"),
            (Self::NUTRITION, "nutrition"),
        ];
        let parts: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|&(_, name)| name)
            .collect();

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// Which specialist agent owns a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    /// Training plans and training metrics
    Workout,
    /// Meal plans and nutrition needs
    Nutrition,
}

impl ToolCategory {
    /// All categories
    pub const ALL: [Self; 2] = [Self::Workout, Self::Nutrition];

    /// Registry category key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Workout => "workout",
            Self::Nutrition => "nutrition",
        }
    }

    /// Name of the specialist agent that calls these tools
    #[must_use]
    pub const fn specialist(&self) -> &'static str {
        match self {
            Self::Workout => service_names::WORKOUT_SPECIALIST,
            Self::Nutrition => service_names::NUTRITIONIST,
        }
    }
}

impl FromStr for ToolCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "workout" | "workout_specialist" => Ok(Self::Workout),
            "nutrition" | "nutritionist" => Ok(Self::Nutrition),
            _ => Err(AppError::invalid_input(format!(
                "Unknown tool category '{s}'. Must be one of: workout, nutrition, workout_specialist, nutritionist"
            ))),
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named tool the agents can call with JSON arguments
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique tool name
    fn name(&self) -> &'static str;

    /// Description shown to the language model
    fn description(&self) -> &'static str;

    /// JSON schema of the arguments
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags
    fn capabilities(&self) -> ToolCapabilities;

    /// Owning specialist
    fn category(&self) -> ToolCategory;

    /// Run the tool
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for missing, mistyped or out-of-range arguments
    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult>;
}
