// ABOUTME: Defines ToolExecutionContext, the per-call context handed to every tool
// ABOUTME: Carries a request id for log correlation and the calculator policy config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use fitness_intelligence::IntelligenceConfig;
use uuid::Uuid;

/// Context for one tool execution
#[derive(Debug, Clone)]
pub struct ToolExecutionContext {
    /// Correlates log lines of one call
    pub request_id: Uuid,
    config: Arc<IntelligenceConfig>,
}

impl ToolExecutionContext {
    /// Context with a fresh request id
    #[must_use]
    pub fn new(config: Arc<IntelligenceConfig>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            config,
        }
    }

    /// Context backed by [`IntelligenceConfig::global`]
    #[must_use]
    pub fn from_global_config() -> Self {
        Self::new(Arc::new(IntelligenceConfig::global().clone()))
    }

    /// Same config, new request id
    #[must_use]
    pub fn next_request(&self) -> Self {
        Self::new(Arc::clone(&self.config))
    }

    /// Calculator policy
    #[must_use]
    pub fn config(&self) -> &IntelligenceConfig {
        &self.config
    }
}

impl Default for ToolExecutionContext {
    fn default() -> Self {
        Self::new(Arc::new(IntelligenceConfig::default()))
    }
}
