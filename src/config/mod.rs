// ABOUTME: Configuration module for the agent runtime and calculation policy
// ABOUTME: Re-exports AgentConfig and the intelligence crate's IntelligenceConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the tool layer and the agents that consume it.
//!
//! - **agent**: model, temperature, token budget, tracing, log level
//! - **intelligence**: calculator policy (splits, zones, thresholds), owned by
//!   `fitness-intelligence` and re-exported here

/// Language model and agent runtime settings
pub mod agent;

pub use agent::{load_dotenv, load_dotenv_from, AgentConfig, AgentLogLevel};
pub use fitness_intelligence::config::{ConfigError, IntelligenceConfig};
