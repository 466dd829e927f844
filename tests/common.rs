// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, reference body profiles, and tool registry setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitness_ai`

use std::env;
use std::sync::{Arc, Once};

use fitness_ai::intelligence::IntelligenceConfig;
use fitness_ai::models::{BodyProfile, Gender};
use fitness_ai::tools::{ToolExecutionContext, ToolRegistry};
use serde_json::{json, Value};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 75 kg, 175 cm, 30 year old male
pub fn reference_profile() -> BodyProfile {
    BodyProfile::new(75.0, 175.0, 30, Gender::Male).unwrap()
}

/// 60 kg, 165 cm, 25 year old female
pub fn female_profile() -> BodyProfile {
    BodyProfile::new(60.0, 165.0, 25, Gender::Female).unwrap()
}

/// Default calculator policy
pub fn default_config() -> IntelligenceConfig {
    IntelligenceConfig::default()
}

/// Registry with every built-in tool plus a context on the default policy
pub fn create_test_registry() -> (ToolRegistry, ToolExecutionContext) {
    init_test_logging();
    (
        ToolRegistry::with_builtin_tools(),
        ToolExecutionContext::new(Arc::new(default_config())),
    )
}

/// Tool arguments for the reference profile
pub fn reference_profile_args() -> Value {
    json!({
        "weight": 75.0,
        "height": 175.0,
        "age": 30,
        "gender": "male",
    })
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} (+/- {tolerance}), got {actual}"
    );
}
