// ABOUTME: Integration tests for calculator policy, agent runtime and logging configuration
// ABOUTME: Environment overrides are exercised serially since tests share the process env
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::fs;

use common::{assert_close, reference_profile};
use fitness_ai::config::{
    load_dotenv_from, AgentConfig, AgentLogLevel, ConfigError, IntelligenceConfig,
};
use fitness_ai::errors::{AppError, ErrorCode};
use fitness_ai::intelligence::{compute_metrics, MaxHrAlgorithm};
use fitness_ai::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const FITNESS_VARS: [&str; 4] = [
    "FITNESS_MAX_HR_ALGORITHM",
    "FITNESS_WEIGHT_LOSS_DEFICIT_KCAL",
    "FITNESS_MUSCLE_GAIN_SURPLUS_KCAL",
    "FITNESS_PROTEIN_MEALS_PER_DAY",
];

const AGENT_VARS: [&str; 6] = [
    "OPENAI_MODEL",
    "OPENAI_TEMPERATURE",
    "OPENAI_MAX_TOKENS",
    "OPENAI_API_KEY",
    "LOG_LEVEL",
    "DEBUG_MODE",
];

fn clear(vars: &[&str]) {
    for var in vars {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_intelligence_defaults_load() {
    clear(&FITNESS_VARS);
    let config = IntelligenceConfig::load().unwrap();

    assert_eq!(config.metrics.max_hr_algorithm, MaxHrAlgorithm::Fox);
    assert_close(
        config.nutrition.goal_adjustments.weight_loss_deficit_kcal,
        500.0,
        f64::EPSILON,
    );
    assert_close(
        config.nutrition.goal_adjustments.muscle_gain_surplus_kcal,
        300.0,
        f64::EPSILON,
    );
}

#[test]
#[serial]
fn test_intelligence_env_overrides() {
    clear(&FITNESS_VARS);
    env::set_var("FITNESS_MAX_HR_ALGORITHM", "tanaka");
    env::set_var("FITNESS_MUSCLE_GAIN_SURPLUS_KCAL", "450");

    let config = IntelligenceConfig::load();
    clear(&FITNESS_VARS);
    let config = config.unwrap();

    assert_eq!(config.metrics.max_hr_algorithm, MaxHrAlgorithm::Tanaka);
    assert_close(
        config.nutrition.goal_adjustments.muscle_gain_surplus_kcal,
        450.0,
        f64::EPSILON,
    );
    let metrics = compute_metrics(&reference_profile(), &config).unwrap();
    assert_eq!(metrics.max_heart_rate, 187);
}

#[test]
#[serial]
fn test_intelligence_env_parse_error() {
    clear(&FITNESS_VARS);
    env::set_var("FITNESS_WEIGHT_LOSS_DEFICIT_KCAL", "lots");

    let result = IntelligenceConfig::load();
    clear(&FITNESS_VARS);

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_intelligence_env_out_of_range_rejected() {
    clear(&FITNESS_VARS);
    env::set_var("FITNESS_PROTEIN_MEALS_PER_DAY", "0");

    let result = IntelligenceConfig::load();
    clear(&FITNESS_VARS);

    let err = AppError::from(result.unwrap_err());
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_agent_config_defaults() {
    clear(&AGENT_VARS);
    let config = AgentConfig::from_env().unwrap();

    assert_eq!(config.model, "gpt-4o-mini");
    assert_close(config.temperature, 0.1, f64::EPSILON);
    assert_eq!(config.max_tokens, 1000);
    assert_eq!(config.log_level, AgentLogLevel::Info);
    assert!(!config.debug_mode);
    assert_eq!(
        config.require_api_key().unwrap_err().code,
        ErrorCode::ConfigMissing
    );
}

#[test]
#[serial]
fn test_agent_config_from_env() {
    clear(&AGENT_VARS);
    env::set_var("OPENAI_MODEL", "gpt-4o");
    env::set_var("OPENAI_TEMPERATURE", "0.4");
    env::set_var("OPENAI_API_KEY", "sk-test-key");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("DEBUG_MODE", "true");

    let config = AgentConfig::from_env();
    clear(&AGENT_VARS);
    let config = config.unwrap();

    assert_eq!(config.model, "gpt-4o");
    assert_close(config.temperature, 0.4, f64::EPSILON);
    assert_eq!(config.require_api_key().unwrap(), "sk-test-key");
    assert_eq!(config.log_level, AgentLogLevel::Debug);
    assert!(config.debug_mode);

    let summary = config.summary();
    assert!(summary
        .iter()
        .all(|(_, value)| !value.contains("sk-test-key")));
    let serialized = serde_json::to_string(&config).unwrap();
    assert!(!serialized.contains("sk-test-key"));
}

#[test]
#[serial]
fn test_agent_config_rejects_bad_values() {
    clear(&AGENT_VARS);
    env::set_var("OPENAI_TEMPERATURE", "1.7");
    let temperature = AgentConfig::from_env();
    clear(&AGENT_VARS);
    assert_eq!(temperature.unwrap_err().code, ErrorCode::ConfigInvalid);

    env::set_var("LOG_LEVEL", "chatty");
    let level = AgentConfig::from_env();
    clear(&AGENT_VARS);
    assert!(level.is_err());

    env::set_var("OPENAI_MAX_TOKENS", "many");
    let tokens = AgentConfig::from_env();
    clear(&AGENT_VARS);
    assert!(tokens.is_err());
}

#[test]
#[serial]
fn test_env_file_supplies_agent_settings() {
    clear(&AGENT_VARS);
    let temp_dir = tempfile::tempdir().unwrap();
    let env_path = temp_dir.path().join(".env");
    fs::write(
        &env_path,
        "OPENAI_API_KEY=sk-from-file\nOPENAI_MODEL=gpt-4o\nLOG_LEVEL=WARNING\n",
    )
    .unwrap();

    load_dotenv_from(&env_path).unwrap();
    let config = AgentConfig::from_env();
    clear(&AGENT_VARS);
    let config = config.unwrap();

    assert_eq!(config.require_api_key().unwrap(), "sk-from-file");
    assert_eq!(config.model, "gpt-4o");
    assert_eq!(config.log_level, AgentLogLevel::Warning);
}

#[test]
#[serial]
fn test_env_file_does_not_override_process_env() {
    clear(&AGENT_VARS);
    env::set_var("OPENAI_MODEL", "gpt-4o-mini");
    let temp_dir = tempfile::tempdir().unwrap();
    let env_path = temp_dir.path().join(".env");
    fs::write(&env_path, "OPENAI_MODEL=gpt-4o\n").unwrap();

    load_dotenv_from(&env_path).unwrap();
    let model = env::var("OPENAI_MODEL");
    clear(&AGENT_VARS);

    assert_eq!(model.unwrap(), "gpt-4o-mini");
}

#[test]
fn test_missing_env_file_is_config_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = load_dotenv_from(&temp_dir.path().join("absent.env")).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_log_format_names() {
    assert_eq!(LogFormat::from_name("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_name("COMPACT"), LogFormat::Compact);
    assert_eq!(LogFormat::from_name("fancy"), LogFormat::Pretty);
}

#[test]
fn test_logging_builder() {
    let config = LoggingConfig::default()
        .with_level("debug")
        .with_format(LogFormat::Json);
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "fitness_ai");
}
