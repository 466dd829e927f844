// ABOUTME: Error types for the tool layer, re-exported from fitness-core
// ABOUTME: One AppError type flows from calculators through tools to the agents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling.
//!
//! Calculators fail with [`ErrorCode::InvalidInput`]; the tool registry adds
//! `ResourceNotFound` for unknown tools. [`ErrorResponse`] is the body an
//! agent receives when a tool call fails.

pub use fitness_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ToolError};
