// ABOUTME: Core types and constants for the Fitness AI calculation engine
// ABOUTME: Foundation crate with error handling, domain models, and physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Core
//!
//! Foundation crate shared by the calculators and the tool layer. It changes
//! rarely, so downstream crates rebuild incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ToolError`
//! - **models**: Body profile, goals, activity levels and plan requests
//! - **constants**: Physiological constants and default policy values

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain models parsed from agent tool arguments
pub mod models;

/// Physiological constants and default policy values organized by domain
pub mod constants;
