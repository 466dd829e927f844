// ABOUTME: Re-exports command modules for fitness-ai-cli
// ABOUTME: Provides tool listing/calling and configuration info commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod info;
pub mod tools;
