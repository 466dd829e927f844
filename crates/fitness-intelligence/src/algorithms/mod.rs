// ABOUTME: Physiological estimation algorithms used by the calculators
// ABOUTME: Currently maximum heart rate prediction from age
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Age-predicted maximum heart rate formulas
pub mod maxhr;

pub use maxhr::MaxHrAlgorithm;
