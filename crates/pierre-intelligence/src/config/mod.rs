// ABOUTME: Configuration module for pierre-intelligence crate
// ABOUTME: Re-exports analytics configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Analytics configuration (adherence, trends, projections, gaps, ranking)
pub mod intelligence;

pub use intelligence::{AnalyticsConfig, ConfigError};
