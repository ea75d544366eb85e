// ABOUTME: Adherence band configuration shared by every consumption classifier
// ABOUTME: Single source of truth for deficit and balanced percentage bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adherence Classifier Configuration
//!
//! Earlier call sites used `0.95/1.05` and `0.9/1.1` ratios interchangeably;
//! these bands replace both.

use serde::{Deserialize, Serialize};

/// Percentage bands for adherence classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdherenceConfig {
    /// Deficit direction: at or below this percentage is `Under` (90)
    pub deficit_under_max_percent: f64,
    /// Deficit direction: above `deficit_under_max_percent` and at or below this is `OnTrack` (100)
    pub deficit_on_track_max_percent: f64,
    /// Balanced direction: below this percentage is `Under` (80)
    pub balanced_on_track_min_percent: f64,
    /// Balanced direction: at or below this percentage is `OnTrack` (120)
    pub balanced_on_track_max_percent: f64,
}

impl Default for AdherenceConfig {
    fn default() -> Self {
        Self {
            deficit_under_max_percent: 90.0,
            deficit_on_track_max_percent: 100.0,
            balanced_on_track_min_percent: 80.0,
            balanced_on_track_max_percent: 120.0,
        }
    }
}
