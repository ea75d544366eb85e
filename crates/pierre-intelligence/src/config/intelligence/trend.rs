// ABOUTME: Trend detector configuration
// ABOUTME: Tolerance band for classifying half-over-half change as maintaining
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Trend detection thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Changes smaller than this fraction of the target count as maintaining (0.05)
    pub maintaining_tolerance_ratio: f64,
    /// Minimum number of points before a direction is computed (2)
    pub min_points: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            maintaining_tolerance_ratio: 0.05,
            min_points: 2,
        }
    }
}
