// ABOUTME: Projection estimator configuration
// ABOUTME: Near-zero band for maintain goals and goal-reached tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Goal-completion projection thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Maintain goals require `|avg change per day|` below this (kg/day, 0.05)
    pub maintain_near_zero_kg_per_day: f64,
    /// Latest weight within this distance of target counts as reached (kg, 0.05)
    pub goal_reached_tolerance_kg: f64,
    /// Lower bound for the observed span between first and last entry (days, 1)
    pub min_span_days: i64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            maintain_near_zero_kg_per_day: 0.05,
            goal_reached_tolerance_kg: 0.05,
            min_span_days: 1,
        }
    }
}
