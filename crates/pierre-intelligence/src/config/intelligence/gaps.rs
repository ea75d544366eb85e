// ABOUTME: Nutrient gap analyzer configuration
// ABOUTME: Percentage bands mapping consumption to status and priority
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient Gap Configuration
//!
//! Bands, in percent of target:
//!
//! | Range | Status | Priority |
//! |-------|--------|----------|
//! | `< severe_low` | Low | High |
//! | `severe_low ..< optimal_min` | Low | Medium |
//! | `optimal_min ..= optimal_max` | Optimal | Low |
//! | `optimal_max <..= severe_high` | High | Medium |
//! | `> severe_high` | High | High |

use serde::{Deserialize, Serialize};

/// Gap status and priority bands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapConfig {
    /// Below this percentage a shortfall is high priority (70)
    pub severe_low_percent: f64,
    /// Lower bound of the optimal band, inclusive (90)
    pub optimal_min_percent: f64,
    /// Upper bound of the optimal band, inclusive (130)
    pub optimal_max_percent: f64,
    /// Above this percentage an excess is high priority (150)
    pub severe_high_percent: f64,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            severe_low_percent: 70.0,
            optimal_min_percent: 90.0,
            optimal_max_percent: 130.0,
            severe_high_percent: 150.0,
        }
    }
}
