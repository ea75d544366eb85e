// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy factors, analytics defaults, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Tunable thresholds live in the
//! intelligence crate's configuration; only physical facts and defaults live here.

/// Energy content of macronutrients (Atwater general factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Calendar constants
pub mod time {
    /// Days in a week
    pub const DAYS_PER_WEEK: f64 = 7.0;
    /// Days in the weekly observation window
    pub const WEEKLY_WINDOW_DAYS: u32 = 7;
    /// Days in the monthly observation window
    pub const MONTHLY_WINDOW_DAYS: u32 = 30;
}

/// Defaults used when callers do not override them
pub mod defaults {
    /// Number of ranked candidates surfaced to the user
    pub const RECOMMENDATION_LIMIT: usize = 5;
    /// Auto-refresh period for callers that poll for fresh data
    pub const REFRESH_INTERVAL_SECS: u64 = 30;
    /// Days of nutrient history fetched for streaks and trends
    pub const HISTORY_DAYS: u32 = 90;
}

/// Service names used in structured logging
pub mod service_names {
    /// Analytics service name
    pub const PIERRE_NUTRITION_ANALYTICS: &str = "pierre-nutrition-analytics";
}
