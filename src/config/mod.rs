// ABOUTME: Runtime configuration for the nutrition analytics service
// ABOUTME: Loads refresh cadence, recommendation limit, gap window, and engine thresholds from env
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service configuration
//!
//! Environment-only configuration. Engine thresholds come from
//! [`AnalyticsConfig::load`] (`PIERRE_ANALYTICS_*`); the variables below cover
//! how the service runs the engine.
//!
//! | Variable                       | Default  |
//! |--------------------------------|----------|
//! | `PIERRE_REFRESH_INTERVAL_SECS` | `30`     |
//! | `PIERRE_RECOMMENDATION_LIMIT`  | `5`      |
//! | `PIERRE_GAP_WINDOW`            | `weekly` |
//! | `PIERRE_HISTORY_DAYS`          | `90`     |

use crate::errors::{AppError, AppResult};
use crate::intelligence::{AnalyticsConfig, ObservationWindow};
use pierre_core::constants::defaults;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Runtime settings for analytics runs
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Delay between scheduled refreshes
    pub refresh_interval: Duration,
    /// Window used for nutrient gap analysis
    pub gap_window: ObservationWindow,
    /// Days of nutrient history fetched per run, ending at the reference day
    pub history_days: u32,
    /// Validated engine thresholds; `recommendation.limits.max_candidates` is the top-N
    pub analytics: AnalyticsConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(defaults::REFRESH_INTERVAL_SECS),
            gap_window: ObservationWindow::default(),
            history_days: defaults::HISTORY_DAYS,
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable cannot be parsed, is out of range,
    /// or the engine thresholds fail validation
    pub fn from_env() -> AppResult<Self> {
        let refresh_secs: u64 = parse_env_or(
            "PIERRE_REFRESH_INTERVAL_SECS",
            defaults::REFRESH_INTERVAL_SECS,
        )?;
        if refresh_secs == 0 {
            return Err(AppError::config(
                "PIERRE_REFRESH_INTERVAL_SECS must be at least 1",
            ));
        }

        let limit: usize = parse_env_or(
            "PIERRE_RECOMMENDATION_LIMIT",
            defaults::RECOMMENDATION_LIMIT,
        )?;
        if limit == 0 {
            return Err(AppError::config(
                "PIERRE_RECOMMENDATION_LIMIT must be at least 1",
            ));
        }

        let gap_window = match env::var("PIERRE_GAP_WINDOW") {
            Ok(raw) => raw
                .parse::<ObservationWindow>()
                .map_err(|e| AppError::config(format!("Invalid PIERRE_GAP_WINDOW: {e}")))?,
            Err(_) => ObservationWindow::default(),
        };

        let history_days: u32 = parse_env_or("PIERRE_HISTORY_DAYS", defaults::HISTORY_DAYS)?;
        if history_days == 0 {
            return Err(AppError::config("PIERRE_HISTORY_DAYS must be at least 1"));
        }

        let mut analytics = AnalyticsConfig::load()?;
        analytics.recommendation.limits.max_candidates = limit;

        let config = Self {
            refresh_interval: Duration::from_secs(refresh_secs),
            gap_window,
            history_days,
            analytics,
        };

        info!(
            refresh_interval_secs = refresh_secs,
            recommendation_limit = limit,
            %gap_window,
            history_days,
            "Loaded service configuration"
        );
        Ok(config)
    }

    /// Number of ranked candidates surfaced in reports
    #[must_use]
    pub const fn recommendation_limit(&self) -> usize {
        self.analytics.recommendation.limits.max_candidates
    }
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    env::var(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|_| AppError::config(format!("Invalid {key} value: {raw}")))
    })
}
