// ABOUTME: Analytics engine configuration for nutrition goal analysis
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analytics Configuration Module
//!
//! Provides type-safe configuration for every analytics component. Defaults are
//! the canonical thresholds; environment variables may override them and the
//! result is validated before use.
//!
//! # Module Structure
//!
//! - `adherence` - Under/on-track/over percentage bands
//! - `trend` - Maintaining tolerance for half-over-half trends
//! - `projection` - Near-zero and goal-reached tolerances
//! - `gaps` - Nutrient gap status and priority bands
//! - `recommendation` - Candidate filters, scoring weights, and limits
//!
//! # Environment Overrides
//!
//! ```bash
//! export PIERRE_ANALYTICS_DEFICIT_UNDER_MAX=90
//! export PIERRE_ANALYTICS_GAP_OPTIMAL_MAX=130
//! export PIERRE_ANALYTICS_TREND_TOLERANCE=0.05
//! ```

pub mod adherence;
pub mod error;
pub mod gaps;
pub mod projection;
pub mod recommendation;
pub mod trend;

pub use adherence::AdherenceConfig;
pub use error::ConfigError;
pub use gaps::GapConfig;
pub use projection::ProjectionConfig;
pub use recommendation::{
    MacroSplit, RationaleThresholds, RecommendationConfig, RecommendationFilters,
    RecommendationLimits, RecommendationWeights,
};
pub use trend::TrendConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global read-only configuration, loaded once
static ANALYTICS_CONFIG: OnceLock<AnalyticsConfig> = OnceLock::new();

/// Main analytics configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Adherence classification bands
    pub adherence: AdherenceConfig,
    /// Trend detection thresholds
    pub trend: TrendConfig,
    /// Goal-completion projection thresholds
    pub projection: ProjectionConfig,
    /// Nutrient gap bands
    pub gaps: GapConfig,
    /// Candidate ranking configuration
    pub recommendation: RecommendationConfig,
}

impl AnalyticsConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ANALYTICS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load analytics config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when band boundaries are out of order, tolerances are
    /// negative, or the ideal macro split does not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let adherence = &self.adherence;
        if adherence.deficit_under_max_percent >= adherence.deficit_on_track_max_percent {
            return Err(ConfigError::InvalidRange(
                "deficit_under_max must be < deficit_on_track_max",
            ));
        }
        if adherence.balanced_on_track_min_percent >= adherence.balanced_on_track_max_percent {
            return Err(ConfigError::InvalidRange(
                "balanced_on_track_min must be < balanced_on_track_max",
            ));
        }
        if adherence.deficit_under_max_percent < 0.0 || adherence.balanced_on_track_min_percent < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Adherence percentages must be non-negative",
            ));
        }

        if !(0.0..1.0).contains(&self.trend.maintaining_tolerance_ratio) {
            return Err(ConfigError::ValueOutOfRange(
                "Trend maintaining tolerance must be in [0, 1)",
            ));
        }
        if self.trend.min_points < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "Trend detection needs at least 2 points",
            ));
        }

        if self.projection.maintain_near_zero_kg_per_day <= 0.0
            || self.projection.goal_reached_tolerance_kg < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Projection tolerances must be non-negative and near-zero band positive",
            ));
        }
        if self.projection.min_span_days < 1 {
            return Err(ConfigError::ValueOutOfRange(
                "Projection min_span_days must be at least 1",
            ));
        }

        self.validate_gaps()?;
        self.validate_recommendation()
    }

    fn validate_gaps(&self) -> Result<(), ConfigError> {
        let gaps = &self.gaps;
        if !(gaps.severe_low_percent < gaps.optimal_min_percent
            && gaps.optimal_min_percent <= gaps.optimal_max_percent
            && gaps.optimal_max_percent < gaps.severe_high_percent)
        {
            return Err(ConfigError::InvalidRange(
                "Gap bands must be ascending: severe_low < optimal_min <= optimal_max < severe_high",
            ));
        }
        Ok(())
    }

    fn validate_recommendation(&self) -> Result<(), ConfigError> {
        let filters = &self.recommendation.filters;
        if !(0.0..=1.0).contains(&filters.lose_max_budget_share)
            || !(0.0..=1.0).contains(&filters.maintain_max_budget_share)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Budget shares must be between 0 and 1",
            ));
        }

        let split = &self.recommendation.ideal_split;
        if ((split.protein + split.carbs + split.fat) - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Ideal macro split must sum to 1.0",
            ));
        }

        let weights = &self.recommendation.weights;
        if weights.gain_protein_reference_g <= 0.0 || weights.gain_calorie_reference <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Gain reference amounts must be positive",
            ));
        }

        if self.recommendation.limits.max_candidates == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Recommendation limit must be at least 1",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Adherence bands
        Self::apply_env_var(
            "PIERRE_ANALYTICS_DEFICIT_UNDER_MAX",
            &mut self.adherence.deficit_under_max_percent,
        )?;
        Self::apply_env_var(
            "PIERRE_ANALYTICS_DEFICIT_ON_TRACK_MAX",
            &mut self.adherence.deficit_on_track_max_percent,
        )?;
        Self::apply_env_var(
            "PIERRE_ANALYTICS_BALANCED_ON_TRACK_MIN",
            &mut self.adherence.balanced_on_track_min_percent,
        )?;
        Self::apply_env_var(
            "PIERRE_ANALYTICS_BALANCED_ON_TRACK_MAX",
            &mut self.adherence.balanced_on_track_max_percent,
        )?;

        // Trend and projection
        Self::apply_env_var(
            "PIERRE_ANALYTICS_TREND_TOLERANCE",
            &mut self.trend.maintaining_tolerance_ratio,
        )?;
        Self::apply_env_var(
            "PIERRE_ANALYTICS_MAINTAIN_NEAR_ZERO",
            &mut self.projection.maintain_near_zero_kg_per_day,
        )?;

        // Gap bands
        Self::apply_env_var(
            "PIERRE_ANALYTICS_GAP_SEVERE_LOW",
            &mut self.gaps.severe_low_percent,
        )?;
        Self::apply_env_var(
            "PIERRE_ANALYTICS_GAP_OPTIMAL_MIN",
            &mut self.gaps.optimal_min_percent,
        )?;
        Self::apply_env_var(
            "PIERRE_ANALYTICS_GAP_OPTIMAL_MAX",
            &mut self.gaps.optimal_max_percent,
        )?;
        Self::apply_env_var(
            "PIERRE_ANALYTICS_GAP_SEVERE_HIGH",
            &mut self.gaps.severe_high_percent,
        )?;

        Ok(self)
    }
}
