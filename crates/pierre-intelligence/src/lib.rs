// ABOUTME: Nutrition goal analytics engine crate root
// ABOUTME: Re-exports adherence, streak, trend, projection, gap, and recommendation components
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Pure computations that turn weight and nutrient logs plus a declared goal
//! into structured analytics. Every function takes immutable inputs and an
//! explicit reference date where one matters; nothing here reads the clock or
//! keeps state between calls.
//!
//! ## Modules
//!
//! - **timeseries**: Sorting, calendar arithmetic, windows, and sample filtering
//! - **adherence**: Under/on-track/over classification by goal direction
//! - **streaks**: Logging and adherence streaks
//! - **trend**: Improving/maintaining/declining series classification
//! - **projection**: Goal-completion date estimation and progress
//! - **gaps**: Nutrient gap analysis and optimization suggestions
//! - **recommendation**: Goal-aware food and meal ranking
//! - **config**: Validated, environment-overridable thresholds

/// Analytics thresholds and their validation
pub mod config;

/// Shared time-series helpers
pub mod timeseries;

/// Adherence classifier
pub mod adherence;

/// Streak tracker
pub mod streaks;

/// Trend detector
pub mod trend;

/// Projection estimator
pub mod projection;

/// Nutrient gap analyzer
pub mod gaps;

/// Recommendation scorer
pub mod recommendation;

pub use adherence::{
    classify, classify_direction, classify_nutrient, consumption_percentage, AdherenceDirection,
    AdherenceStatus,
};
pub use config::{AnalyticsConfig, ConfigError};
pub use gaps::{
    analyze_gaps, analyze_window, suggest_optimizations, GapPriority, GapReport, GapResult,
    GapStatus, NutrientSuggestion, SuggestionAction,
};
pub use projection::{
    goal_progress, project_completion, GoalProgress, ProjectionMethod, ProjectionOutcome,
    ProjectionResult,
};
pub use recommendation::{
    passes_filters, rank_candidates, rationale_for, score_candidate, RankedCandidate,
    RankingReport, RationaleTag,
};
pub use streaks::{build_day_records, compute_streaks, DayRecord, StreakState};
pub use timeseries::{aggregate_window, Filtered, ObservationWindow, WindowTotals};
pub use trend::{
    detect_nutrient_trend, detect_trend, detect_weight_trend, TrendDirection, TrendResult,
};
