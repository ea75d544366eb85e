// ABOUTME: Nutrient gap analyzer comparing consumption with daily targets
// ABOUTME: Computes per-nutrient gap, percentage, status, priority, and optimization suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient Gap Analyzer
//!
//! For each targeted nutrient: `gap = target - current` and
//! `percentage = round(current / target * 100)` (0 when the target is not
//! positive). Percentages fall into five bands:
//!
//! | Percentage      | Status  | Priority |
//! |-----------------|---------|----------|
//! | `< 70`          | Low     | High     |
//! | `70 ..< 90`     | Low     | Medium   |
//! | `90 ..= 130`    | Optimal | Low      |
//! | `130 <.. 150`   | High    | Medium   |
//! | `> 150`         | High    | High     |

use crate::config::intelligence::GapConfig;
use crate::timeseries::{aggregate_window, Filtered, ObservationWindow};
use chrono::NaiveDate;
use pierre_core::models::{NutrientKind, NutrientSample, NutrientTotals};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Consumption status against target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GapStatus {
    /// Below the optimal band
    Low,
    /// Within the optimal band
    Optimal,
    /// Above the optimal band
    High,
}

/// How urgently a gap should be addressed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GapPriority {
    /// Far outside the optimal band
    High,
    /// Just outside the optimal band
    Medium,
    /// Inside the optimal band
    Low,
}

impl GapPriority {
    const fn rank(self) -> u8 {
        match self {
            Self::High => 2,
            Self::Medium => 1,
            Self::Low => 0,
        }
    }
}

impl Ord for GapPriority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for GapPriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Gap analysis for one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapResult {
    /// Nutrient analyzed
    pub nutrient: NutrientKind,
    /// Measured consumption
    pub current: f64,
    /// Target consumption
    pub target: f64,
    /// `target - current`
    pub gap: f64,
    /// `round(current / target * 100)`, or 0 when the target is not positive
    pub percentage: f64,
    /// Band status
    pub status: GapStatus,
    /// Band priority
    pub priority: GapPriority,
}

impl GapResult {
    /// Analyze one nutrient
    #[must_use]
    pub fn compute(nutrient: NutrientKind, current: f64, target: f64, config: &GapConfig) -> Self {
        let percentage = if target > 0.0 {
            (current / target * 100.0).round()
        } else {
            0.0
        };
        let (status, priority) = classify_gap(percentage, config);

        Self {
            nutrient,
            current,
            target,
            gap: target - current,
            percentage,
            status,
            priority,
        }
    }
}

/// Status and priority for a rounded percentage
#[must_use]
pub fn classify_gap(percentage: f64, config: &GapConfig) -> (GapStatus, GapPriority) {
    if percentage < config.severe_low_percent {
        (GapStatus::Low, GapPriority::High)
    } else if percentage < config.optimal_min_percent {
        (GapStatus::Low, GapPriority::Medium)
    } else if percentage <= config.optimal_max_percent {
        (GapStatus::Optimal, GapPriority::Low)
    } else if percentage <= config.severe_high_percent {
        (GapStatus::High, GapPriority::Medium)
    } else {
        (GapStatus::High, GapPriority::High)
    }
}

/// Gap analysis for every targeted nutrient, in nutrient order
///
/// A nutrient missing from `current` counts as zero consumption. Nutrients whose
/// consumption or target is `NaN` or infinite are excluded and counted in
/// `dropped`.
#[must_use]
pub fn analyze_gaps(
    current: &NutrientTotals,
    targets: &NutrientTotals,
    config: &GapConfig,
) -> Filtered<GapResult> {
    let mut dropped = 0;
    let items: Vec<GapResult> = targets
        .iter()
        .filter_map(|(kind, target)| {
            let consumed = current.get(kind).copied().unwrap_or(0.0);
            if consumed.is_finite() && target.is_finite() {
                Some(GapResult::compute(*kind, consumed, *target, config))
            } else {
                dropped += 1;
                None
            }
        })
        .collect();

    if dropped > 0 {
        debug!(dropped, "Excluded nutrients with non-finite values from gap analysis");
    }
    Filtered { items, dropped }
}

/// Suggested direction of change for a nutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionAction {
    /// Eat more
    Increase,
    /// Eat less
    Decrease,
}

/// Actionable suggestion derived from a high or medium priority gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientSuggestion {
    /// Nutrient concerned
    pub nutrient: NutrientKind,
    /// Increase or decrease
    pub action: SuggestionAction,
    /// Gap priority
    pub priority: GapPriority,
    /// `target - current`
    pub gap: f64,
    /// Consumption percentage
    pub percentage: f64,
    /// Human-readable advice
    pub message: String,
}

/// Suggestions for gaps with `High` or `Medium` priority
///
/// Sorted by priority descending, then absolute gap descending. Nutrients
/// without a positive target, limit nutrients that are under target, and gaps
/// with non-finite values get no suggestion.
#[must_use]
pub fn suggest_optimizations(gaps: &[GapResult]) -> Vec<NutrientSuggestion> {
    let mut actionable: Vec<&GapResult> = gaps
        .iter()
        .filter(|g| matches!(g.priority, GapPriority::High | GapPriority::Medium))
        .filter(|g| g.target > 0.0 && g.gap.is_finite() && g.percentage.is_finite())
        .filter(|g| !(g.nutrient.is_limit() && g.status == GapStatus::Low))
        .collect();

    actionable.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.gap.abs().total_cmp(&a.gap.abs()))
    });

    actionable.into_iter().map(suggestion_for).collect()
}

fn suggestion_for(gap: &GapResult) -> NutrientSuggestion {
    let action = if gap.status == GapStatus::High {
        SuggestionAction::Decrease
    } else {
        SuggestionAction::Increase
    };
    let verb = match action {
        SuggestionAction::Increase => "Increase",
        SuggestionAction::Decrease => "Reduce",
    };
    let message = format!(
        "{verb} {} by {:.0} {} per day ({}% of target)",
        gap.nutrient.as_str().replace('_', " "),
        gap.gap.abs(),
        gap.nutrient.unit(),
        gap.percentage
    );

    NutrientSuggestion {
        nutrient: gap.nutrient,
        action,
        priority: gap.priority,
        gap: gap.gap,
        percentage: gap.percentage,
        message,
    }
}

/// Gap analysis over an observation window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    /// Window analyzed
    pub window: ObservationWindow,
    /// First day of the window
    pub start: NaiveDate,
    /// Last day of the window
    pub end: NaiveDate,
    /// Per-nutrient gaps of the per-day average against daily targets
    pub gaps: Vec<GapResult>,
    /// Prioritized suggestions
    pub suggestions: Vec<NutrientSuggestion>,
    /// Distinct days with finite samples in the window
    pub days_logged: u32,
    /// Samples excluded for non-finite values
    pub dropped_samples: usize,
    /// Targeted nutrients excluded for non-finite consumption or target
    pub dropped_nutrients: usize,
}

/// Compare the average logged day in a window with daily targets
#[must_use]
pub fn analyze_window(
    samples: &[NutrientSample],
    targets: &NutrientTotals,
    window: ObservationWindow,
    as_of: NaiveDate,
    config: &GapConfig,
) -> GapReport {
    let totals = aggregate_window(samples, window, as_of);
    let Filtered {
        items: gaps,
        dropped: dropped_nutrients,
    } = analyze_gaps(&totals.daily_average, targets, config);
    let suggestions = suggest_optimizations(&gaps);

    debug!(
        %window,
        days_logged = totals.days_logged,
        suggestions = suggestions.len(),
        "Analyzed nutrient gaps"
    );

    GapReport {
        window,
        start: totals.start,
        end: totals.end,
        gaps,
        suggestions,
        days_logged: totals.days_logged,
        dropped_samples: totals.dropped_samples,
        dropped_nutrients,
    }
}
