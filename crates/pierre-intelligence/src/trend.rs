// ABOUTME: Trend detector comparing series halves against the goal direction
// ABOUTME: Classifies weight and nutrient series as improving, maintaining, or declining
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trend Detector
//!
//! A series is split into halves (`floor(n / 2)` points in the first half) and
//! the half averages are compared. A change smaller than a tolerance relative to
//! the target reads as maintaining; otherwise the sign of the change is judged
//! against what the goal rewards.

use crate::config::intelligence::TrendConfig;
use crate::timeseries::{
    mean, retain_finite_samples, retain_finite_weights, sort_weights, split_halves,
};
use chrono::NaiveDate;
use pierre_core::models::{Goal, GoalType, NutrientKind, NutrientSample, WeightEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Direction of a series relative to the goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Moving the way the goal rewards
    Improving,
    /// Change within tolerance, or not enough data
    Maintaining,
    /// Moving against the goal
    Declining,
}

/// Trend classification with the numbers behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Classified direction
    pub direction: TrendDirection,
    /// Mean of the first half (0 with fewer than the minimum points)
    pub first_half_avg: f64,
    /// Mean of the second half (0 with fewer than the minimum points)
    pub second_half_avg: f64,
    /// `second_half_avg - first_half_avg`
    pub delta: f64,
    /// Finite points considered
    pub sample_count: usize,
    /// Points excluded for non-finite values
    pub dropped_samples: usize,
}

impl TrendResult {
    const fn insufficient(sample_count: usize, dropped_samples: usize) -> Self {
        Self {
            direction: TrendDirection::Maintaining,
            first_half_avg: 0.0,
            second_half_avg: 0.0,
            delta: 0.0,
            sample_count,
            dropped_samples,
        }
    }
}

/// Classify an ordered series of daily values against a goal and target
///
/// Fewer than `config.min_points` finite values yields `Maintaining`.
#[must_use]
pub fn detect_trend(
    values: &[f64],
    goal_type: GoalType,
    target: f64,
    config: &TrendConfig,
) -> TrendResult {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let dropped = values.len() - finite.len();

    if finite.len() < config.min_points.max(2) {
        debug!(
            points = finite.len(),
            "Not enough points for trend, reporting maintaining"
        );
        return TrendResult::insufficient(finite.len(), dropped);
    }

    let (first, second) = split_halves(&finite);
    let (Some(first_avg), Some(second_avg)) = (mean(first), mean(second)) else {
        return TrendResult::insufficient(finite.len(), dropped);
    };
    let delta = second_avg - first_avg;

    let tolerance = config.maintaining_tolerance_ratio * target.abs();
    let direction = if delta.abs() < tolerance || delta.abs() < f64::EPSILON {
        TrendDirection::Maintaining
    } else if moves_toward_goal(goal_type, delta, first_avg, second_avg, target) {
        TrendDirection::Improving
    } else {
        TrendDirection::Declining
    };

    TrendResult {
        direction,
        first_half_avg: first_avg,
        second_half_avg: second_avg,
        delta,
        sample_count: finite.len(),
        dropped_samples: dropped,
    }
}

fn moves_toward_goal(
    goal_type: GoalType,
    delta: f64,
    first_avg: f64,
    second_avg: f64,
    target: f64,
) -> bool {
    match goal_type {
        GoalType::Lose => delta < 0.0,
        GoalType::Gain => delta > 0.0,
        GoalType::Maintain => (second_avg - target).abs() < (first_avg - target).abs(),
    }
}

/// Weight trend toward `goal.target_weight_kg`
#[must_use]
pub fn detect_weight_trend(
    entries: &[WeightEntry],
    goal: &Goal,
    config: &TrendConfig,
) -> TrendResult {
    let filtered = retain_finite_weights(entries);
    let values: Vec<f64> = sort_weights(&filtered.items)
        .iter()
        .map(|e| e.weight_kg)
        .collect();

    let mut result = detect_trend(&values, goal.goal_type, goal.target_weight_kg, config);
    result.dropped_samples += filtered.dropped;
    result
}

/// Daily trend of one nutrient toward its target in `goal.nutrition_targets`
///
/// Samples sharing a date are meals of the same day and are summed first, so
/// each series point is one day's total.
///
/// The nutrient follows the goal direction for calories; limit nutrients are
/// judged as lose-direction and everything else as maintain-direction. Returns
/// `None` when the goal sets no target for the nutrient.
#[must_use]
pub fn detect_nutrient_trend(
    samples: &[NutrientSample],
    kind: NutrientKind,
    goal: &Goal,
    config: &TrendConfig,
) -> Option<TrendResult> {
    let target = goal.target_for(kind)?;
    let direction_goal = if kind.is_limit() {
        GoalType::Lose
    } else if kind == NutrientKind::Calories {
        goal.goal_type
    } else {
        GoalType::Maintain
    };

    let filtered = retain_finite_samples(samples);
    let mut daily_totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for sample in &filtered.items {
        *daily_totals.entry(sample.date).or_insert(0.0) += sample.value(kind);
    }
    let values: Vec<f64> = daily_totals.into_values().collect();

    let mut result = detect_trend(&values, direction_goal, target, config);
    result.dropped_samples += filtered.dropped;
    Some(result)
}
