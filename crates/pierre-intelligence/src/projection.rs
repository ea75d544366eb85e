// ABOUTME: Goal-completion projection from a weight series with a deterministic fallback
// ABOUTME: Linear extrapolation gated on goal direction, plus goal progress summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Projection Estimator
//!
//! With two or more weights the observed average change per day is extrapolated
//! to the target. The extrapolation is only trusted when the observed direction
//! agrees with the goal; otherwise the result is [`ProjectionResult::Misaligned`].
//! With fewer than two weights the planned weekly rate gives the date instead.

use crate::config::intelligence::ProjectionConfig;
use crate::timeseries::{add_days, days_between, retain_finite_weights, sort_weights};
use chrono::NaiveDate;
use pierre_core::constants::time::DAYS_PER_WEEK;
use pierre_core::errors::AppResult;
use pierre_core::models::{Goal, GoalType, WeightEntry};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How a completion date was obtained
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMethod {
    /// Extrapolated from the observed weight series
    Extrapolated,
    /// Derived from the planned weekly rate (fewer than two weights)
    Fallback,
}

/// Projected goal completion, or a sentinel when the data contradicts the goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProjectionResult {
    /// A completion date could be estimated
    Projected {
        /// Estimated day the target weight is reached
        completion_date: NaiveDate,
        /// Days from the reference point to completion
        days_to_goal: f64,
        /// Observed (or planned) change per day in kg
        avg_change_per_day_kg: f64,
        /// Extrapolated or fallback
        method: ProjectionMethod,
    },
    /// Observed trend contradicts the goal direction, or the estimate is non-finite
    Misaligned {
        /// Observed change per day in kg
        avg_change_per_day_kg: f64,
    },
}

impl ProjectionResult {
    /// Completion date when projected
    #[must_use]
    pub const fn completion_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Projected {
                completion_date, ..
            } => Some(*completion_date),
            Self::Misaligned { .. } => None,
        }
    }

    /// True for the misaligned sentinel
    #[must_use]
    pub const fn is_misaligned(&self) -> bool {
        matches!(self, Self::Misaligned { .. })
    }
}

/// Projection plus the number of weights excluded as non-finite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionOutcome {
    /// Projection result
    pub result: ProjectionResult,
    /// Weight entries excluded for non-finite values
    pub dropped_samples: usize,
}

/// Estimate when the goal's target weight will be reached
///
/// # Errors
///
/// Returns `InvalidGoalConfig` when the goal fails [`Goal::validate`]
pub fn project_completion(
    entries: &[WeightEntry],
    goal: &Goal,
    config: &ProjectionConfig,
) -> AppResult<ProjectionOutcome> {
    goal.validate()?;

    let filtered = retain_finite_weights(entries);
    let sorted = sort_weights(&filtered.items);

    let result = match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) if sorted.len() >= 2 => {
            extrapolate(*first, *last, goal, config)
        }
        _ => fallback(goal),
    };

    Ok(ProjectionOutcome {
        result,
        dropped_samples: filtered.dropped,
    })
}

/// Planned-rate projection from the goal start date
fn fallback(goal: &Goal) -> ProjectionResult {
    let weeks = (goal.target_weight_kg - goal.start_weight_kg).abs() / goal.weekly_rate_kg;
    let days_to_goal = weeks * DAYS_PER_WEEK;
    let signed_weekly_rate = match goal.goal_type {
        GoalType::Lose => -goal.weekly_rate_kg,
        GoalType::Gain => goal.weekly_rate_kg,
        GoalType::Maintain => 0.0,
    };

    debug!(weeks, "Projecting from planned weekly rate");

    ProjectionResult::Projected {
        completion_date: add_days(goal.start_date, days_to_goal.round() as i64),
        days_to_goal,
        avg_change_per_day_kg: signed_weekly_rate / DAYS_PER_WEEK,
        method: ProjectionMethod::Fallback,
    }
}

fn extrapolate(
    first: WeightEntry,
    last: WeightEntry,
    goal: &Goal,
    config: &ProjectionConfig,
) -> ProjectionResult {
    let days_span = days_between(first.date, last.date).max(config.min_span_days.max(1));
    let avg_change_per_day_kg = (last.weight_kg - first.weight_kg) / days_span as f64;
    let remaining = goal.target_weight_kg - last.weight_kg;

    if !direction_agrees(goal.goal_type, avg_change_per_day_kg, config) {
        warn!(
            goal_type = %goal.goal_type,
            avg_change_per_day_kg, "Weight trend contradicts goal direction"
        );
        return ProjectionResult::Misaligned {
            avg_change_per_day_kg,
        };
    }

    if remaining.abs() <= config.goal_reached_tolerance_kg {
        return ProjectionResult::Projected {
            completion_date: last.date,
            days_to_goal: 0.0,
            avg_change_per_day_kg,
            method: ProjectionMethod::Extrapolated,
        };
    }

    let days_to_goal = (remaining / avg_change_per_day_kg).abs();
    if !days_to_goal.is_finite() {
        warn!(remaining, "Projection estimate is not finite");
        return ProjectionResult::Misaligned {
            avg_change_per_day_kg,
        };
    }

    ProjectionResult::Projected {
        completion_date: add_days(last.date, days_to_goal.round() as i64),
        days_to_goal,
        avg_change_per_day_kg,
        method: ProjectionMethod::Extrapolated,
    }
}

fn direction_agrees(
    goal_type: GoalType,
    avg_change_per_day_kg: f64,
    config: &ProjectionConfig,
) -> bool {
    match goal_type {
        GoalType::Lose => avg_change_per_day_kg < 0.0,
        GoalType::Gain => avg_change_per_day_kg > 0.0,
        GoalType::Maintain => avg_change_per_day_kg.abs() < config.maintain_near_zero_kg_per_day,
    }
}

/// How far along a weight goal the user is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Latest finite weight, or the start weight when none is logged
    pub latest_weight_kg: f64,
    /// `latest - start`
    pub change_kg: f64,
    /// Share of the planned change achieved, clamped to `0..=100`
    pub progress_percent: f64,
    /// `target - latest`
    pub remaining_kg: f64,
}

/// Summarize progress toward the goal from the latest finite weight
///
/// `Maintain` goals report 100 while the latest weight is within
/// `weekly_rate_kg` of the target and 0 otherwise.
#[must_use]
pub fn goal_progress(entries: &[WeightEntry], goal: &Goal) -> GoalProgress {
    let filtered = retain_finite_weights(entries);
    let latest_weight_kg = sort_weights(&filtered.items)
        .last()
        .map_or(goal.start_weight_kg, |e| e.weight_kg);

    let change_kg = latest_weight_kg - goal.start_weight_kg;
    let remaining_kg = goal.target_weight_kg - latest_weight_kg;
    let planned = goal.target_weight_kg - goal.start_weight_kg;

    let maintaining = goal.goal_type == GoalType::Maintain || planned.abs() < f64::EPSILON;
    let progress_percent = if maintaining {
        if remaining_kg.abs() <= goal.weekly_rate_kg {
            100.0
        } else {
            0.0
        }
    } else {
        (change_kg / planned * 100.0).clamp(0.0, 100.0)
    };

    GoalProgress {
        latest_weight_kg,
        change_kg,
        progress_percent,
        remaining_kg,
    }
}
