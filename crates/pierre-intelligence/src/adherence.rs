// ABOUTME: Adherence classifier mapping consumption percentages to status bands
// ABOUTME: Goal-direction aware: deficit goals and limit nutrients use stricter upper bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adherence Classifier
//!
//! The single source of truth for deciding whether a day's consumption of a
//! nutrient is under, on track with, or over its target. Two band sets exist:
//!
//! - **Deficit** (`Lose` goals, and nutrients the user should limit):
//!   `p <= 90` under, `90 < p <= 100` on track, `p > 100` over
//! - **Balanced** (`Maintain`, `Gain`):
//!   `p < 80` under, `80 <= p <= 120` on track, `p > 120` over
//!
//! Bands come from [`AdherenceConfig`] so every caller agrees.

use crate::config::intelligence::AdherenceConfig;
use pierre_core::models::{GoalType, NutrientKind};
use serde::{Deserialize, Serialize};

/// Consumption status relative to target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdherenceStatus {
    /// Below the goal-appropriate band
    Under,
    /// Within the goal-appropriate band
    OnTrack,
    /// Above the goal-appropriate band
    Over,
}

/// Which band set applies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdherenceDirection {
    /// Staying under target is rewarded
    Deficit,
    /// Landing near target is rewarded
    Balanced,
}

impl AdherenceDirection {
    /// Band set for overall calorie adherence under a goal
    #[must_use]
    pub const fn for_goal(goal_type: GoalType) -> Self {
        if goal_type.rewards_deficit() {
            Self::Deficit
        } else {
            Self::Balanced
        }
    }

    /// Band set for a specific nutrient under a goal
    ///
    /// Limit nutrients (sodium, sugar, saturated fat) are always deficit-rewarding;
    /// calories follow the goal; everything else aims for the target.
    #[must_use]
    pub const fn for_nutrient(kind: NutrientKind, goal_type: GoalType) -> Self {
        if kind.is_limit() {
            Self::Deficit
        } else if matches!(kind, NutrientKind::Calories) {
            Self::for_goal(goal_type)
        } else {
            Self::Balanced
        }
    }
}

/// Percentage of target consumed; `0` when the target is not positive
#[must_use]
pub fn consumption_percentage(current: f64, target: f64) -> f64 {
    if target > 0.0 && current.is_finite() && target.is_finite() {
        current / target * 100.0
    } else {
        0.0
    }
}

/// Classify a consumption percentage for a goal type
///
/// Total over `[0, inf)`; a non-finite percentage is read as `0`.
#[must_use]
pub fn classify(percentage: f64, goal_type: GoalType, config: &AdherenceConfig) -> AdherenceStatus {
    classify_direction(percentage, AdherenceDirection::for_goal(goal_type), config)
}

/// Classify a consumption percentage for an explicit band set
#[must_use]
pub fn classify_direction(
    percentage: f64,
    direction: AdherenceDirection,
    config: &AdherenceConfig,
) -> AdherenceStatus {
    let p = if percentage.is_finite() {
        percentage
    } else {
        0.0
    };

    match direction {
        AdherenceDirection::Deficit => {
            if p <= config.deficit_under_max_percent {
                AdherenceStatus::Under
            } else if p <= config.deficit_on_track_max_percent {
                AdherenceStatus::OnTrack
            } else {
                AdherenceStatus::Over
            }
        }
        AdherenceDirection::Balanced => {
            if p < config.balanced_on_track_min_percent {
                AdherenceStatus::Under
            } else if p <= config.balanced_on_track_max_percent {
                AdherenceStatus::OnTrack
            } else {
                AdherenceStatus::Over
            }
        }
    }
}

/// Classify one nutrient's consumption against its target
#[must_use]
pub fn classify_nutrient(
    kind: NutrientKind,
    current: f64,
    target: f64,
    goal_type: GoalType,
    config: &AdherenceConfig,
) -> AdherenceStatus {
    classify_direction(
        consumption_percentage(current, target),
        AdherenceDirection::for_nutrient(kind, goal_type),
        config,
    )
}
