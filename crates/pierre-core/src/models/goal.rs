// ABOUTME: Weight goal model with direction and nutrition targets
// ABOUTME: GoalType and Goal definitions plus invariant validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition::{NutrientKind, NutrientTotals};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Caloric deficit, weight trending down
    Lose,
    /// Caloric balance, weight stable
    Maintain,
    /// Caloric surplus, weight trending up
    Gain,
}

impl GoalType {
    /// Whether consuming under target is the favorable direction
    #[must_use]
    pub const fn rewards_deficit(self) -> bool {
        matches!(self, Self::Lose)
    }

    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" | "lose_weight" | "weight_loss" => Ok(Self::Lose),
            "maintain" | "maintenance" => Ok(Self::Maintain),
            "gain" | "gain_weight" | "muscle_gain" => Ok(Self::Gain),
            other => Err(AppError::invalid_input(format!(
                "Unknown goal type '{other}': expected lose, maintain, or gain"
            ))),
        }
    }
}

/// A user's active weight and nutrition goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal direction
    pub goal_type: GoalType,
    /// Weight when the goal was set (kg)
    pub start_weight_kg: f64,
    /// Desired weight (kg)
    pub target_weight_kg: f64,
    /// Day the goal was set
    pub start_date: NaiveDate,
    /// Planned rate of change per week (kg, strictly positive)
    pub weekly_rate_kg: f64,
    /// Daily nutrient targets
    #[serde(default)]
    pub nutrition_targets: NutrientTotals,
}

impl Goal {
    /// Daily target for a nutrient, if one is set
    #[must_use]
    pub fn target_for(&self, kind: NutrientKind) -> Option<f64> {
        self.nutrition_targets.get(&kind).copied()
    }

    /// Check the goal invariants
    ///
    /// # Errors
    ///
    /// Returns `InvalidGoalConfig` when `weekly_rate_kg` is not a positive finite
    /// number, when weights are non-finite, or when a lose/gain goal has a target
    /// equal to its start weight
    pub fn validate(&self) -> AppResult<()> {
        if !self.weekly_rate_kg.is_finite() || self.weekly_rate_kg <= 0.0 {
            return Err(AppError::invalid_goal_config(format!(
                "weekly_rate_kg must be positive, got {}",
                self.weekly_rate_kg
            )));
        }
        if !self.start_weight_kg.is_finite() || !self.target_weight_kg.is_finite() {
            return Err(AppError::invalid_goal_config(
                "start and target weights must be finite",
            ));
        }
        if self.goal_type != GoalType::Maintain
            && (self.target_weight_kg - self.start_weight_kg).abs() < f64::EPSILON
        {
            return Err(AppError::invalid_goal_config(format!(
                "target weight equals start weight for a {} goal",
                self.goal_type
            )));
        }

        Ok(())
    }
}
