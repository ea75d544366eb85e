// ABOUTME: Food and meal candidate models for goal-aware recommendations
// ABOUTME: FoodCandidate, CandidateKind, and remaining MacroBudget definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition::{NutrientKind, NutrientTotals};
use crate::constants::energy::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use serde::{Deserialize, Serialize};

/// Whether a candidate is a single food or a composed meal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// Single food item
    #[default]
    Food,
    /// Composed meal (recipe, generated plan entry)
    Meal,
}

/// A food or meal that could be eaten next
///
/// Nutrient values are per serving as offered to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCandidate {
    /// Stable candidate identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Food or meal
    #[serde(default)]
    pub kind: CandidateKind,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Fiber (g)
    #[serde(default)]
    pub fiber_g: f64,
}

impl FoodCandidate {
    /// True when every nutrient value is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.calories,
            self.protein_g,
            self.carbs_g,
            self.fat_g,
            self.fiber_g,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Calories contributed by protein, carbs, and fat
    #[must_use]
    pub fn macro_calories(&self) -> (f64, f64, f64) {
        (
            self.protein_g * PROTEIN_KCAL_PER_G,
            self.carbs_g * CARBS_KCAL_PER_G,
            self.fat_g * FAT_KCAL_PER_G,
        )
    }
}

/// Remaining macro budget for the day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroBudget {
    /// Remaining energy (kcal)
    pub calories: f64,
    /// Remaining protein (g)
    pub protein_g: f64,
    /// Remaining carbohydrates (g)
    pub carbs_g: f64,
    /// Remaining fat (g)
    pub fat_g: f64,
}

impl MacroBudget {
    /// Budget left after subtracting consumption from daily targets
    ///
    /// Missing targets count as zero; each field is clamped at zero.
    #[must_use]
    pub fn remaining(targets: &NutrientTotals, consumed: &NutrientTotals) -> Self {
        let left = |kind: NutrientKind| {
            let target = targets.get(&kind).copied().unwrap_or(0.0);
            let eaten = consumed.get(&kind).copied().unwrap_or(0.0);
            (target - eaten).max(0.0)
        };

        Self {
            calories: left(NutrientKind::Calories),
            protein_g: left(NutrientKind::Protein),
            carbs_g: left(NutrientKind::Carbs),
            fat_g: left(NutrientKind::Fat),
        }
    }
}
