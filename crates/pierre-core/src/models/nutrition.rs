// ABOUTME: Nutrient intake models for daily consumption analysis
// ABOUTME: NutrientKind, NutrientSample, and NutrientTotals definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Per-nutrient amounts keyed in a stable order
pub type NutrientTotals = BTreeMap<NutrientKind, f64>;

/// Tracked nutrients
///
/// Declaration order is the canonical reporting order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutrientKind {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrates (g)
    Carbs,
    /// Total fat (g)
    Fat,
    /// Dietary fiber (g)
    Fiber,
    /// Sodium (mg)
    Sodium,
    /// Total sugar (g)
    Sugar,
    /// Saturated fat (g)
    SaturatedFat,
    /// Calcium (mg)
    Calcium,
    /// Iron (mg)
    Iron,
    /// Vitamin C (mg)
    VitaminC,
    /// Vitamin D (mcg)
    VitaminD,
}

impl NutrientKind {
    /// Every tracked nutrient in reporting order
    pub const ALL: [Self; 12] = [
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fat,
        Self::Fiber,
        Self::Sodium,
        Self::Sugar,
        Self::SaturatedFat,
        Self::Calcium,
        Self::Iron,
        Self::VitaminC,
        Self::VitaminD,
    ];

    /// Measurement unit
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein
            | Self::Carbs
            | Self::Fat
            | Self::Fiber
            | Self::Sugar
            | Self::SaturatedFat => "g",
            Self::Sodium | Self::Calcium | Self::Iron | Self::VitaminC => "mg",
            Self::VitaminD => "mcg",
        }
    }

    /// Nutrients where staying under target is the goal regardless of goal type
    #[must_use]
    pub const fn is_limit(self) -> bool {
        matches!(self, Self::Sodium | Self::Sugar | Self::SaturatedFat)
    }

    /// Stable snake-case identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
            Self::Fiber => "fiber",
            Self::Sodium => "sodium",
            Self::Sugar => "sugar",
            Self::SaturatedFat => "saturated_fat",
            Self::Calcium => "calcium",
            Self::Iron => "iron",
            Self::VitaminC => "vitamin_c",
            Self::VitaminD => "vitamin_d",
        }
    }
}

impl fmt::Display for NutrientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day's aggregated nutrient consumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientSample {
    /// Calendar day the totals belong to
    pub date: NaiveDate,
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
    /// Sodium (mg)
    #[serde(default)]
    pub sodium_mg: f64,
    /// Sugar (g)
    #[serde(default)]
    pub sugar_g: f64,
    /// Saturated fat (g)
    #[serde(default)]
    pub saturated_fat_g: f64,
    /// Calcium (mg)
    #[serde(default)]
    pub calcium_mg: f64,
    /// Iron (mg)
    #[serde(default)]
    pub iron_mg: f64,
    /// Vitamin C (mg)
    #[serde(default)]
    pub vitamin_c_mg: f64,
    /// Vitamin D (mcg)
    #[serde(default)]
    pub vitamin_d_mcg: f64,
}

impl NutrientSample {
    /// Sample with only macronutrients set; micronutrients default to zero
    #[must_use]
    pub const fn with_macros(
        date: NaiveDate,
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
    ) -> Self {
        Self {
            date,
            calories,
            protein_g,
            carbs_g,
            fat_g,
            fiber_g: 0.0,
            sodium_mg: 0.0,
            sugar_g: 0.0,
            saturated_fat_g: 0.0,
            calcium_mg: 0.0,
            iron_mg: 0.0,
            vitamin_c_mg: 0.0,
            vitamin_d_mcg: 0.0,
        }
    }

    /// Amount of a single nutrient
    #[must_use]
    pub const fn value(&self, kind: NutrientKind) -> f64 {
        match kind {
            NutrientKind::Calories => self.calories,
            NutrientKind::Protein => self.protein_g,
            NutrientKind::Carbs => self.carbs_g,
            NutrientKind::Fat => self.fat_g,
            NutrientKind::Fiber => self.fiber_g,
            NutrientKind::Sodium => self.sodium_mg,
            NutrientKind::Sugar => self.sugar_g,
            NutrientKind::SaturatedFat => self.saturated_fat_g,
            NutrientKind::Calcium => self.calcium_mg,
            NutrientKind::Iron => self.iron_mg,
            NutrientKind::VitaminC => self.vitamin_c_mg,
            NutrientKind::VitaminD => self.vitamin_d_mcg,
        }
    }

    /// True when every nutrient value is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        NutrientKind::ALL
            .iter()
            .all(|kind| self.value(*kind).is_finite())
    }

    /// All nutrient values as an ordered map
    #[must_use]
    pub fn totals(&self) -> NutrientTotals {
        NutrientKind::ALL
            .iter()
            .map(|kind| (*kind, self.value(*kind)))
            .collect()
    }
}
