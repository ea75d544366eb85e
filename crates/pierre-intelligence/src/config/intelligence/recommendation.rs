// ABOUTME: Recommendation scorer configuration for goal-aware food ranking
// ABOUTME: Configures hard filters, scoring weights, ideal macro split, and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Scorer Configuration
//!
//! Provides configuration for ranking food and meal candidates against the
//! remaining macro budget: per-goal hard filters, additive scoring weights,
//! the ideal calorie split used for maintenance, and rationale tag thresholds.

use pierre_core::constants::defaults;
use serde::{Deserialize, Serialize};

/// Recommendation Scorer Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Hard filters applied before scoring
    pub filters: RecommendationFilters,
    /// Additive scoring weights
    pub weights: RecommendationWeights,
    /// Ideal protein/carb/fat calorie split for maintenance
    pub ideal_split: MacroSplit,
    /// Thresholds for rationale tags
    pub tags: RationaleThresholds,
    /// Limits on surfaced candidates
    pub limits: RecommendationLimits,
}

/// Per-goal hard filters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationFilters {
    /// Lose: maximum share of remaining calories a candidate may use (0.5)
    pub lose_max_budget_share: f64,
    /// Lose: minimum protein per candidate in grams (5)
    pub lose_min_protein_g: f64,
    /// Lose: minimum grams of protein per kcal (0.05)
    pub lose_min_protein_per_kcal: f64,
    /// Gain: minimum calories per candidate (150)
    pub gain_min_calories: f64,
    /// Gain: minimum protein per candidate in grams (10)
    pub gain_min_protein_g: f64,
    /// Maintain: minimum calories per candidate (100)
    pub maintain_min_calories: f64,
    /// Maintain: maximum share of remaining calories a candidate may use (0.6)
    pub maintain_max_budget_share: f64,
}

/// Additive scoring weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationWeights {
    /// Weight of the calorie-fit term, all goals (50)
    pub calorie_fit: f64,
    /// Lose: multiplier for protein per kcal (1000)
    pub lose_protein_density: f64,
    /// Lose: weight of the low-fat term (20)
    pub lose_low_fat: f64,
    /// Gain: weight of the protein term (50)
    pub gain_protein: f64,
    /// Gain: protein amount that earns the full protein weight, in grams (30)
    pub gain_protein_reference_g: f64,
    /// Gain: weight of the calorie term (50)
    pub gain_calories: f64,
    /// Gain: calorie amount that earns the full calorie weight (300)
    pub gain_calorie_reference: f64,
    /// Maintain: weight of each macro share term (30)
    pub maintain_macro_share: f64,
}

/// Calorie split across macronutrients, as fractions of macro calories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein share (0.30)
    pub protein: f64,
    /// Carbohydrate share (0.40)
    pub carbs: f64,
    /// Fat share (0.30)
    pub fat: f64,
}

/// Thresholds for attaching rationale tags to ranked candidates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RationaleThresholds {
    /// Candidate uses at most this share of remaining calories (0.5)
    pub fits_budget_share: f64,
    /// Grams of protein per kcal considered protein dense (0.08)
    pub high_protein_density_per_kcal: f64,
    /// Fat calorie share at or below which a candidate is low fat (0.25)
    pub low_fat_share: f64,
    /// Absolute protein in grams considered high protein (25)
    pub high_protein_g: f64,
    /// Calories at or above which a candidate is calorie dense (400)
    pub calorie_dense_kcal: f64,
    /// Maximum distance from every ideal macro share to count as balanced (0.1)
    pub balanced_share_tolerance: f64,
    /// Fiber in grams considered high fiber (5)
    pub high_fiber_g: f64,
}

/// Limits on surfaced candidates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationLimits {
    /// Number of top candidates returned by default
    pub max_candidates: usize,
}

impl Default for RecommendationFilters {
    fn default() -> Self {
        Self {
            lose_max_budget_share: 0.5,
            lose_min_protein_g: 5.0,
            lose_min_protein_per_kcal: 0.05,
            gain_min_calories: 150.0,
            gain_min_protein_g: 10.0,
            maintain_min_calories: 100.0,
            maintain_max_budget_share: 0.6,
        }
    }
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            calorie_fit: 50.0,
            lose_protein_density: 1000.0,
            lose_low_fat: 20.0,
            gain_protein: 50.0,
            gain_protein_reference_g: 30.0,
            gain_calories: 50.0,
            gain_calorie_reference: 300.0,
            maintain_macro_share: 30.0,
        }
    }
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self {
            protein: 0.30,
            carbs: 0.40,
            fat: 0.30,
        }
    }
}

impl Default for RationaleThresholds {
    fn default() -> Self {
        Self {
            fits_budget_share: 0.5,
            high_protein_density_per_kcal: 0.08,
            low_fat_share: 0.25,
            high_protein_g: 25.0,
            calorie_dense_kcal: 400.0,
            balanced_share_tolerance: 0.1,
            high_fiber_g: 5.0,
        }
    }
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            max_candidates: defaults::RECOMMENDATION_LIMIT,
        }
    }
}
