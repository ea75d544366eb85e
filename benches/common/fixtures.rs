// ABOUTME: Benchmark fixtures for generating realistic nutrition histories
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic nutrition fixtures: the same size always produces the same data.

use chrono::{Duration, NaiveDate};
use pierre_nutrition_analytics::models::{
    CandidateKind, FoodCandidate, Goal, GoalType, NutrientKind, NutrientSample, WeightEntry,
};
use std::collections::BTreeMap;

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One month of logs
    Month,
    /// One quarter of logs
    Quarter,
    /// One year of logs
    Year,
}

impl HistorySize {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }
}

/// Last day of every generated history
#[must_use]
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default()
}

/// Weight-loss goal started at the beginning of the year
#[must_use]
pub fn lose_goal() -> Goal {
    let targets: BTreeMap<NutrientKind, f64> = [
        (NutrientKind::Calories, 1800.0),
        (NutrientKind::Protein, 130.0),
        (NutrientKind::Carbs, 180.0),
        (NutrientKind::Fat, 60.0),
        (NutrientKind::Fiber, 30.0),
        (NutrientKind::Sodium, 2300.0),
    ]
    .into_iter()
    .collect();

    Goal {
        goal_type: GoalType::Lose,
        start_weight_kg: 90.0,
        target_weight_kg: 78.0,
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
        weekly_rate_kg: 0.5,
        nutrition_targets: targets,
    }
}

/// One weight entry per day, trending down with a small weekly wobble
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_weights(size: HistorySize) -> Vec<WeightEntry> {
    let days = size.days();
    (0..days)
        .map(|index| {
            let date = as_of() - Duration::days((days - 1 - index) as i64);
            let wobble = ((index * 37) % 7) as f64 / 20.0;
            WeightEntry::new(date, 90.0 - index as f64 * 0.06 + wobble)
        })
        .collect()
}

/// Two samples per day with varying intake
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_samples(size: HistorySize) -> Vec<NutrientSample> {
    let days = size.days();
    (0..days)
        .flat_map(|index| {
            let date = as_of() - Duration::days((days - 1 - index) as i64);
            let lunch_kcal = 700.0 + ((index * 53) % 300) as f64;
            let dinner_kcal = 800.0 + ((index * 29) % 400) as f64;
            let mut lunch = NutrientSample::with_macros(date, lunch_kcal, 45.0, 70.0, 22.0);
            lunch.fiber_g = 8.0 + (index % 5) as f64;
            lunch.sodium_mg = 900.0 + ((index * 17) % 500) as f64;
            let dinner = NutrientSample::with_macros(date, dinner_kcal, 55.0, 80.0, 30.0);
            [lunch, dinner]
        })
        .collect()
}

/// Candidate pool with a spread of macro profiles
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_candidates(count: usize) -> Vec<FoodCandidate> {
    (0..count)
        .map(|index| {
            let calories = 80.0 + ((index * 61) % 700) as f64;
            FoodCandidate {
                id: format!("bench-food-{index:04}"),
                name: format!("Benchmark Food {index}"),
                kind: if index % 3 == 0 {
                    CandidateKind::Meal
                } else {
                    CandidateKind::Food
                },
                calories,
                protein_g: 5.0 + ((index * 13) % 45) as f64,
                carbs_g: 5.0 + ((index * 7) % 80) as f64,
                fat_g: 1.0 + ((index * 11) % 30) as f64,
                fiber_g: ((index * 3) % 12) as f64,
            }
        })
        .collect()
}
