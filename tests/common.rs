// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging setup, dates, goals, samples, candidates, and seeded providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_nutrition_analytics`
//!
//! Fixture builders keep integration tests focused on the behavior under test.

use chrono::{Days, NaiveDate};
use pierre_nutrition_analytics::models::{
    CandidateKind, FoodCandidate, Goal, GoalType, NutrientKind, NutrientSample, NutrientTotals,
    WeightEntry,
};
use pierre_nutrition_analytics::providers::{InMemoryProvider, UserRecords};
use std::env;
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed epoch for test dates
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// `epoch() + n` days
pub fn day(n: u64) -> NaiveDate {
    epoch() + Days::new(n)
}

/// Daily targets from `(nutrient, amount)` pairs
pub fn targets(pairs: &[(NutrientKind, f64)]) -> NutrientTotals {
    pairs.iter().copied().collect()
}

/// Goal starting at `epoch()` with the given direction and weights
pub fn goal(goal_type: GoalType, start: f64, target: f64, weekly_rate: f64) -> Goal {
    Goal {
        goal_type,
        start_weight_kg: start,
        target_weight_kg: target,
        start_date: epoch(),
        weekly_rate_kg: weekly_rate,
        nutrition_targets: NutrientTotals::new(),
    }
}

/// 80 kg to 70 kg at 0.5 kg/week with a 2000 kcal target
pub fn lose_goal() -> Goal {
    Goal {
        nutrition_targets: targets(&[
            (NutrientKind::Calories, 2000.0),
            (NutrientKind::Protein, 120.0),
            (NutrientKind::Carbs, 200.0),
            (NutrientKind::Fat, 65.0),
            (NutrientKind::Fiber, 30.0),
            (NutrientKind::Sodium, 2300.0),
        ]),
        ..goal(GoalType::Lose, 80.0, 70.0, 0.5)
    }
}

/// Sample with only calories set
pub fn calorie_sample(date: NaiveDate, calories: f64) -> NutrientSample {
    NutrientSample::with_macros(date, calories, 0.0, 0.0, 0.0)
}

/// Sample with macronutrients set
pub fn macro_sample(
    date: NaiveDate,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> NutrientSample {
    NutrientSample::with_macros(date, calories, protein, carbs, fat)
}

/// Weight entries from `(day offset, kg)` pairs
pub fn weights(points: &[(u64, f64)]) -> Vec<WeightEntry> {
    points
        .iter()
        .map(|(offset, kg)| WeightEntry::new(day(*offset), *kg))
        .collect()
}

/// Food candidate without fiber
pub fn candidate(id: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodCandidate {
    FoodCandidate {
        id: id.to_owned(),
        name: id.replace('-', " "),
        kind: CandidateKind::Food,
        calories,
        protein_g: protein,
        carbs_g: carbs,
        fat_g: fat,
        fiber_g: 0.0,
    }
}

/// A small candidate pool with distinct profiles
pub fn candidate_pool() -> Vec<FoodCandidate> {
    vec![
        candidate("chicken-breast", 280.0, 52.0, 0.0, 6.0),
        candidate("greek-yogurt", 150.0, 20.0, 9.0, 4.0),
        candidate("granola-bar", 280.0, 5.0, 40.0, 10.0),
        candidate("salmon-bowl", 650.0, 40.0, 60.0, 25.0),
        candidate("lentil-soup", 230.0, 18.0, 35.0, 2.0),
    ]
}

/// Provider seeded with one user holding `lose_goal()` and a week of logs ending at `day(13)`
pub async fn seeded_provider() -> (InMemoryProvider, Uuid) {
    let provider = InMemoryProvider::with_candidates(candidate_pool());
    let user_id = Uuid::new_v4();

    let samples = (7..=13)
        .map(|offset| macro_sample(day(offset), 1900.0, 110.0, 190.0, 60.0))
        .collect();
    let records = UserRecords {
        weights: weights(&[(0, 80.0), (7, 79.0), (13, 78.2)]),
        samples,
        goal: Some(lose_goal()),
    };
    provider.insert_user(user_id, records).await;

    (provider, user_id)
}
