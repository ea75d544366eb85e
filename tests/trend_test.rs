// ABOUTME: Integration tests for half-over-half trend detection
// ABOUTME: Covers goal-relative direction, tolerance, insufficient data, and nutrient trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{calorie_sample, day, goal, lose_goal, weights};
use pierre_nutrition_analytics::intelligence::config::intelligence::TrendConfig;
use pierre_nutrition_analytics::intelligence::{
    detect_nutrient_trend, detect_trend, detect_weight_trend, TrendDirection,
};
use pierre_nutrition_analytics::models::{GoalType, NutrientKind, WeightEntry};

#[test]
fn test_falling_weight_improves_lose_goal() {
    let config = TrendConfig::default();
    let entries = weights(&[(0, 80.0), (3, 79.5), (7, 76.0), (10, 75.5)]);

    let result = detect_weight_trend(&entries, &goal(GoalType::Lose, 80.0, 70.0, 0.5), &config);
    assert_eq!(result.direction, TrendDirection::Improving);
    assert!((result.first_half_avg - 79.75).abs() < 1e-9);
    assert!((result.second_half_avg - 75.75).abs() < 1e-9);
    assert!((result.delta + 4.0).abs() < 1e-9);
    assert_eq!(result.sample_count, 4);
}

#[test]
fn test_falling_weight_declines_gain_goal() {
    let config = TrendConfig::default();
    let entries = weights(&[(0, 60.0), (1, 60.0), (2, 55.0), (3, 55.0)]);

    let result = detect_weight_trend(&entries, &goal(GoalType::Gain, 60.0, 66.0, 0.25), &config);
    assert_eq!(result.direction, TrendDirection::Declining);
}

#[test]
fn test_small_change_is_maintaining() {
    // 5% of a 70 kg target is 3.5 kg; a 1 kg drop stays inside the tolerance
    let config = TrendConfig::default();
    let entries = weights(&[(0, 80.0), (1, 80.0), (2, 79.0), (3, 79.0)]);

    let result = detect_weight_trend(&entries, &goal(GoalType::Lose, 80.0, 70.0, 0.5), &config);
    assert_eq!(result.direction, TrendDirection::Maintaining);
}

#[test]
fn test_unordered_input_is_sorted_by_date() {
    let config = TrendConfig::default();
    let entries = vec![
        WeightEntry::new(day(10), 70.0),
        WeightEntry::new(day(0), 80.0),
        WeightEntry::new(day(11), 70.0),
        WeightEntry::new(day(1), 80.0),
    ];
    let result = detect_weight_trend(&entries, &goal(GoalType::Lose, 80.0, 70.0, 0.5), &config);
    assert_eq!(result.direction, TrendDirection::Improving);
}

#[test]
fn test_insufficient_points_report_maintaining() {
    let config = TrendConfig::default();
    let empty = detect_trend(&[], GoalType::Gain, 70.0, &config);
    assert_eq!(empty.direction, TrendDirection::Maintaining);
    assert_eq!(empty.sample_count, 0);

    // Non-finite points do not count toward the minimum
    let sparse = detect_trend(&[f64::NAN, 72.0, f64::INFINITY], GoalType::Gain, 70.0, &config);
    assert_eq!(sparse.direction, TrendDirection::Maintaining);
    assert_eq!(sparse.sample_count, 1);
    assert_eq!(sparse.dropped_samples, 2);
}

#[test]
fn test_zero_target_only_flags_real_change() {
    let config = TrendConfig::default();
    let flat = detect_trend(&[5.0, 5.0, 5.0, 5.0], GoalType::Gain, 0.0, &config);
    assert_eq!(flat.direction, TrendDirection::Maintaining);

    let rising = detect_trend(&[5.0, 5.0, 6.0, 6.0], GoalType::Gain, 0.0, &config);
    assert_eq!(rising.direction, TrendDirection::Improving);
}

#[test]
fn test_calorie_trend_follows_goal_direction() {
    let config = TrendConfig::default();
    let goal = lose_goal();
    let samples: Vec<_> = [2400.0, 2350.0, 1900.0, 1850.0]
        .iter()
        .enumerate()
        .map(|(i, kcal)| calorie_sample(day(i as u64), *kcal))
        .collect();

    let result = detect_nutrient_trend(&samples, NutrientKind::Calories, &goal, &config).unwrap();
    assert_eq!(result.direction, TrendDirection::Improving);
}

#[test]
fn test_nutrient_trend_needs_a_target() {
    let config = TrendConfig::default();
    let samples = vec![calorie_sample(day(0), 1800.0)];
    assert!(detect_nutrient_trend(&samples, NutrientKind::Iron, &lose_goal(), &config).is_none());
}

#[test]
fn test_meals_on_one_day_form_a_single_point() {
    let config = TrendConfig::default();
    let samples = vec![
        calorie_sample(day(0), 900.0),
        calorie_sample(day(0), 1000.0),
        calorie_sample(day(1), 1900.0),
        calorie_sample(day(2), 1900.0),
        calorie_sample(day(3), 1900.0),
    ];

    let result =
        detect_nutrient_trend(&samples, NutrientKind::Calories, &lose_goal(), &config).unwrap();
    assert_eq!(result.direction, TrendDirection::Maintaining);
    assert_eq!(result.sample_count, 4);
    assert!((result.first_half_avg - 1900.0).abs() < 1e-9);
    assert!((result.second_half_avg - 1900.0).abs() < 1e-9);
}
