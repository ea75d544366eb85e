// ABOUTME: Integration tests for logging and adherence streaks
// ABOUTME: Covers monotonicity, gaps, lapsed streaks, best runs, and day-record building
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{calorie_sample, day, lose_goal};
use pierre_nutrition_analytics::intelligence::config::intelligence::AdherenceConfig;
use pierre_nutrition_analytics::intelligence::{
    build_day_records, compute_streaks, DayRecord, StreakState,
};
use pierre_nutrition_analytics::models::{Goal, NutrientTotals};

fn on_track_run(from: u64, to: u64) -> Vec<DayRecord> {
    (from..=to)
        .map(|offset| DayRecord::new(day(offset), true, true))
        .collect()
}

// ============================================================================
// MONOTONICITY
// ============================================================================

#[test]
fn test_on_track_day_extends_streak() {
    let mut records = on_track_run(0, 4);
    let before = compute_streaks(&records, day(4));
    assert_eq!(before.current_streak, 5);

    records.push(DayRecord::new(day(5), true, true));
    let after = compute_streaks(&records, day(5));
    assert_eq!(after.current_streak, before.current_streak + 1);
    assert_eq!(after.logging_streak, 6);
}

#[test]
fn test_off_track_day_resets_adherence_streak_only() {
    let mut records = on_track_run(0, 4);
    records.push(DayRecord::new(day(5), true, false));

    let state = compute_streaks(&records, day(5));
    assert_eq!(state.current_streak, 0);
    assert_eq!(state.logging_streak, 6);
    assert_eq!(state.best_streak, 5);
}

// ============================================================================
// GAPS AND LAPSES
// ============================================================================

#[test]
fn test_missing_day_breaks_both_streaks() {
    let mut records = on_track_run(0, 2);
    records.extend(on_track_run(4, 5));

    let state = compute_streaks(&records, day(5));
    assert_eq!(state.current_streak, 2);
    assert_eq!(state.logging_streak, 2);
    assert_eq!(state.best_streak, 3);
    assert_eq!(state.total_logged_days, 5);
}

#[test]
fn test_yesterday_keeps_streak_alive() {
    let records = on_track_run(0, 3);
    let state = compute_streaks(&records, day(4));
    assert_eq!(state.current_streak, 4);
}

#[test]
fn test_streaks_reset_when_newest_record_is_older_than_yesterday() {
    let records = on_track_run(0, 3);
    // Newest record on as_of - 1 still counts
    assert_eq!(compute_streaks(&records, day(4)).logging_streak, 4);

    // Newest record on as_of - 2 ends both trailing streaks
    let state = compute_streaks(&records, day(5));
    assert_eq!(state.current_streak, 0);
    assert_eq!(state.logging_streak, 0);
    assert_eq!(state.best_streak, 4);
}

#[test]
fn test_future_records_are_ignored() {
    let records = on_track_run(0, 9);
    let state = compute_streaks(&records, day(4));
    assert_eq!(state.current_streak, 5);
    assert_eq!(state.total_logged_days, 5);
}

#[test]
fn test_empty_history_is_all_zero() {
    assert_eq!(compute_streaks(&[], day(0)), StreakState::default());
}

#[test]
fn test_unordered_duplicates_merge() {
    let records = vec![
        DayRecord::new(day(2), true, false),
        DayRecord::new(day(0), true, true),
        DayRecord::new(day(2), true, true),
        DayRecord::new(day(1), true, true),
    ];
    let state = compute_streaks(&records, day(2));
    assert_eq!(state.current_streak, 3);
    assert_eq!(state.total_logged_days, 3);
}

// ============================================================================
// DAY RECORDS FROM SAMPLES
// ============================================================================

#[test]
fn test_day_records_sum_calories_per_day() {
    let config = AdherenceConfig::default();
    let goal = lose_goal();
    // Two meals adding to 1900 kcal (95%) are on track; 2300 kcal (115%) is over
    let samples = vec![
        calorie_sample(day(0), 900.0),
        calorie_sample(day(0), 1000.0),
        calorie_sample(day(1), 2300.0),
        calorie_sample(day(2), f64::NAN),
    ];

    let records = build_day_records(&samples, &goal, day(2), &config);
    assert_eq!(records.dropped, 1);
    assert_eq!(
        records.items,
        vec![
            DayRecord::new(day(0), true, true),
            DayRecord::new(day(1), true, false),
        ]
    );
}

#[test]
fn test_no_calorie_target_means_never_on_track() {
    let config = AdherenceConfig::default();
    let goal = Goal {
        nutrition_targets: NutrientTotals::new(),
        ..lose_goal()
    };
    let samples = vec![calorie_sample(day(0), 1900.0)];

    let records = build_day_records(&samples, &goal, day(0), &config);
    let state = compute_streaks(&records.items, day(0));
    assert_eq!(state.logging_streak, 1);
    assert_eq!(state.current_streak, 0);
}
