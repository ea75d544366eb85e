// ABOUTME: Integration tests for the nutrient gap analyzer
// ABOUTME: Covers gap identity, band edges, suggestions ordering, and window analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{day, macro_sample, targets};
use pierre_nutrition_analytics::intelligence::config::intelligence::GapConfig;
use pierre_nutrition_analytics::intelligence::{
    analyze_gaps, analyze_window, suggest_optimizations, GapPriority, GapResult, GapStatus,
    ObservationWindow, SuggestionAction,
};
use pierre_nutrition_analytics::models::NutrientKind;

// ============================================================================
// GAP IDENTITY
// ============================================================================

#[test]
fn test_calorie_gap_at_seventy_percent_is_medium() {
    let gap = GapResult::compute(NutrientKind::Calories, 1400.0, 2000.0, &GapConfig::default());
    assert!((gap.gap - 600.0).abs() < f64::EPSILON);
    assert!((gap.percentage - 70.0).abs() < f64::EPSILON);
    assert_eq!(gap.status, GapStatus::Low);
    assert_eq!(gap.priority, GapPriority::Medium);
}

#[test]
fn test_gap_identity_over_grid() {
    let config = GapConfig::default();
    for target in [1.0, 37.5, 250.0, 2000.0] {
        for step in 0..=40 {
            let current = target * f64::from(step) / 10.0;
            let result = GapResult::compute(NutrientKind::Protein, current, target, &config);
            assert!((result.gap - (target - current)).abs() < f64::EPSILON);
            assert!((result.percentage - (current / target * 100.0).round()).abs() < f64::EPSILON);
        }
    }
}

#[test]
fn test_zero_target_reports_zero_percentage() {
    let result = GapResult::compute(NutrientKind::Fiber, 12.0, 0.0, &GapConfig::default());
    assert!(result.percentage.abs() < f64::EPSILON);
    assert!((result.gap + 12.0).abs() < f64::EPSILON);
}

#[test]
fn test_rounding_decides_band() {
    let config = GapConfig::default();
    // 69.6% rounds to 70 and lands in the medium band
    let result = GapResult::compute(NutrientKind::Protein, 69.6, 100.0, &config);
    assert_eq!(result.priority, GapPriority::Medium);
    // 69.4% rounds to 69 and stays high priority
    let result = GapResult::compute(NutrientKind::Protein, 69.4, 100.0, &config);
    assert_eq!(result.priority, GapPriority::High);
}

// ============================================================================
// SUGGESTIONS
// ============================================================================

#[test]
fn test_suggestions_sorted_by_priority_then_gap() {
    let config = GapConfig::default();
    let current = targets(&[
        (NutrientKind::Calories, 1700.0), // 85%: medium, gap 300
        (NutrientKind::Protein, 40.0),    // 33%: high, gap 80
        (NutrientKind::Fiber, 10.0),      // 33%: high, gap 20
        (NutrientKind::Fat, 65.0),        // 100%: optimal
        (NutrientKind::Sugar, 90.0),      // 180%: high, gap -40
    ]);
    let goal_targets = targets(&[
        (NutrientKind::Calories, 2000.0),
        (NutrientKind::Protein, 120.0),
        (NutrientKind::Fiber, 30.0),
        (NutrientKind::Fat, 65.0),
        (NutrientKind::Sugar, 50.0),
    ]);

    let gaps = analyze_gaps(&current, &goal_targets, &config).items;
    let order: Vec<NutrientKind> = gaps.iter().map(|g| g.nutrient).collect();
    assert_eq!(
        order,
        vec![
            NutrientKind::Calories,
            NutrientKind::Protein,
            NutrientKind::Fat,
            NutrientKind::Fiber,
            NutrientKind::Sugar,
        ]
    );

    let suggestions = suggest_optimizations(&gaps);
    let ranked: Vec<(NutrientKind, SuggestionAction)> =
        suggestions.iter().map(|s| (s.nutrient, s.action)).collect();
    assert_eq!(
        ranked,
        vec![
            (NutrientKind::Protein, SuggestionAction::Increase),
            (NutrientKind::Sugar, SuggestionAction::Decrease),
            (NutrientKind::Fiber, SuggestionAction::Increase),
            (NutrientKind::Calories, SuggestionAction::Increase),
        ]
    );
    assert_eq!(
        suggestions[0].message,
        "Increase protein by 80 g per day (33% of target)"
    );
}

#[test]
fn test_missing_consumption_counts_as_zero() {
    let config = GapConfig::default();
    let gaps = analyze_gaps(
        &targets(&[]),
        &targets(&[(NutrientKind::Iron, 18.0)]),
        &config,
    )
    .items;
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].status, GapStatus::Low);
    assert_eq!(gaps[0].priority, GapPriority::High);
}

#[test]
fn test_non_finite_consumption_is_excluded() {
    let config = GapConfig::default();
    let current = targets(&[
        (NutrientKind::Calories, f64::NAN),
        (NutrientKind::Protein, 40.0),
    ]);
    let goal_targets = targets(&[
        (NutrientKind::Calories, 2000.0),
        (NutrientKind::Protein, 120.0),
    ]);

    let gaps = analyze_gaps(&current, &goal_targets, &config);
    assert_eq!(gaps.dropped, 1);
    assert_eq!(gaps.items.len(), 1);
    assert_eq!(gaps.items[0].nutrient, NutrientKind::Protein);

    let suggestions = suggest_optimizations(&gaps.items);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].nutrient, NutrientKind::Protein);
    assert!(suggestions.iter().all(|s| !s.message.contains("NaN")));
}

#[test]
fn test_non_finite_target_is_excluded() {
    let gaps = analyze_gaps(
        &targets(&[(NutrientKind::Fiber, 20.0)]),
        &targets(&[(NutrientKind::Fiber, f64::INFINITY)]),
        &GapConfig::default(),
    );
    assert_eq!(gaps.dropped, 1);
    assert!(gaps.items.is_empty());
}

#[test]
fn test_non_finite_gap_gets_no_suggestion() {
    let gap = GapResult::compute(NutrientKind::Calories, f64::NAN, 2000.0, &GapConfig::default());
    assert!(suggest_optimizations(&[gap]).is_empty());
}

// ============================================================================
// WINDOWS
// ============================================================================

#[test]
fn test_weekly_window_averages_logged_days() {
    let config = GapConfig::default();
    let samples = vec![
        macro_sample(day(0), 3000.0, 10.0, 10.0, 10.0), // outside the window
        macro_sample(day(8), 1000.0, 50.0, 100.0, 30.0),
        macro_sample(day(8), 800.0, 40.0, 80.0, 20.0),
        macro_sample(day(12), 2200.0, 90.0, 220.0, 70.0),
    ];
    let goal_targets = targets(&[
        (NutrientKind::Calories, 2000.0),
        (NutrientKind::Protein, 100.0),
    ]);

    let report = analyze_window(
        &samples,
        &goal_targets,
        ObservationWindow::Weekly,
        day(12),
        &config,
    );
    assert_eq!(report.start, day(6));
    assert_eq!(report.end, day(12));
    assert_eq!(report.days_logged, 2);

    // (1800 + 2200) / 2 logged days
    let calories = &report.gaps[0];
    assert!((calories.current - 2000.0).abs() < 1e-9);
    assert_eq!(calories.status, GapStatus::Optimal);

    // (90 + 90) / 2 = 90% of protein
    let protein = &report.gaps[1];
    assert!((protein.percentage - 90.0).abs() < f64::EPSILON);
    assert!(report.suggestions.is_empty());
}

#[test]
fn test_empty_window_is_all_low() {
    let report = analyze_window(
        &[],
        &targets(&[(NutrientKind::Calories, 2000.0)]),
        ObservationWindow::Daily,
        day(3),
        &GapConfig::default(),
    );
    assert_eq!(report.days_logged, 0);
    assert_eq!(report.gaps[0].status, GapStatus::Low);
    assert_eq!(report.suggestions.len(), 1);
}

#[test]
fn test_window_reports_dropped_nutrients() {
    let samples = vec![macro_sample(day(2), 1800.0, 90.0, 200.0, 60.0)];
    let report = analyze_window(
        &samples,
        &targets(&[
            (NutrientKind::Calories, 2000.0),
            (NutrientKind::Protein, f64::NAN),
        ]),
        ObservationWindow::Daily,
        day(2),
        &GapConfig::default(),
    );
    assert_eq!(report.dropped_nutrients, 1);
    assert_eq!(report.gaps.len(), 1);
    assert_eq!(report.gaps[0].nutrient, NutrientKind::Calories);
}
