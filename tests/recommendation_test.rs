// ABOUTME: Integration tests for goal-aware food candidate ranking
// ABOUTME: Covers per-goal filters, score ordering, tie-breaking, and malformed candidates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{candidate, candidate_pool};
use pierre_nutrition_analytics::intelligence::config::intelligence::{
    RecommendationConfig, RecommendationFilters,
};
use pierre_nutrition_analytics::intelligence::{
    passes_filters, rank_candidates, score_candidate, RationaleTag,
};
use pierre_nutrition_analytics::models::{GoalType, MacroBudget};

fn budget(calories: f64) -> MacroBudget {
    MacroBudget {
        calories,
        ..MacroBudget::default()
    }
}

// ============================================================================
// FILTERS
// ============================================================================

#[test]
fn test_lose_filter_checks_budget_protein_and_density() {
    let filters = RecommendationFilters::default();
    let remaining = budget(600.0);

    let lean = candidate("lean", 280.0, 20.0, 10.0, 5.0);
    assert!(passes_filters(&lean, &remaining, GoalType::Lose, &filters));

    // 5 / 280 = 0.018 protein per kcal
    let sugary = candidate("sugary", 280.0, 5.0, 60.0, 2.0);
    assert!(!passes_filters(&sugary, &remaining, GoalType::Lose, &filters));

    // More than half of the remaining budget
    let big = candidate("big", 301.0, 40.0, 10.0, 5.0);
    assert!(!passes_filters(&big, &remaining, GoalType::Lose, &filters));
}

#[test]
fn test_gain_and_maintain_filters() {
    let filters = RecommendationFilters::default();
    let remaining = budget(1000.0);

    let snack = candidate("snack", 120.0, 12.0, 10.0, 4.0);
    assert!(!passes_filters(&snack, &remaining, GoalType::Gain, &filters));
    assert!(passes_filters(&snack, &remaining, GoalType::Maintain, &filters));

    let feast = candidate("feast", 900.0, 45.0, 90.0, 35.0);
    assert!(passes_filters(&feast, &remaining, GoalType::Gain, &filters));
    assert!(!passes_filters(&feast, &remaining, GoalType::Maintain, &filters));
}

#[test]
fn test_zero_calorie_candidate_uses_unit_denominator() {
    let filters = RecommendationFilters::default();
    let water = candidate("water", 0.0, 0.0, 0.0, 0.0);
    assert!(!passes_filters(&water, &budget(600.0), GoalType::Lose, &filters));

    let isolate = candidate("isolate", 0.0, 6.0, 0.0, 0.0);
    assert!(passes_filters(&isolate, &budget(600.0), GoalType::Lose, &filters));
}

// ============================================================================
// SCORING AND ORDER
// ============================================================================

#[test]
fn test_lose_ranking_prefers_protein_density() {
    let config = RecommendationConfig::default();
    let report = rank_candidates(&candidate_pool(), &budget(600.0), GoalType::Lose, &config);

    let ids: Vec<&str> = report
        .ranked
        .iter()
        .map(|r| r.candidate_id.as_str())
        .collect();
    assert_eq!(ids, vec!["chicken-breast", "greek-yogurt", "lentil-soup"]);
    assert_eq!(report.filtered_out, 2);
    assert_eq!(report.malformed, 0);

    let best = &report.ranked[0];
    assert!(best.rationale.contains(&RationaleTag::HighProteinDensity));
    assert!(best.rationale.contains(&RationaleTag::HighProtein));
    assert!(best.rationale.contains(&RationaleTag::FitsBudget));
}

#[test]
fn test_scores_are_non_increasing() {
    let config = RecommendationConfig::default();
    for goal_type in [GoalType::Lose, GoalType::Maintain, GoalType::Gain] {
        let report = rank_candidates(&candidate_pool(), &budget(1200.0), goal_type, &config);
        for pair in report.ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score, "{goal_type} out of order");
        }
    }
}

#[test]
fn test_equal_scores_break_ties_by_id() {
    let config = RecommendationConfig::default();
    let pool = vec![
        candidate("b-oats", 300.0, 15.0, 50.0, 6.0),
        candidate("a-oats", 300.0, 15.0, 50.0, 6.0),
        candidate("c-oats", 300.0, 15.0, 50.0, 6.0),
    ];

    let report = rank_candidates(&pool, &budget(1500.0), GoalType::Maintain, &config);
    let ids: Vec<&str> = report
        .ranked
        .iter()
        .map(|r| r.candidate_id.as_str())
        .collect();
    assert_eq!(ids, vec!["a-oats", "b-oats", "c-oats"]);
}

#[test]
fn test_malformed_candidates_are_counted_not_ranked() {
    let config = RecommendationConfig::default();
    let mut pool = candidate_pool();
    pool.push(candidate("broken", f64::NAN, 30.0, 10.0, 5.0));

    let report = rank_candidates(&pool, &budget(1200.0), GoalType::Gain, &config);
    assert_eq!(report.malformed, 1);
    assert!(report.ranked.iter().all(|r| r.candidate_id != "broken"));
}

#[test]
fn test_exhausted_budget_drops_fit_term() {
    let config = RecommendationConfig::default();
    let food = candidate("rice", 200.0, 4.0, 44.0, 0.5);

    let with_budget = score_candidate(&food, &budget(800.0), GoalType::Gain, &config);
    let without_budget = score_candidate(&food, &budget(0.0), GoalType::Gain, &config);
    // (1 - 200/800) * 50
    assert!((with_budget - without_budget - 37.5).abs() < 1e-9);
}

#[test]
fn test_top_n_truncates() {
    let config = RecommendationConfig::default();
    let report = rank_candidates(&candidate_pool(), &budget(1200.0), GoalType::Gain, &config);
    assert_eq!(report.top_n(2).len(), 2);
    assert_eq!(report.top_n(50).len(), report.ranked.len());
}
