// ABOUTME: Goal-aware recommendation scorer for food and meal candidates
// ABOUTME: Applies per-goal hard filters, additive heuristic scoring, and rationale tagging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Scorer
//!
//! Candidates are first passed through goal-specific hard filters against the
//! remaining macro budget, then scored with an additive heuristic:
//!
//! - every goal: calorie fit `(1 - min(1, cal / remaining)) * 50`
//! - `Lose`: protein density and a low-fat bonus
//! - `Gain`: protein and calorie amounts against reference portions
//! - `Maintain`: closeness of the macro calorie split to 30/40/30
//!
//! Scoring runs in parallel across candidates; output order is fully
//! determined by score and candidate id.

use crate::config::intelligence::{RecommendationConfig, RecommendationFilters};
use pierre_core::models::{CandidateKind, FoodCandidate, GoalType, MacroBudget};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Why a candidate was recommended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RationaleTag {
    /// Uses at most half of the remaining calories
    FitsBudget,
    /// Lots of protein per calorie
    HighProteinDensity,
    /// Small share of calories from fat
    LowFat,
    /// Large absolute protein amount
    HighProtein,
    /// Many calories in one serving
    CalorieDense,
    /// Macro split close to the ideal
    BalancedMacros,
    /// Good fiber source
    HighFiber,
}

/// A candidate that passed the filters, with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// Candidate identifier
    pub candidate_id: String,
    /// Display name
    pub name: String,
    /// Food or meal
    pub kind: CandidateKind,
    /// Heuristic score, higher is better
    pub score: f64,
    /// Tags explaining the recommendation
    pub rationale: BTreeSet<RationaleTag>,
}

/// Ranking output with accounting for excluded candidates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    /// Passing candidates, best first
    pub ranked: Vec<RankedCandidate>,
    /// Candidates rejected by the hard filters
    pub filtered_out: usize,
    /// Candidates excluded for non-finite nutrient values
    pub malformed: usize,
}

impl RankingReport {
    /// The best `n` candidates
    #[must_use]
    pub fn top_n(&self, n: usize) -> &[RankedCandidate] {
        &self.ranked[..n.min(self.ranked.len())]
    }
}

/// Macro calorie shares `(protein, carbs, fat)`, all zero when there are no macro calories
fn macro_shares(candidate: &FoodCandidate) -> (f64, f64, f64) {
    let (protein, carbs, fat) = candidate.macro_calories();
    let total = protein + carbs + fat;
    if total > 0.0 {
        (protein / total, carbs / total, fat / total)
    } else {
        (0.0, 0.0, 0.0)
    }
}

fn protein_per_kcal(candidate: &FoodCandidate) -> f64 {
    candidate.protein_g / candidate.calories.max(1.0)
}

/// Check the goal-specific hard filters
#[must_use]
pub fn passes_filters(
    candidate: &FoodCandidate,
    remaining: &MacroBudget,
    goal_type: GoalType,
    filters: &RecommendationFilters,
) -> bool {
    match goal_type {
        GoalType::Lose => {
            candidate.calories <= filters.lose_max_budget_share * remaining.calories
                && candidate.protein_g >= filters.lose_min_protein_g
                && protein_per_kcal(candidate) >= filters.lose_min_protein_per_kcal
        }
        GoalType::Gain => {
            candidate.calories >= filters.gain_min_calories
                && candidate.protein_g >= filters.gain_min_protein_g
        }
        GoalType::Maintain => {
            candidate.calories >= filters.maintain_min_calories
                && candidate.calories <= filters.maintain_max_budget_share * remaining.calories
        }
    }
}

/// Heuristic score for a candidate, higher is better
#[must_use]
pub fn score_candidate(
    candidate: &FoodCandidate,
    remaining: &MacroBudget,
    goal_type: GoalType,
    config: &RecommendationConfig,
) -> f64 {
    let weights = &config.weights;

    let calorie_fit = if remaining.calories > 0.0 {
        (1.0 - (candidate.calories / remaining.calories).min(1.0)) * weights.calorie_fit
    } else {
        0.0
    };

    let goal_term = match goal_type {
        GoalType::Lose => {
            let fat_share = (candidate.fat_g / candidate.calories.max(1.0)) * 9.0;
            protein_per_kcal(candidate) * weights.lose_protein_density
                + (1.0 - fat_share) * weights.lose_low_fat
        }
        GoalType::Gain => {
            (candidate.protein_g / weights.gain_protein_reference_g) * weights.gain_protein
                + (candidate.calories / weights.gain_calorie_reference) * weights.gain_calories
        }
        GoalType::Maintain => {
            let ideal = &config.ideal_split;
            let (protein, carbs, fat) = macro_shares(candidate);
            [
                (ideal.protein, protein),
                (ideal.carbs, carbs),
                (ideal.fat, fat),
            ]
            .iter()
            .map(|(target, share)| (1.0 - (target - share).abs()) * weights.maintain_macro_share)
            .sum()
        }
    };

    calorie_fit + goal_term
}

/// Tags describing why a candidate is attractive
#[must_use]
pub fn rationale_for(
    candidate: &FoodCandidate,
    remaining: &MacroBudget,
    config: &RecommendationConfig,
) -> BTreeSet<RationaleTag> {
    let tags = &config.tags;
    let ideal = &config.ideal_split;
    let (protein_share, carbs_share, fat_share) = macro_shares(candidate);
    let has_macros = protein_share + carbs_share + fat_share > 0.0;

    let mut rationale = BTreeSet::new();
    if remaining.calories > 0.0 && candidate.calories <= tags.fits_budget_share * remaining.calories
    {
        rationale.insert(RationaleTag::FitsBudget);
    }
    if protein_per_kcal(candidate) >= tags.high_protein_density_per_kcal {
        rationale.insert(RationaleTag::HighProteinDensity);
    }
    if has_macros && fat_share <= tags.low_fat_share {
        rationale.insert(RationaleTag::LowFat);
    }
    if candidate.protein_g >= tags.high_protein_g {
        rationale.insert(RationaleTag::HighProtein);
    }
    if candidate.calories >= tags.calorie_dense_kcal {
        rationale.insert(RationaleTag::CalorieDense);
    }
    if has_macros
        && (protein_share - ideal.protein).abs() <= tags.balanced_share_tolerance
        && (carbs_share - ideal.carbs).abs() <= tags.balanced_share_tolerance
        && (fat_share - ideal.fat).abs() <= tags.balanced_share_tolerance
    {
        rationale.insert(RationaleTag::BalancedMacros);
    }
    if candidate.fiber_g >= tags.high_fiber_g {
        rationale.insert(RationaleTag::HighFiber);
    }
    rationale
}

enum Assessment {
    Malformed,
    Rejected,
    Ranked(RankedCandidate),
}

fn assess(
    candidate: &FoodCandidate,
    remaining: &MacroBudget,
    goal_type: GoalType,
    config: &RecommendationConfig,
) -> Assessment {
    if !candidate.is_finite() {
        return Assessment::Malformed;
    }
    if !passes_filters(candidate, remaining, goal_type, &config.filters) {
        return Assessment::Rejected;
    }
    Assessment::Ranked(RankedCandidate {
        candidate_id: candidate.id.clone(),
        name: candidate.name.clone(),
        kind: candidate.kind,
        score: score_candidate(candidate, remaining, goal_type, config),
        rationale: rationale_for(candidate, remaining, config),
    })
}

/// Filter, score, and sort candidates against the remaining budget
///
/// Sorted by score descending; equal scores are ordered by candidate id.
#[must_use]
pub fn rank_candidates(
    candidates: &[FoodCandidate],
    remaining: &MacroBudget,
    goal_type: GoalType,
    config: &RecommendationConfig,
) -> RankingReport {
    let assessments: Vec<Assessment> = candidates
        .par_iter()
        .map(|candidate| assess(candidate, remaining, goal_type, config))
        .collect();

    let mut report = RankingReport::default();
    for assessment in assessments {
        match assessment {
            Assessment::Malformed => report.malformed += 1,
            Assessment::Rejected => report.filtered_out += 1,
            Assessment::Ranked(ranked) => report.ranked.push(ranked),
        }
    }

    report.ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.candidate_id.cmp(&b.candidate_id))
    });

    debug!(
        %goal_type,
        ranked = report.ranked.len(),
        filtered_out = report.filtered_out,
        malformed = report.malformed,
        "Ranked food candidates"
    );

    report
}
