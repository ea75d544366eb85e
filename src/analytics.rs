// ABOUTME: Snapshot-based analytics service combining every engine metric for one user
// ABOUTME: Fetches a consistent snapshot concurrently, then computes metrics in parallel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Analytics Service
//!
//! Metrics shown together must come from the same data. The service therefore
//! fetches one [`AnalyticsSnapshot`] (all provider calls joined) and computes
//! every metric against that snapshot. Computation is CPU-bound and runs on the
//! blocking pool, fanned out with `rayon::join`.

use crate::config::ServiceConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    analyze_window, build_day_records, classify_nutrient, compute_streaks, detect_nutrient_trend,
    detect_weight_trend, goal_progress, project_completion, rank_candidates, AdherenceStatus,
    GapReport, GoalProgress, ProjectionOutcome, ProjectionResult, RankedCandidate, RankingReport,
    StreakState, TrendResult,
};
use crate::intelligence::timeseries::{add_days, retain_finite_samples};
use crate::models::{
    FoodCandidate, Goal, GoalType, MacroBudget, NutrientKind, NutrientSample, NutrientTotals,
    WeightEntry,
};
use crate::providers::NutritionDataProvider;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task;
use tracing::{debug, info};
use uuid::Uuid;

/// Immutable inputs for one analytics run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    /// User the data belongs to
    pub user_id: Uuid,
    /// Reference day; nothing after it is considered
    pub as_of: NaiveDate,
    /// Active goal
    pub goal: Goal,
    /// Weight log
    pub weights: Vec<WeightEntry>,
    /// Nutrient samples in the history window
    pub samples: Vec<NutrientSample>,
    /// Food and meal candidates
    pub candidates: Vec<FoodCandidate>,
}

/// Counts of inputs excluded from the run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQuality {
    /// Weight entries with non-finite values
    pub dropped_weight_entries: usize,
    /// Nutrient samples with non-finite values
    pub dropped_nutrient_samples: usize,
    /// Candidates with non-finite values
    pub malformed_candidates: usize,
    /// Candidates rejected by the goal filters
    pub filtered_candidates: usize,
}

/// Every analytics metric for one user, computed from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAnalyticsReport {
    /// User analyzed
    pub user_id: Uuid,
    /// Reference day
    pub as_of: NaiveDate,
    /// Goal direction
    pub goal_type: GoalType,
    /// Calorie adherence on the reference day, when logged and targeted
    pub today_adherence: Option<AdherenceStatus>,
    /// Logging and adherence streaks
    pub streaks: StreakState,
    /// Weight trend toward the target weight
    pub weight_trend: TrendResult,
    /// Daily calorie trend, when a calorie target is set
    pub calorie_trend: Option<TrendResult>,
    /// Goal-completion projection
    pub projection: ProjectionResult,
    /// Progress toward the target weight
    pub progress: GoalProgress,
    /// Nutrient gaps over the configured window
    pub gaps: GapReport,
    /// Macro budget left on the reference day
    pub remaining_budget: MacroBudget,
    /// Best candidates for the remaining budget
    pub recommendations: Vec<RankedCandidate>,
    /// Excluded input counts
    pub data_quality: DataQuality,
}

/// Consumption logged on one day
fn consumed_on(samples: &[NutrientSample], day: NaiveDate) -> NutrientTotals {
    let mut consumed = NutrientTotals::new();
    let finite = retain_finite_samples(samples);
    for sample in finite.items.iter().filter(|s| s.date == day) {
        for (kind, value) in sample.totals() {
            *consumed.entry(kind).or_insert(0.0) += value;
        }
    }
    consumed
}

/// Remaining macro budget on `as_of` given the goal's daily targets
#[must_use]
pub fn remaining_budget(
    goal: &Goal,
    samples: &[NutrientSample],
    as_of: NaiveDate,
) -> MacroBudget {
    MacroBudget::remaining(&goal.nutrition_targets, &consumed_on(samples, as_of))
}

/// Rank the snapshot's candidates against the budget left on `as_of`
#[must_use]
pub fn rank_for_snapshot(snapshot: &AnalyticsSnapshot, config: &ServiceConfig) -> RankingReport {
    let budget = remaining_budget(&snapshot.goal, &snapshot.samples, snapshot.as_of);
    rank_candidates(
        &snapshot.candidates,
        &budget,
        snapshot.goal.goal_type,
        &config.analytics.recommendation,
    )
}

/// Compute every metric for a snapshot
///
/// Pure and deterministic: identical snapshots and configuration give identical
/// reports.
///
/// # Errors
///
/// Returns `InvalidGoalConfig` when the snapshot's goal violates its invariants
pub fn compute_report(
    snapshot: &AnalyticsSnapshot,
    config: &ServiceConfig,
) -> AppResult<GoalAnalyticsReport> {
    snapshot.goal.validate()?;

    let analytics = &config.analytics;
    let goal = &snapshot.goal;
    let as_of = snapshot.as_of;
    let weights: Vec<WeightEntry> = snapshot
        .weights
        .iter()
        .filter(|e| e.date <= as_of)
        .copied()
        .collect();
    let samples: Vec<NutrientSample> = snapshot
        .samples
        .iter()
        .filter(|s| s.date <= as_of)
        .cloned()
        .collect();

    let ((streak_part, trend_part), (projection_part, (gaps, ranking))) = rayon::join(
        || {
            rayon::join(
                || {
                    let records = build_day_records(&samples, goal, as_of, &analytics.adherence);
                    (compute_streaks(&records.items, as_of), records.dropped)
                },
                || {
                    (
                        detect_weight_trend(&weights, goal, &analytics.trend),
                        detect_nutrient_trend(
                            &samples,
                            NutrientKind::Calories,
                            goal,
                            &analytics.trend,
                        ),
                    )
                },
            )
        },
        || {
            rayon::join(
                || {
                    (
                        project_completion(&weights, goal, &analytics.projection),
                        goal_progress(&weights, goal),
                    )
                },
                || {
                    (
                        analyze_window(
                            &samples,
                            &goal.nutrition_targets,
                            config.gap_window,
                            as_of,
                            &analytics.gaps,
                        ),
                        rank_for_snapshot(snapshot, config),
                    )
                },
            )
        },
    );

    let (streaks, dropped_nutrient_samples) = streak_part;
    let (weight_trend, calorie_trend) = trend_part;
    let (projection, progress) = projection_part;
    let ProjectionOutcome {
        result: projection,
        dropped_samples: dropped_weight_entries,
    } = projection?;

    let consumed_today = consumed_on(&samples, as_of);
    let today_adherence = match (
        consumed_today.get(&NutrientKind::Calories),
        goal.target_for(NutrientKind::Calories),
    ) {
        (Some(calories), Some(target)) => Some(classify_nutrient(
            NutrientKind::Calories,
            *calories,
            target,
            goal.goal_type,
            &analytics.adherence,
        )),
        _ => None,
    };

    let limit = config.recommendation_limit();
    Ok(GoalAnalyticsReport {
        user_id: snapshot.user_id,
        as_of,
        goal_type: goal.goal_type,
        today_adherence,
        streaks,
        weight_trend,
        calorie_trend,
        projection,
        progress,
        gaps,
        remaining_budget: MacroBudget::remaining(&goal.nutrition_targets, &consumed_today),
        recommendations: ranking.top_n(limit).to_vec(),
        data_quality: DataQuality {
            dropped_weight_entries,
            dropped_nutrient_samples,
            malformed_candidates: ranking.malformed,
            filtered_candidates: ranking.filtered_out,
        },
    })
}

/// Fetches snapshots from a provider and runs the engine on them
#[derive(Clone)]
pub struct AnalyticsService {
    provider: Arc<dyn NutritionDataProvider>,
    config: Arc<ServiceConfig>,
}

impl AnalyticsService {
    /// Create a service over a provider
    #[must_use]
    pub fn new(provider: Arc<dyn NutritionDataProvider>, config: ServiceConfig) -> Self {
        Self {
            provider,
            config: Arc::new(config),
        }
    }

    /// Service configuration
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Fetch a consistent snapshot for `user_id` as of `as_of`
    ///
    /// Nutrient samples cover the history window ending at `as_of`; the goal,
    /// weights, and candidates are fetched concurrently with them.
    ///
    /// # Errors
    ///
    /// Returns the first provider error encountered
    pub async fn fetch_snapshot(
        &self,
        user_id: Uuid,
        as_of: NaiveDate,
    ) -> AppResult<AnalyticsSnapshot> {
        let lookback = i64::from(self.config.history_days.saturating_sub(1));
        let history_start = add_days(as_of, -lookback);

        let (goal, weights, samples, candidates) = tokio::try_join!(
            self.provider.get_active_goal(user_id),
            self.provider.list_weight_entries(user_id),
            self.provider.list_nutrient_samples(user_id, history_start, as_of),
            self.provider.list_food_candidates(),
        )
        .map_err(|e| e.with_user_id(user_id))?;

        debug!(
            %user_id,
            provider = self.provider.provider_name(),
            weights = weights.len(),
            samples = samples.len(),
            candidates = candidates.len(),
            "Fetched analytics snapshot"
        );

        Ok(AnalyticsSnapshot {
            user_id,
            as_of,
            goal,
            weights,
            samples,
            candidates,
        })
    }

    /// Full analytics report for a user
    ///
    /// # Errors
    ///
    /// Returns provider errors, `InvalidGoalConfig` for an invalid goal, or
    /// `InternalError` if the computation task fails
    pub async fn analyze(
        &self,
        user_id: Uuid,
        as_of: NaiveDate,
    ) -> AppResult<GoalAnalyticsReport> {
        let snapshot = self.fetch_snapshot(user_id, as_of).await?;
        let config = Arc::clone(&self.config);

        let report = task::spawn_blocking(move || compute_report(&snapshot, &config))
            .await
            .map_err(|e| AppError::internal(format!("Analytics task failed: {e}")))??;

        info!(
            %user_id,
            %as_of,
            streak = report.streaks.current_streak,
            misaligned = report.projection.is_misaligned(),
            "Computed goal analytics"
        );
        Ok(report)
    }

    /// Goal-completion projection from the user's full weight log
    ///
    /// # Errors
    ///
    /// Returns provider errors or `InvalidGoalConfig` for an invalid goal
    pub async fn project(&self, user_id: Uuid) -> AppResult<ProjectionOutcome> {
        let (goal, weights) = tokio::try_join!(
            self.provider.get_active_goal(user_id),
            self.provider.list_weight_entries(user_id),
        )?;
        project_completion(&weights, &goal, &self.config.analytics.projection)
    }

    /// Ranked candidates for the budget left on `as_of`
    ///
    /// # Errors
    ///
    /// Returns provider errors
    pub async fn rank(&self, user_id: Uuid, as_of: NaiveDate) -> AppResult<RankingReport> {
        let (goal, samples, candidates) = tokio::try_join!(
            self.provider.get_active_goal(user_id),
            self.provider.list_nutrient_samples(user_id, as_of, as_of),
            self.provider.list_food_candidates(),
        )?;
        let budget = remaining_budget(&goal, &samples, as_of);
        Ok(rank_candidates(
            &candidates,
            &budget,
            goal.goal_type,
            &self.config.analytics.recommendation,
        ))
    }
}
