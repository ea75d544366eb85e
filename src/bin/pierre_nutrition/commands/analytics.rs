// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Snapshot-backed analytics commands for pierre-nutrition
// ABOUTME: Loads a snapshot file and prints reports, projections, and rankings

use crate::helpers::output::print_json;
use chrono::NaiveDate;
use pierre_nutrition_analytics::analytics::AnalyticsService;
use pierre_nutrition_analytics::config::ServiceConfig;
use pierre_nutrition_analytics::errors::AppResult;
use pierre_nutrition_analytics::intelligence::RankingReport;
use pierre_nutrition_analytics::providers::SnapshotFileProvider;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

async fn service_for(snapshot: &Path, config: ServiceConfig) -> AppResult<AnalyticsService> {
    let provider = SnapshotFileProvider::load(snapshot)
        .await
        .map_err(|e| e.with_details(json!({ "snapshot": snapshot.display().to_string() })))?;
    Ok(AnalyticsService::new(Arc::new(provider), config))
}

/// Print the full analytics report
pub async fn report(
    snapshot: &Path,
    config: ServiceConfig,
    user_id: Uuid,
    as_of: NaiveDate,
) -> AppResult<()> {
    let service = service_for(snapshot, config).await?;
    let report = service.analyze(user_id, as_of).await?;
    print_json(&report)
}

/// Print the goal-completion projection
pub async fn project(snapshot: &Path, config: ServiceConfig, user_id: Uuid) -> AppResult<()> {
    let service = service_for(snapshot, config).await?;
    let outcome = service.project(user_id).await?;
    if outcome.dropped_samples > 0 {
        info!(
            dropped = outcome.dropped_samples,
            "Ignored non-finite weight entries"
        );
    }
    print_json(&outcome)
}

/// Print the best `top` candidates with exclusion counts
pub async fn rank(
    snapshot: &Path,
    config: ServiceConfig,
    user_id: Uuid,
    as_of: NaiveDate,
    top: usize,
) -> AppResult<()> {
    let service = service_for(snapshot, config).await?;
    let ranking = service.rank(user_id, as_of).await?;
    let trimmed = RankingReport {
        ranked: ranking.top_n(top).to_vec(),
        ..ranking
    };
    print_json(&trimmed)
}
