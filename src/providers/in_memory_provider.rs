// ABOUTME: In-memory nutrition data provider for development, demos, and tests
// ABOUTME: Stores per-user logs and goals behind async RwLocks with injection helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # In-Memory Provider
//!
//! Holds weight logs, nutrient samples, and goals per user plus a shared list of
//! food candidates. Data can be injected at any time, which makes the provider
//! suitable for tests that simulate new logs arriving between refresh ticks.
//!
//! ## Thread Safety
//!
//! All data access goes through `tokio::sync::RwLock`, so concurrent reads from
//! several analysis tasks never block each other.

use super::core::NutritionDataProvider;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use pierre_core::models::{FoodCandidate, Goal, NutrientSample, WeightEntry};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Logs and goal for a single user
#[derive(Debug, Clone, Default)]
pub struct UserRecords {
    /// Weight log
    pub weights: Vec<WeightEntry>,
    /// Daily nutrient samples
    pub samples: Vec<NutrientSample>,
    /// Active goal, if any
    pub goal: Option<Goal>,
}

/// Lock-guarded in-memory provider
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    users: Arc<RwLock<HashMap<Uuid, UserRecords>>>,
    candidates: Arc<RwLock<Vec<FoodCandidate>>>,
}

impl InMemoryProvider {
    /// Create an empty provider
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with a fixed candidate list
    #[must_use]
    pub fn with_candidates(candidates: Vec<FoodCandidate>) -> Self {
        Self {
            users: Arc::default(),
            candidates: Arc::new(RwLock::new(candidates)),
        }
    }

    /// Replace everything known about a user
    pub async fn insert_user(&self, user_id: Uuid, records: UserRecords) {
        self.users.write().await.insert(user_id, records);
    }

    /// Set or replace the user's active goal
    pub async fn set_goal(&self, user_id: Uuid, goal: Goal) {
        self.users.write().await.entry(user_id).or_default().goal = Some(goal);
    }

    /// Append weight entries for a user
    pub async fn add_weight_entries(
        &self,
        user_id: Uuid,
        entries: impl IntoIterator<Item = WeightEntry> + Send,
    ) {
        self.users
            .write()
            .await
            .entry(user_id)
            .or_default()
            .weights
            .extend(entries);
    }

    /// Append nutrient samples for a user
    pub async fn add_nutrient_samples(
        &self,
        user_id: Uuid,
        samples: impl IntoIterator<Item = NutrientSample> + Send,
    ) {
        self.users
            .write()
            .await
            .entry(user_id)
            .or_default()
            .samples
            .extend(samples);
    }

    /// Replace the candidate list
    pub async fn set_candidates(&self, candidates: Vec<FoodCandidate>) {
        *self.candidates.write().await = candidates;
    }

    async fn with_user<T: Send>(
        &self,
        user_id: Uuid,
        read: impl FnOnce(&UserRecords) -> T + Send,
    ) -> AppResult<T> {
        let users = self.users.read().await;
        users
            .get(&user_id)
            .map(read)
            .ok_or_else(|| AppError::not_found(format!("User {user_id}")).with_user_id(user_id))
    }
}

#[async_trait]
impl NutritionDataProvider for InMemoryProvider {
    fn provider_name(&self) -> &'static str {
        "in_memory"
    }

    async fn list_weight_entries(&self, user_id: Uuid) -> AppResult<Vec<WeightEntry>> {
        self.with_user(user_id, |records| records.weights.clone()).await
    }

    async fn list_nutrient_samples(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<NutrientSample>> {
        let samples = self
            .with_user(user_id, |records| {
                records
                    .samples
                    .iter()
                    .filter(|s| start <= s.date && s.date <= end)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .await?;
        debug!(%user_id, count = samples.len(), %start, %end, "Listed nutrient samples");
        Ok(samples)
    }

    async fn get_active_goal(&self, user_id: Uuid) -> AppResult<Goal> {
        self.with_user(user_id, |records| records.goal.clone())
            .await?
            .ok_or_else(|| AppError::not_found("Active goal").with_user_id(user_id))
    }

    async fn list_food_candidates(&self) -> AppResult<Vec<FoodCandidate>> {
        Ok(self.candidates.read().await.clone())
    }
}
