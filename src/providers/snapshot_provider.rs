// ABOUTME: JSON snapshot file provider for offline nutrition analytics
// ABOUTME: Loads users, logs, goals, and candidates from a single document on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Snapshot File Provider
//!
//! Reads a JSON document of the form:
//!
//! ```json
//! {
//!   "users": [
//!     {
//!       "user_id": "6f1c...",
//!       "goal": { "goal_type": "lose", "start_weight_kg": 80.0, ... },
//!       "weights": [{ "date": "2025-01-01", "weight_kg": 80.0 }],
//!       "nutrient_samples": [{ "date": "2025-01-01", "calories": 1900.0, ... }]
//!     }
//!   ],
//!   "candidates": [{ "id": "greek-yogurt", "name": "Greek yogurt", ... }]
//! }
//! ```
//!
//! The file is read once at load time; the provider then serves from memory.

use super::core::NutritionDataProvider;
use super::in_memory_provider::{InMemoryProvider, UserRecords};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use pierre_core::models::{FoodCandidate, Goal, NutrientSample, WeightEntry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;
use uuid::Uuid;

/// One user's data in a snapshot document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSnapshot {
    /// User identifier
    pub user_id: Uuid,
    /// Active goal, if any
    #[serde(default)]
    pub goal: Option<Goal>,
    /// Weight log
    #[serde(default)]
    pub weights: Vec<WeightEntry>,
    /// Daily nutrient samples
    #[serde(default)]
    pub nutrient_samples: Vec<NutrientSample>,
}

/// Top-level snapshot document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    /// Users in the snapshot
    #[serde(default)]
    pub users: Vec<UserSnapshot>,
    /// Shared food and meal candidates
    #[serde(default)]
    pub candidates: Vec<FoodCandidate>,
}

impl SnapshotDocument {
    /// Parse a snapshot from JSON text
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` when the text is not a valid snapshot document
    pub fn from_json(text: &str) -> AppResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| AppError::serialization(format!("Invalid snapshot document: {e}")))
    }

    /// Serialize the snapshot as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if serialization fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Provider serving a snapshot document loaded from disk
#[derive(Debug, Clone)]
pub struct SnapshotFileProvider {
    path: PathBuf,
    inner: InMemoryProvider,
}

impl SnapshotFileProvider {
    /// Load a snapshot file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file cannot be read and
    /// `SerializationError` when its contents are not a valid snapshot
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).await.map_err(|e| {
            AppError::storage(format!("Cannot read snapshot {}: {e}", path.display()))
                .with_source(e)
        })?;
        let document = SnapshotDocument::from_json(&text)?;
        let provider = Self::from_document(path, document).await;
        Ok(provider)
    }

    /// Build a provider from an already parsed document
    pub async fn from_document(path: PathBuf, document: SnapshotDocument) -> Self {
        let user_count = document.users.len();
        let candidate_count = document.candidates.len();

        let inner = InMemoryProvider::with_candidates(document.candidates);
        for user in document.users {
            inner
                .insert_user(
                    user.user_id,
                    UserRecords {
                        weights: user.weights,
                        samples: user.nutrient_samples,
                        goal: user.goal,
                    },
                )
                .await;
        }

        info!(
            path = %path.display(),
            users = user_count,
            candidates = candidate_count,
            "Loaded nutrition snapshot"
        );
        Self { path, inner }
    }

    /// Path the snapshot was loaded from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl NutritionDataProvider for SnapshotFileProvider {
    fn provider_name(&self) -> &'static str {
        "snapshot_file"
    }

    async fn list_weight_entries(&self, user_id: Uuid) -> AppResult<Vec<WeightEntry>> {
        self.inner.list_weight_entries(user_id).await
    }

    async fn list_nutrient_samples(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<NutrientSample>> {
        self.inner.list_nutrient_samples(user_id, start, end).await
    }

    async fn get_active_goal(&self, user_id: Uuid) -> AppResult<Goal> {
        self.inner.get_active_goal(user_id).await
    }

    async fn list_food_candidates(&self) -> AppResult<Vec<FoodCandidate>> {
        self.inner.list_food_candidates().await
    }
}
