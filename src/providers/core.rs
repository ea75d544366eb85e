// ABOUTME: Core provider trait for fetching nutrition analytics inputs
// ABOUTME: Defines the async contract for weight logs, nutrient samples, goals, and food candidates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Data Provider
//!
//! The analytics engine never fetches data itself. Callers obtain an immutable
//! snapshot through a [`NutritionDataProvider`] and hand it to the engine. Any
//! blocking or network work lives behind this trait.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pierre_nutrition_analytics::providers::{InMemoryProvider, NutritionDataProvider};
//! use uuid::Uuid;
//!
//! # async fn example() -> Result<(), pierre_nutrition_analytics::errors::AppError> {
//! let provider = InMemoryProvider::new();
//! let weights = provider.list_weight_entries(Uuid::new_v4()).await?;
//! # Ok(())
//! # }
//! ```

use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use pierre_core::models::{FoodCandidate, Goal, NutrientSample, WeightEntry};
use uuid::Uuid;

/// Source of raw logs, goals, and food candidates
///
/// Implementations return data in any order; the engine sorts internally.
#[async_trait]
pub trait NutritionDataProvider: Send + Sync {
    /// Provider name for logging
    fn provider_name(&self) -> &'static str;

    /// All weight entries for a user
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user, or a provider-specific error
    async fn list_weight_entries(&self, user_id: Uuid) -> AppResult<Vec<WeightEntry>>;

    /// Nutrient samples for a user dated within `start..=end`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user, or a provider-specific error
    async fn list_nutrient_samples(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<NutrientSample>>;

    /// The user's active goal
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user is unknown or has no active goal
    async fn get_active_goal(&self, user_id: Uuid) -> AppResult<Goal>;

    /// Food and meal candidates available for recommendation
    ///
    /// # Errors
    ///
    /// Returns a provider-specific error when candidates cannot be loaded
    async fn list_food_candidates(&self) -> AppResult<Vec<FoodCandidate>>;
}
