// ABOUTME: Main library entry point for Pierre nutrition goal analytics
// ABOUTME: Wires the analytics engine to data providers, configuration, logging, and refresh
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Nutrition Analytics
//!
//! Goal-oriented nutrition analytics: adherence, streaks, trends, completion
//! projections, nutrient gaps, and food recommendations for weight goals.
//!
//! The pure analytics engine lives in the `pierre-intelligence` crate and the
//! shared models in `pierre-core`. This crate adds the outer layer:
//!
//! - **Providers**: Async data-source trait plus in-memory and JSON snapshot implementations
//! - **Analytics**: Snapshot-consistent service computing every metric in one pass
//! - **Refresh**: Caller-owned, cancellable periodic refresh
//! - **Config**: Environment-driven runtime settings
//! - **Logging**: Structured `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use pierre_nutrition_analytics::analytics::AnalyticsService;
//! use pierre_nutrition_analytics::config::ServiceConfig;
//! use pierre_nutrition_analytics::errors::AppResult;
//! use pierre_nutrition_analytics::providers::SnapshotFileProvider;
//! use std::sync::Arc;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let provider = SnapshotFileProvider::load("snapshot.json").await?;
//!     let service = AnalyticsService::new(Arc::new(provider), ServiceConfig::from_env()?);
//!
//!     let as_of = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default();
//!     let report = service.analyze(Uuid::nil(), as_of).await?;
//!     println!("Current streak: {}", report.streaks.current_streak);
//!     Ok(())
//! }
//! ```

/// Snapshot analytics service
pub mod analytics;

/// Runtime configuration from environment variables
pub mod config;

/// Unified error handling (re-exported from `pierre-core`)
pub mod errors;

/// Analytics engine (re-exported from `pierre-intelligence`)
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core data models (re-exported from `pierre-core`)
pub mod models;

/// Nutrition data providers
pub mod providers;

/// Periodic analytics refresh
pub mod refresh;
