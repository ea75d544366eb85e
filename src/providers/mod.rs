// ABOUTME: Data provider module for nutrition analytics inputs
// ABOUTME: Exposes the provider trait plus in-memory and JSON snapshot implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Provider trait shared by every data source
pub mod core;

/// Lock-guarded in-memory provider for tests and demos
pub mod in_memory_provider;

/// Provider backed by a JSON snapshot file
pub mod snapshot_provider;

pub use self::core::NutritionDataProvider;
pub use in_memory_provider::{InMemoryProvider, UserRecords};
pub use snapshot_provider::{SnapshotDocument, SnapshotFileProvider, UserSnapshot};
