// ABOUTME: Core data models for nutrition goal analytics
// ABOUTME: Re-exports weight, nutrient, goal, and food candidate types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Immutable input snapshots handed to the analytics engine. Callers own
//! storage and mutation; the engine only reads these values.
//!
//! ## Design Principles
//!
//! - **Serializable**: All models support JSON with ISO calendar dates
//! - **Calendar days**: Dates are `NaiveDate`, never timezone-dependent instants
//! - **Deterministic**: Map-valued fields use ordered maps

mod food;
mod goal;
mod nutrition;
mod weight;

pub use food::{CandidateKind, FoodCandidate, MacroBudget};
pub use goal::{Goal, GoalType};
pub use nutrition::{NutrientKind, NutrientSample, NutrientTotals};
pub use weight::WeightEntry;
