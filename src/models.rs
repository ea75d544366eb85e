// ABOUTME: Domain model re-exports from pierre-core
// ABOUTME: Weight entries, nutrient samples, goals, food candidates, and macro budgets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_core::models::*;
