// ABOUTME: Body weight log entry model
// ABOUTME: One weight measurement per calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single body weight measurement
///
/// Unique per user and date in practice; the engine assumes the caller has
/// de-duplicated and accepts entries in any order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Calendar day of the measurement
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
}

impl WeightEntry {
    /// Create a weight entry
    #[must_use]
    pub const fn new(date: NaiveDate, weight_kg: f64) -> Self {
        Self { date, weight_kg }
    }

    /// Whether the weight value is usable for aggregation
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.weight_kg.is_finite()
    }
}
