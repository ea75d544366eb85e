// ABOUTME: Shared time-series helpers for irregular daily logs
// ABOUTME: Sorting, calendar arithmetic, windowing, averages, and non-finite sample filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are far below f64 mantissa limits

//! Time-series utilities
//!
//! Every engine component goes through these helpers for ordering and
//! aggregation so that all metrics agree on how a series is read. Series may be
//! irregular: missing days are simply absent, never zero-filled.

use chrono::{Days, NaiveDate};
use pierre_core::constants::time::{MONTHLY_WINDOW_DAYS, WEEKLY_WINDOW_DAYS};
use pierre_core::models::{NutrientKind, NutrientSample, NutrientTotals, WeightEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Items that survived non-finite filtering, plus how many were dropped
#[derive(Debug, Clone, PartialEq)]
pub struct Filtered<T> {
    /// Usable items in their original order
    pub items: Vec<T>,
    /// Number of items excluded for non-finite values
    pub dropped: usize,
}

/// Signed calendar-day difference `to - from`
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Shift a date by a signed number of days, saturating at the calendar bounds
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.unwrap_or(if days >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

/// Inclusive date range check
#[must_use]
pub fn within_window(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// Weight entries in chronological order (stable for equal dates)
#[must_use]
pub fn sort_weights(entries: &[WeightEntry]) -> Vec<WeightEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|entry| entry.date);
    sorted
}

/// Drop weight entries whose value is `NaN` or infinite
#[must_use]
pub fn retain_finite_weights(entries: &[WeightEntry]) -> Filtered<WeightEntry> {
    let items: Vec<WeightEntry> = entries.iter().filter(|e| e.is_finite()).copied().collect();
    let dropped = entries.len() - items.len();
    if dropped > 0 {
        debug!(dropped, "Excluded non-finite weight entries");
    }
    Filtered { items, dropped }
}

/// Drop nutrient samples with any `NaN` or infinite value
#[must_use]
pub fn retain_finite_samples(samples: &[NutrientSample]) -> Filtered<NutrientSample> {
    let items: Vec<NutrientSample> = samples.iter().filter(|s| s.is_finite()).cloned().collect();
    let dropped = samples.len() - items.len();
    if dropped > 0 {
        debug!(dropped, "Excluded non-finite nutrient samples");
    }
    Filtered { items, dropped }
}

/// Arithmetic mean, `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Split a series into halves with `floor(n / 2)` points in the first half
#[must_use]
pub fn split_halves(values: &[f64]) -> (&[f64], &[f64]) {
    values.split_at(values.len() / 2)
}

/// Observation window for aggregating daily samples
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ObservationWindow {
    /// The reference day only
    Daily,
    /// The reference day and the six days before it
    #[default]
    Weekly,
    /// The reference day and the 29 days before it
    Monthly,
}

impl ObservationWindow {
    /// Number of calendar days covered
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Daily => 1,
            Self::Weekly => WEEKLY_WINDOW_DAYS,
            Self::Monthly => MONTHLY_WINDOW_DAYS,
        }
    }

    /// First day of the window ending at `as_of` (inclusive)
    #[must_use]
    pub fn start_for(self, as_of: NaiveDate) -> NaiveDate {
        add_days(as_of, -(i64::from(self.days()) - 1))
    }
}

impl fmt::Display for ObservationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        })
    }
}

impl FromStr for ObservationWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            other => Err(format!(
                "unknown window '{other}': expected daily, weekly, or monthly"
            )),
        }
    }
}

/// Nutrient consumption aggregated over a window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowTotals {
    /// Window the totals cover
    pub window: ObservationWindow,
    /// First day of the window
    pub start: NaiveDate,
    /// Last day of the window (the reference date)
    pub end: NaiveDate,
    /// Sum of every finite sample in the window
    pub totals: NutrientTotals,
    /// `totals` divided by the number of distinct logged days
    pub daily_average: NutrientTotals,
    /// Distinct days with at least one finite sample
    pub days_logged: u32,
    /// Samples in the window excluded for non-finite values
    pub dropped_samples: usize,
}

/// Sum and average samples that fall inside `window` ending at `as_of`
#[must_use]
pub fn aggregate_window(
    samples: &[NutrientSample],
    window: ObservationWindow,
    as_of: NaiveDate,
) -> WindowTotals {
    let start = window.start_for(as_of);
    let in_window: Vec<NutrientSample> = samples
        .iter()
        .filter(|s| within_window(s.date, start, as_of))
        .cloned()
        .collect();
    let Filtered { items, dropped } = retain_finite_samples(&in_window);

    let mut totals: NutrientTotals = NutrientKind::ALL.iter().map(|k| (*k, 0.0)).collect();
    for sample in &items {
        for kind in NutrientKind::ALL {
            *totals.entry(kind).or_insert(0.0) += sample.value(kind);
        }
    }

    let days: BTreeSet<NaiveDate> = items.iter().map(|s| s.date).collect();
    let days_logged = u32::try_from(days.len()).unwrap_or(u32::MAX);
    let daily_average = totals
        .iter()
        .map(|(kind, total)| {
            let avg = if days_logged == 0 {
                0.0
            } else {
                total / f64::from(days_logged)
            };
            (*kind, avg)
        })
        .collect();

    WindowTotals {
        window,
        start,
        end: as_of,
        totals,
        daily_average,
        days_logged,
        dropped_samples: dropped,
    }
}
