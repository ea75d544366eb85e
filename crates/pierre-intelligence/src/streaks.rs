// ABOUTME: Streak tracker for logging presence and goal adherence runs
// ABOUTME: Computes trailing logging/adherence streaks, best run, and total logged days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Streak Tracker
//!
//! Two distinct streaks are tracked and never conflated:
//!
//! - **Logging streak**: consecutive days on which anything was logged
//! - **Adherence streak**: consecutive days on which intake was on track
//!
//! Both end at the most recent record on or before the reference date. A run
//! whose newest day is older than yesterday has lapsed and reads as zero.

use crate::adherence::{classify, consumption_percentage, AdherenceStatus};
use crate::config::intelligence::AdherenceConfig;
use crate::timeseries::{days_between, retain_finite_samples, Filtered};
use chrono::NaiveDate;
use pierre_core::models::{Goal, NutrientKind, NutrientSample};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// One calendar day's streak inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Calendar day
    pub date: NaiveDate,
    /// An entry exists for this day
    pub logged: bool,
    /// The day's intake met its adherence band
    pub on_track: bool,
}

impl DayRecord {
    /// Create a record
    #[must_use]
    pub const fn new(date: NaiveDate, logged: bool, on_track: bool) -> Self {
        Self {
            date,
            logged,
            on_track,
        }
    }
}

/// Streak metrics as of a reference date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Trailing run of on-track days (adherence streak)
    pub current_streak: u32,
    /// Trailing run of logged days
    pub logging_streak: u32,
    /// Longest on-track run anywhere in the history
    pub best_streak: u32,
    /// Days with at least one entry
    pub total_logged_days: u32,
}

/// Compute streaks from day records as of `as_of`
///
/// Records may arrive in any order. Records after `as_of` are ignored and
/// duplicate dates are merged.
///
/// Both trailing streaks run back from the newest record and must end today or
/// yesterday. When the newest record is older than `as_of - 1`,
/// `current_streak` and `logging_streak` are 0.
/// `best_streak` and `total_logged_days` are unaffected.
#[must_use]
pub fn compute_streaks(records: &[DayRecord], as_of: NaiveDate) -> StreakState {
    let days = merge_by_date(records, as_of);
    if days.is_empty() {
        return StreakState::default();
    }

    let total_logged_days = count_u32(days.values().filter(|r| r.logged).count());
    let best_streak = longest_run(&days, |r| r.on_track);

    let lapsed = days
        .keys()
        .next_back()
        .is_none_or(|newest| days_between(*newest, as_of) > 1);

    let (current_streak, logging_streak) = if lapsed {
        (0, 0)
    } else {
        (
            trailing_run(&days, |r| r.on_track),
            trailing_run(&days, |r| r.logged),
        )
    };

    debug!(
        current_streak,
        logging_streak, best_streak, total_logged_days, "Computed streaks"
    );

    StreakState {
        current_streak,
        logging_streak,
        best_streak,
        total_logged_days,
    }
}

/// Derive day records from nutrient samples
///
/// A day is logged when it has at least one finite sample. It is on track when
/// its calorie total classifies as [`AdherenceStatus::OnTrack`] against the
/// goal's calorie target; without a calorie target no day is on track.
#[must_use]
pub fn build_day_records(
    samples: &[NutrientSample],
    goal: &Goal,
    as_of: NaiveDate,
    config: &AdherenceConfig,
) -> Filtered<DayRecord> {
    let in_range: Vec<NutrientSample> = samples
        .iter()
        .filter(|s| s.date <= as_of)
        .cloned()
        .collect();
    let Filtered { items, dropped } = retain_finite_samples(&in_range);

    let mut calories_by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for sample in &items {
        *calories_by_day.entry(sample.date).or_insert(0.0) += sample.calories;
    }

    let calorie_target = goal.target_for(NutrientKind::Calories);
    let records = calories_by_day
        .into_iter()
        .map(|(date, calories)| {
            let on_track = calorie_target.is_some_and(|target| {
                classify(
                    consumption_percentage(calories, target),
                    goal.goal_type,
                    config,
                ) == AdherenceStatus::OnTrack
            });
            DayRecord::new(date, true, on_track)
        })
        .collect();

    Filtered {
        items: records,
        dropped,
    }
}

fn merge_by_date(records: &[DayRecord], as_of: NaiveDate) -> BTreeMap<NaiveDate, DayRecord> {
    let mut days: BTreeMap<NaiveDate, DayRecord> = BTreeMap::new();
    for record in records.iter().filter(|r| r.date <= as_of) {
        days.entry(record.date)
            .and_modify(|existing| {
                existing.logged |= record.logged;
                existing.on_track |= record.on_track;
            })
            .or_insert(*record);
    }
    days
}

/// Run length ending at the newest day, walking backwards over consecutive days
fn trailing_run(
    days: &BTreeMap<NaiveDate, DayRecord>,
    qualifies: impl Fn(&DayRecord) -> bool,
) -> u32 {
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for record in days.values().rev() {
        if let Some(later) = previous {
            if days_between(record.date, later) != 1 {
                break;
            }
        }
        if !qualifies(record) {
            break;
        }
        run = run.saturating_add(1);
        previous = Some(record.date);
    }
    run
}

/// Longest qualifying run of consecutive days anywhere in the history
fn longest_run(
    days: &BTreeMap<NaiveDate, DayRecord>,
    qualifies: impl Fn(&DayRecord) -> bool,
) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for record in days.values() {
        let contiguous = previous.is_some_and(|earlier| days_between(earlier, record.date) == 1);
        run = match (qualifies(record), contiguous) {
            (false, _) => 0,
            (true, true) => run.saturating_add(1),
            (true, false) => 1,
        };
        best = best.max(run);
        previous = Some(record.date);
    }
    best
}

fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
