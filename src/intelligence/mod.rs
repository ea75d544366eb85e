// ABOUTME: Intelligence module re-exports from pierre-intelligence crate
// ABOUTME: Gives service and CLI code one path to the analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Re-exports the nutrition goal analytics engine from `pierre-intelligence`.

pub use pierre_intelligence::*;

pub use pierre_intelligence::{
    adherence, config, gaps, projection, recommendation, streaks, timeseries, trend,
};
