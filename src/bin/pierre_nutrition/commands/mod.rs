// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for pierre-nutrition
// ABOUTME: Provides snapshot analytics and adherence classification commands

pub mod analytics;
pub mod classify;
