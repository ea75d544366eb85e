// ABOUTME: Error handling re-exports from pierre-core
// ABOUTME: Keeps crate::errors paths stable for providers, service, and CLI code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! `AppError`, `ErrorCode`, and `AppResult` live in `pierre-core` so the engine
//! and the outer layers share one error vocabulary.

pub use pierre_core::errors::*;
