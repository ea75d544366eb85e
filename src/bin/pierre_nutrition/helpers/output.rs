// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for pierre-nutrition
// ABOUTME: Writes command results to stdout and failures to stderr as pretty JSON

use pierre_nutrition_analytics::errors::{AppError, AppResult, ErrorResponse};
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::serialization(format!("Failed to encode output: {e}")))?;
    println!("{text}");
    Ok(())
}

/// Print a command failure as an error document on stderr
pub fn print_error(error: AppError) {
    let fallback = error.to_string();
    match serde_json::to_string_pretty(&ErrorResponse::from(error)) {
        Ok(text) => eprintln!("{text}"),
        Err(_) => eprintln!("{fallback}"),
    }
}
