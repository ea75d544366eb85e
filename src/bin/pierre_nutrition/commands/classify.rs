// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Adherence classification command for pierre-nutrition
// ABOUTME: Maps a consumption percentage and goal type to an adherence status

use crate::helpers::output::print_json;
use pierre_nutrition_analytics::config::ServiceConfig;
use pierre_nutrition_analytics::errors::AppResult;
use pierre_nutrition_analytics::intelligence::{
    classify as classify_percentage, AdherenceDirection,
};
use pierre_nutrition_analytics::models::GoalType;
use serde_json::json;

/// Print the adherence status for `percentage` under `goal_type`
pub fn classify(percentage: f64, goal_type: GoalType, config: &ServiceConfig) -> AppResult<()> {
    let status = classify_percentage(percentage, goal_type, &config.analytics.adherence);
    print_json(&json!({
        "percentage": percentage,
        "goal_type": goal_type,
        "direction": AdherenceDirection::for_goal(goal_type),
        "status": status,
    }))
}
