// ABOUTME: Pierre nutrition CLI - run goal analytics against a JSON snapshot
// ABOUTME: Prints reports, projections, rankings, and adherence classifications as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full analytics report for one user
//! pierre-nutrition report --snapshot data.json --user 6f1c... --as-of 2025-03-01
//!
//! # Monthly gap window and top 3 recommendations
//! pierre-nutrition report --snapshot data.json --user 6f1c... --as-of 2025-03-01 \
//!     --window monthly --top 3
//!
//! # Classify a consumption percentage
//! pierre-nutrition classify --percentage 92 --goal lose
//!
//! # Goal-completion projection
//! pierre-nutrition project --snapshot data.json --user 6f1c...
//!
//! # Rank food candidates for the remaining budget
//! pierre-nutrition rank --snapshot data.json --user 6f1c... --as-of 2025-03-01 --top 5
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use helpers::output::print_error;
use pierre_nutrition_analytics::config::ServiceConfig;
use pierre_nutrition_analytics::intelligence::ObservationWindow;
use pierre_nutrition_analytics::logging::LoggingConfig;
use pierre_nutrition_analytics::models::GoalType;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "pierre-nutrition",
    about = "Pierre Nutrition Goal Analytics CLI",
    long_about = "Computes adherence, streaks, trends, projections, nutrient gaps, and food recommendations from a JSON snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Full analytics report for a user
    Report {
        /// Snapshot document path
        #[arg(long)]
        snapshot: PathBuf,

        /// User identifier
        #[arg(long)]
        user: Uuid,

        /// Reference date (YYYY-MM-DD)
        #[arg(long)]
        as_of: NaiveDate,

        /// Gap analysis window: daily, weekly, or monthly
        #[arg(long)]
        window: Option<ObservationWindow>,

        /// Number of recommendations to include
        #[arg(long)]
        top: Option<usize>,
    },

    /// Classify a consumption percentage for a goal
    Classify {
        /// Percentage of target consumed
        #[arg(long)]
        percentage: f64,

        /// Goal type: lose, maintain, or gain
        #[arg(long)]
        goal: GoalType,
    },

    /// Goal-completion projection for a user
    Project {
        /// Snapshot document path
        #[arg(long)]
        snapshot: PathBuf,

        /// User identifier
        #[arg(long)]
        user: Uuid,
    },

    /// Rank food candidates against the remaining budget
    Rank {
        /// Snapshot document path
        #[arg(long)]
        snapshot: PathBuf,

        /// User identifier
        #[arg(long)]
        user: Uuid,

        /// Reference date (YYYY-MM-DD)
        #[arg(long)]
        as_of: NaiveDate,

        /// Number of candidates to print
        #[arg(long)]
        top: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    info!("Pierre Nutrition Analytics CLI");

    let mut config = ServiceConfig::from_env()?;

    let outcome = match cli.command {
        Command::Report {
            snapshot,
            user,
            as_of,
            window,
            top,
        } => {
            if let Some(window) = window {
                config.gap_window = window;
            }
            if let Some(top) = top {
                config.analytics.recommendation.limits.max_candidates = top;
            }
            commands::analytics::report(&snapshot, config, user, as_of).await
        }
        Command::Classify { percentage, goal } => {
            commands::classify::classify(percentage, goal, &config)
        }
        Command::Project { snapshot, user } => {
            commands::analytics::project(&snapshot, config, user).await
        }
        Command::Rank {
            snapshot,
            user,
            as_of,
            top,
        } => {
            let top = top.unwrap_or_else(|| config.recommendation_limit());
            commands::analytics::rank(&snapshot, config, user, as_of, top).await
        }
    };

    if let Err(e) = outcome {
        error!(code = ?e.code, "Command failed");
        print_error(e);
        process::exit(1);
    }

    Ok(())
}
