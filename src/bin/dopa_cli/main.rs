// ABOUTME: DOPA CLI - command-line front end to the statistics engine
// ABOUTME: Computes statistics, renders the counter, and lists badges and emergency tasks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors
//!
//! Usage:
//! ```bash
//! # Statistics for a profile after 30 days
//! dopa-cli stats --profile profile.json --days 30
//!
//! # Statistics since a start date
//! dopa-cli stats --profile profile.json --since 2025-01-01T20:00:00Z
//!
//! # Counter since a start date
//! dopa-cli counter --since 2025-01-01T20:00:00Z
//!
//! # Badges of one category unlocked after 30 days
//! dopa-cli badges --category sportifs --days 30
//!
//! # Emergency tasks, personal task first
//! dopa-cli tasks --personal "Appeler Julie"
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use dopa_server::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "dopa-cli",
    about = "DOPA abstinence tracker CLI",
    long_about = "Compute abstinence statistics, render the streak counter, and browse badges from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute the derived statistics bundle
    Stats {
        /// Baseline profile: path to a JSON file, or inline JSON
        #[arg(long)]
        profile: Option<String>,

        #[command(flatten)]
        elapsed: ElapsedArgs,
    },

    /// Render the streak counter
    Counter {
        /// Start of the streak (RFC 3339)
        #[arg(long)]
        since: DateTime<Utc>,
    },

    /// List badges
    Badges {
        /// Only this category (e.g. quotidien, sportifs)
        #[arg(long)]
        category: Option<String>,

        /// Only badges unlocked after this many days
        #[arg(long)]
        days: Option<u32>,
    },

    /// List emergency tasks
    Tasks {
        /// Personal task, shown first
        #[arg(long)]
        personal: Option<String>,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct ElapsedArgs {
    /// Whole days since the start date
    #[arg(long)]
    days: Option<u32>,

    /// Start date (RFC 3339); days are counted up to now
    #[arg(long)]
    since: Option<DateTime<Utc>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    debug!("DOPA CLI started");

    let now = Utc::now();
    match cli.command {
        Command::Stats { profile, elapsed } => {
            commands::stats::run(profile.as_deref(), elapsed.days, elapsed.since, now, cli.json)?;
        }
        Command::Counter { since } => commands::counter::run(since, now, cli.json)?,
        Command::Badges { category, days } => {
            commands::badges::run(category.as_deref(), days, cli.json)?;
        }
        Command::Tasks { personal } => commands::tasks::run(personal.as_deref(), cli.json)?,
    }

    Ok(())
}
