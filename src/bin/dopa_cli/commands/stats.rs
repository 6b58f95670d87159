// ABOUTME: The stats subcommand
// ABOUTME: Loads a baseline profile and prints the derived statistics bundle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use crate::helpers::display;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use dopa_core::models::UserBaselineProfile;
use dopa_intelligence::tracking::elapsed_days;
use dopa_intelligence::DerivedMetricsCalculator;
use std::fs;
use tracing::info;

/// Compute and print statistics
pub fn run(
    profile: Option<&str>,
    days: Option<u32>,
    since: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    let profile = profile.map(load_profile).transpose()?;
    let days = match (days, since) {
        (Some(days), _) => days,
        (None, Some(start)) => elapsed_days(start, now),
        (None, None) => 0,
    };

    let bundle = DerivedMetricsCalculator::new().compute(profile.as_ref(), days);
    info!(elapsed_days = days, has_profile = profile.is_some(), "Computed statistics");

    match bundle {
        Some(bundle) if json => println!("{}", serde_json::to_string_pretty(&bundle)?),
        Some(bundle) => display::display_stats(&bundle),
        None => println!("{}", missing_profile_output(json)),
    }
    Ok(())
}

/// Output when no profile was given: `null` for scripts, a hint for people
fn missing_profile_output(json: bool) -> &'static str {
    if json {
        "null"
    } else {
        "No profile given: complete onboarding to see statistics."
    }
}

fn load_profile(source: &str) -> Result<UserBaselineProfile> {
    let text = if source.trim_start().starts_with('{') {
        source.to_owned()
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read profile {source}"))?
    };
    serde_json::from_str(&text).context("Profile is not a valid baseline profile")
}
