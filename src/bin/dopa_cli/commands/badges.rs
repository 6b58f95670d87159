// ABOUTME: The badges subcommand
// ABOUTME: Lists catalog badges, optionally filtered by category and unlock day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use crate::helpers::display;
use anyhow::{anyhow, Result};
use dopa_core::models::{Badge, BadgeCategory};
use dopa_intelligence::badges::catalog;

/// Print matching badges
pub fn run(category: Option<&str>, days: Option<u32>, json: bool) -> Result<()> {
    let category = category
        .map(str::parse::<BadgeCategory>)
        .transpose()
        .map_err(|e| anyhow!(e))?;

    let badges: Vec<&Badge> = catalog()
        .iter()
        .filter(|badge| category.is_none_or(|c| badge.category == c))
        .filter(|badge| days.is_none_or(|d| badge.is_unlocked_at(d)))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&badges)?);
    } else {
        display::display_badges(&badges);
    }
    Ok(())
}
