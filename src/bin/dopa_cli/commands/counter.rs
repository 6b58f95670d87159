// ABOUTME: The counter subcommand
// ABOUTME: Prints the time elapsed since the start of the streak
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use anyhow::Result;
use chrono::{DateTime, Utc};
use dopa_intelligence::tracking::{elapsed_days, CounterBreakdown};
use serde_json::json;

/// Print the counter
pub fn run(since: DateTime<Utc>, now: DateTime<Utc>, json: bool) -> Result<()> {
    let counter = CounterBreakdown::between(since, now);

    if json {
        let body = json!({
            "elapsed_days": elapsed_days(since, now),
            "counter": counter,
            "display": counter.render(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", counter.render());
    }
    Ok(())
}
