// ABOUTME: The tasks subcommand
// ABOUTME: Lists emergency tasks for a craving, personal task first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use anyhow::Result;
use dopa_intelligence::coping::emergency_tasks;

/// Print emergency tasks
pub fn run(personal: Option<&str>, json: bool) -> Result<()> {
    let tasks = emergency_tasks(personal);

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        for task in &tasks {
            println!("{} {}", task.emoji, task.text);
        }
    }
    Ok(())
}
