// ABOUTME: Command modules for dopa-cli
// ABOUTME: One module per subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

pub mod badges;
pub mod counter;
pub mod stats;
pub mod tasks;
