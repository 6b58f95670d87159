// ABOUTME: Configuration module for dopa-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

/// Statistics engine configuration (lookup tables, recovery model)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
