// ABOUTME: Configuration error types for statistics engine validation
// ABOUTME: Defines error variants for invalid ranges, bad lookup entries, and env parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! Configuration error types for statistics engine validation.

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., a ramp length of zero days)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Lookup table entry that cannot be used (negative or non-finite)
    #[error("Invalid lookup entry {table}[{key}]: {value}")]
    InvalidLookupEntry {
        /// Table holding the entry
        table: &'static str,
        /// Normalized key
        key: String,
        /// Offending value
        value: f64,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
