// ABOUTME: Statistics engine for the DOPA abstinence tracker
// ABOUTME: Derived metrics, recovery curves, tracking helpers, badges, coping tasks, onboarding rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

#![deny(unsafe_code)]

//! # DOPA Intelligence
//!
//! Pure, synchronous computation over the models defined in `dopa-core`.
//! Nothing in this crate performs I/O; the server and the CLI feed it a
//! profile and a clock reading and render what comes back.
//!
//! ## Modules
//!
//! - **metrics**: `DerivedMetricsCalculator` turning a baseline profile and elapsed days into a `DerivedStatsBundle`
//! - **recovery**: cardio, sleep, liver, and global regeneration curves
//! - **config**: lookup tables and model parameters with environment overrides
//! - **tracking**: elapsed days, counter breakdown, goal progress
//! - **badges**: static badge catalog, share messages, collection progress
//! - **coping**: emergency task suggestions
//! - **onboarding**: validation of the onboarding record

/// Model configuration (lookup tables, recovery parameters)
pub mod config;

/// Derived statistics calculator
pub mod metrics;

/// Recovery progression curves
pub mod recovery;

/// Streak arithmetic: elapsed days, counter breakdown, goal progress
pub mod tracking;

/// Badge catalog and collection progress
pub mod badges;

/// Emergency coping tasks
pub mod coping;

/// Onboarding record validation
pub mod onboarding;

pub use config::IntelligenceConfig;
pub use metrics::{compute, DerivedMetricsCalculator};
pub use recovery::RecoveryCalculator;
