// ABOUTME: Core data models shared by the statistics engine, the store, and the HTTP layer
// ABOUTME: Profiles, derived statistics, and badge definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! Data models
//!
//! Plain serde types. Computation lives in `dopa-intelligence`.

/// Badge catalog types
pub mod badge;
/// Onboarding profile types
pub mod profile;
/// Derived statistics bundle
pub mod stats;

pub use badge::{usage_key, Badge, BadgeCategory, BadgeReference};
pub use profile::{Sex, UserBaselineProfile, UserData};
pub use stats::DerivedStatsBundle;
