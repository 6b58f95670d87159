// ABOUTME: Derived statistics bundle returned by the metrics calculator
// ABOUTME: Cumulative projections, recovery percentages, and per-day / per-week rates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use serde::{Deserialize, Serialize};

/// Projected statistics for one profile at one elapsed-day count
///
/// Recomputed on every call; it has no identity and is never persisted.
/// Every percentage lies in `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedStatsBundle {
    /// Whole days since the start of the streak
    pub elapsed_days: u32,

    /// Total kilocalories not consumed
    pub total_calories_avoided: u64,
    /// Fat-equivalent weight lost, two decimals
    pub weight_lost_kg: f64,
    /// Total money not spent
    pub money_saved: u64,
    /// Total drinks not consumed
    pub drinks_avoided_total: u64,

    /// Cardiovascular progression (0-100)
    pub cardio_progression: u8,
    /// Sleep improvement (0-100)
    pub sleep_progression: u8,
    /// Liver recovery (0-100)
    pub liver_recovery: u8,
    /// Aggregate regeneration score (0-100)
    pub global_regeneration: u8,

    /// Kilocalories avoided per day
    pub calories_avoided_per_day: u64,
    /// Kilocalories avoided over the current week (capped at seven days)
    pub calories_avoided_this_week: u64,
    /// Money saved per day
    pub money_saved_per_day: u64,
    /// Money saved over the current week (capped at seven days)
    pub money_saved_this_week: u64,
    /// Drinks avoided per day, one decimal
    pub drinks_avoided_per_day: f64,
    /// Drinks avoided over the current week
    pub drinks_avoided_this_week: u64,
}
