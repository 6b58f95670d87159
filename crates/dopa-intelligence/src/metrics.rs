// ABOUTME: Derived metrics calculator turning a baseline profile and elapsed days into statistics
// ABOUTME: Cumulative projections, per-day and per-week rates, and recovery percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors
//! Derived statistics calculation
//!
//! The calculator is a pure function of `(profile, elapsed_days)` plus an
//! immutable configuration. It never fails: an absent profile yields `None`,
//! unknown labels contribute zero.

use crate::config::intelligence::IntelligenceConfig;
use crate::recovery::RecoveryCalculator;
use dopa_core::constants::time::{DAYS_PER_WEEK, DAYS_PER_WEEK_U32};
use dopa_core::models::{DerivedStatsBundle, UserBaselineProfile};
use tracing::debug;

/// Per-week consumption figures the projections are scaled from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyConsumption {
    /// Average kilocalories per drink over the selected categories
    pub avg_calories_per_drink: f64,
    /// Drinks per week for the consumption bucket
    pub drinks: f64,
    /// Kilocalories per week
    pub calories: f64,
    /// Money per week
    pub budget: f64,
}

/// Derived metrics calculator bound to a configuration
pub struct DerivedMetricsCalculator<'a> {
    config: &'a IntelligenceConfig,
}

impl Default for DerivedMetricsCalculator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl DerivedMetricsCalculator<'static> {
    /// Create a calculator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global(),
        }
    }
}

impl<'a> DerivedMetricsCalculator<'a> {
    /// Create a calculator using an explicit configuration
    #[must_use]
    pub const fn with_config(config: &'a IntelligenceConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &'a IntelligenceConfig {
        self.config
    }

    /// Compute the statistics bundle for a profile after `elapsed_days`
    ///
    /// Returns `None` when no profile is available.
    #[must_use]
    pub fn compute(
        &self,
        profile: Option<&UserBaselineProfile>,
        elapsed_days: u32,
    ) -> Option<DerivedStatsBundle> {
        let Some(profile) = profile else {
            debug!(elapsed_days, "No baseline profile, skipping derived metrics");
            return None;
        };

        let weekly = self.weekly_consumption(profile);
        let d = f64::from(elapsed_days);
        let week_fraction = d / DAYS_PER_WEEK;

        let total_calories_avoided = round_count(weekly.calories * week_fraction);
        let weight_lost_kg =
            round_to(total_calories_avoided as f64 / self.config.projection.kcal_per_kg_fat, 2);
        let money_saved = round_count(weekly.budget * week_fraction);
        let drinks_avoided_total = round_count(weekly.drinks * week_fraction);

        let recovery = RecoveryCalculator::scores(
            &self.config.recovery,
            elapsed_days,
            profile.resting_heart_rate,
            profile.baseline_sleep_quality,
            weight_lost_kg,
        );

        let this_week_fraction = f64::from(elapsed_days.min(DAYS_PER_WEEK_U32)) / DAYS_PER_WEEK;
        let drinks_avoided_per_day = round_to(weekly.drinks / DAYS_PER_WEEK, 1);
        let drinks_avoided_this_week = round_count(weekly.drinks * this_week_fraction);

        Some(DerivedStatsBundle {
            elapsed_days,
            total_calories_avoided,
            weight_lost_kg,
            money_saved,
            drinks_avoided_total,
            cardio_progression: recovery.cardio,
            sleep_progression: recovery.sleep,
            liver_recovery: recovery.liver,
            global_regeneration: recovery.global,
            calories_avoided_per_day: round_count(weekly.calories / DAYS_PER_WEEK),
            calories_avoided_this_week: round_count(weekly.calories * this_week_fraction),
            money_saved_per_day: round_count(weekly.budget / DAYS_PER_WEEK),
            money_saved_this_week: round_count(weekly.budget * this_week_fraction),
            drinks_avoided_per_day,
            drinks_avoided_this_week,
        })
    }

    /// Resolve the profile's labels into weekly consumption figures
    #[must_use]
    pub fn weekly_consumption(&self, profile: &UserBaselineProfile) -> WeeklyConsumption {
        let avg_calories_per_drink = self.average_calories_per_drink(&profile.alcohol_types);

        let drinks = self
            .config
            .lookup
            .drinks_per_week_for(&profile.consumption_frequency)
            .unwrap_or_else(|| {
                debug!(
                    frequency = %profile.consumption_frequency,
                    "Unknown consumption frequency, counting zero drinks per week"
                );
                0.0
            });

        WeeklyConsumption {
            avg_calories_per_drink,
            drinks,
            calories: drinks * avg_calories_per_drink,
            budget: profile.weekly_budget,
        }
    }

    /// Mean kilocalories per drink over the selected categories
    ///
    /// Unknown categories count as zero but still weigh in the mean.
    #[must_use]
    pub fn average_calories_per_drink(&self, alcohol_types: &[String]) -> f64 {
        if alcohol_types.is_empty() {
            debug!("No alcohol type selected, average calories per drink is zero");
            return 0.0;
        }

        let total: f64 = alcohol_types
            .iter()
            .map(|category| {
                self.config.lookup.calories_for(category).unwrap_or_else(|| {
                    debug!(%category, "Unknown alcohol type, counting zero calories");
                    0.0
                })
            })
            .sum();

        total / alcohol_types.len() as f64
    }
}

/// Compute the statistics bundle with the global configuration
///
/// # Examples
///
/// ```rust
/// use dopa_core::models::UserBaselineProfile;
/// use dopa_intelligence::compute;
///
/// let profile = UserBaselineProfile {
///     alcohol_types: vec!["Bière".into()],
///     consumption_frequency: "1 verre / jour".into(),
///     weekly_budget: 50.0,
///     baseline_sleep_quality: 3,
///     baseline_energy: 3,
///     baseline_stress: 3,
///     resting_heart_rate: None,
///     days_target: 90,
/// };
///
/// let stats = compute(Some(&profile), 7).unwrap();
/// assert_eq!(stats.total_calories_avoided, 980);
/// assert!(compute(None, 7).is_none());
/// ```
#[must_use]
pub fn compute(
    profile: Option<&UserBaselineProfile>,
    elapsed_days: u32,
) -> Option<DerivedStatsBundle> {
    DerivedMetricsCalculator::new().compute(profile, elapsed_days)
}

/// Round half away from zero to a non-negative whole count
// Safe: negative and NaN inputs saturate to 0 in the float-to-int cast
fn round_count(value: f64) -> u64 {
    value.round().max(0.0) as u64
}

/// Round half away from zero to `decimals` places
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded.max(0.0)
    } else {
        0.0
    }
}
