// ABOUTME: Recovery progression curves for cardio, sleep, liver, and global regeneration
// ABOUTME: Each curve maps elapsed abstinent days to a percentage clamped to 0..=100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! Recovery curves
//!
//! Every curve is monotonically non-decreasing in elapsed days and saturates
//! at 100. Inputs are whole days; intermediate math is `f64` and results are
//! rounded half away from zero.

use crate::config::intelligence::RecoveryModelConfig;
use dopa_core::constants::recovery::PERCENT_MAX;
use tracing::debug;

/// Percentages produced by the four recovery curves for one day count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryScores {
    /// Cardiovascular progression
    pub cardio: u8,
    /// Sleep improvement
    pub sleep: u8,
    /// Liver recovery
    pub liver: u8,
    /// Aggregate regeneration
    pub global: u8,
}

/// Stateless evaluator for the recovery curves
pub struct RecoveryCalculator;

impl RecoveryCalculator {
    /// Evaluate every curve for one profile
    #[must_use]
    pub fn scores(
        config: &RecoveryModelConfig,
        days: u32,
        resting_heart_rate: Option<u32>,
        baseline_sleep_quality: u8,
        weight_lost_kg: f64,
    ) -> RecoveryScores {
        let cardio = Self::cardio_progression(config, days, resting_heart_rate);
        let sleep = Self::sleep_progression(config, days, baseline_sleep_quality);
        let liver = Self::liver_recovery(config, days);
        let global = Self::global_regeneration(config, weight_lost_kg, cardio, sleep, liver);

        RecoveryScores {
            cardio,
            sleep,
            liver,
            global,
        }
    }

    /// Cardiovascular progression
    ///
    /// With a known resting heart rate the model assumes a linear reduction
    /// reaching its ceiling after the ramp period. Without one it falls back to
    /// a fixed number of points per day. A rate of zero counts as unknown.
    #[must_use]
    pub fn cardio_progression(
        config: &RecoveryModelConfig,
        days: u32,
        resting_heart_rate: Option<u32>,
    ) -> u8 {
        let d = f64::from(days);
        let cardio = &config.cardio;

        let raw = if resting_heart_rate.is_some_and(|bpm| bpm > 0) {
            let reduction = cardio
                .max_reduction_bpm
                .min(d / cardio.ramp_days * cardio.max_reduction_bpm);
            reduction / cardio.max_reduction_bpm * PERCENT_MAX
        } else {
            PERCENT_MAX.min(d * cardio.fallback_rate_per_day)
        };

        to_percent(raw)
    }

    /// Sleep improvement
    ///
    /// Two phases (fast from day 0, slow from the configured start day), each
    /// capped, weighted by how much room the baseline leaves for improvement.
    #[must_use]
    pub fn sleep_progression(config: &RecoveryModelConfig, days: u32, baseline: u8) -> u8 {
        let d = f64::from(days);
        let sleep = &config.sleep;

        let potential = ((sleep.scale_max - f64::from(baseline)) / (sleep.scale_max - 1.0))
            .clamp(0.0, 1.0);
        let fast = sleep.phase_cap.min(d * sleep.fast_rate_per_day);
        let slow = sleep
            .phase_cap
            .min((d - sleep.slow_phase_start_day) * sleep.slow_rate_per_day)
            .max(0.0);

        to_percent((fast + slow) * potential)
    }

    /// Liver recovery
    #[must_use]
    pub fn liver_recovery(config: &RecoveryModelConfig, days: u32) -> u8 {
        to_percent(PERCENT_MAX.min((f64::from(days) * config.liver_rate_per_day).round()))
    }

    /// Aggregate regeneration: mean of the normalized weight loss and the three
    /// already-rounded curve values
    #[must_use]
    pub fn global_regeneration(
        config: &RecoveryModelConfig,
        weight_lost_kg: f64,
        cardio: u8,
        sleep: u8,
        liver: u8,
    ) -> u8 {
        let weight_component =
            PERCENT_MAX.min(weight_lost_kg * config.weight_normalization_per_kg);
        let sum = weight_component + f64::from(cardio) + f64::from(sleep) + f64::from(liver);
        let global = to_percent(sum / 4.0);

        debug!(
            weight_component,
            cardio, sleep, liver, global, "Computed global regeneration"
        );

        global
    }
}

/// Round half away from zero and clamp into `0..=100`
// Safe: value clamped to 0..=100 before the cast
fn to_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, PERCENT_MAX) as u8
}
