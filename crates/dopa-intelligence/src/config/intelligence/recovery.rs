// ABOUTME: Recovery model configuration for cardio, sleep, liver, and global regeneration curves
// ABOUTME: Rates, ceilings, and phase boundaries with defaults taken from the recovery constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! Recovery Model Configuration

use dopa_core::constants::physiology::KCAL_PER_KG_FAT;
use dopa_core::constants::recovery::{
    CARDIO_FALLBACK_RATE_PER_DAY, HR_MAX_REDUCTION_BPM, HR_RAMP_DAYS, LIVER_RATE_PER_DAY,
    SCALE_MAX, SLEEP_FAST_RATE_PER_DAY, SLEEP_PHASE_CAP, SLEEP_SLOW_PHASE_START_DAY,
    SLEEP_SLOW_RATE_PER_DAY, WEIGHT_NORMALIZATION_PER_KG,
};
use serde::{Deserialize, Serialize};

/// Parameters of the recovery progression curves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryModelConfig {
    /// Cardio
    pub cardio: CardioModelConfig,
    /// Sleep
    pub sleep: SleepModelConfig,
    /// Liver points per abstinent day
    pub liver_rate_per_day: f64,
    /// Regeneration points per kilogram lost in the global score
    pub weight_normalization_per_kg: f64,
}

/// Cardiovascular curve parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardioModelConfig {
    /// Points per day when no resting heart rate is known
    pub fallback_rate_per_day: f64,
    /// Largest modelled resting heart rate reduction (bpm)
    pub max_reduction_bpm: f64,
    /// Days to reach the full reduction
    pub ramp_days: f64,
}

/// Two-phase sleep curve parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepModelConfig {
    /// Points per day in the fast phase
    pub fast_rate_per_day: f64,
    /// Ceiling of each phase
    pub phase_cap: f64,
    /// Day at which the slow phase starts accruing
    pub slow_phase_start_day: f64,
    /// Points per day in the slow phase
    pub slow_rate_per_day: f64,
    /// Best score on the self-assessment scale (the worst is 1)
    pub scale_max: f64,
}

/// Cumulative projection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Kilocalories per kilogram of body fat
    pub kcal_per_kg_fat: f64,
}

impl Default for RecoveryModelConfig {
    fn default() -> Self {
        Self {
            cardio: CardioModelConfig::default(),
            sleep: SleepModelConfig::default(),
            liver_rate_per_day: LIVER_RATE_PER_DAY,
            weight_normalization_per_kg: WEIGHT_NORMALIZATION_PER_KG,
        }
    }
}

impl Default for CardioModelConfig {
    fn default() -> Self {
        Self {
            fallback_rate_per_day: CARDIO_FALLBACK_RATE_PER_DAY,
            max_reduction_bpm: HR_MAX_REDUCTION_BPM,
            ramp_days: HR_RAMP_DAYS,
        }
    }
}

impl Default for SleepModelConfig {
    fn default() -> Self {
        Self {
            fast_rate_per_day: SLEEP_FAST_RATE_PER_DAY,
            phase_cap: SLEEP_PHASE_CAP,
            slow_phase_start_day: SLEEP_SLOW_PHASE_START_DAY,
            slow_rate_per_day: SLEEP_SLOW_RATE_PER_DAY,
            scale_max: SCALE_MAX,
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg_fat: KCAL_PER_KG_FAT,
        }
    }
}
