// ABOUTME: Integration tests for the recovery curves
// ABOUTME: Cardio ramp and fallback, two-phase sleep, liver rate, and the global mean
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use dopa_intelligence::config::intelligence::RecoveryModelConfig;
use dopa_intelligence::RecoveryCalculator;

fn model() -> RecoveryModelConfig {
    RecoveryModelConfig::default()
}

#[test]
fn test_cardio_with_heart_rate_ramps_linearly() {
    let config = model();

    assert_eq!(RecoveryCalculator::cardio_progression(&config, 0, Some(72)), 0);
    assert_eq!(RecoveryCalculator::cardio_progression(&config, 9, Some(72)), 10);
    assert_eq!(RecoveryCalculator::cardio_progression(&config, 30, Some(72)), 33);
    assert_eq!(RecoveryCalculator::cardio_progression(&config, 90, Some(72)), 100);
    assert_eq!(RecoveryCalculator::cardio_progression(&config, 1000, Some(72)), 100);
}

#[test]
fn test_cardio_without_heart_rate_uses_fallback() {
    let config = model();

    assert_eq!(RecoveryCalculator::cardio_progression(&config, 1, None), 2);
    assert_eq!(RecoveryCalculator::cardio_progression(&config, 10, None), 15);
    assert_eq!(RecoveryCalculator::cardio_progression(&config, 66, None), 99);
    assert_eq!(RecoveryCalculator::cardio_progression(&config, 67, None), 100);
}

#[test]
fn test_sleep_fast_phase_then_slow_phase() {
    let config = model();

    // Worst baseline: full improvement potential
    assert_eq!(RecoveryCalculator::sleep_progression(&config, 10, 1), 30);
    assert_eq!(RecoveryCalculator::sleep_progression(&config, 17, 1), 50);
    assert_eq!(RecoveryCalculator::sleep_progression(&config, 40, 1), 73);
    assert_eq!(RecoveryCalculator::sleep_progression(&config, 67, 1), 100);
    assert_eq!(RecoveryCalculator::sleep_progression(&config, 500, 1), 100);
}

#[test]
fn test_sleep_scaled_by_baseline_potential() {
    let config = model();

    assert_eq!(RecoveryCalculator::sleep_progression(&config, 100, 2), 75);
    assert_eq!(RecoveryCalculator::sleep_progression(&config, 100, 3), 50);
    assert_eq!(RecoveryCalculator::sleep_progression(&config, 100, 4), 25);
    assert_eq!(RecoveryCalculator::sleep_progression(&config, 100, 5), 0);
}

#[test]
fn test_sleep_out_of_scale_baseline_is_clamped() {
    let config = model();

    assert_eq!(RecoveryCalculator::sleep_progression(&config, 100, 0), 100);
    assert_eq!(RecoveryCalculator::sleep_progression(&config, 100, 9), 0);
}

#[test]
fn test_liver_recovers_slowly_and_caps() {
    let config = model();

    assert_eq!(RecoveryCalculator::liver_recovery(&config, 0), 0);
    assert_eq!(RecoveryCalculator::liver_recovery(&config, 5), 2);
    assert_eq!(RecoveryCalculator::liver_recovery(&config, 100), 30);
    assert_eq!(RecoveryCalculator::liver_recovery(&config, 334), 100);
    assert_eq!(RecoveryCalculator::liver_recovery(&config, 10_000), 100);
}

#[test]
fn test_global_is_unweighted_mean_of_four_signals() {
    let config = model();

    assert_eq!(RecoveryCalculator::global_regeneration(&config, 0.0, 0, 0, 0), 0);
    assert_eq!(RecoveryCalculator::global_regeneration(&config, 1.0, 40, 60, 20), 35);
    // Weight component saturates at 100 from 5 kg
    assert_eq!(RecoveryCalculator::global_regeneration(&config, 12.0, 100, 100, 100), 100);
    assert_eq!(RecoveryCalculator::global_regeneration(&config, 5.0, 0, 0, 0), 25);
}

#[test]
fn test_scores_bundle_matches_individual_curves() {
    let config = model();
    let scores = RecoveryCalculator::scores(&config, 45, Some(64), 2, 2.4);

    assert_eq!(scores.cardio, RecoveryCalculator::cardio_progression(&config, 45, Some(64)));
    assert_eq!(scores.sleep, RecoveryCalculator::sleep_progression(&config, 45, 2));
    assert_eq!(scores.liver, RecoveryCalculator::liver_recovery(&config, 45));
    assert_eq!(
        scores.global,
        RecoveryCalculator::global_regeneration(&config, 2.4, scores.cardio, scores.sleep, scores.liver)
    );
}
