// ABOUTME: Integration tests for the derived metrics calculator
// ABOUTME: Reference scenarios, lookup resolution, weekly rates, and monotonicity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::cast_possible_wrap)]

mod common;

use common::beer_profile;
use dopa_core::models::UserBaselineProfile;
use dopa_intelligence::config::intelligence::LookupTables;
use dopa_intelligence::{compute, DerivedMetricsCalculator, IntelligenceConfig};

fn profile_with(types: &[&str], frequency: &str, budget: f64) -> UserBaselineProfile {
    UserBaselineProfile {
        alcohol_types: types.iter().map(|t| (*t).to_owned()).collect(),
        consumption_frequency: frequency.to_owned(),
        weekly_budget: budget,
        ..beer_profile()
    }
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_one_beer_a_day_after_one_week() {
    let stats = compute(Some(&beer_profile()), 7).unwrap();

    assert_eq!(stats.elapsed_days, 7);
    assert_eq!(stats.total_calories_avoided, 980);
    assert_eq!(stats.weight_lost_kg, 0.13);
    assert_eq!(stats.money_saved, 50);
    assert_eq!(stats.drinks_avoided_total, 7);
}

#[test]
fn test_one_beer_a_day_recovery_after_one_week() {
    let stats = compute(Some(&beer_profile()), 7).unwrap();

    // 7 * 1.5 = 10.5 rounds up
    assert_eq!(stats.cardio_progression, 11);
    // (21 + 0) * 0.5 = 10.5 rounds up
    assert_eq!(stats.sleep_progression, 11);
    assert_eq!(stats.liver_recovery, 2);
    // (2.6 + 11 + 11 + 2) / 4 = 6.65
    assert_eq!(stats.global_regeneration, 7);
}

#[test]
fn test_known_heart_rate_reaches_full_cardio_at_ramp_end() {
    let profile = UserBaselineProfile {
        resting_heart_rate: Some(70),
        ..beer_profile()
    };

    assert_eq!(compute(Some(&profile), 90).unwrap().cardio_progression, 100);
    assert_eq!(compute(Some(&profile), 45).unwrap().cardio_progression, 50);
    assert_eq!(compute(Some(&profile), 365).unwrap().cardio_progression, 100);
}

#[test]
fn test_unknown_heart_rate_uses_fallback_rate_and_clamps() {
    let stats = compute(Some(&beer_profile()), 80).unwrap();
    assert_eq!(stats.cardio_progression, 100);

    let stats = compute(Some(&beer_profile()), 20).unwrap();
    assert_eq!(stats.cardio_progression, 30);
}

#[test]
fn test_perfect_sleep_baseline_never_improves() {
    let profile = UserBaselineProfile {
        baseline_sleep_quality: 5,
        ..beer_profile()
    };

    for days in [0, 1, 7, 17, 30, 67, 365, 10_000] {
        assert_eq!(
            compute(Some(&profile), days).unwrap().sleep_progression,
            0,
            "day {days}"
        );
    }
}

// ============================================================================
// Absent profile and degenerate input
// ============================================================================

#[test]
fn test_absent_profile_yields_no_bundle() {
    assert!(compute(None, 0).is_none());
    assert!(compute(None, 42).is_none());
}

#[test]
fn test_day_zero_is_all_zero_cumulatively() {
    let stats = compute(Some(&beer_profile()), 0).unwrap();

    assert_eq!(stats.total_calories_avoided, 0);
    assert_eq!(stats.weight_lost_kg, 0.0);
    assert_eq!(stats.money_saved, 0);
    assert_eq!(stats.drinks_avoided_total, 0);
    assert_eq!(stats.cardio_progression, 0);
    assert_eq!(stats.sleep_progression, 0);
    assert_eq!(stats.liver_recovery, 0);
    assert_eq!(stats.global_regeneration, 0);
    assert_eq!(stats.calories_avoided_this_week, 0);
    assert_eq!(stats.money_saved_this_week, 0);
    assert_eq!(stats.drinks_avoided_this_week, 0);
}

#[test]
fn test_empty_alcohol_types_contribute_no_calories() {
    let profile = profile_with(&[], "1 verre / jour", 50.0);
    let stats = compute(Some(&profile), 30).unwrap();

    assert_eq!(stats.total_calories_avoided, 0);
    assert_eq!(stats.weight_lost_kg, 0.0);
    // Drinks and money do not depend on the categories
    assert_eq!(stats.drinks_avoided_total, 30);
    assert_eq!(stats.money_saved, 214);
}

#[test]
fn test_unknown_frequency_counts_zero_drinks() {
    let profile = profile_with(&["Bière"], "de temps en temps", 20.0);
    let stats = compute(Some(&profile), 14).unwrap();

    assert_eq!(stats.drinks_avoided_total, 0);
    assert_eq!(stats.total_calories_avoided, 0);
    assert_eq!(stats.money_saved, 40);
}

#[test]
fn test_unknown_category_weighs_in_the_mean_as_zero() {
    let calculator = DerivedMetricsCalculator::with_config(IntelligenceConfig::global());

    let avg = calculator.average_calories_per_drink(&["Bière".to_owned(), "Kombucha".to_owned()]);
    assert_eq!(avg, 70.0);
}

// ============================================================================
// Lookup resolution
// ============================================================================

#[test]
fn test_average_calories_over_selected_categories() {
    let config = IntelligenceConfig::default();
    let calculator = DerivedMetricsCalculator::with_config(&config);

    let all = ["Bière", "Vin", "Champagne", "Spiritueux", "Cocktails"].map(str::to_owned);
    // (140 + 120 + 95 + 105 + 180) / 5
    assert_eq!(calculator.average_calories_per_drink(&all), 128.0);
    assert_eq!(calculator.average_calories_per_drink(&[]), 0.0);
}

#[test]
fn test_frequency_buckets_resolve_to_weekly_drinks() {
    let config = IntelligenceConfig::default();
    let calculator = DerivedMetricsCalculator::with_config(&config);

    let cases = [
        ("1–2 verres / semaine", 1.5),
        ("3–6 verres / semaine", 4.5),
        ("1 verre / jour", 7.0),
        ("2–3 verres / jour", 17.5),
        ("Plus de 3 verres / jour", 28.0),
    ];
    for (frequency, expected) in cases {
        let profile = profile_with(&["Vin"], frequency, 0.0);
        assert_eq!(
            calculator.weekly_consumption(&profile).drinks,
            expected,
            "{frequency}"
        );
    }
}

#[test]
fn test_labels_resolve_with_case_dash_and_english_aliases() {
    let tables = LookupTables::default();

    assert_eq!(tables.calories_for("BIÈRE"), Some(140.0));
    assert_eq!(tables.calories_for("  vin "), Some(120.0));
    assert_eq!(tables.calories_for("cocktails"), Some(180.0));
    assert_eq!(tables.calories_for("beer"), Some(140.0));
    assert_eq!(tables.drinks_per_week_for("2-3 verres / jour"), Some(17.5));
    assert_eq!(tables.drinks_per_week_for("plus de 3 verres / jour"), Some(28.0));
    assert_eq!(tables.drinks_per_week_for(">3/day"), Some(28.0));
    assert_eq!(tables.calories_for("Cidre"), None);
}

#[test]
fn test_extended_lookup_table_feeds_the_calculator() {
    let mut config = IntelligenceConfig::default();
    config.lookup.insert_category("Cidre", 110.0);
    let calculator = DerivedMetricsCalculator::with_config(&config);

    let profile = profile_with(&["Cidre"], "1 verre / jour", 0.0);
    let stats = calculator.compute(Some(&profile), 7).unwrap();
    assert_eq!(stats.total_calories_avoided, 770);
}

#[test]
fn test_heavy_mixed_drinker_after_a_month() {
    let profile = profile_with(&["Bière", "Vin"], "2–3 verres / jour", 120.0);
    let stats = compute(Some(&profile), 30).unwrap();

    // 17.5 drinks * 130 kcal = 2275 kcal per week
    assert_eq!(stats.total_calories_avoided, 9750);
    assert_eq!(stats.weight_lost_kg, 1.27);
    assert_eq!(stats.money_saved, 514);
    assert_eq!(stats.drinks_avoided_total, 75);
    assert_eq!(stats.calories_avoided_per_day, 325);
    assert_eq!(stats.drinks_avoided_per_day, 2.5);
}

// ============================================================================
// Rates
// ============================================================================

#[test]
fn test_daily_rates_do_not_depend_on_elapsed_days() {
    let early = compute(Some(&beer_profile()), 1).unwrap();
    let late = compute(Some(&beer_profile()), 200).unwrap();

    assert_eq!(early.calories_avoided_per_day, 140);
    assert_eq!(early.money_saved_per_day, 7);
    assert_eq!(early.drinks_avoided_per_day, 1.0);
    assert_eq!(early.calories_avoided_per_day, late.calories_avoided_per_day);
    assert_eq!(early.money_saved_per_day, late.money_saved_per_day);
}

#[test]
fn test_this_week_is_capped_at_seven_days() {
    let day3 = compute(Some(&beer_profile()), 3).unwrap();
    assert_eq!(day3.calories_avoided_this_week, 420);
    assert_eq!(day3.money_saved_this_week, 21);
    assert_eq!(day3.drinks_avoided_this_week, 3);

    let day7 = compute(Some(&beer_profile()), 7).unwrap();
    let day100 = compute(Some(&beer_profile()), 100).unwrap();
    assert_eq!(day100.calories_avoided_this_week, day7.calories_avoided_this_week);
    assert_eq!(day100.money_saved_this_week, day7.money_saved_this_week);
    assert_eq!(day100.drinks_avoided_this_week, day7.drinks_avoided_this_week);
}

#[test]
fn test_per_day_times_seven_matches_this_week() {
    let beer = compute(Some(&beer_profile()), 10).unwrap();
    assert!((beer.calories_avoided_per_day as i64 * 7 - beer.calories_avoided_this_week as i64).abs() <= 1);
    assert!((beer.money_saved_per_day as i64 * 7 - beer.money_saved_this_week as i64).abs() <= 1);

    for frequency in ["1–2 verres / semaine", "3–6 verres / semaine", "2–3 verres / jour"] {
        for types in [&["Champagne"][..], &["Spiritueux", "Cocktails"][..]] {
            let profile = profile_with(types, frequency, 37.0);
            let stats = compute(Some(&profile), 8).unwrap();
            let calories_gap = (stats.calories_avoided_per_day as i64 * 7
                - stats.calories_avoided_this_week as i64)
                .abs();
            let money_gap =
                (stats.money_saved_per_day as i64 * 7 - stats.money_saved_this_week as i64).abs();
            assert!(calories_gap <= 4, "{frequency} {types:?}: {calories_gap}");
            assert!(money_gap <= 4, "{frequency} {types:?}: {money_gap}");
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_cumulative_values_never_decrease() {
    let mut profiles = Vec::new();
    for heart_rate in [None, Some(72)] {
        for sleep in 1..=5 {
            profiles.push(UserBaselineProfile {
                baseline_sleep_quality: sleep,
                resting_heart_rate: heart_rate,
                ..profile_with(&["Vin", "Cocktails"], "3–6 verres / semaine", 35.0)
            });
        }
    }

    for profile in &profiles {
        let label = format!(
            "hr={:?} sleep={}",
            profile.resting_heart_rate, profile.baseline_sleep_quality
        );
        let mut previous = compute(Some(profile), 0).unwrap();

        for days in 1..=400 {
            let stats = compute(Some(profile), days).unwrap();
            assert!(stats.total_calories_avoided >= previous.total_calories_avoided, "{label} day {days}");
            assert!(stats.weight_lost_kg >= previous.weight_lost_kg, "{label} day {days}");
            assert!(stats.money_saved >= previous.money_saved, "{label} day {days}");
            assert!(stats.drinks_avoided_total >= previous.drinks_avoided_total, "{label} day {days}");
            assert!(stats.cardio_progression >= previous.cardio_progression, "{label} day {days}");
            assert!(stats.sleep_progression >= previous.sleep_progression, "{label} day {days}");
            assert!(stats.liver_recovery >= previous.liver_recovery, "{label} day {days}");
            assert!(stats.global_regeneration >= previous.global_regeneration, "{label} day {days}");
            assert!(
                stats.calories_avoided_this_week >= previous.calories_avoided_this_week,
                "{label} day {days}"
            );
            assert!(stats.money_saved_this_week >= previous.money_saved_this_week, "{label} day {days}");
            assert!(
                stats.drinks_avoided_this_week >= previous.drinks_avoided_this_week,
                "{label} day {days}"
            );
            previous = stats;
        }
    }
}

#[test]
fn test_first_week_figures_equal_cumulative_totals() {
    for frequency in [
        "1–2 verres / semaine",
        "3–6 verres / semaine",
        "1 verre / jour",
        "2–3 verres / jour",
        "Plus de 3 verres / jour",
    ] {
        let profile = profile_with(&["Bière", "Vin"], frequency, 42.0);
        for days in 0..=7 {
            let stats = compute(Some(&profile), days).unwrap();
            assert_eq!(
                stats.drinks_avoided_this_week, stats.drinks_avoided_total,
                "{frequency} day {days}"
            );
            assert_eq!(
                stats.calories_avoided_this_week, stats.total_calories_avoided,
                "{frequency} day {days}"
            );
            assert_eq!(stats.money_saved_this_week, stats.money_saved, "{frequency} day {days}");
        }
    }
}

#[test]
fn test_zero_heart_rate_uses_the_fallback_cardio_model() {
    let unknown = UserBaselineProfile {
        resting_heart_rate: None,
        ..beer_profile()
    };
    let zero = UserBaselineProfile {
        resting_heart_rate: Some(0),
        ..beer_profile()
    };

    for days in [1, 10, 45, 90] {
        let expected = compute(Some(&unknown), days).unwrap();
        let actual = compute(Some(&zero), days).unwrap();
        assert_eq!(actual.cardio_progression, expected.cardio_progression, "day {days}");
        assert_eq!(actual.global_regeneration, expected.global_regeneration, "day {days}");
    }
}

#[test]
fn test_percentages_stay_within_bounds() {
    let profile = UserBaselineProfile {
        baseline_sleep_quality: 1,
        resting_heart_rate: Some(85),
        ..profile_with(&["Cocktails"], "Plus de 3 verres / jour", 300.0)
    };

    for days in [0, 1, 50, 333, 5_000, u32::MAX] {
        let stats = compute(Some(&profile), days).unwrap();
        for value in [
            stats.cardio_progression,
            stats.sleep_progression,
            stats.liver_recovery,
            stats.global_regeneration,
        ] {
            assert!(value <= 100, "day {days}: {value}");
        }
    }
}

#[test]
fn test_negative_or_nan_budget_never_produces_negative_savings() {
    for budget in [-50.0, f64::NAN] {
        let profile = profile_with(&["Bière"], "1 verre / jour", budget);
        let stats = compute(Some(&profile), 30).unwrap();
        assert_eq!(stats.money_saved, 0);
        assert_eq!(stats.money_saved_per_day, 0);
    }
}

#[test]
fn test_custom_energy_density_changes_weight_only() {
    let mut config = IntelligenceConfig::default();
    config.projection.kcal_per_kg_fat = 3850.0;
    let calculator = DerivedMetricsCalculator::with_config(&config);

    let custom = calculator.compute(Some(&beer_profile()), 7).unwrap();
    let default = compute(Some(&beer_profile()), 7).unwrap();

    assert_eq!(custom.weight_lost_kg, 0.25);
    assert_eq!(custom.total_calories_avoided, default.total_calories_avoided);
}
