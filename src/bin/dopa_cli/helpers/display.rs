// ABOUTME: Output formatting helpers for dopa-cli
// ABOUTME: Human-readable rendering of statistics bundles and badge lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use dopa_core::models::{Badge, DerivedStatsBundle};

/// Display a statistics bundle
pub fn display_stats(bundle: &DerivedStatsBundle) {
    println!("\nDay {} without alcohol", bundle.elapsed_days);
    println!("{}", "=".repeat(50));
    println!("Avoided:");
    println!(
        "   Calories: {} kcal ({} / day, {} this week)",
        bundle.total_calories_avoided,
        bundle.calories_avoided_per_day,
        bundle.calories_avoided_this_week
    );
    println!(
        "   Money:    {} EUR ({} / day, {} this week)",
        bundle.money_saved, bundle.money_saved_per_day, bundle.money_saved_this_week
    );
    println!(
        "   Drinks:   {} ({:.1} / day, {} this week)",
        bundle.drinks_avoided_total,
        bundle.drinks_avoided_per_day,
        bundle.drinks_avoided_this_week
    );
    println!("   Weight:   {:.1} kg", bundle.weight_lost_kg);

    println!("\nRecovery:");
    println!("   Cardio: {}%", bundle.cardio_progression);
    println!("   Sleep:  {}%", bundle.sleep_progression);
    println!("   Liver:  {}%", bundle.liver_recovery);
    println!("   Global: {}%", bundle.global_regeneration);
}

/// Display badges grouped by category
pub fn display_badges(badges: &[&Badge]) {
    let mut current = None;
    for badge in badges {
        if current != Some(badge.category) {
            println!("\n{}", badge.category.label());
            current = Some(badge.category);
        }
        match badge.min_days {
            Some(days) => println!("   {} {} ({days}+ days)", badge.emoji, badge.display_label()),
            None => println!("   {} {}", badge.emoji, badge.display_label()),
        }
    }
    println!("\n{} badge(s)", badges.len());
}
