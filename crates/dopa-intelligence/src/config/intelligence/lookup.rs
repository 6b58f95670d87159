// ABOUTME: Lookup tables mapping onboarding labels to calories per drink and drinks per week
// ABOUTME: Keys are normalized so accents, case, dash style, and English aliases resolve alike
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! Lookup Tables
//!
//! The two tables behind the cumulative projections. They are plain data so a
//! deployment can extend them (new categories, regional calorie values) without
//! touching the calculator.

use dopa_core::constants::alcohol::{
    CALORIES_PER_DRINK, CATEGORY_ALIASES, DRINKS_PER_WEEK, FREQUENCY_ALIASES,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label-keyed tables used by the derived metrics calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupTables {
    /// Average kilocalories per serving, keyed by normalized category label
    pub calories_per_drink: HashMap<String, f64>,
    /// Average drinks per week, keyed by normalized frequency bucket label
    pub drinks_per_week: HashMap<String, f64>,
}

impl LookupTables {
    /// Kilocalories per serving for a category label, if known
    #[must_use]
    pub fn calories_for(&self, category: &str) -> Option<f64> {
        self.calories_per_drink
            .get(&normalize_label(category))
            .copied()
    }

    /// Drinks per week for a frequency bucket label, if known
    #[must_use]
    pub fn drinks_per_week_for(&self, frequency: &str) -> Option<f64> {
        self.drinks_per_week.get(&normalize_label(frequency)).copied()
    }

    /// Add or replace a category entry
    pub fn insert_category(&mut self, label: &str, kcal_per_drink: f64) {
        self.calories_per_drink
            .insert(normalize_label(label), kcal_per_drink);
    }

    /// Add or replace a frequency bucket entry
    pub fn insert_frequency(&mut self, label: &str, drinks_per_week: f64) {
        self.drinks_per_week
            .insert(normalize_label(label), drinks_per_week);
    }
}

impl Default for LookupTables {
    fn default() -> Self {
        let mut tables = Self {
            calories_per_drink: HashMap::new(),
            drinks_per_week: HashMap::new(),
        };

        for (label, kcal) in CALORIES_PER_DRINK {
            tables.insert_category(label, *kcal);
        }
        for (alias, label) in CATEGORY_ALIASES {
            if let Some(kcal) = tables.calories_for(label) {
                tables.insert_category(alias, kcal);
            }
        }

        for (label, drinks) in DRINKS_PER_WEEK {
            tables.insert_frequency(label, *drinks);
        }
        for (alias, label) in FREQUENCY_ALIASES {
            if let Some(drinks) = tables.drinks_per_week_for(label) {
                tables.insert_frequency(alias, drinks);
            }
        }

        tables
    }
}

/// Canonical form of a label: trimmed, lowercased, en dashes folded to hyphens,
/// inner whitespace collapsed
#[must_use]
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace('–', "-")
}
