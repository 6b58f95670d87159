// ABOUTME: Alcohol lookup tables for calories per standard drink and weekly drink volume
// ABOUTME: Flat domain constants keyed by the labels captured during onboarding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

/// Beer category label
pub const BEER: &str = "Bière";
/// Wine category label
pub const WINE: &str = "Vin";
/// Champagne category label
pub const CHAMPAGNE: &str = "Champagne";
/// Spirits category label
pub const SPIRITS: &str = "Spiritueux";
/// Cocktails category label
pub const COCKTAILS: &str = "Cocktails";

/// Alcohol categories offered during onboarding, in display order
pub const ALCOHOL_TYPES: [&str; 5] = [BEER, WINE, CHAMPAGNE, SPIRITS, COCKTAILS];

/// Average kilocalories per standard serving, by category
pub const CALORIES_PER_DRINK: &[(&str, f64)] = &[
    (BEER, 140.0),
    (WINE, 120.0),
    (CHAMPAGNE, 95.0),
    (SPIRITS, 105.0),
    (COCKTAILS, 180.0),
];

/// English aliases accepted for the category labels
pub const CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("beer", BEER),
    ("wine", WINE),
    ("champagne", CHAMPAGNE),
    ("spirits", SPIRITS),
    ("cocktails", COCKTAILS),
];

/// "1–2 verres / semaine"
pub const FREQ_ONE_TO_TWO_PER_WEEK: &str = "1–2 verres / semaine";
/// "3–6 verres / semaine"
pub const FREQ_THREE_TO_SIX_PER_WEEK: &str = "3–6 verres / semaine";
/// "1 verre / jour"
pub const FREQ_ONE_PER_DAY: &str = "1 verre / jour";
/// "2–3 verres / jour"
pub const FREQ_TWO_TO_THREE_PER_DAY: &str = "2–3 verres / jour";
/// "Plus de 3 verres / jour"
pub const FREQ_MORE_THAN_THREE_PER_DAY: &str = "Plus de 3 verres / jour";

/// Consumption buckets offered during onboarding, in display order
pub const CONSUMPTION_FREQUENCIES: [&str; 5] = [
    FREQ_ONE_TO_TWO_PER_WEEK,
    FREQ_THREE_TO_SIX_PER_WEEK,
    FREQ_ONE_PER_DAY,
    FREQ_TWO_TO_THREE_PER_DAY,
    FREQ_MORE_THAN_THREE_PER_DAY,
];

/// Centroid of each bucket in drinks per week
pub const DRINKS_PER_WEEK: &[(&str, f64)] = &[
    (FREQ_ONE_TO_TWO_PER_WEEK, 1.5),
    (FREQ_THREE_TO_SIX_PER_WEEK, 4.5),
    (FREQ_ONE_PER_DAY, 7.0),
    (FREQ_TWO_TO_THREE_PER_DAY, 17.5),
    (FREQ_MORE_THAN_THREE_PER_DAY, 28.0),
];

/// Short and ASCII aliases accepted for the frequency buckets
pub const FREQUENCY_ALIASES: &[(&str, &str)] = &[
    ("1-2 verres / semaine", FREQ_ONE_TO_TWO_PER_WEEK),
    ("3-6 verres / semaine", FREQ_THREE_TO_SIX_PER_WEEK),
    ("2-3 verres / jour", FREQ_TWO_TO_THREE_PER_DAY),
    ("1-2/week", FREQ_ONE_TO_TWO_PER_WEEK),
    ("3-6/week", FREQ_THREE_TO_SIX_PER_WEEK),
    ("1/day", FREQ_ONE_PER_DAY),
    ("2-3/day", FREQ_TWO_TO_THREE_PER_DAY),
    (">3/day", FREQ_MORE_THAN_THREE_PER_DAY),
];

/// Emoji shown next to each category on the habits card
pub const CATEGORY_EMOJI: &[(&str, &str)] = &[
    (BEER, "🍺"),
    (WINE, "🍷"),
    (CHAMPAGNE, "🥂"),
    (SPIRITS, "🥃"),
    (COCKTAILS, "🍹"),
];

/// Emoji used for categories outside the table
pub const DEFAULT_CATEGORY_EMOJI: &str = "🍸";
