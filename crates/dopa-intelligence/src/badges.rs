// ABOUTME: Static badge catalog with category lookup, unlocking by streak length, and sharing
// ABOUTME: Collection progress groups the catalog by category and flags badges already used
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! Badge catalog
//!
//! Badges are static data. A badge counts as "used" once its usage key shows
//! up in a post, a photo share, or the usage store; this module only consumes
//! the resulting set of keys.

use dopa_core::models::BadgeCategory::{
    Athletes, Everyday, NightOut, Occasions, Parents, SelfMockery, Sharing, Victories,
};
use dopa_core::models::{Badge, BadgeCategory};
use serde::Serialize;
use std::collections::HashSet;

const fn badge(emoji: &'static str, text: &'static str, category: BadgeCategory) -> Badge {
    Badge {
        emoji,
        text,
        category,
        min_days: None,
        villain_name: None,
    }
}

const fn milestone(
    emoji: &'static str,
    text: &'static str,
    category: BadgeCategory,
    min_days: u32,
) -> Badge {
    Badge {
        emoji,
        text,
        category,
        min_days: Some(min_days),
        villain_name: None,
    }
}

const fn villain(emoji: &'static str, text: &'static str, villain_name: &'static str) -> Badge {
    Badge {
        emoji,
        text,
        category: BadgeCategory::Villains,
        min_days: None,
        villain_name: Some(villain_name),
    }
}

static CATALOG: &[Badge] = &[
    milestone("☀️", "Premier week-end chill sans boire", Everyday, 2),
    badge("🍕", "Apéro soft réussi", Everyday),
    badge("📺", "Netflix & Eau pétillante", Everyday),
    badge("💧", "Hydraté, pas éclaté", Everyday),
    badge("😌", "Dormi 8h, miracle.", Everyday),
    milestone("🍳", "Premier brunch sans gueule de bois", Everyday, 1),
    badge("🚲", "Matin productif – zéro regrets", Everyday),
    badge("💒", "Premier mariage sans champagne", Occasions),
    badge("👩‍👩‍👦", "Dîner chez la belle-famille : sobre et digne", Occasions),
    badge(
        "🎂",
        "Anniv sans excès – j'ai soufflé les bougies, pas les plombs",
        Occasions,
    ),
    badge("🎄", "Noël sans bulles (et sans drame)", Occasions),
    badge("🎆", "Nouvel An sobre – qui l'eût cru ?", Occasions),
    badge("🎤", "Soirée karaoké 0%", NightOut),
    badge("🎧", "Premier festival sobre – et j'ai tout retenu !", NightOut),
    badge("🍻", "1ère soirée entre potes sans lever le coude", NightOut),
    badge("🍝", "Dîner arrosé... d'eau !", NightOut),
    badge("💃", "Dansé sans boire (et j'assume)", NightOut),
    badge("🧘", "Contrôle total, pas total contrôle", Victories),
    milestone("📅", "7 jours sans, easy.", Victories, 7),
    milestone("📆", "30 jours sans – le vrai glow-up.", Victories, 30),
    milestone("🏆", "Master of self-control", Victories, 60),
    badge("🔥", "Sobre, mais chaud.", Victories),
    badge("🧩", "Premier vendredi soir sans craquer.", Victories),
    badge("😎", "Toujours fun, même à jeun.", SelfMockery),
    badge("🤓", "Overthinker sobre.", SelfMockery),
    badge("🐢", "Lent mais lucide.", SelfMockery),
    badge("🧃", "Mocktail hero.", SelfMockery),
    badge("💅", "Sobre, mais stylé.", SelfMockery),
    badge("💸", "Pochtron repenti, portefeuille content.", SelfMockery),
    milestone("🌈", "Sobre & fier.", Sharing, 1),
    badge("🚀", "Jour X – let's go Dopa.", Sharing),
    milestone("🎯", "1 mois clean, 100 % dopamine naturelle.", Sharing, 30),
    badge("💬", "Sobre ne veut pas dire chiant.", Sharing),
    badge("📣", "Pas de morale, juste du contrôle.", Sharing),
    milestone("🏁", "Challenge Dopa validé ✅", Sharing, 90),
    badge("☀️", "J'ai géré le réveil de 6h (sobre et lucide)", Parents),
    badge("🍼", "Parent 1 – Gueule de bois 0.", Parents),
    badge(
        "☕",
        "Premier matin sans mal de tête depuis que j'ai des enfants.",
        Parents,
    ),
    badge("🧃", "Biberon, café, fierté.", Parents),
    badge("🧸", "Sobre à 6h du mat — les vrais savent.", Parents),
    badge("🎠", "J'ai survécu à l'anniv d'un enfant sans boire.", Parents),
    badge("📚", "Devoirs du soir, cerveau encore connecté.", Parents),
    badge("🧺", "Lessive faite, morale intacte.", Parents),
    badge("🚗", "Sam pour le foot du petit – et fier.", Parents),
    badge("🌙", "Coucher les enfants, pas mes neurones.", Parents),
    badge(
        "🥇",
        "Un marathon, c'est plus facile sans gueule de bois.",
        Athletes,
    ),
    badge("🚴", "J'ai remplacé les shots par les watts.", Athletes),
    badge("🏋️", "Sobre, mais chargé à la dopamine.", Athletes),
    badge("🏃", "Record perso battu – zéro alcool, 100 % Dopa.", Athletes),
    badge("🎯", "Moins de bières, plus de PR.", Athletes),
    badge("🧘", "Focus, pas flou.", Athletes),
    badge("⏰", "Run du dimanche matin : validé.", Athletes),
    badge("💪", "Mon afterwork, c'est la salle.", Athletes),
    badge("🧊", "Ice bath > ice cubes.", Athletes),
    badge("🔥", "Sobre, mais chaud.", Athletes),
    villain(
        "🍾",
        "J'ai résisté à Jean-Michel Insistance – Le gars qui te ressert sans te demander.",
        "Jean-Michel Insistance",
    ),
    villain(
        "🍹",
        "J'ai résisté au Mauvais Barman – Il t'a mis du rhum alors que t'avais dit sans.",
        "Le Mauvais Barman",
    ),
    villain(
        "🍺",
        "J'ai résisté à Lionel IPA – Connaît toutes les bières artisanales, ne connaît pas le consentement liquide.",
        "Lionel IPA",
    ),
    villain(
        "🧊",
        "J'ai résisté au Bon Copain – Il veut juste 'retrouver le toi d'avant'.",
        "Le Bon Copain",
    ),
    villain(
        "🎉",
        "J'ai résisté à la Fêtarde Persuasive – T'as changéééé, allez un shooter !",
        "La Fêtarde Persuasive",
    ),
];

/// Every badge, grouped by category in gallery order
#[must_use]
pub fn catalog() -> &'static [Badge] {
    CATALOG
}

/// Every category with its display label, in gallery order
#[must_use]
pub fn categories() -> Vec<(BadgeCategory, &'static str)> {
    BadgeCategory::ALL
        .into_iter()
        .map(|category| (category, category.label()))
        .collect()
}

/// Badges of one category
#[must_use]
pub fn in_category(category: BadgeCategory) -> Vec<&'static Badge> {
    CATALOG
        .iter()
        .filter(|badge| badge.category == category)
        .collect()
}

/// Look up a badge by category and exact text
#[must_use]
pub fn find(category: BadgeCategory, text: &str) -> Option<&'static Badge> {
    CATALOG
        .iter()
        .find(|badge| badge.category == category && badge.text == text)
}

/// Look up a badge by usage key (first match in catalog order)
#[must_use]
pub fn find_by_usage_key(key: &str) -> Option<&'static Badge> {
    CATALOG.iter().find(|badge| badge.usage_key() == key)
}

/// Badges available after `days` of abstinence
#[must_use]
pub fn unlocked_at(days: u32) -> Vec<&'static Badge> {
    CATALOG
        .iter()
        .filter(|badge| badge.is_unlocked_at(days))
        .collect()
}

/// Message attached when sharing a badge to social networks
#[must_use]
pub fn share_message(days: u32, badge: Option<&Badge>) -> String {
    let unit = if days == 1 { "jour" } else { "jours" };
    let text = badge.map_or("", |badge| badge.text);
    format!("🎉 {days} {unit} sans alcool avec DOPA! {text} 💪 #DOPA #JusteToi")
}

/// A catalog badge and whether the user has used it
#[derive(Debug, Clone, Serialize)]
pub struct BadgeStatus {
    /// Badge definition
    #[serde(flatten)]
    pub badge: &'static Badge,
    /// Usage key
    pub usage_key: String,
    /// Whether the usage key appears in the user's used set
    pub used: bool,
}

/// Progress within one category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryProgress {
    /// Category
    pub category: BadgeCategory,
    /// Display label
    pub label: &'static str,
    /// Badges used in this category
    pub used_count: usize,
    /// Badges in this category
    pub badges: Vec<BadgeStatus>,
}

/// Gallery view of the catalog for one user
#[derive(Debug, Clone, Serialize)]
pub struct BadgeCollection {
    /// Catalog entries whose usage key is in the used set
    pub used_count: usize,
    /// Catalog size
    pub total: usize,
    /// Per-category breakdown in gallery order
    pub categories: Vec<CategoryProgress>,
}

impl BadgeCollection {
    /// Build the gallery from a set of used badge keys
    #[must_use]
    pub fn new(used_keys: &HashSet<String>) -> Self {
        let categories: Vec<CategoryProgress> = BadgeCategory::ALL
            .into_iter()
            .map(|category| {
                let badges: Vec<BadgeStatus> = in_category(category)
                    .into_iter()
                    .map(|badge| {
                        let usage_key = badge.usage_key();
                        let used = used_keys.contains(&usage_key);
                        BadgeStatus {
                            badge,
                            usage_key,
                            used,
                        }
                    })
                    .collect();
                CategoryProgress {
                    category,
                    label: category.label(),
                    used_count: badges.iter().filter(|status| status.used).count(),
                    badges,
                }
            })
            .collect();

        Self {
            used_count: categories.iter().map(|c| c.used_count).sum(),
            total: CATALOG.len(),
            categories,
        }
    }

    /// Progress for one category
    #[must_use]
    pub fn category(&self, category: BadgeCategory) -> Option<&CategoryProgress> {
        self.categories.iter().find(|c| c.category == category)
    }
}
