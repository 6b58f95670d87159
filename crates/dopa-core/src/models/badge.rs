// ABOUTME: Badge definitions, categories, and references carried by shared posts
// ABOUTME: Usage keys identify a badge across posts, photo shares, and the usage store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use crate::constants::badges::{LABEL_ELLIPSIS, LABEL_MAX_CHARS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Badge category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BadgeCategory {
    /// Everyday wins
    #[serde(rename = "quotidien")]
    Everyday,
    /// Big occasions (weddings, holidays)
    #[serde(rename = "occasions")]
    Occasions,
    /// Nights out
    #[serde(rename = "sortie")]
    NightOut,
    /// Personal victories
    #[serde(rename = "victoires")]
    Victories,
    /// Self-deprecation
    #[serde(rename = "autodérision")]
    SelfMockery,
    /// Social sharing
    #[serde(rename = "partage")]
    Sharing,
    /// Parents
    #[serde(rename = "parents")]
    Parents,
    /// Athletes
    #[serde(rename = "sportifs")]
    Athletes,
    /// Defeated villains
    #[serde(rename = "mechants")]
    Villains,
}

impl BadgeCategory {
    /// Every category, in gallery order
    pub const ALL: [Self; 9] = [
        Self::Everyday,
        Self::Occasions,
        Self::NightOut,
        Self::Victories,
        Self::SelfMockery,
        Self::Sharing,
        Self::Parents,
        Self::Athletes,
        Self::Villains,
    ];

    /// Stable key used in storage and query strings
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Everyday => "quotidien",
            Self::Occasions => "occasions",
            Self::NightOut => "sortie",
            Self::Victories => "victoires",
            Self::SelfMockery => "autodérision",
            Self::Sharing => "partage",
            Self::Parents => "parents",
            Self::Athletes => "sportifs",
            Self::Villains => "mechants",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Everyday => "Du Quotidien",
            Self::Occasions => "Grandes Occasions",
            Self::NightOut => "Société / Sortie",
            Self::Victories => "Victoires Perso",
            Self::SelfMockery => "Auto-dérision",
            Self::Sharing => "Partage Social",
            Self::Parents => "Parents",
            Self::Athletes => "Sportifs",
            Self::Villains => "Méchants Vaincus",
        }
    }
}

impl fmt::Display for BadgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BadgeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.key() == wanted || (wanted == "autoderision" && *category == Self::SelfMockery))
            .ok_or_else(|| format!("Unknown badge category: {s}"))
    }
}

/// A badge from the static catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Emoji drawn on the badge
    pub emoji: &'static str,
    /// Badge text
    pub text: &'static str,
    /// Category
    pub category: BadgeCategory,
    /// Minimum streak length before the badge makes sense
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_days: Option<u32>,
    /// Villain defeated, for the villain category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub villain_name: Option<&'static str>,
}

impl Badge {
    /// Key identifying this badge in posts and the usage store
    #[must_use]
    pub fn usage_key(&self) -> String {
        usage_key(self.emoji, self.text)
    }

    /// Whether the badge is available after `days` of abstinence
    #[must_use]
    pub fn is_unlocked_at(&self, days: u32) -> bool {
        self.min_days.is_none_or(|min| days >= min)
    }

    /// Short label for pickers: the villain name, or the text truncated to 50 characters
    #[must_use]
    pub fn display_label(&self) -> String {
        if let Some(villain) = self.villain_name {
            return villain.to_owned();
        }
        if self.text.chars().count() > LABEL_MAX_CHARS {
            let truncated: String = self.text.chars().take(LABEL_MAX_CHARS).collect();
            format!("{truncated}{LABEL_ELLIPSIS}")
        } else {
            self.text.to_owned()
        }
    }
}

/// Badge attached to a post or photo share
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BadgeReference {
    /// Badge emoji
    #[serde(alias = "badge_emoji")]
    pub emoji: String,
    /// Badge text
    #[serde(alias = "badge_text")]
    pub text: String,
}

impl BadgeReference {
    /// Key identifying the referenced badge
    #[must_use]
    pub fn usage_key(&self) -> String {
        usage_key(&self.emoji, &self.text)
    }
}

impl From<&Badge> for BadgeReference {
    fn from(badge: &Badge) -> Self {
        Self {
            emoji: badge.emoji.to_owned(),
            text: badge.text.to_owned(),
        }
    }
}

/// Build the `"{emoji}_{text}"` usage key
#[must_use]
pub fn usage_key(emoji: &str, text: &str) -> String {
    format!("{emoji}_{text}")
}
