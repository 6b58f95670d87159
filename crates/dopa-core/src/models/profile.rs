// ABOUTME: Baseline profile and onboarding record captured when a user starts tracking
// ABOUTME: UserBaselineProfile feeds the statistics engine, UserData is the full stored row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Self-reported habits and health indicators before abstinence
///
/// Field aliases accept the column names used by the persisted settings rows.
///
/// # Examples
///
/// ```rust
/// use dopa_core::models::UserBaselineProfile;
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
/// assert_eq!(profile.alcohol_types.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBaselineProfile {
    /// Alcohol categories the user used to drink
    #[serde(alias = "alcool_types")]
    pub alcohol_types: Vec<String>,
    /// Habitual consumption bucket label
    #[serde(alias = "alcool_frequence")]
    pub consumption_frequency: String,
    /// Weekly spend on alcohol (currency-agnostic)
    #[serde(alias = "budget_alcool_hebdo_eur")]
    pub weekly_budget: f64,
    /// Sleep quality on a 1-5 scale
    #[serde(alias = "sommeil_base")]
    pub baseline_sleep_quality: u8,
    /// Energy level on a 1-5 scale
    #[serde(alias = "energie_base")]
    pub baseline_energy: u8,
    /// Stress level on a 1-5 scale
    #[serde(alias = "stress_base")]
    pub baseline_stress: u8,
    /// Resting heart rate in bpm, when known
    #[serde(
        default,
        alias = "frequence_cardiaque_repos",
        skip_serializing_if = "Option::is_none"
    )]
    pub resting_heart_rate: Option<u32>,
    /// Abstinence goal in days
    #[serde(alias = "objectif_jours_sans_alcool")]
    pub days_target: u32,
}

/// Declared sex, as offered by the onboarding form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    /// Male
    #[serde(rename = "Homme", alias = "male")]
    Male,
    /// Female
    #[serde(rename = "Femme", alias = "female")]
    Female,
    /// Other / not specified
    #[serde(rename = "Autre", alias = "other")]
    Other,
}

impl Sex {
    /// Title used by the counter greeting ("Le nouveau" / "La nouvelle")
    #[must_use]
    pub const fn counter_title(self) -> &'static str {
        match self {
            Self::Female => "La nouvelle",
            Self::Male | Self::Other => "Le nouveau",
        }
    }
}

/// Full onboarding record stored per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Optional public handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Age in years
    pub age: u32,
    /// Declared sex
    #[serde(alias = "sexe")]
    pub sex: Sex,
    /// Height in centimetres
    #[serde(alias = "taille_cm")]
    pub height_cm: f64,
    /// Current weight in kilograms
    #[serde(alias = "poids_actuel_kg")]
    pub current_weight_kg: f64,
    /// Weight before stopping, when recorded
    #[serde(
        default,
        alias = "poids_avant_arret_kg",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight_before_stop_kg: Option<f64>,
    /// Habits and health indicators used by the statistics engine
    #[serde(flatten)]
    pub baseline: UserBaselineProfile,
    /// Personal motivations selected during onboarding
    #[serde(alias = "objectifs_personnels")]
    pub personal_goals: Vec<String>,
    /// Start of the current abstinence streak
    pub start_date: DateTime<Utc>,
    /// Personal task suggested when a craving hits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_task_personal: Option<String>,
}
