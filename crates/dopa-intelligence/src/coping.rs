// ABOUTME: Emergency coping tasks offered when a craving hits
// ABOUTME: Fixed suggestions, preceded by the user's own task when one is saved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use serde::Serialize;

/// Emoji shown next to the user's personal task
pub const PERSONAL_TASK_EMOJI: &str = "⭐";

const SUGGESTED_TASKS: [(&str, &str); 8] = [
    ("🚶", "Faire une promenade de 10 minutes"),
    ("💧", "Boire un grand verre d'eau"),
    ("📞", "Appeler un ami ou un proche"),
    ("🧘", "Méditer 5 minutes"),
    ("🎵", "Écouter sa musique préférée"),
    ("✍️", "Écrire dans un journal ce que tu ressens"),
    ("🏃", "Faire 20 jumping jacks"),
    ("🍵", "Se préparer un thé ou une boisson chaude"),
];

/// A task to do instead of drinking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyTask {
    /// Emoji
    pub emoji: String,
    /// Task description
    pub text: String,
    /// Whether the user wrote this task
    pub personal: bool,
}

/// The built-in suggestions, in display order
#[must_use]
pub fn suggested_tasks() -> Vec<EmergencyTask> {
    SUGGESTED_TASKS
        .iter()
        .map(|(emoji, text)| EmergencyTask {
            emoji: (*emoji).to_owned(),
            text: (*text).to_owned(),
            personal: false,
        })
        .collect()
}

/// Tasks to show in the panic dialog
///
/// A non-blank personal task comes first, followed by the suggestions.
#[must_use]
pub fn emergency_tasks(personal: Option<&str>) -> Vec<EmergencyTask> {
    let mut tasks = Vec::with_capacity(SUGGESTED_TASKS.len() + 1);

    if let Some(text) = personal.map(str::trim).filter(|text| !text.is_empty()) {
        tasks.push(EmergencyTask {
            emoji: PERSONAL_TASK_EMOJI.to_owned(),
            text: text.to_owned(),
            personal: true,
        });
    }

    tasks.extend(suggested_tasks());
    tasks
}
