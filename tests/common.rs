// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Sample baseline profiles, onboarding records, and in-memory server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `dopa_server`

use chrono::{DateTime, TimeZone, Utc};
use dopa_core::models::{Sex, UserBaselineProfile, UserData};
use dopa_intelligence::IntelligenceConfig;
use dopa_server::config::environment::ServerConfig;
use dopa_server::resources::ServerResources;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Beer drinker, one drink a day, 50 EUR a week, average sleep
pub fn beer_profile() -> UserBaselineProfile {
    UserBaselineProfile {
        alcohol_types: vec!["Bière".into()],
        consumption_frequency: "1 verre / jour".into(),
        weekly_budget: 50.0,
        baseline_sleep_quality: 3,
        baseline_energy: 3,
        baseline_stress: 3,
        resting_heart_rate: None,
        days_target: 90,
    }
}

/// Fixed reference instant
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// Complete onboarding record starting `days` before [`reference_now`]
pub fn user_data(days: i64) -> UserData {
    UserData {
        first_name: "Alice".into(),
        last_name: "Martin".into(),
        username: Some("alice".into()),
        age: 34,
        sex: Sex::Female,
        height_cm: 168.0,
        current_weight_kg: 64.0,
        weight_before_stop_kg: Some(66.0),
        baseline: beer_profile(),
        personal_goals: vec!["Mieux dormir".into()],
        start_date: reference_now() - chrono::Duration::days(days),
        emergency_task_personal: None,
    }
}

/// In-memory resources with default configuration
pub fn test_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::in_memory(
        ServerConfig::default(),
        IntelligenceConfig::default(),
    ))
}
