// ABOUTME: Tests for the dashboard service
// ABOUTME: Home screen payload, relapse handling, and emergency tasks for stored profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use anyhow::Result;
use chrono::Duration;
use common::{reference_now, test_resources, user_data};
use dopa_core::errors::ErrorCode;
use dopa_core::models::Sex;
use uuid::Uuid;

#[tokio::test]
async fn test_dashboard_combines_stats_counter_and_goal() -> Result<()> {
    let resources = test_resources();
    let user = Uuid::new_v4();
    resources.profiles.create(user, user_data(7)).await?;

    let dashboard = resources.dashboard.dashboard(user, reference_now()).await?;

    assert_eq!(dashboard.user_id, user);
    assert_eq!(dashboard.greeting, "La nouvelle Alice");
    assert_eq!(dashboard.stats.elapsed_days, 7);
    assert_eq!(dashboard.stats.total_calories_avoided, 980);
    assert_eq!(dashboard.stats.weight_lost_kg, 0.13);
    assert_eq!(dashboard.counter.days, 7);
    assert_eq!(dashboard.counter_display, "07 Jours 00 Heure 00 Min 00 Sec");
    assert_eq!(dashboard.goal.target_days, 90);
    assert_eq!(dashboard.goal.percent, 8);
    assert_eq!(dashboard.goal.days_remaining, 83);
    Ok(())
}

#[tokio::test]
async fn test_dashboard_greeting_follows_declared_sex() -> Result<()> {
    let resources = test_resources();
    let user = Uuid::new_v4();
    let mut data = user_data(1);
    data.sex = Sex::Male;
    data.first_name = "Karim".into();
    resources.profiles.create(user, data).await?;

    let dashboard = resources.dashboard.dashboard(user, reference_now()).await?;
    assert_eq!(dashboard.greeting, "Le nouveau Karim");
    Ok(())
}

#[tokio::test]
async fn test_dashboard_for_unknown_user_is_not_found() {
    let resources = test_resources();
    let user = Uuid::new_v4();

    let err = resources
        .dashboard
        .dashboard(user, reference_now())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.context.user_id, Some(user));
}

#[tokio::test]
async fn test_relapse_restarts_the_streak() -> Result<()> {
    let resources = test_resources();
    let user = Uuid::new_v4();
    resources.profiles.create(user, user_data(45)).await?;

    let relapse_at = reference_now();
    let dashboard = resources.dashboard.relapse(user, relapse_at).await?;
    assert_eq!(dashboard.stats.elapsed_days, 0);
    assert_eq!(dashboard.stats.total_calories_avoided, 0);
    assert_eq!(dashboard.start_date, relapse_at);

    let later = resources
        .dashboard
        .dashboard(user, relapse_at + Duration::days(2))
        .await?;
    assert_eq!(later.stats.elapsed_days, 2);
    Ok(())
}

#[tokio::test]
async fn test_emergency_tasks_include_stored_personal_task() -> Result<()> {
    let resources = test_resources();
    let user = Uuid::new_v4();
    let mut data = user_data(3);
    data.emergency_task_personal = Some("Sortir marcher".into());
    resources.profiles.create(user, data).await?;

    let tasks = resources.dashboard.emergency_tasks(user).await?;
    assert_eq!(tasks.len(), 9);
    assert_eq!(tasks[0].text, "Sortir marcher");
    Ok(())
}
