// ABOUTME: Dashboard service combining the stored profile, the clock, and the statistics engine
// ABOUTME: Produces the home screen payload and handles relapses by restarting the streak
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! Dashboard service

use crate::profiles::ProfileRepository;
use chrono::{DateTime, Utc};
use dopa_core::errors::{AppError, AppResult};
use dopa_core::models::{DerivedStatsBundle, UserData};
use dopa_intelligence::coping::{emergency_tasks, EmergencyTask};
use dopa_intelligence::tracking::{elapsed_days, CounterBreakdown, GoalProgress};
use dopa_intelligence::{DerivedMetricsCalculator, IntelligenceConfig};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Everything the home screen shows for one user at one instant
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// User
    pub user_id: Uuid,
    /// Greeting, e.g. "La nouvelle Alice"
    pub greeting: String,
    /// Start of the current streak
    pub start_date: DateTime<Utc>,
    /// Derived statistics
    pub stats: DerivedStatsBundle,
    /// Counter units
    pub counter: CounterBreakdown,
    /// Counter rendered for display
    pub counter_display: String,
    /// Progress towards the goal
    pub goal: GoalProgress,
}

/// Service composing the profile repository with the statistics engine
#[derive(Clone)]
pub struct DashboardService {
    profiles: Arc<dyn ProfileRepository>,
    intelligence: Arc<IntelligenceConfig>,
}

impl DashboardService {
    /// Create a dashboard service
    #[must_use]
    pub fn new(profiles: Arc<dyn ProfileRepository>, intelligence: Arc<IntelligenceConfig>) -> Self {
        Self {
            profiles,
            intelligence,
        }
    }

    /// Dashboard for `user_id` as of `now`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user has not onboarded
    pub async fn dashboard(&self, user_id: Uuid, now: DateTime<Utc>) -> AppResult<Dashboard> {
        let data = self.load(user_id).await?;
        self.build(user_id, &data, now)
    }

    /// Record a relapse: the streak restarts at `now`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user has not onboarded
    pub async fn relapse(&self, user_id: Uuid, now: DateTime<Utc>) -> AppResult<Dashboard> {
        let previous = self.load(user_id).await?;
        let data = self.profiles.reset_start_date(user_id, now).await?;

        info!(
            user_id = %user_id,
            previous_streak_days = elapsed_days(previous.start_date, now),
            "Streak restarted after relapse"
        );

        self.build(user_id, &data, now)
    }

    /// Emergency tasks for `user_id`, personal task first
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user has not onboarded
    pub async fn emergency_tasks(&self, user_id: Uuid) -> AppResult<Vec<EmergencyTask>> {
        let data = self.load(user_id).await?;
        Ok(emergency_tasks(data.emergency_task_personal.as_deref()))
    }

    async fn load(&self, user_id: Uuid) -> AppResult<UserData> {
        self.profiles.get(user_id).await?.ok_or_else(|| {
            AppError::not_found(format!("Profile for user {user_id}")).with_user_id(user_id)
        })
    }

    fn build(&self, user_id: Uuid, data: &UserData, now: DateTime<Utc>) -> AppResult<Dashboard> {
        let days = elapsed_days(data.start_date, now);
        let calculator = DerivedMetricsCalculator::with_config(&self.intelligence);
        let stats = calculator
            .compute(Some(&data.baseline), days)
            .ok_or_else(|| AppError::internal("Statistics unavailable for a stored profile"))?;
        let counter = CounterBreakdown::between(data.start_date, now);

        debug!(user_id = %user_id, elapsed_days = days, "Built dashboard");

        Ok(Dashboard {
            user_id,
            greeting: format!("{} {}", data.sex.counter_title(), data.first_name),
            start_date: data.start_date,
            stats,
            counter_display: counter.render(),
            counter,
            goal: GoalProgress::new(days, data.baseline.days_target),
        })
    }
}
