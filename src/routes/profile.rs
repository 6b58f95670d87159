// ABOUTME: Per-user routes for onboarding, the dashboard, relapses, and emergency tasks
// ABOUTME: Validates onboarding records before they reach the profile repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use dopa_core::errors::AppError;
use dopa_core::models::UserData;
use dopa_intelligence::coping::emergency_tasks;
use dopa_intelligence::onboarding::validate_user_data;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Body of `PUT /api/users/:id/emergency-task`
#[derive(Debug, Deserialize)]
pub struct EmergencyTaskRequest {
    /// Personal task text; absent or blank clears it
    #[serde(default, alias = "emergencyTaskPersonal")]
    pub task: Option<String>,
}

/// Profile routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:id/profile",
                post(Self::handle_onboard).get(Self::handle_get_profile),
            )
            .route("/api/users/:id/dashboard", get(Self::handle_dashboard))
            .route("/api/users/:id/relapse", post(Self::handle_relapse))
            .route("/api/users/:id/emergency-tasks", get(Self::handle_emergency_tasks))
            .route("/api/users/:id/emergency-task", put(Self::handle_set_emergency_task))
            .with_state(resources)
    }

    async fn handle_onboard(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
        payload: Result<Json<UserData>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(data) = payload.map_err(|e| AppError::from(e).with_user_id(user_id))?;
        validate_user_data(&data).map_err(|e| AppError::from(e).with_user_id(user_id))?;

        let stored = resources.profiles.create(user_id, data).await?;
        info!(user_id = %user_id, days_target = stored.baseline.days_target, "User onboarded");

        Ok((StatusCode::CREATED, Json(stored)).into_response())
    }

    async fn handle_get_profile(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let data = resources.profiles.get(user_id).await?.ok_or_else(|| {
            AppError::not_found(format!("Profile for user {user_id}")).with_user_id(user_id)
        })?;

        Ok((StatusCode::OK, Json(data)).into_response())
    }

    async fn handle_dashboard(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let dashboard = resources.dashboard.dashboard(user_id, Utc::now()).await?;
        Ok((StatusCode::OK, Json(dashboard)).into_response())
    }

    async fn handle_relapse(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let dashboard = resources.dashboard.relapse(user_id, Utc::now()).await?;
        Ok((StatusCode::OK, Json(dashboard)).into_response())
    }

    async fn handle_emergency_tasks(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let tasks = resources.dashboard.emergency_tasks(user_id).await?;
        Ok((StatusCode::OK, Json(tasks)).into_response())
    }

    async fn handle_set_emergency_task(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
        payload: Result<Json<EmergencyTaskRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = payload?;
        let data = resources
            .profiles
            .set_emergency_task(user_id, request.task)
            .await?;
        let tasks = emergency_tasks(data.emergency_task_personal.as_deref());

        Ok((StatusCode::OK, Json(tasks)).into_response())
    }
}
