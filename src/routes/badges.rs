// ABOUTME: Badge catalog and gallery routes
// ABOUTME: Lists the catalog, builds a user's gallery, and records badge usage on shared images
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use crate::resources::ServerResources;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::{Query as MultiQuery, QueryRejection as MultiQueryRejection};
use dopa_core::errors::AppError;
use dopa_core::models::{Badge, BadgeCategory, BadgeReference};
use dopa_intelligence::badges::{catalog, find_by_usage_key, share_message};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Query parameters for the catalog listing
#[derive(Debug, Deserialize)]
struct CatalogQuery {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    days: Option<u32>,
}

/// Query parameters for a user's gallery
///
/// Badge texts may contain commas, so each key is its own `shared=` pair.
#[derive(Debug, Default, Deserialize)]
struct GalleryQuery {
    /// Usage keys referenced by the user's posts and photo shares
    #[serde(default)]
    shared: Vec<String>,
}

/// Body of `POST /api/users/:id/badges/usage`
#[derive(Debug, Deserialize)]
pub struct BadgeUsageRequest {
    /// Badge placed on the shared image
    #[serde(flatten)]
    pub badge: BadgeReference,
    /// Streak length shown on the image
    #[serde(default, alias = "elapsedDays")]
    pub elapsed_days: Option<u32>,
}

/// Response of `POST /api/users/:id/badges/usage`
#[derive(Debug, Serialize)]
struct BadgeUsageResponse {
    usage_key: String,
    used_badges: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    share_message: Option<String>,
}

/// Badge routes
pub struct BadgeRoutes;

impl BadgeRoutes {
    /// Create badge routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/badges", get(Self::handle_catalog))
            .route("/api/users/:id/badges", get(Self::handle_gallery))
            .route("/api/users/:id/badges/usage", post(Self::handle_record_usage))
            .with_state(resources)
    }

    async fn handle_catalog(
        query: Result<Query<CatalogQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(params) = query?;
        let category = params
            .category
            .as_deref()
            .map(str::parse::<BadgeCategory>)
            .transpose()
            .map_err(AppError::invalid_input)?;

        let badges: Vec<&Badge> = catalog()
            .iter()
            .filter(|badge| category.is_none_or(|c| badge.category == c))
            .filter(|badge| params.days.is_none_or(|days| badge.is_unlocked_at(days)))
            .collect();

        Ok((
            StatusCode::OK,
            Json(json!({ "total": badges.len(), "badges": badges })),
        )
            .into_response())
    }

    async fn handle_gallery(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
        query: Result<MultiQuery<GalleryQuery>, MultiQueryRejection>,
    ) -> Result<Response, AppError> {
        let MultiQuery(params) = query.map_err(|e| AppError::invalid_input(e.to_string()))?;
        let shared: Vec<BadgeReference> = params
            .shared
            .iter()
            .map(String::as_str)
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .filter_map(|key| {
                let badge = find_by_usage_key(key);
                if badge.is_none() {
                    debug!(user_id = %user_id, key, "Ignoring unknown shared badge key");
                }
                badge
            })
            .map(BadgeReference::from)
            .collect();

        let collection = resources.badge_usage.collection(user_id, &shared).await?;
        Ok((StatusCode::OK, Json(collection)).into_response())
    }

    async fn handle_record_usage(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
        payload: Result<Json<BadgeUsageRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = payload?;
        if request.badge.emoji.trim().is_empty() || request.badge.text.trim().is_empty() {
            return Err(AppError::invalid_input("Badge emoji and text are required"));
        }

        let used_badges = resources
            .badge_usage
            .record(user_id, &request.badge)
            .await?;
        let known = find_by_usage_key(&request.badge.usage_key());
        let share_message = request
            .elapsed_days
            .map(|days| share_message(days, known));

        Ok((
            StatusCode::OK,
            Json(BadgeUsageResponse {
                usage_key: request.badge.usage_key(),
                used_badges,
                share_message,
            }),
        )
            .into_response())
    }
}
