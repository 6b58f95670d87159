// ABOUTME: Stateless statistics endpoint
// ABOUTME: Computes the derived statistics bundle for a posted profile and day count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use dopa_core::errors::AppError;
use dopa_core::models::UserBaselineProfile;
use dopa_intelligence::DerivedMetricsCalculator;
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /api/stats`
#[derive(Debug, Deserialize)]
pub struct StatsRequest {
    /// Baseline profile; absent means "not onboarded yet"
    #[serde(default)]
    pub profile: Option<UserBaselineProfile>,
    /// Whole days since the start date
    #[serde(default, alias = "elapsedDays")]
    pub elapsed_days: u32,
}

/// Statistics routes
pub struct StatsRoutes;

impl StatsRoutes {
    /// Create statistics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/stats", post(Self::handle_compute))
            .with_state(resources)
    }

    async fn handle_compute(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<StatsRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = payload?;
        let calculator = DerivedMetricsCalculator::with_config(&resources.intelligence);
        // A missing profile yields `null`, not an error
        let bundle = calculator.compute(request.profile.as_ref(), request.elapsed_days);

        Ok((StatusCode::OK, Json(bundle)).into_response())
    }
}
