// ABOUTME: HTTP route assembly for the DOPA server
// ABOUTME: Merges the per-domain routers and wraps them in request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! HTTP routes
//!
//! Each domain exposes a `*Routes::routes(resources)` constructor returning a
//! stateful `Router`; [`router`] merges them into the application.

/// Badge catalog and gallery routes
pub mod badges;
/// Health check routes
pub mod health;
/// Onboarding, dashboard, and relapse routes
pub mod profile;
/// Stateless statistics routes
pub mod stats;

pub use badges::BadgeRoutes;
pub use health::HealthRoutes;
pub use profile::ProfileRoutes;
pub use stats::StatsRoutes;

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(StatsRoutes::routes(Arc::clone(&resources)))
        .merge(ProfileRoutes::routes(Arc::clone(&resources)))
        .merge(BadgeRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
}
