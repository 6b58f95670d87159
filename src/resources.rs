// ABOUTME: Shared server resources injected into every route handler
// ABOUTME: Holds configuration, the key-value store, the profile repository, and derived services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use crate::config::environment::ServerConfig;
use crate::dashboard::DashboardService;
use crate::profiles::{InMemoryProfileRepository, ProfileRepository};
use crate::store::{BadgeUsageTracker, InMemoryStore, KeyValueStore};
use dopa_intelligence::IntelligenceConfig;
use std::sync::Arc;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Statistics engine configuration
    pub intelligence: Arc<IntelligenceConfig>,
    /// Key-value store for client state
    pub store: Arc<dyn KeyValueStore>,
    /// Onboarding records
    pub profiles: Arc<dyn ProfileRepository>,
    /// Dashboard service
    pub dashboard: DashboardService,
    /// Badge usage tracking
    pub badge_usage: BadgeUsageTracker,
}

impl ServerResources {
    /// Wire resources around the given backends
    #[must_use]
    pub fn new(
        config: ServerConfig,
        intelligence: IntelligenceConfig,
        store: Arc<dyn KeyValueStore>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        let intelligence = Arc::new(intelligence);
        Self {
            config: Arc::new(config),
            dashboard: DashboardService::new(Arc::clone(&profiles), Arc::clone(&intelligence)),
            badge_usage: BadgeUsageTracker::new(Arc::clone(&store)),
            intelligence,
            store,
            profiles,
        }
    }

    /// Resources backed by in-memory storage
    #[must_use]
    pub fn in_memory(config: ServerConfig, intelligence: IntelligenceConfig) -> Self {
        Self::new(
            config,
            intelligence,
            Arc::new(InMemoryStore::new()),
            Arc::new(InMemoryProfileRepository::new()),
        )
    }
}
