// ABOUTME: Badge usage tracking on top of the key-value store
// ABOUTME: Records used badge keys per user and builds the gallery from every usage source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use super::KeyValueStore;
use dopa_core::constants::storage::USED_BADGES_KEY;
use dopa_core::errors::AppResult;
use dopa_core::models::BadgeReference;
use dopa_intelligence::badges::BadgeCollection;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Tracks which badges a user has put on shared images
#[derive(Clone)]
pub struct BadgeUsageTracker {
    store: Arc<dyn KeyValueStore>,
}

impl BadgeUsageTracker {
    /// Create a tracker over a store
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Store key holding a user's used badge keys
    #[must_use]
    pub fn key(user_id: Uuid) -> String {
        format!("{user_id}:{USED_BADGES_KEY}")
    }

    /// Record that `badge` was used; returns the updated key list
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable
    pub async fn record(&self, user_id: Uuid, badge: &BadgeReference) -> AppResult<Vec<String>> {
        let usage_key = badge.usage_key();
        let merged = self
            .store
            .merge(&Self::key(user_id), Value::Array(vec![Value::String(usage_key.clone())]))
            .await?;

        info!(user_id = %user_id, badge = %usage_key, "Recorded badge usage");
        Ok(Self::keys_from(user_id, merged))
    }

    /// Badge keys recorded in the store
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable
    pub async fn tracked(&self, user_id: Uuid) -> AppResult<Vec<String>> {
        Ok(self
            .store
            .get(&Self::key(user_id))
            .await?
            .map(|value| Self::keys_from(user_id, value))
            .unwrap_or_default())
    }

    /// Union of tracked keys and badges referenced by the user's posts and photo shares
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable
    pub async fn used_set(
        &self,
        user_id: Uuid,
        shared: &[BadgeReference],
    ) -> AppResult<HashSet<String>> {
        let mut used: HashSet<String> = shared.iter().map(BadgeReference::usage_key).collect();
        used.extend(self.tracked(user_id).await?);
        Ok(used)
    }

    /// Gallery view for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable
    pub async fn collection(
        &self,
        user_id: Uuid,
        shared: &[BadgeReference],
    ) -> AppResult<BadgeCollection> {
        let used = self.used_set(user_id, shared).await?;
        Ok(BadgeCollection::new(&used))
    }

    /// Forget every tracked badge for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable
    pub async fn clear(&self, user_id: Uuid) -> AppResult<bool> {
        self.store.remove(&Self::key(user_id)).await
    }

    fn keys_from(user_id: Uuid, value: Value) -> Vec<String> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(key) => Some(key),
                    _ => None,
                })
                .collect(),
            other => {
                warn!(
                    user_id = %user_id,
                    kind = %kind_of(&other),
                    "Badge usage entry is not a list, ignoring it"
                );
                Vec::new()
            }
        }
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
