// ABOUTME: In-memory key-value store backed by a concurrent hash map
// ABOUTME: Used by tests, the CLI, and single-node deployments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use super::{merge_values, KeyValueStore};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use dopa_core::errors::AppResult;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// In-memory store
///
/// Cloning shares the underlying map. `merge` runs under the entry lock so
/// concurrent merges on one key never lose updates.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<DashMap<String, Value>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: Value) -> AppResult<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    async fn merge(&self, key: &str, value: Value) -> AppResult<Value> {
        let merged = match self.entries.entry(key.to_owned()) {
            Entry::Occupied(mut occupied) => {
                let existing = occupied.get_mut().take();
                let merged = merge_values(existing, value);
                occupied.insert(merged.clone());
                merged
            }
            Entry::Vacant(vacant) => {
                vacant.insert(value.clone());
                value
            }
        };
        debug!(key, "Merged value into store");
        Ok(merged)
    }

    async fn remove(&self, key: &str) -> AppResult<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
