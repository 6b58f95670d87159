// ABOUTME: Injectable key-value store for small per-user client state
// ABOUTME: Async trait with JSON values and merge semantics, plus badge usage tracking on top
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

/// Badge usage tracking backed by the key-value store
pub mod badges;
/// In-memory store implementation
pub mod memory;

pub use badges::BadgeUsageTracker;
pub use memory::InMemoryStore;

use dopa_core::errors::AppResult;
use serde_json::Value;

/// Key-value store holding JSON documents
///
/// Implementations are shared behind `Arc<dyn KeyValueStore>` so the
/// statistics engine never sees them.
///
/// # Examples
///
/// ```rust
/// use dopa_server::store::{InMemoryStore, KeyValueStore};
/// use serde_json::json;
/// # async fn example() -> dopa_core::errors::AppResult<()> {
///
/// let store = InMemoryStore::new();
/// store.set("user:list", json!(["a"])).await?;
/// let merged = store.merge("user:list", json!(["a", "b"])).await?;
/// assert_eq!(merged, json!(["a", "b"]));
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable
    async fn get(&self, key: &str) -> AppResult<Option<Value>>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable
    async fn set(&self, key: &str, value: Value) -> AppResult<()>;

    /// Merge `value` into the value stored under `key` and return the result
    ///
    /// See [`merge_values`] for the merge rules. A missing key behaves like a
    /// plain `set`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable
    async fn merge(&self, key: &str, value: Value) -> AppResult<Value>;

    /// Delete `key`, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable
    async fn remove(&self, key: &str) -> AppResult<bool>;

    /// Check backend health
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached
    async fn health_check(&self) -> AppResult<bool>;
}

/// Merge `incoming` into `existing`
///
/// - arrays: union, keeping the first occurrence of each element in order
/// - objects: shallow overlay, incoming keys win
/// - anything else (including mismatched kinds): incoming replaces existing
#[must_use]
pub fn merge_values(existing: Value, incoming: Value) -> Value {
    match (existing, incoming) {
        (Value::Array(mut items), Value::Array(extra)) => {
            for item in extra {
                if !items.contains(&item) {
                    items.push(item);
                }
            }
            Value::Array(items)
        }
        (Value::Object(mut fields), Value::Object(extra)) => {
            fields.extend(extra);
            Value::Object(fields)
        }
        (_, incoming) => incoming,
    }
}
