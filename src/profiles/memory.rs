// ABOUTME: In-memory profile repository backed by a concurrent hash map
// ABOUTME: Enforces one record per user and applies in-place updates under the entry lock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

use super::ProfileRepository;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use dopa_core::errors::{AppError, AppResult};
use dopa_core::models::UserData;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory repository; clones share the same map
#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<DashMap<Uuid, UserData>>,
}

impl InMemoryProfileRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn modify<F>(&self, user_id: Uuid, apply: F) -> AppResult<UserData>
    where
        F: FnOnce(&mut UserData),
    {
        let mut entry = self
            .profiles
            .get_mut(&user_id)
            .ok_or_else(|| AppError::not_found(format!("Profile for user {user_id}")))?;
        apply(entry.value_mut());
        Ok(entry.value().clone())
    }
}

#[async_trait::async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn create(&self, user_id: Uuid, data: UserData) -> AppResult<UserData> {
        match self.profiles.entry(user_id) {
            Entry::Occupied(_) => Err(AppError::already_exists(format!(
                "Profile for user {user_id}"
            ))),
            Entry::Vacant(vacant) => {
                vacant.insert(data.clone());
                Ok(data)
            }
        }
    }

    async fn get(&self, user_id: Uuid) -> AppResult<Option<UserData>> {
        Ok(self.profiles.get(&user_id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, user_id: Uuid, data: UserData) -> AppResult<UserData> {
        self.modify(user_id, |stored| *stored = data)
    }

    async fn delete(&self, user_id: Uuid) -> AppResult<bool> {
        Ok(self.profiles.remove(&user_id).is_some())
    }

    async fn reset_start_date(&self, user_id: Uuid, now: DateTime<Utc>) -> AppResult<UserData> {
        self.modify(user_id, |stored| stored.start_date = now)
    }

    async fn set_emergency_task(
        &self,
        user_id: Uuid,
        task: Option<String>,
    ) -> AppResult<UserData> {
        let task = task.filter(|text| !text.trim().is_empty());
        self.modify(user_id, |stored| stored.emergency_task_personal = task)
    }
}
