// ABOUTME: Profile repository abstraction for onboarding records
// ABOUTME: Async trait so storage backends can be swapped without touching the services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

/// In-memory repository implementation
pub mod memory;

pub use memory::InMemoryProfileRepository;

use chrono::{DateTime, Utc};
use dopa_core::errors::AppResult;
use dopa_core::models::UserData;
use uuid::Uuid;

/// Storage for one onboarding record per user
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Store the record created at the end of onboarding
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the user already has a record
    async fn create(&self, user_id: Uuid, data: UserData) -> AppResult<UserData>;

    /// Fetch a user's record
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable
    async fn get(&self, user_id: Uuid) -> AppResult<Option<UserData>>;

    /// Replace a user's record
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user has no record
    async fn update(&self, user_id: Uuid, data: UserData) -> AppResult<UserData>;

    /// Delete a user's record, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable
    async fn delete(&self, user_id: Uuid) -> AppResult<bool>;

    /// Restart the streak at `now`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user has no record
    async fn reset_start_date(&self, user_id: Uuid, now: DateTime<Utc>) -> AppResult<UserData>;

    /// Save or clear the user's personal emergency task
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user has no record
    async fn set_emergency_task(
        &self,
        user_id: Uuid,
        task: Option<String>,
    ) -> AppResult<UserData>;
}
