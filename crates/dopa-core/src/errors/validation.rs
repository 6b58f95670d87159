// ABOUTME: Validation error types for onboarding and baseline profile input
// ABOUTME: Converts field-level failures into AppError with structured details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! # Profile Validation Errors
//!
//! Field-level failures raised at the data-entry boundary, before a profile
//! reaches the statistics engine.

use super::{AppError, ErrorCode};
use thiserror::Error;

/// A single onboarding field that failed validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileValidationError {
    /// Required text field is absent or blank
    #[error("{field} is required")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },
    /// Numeric field outside its accepted bounds
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
        /// Value that was supplied
        value: f64,
    },
    /// Amount that must be zero or positive
    #[error("{field} must be zero or positive (got {value})")]
    Negative {
        /// Name of the offending field
        field: &'static str,
        /// Value that was supplied
        value: f64,
    },
    /// Multi-select field with no selection
    #[error("{field} must contain at least one entry")]
    EmptySelection {
        /// Name of the empty field
        field: &'static str,
    },
}

impl ProfileValidationError {
    /// Create a "missing field" error
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create an "out of range" error
    #[must_use]
    pub const fn out_of_range(field: &'static str, min: f64, max: f64, value: f64) -> Self {
        Self::OutOfRange {
            field,
            min,
            max,
            value,
        }
    }

    /// Create a "negative amount" error
    #[must_use]
    pub const fn negative(field: &'static str, value: f64) -> Self {
        Self::Negative { field, value }
    }

    /// Create an "empty selection" error
    #[must_use]
    pub const fn empty(field: &'static str) -> Self {
        Self::EmptySelection { field }
    }

    /// Name of the field that failed
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::OutOfRange { field, .. }
            | Self::Negative { field, .. }
            | Self::EmptySelection { field } => field,
        }
    }

    /// Error code this failure maps to
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingField { .. } | Self::EmptySelection { .. } => {
                ErrorCode::MissingRequiredField
            }
            Self::OutOfRange { .. } | Self::Negative { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}

impl From<ProfileValidationError> for AppError {
    fn from(error: ProfileValidationError) -> Self {
        Self::new(error.error_code(), error.to_string())
            .with_details(serde_json::json!({ "field": error.field() }))
    }
}
