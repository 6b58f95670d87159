// ABOUTME: Core types and constants for the DOPA abstinence tracking platform
// ABOUTME: Foundation crate with error handling, domain models, and lookup constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

#![deny(unsafe_code)]

//! # DOPA Core
//!
//! Foundation crate providing shared types and constants for the DOPA
//! abstinence tracker. It has no knowledge of HTTP routing or storage and is
//! meant to change rarely.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and profile validation errors
//! - **constants**: Lookup tables and domain constants (calories, frequencies, onboarding bounds)
//! - **models**: Baseline profile, onboarding record, derived statistics, badges

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile, statistics bundle, badges)
pub mod models;
