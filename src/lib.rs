// ABOUTME: Main library entry point for the DOPA abstinence tracker server
// ABOUTME: Wires the statistics engine to storage, HTTP routes, and the command-line tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

#![deny(unsafe_code)]

//! # DOPA Server
//!
//! Backend for an alcohol abstinence tracker. The statistics engine in
//! `dopa-intelligence` turns a user's baseline habits and the number of days
//! since they stopped drinking into calories, money, and drinks avoided, an
//! estimated weight change, and recovery scores. This crate stores onboarding
//! records and badge usage and serves everything over HTTP.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use dopa_server::config::environment::ServerConfig;
//! use dopa_server::resources::ServerResources;
//! use dopa_server::routes;
//! use dopa_intelligence::IntelligenceConfig;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let addr = config.bind_addr();
//!     let resources = Arc::new(ServerResources::in_memory(
//!         config,
//!         IntelligenceConfig::global().clone(),
//!     ));
//!
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, routes::router(resources)).await?;
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Dashboard service composing profiles and the statistics engine
pub mod dashboard;

/// Structured logging setup
pub mod logging;

/// Onboarding record storage
pub mod profiles;

/// Shared server resources
pub mod resources;

/// HTTP routes
pub mod routes;

/// Key-value store and badge usage tracking
pub mod store;

pub use dopa_core::{constants, errors, models};
