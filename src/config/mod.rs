// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-driven server config and re-exports of the statistics engine config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors
//! Configuration module for the DOPA server
//!
//! - **Environment**: server configuration from environment variables
//! - **Intelligence**: statistics engine parameters, loaded by `dopa-intelligence`

/// Environment and server configuration
pub mod environment;

pub use dopa_intelligence::config::intelligence::{ConfigError, IntelligenceConfig};
pub use environment::{Environment, LogLevel, ServerConfig};
