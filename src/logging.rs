// ABOUTME: Structured logging setup for the server and the CLI
// ABOUTME: Picks the output format per environment and quiets HTTP stack noise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! Structured logging configuration
//!
//! `RUST_LOG` always wins. Without it the filter is built from the configured
//! level, applied to the DOPA crates, with the HTTP stack held at `warn`.

use crate::config::environment::{Environment, ServerConfig};
use anyhow::Result;
use dopa_core::constants::{env_config, service_names};
use std::env;
use std::fmt as std_fmt;
use std::io;
use tracing::info;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{registry, EnvFilter};

/// Targets whose own level follows the configured one
const DOPA_TARGETS: [&str; 3] = ["dopa_server", "dopa_intelligence", "dopa_core"];

/// Third-party targets capped regardless of the configured level
const QUIET_TARGETS: [&str; 2] = ["hyper=warn", "tower_http=info"];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per record
    Json,
    /// Full human-readable records
    Pretty,
    /// Single-line records on stderr
    Compact,
}

impl LogFormat {
    /// Parse a format name, falling back to the environment's default
    #[must_use]
    pub fn from_str_or(value: &str, fallback: Self) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" | "full" => Self::Pretty,
            "compact" => Self::Compact,
            _ => fallback,
        }
    }

    /// Default format for a deployment environment
    #[must_use]
    pub const fn for_environment(environment: Environment) -> Self {
        if environment.is_production() {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

impl std_fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level applied to the DOPA crates
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include file and line numbers
    pub include_location: bool,
    /// Service name attached to the startup record
    pub service_name: String,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Pretty,
            include_location: false,
            service_name: service_names::DOPA_SERVER.to_owned(),
            environment: Environment::default(),
        }
    }
}

impl LoggingConfig {
    /// Read `ENVIRONMENT`, `LOG_LEVEL`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION`, and `SERVICE_NAME`
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var(env_config::ENVIRONMENT)
            .map_or_else(|_| Environment::default(), |v| Environment::from_str_or_default(&v));
        let level = env::var(env_config::LOG_LEVEL).unwrap_or_else(|_| "info".to_owned());

        Self::for_environment(environment, level)
    }

    /// Configuration matching an already loaded server configuration
    #[must_use]
    pub fn for_server(config: &ServerConfig) -> Self {
        Self::for_environment(config.environment, config.log_level.to_string())
    }

    /// Compact, quiet configuration for the command-line tool
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        Self {
            level: if verbose { "debug" } else { "warn" }.to_owned(),
            format: LogFormat::Compact,
            service_name: service_names::DOPA_CLI.to_owned(),
            ..Self::default()
        }
    }

    fn for_environment(environment: Environment, level: String) -> Self {
        let format = env::var(env_config::LOG_FORMAT).map_or_else(
            |_| LogFormat::for_environment(environment),
            |v| LogFormat::from_str_or(&v, LogFormat::for_environment(environment)),
        );

        Self {
            level,
            format,
            include_location: environment.is_production()
                || env::var(env_config::LOG_INCLUDE_LOCATION).is_ok(),
            service_name: env::var(env_config::SERVICE_NAME)
                .unwrap_or_else(|_| service_names::DOPA_SERVER.to_owned()),
            environment,
        }
    }

    /// Filter from `RUST_LOG`, or from the configured level
    fn env_filter(&self) -> EnvFilter {
        if let Ok(filter) = env::var(env_config::RUST_LOG) {
            return EnvFilter::new(filter);
        }

        let own = DOPA_TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.level));
        QUIET_TARGETS
            .iter()
            .map(|&directive| directive.to_owned())
            .chain(own)
            .filter_map(|directive| directive.parse::<Directive>().ok())
            .fold(EnvFilter::new("warn"), EnvFilter::add_directive)
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let subscriber = registry().with(self.env_filter());
        let location = self.include_location;

        match self.format {
            LogFormat::Json => subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_current_span(true)
                        .with_file(location)
                        .with_line_number(location)
                        .with_writer(io::stdout),
                )
                .try_init()?,
            LogFormat::Pretty => subscriber
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(location)
                        .with_line_number(location)
                        .with_writer(io::stdout),
                )
                .try_init()?,
            LogFormat::Compact => subscriber
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init()?,
        }

        info!(
            service.name = %self.service_name,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            log.format = %self.format,
            "Logging initialized"
        );
        Ok(())
    }
}
