// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses bind address, port, log level, and deployment mode from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! Environment-based configuration management

use anyhow::{Context, Result};
use dopa_core::constants::{env_config, ports};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::{warn, Level};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if running in production
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if running in development
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: IpAddr,
    /// HTTP port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            http_port: ports::DEFAULT_HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` or `HOST` is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let http_port = match env::var(env_config::HTTP_PORT) {
            Ok(port) => port
                .parse()
                .with_context(|| format!("Invalid {}: {port}", env_config::HTTP_PORT))?,
            Err(_) => defaults.http_port,
        };

        let host = match env::var(env_config::HOST) {
            Ok(host) => host
                .parse()
                .with_context(|| format!("Invalid {}: {host}", env_config::HOST))?,
            Err(_) => defaults.host,
        };

        let log_level = env::var(env_config::LOG_LEVEL)
            .map_or(defaults.log_level, |level| LogLevel::from_str_or_default(&level));

        let environment = env::var(env_config::ENVIRONMENT)
            .map_or(defaults.environment, |value| {
                Environment::from_str_or_default(&value)
            });

        let config = Self {
            host,
            http_port,
            log_level,
            environment,
        };
        config.validate();
        Ok(config)
    }

    /// Warn about settings that are legal but likely unintended
    fn validate(&self) {
        if self.environment.is_production() && self.host.is_loopback() {
            warn!(
                host = %self.host,
                "Production environment bound to a loopback address"
            );
        }
        if self.http_port == 0 {
            warn!("HTTP port 0 requested, the OS will pick an ephemeral port");
        }
    }

    /// Socket address to bind
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "DOPA server configuration: bind={} environment={} log_level={}",
            self.bind_addr(),
            self.environment,
            self.log_level
        )
    }
}
