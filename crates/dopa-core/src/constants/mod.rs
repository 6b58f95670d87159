// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for projections, recovery curves, onboarding, and storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! Constants module
//!
//! Constants are grouped by domain. Values feeding the statistics engine are
//! defaults only; `IntelligenceConfig` can override them at runtime.

/// Alcohol lookup tables (calories per drink, drinks per week)
pub mod alcohol;

/// Energy and body-composition constants
pub mod physiology {
    /// Kilocalories stored in one kilogram of body fat
    pub const KCAL_PER_KG_FAT: f64 = 7700.0;
}

/// Time conversion constants
pub mod time {
    /// Seconds in one day
    pub const SECONDS_PER_DAY: i64 = 86_400;
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: u64 = 3_600;
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: u64 = 60;
    /// Days in one week
    pub const DAYS_PER_WEEK: f64 = 7.0;
    /// Whole days in one week
    pub const DAYS_PER_WEEK_U32: u32 = 7;
    /// Days counted as one year by the counter display
    pub const COUNTER_DAYS_PER_YEAR: u64 = 365;
    /// Days counted as one month by the counter display
    pub const COUNTER_DAYS_PER_MONTH: u64 = 30;
}

/// Default parameters of the recovery curves
pub mod recovery {
    /// Upper bound of every percentage
    pub const PERCENT_MAX: f64 = 100.0;
    /// Cardio points per day when no resting heart rate is known
    pub const CARDIO_FALLBACK_RATE_PER_DAY: f64 = 1.5;
    /// Largest resting heart rate reduction modelled (bpm)
    pub const HR_MAX_REDUCTION_BPM: f64 = 10.0;
    /// Day at which the heart rate reduction reaches its ceiling
    pub const HR_RAMP_DAYS: f64 = 90.0;
    /// Sleep points per day during the fast phase
    pub const SLEEP_FAST_RATE_PER_DAY: f64 = 3.0;
    /// Ceiling of each sleep phase
    pub const SLEEP_PHASE_CAP: f64 = 50.0;
    /// Day at which the slow sleep phase begins
    pub const SLEEP_SLOW_PHASE_START_DAY: f64 = 17.0;
    /// Sleep points per day during the slow phase
    pub const SLEEP_SLOW_RATE_PER_DAY: f64 = 1.0;
    /// Best possible score on the 1-5 self-assessment scale
    pub const SCALE_MAX: f64 = 5.0;
    /// Liver recovery points per day
    pub const LIVER_RATE_PER_DAY: f64 = 0.3;
    /// Regeneration points per kilogram lost (5 kg reaches 100)
    pub const WEIGHT_NORMALIZATION_PER_KG: f64 = 20.0;
}

/// Onboarding form bounds and presets
pub mod onboarding {
    /// Minimum age
    pub const AGE_MIN: u32 = 13;
    /// Maximum age
    pub const AGE_MAX: u32 = 99;
    /// Minimum height (cm)
    pub const HEIGHT_MIN_CM: f64 = 100.0;
    /// Maximum height (cm)
    pub const HEIGHT_MAX_CM: f64 = 230.0;
    /// Minimum weight (kg)
    pub const WEIGHT_MIN_KG: f64 = 30.0;
    /// Maximum weight (kg)
    pub const WEIGHT_MAX_KG: f64 = 250.0;
    /// Minimum resting heart rate (bpm)
    pub const RESTING_HR_MIN: u32 = 30;
    /// Maximum resting heart rate (bpm)
    pub const RESTING_HR_MAX: u32 = 200;
    /// Lowest value of the 1-5 self-assessment scale
    pub const SCALE_MIN: u8 = 1;
    /// Highest value of the 1-5 self-assessment scale
    pub const SCALE_MAX: u8 = 5;
    /// Default sleep score pre-selected in the form
    pub const DEFAULT_SCALE_SCORE: u8 = 3;
    /// Abstinence goals offered as presets
    pub const TARGET_DAY_PRESETS: [u32; 5] = [30, 60, 90, 180, 365];
    /// Preset selected by default
    pub const DEFAULT_TARGET_DAYS: u32 = 90;
    /// Personal goals offered during onboarding
    pub const PERSONAL_GOALS: [&str; 5] = [
        "Perte de poids",
        "Sommeil",
        "Économies",
        "Santé cardio",
        "Productivité",
    ];
}

/// Badge presentation constants
pub mod badges {
    /// Characters kept when truncating a badge text for display
    pub const LABEL_MAX_CHARS: usize = 50;
    /// Suffix appended to truncated badge texts
    pub const LABEL_ELLIPSIS: &str = "...";
}

/// Key-value store keys
pub mod storage {
    /// Key holding the list of badge usage keys for a user
    pub const USED_BADGES_KEY: &str = "dopa-used-badges";
}

/// Service names for structured logging
pub mod service_names {
    /// HTTP server service name
    pub const DOPA_SERVER: &str = "dopa-server";
    /// CLI service name
    pub const DOPA_CLI: &str = "dopa-cli";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Environment variable names read by the server configuration
pub mod env_config {
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Standard tracing filter, wins over `LOG_LEVEL`
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format: json, pretty, or compact
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include file and line in log records
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Service name attached to log records
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
}
