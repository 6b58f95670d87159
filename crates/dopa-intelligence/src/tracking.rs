// ABOUTME: Streak arithmetic for the abstinence counter
// ABOUTME: Elapsed whole days, calendar-like breakdown for display, and goal progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! Abstinence tracking
//!
//! All functions take `now` explicitly so callers control the clock.

use chrono::{DateTime, Utc};
use dopa_core::constants::recovery::PERCENT_MAX;
use dopa_core::constants::time::{
    COUNTER_DAYS_PER_MONTH, COUNTER_DAYS_PER_YEAR, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use serde::{Deserialize, Serialize};

/// Whole days between `start` and `now`
///
/// Saturates at 0 when `start` lies in the future.
#[must_use]
pub fn elapsed_days(start: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let seconds = (now - start).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    u32::try_from(seconds / SECONDS_PER_DAY).unwrap_or(u32::MAX)
}

/// One displayable unit of the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterUnit {
    /// 365-day years
    Years,
    /// 30-day months
    Months,
    /// Days
    Days,
    /// Hours
    Hours,
    /// Minutes
    Minutes,
    /// Seconds
    Seconds,
}

impl CounterUnit {
    /// Label for `value` of this unit (singular for 0 and 1)
    #[must_use]
    pub const fn label(self, value: u64) -> &'static str {
        let singular = value <= 1;
        match self {
            Self::Years if singular => "Année",
            Self::Years => "Années",
            Self::Months => "Mois",
            Self::Days if singular => "Jour",
            Self::Days => "Jours",
            Self::Hours if singular => "Heure",
            Self::Hours => "Heures",
            Self::Minutes if singular => "Min",
            Self::Minutes => "Mins",
            Self::Seconds if singular => "Sec",
            Self::Seconds => "Secs",
        }
    }
}

/// Streak duration split into counter units
///
/// Years and months are fixed-length (365 and 30 days), matching what the
/// counter displays rather than calendar arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterBreakdown {
    /// Years
    pub years: u64,
    /// Months
    pub months: u64,
    /// Days
    pub days: u64,
    /// Hours
    pub hours: u64,
    /// Minutes
    pub minutes: u64,
    /// Seconds
    pub seconds: u64,
}

impl CounterBreakdown {
    /// Break down the time elapsed since `start`
    ///
    /// Every unit is zero when `start` lies in the future.
    #[must_use]
    pub fn between(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let Ok(mut remaining) = u64::try_from((now - start).num_seconds()) else {
            return Self::default();
        };

        let day = SECONDS_PER_DAY.unsigned_abs();
        let mut take = |unit: u64| {
            let count = remaining / unit;
            remaining -= count * unit;
            count
        };

        let years = take(COUNTER_DAYS_PER_YEAR * day);
        let months = take(COUNTER_DAYS_PER_MONTH * day);
        let days = take(day);
        let hours = take(SECONDS_PER_HOUR);
        let minutes = take(SECONDS_PER_MINUTE);
        let seconds = take(1);

        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Break down from an optional start; an absent start shows all zeros
    #[must_use]
    pub fn from_optional(start: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        start.map_or_else(Self::default, |start| Self::between(start, now))
    }

    /// Value of one unit
    #[must_use]
    pub const fn value(&self, unit: CounterUnit) -> u64 {
        match unit {
            CounterUnit::Years => self.years,
            CounterUnit::Months => self.months,
            CounterUnit::Days => self.days,
            CounterUnit::Hours => self.hours,
            CounterUnit::Minutes => self.minutes,
            CounterUnit::Seconds => self.seconds,
        }
    }

    /// Units to display, largest first
    ///
    /// Display starts at the largest non-zero unit; seconds are always shown.
    #[must_use]
    pub fn visible_units(&self) -> Vec<CounterUnit> {
        const ORDER: [CounterUnit; 6] = [
            CounterUnit::Years,
            CounterUnit::Months,
            CounterUnit::Days,
            CounterUnit::Hours,
            CounterUnit::Minutes,
            CounterUnit::Seconds,
        ];

        let first = ORDER
            .iter()
            .position(|unit| self.value(*unit) > 0)
            .unwrap_or(ORDER.len() - 1);
        ORDER[first..].to_vec()
    }

    /// Render as `"01 Année 02 Mois 05 Jours ..."`
    #[must_use]
    pub fn render(&self) -> String {
        self.visible_units()
            .into_iter()
            .map(|unit| {
                let value = self.value(unit);
                format!("{value:02} {}", unit.label(value))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Progress towards the abstinence goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Days elapsed
    pub elapsed_days: u32,
    /// Goal in days
    pub target_days: u32,
    /// Completion percentage (0-100)
    pub percent: u8,
    /// Whether the goal is reached
    pub reached: bool,
    /// Days left before the goal (0 once reached)
    pub days_remaining: u32,
}

impl GoalProgress {
    /// Progress after `elapsed_days` towards `target_days`
    #[must_use]
    pub fn new(elapsed_days: u32, target_days: u32) -> Self {
        let percent = if target_days == 0 {
            0
        } else {
            // Safe: clamped to 0..=100 before the cast
            (f64::from(elapsed_days) / f64::from(target_days) * PERCENT_MAX)
                .round()
                .min(PERCENT_MAX) as u8
        };

        Self {
            elapsed_days,
            target_days,
            percent,
            reached: elapsed_days >= target_days,
            days_remaining: target_days.saturating_sub(elapsed_days),
        }
    }
}
