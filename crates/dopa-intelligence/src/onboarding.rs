// ABOUTME: Validation of the onboarding record before it is stored
// ABOUTME: Field bounds for identity, body measurements, habits, and goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! Onboarding validation
//!
//! Checks run in form order and stop at the first failing field. The
//! statistics engine tolerates anything; these rules keep nonsense out of
//! storage.

use dopa_core::constants::onboarding::{
    AGE_MAX, AGE_MIN, HEIGHT_MAX_CM, HEIGHT_MIN_CM, RESTING_HR_MAX, RESTING_HR_MIN, SCALE_MAX,
    SCALE_MIN, WEIGHT_MAX_KG, WEIGHT_MIN_KG,
};
use dopa_core::errors::ProfileValidationError;
use dopa_core::models::{UserBaselineProfile, UserData};

type ValidationResult = Result<(), ProfileValidationError>;

/// Validate a complete onboarding record
///
/// # Errors
///
/// Returns the first field that fails its rule
pub fn validate_user_data(data: &UserData) -> ValidationResult {
    require_text("first_name", &data.first_name)?;
    require_text("last_name", &data.last_name)?;
    require_range(
        "age",
        f64::from(data.age),
        f64::from(AGE_MIN),
        f64::from(AGE_MAX),
    )?;
    require_range("height_cm", data.height_cm, HEIGHT_MIN_CM, HEIGHT_MAX_CM)?;
    require_range(
        "current_weight_kg",
        data.current_weight_kg,
        WEIGHT_MIN_KG,
        WEIGHT_MAX_KG,
    )?;
    if let Some(weight) = data.weight_before_stop_kg {
        require_range("weight_before_stop_kg", weight, WEIGHT_MIN_KG, WEIGHT_MAX_KG)?;
    }

    validate_baseline(&data.baseline)?;

    if data.personal_goals.iter().all(|goal| goal.trim().is_empty()) {
        return Err(ProfileValidationError::empty("personal_goals"));
    }

    Ok(())
}

/// Validate the habits and health indicators of a profile
///
/// # Errors
///
/// Returns the first field that fails its rule
pub fn validate_baseline(profile: &UserBaselineProfile) -> ValidationResult {
    if profile.alcohol_types.iter().all(|t| t.trim().is_empty()) {
        return Err(ProfileValidationError::empty("alcohol_types"));
    }
    require_text("consumption_frequency", &profile.consumption_frequency)?;

    if profile.weekly_budget.is_nan() || profile.weekly_budget < 0.0 {
        return Err(ProfileValidationError::negative(
            "weekly_budget",
            profile.weekly_budget,
        ));
    }

    require_scale("baseline_sleep_quality", profile.baseline_sleep_quality)?;
    require_scale("baseline_energy", profile.baseline_energy)?;
    require_scale("baseline_stress", profile.baseline_stress)?;

    if let Some(bpm) = profile.resting_heart_rate {
        require_range(
            "resting_heart_rate",
            f64::from(bpm),
            f64::from(RESTING_HR_MIN),
            f64::from(RESTING_HR_MAX),
        )?;
    }

    if profile.days_target == 0 {
        return Err(ProfileValidationError::out_of_range(
            "days_target",
            1.0,
            f64::from(u32::MAX),
            0.0,
        ));
    }

    Ok(())
}

fn require_text(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        Err(ProfileValidationError::missing(field))
    } else {
        Ok(())
    }
}

fn require_range(field: &'static str, value: f64, min: f64, max: f64) -> ValidationResult {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ProfileValidationError::out_of_range(field, min, max, value))
    }
}

fn require_scale(field: &'static str, value: u8) -> ValidationResult {
    require_range(
        field,
        f64::from(value),
        f64::from(SCALE_MIN),
        f64::from(SCALE_MAX),
    )
}
