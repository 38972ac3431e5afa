// ABOUTME: Pure per-workout formulas for distance, mean speed, and calories
// ABOUTME: Each function evaluates one formula in full f64 precision, no rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Formulas are evaluated left to right with one rounding per operation;
//! fused multiply-add would shift the third decimal of rendered calories.
//! A zero divisor is an error rather than an infinite or NaN metric.

use tracker_core::constants::{running, sports_walking, swimming, units};
use tracker_core::errors::{AppError, AppResult};

/// Distance in kilometers covered by `action_count` steps or strokes
#[must_use]
pub fn distance_km(action_count: u32, step_length_m: f64) -> f64 {
    f64::from(action_count) * step_length_m / units::METERS_PER_KM
}

/// Mean speed in km/h over `duration_hours`
///
/// # Errors
///
/// Returns `ErrorCode::DivisionByZero` if `duration_hours` is zero
pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> AppResult<f64> {
    divide(distance_km, duration_hours, "duration")
}

/// Mean swimming speed in km/h, derived from the pool instead of strokes
///
/// # Errors
///
/// Returns `ErrorCode::DivisionByZero` if `duration_hours` is zero
pub fn swimming_mean_speed_kmh(
    pool_length_m: f64,
    pool_laps: u32,
    duration_hours: f64,
) -> AppResult<f64> {
    let pool_distance_m = pool_length_m * f64::from(pool_laps);
    divide(pool_distance_m / units::METERS_PER_KM, duration_hours, "duration")
}

/// Calories spent running
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn running_calories(mean_speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
    let speed_weight = (running::CALORIES_SPEED_MULTIPLIER * mean_speed_kmh
        - running::CALORIES_SPEED_SHIFT)
        * weight_kg;
    speed_weight / units::METERS_PER_KM * (duration_hours * units::MINUTES_PER_HOUR)
}

/// Calories spent sports walking
///
/// The speed/height term is floor-divided, so it contributes nothing until
/// the squared speed reaches the height in centimeters.
///
/// # Errors
///
/// Returns `ErrorCode::DivisionByZero` if `height_cm` is zero
#[allow(clippy::suboptimal_flops)]
pub fn sports_walking_calories(
    mean_speed_kmh: f64,
    weight_kg: f64,
    height_cm: f64,
    duration_hours: f64,
) -> AppResult<f64> {
    let base = sports_walking::CALORIES_WEIGHT_MULTIPLIER * weight_kg;
    let speed_height = floor_div(
        mean_speed_kmh.powi(sports_walking::CALORIES_SPEED_EXPONENT),
        height_cm,
        "height",
    )?;
    let height_weight = sports_walking::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight_kg;
    Ok((base + speed_height * height_weight) * (duration_hours * units::MINUTES_PER_HOUR))
}

/// Calories spent swimming
#[must_use]
pub fn swimming_calories(mean_speed_kmh: f64, weight_kg: f64) -> f64 {
    (mean_speed_kmh + swimming::CALORIES_SPEED_SHIFT)
        * swimming::CALORIES_WEIGHT_MULTIPLIER
        * weight_kg
}

/// Floor division on floats, derived from the remainder
///
/// `floor(a / b)` rounds the quotient before flooring and can land one above
/// the true floor (`1.0 / 0.1` floors to 10, the exact quotient is below 10).
/// Computing `(a - a % b) / b` and correcting by the remainder sign avoids it.
///
/// # Errors
///
/// Returns `ErrorCode::DivisionByZero` if `divisor` is zero
pub fn floor_div(dividend: f64, divisor: f64, reading: &str) -> AppResult<f64> {
    if divisor == 0.0 {
        return Err(AppError::division_by_zero(reading));
    }

    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    if remainder != 0.0 && (remainder < 0.0) != (divisor < 0.0) {
        quotient -= 1.0;
    }

    if quotient == 0.0 {
        return Ok(0.0_f64.copysign(dividend / divisor));
    }
    let mut floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored += 1.0;
    }
    Ok(floored)
}

fn divide(dividend: f64, divisor: f64, reading: &str) -> AppResult<f64> {
    if divisor == 0.0 {
        return Err(AppError::division_by_zero(reading));
    }
    Ok(dividend / divisor)
}
