// ABOUTME: Dispatch factory turning a workout code and positional readings into a Training
// ABOUTME: Resolves the code through the static lookup table and applies readings in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dispatch factory
//!
//! Readings are positional. The first three are action count, duration in
//! hours and weight in kilograms for every workout type; walking adds
//! height, swimming adds pool length and lap count.
//!
//! Apart from the unknown-code check, readings are not range-checked here.
//! A zero duration or walking height is rejected later, when the metric
//! that divides by it is computed.

use tracing::debug;
use tracker_core::errors::{AppError, AppResult};
use tracker_core::models::{WorkoutPackage, WorkoutType};

use crate::training::Training;

/// Build a [`Training`] from a sensor code and its readings
///
/// # Errors
///
/// - `ErrorCode::UnknownWorkoutType` if `code` is not `SWM`, `RUN` or `WLK`
/// - `ErrorCode::InvalidReadings` if the number of readings does not match
///   the workout type, or a count reading is not a non-negative whole number
pub fn read_package(code: &str, readings: &[f64]) -> AppResult<Training> {
    let workout_type: WorkoutType = code.parse()?;

    let expected = workout_type.reading_count();
    if readings.len() != expected {
        return Err(AppError::invalid_readings(format!(
            "{} expects {expected} readings, got {}",
            workout_type.label(),
            readings.len()
        ))
        .with_details(serde_json::json!({
            "code": code,
            "expected": expected,
            "received": readings.len(),
        })));
    }

    let action_count = count_reading("action count", readings[0])?;
    let duration_hours = readings[1];
    let weight_kg = readings[2];

    let training = match workout_type {
        WorkoutType::Running => Training::running(action_count, duration_hours, weight_kg),
        WorkoutType::SportsWalking => {
            Training::sports_walking(action_count, duration_hours, weight_kg, readings[3])
        }
        WorkoutType::Swimming => Training::swimming(
            action_count,
            duration_hours,
            weight_kg,
            readings[3],
            count_reading("pool laps", readings[4])?,
        ),
    };

    debug!(
        workout.code = %code,
        workout.kind = %workout_type,
        workout.actions = action_count,
        "Sensor package dispatched"
    );

    Ok(training)
}

/// Build a [`Training`] from a [`WorkoutPackage`]
///
/// # Errors
///
/// Same as [`read_package`]
pub fn read_workout_package(package: &WorkoutPackage) -> AppResult<Training> {
    read_package(&package.code, &package.readings)
}

/// Interpret a reading that counts things (steps, strokes, laps)
fn count_reading(name: &str, value: f64) -> AppResult<u32> {
    if value.is_finite() && value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(AppError::invalid_readings(format!(
            "{name} must be a non-negative whole number, got {value}"
        )))
    }
}
