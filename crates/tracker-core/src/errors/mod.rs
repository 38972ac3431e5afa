// ABOUTME: Unified error handling for the fitness tracker
// ABOUTME: Defines ErrorCode, AppError, and the AppResult alias used by every crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Centralized error type for the fitness tracker. Every fallible operation
//! returns an [`AppError`] carrying a stable [`ErrorCode`], a human-readable
//! message and optional structured details.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Workout input (3100-3199)
    /// Workout code is not present in the lookup table
    #[serde(rename = "UNKNOWN_WORKOUT_TYPE")]
    UnknownWorkoutType = 3100,
    /// Readings do not match the positional contract of the workout type
    #[serde(rename = "INVALID_READINGS")]
    InvalidReadings = 3101,
    /// A reading used as a divisor is zero
    #[serde(rename = "DIVISION_BY_ZERO")]
    DivisionByZero = 3102,

    // Configuration (6000-6999)
    /// Configuration value could not be interpreted
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Report serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "Workout type not found",
            Self::InvalidReadings => "Sensor readings do not match the workout type",
            Self::DivisionByZero => "Metric cannot be computed from a zero reading",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Stable numeric identifier of this code
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured context
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Add details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Workout code absent from the lookup table
    pub fn unknown_workout_type(code: impl Into<String>) -> Self {
        let code = code.into();
        Self::new(
            ErrorCode::UnknownWorkoutType,
            format!("unknown workout code '{code}'"),
        )
        .with_details(serde_json::json!({ "code": code }))
    }

    /// Readings that cannot be applied to the workout constructor
    pub fn invalid_readings(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidReadings, message)
    }

    /// Metric whose formula divides by a zero reading
    pub fn division_by_zero(reading: impl Into<String>) -> Self {
        let reading = reading.into();
        Self::new(
            ErrorCode::DivisionByZero,
            format!("{reading} must not be zero"),
        )
        .with_details(serde_json::json!({ "reading": reading }))
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_workout_type_carries_code() {
        let error = AppError::unknown_workout_type("BIKE");

        assert_eq!(error.code, ErrorCode::UnknownWorkoutType);
        assert_eq!(error.details["code"], "BIKE");
        assert_eq!(
            error.to_string(),
            "Workout type not found: unknown workout code 'BIKE'"
        );
    }

    #[test]
    fn test_division_by_zero_names_reading() {
        let error = AppError::division_by_zero("duration");

        assert_eq!(error.code, ErrorCode::DivisionByZero);
        assert_eq!(error.details["reading"], "duration");
        assert_eq!(error.message, "duration must not be zero");
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InvalidReadings).unwrap();
        assert_eq!(json, "\"INVALID_READINGS\"");
        assert_eq!(ErrorCode::UnknownWorkoutType.as_u16(), 3100);
    }

    #[test]
    fn test_serde_error_conversion_keeps_source() {
        let parse_error = serde_json::from_str::<u32>("not a number").unwrap_err();
        let error = AppError::from(parse_error);

        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(StdError::source(&error).is_some());
    }
}
