// ABOUTME: Application constants for unit conversions and workout formula coefficients
// ABOUTME: Provides named constants to eliminate magic numbers in training calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain. Formula coefficients are kept next to the
//! workout they belong to so each calorie formula reads top to bottom.

/// Unit conversion factors
pub mod units {
    /// Meters per kilometer conversion factor
    pub const METERS_PER_KM: f64 = 1000.0;

    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Distance covered by a single action (step or stroke), in meters
pub mod step_length {
    /// Length of one step for running and sports walking
    pub const STEP_M: f64 = 0.65;

    /// Length of one stroke for swimming
    pub const STROKE_M: f64 = 1.38;
}

/// Running calorie formula: `(18 * speed - 20) * weight / 1000 * minutes`
pub mod running {
    /// Speed multiplier
    pub const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;

    /// Speed shift subtracted after scaling
    pub const CALORIES_SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking calorie formula:
/// `(0.035 * weight + floor(speed^2 / height) * 0.029 * weight) * minutes`
pub mod sports_walking {
    /// Weight multiplier of the base term
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Exponent applied to mean speed
    pub const CALORIES_SPEED_EXPONENT: i32 = 2;

    /// Weight multiplier of the speed/height term
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie formula: `(speed + 1.1) * 2 * weight`
pub mod swimming {
    /// Shift added to the mean speed
    pub const CALORIES_SPEED_SHIFT: f64 = 1.1;

    /// Weight multiplier
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Service identification used in structured logs
pub mod service_names {
    /// Name of the tracker service
    pub const FITNESS_TRACKER: &str = "fitness-tracker";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Report language (`en` or `ru`)
    pub const TRACKER_LOCALE: &str = "TRACKER_LOCALE";

    /// Report output format (`text` or `json`)
    pub const TRACKER_OUTPUT_FORMAT: &str = "TRACKER_OUTPUT_FORMAT";

    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Decimal places used when rendering report metrics
pub const REPORT_PRECISION: usize = 3;
