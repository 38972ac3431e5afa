// ABOUTME: Workout type enumeration for the three supported training kinds
// ABOUTME: Maps three-letter sensor codes to types, display labels, and reading counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::step_length;
use crate::errors::AppError;

/// Kind of workout a sensor package describes
///
/// Each kind has its own calorie formula. `Swimming` also overrides the
/// step length and derives mean speed from pool length and laps instead of
/// the action count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Running, code `RUN`
    Running,
    /// Sports walking, code `WLK`
    SportsWalking,
    /// Pool swimming, code `SWM`
    Swimming,
}

/// Static lookup table from sensor code to workout type
pub const WORKOUT_CODES: [(&str, WorkoutType); 3] = [
    ("SWM", WorkoutType::Swimming),
    ("RUN", WorkoutType::Running),
    ("WLK", WorkoutType::SportsWalking),
];

impl WorkoutType {
    /// All workout types, in lookup table order
    #[must_use]
    pub fn all() -> [Self; 3] {
        WORKOUT_CODES.map(|(_, workout_type)| workout_type)
    }

    /// Three-letter sensor code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Label shown as the training type in reports
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of positional readings a package of this type carries
    ///
    /// The first three are always action count, duration in hours and
    /// weight in kilograms; type-specific readings follow.
    #[must_use]
    pub const fn reading_count(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }

    /// Distance covered by one action, in meters
    #[must_use]
    pub const fn step_length_m(&self) -> f64 {
        match self {
            Self::Running | Self::SportsWalking => step_length::STEP_M,
            Self::Swimming => step_length::STROKE_M,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WORKOUT_CODES
            .iter()
            .find(|(code, _)| *code == s)
            .map(|(_, workout_type)| *workout_type)
            .ok_or_else(|| AppError::unknown_workout_type(s))
    }
}
