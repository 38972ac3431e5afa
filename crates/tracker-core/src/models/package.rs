// ABOUTME: Raw sensor package model: a workout code plus positional readings
// ABOUTME: Provides the fixed demo package list processed by the CLI by default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Package of readings as delivered by a tracker sensor
///
/// `readings` is positional: action count, duration (hours), weight (kg),
/// then the type-specific values (height for walking; pool length and
/// lap count for swimming).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    /// Three-letter workout code (`SWM`, `RUN`, `WLK`)
    pub code: String,
    /// Positional sensor readings
    pub readings: Vec<f64>,
}

impl WorkoutPackage {
    /// Create a package from a code and its readings
    pub fn new(code: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            readings,
        }
    }

    /// The fixed list of packages processed when no input is given
    #[must_use]
    pub fn demo_packages() -> Vec<Self> {
        vec![
            Self::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            Self::new("RUN", vec![15000.0, 1.0, 75.0]),
            Self::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}
