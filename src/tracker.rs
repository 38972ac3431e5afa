// ABOUTME: Tracker pipeline: dispatch, compute, and format one report line per package
// ABOUTME: Processes packages in order and stops at the first failing package
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::info;
use tracker_core::errors::AppResult;
use tracker_core::models::WorkoutPackage;

use crate::dispatch::read_workout_package;
use crate::report::{render, ReportOptions};

/// Turns sensor packages into rendered report lines
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutTracker {
    options: ReportOptions,
}

impl WorkoutTracker {
    /// Create a tracker rendering with `options`
    #[must_use]
    pub const fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Rendering options in use
    #[must_use]
    pub const fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Dispatch, compute, and render a single package
    ///
    /// # Errors
    ///
    /// Returns the dispatch error for an unknown code or malformed readings,
    /// or a serialization error from JSON rendering
    pub fn summarize(&self, package: &WorkoutPackage) -> AppResult<String> {
        let training = read_workout_package(package)?;
        let message = training.show_training_info()?;
        info!(
            workout.kind = %training.workout_type(),
            workout.distance_km = message.distance,
            workout.calories = message.calories,
            "Workout summarized"
        );
        render(&message, &self.options)
    }

    /// Summarize every package in order
    ///
    /// # Errors
    ///
    /// Returns the error of the first package that fails; later packages are
    /// not processed
    pub fn summarize_all(&self, packages: &[WorkoutPackage]) -> AppResult<Vec<String>> {
        packages
            .iter()
            .map(|package| self.summarize(package))
            .collect()
    }
}
