// ABOUTME: Training record and per-kind metric computation (distance, speed, calories)
// ABOUTME: Models the three workout kinds as a tagged enum carrying kind-specific fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training
//!
//! A [`Training`] holds the readings every workout shares (action count,
//! duration, weight) and a [`TrainingKind`] with the extra readings of its
//! kind. Metrics are derived on demand and never stored.
//!
//! ```rust
//! use fitness_tracker::training::Training;
//!
//! let training = Training::running(15000, 1.0, 75.0);
//! assert!((training.distance_km() - 9.75).abs() < 1e-9);
//! assert!((training.spent_calories()? - 699.75).abs() < 1e-9);
//! # Ok::<(), fitness_tracker::AppError>(())
//! ```

/// Pure formula functions used by each training kind
pub mod formulas;

use serde::{Deserialize, Serialize};
use tracker_core::errors::AppResult;
use tracker_core::models::WorkoutType;

use crate::report::InfoMessage;

/// Kind-specific part of a training record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrainingKind {
    /// Running: no extra readings
    Running,
    /// Sports walking
    SportsWalking {
        /// Athlete height in centimeters
        height_cm: f64,
    },
    /// Pool swimming
    Swimming {
        /// Pool length in meters
        pool_length_m: f64,
        /// Number of pool lengths swum
        pool_laps: u32,
    },
}

impl TrainingKind {
    /// Workout type this kind belongs to
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Running => WorkoutType::Running,
            Self::SportsWalking { .. } => WorkoutType::SportsWalking,
            Self::Swimming { .. } => WorkoutType::Swimming,
        }
    }
}

/// One completed workout, built from a sensor package
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Training {
    /// Number of steps or strokes
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Kind-specific readings
    pub kind: TrainingKind,
}

impl Training {
    /// Running workout
    #[must_use]
    pub const fn running(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            kind: TrainingKind::Running,
        }
    }

    /// Sports walking workout
    #[must_use]
    pub const fn sports_walking(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            kind: TrainingKind::SportsWalking { height_cm },
        }
    }

    /// Pool swimming workout
    #[must_use]
    pub const fn swimming(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            kind: TrainingKind::Swimming {
                pool_length_m,
                pool_laps,
            },
        }
    }

    /// Workout type of this record
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        self.kind.workout_type()
    }

    /// Distance covered, in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        formulas::distance_km(self.action_count, self.workout_type().step_length_m())
    }

    /// Mean speed, in km/h
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::DivisionByZero` if the duration is zero
    pub fn mean_speed_kmh(&self) -> AppResult<f64> {
        match self.kind {
            TrainingKind::Swimming {
                pool_length_m,
                pool_laps,
            } => formulas::swimming_mean_speed_kmh(pool_length_m, pool_laps, self.duration_hours),
            TrainingKind::Running | TrainingKind::SportsWalking { .. } => {
                formulas::mean_speed_kmh(self.distance_km(), self.duration_hours)
            }
        }
    }

    /// Calories spent during the workout
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::DivisionByZero` if the duration is zero, or the
    /// height of a sports walking workout is zero
    pub fn spent_calories(&self) -> AppResult<f64> {
        let speed = self.mean_speed_kmh()?;
        match self.kind {
            TrainingKind::Running => Ok(formulas::running_calories(
                speed,
                self.weight_kg,
                self.duration_hours,
            )),
            TrainingKind::SportsWalking { height_cm } => formulas::sports_walking_calories(
                speed,
                self.weight_kg,
                height_cm,
                self.duration_hours,
            ),
            TrainingKind::Swimming { .. } => {
                Ok(formulas::swimming_calories(speed, self.weight_kg))
            }
        }
    }

    /// Summary message with every metric of this workout
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::DivisionByZero` if a metric divides by a zero
    /// reading
    pub fn show_training_info(&self) -> AppResult<InfoMessage> {
        Ok(InfoMessage::new(
            self.workout_type().label(),
            self.duration_hours,
            self.distance_km(),
            self.mean_speed_kmh()?,
            self.spent_calories()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::errors::ErrorCode;

    #[test]
    fn test_swimming_distance_uses_stroke_length() {
        let training = Training::swimming(720, 1.0, 80.0, 25.0, 40);
        assert!((training.distance_km() - 0.9936).abs() < 1e-9);
    }

    #[test]
    fn test_swimming_speed_uses_pool() {
        let training = Training::swimming(720, 1.0, 80.0, 25.0, 40);
        // the pool gives 1.0 km/h even though strokes cover 0.9936 km
        assert!((training.mean_speed_kmh().unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_kind_maps_to_workout_type() {
        assert_eq!(
            Training::sports_walking(9000, 1.0, 75.0, 180.0).workout_type(),
            WorkoutType::SportsWalking
        );
        assert_eq!(
            Training::running(15000, 1.0, 75.0).workout_type(),
            WorkoutType::Running
        );
    }

    #[test]
    fn test_training_info_uses_kind_label() {
        let info = Training::running(15000, 1.0, 75.0)
            .show_training_info()
            .unwrap();
        assert_eq!(info.training_type, "Running");
    }

    #[test]
    fn test_zero_height_stops_walking_calories() {
        let training = Training::sports_walking(9000, 1.0, 75.0, 0.0);
        assert!(training.mean_speed_kmh().is_ok());

        let error = training.spent_calories().unwrap_err();
        assert_eq!(error.code, ErrorCode::DivisionByZero);
        assert_eq!(error.details["reading"], "height");
    }
}
