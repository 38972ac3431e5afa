// ABOUTME: Main library entry point for the fitness tracker calculator
// ABOUTME: Computes distance, mean speed, and calories for running, walking, and swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Tracker
//!
//! Turns raw tracker sensor packages into workout summaries. A package is a
//! three-letter workout code plus a list of positional readings; the
//! dispatch factory builds a [`training::Training`] from it, the training
//! computes its metrics and the report module renders them.
//!
//! ## Example Usage
//!
//! ```rust
//! use fitness_tracker::dispatch::read_package;
//!
//! let training = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! assert_eq!(
//!     training.show_training_info()?.get_message(),
//!     "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
//!      Mean speed: 9.750 km/h; Calories: 699.750."
//! );
//! # Ok::<(), fitness_tracker::AppError>(())
//! ```

/// Environment-based configuration
pub mod config;

/// Dispatch factory from workout code and readings to a training record
pub mod dispatch;

/// Structured logging setup
pub mod logging;

/// Training summary message and rendering
pub mod report;

/// Pipeline processing sensor packages into report lines
pub mod tracker;

/// Training records and per-kind formulas
pub mod training;

pub use tracker_core::errors::{AppError, AppResult, ErrorCode};
pub use tracker_core::models::{WorkoutPackage, WorkoutType};
