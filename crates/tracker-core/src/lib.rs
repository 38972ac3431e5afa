// ABOUTME: Core types and constants for the fitness tracker calculator
// ABOUTME: Foundation crate with error handling, formula constants, and workout models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Tracker Core
//!
//! Foundation crate providing shared types and constants for the fitness
//! tracker. This crate is designed to change infrequently: the formula
//! coefficients and the workout code table live here, while the calculations
//! themselves live in the `fitness_tracker` crate.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Unit conversions and per-workout formula coefficients
//! - **models**: `WorkoutType` and the raw `WorkoutPackage` delivered by sensors

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversions and formula coefficients organized by workout type
pub mod constants;

/// Core data models (`WorkoutType`, `WorkoutPackage`)
pub mod models;
