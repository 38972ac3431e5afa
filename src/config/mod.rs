// ABOUTME: Configuration management module for tracker settings
// ABOUTME: Loads report and logging options from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the fitness tracker
//!
//! Configuration is environment-only; the CLI may override individual values
//! after loading.

/// Environment-based tracker configuration
pub mod environment;

pub use environment::{Environment, TrackerConfig};
