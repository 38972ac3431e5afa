// ABOUTME: Environment configuration for report rendering and deployment settings
// ABOUTME: Parses TRACKER_* variables into strongly typed options with lenient fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::warn;
use tracker_core::constants::env_config;
use tracker_core::errors::{AppError, AppResult};

use crate::logging::LoggingConfig;
use crate::report::{OutputFormat, ReportLocale, ReportOptions};

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Complete tracker configuration
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Report rendering options
    pub report: ReportOptions,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// Unrecognized values fall back to their defaults with a warning; use
    /// [`TrackerConfig::validate`] for strict checking.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var(env_config::ENVIRONMENT)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        Self {
            environment,
            report: ReportOptions {
                locale: parse_or_default(env_config::TRACKER_LOCALE),
                format: parse_or_default(env_config::TRACKER_OUTPUT_FORMAT),
            },
            logging: LoggingConfig::from_env(),
        }
    }

    /// Check every tracker variable that is set for a recognized value
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` naming the first variable whose
    /// value cannot be parsed
    pub fn validate() -> AppResult<()> {
        strict_parse::<ReportLocale>(env_config::TRACKER_LOCALE)?;
        strict_parse::<OutputFormat>(env_config::TRACKER_OUTPUT_FORMAT)?;
        Ok(())
    }

    /// One-line configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} locale={} format={:?} log_level={}",
            self.environment,
            self.report.locale.tag(),
            self.report.format,
            self.logging.level
        )
    }
}

fn parse_or_default<T>(var: &str) -> T
where
    T: FromStr<Err = AppError> + Default,
{
    match strict_parse(var) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            warn!("Ignoring {var}: {e}");
            T::default()
        }
    }
}

fn strict_parse<T>(var: &str) -> AppResult<Option<T>>
where
    T: FromStr<Err = AppError>,
{
    env::var(var)
        .ok()
        .map(|value| value.parse())
        .transpose()
        .map_err(|e: AppError| AppError::config(format!("{var}: {}", e.message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_fallback() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }
}
