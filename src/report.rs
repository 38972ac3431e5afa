// ABOUTME: Training summary message and its text/JSON rendering
// ABOUTME: Renders the four workout metrics at three decimals in English or Russian
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Report formatter
//!
//! [`InfoMessage`] keeps full precision; rounding to
//! [`REPORT_PRECISION`] decimals happens only when it is rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracker_core::constants::REPORT_PRECISION;
use tracker_core::errors::{AppError, AppResult, ErrorCode};

/// Language of the rendered summary sentence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLocale {
    /// English sentence
    #[default]
    English,
    /// Russian sentence
    Russian,
}

impl ReportLocale {
    /// Short language tag (`en`, `ru`)
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }
}

impl FromStr for ReportLocale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ru" | "russian" => Ok(Self::Russian),
            other => Err(AppError::config(format!(
                "Unknown report locale: '{other}'. Valid options: en, ru"
            ))),
        }
    }
}

/// How a report is written to the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One summary sentence per workout
    #[default]
    Text,
    /// One JSON object per workout
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            ))),
        }
    }
}

/// Rendering options for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Sentence language for text output
    pub locale: ReportLocale,
    /// Output format
    pub format: OutputFormat,
}

/// Summary of one completed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Workout type label (`Running`, `SportsWalking`, `Swimming`)
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Calories spent
    pub calories: f64,
}

impl InfoMessage {
    /// Create a message from already computed metrics
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// English summary sentence
    #[must_use]
    pub fn get_message(&self) -> String {
        self.message(ReportLocale::English)
    }

    /// Summary sentence in the requested language
    #[must_use]
    pub fn message(&self, locale: ReportLocale) -> String {
        let p = REPORT_PRECISION;
        let Self {
            training_type,
            duration,
            distance,
            speed,
            calories,
        } = self;
        match locale {
            ReportLocale::English => format!(
                "Training type: {training_type}; Duration: {duration:.p$} h.; \
                 Distance: {distance:.p$} km; Mean speed: {speed:.p$} km/h; \
                 Calories: {calories:.p$}."
            ),
            ReportLocale::Russian => format!(
                "Тип тренировки: {training_type}; Длительность: {duration:.p$} ч.; \
                 Дистанция: {distance:.p$} км; Ср. скорость: {speed:.p$} км/ч; \
                 Потрачено ккал: {calories:.p$}."
            ),
        }
    }

    /// Copy of this message with every metric rounded for display
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            training_type: self.training_type.clone(),
            duration: round3(self.duration),
            distance: round3(self.distance),
            speed: round3(self.speed),
            calories: round3(self.calories),
        }
    }

    /// Whether every metric is a finite number
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.duration, self.distance, self.speed, self.calories]
            .into_iter()
            .all(f64::is_finite)
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

/// Round to the report precision (three decimal places)
#[must_use]
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Render a message according to `options`
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if JSON output is requested and
/// the message cannot be serialized; JSON has no encoding for infinite or
/// NaN metrics
pub fn render(message: &InfoMessage, options: &ReportOptions) -> AppResult<String> {
    match options.format {
        OutputFormat::Text => Ok(message.message(options.locale)),
        OutputFormat::Json if !message.is_finite() => Err(AppError::new(
            ErrorCode::SerializationError,
            format!("{} metrics are not finite", message.training_type),
        )
        .with_details(serde_json::to_value(message)?)),
        OutputFormat::Json => Ok(serde_json::to_string(&message.rounded())?),
    }
}
