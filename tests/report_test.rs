// ABOUTME: Integration tests for report rendering
// ABOUTME: Checks exact summary sentences, locale variants, and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_tracker::dispatch::read_package;
use fitness_tracker::report::{render, InfoMessage, OutputFormat, ReportLocale, ReportOptions};
use fitness_tracker::ErrorCode;

fn message_for(code: &str, readings: &[f64]) -> InfoMessage {
    read_package(code, readings)
        .unwrap()
        .show_training_info()
        .unwrap()
}

#[test]
fn test_demo_package_sentences() {
    assert_eq!(
        message_for("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).get_message(),
        "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
         Mean speed: 1.000 km/h; Calories: 336.000."
    );
    assert_eq!(
        message_for("RUN", &[15000.0, 1.0, 75.0]).get_message(),
        "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
         Mean speed: 9.750 km/h; Calories: 699.750."
    );
    assert_eq!(
        message_for("WLK", &[9000.0, 1.0, 75.0, 180.0]).get_message(),
        "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
         Mean speed: 5.850 km/h; Calories: 157.500."
    );
}

#[test]
fn test_running_calories_third_decimal() {
    assert!(message_for("RUN", &[6750.0, 1.0, 41.0])
        .get_message()
        .ends_with("Calories: 145.079."));
    assert!(message_for("RUN", &[5750.0, 0.5, 41.0])
        .get_message()
        .ends_with("Calories: 140.896."));
}

#[test]
fn test_walking_floor_division_uses_exact_quotient() {
    // 1.0 / 0.1 rounds up to 10.0, the floored quotient is 9
    let message = message_for("WLK", &[1000.0, 0.65, 75.0, 0.1]);
    assert_eq!(format!("{:.3}", message.calories), "865.800");
}

#[test]
fn test_json_render_rejects_nan_readings() {
    let message = message_for("RUN", &[15000.0, f64::NAN, 75.0]);
    let options = ReportOptions {
        format: OutputFormat::Json,
        ..ReportOptions::default()
    };

    let error = render(&message, &options).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_display_matches_english_message() {
    let message = message_for("RUN", &[15000.0, 1.0, 75.0]);
    assert_eq!(message.to_string(), message.get_message());
}

#[test]
fn test_russian_sentence() {
    let message = message_for("RUN", &[15000.0, 1.0, 75.0]);
    assert_eq!(
        message.message(ReportLocale::Russian),
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
    );
}

#[test]
fn test_rounding_happens_only_at_render_time() {
    let message = InfoMessage::new("Running", 0.5, 1.23456, 2.46912, 10.0005);

    assert!(message.get_message().contains("Distance: 1.235 km"));
    assert!((message.distance - 1.23456).abs() < 1e-12);
}

#[test]
fn test_text_render_uses_locale() {
    let message = message_for("WLK", &[9000.0, 1.0, 75.0, 180.0]);
    let options = ReportOptions {
        locale: ReportLocale::Russian,
        format: OutputFormat::Text,
    };

    let rendered = render(&message, &options).unwrap();
    assert!(rendered.starts_with("Тип тренировки: SportsWalking;"));
}

#[test]
fn test_json_render_rounds_metrics() {
    let message = message_for("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]);
    let options = ReportOptions {
        format: OutputFormat::Json,
        ..ReportOptions::default()
    };

    let rendered = render(&message, &options).unwrap();
    let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(json["training_type"], "Swimming");
    assert!((json["distance"].as_f64().unwrap() - 0.994).abs() < 1e-12);
    assert!((json["calories"].as_f64().unwrap() - 336.0).abs() < 1e-12);
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert!("yaml".parse::<OutputFormat>().is_err());
}
