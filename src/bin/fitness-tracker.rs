// ABOUTME: Fitness tracker CLI - prints workout summaries for sensor packages
// ABOUTME: Runs the built-in demo packages or a single package given on the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Summarize the built-in demo packages (SWM, RUN, WLK)
//! fitness-tracker
//!
//! # Summarize one package
//! fitness-tracker compute RUN 15000 1 75
//!
//! # Same, as JSON, with Russian text for the demo run
//! fitness-tracker --format json compute WLK 9000 1 75 180
//! fitness-tracker --locale ru demo
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitness_tracker::{
    config::TrackerConfig,
    report::{OutputFormat, ReportLocale},
    tracker::WorkoutTracker,
    WorkoutPackage,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "fitness-tracker",
    about = "Fitness tracker workout summaries",
    long_about = "Computes distance, mean speed, and calories for running (RUN), \
                  sports walking (WLK), and swimming (SWM) sensor packages."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Output format override (text, json)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Report language override (en, ru)
    #[arg(long, global = true)]
    locale: Option<ReportLocale>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize the built-in demo packages
    Demo,

    /// Summarize a single sensor package
    Compute {
        /// Workout code (SWM, RUN, WLK)
        code: String,

        /// Positional readings: actions, hours, kg, then kind-specific values
        #[arg(required = true, allow_negative_numbers = true)]
        readings: Vec<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TrackerConfig::from_env();
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if let Some(locale) = cli.locale {
        config.report.locale = locale;
    }
    if cli.verbose {
        config.logging = config.logging.verbose();
    }

    config.logging.init()?;
    if let Err(e) = TrackerConfig::validate() {
        warn!("Falling back to defaults: {e}");
    }
    let summary = config.summary();
    info!("{summary}");

    let packages = match cli.command {
        None | Some(Command::Demo) => WorkoutPackage::demo_packages(),
        Some(Command::Compute { code, readings }) => vec![WorkoutPackage::new(code, readings)],
    };

    let tracker = WorkoutTracker::new(config.report);
    for package in &packages {
        let line = tracker.summarize(package)?;
        println!("{line}");
    }

    Ok(())
}
