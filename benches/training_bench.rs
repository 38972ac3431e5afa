// ABOUTME: Criterion benchmarks for workout dispatch, metrics, and report rendering
// ABOUTME: Measures single-package latency and batch throughput of the tracker pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the tracker pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fitness_tracker::dispatch::read_package;
use fitness_tracker::report::{render, OutputFormat, ReportOptions};
use fitness_tracker::tracker::WorkoutTracker;
use fitness_tracker::WorkoutPackage;

/// Number of packages in the batch benchmark
const BATCH_SIZE: usize = 300;

fn generate_packages(count: usize) -> Vec<WorkoutPackage> {
    WorkoutPackage::demo_packages()
        .into_iter()
        .cycle()
        .take(count)
        .collect()
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    group.bench_function("read_package_swimming", |b| {
        let readings = [720.0, 1.0, 80.0, 25.0, 40.0];
        b.iter(|| read_package(black_box("SWM"), black_box(&readings)));
    });

    group.bench_function("unknown_code", |b| {
        let readings = [1000.0, 1.0, 75.0];
        b.iter(|| read_package(black_box("BIK"), black_box(&readings)));
    });

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    let message = read_package("RUN", &[15000.0, 1.0, 75.0])
        .and_then(|training| training.show_training_info());

    if let Ok(message) = message {
        group.bench_function("render_text", |b| {
            let options = ReportOptions::default();
            b.iter(|| render(black_box(&message), &options));
        });

        group.bench_function("render_json", |b| {
            let options = ReportOptions {
                format: OutputFormat::Json,
                ..ReportOptions::default()
            };
            b.iter(|| render(black_box(&message), &options));
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let packages = generate_packages(BATCH_SIZE);
    let tracker = WorkoutTracker::default();

    group.throughput(Throughput::Elements(packages.len() as u64));
    group.bench_function("summarize_batch", |b| {
        b.iter(|| tracker.summarize_all(black_box(&packages)));
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_report, bench_pipeline);
criterion_main!(benches);
