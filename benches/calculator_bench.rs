// ABOUTME: Criterion benchmarks for the metrics and nutrition calculators
// ABOUTME: Measures single-profile latency and parallel batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the calculation engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitness_ai::intelligence::{
    compute_metrics, compute_metrics_batch, compute_nutrition_needs, IntelligenceConfig,
};
use fitness_ai::models::{ActivityLevel, BodyProfile, FitnessGoal, Gender};

const BATCH_SIZES: [usize; 3] = [10, 100, 1000];

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn generate_profiles(count: usize) -> Vec<BodyProfile> {
    (0..count)
        .map(|index| BodyProfile {
            weight_kg: 50.0 + (index % 60) as f64,
            height_cm: 150.0 + (index % 45) as f64,
            age: 18 + (index % 60) as u32,
            gender: if index % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            },
        })
        .collect()
}

fn bench_metrics(c: &mut Criterion) {
    let config = IntelligenceConfig::default();
    let profile = generate_profiles(1)[0];

    c.bench_function("compute_metrics", |b| {
        b.iter(|| compute_metrics(black_box(&profile), black_box(&config)));
    });
}

fn bench_nutrition(c: &mut Criterion) {
    let config = IntelligenceConfig::default();
    let profile = generate_profiles(1)[0];
    let mut group = c.benchmark_group("compute_nutrition_needs");

    for goal in FitnessGoal::NUTRITION_GOALS {
        group.bench_with_input(BenchmarkId::from_parameter(goal), &goal, |b, &goal| {
            b.iter(|| {
                compute_nutrition_needs(
                    black_box(&profile),
                    ActivityLevel::Moderate,
                    goal,
                    black_box(&config),
                )
            });
        });
    }
    group.finish();
}

fn bench_metrics_batch(c: &mut Criterion) {
    let config = IntelligenceConfig::default();
    let mut group = c.benchmark_group("compute_metrics_batch");

    for size in BATCH_SIZES {
        let profiles = generate_profiles(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &profiles, |b, profiles| {
            b.iter(|| compute_metrics_batch(black_box(profiles), black_box(&config)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_metrics,
    bench_nutrition,
    bench_metrics_batch
);
criterion_main!(benches);
