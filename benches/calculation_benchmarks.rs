//! Performance benchmarks for the Wage Progression Engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Single adjusted wage computation: < 1μs mean
//! - Full 15-month series with compensation: < 10μs mean
//! - Single progression request through the router: < 1ms mean
//! - Batch of 100 progression requests: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::str::FromStr;

use tarif_engine::api::{AppState, create_router};
use tarif_engine::calculation::{
    adjusted_wage, apply_inflation_compensation, generate_monthly_series,
};
use tarif_engine::config::ConfigLoader;
use tarif_engine::models::AggregationMode;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/dataport2023").expect("Failed to load config");
    AppState::new(config)
}

/// Benchmark: a single adjusted wage computation.
///
/// Target: < 1μs mean
fn bench_adjusted_wage(c: &mut Criterion) {
    let base = Decimal::from_str("3729.19").unwrap();

    c.bench_function("adjusted_wage", |b| {
        b.iter(|| {
            black_box(adjusted_wage(
                black_box(base),
                black_box(14),
                AggregationMode::YearlyWithBonus,
            ))
        })
    });
}

/// Benchmark: the full series plus the compensation overlay.
///
/// Target: < 10μs mean
fn bench_full_series(c: &mut Criterion) {
    let base = Decimal::from_str("3729.19").unwrap();

    c.bench_function("full_series_with_compensation", |b| {
        b.iter(|| {
            let series = generate_monthly_series(black_box(base));
            black_box(apply_inflation_compensation(&series))
        })
    });
}

/// Benchmark: a single progression request through the router.
///
/// Target: < 1ms mean
fn bench_single_progression(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = serde_json::json!({ "grade": "12", "step": 1 }).to_string();

    c.bench_function("single_progression", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/progression")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 progression requests across the tier table.
///
/// Target: < 100ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    // Pre-create 100 requests cycling through both grades and all steps
    let requests: Vec<String> = (0..100)
        .map(|i| {
            let grade = if i % 2 == 0 { "12" } else { "13" };
            let step = (i % 6) + 1;
            serde_json::json!({ "grade": grade, "step": step }).to_string()
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/progression")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: series generation across different base wages.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for base_str in ["3729.19", "4690.66", "6150.68"].iter() {
        let base = Decimal::from_str(base_str).unwrap();

        group.bench_with_input(BenchmarkId::new("series", base_str), &base, |b, &base| {
            b.iter(|| {
                let series = generate_monthly_series(black_box(base));
                black_box(apply_inflation_compensation(&series))
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_adjusted_wage,
    bench_full_series,
    bench_single_progression,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
