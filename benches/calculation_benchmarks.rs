//! Performance benchmarks for the payroll engine.
//!
//! Covers pricing a single day, aggregating ranges of increasing length,
//! and a full range request through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{aggregate_range, compute_daily_amount, resolve_rate, split_range};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::{RateKind, RateSet, WorkCategory, WorkRecord};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config").expect("Failed to load config")
}

fn private_rates() -> RateSet {
    resolve_rate(&load_config(), RateKind::Private).expect("No private rates configured")
}

/// Creates `count` consecutive daily records starting 2025-07-01.
fn create_records(count: usize) -> Vec<WorkRecord> {
    let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    (0..count)
        .map(|i| {
            let n = i as i64;
            WorkRecord::new(start + Duration::days(n))
                .with_quantity(WorkCategory::Awak, 40 + n % 7)
                .with_quantity(WorkCategory::Jawak, 25 + n % 5)
                .with_quantity(WorkCategory::DockAwak, n % 3)
                .with_quantity(WorkCategory::Panni, 12)
                .with_quantity(WorkCategory::Potti10, 8)
                .with_quantity(WorkCategory::Other, 2)
                .with_other_rate("1.25".parse().unwrap())
        })
        .collect()
}

/// Benchmark: pricing a single day's record.
fn bench_daily_amount(c: &mut Criterion) {
    let rates = private_rates();
    let record = create_records(1).remove(0);

    c.bench_function("daily_amount", |b| {
        b.iter(|| black_box(compute_daily_amount(black_box(&record), &rates).unwrap()))
    });
}

/// Benchmark: aggregation and split over ranges of increasing length.
fn bench_range_scaling(c: &mut Criterion) {
    let rates = private_rates();
    let mut group = c.benchmark_group("range_aggregate");

    for day_count in [7usize, 30, 365].iter() {
        let records = create_records(*day_count);

        group.throughput(Throughput::Elements(*day_count as u64));
        group.bench_with_input(BenchmarkId::new("days", day_count), day_count, |b, _| {
            b.iter(|| {
                let aggregate = aggregate_range(black_box(&records), &rates).unwrap();
                black_box(split_range(&aggregate).unwrap())
            })
        });
    }

    group.finish();
}

/// Benchmark: a month-long range request through the router.
fn bench_range_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));
    let body = serde_json::json!({
        "rate_kind": "private",
        "start_date": "2025-07-01",
        "end_date": "2025-07-31",
        "records": create_records(31)
    })
    .to_string();

    c.bench_function("range_request_31_days", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/salary/range")
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

criterion_group!(
    benches,
    bench_daily_amount,
    bench_range_scaling,
    bench_range_request,
);
criterion_main!(benches);
