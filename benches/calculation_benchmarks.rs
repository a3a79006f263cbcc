//! Performance benchmarks for the pay calculator.
//!
//! Covers single interval pricing, single lines of increasing length, and
//! batches of lines.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use pay_calculator::calculation::{calculate_batch, calculate_interval_pay, calculate_total_pay};
use pay_calculator::config::PayrollConfig;
use pay_calculator::models::decode_interval;

const TOKENS: [&str; 7] = [
    "MO10:00-12:00",
    "TU01:00-03:00",
    "WE18:30-22:00",
    "TH09:00-18:00",
    "FR12:00-14:00",
    "SA14:00-18:00",
    "SU20:00-21:00",
];

/// Builds a line with `token_count` intervals.
fn create_line(token_count: usize) -> String {
    let tokens: Vec<&str> = TOKENS.iter().copied().cycle().take(token_count).collect();
    format!("EMPLOYEE={}", tokens.join(","))
}

fn bench_single_interval(c: &mut Criterion) {
    let config = PayrollConfig::default();
    let interval = decode_interval("SA09:00-18:00").expect("valid token");

    c.bench_function("decode_interval", |b| {
        b.iter(|| decode_interval(black_box("SA09:00-18:00")))
    });

    c.bench_function("calculate_interval_pay", |b| {
        b.iter(|| calculate_interval_pay(black_box(&interval), black_box(&config)))
    });
}

fn bench_single_line(c: &mut Criterion) {
    let config = PayrollConfig::default();
    let mut group = c.benchmark_group("calculate_total_pay");

    for token_count in [1usize, 7, 28] {
        let line = create_line(token_count);
        group.throughput(Throughput::Elements(token_count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(token_count), &line, |b, line| {
            b.iter(|| calculate_total_pay(black_box(line), black_box(&config)))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let config = PayrollConfig::default();
    let mut group = c.benchmark_group("calculate_batch");

    for line_count in [100usize, 1000] {
        let lines: Vec<String> = (0..line_count).map(|i| create_line(i % 14 + 1)).collect();
        group.throughput(Throughput::Elements(line_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(line_count),
            &lines,
            |b, lines| {
                b.iter(|| calculate_batch(lines.iter().map(String::as_str), black_box(&config)))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_interval, bench_single_line, bench_batch);
criterion_main!(benches);
