//! Wildpath Benchmarks
//!
//! Registration, single-query matching and batch matching, measured with Criterion.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use std::time::Duration;

use wildpath_lib::data_structures::PatternMatcher;

const TOKENS: [&str; 8] = ["api", "v1", "users", "orders", "items", "id", "edit", "*"];

// Deterministic pseudo-random patterns so runs are comparable
fn generate_patterns(count: usize, depth: usize) -> Vec<String> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..count)
        .map(|_| {
            (0..depth)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    TOKENS[(state % TOKENS.len() as u64) as usize]
                })
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect()
}

fn generate_queries(patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .enumerate()
        .map(|(i, pattern)| pattern.replace('*', TOKENS[i % 7]).replace(',', "/"))
        .collect()
}

fn build(patterns: &[String]) -> PatternMatcher {
    let mut matcher = PatternMatcher::new();
    for pattern in patterns {
        let _ = matcher.register(pattern);
    }
    matcher
}

fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("register");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let patterns = generate_patterns(*size, 5);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("patterns", size), &patterns, |b, patterns| {
            b.iter(|| black_box(build(patterns)));
        });
    }

    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_matching_pattern");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let patterns = generate_patterns(*size, 5);
        let matcher = build(&patterns);
        let queries = generate_queries(&patterns);

        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_with_input(BenchmarkId::new("index_size", size), &queries, |b, queries| {
            b.iter(|| {
                for query in queries {
                    black_box(matcher.find_matching_pattern(query));
                }
            });
        });
    }

    group.finish();
}

fn bench_match_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_all");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(3));

    let patterns = generate_patterns(10_000, 5);
    let matcher = build(&patterns);
    let queries = generate_queries(&patterns);
    group.throughput(Throughput::Elements(queries.len() as u64));

    for workers in [1, 2, 4, 8].iter() {
        group.bench_with_input(BenchmarkId::new("workers", workers), workers, |b, &workers| {
            b.iter(|| black_box(matcher.match_all(&queries, workers)));
        });
    }

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_register, bench_match, bench_match_all
}

criterion_main!(benches);
