#![allow(missing_docs, unused_doc_comments, unused_attributes)]
//! Benchmarks for conversion dispatch.
//!
//! This benchmark suite measures the resolver's fast paths against the full
//! chain search, and a cold search against a cache hit, using Criterion.rs
//! for statistical analysis.

use convroute::{ConversionRegistry, FnConverter};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

/// Registry with a linear chain f0 -> f1 -> ... -> f{hops}, each converter
/// counting the hop it performs.
fn linear_registry(hops: usize) -> ConversionRegistry<u64> {
    let mut registry = ConversionRegistry::new();
    for i in 0..hops {
        registry.register(FnConverter::new(
            format!("f{i}"),
            format!("f{}", i + 1),
            |v: u64| Ok(v + 1),
        ));
    }
    registry
}

/// Registry with a hub format fanning out into `branches` dead ends before
/// the single edge that continues toward the target.
fn fanout_registry(branches: usize) -> ConversionRegistry<u64> {
    let mut registry = ConversionRegistry::new();
    for i in 0..branches {
        registry.register(FnConverter::new("hub", format!("dead{i}"), |v: u64| {
            Ok(v + 1)
        }));
    }
    registry.register(FnConverter::new("hub", "mid", |v: u64| Ok(v + 1)));
    registry.register(FnConverter::new("mid", "target", |v: u64| Ok(v + 1)));
    registry
}

/// Benchmark a direct match in a registry of 16 converters.
fn benchmark_direct_dispatch(c: &mut Criterion) {
    let mut registry = linear_registry(16);

    c.bench_function("dispatch_direct", |b| {
        b.iter(|| registry.convert(black_box(0), "f3", "f4"));
    });
}

/// Benchmark the two-hop fast path in a registry of 16 converters.
fn benchmark_two_hop_dispatch(c: &mut Criterion) {
    let mut registry = linear_registry(16);

    c.bench_function("dispatch_two_hop", |b| {
        b.iter(|| registry.convert(black_box(0), "f3", "f5"));
    });
}

/// Benchmark a 12-hop resolution on a fresh registry, so every iteration
/// pays for the full chain search.
fn benchmark_deep_chain_cold(c: &mut Criterion) {
    c.bench_function("dispatch_deep_chain_cold", |b| {
        b.iter_batched(
            || linear_registry(12),
            |mut registry| registry.convert(black_box(0), "f0", "f12"),
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark a 12-hop resolution on a warm registry, where the route cache
/// answers every iteration after the first.
fn benchmark_deep_chain_cached(c: &mut Criterion) {
    let mut registry = linear_registry(12);

    c.bench_function("dispatch_deep_chain_cached", |b| {
        b.iter(|| registry.convert(black_box(0), "f0", "f12"));
    });
}

/// Benchmark chain discovery alone, without executing any converter.
fn benchmark_chain_discovery(c: &mut Criterion) {
    let registry = linear_registry(12);

    c.bench_function("find_chain_12_hops", |b| {
        b.iter(|| registry.find_chain(black_box("f0"), "f12"));
    });
}

/// Benchmark discovery through a hub with 32 dead-end branches.
fn benchmark_fanout_discovery(c: &mut Criterion) {
    let registry = fanout_registry(32);

    c.bench_function("find_chain_fanout_32", |b| {
        b.iter(|| registry.find_chain(black_box("hub"), "target"));
    });
}

criterion_group!(
    benches,
    benchmark_direct_dispatch,
    benchmark_two_hop_dispatch,
    benchmark_deep_chain_cold,
    benchmark_deep_chain_cached,
    benchmark_chain_discovery,
    benchmark_fanout_discovery,
);
criterion_main!(benches);
