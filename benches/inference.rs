//! Benchmarks for the inference pipeline

use std::num::NonZeroUsize;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fdsha::{CenterOfGravity, Degrees, EngineConfig, FdshaEngine, Inputs, Pga};

fn compute_hazard_benchmark(c: &mut Criterion) {
    let engine = FdshaEngine::new();

    c.bench_function("compute_hazard near/large/thrust", |b| {
        b.iter(|| engine.compute_hazard(black_box(7.2), black_box(15.0), black_box(0.08)))
    });

    c.bench_function("compute_hazard nothing fires", |b| {
        b.iter(|| engine.compute_hazard(black_box(0.0), black_box(1000.0), black_box(5.0)))
    });
}

fn resolution_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    for resolution in [100, 1000, 10_000] {
        let engine = FdshaEngine::with_config(&EngineConfig { resolution }).expect("valid resolution");

        group.bench_with_input(BenchmarkId::from_parameter(resolution), &engine, |b, engine| {
            b.iter(|| engine.eval(black_box(&Inputs::new(6.5, 40.0, 0.02))).pga())
        });
    }

    group.finish();
}

fn defuzzify_benchmark(c: &mut Criterion) {
    let engine = FdshaEngine::new();
    let cog = CenterOfGravity::new(NonZeroUsize::new(1000).expect("non-zero"));
    let aggregated: Degrees<Pga> = [(Pga::Much, 0.4), (Pga::VeryMuch, 0.7), (Pga::VeryVeryMuch, 0.2)]
        .into_iter()
        .collect();

    c.bench_function("defuzzify three terms", |b| {
        b.iter(|| cog.defuzzify(engine.pga(), black_box(&aggregated)))
    });
}

fn batch_benchmark(c: &mut Criterion) {
    let engine = FdshaEngine::new();
    let sites: Vec<Inputs> = (0..1000)
        .map(|i| {
            let i = i as f64;
            Inputs::new(4.5 + (i * 0.004), (i * 0.2) % 200.0, -0.1 + (i * 0.0002))
        })
        .collect();

    c.bench_function("compute_batch 1000 sites", |b| b.iter(|| engine.compute_batch(black_box(&sites))));
}

criterion_group!(
    benches,
    compute_hazard_benchmark,
    resolution_benchmark,
    defuzzify_benchmark,
    batch_benchmark
);
criterion_main!(benches);
