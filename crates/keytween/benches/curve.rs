//! Benchmarks for curve construction and evaluation.
//!
//! Run with: cargo bench -p keytween

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use keytween::{Keyframe, MonotoneCurve};

/// Deterministic wavy keyframe data; no RNG so runs are comparable.
fn create_test_keyframes(count: usize) -> Vec<Keyframe> {
    (0..count)
        .map(|i| {
            let x = i as f64 * 0.5;
            let y = (i as f64 * 0.7).sin() * 10.0;
            Keyframe::new(x, y)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for count in [8usize, 64, 512] {
        let keyframes = create_test_keyframes(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &keyframes,
            |b, keyframes| {
                b.iter(|| MonotoneCurve::new(black_box(keyframes.clone())).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let curve = MonotoneCurve::new(create_test_keyframes(64)).unwrap();

    c.bench_function("evaluate", |b| {
        b.iter(|| black_box(curve.evaluate(black_box(13.37))));
    });
}

fn bench_evaluate_batch(c: &mut Criterion) {
    let curve = MonotoneCurve::new(create_test_keyframes(64)).unwrap();
    let queries: Vec<f64> = (0..1000).map(|i| f64::from(i) * 0.03).collect();

    let mut group = c.benchmark_group("evaluate_batch");
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("ascending_sweep", |b| {
        b.iter(|| black_box(curve.evaluate_batch(black_box(&queries))));
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_evaluate, bench_evaluate_batch);
criterion_main!(benches);
