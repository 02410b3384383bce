use criterion::{black_box, criterion_group, criterion_main, Criterion};
use denscan::Dbscan;
use rand::prelude::*;

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");

    // Synthetic blobs around two centers plus uniform noise.
    let mut rng = StdRng::seed_from_u64(42);
    let n = 500;
    let d = 8;

    let data: Vec<Vec<f32>> = (0..n)
        .map(|i| {
            let center = if i % 2 == 0 { 0.0 } else { 5.0 };
            (0..d).map(|_| center + rng.random::<f32>()).collect()
        })
        .collect();

    group.bench_function("fit_predict_n500_d8", |b| {
        b.iter(|| {
            let mut model = Dbscan::new(1.0, 5);
            model.fit_predict(black_box(&data)).unwrap();
        })
    });

    group.bench_function("fit_predict_n500_d8_taxicab", |b| {
        b.iter(|| {
            let mut model = Dbscan::new(1.5, 5).with_order(1);
            model.fit_predict(black_box(&data)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_dbscan);
criterion_main!(benches);
