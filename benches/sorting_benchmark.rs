use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use proxysort::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("Proxy Sort");
    group.sample_size(10);

    let mut rng = rand::rng();

    for count in [16, 80, 1_000, 10_000] {
        let input: Vec<i64> = (0..count).map(|_| rng.random()).collect();

        for algorithm in Algorithm::ALL {
            // Binary insertion sort is quadratic in index moves.
            if algorithm == Algorithm::BinaryInsertion && count > 1_000 {
                continue;
            }

            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), count),
                &input,
                |b, input| b.iter(|| sort_with(algorithm, black_box(&input[..]), count, Natural)),
            );
        }

        // Std argsort (Stable)
        group.bench_with_input(
            BenchmarkId::new("slice::sort_by_key", count),
            &input,
            |b, input| {
                b.iter(|| {
                    let mut indices: Vec<usize> = (0..input.len()).collect();
                    indices.sort_by_key(|&i| black_box(input)[i]);
                    indices
                })
            },
        );
    }

    group.finish();
}

fn bench_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insertion Threshold");
    group.sample_size(10);

    let mut rng = rand::rng();

    // Around the default threshold of 80.
    for count in [40, 80, 160, 320] {
        let input: Vec<f64> = (0..count).map(|_| rng.random()).collect();

        for algorithm in [Algorithm::BinaryInsertion, Algorithm::Heap] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), count),
                &input,
                |b, input| b.iter(|| sort_with(algorithm, black_box(&input[..]), count, TotalOrder)),
            );
        }
    }

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("String Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;

    let random_strings: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len).map(|_| rng.random::<char>()).collect()
        })
        .collect();

    group.bench_function("proxysort::sort_ord", |b| {
        b.iter(|| sort_ord(black_box(&random_strings)))
    });

    group.bench_function("slice::sort_by (stable argsort)", |b| {
        b.iter(|| {
            let mut indices: Vec<usize> = (0..count).collect();
            indices.sort_by(|&i, &j| random_strings[i].cmp(&random_strings[j]));
            indices
        })
    });

    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_threshold, bench_strings);
criterion_main!(benches);
