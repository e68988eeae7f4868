// benches/access_patterns.rs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use uintn::{UintNArray, WordSeq};

fn create_array(bit_width: i8, size: usize) -> UintNArray {
    UintNArray::from_words(bit_width, (0..size as u32).map(|i| i.wrapping_mul(2_654_435_761)))
        .unwrap()
}

fn bench_individual_get(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("individual_get");
    for size in sizes {
        for width in [5i8, 12, -9, 32] {
            let array = create_array(width, size);

            group.bench_with_input(BenchmarkId::new(format!("w{width}"), size), &size, |b, _| {
                b.iter(|| {
                    let mut sum = 0u64;
                    for i in 0..array.len() {
                        sum += black_box(array.get(i).unwrap()) as u64;
                    }
                    sum
                });
            });
        }
    }
    group.finish();
}

fn bench_iterator(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("iterator");
    for size in sizes {
        let array = create_array(12, size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let sum: u64 = array.words().map(|w| black_box(w) as u64).sum();
                sum
            });
        });
    }
    group.finish();
}

fn bench_write_operations(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("write_operations");
    for size in sizes {
        group.bench_with_input(BenchmarkId::new("set", size), &size, |b, &s| {
            let mut array = create_array(11, s);
            b.iter(|| {
                for i in 0..array.len() {
                    array.set(i, black_box(i as u32));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("set_from", size), &size, |b, &s| {
            let mut array = create_array(11, s);
            let words: Vec<u32> = (0..s as u32).collect();
            b.iter(|| array.set_from(words.iter().copied(), 0).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("fill", size), &size, |b, &s| {
            let mut array = create_array(11, s);
            b.iter(|| array.fill(black_box(0x5A5)));
        });
    }
    group.finish();
}

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("views");
    let array = create_array(-9, 10_000);

    group.bench_function("reinterpret", |b| {
        b.iter(|| array.reinterpret(black_box(-7), None).unwrap());
    });
    group.bench_function("subarray", |b| {
        b.iter(|| array.subarray(black_box(100)..black_box(-100)));
    });
    group.bench_function("trim_zeros", |b| {
        let padded = array.reinterpret(-31, None).unwrap();
        b.iter(|| padded.trim_zeros());
    });
    group.finish();
}

fn bench_cache_effects(c: &mut Criterion) {
    use rand::prelude::*;

    let size = 10_000;
    let mut group = c.benchmark_group("cache_effects");

    // Sequential access (cache-friendly)
    group.bench_function("sequential", |b| {
        let array = create_array(13, size);
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..array.len() {
                sum += black_box(array.get(i).unwrap()) as u64;
            }
            sum
        });
    });

    // Random access (cache-unfriendly)
    group.bench_function("random", |b| {
        let array = create_array(13, size);
        let mut rng = StdRng::seed_from_u64(42);
        let indices: Vec<usize> = (0..size).map(|_| rng.random_range(0..size)).collect();

        b.iter(|| {
            let mut sum = 0u64;
            for &i in &indices {
                sum += black_box(array.get(i).unwrap()) as u64;
            }
            sum
        });
    });

    group.finish();
}

fn bench_vs_raw_vec(c: &mut Criterion) {
    let size = 10_000;
    let mut group = c.benchmark_group("vs_vec_u32");

    let packed = create_array(12, size);
    let plain = packed.to_vec();

    group.bench_function("uintn", |b| {
        b.iter(|| packed.words().map(|w| black_box(w) as u64).sum::<u64>());
    });
    group.bench_function("vec", |b| {
        b.iter(|| plain.iter().map(|&w| black_box(w) as u64).sum::<u64>());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_individual_get,
    bench_iterator,
    bench_write_operations,
    bench_views,
    bench_cache_effects,
    bench_vs_raw_vec,
);
criterion_main!(benches);
