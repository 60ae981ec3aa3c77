//! Read throughput of `Vec`, a boxed slice and `GrowableArray`.
//!
//! Each container holds the same seeded random values in `[0, 5000)` and is
//! summed both by index (`for`) and through its iterator (`foreach`). The
//! growable array is read through its compacted view, matching how the
//! comparison program consumes it.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use growarray::GrowableArray;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SEED: u64 = 12345;
const SIZES: &[usize] = &[1_000, 100_000, 1_000_000];

fn random_values(size: usize) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    (0..size).map(|_| rng.gen_range(0..5000)).collect()
}

fn bench_indexed(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_sum");

    for &size in SIZES {
        let list = random_values(size);
        let array: Box<[i32]> = list.clone().into_boxed_slice();
        let mut grow = GrowableArray::new();
        for &v in &list {
            grow.push(v);
        }
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec/for", size), &list, |b, list| {
            b.iter(|| {
                let mut chk = 0i64;
                for i in 0..list.len() {
                    chk += i64::from(list[i]);
                }
                black_box(chk)
            });
        });

        group.bench_with_input(BenchmarkId::new("Array/for", size), &array, |b, array| {
            b.iter(|| {
                let mut chk = 0i64;
                for i in 0..array.len() {
                    chk += i64::from(array[i]);
                }
                black_box(chk)
            });
        });

        group.bench_with_input(BenchmarkId::new("GrowableArray/for", size), &grow, |b, grow| {
            let compacted = grow.compact();
            b.iter(|| {
                let mut chk = 0i64;
                for i in 0..compacted.len() {
                    chk += i64::from(compacted[i]);
                }
                black_box(chk)
            });
        });

        group.bench_with_input(BenchmarkId::new("GrowableArray/at", size), &grow, |b, grow| {
            b.iter(|| {
                let mut chk = 0i64;
                for i in 0..grow.len() {
                    chk += i64::from(grow[i]);
                }
                black_box(chk)
            });
        });
    }

    group.finish();
}

fn bench_iterated(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator_sum");

    for &size in SIZES {
        let list = random_values(size);
        let array: Box<[i32]> = list.clone().into_boxed_slice();
        let grow: GrowableArray<i32> = list.iter().copied().collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec/foreach", size), &list, |b, list| {
            b.iter(|| black_box(list.iter().map(|&v| i64::from(v)).sum::<i64>()));
        });

        group.bench_with_input(BenchmarkId::new("Array/foreach", size), &array, |b, array| {
            b.iter(|| black_box(array.iter().map(|&v| i64::from(v)).sum::<i64>()));
        });

        group.bench_with_input(BenchmarkId::new("GrowableArray/foreach", size), &grow, |b, grow| {
            b.iter(|| black_box(grow.iter().map(|&v| i64::from(v)).sum::<i64>()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_indexed, bench_iterated);
criterion_main!(benches);
