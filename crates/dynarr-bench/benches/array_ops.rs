//! Criterion micro-benchmarks for element-level dynamic array operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use dynarr_array::DynamicArray;
use dynarr_bench::{churn_workload, run_workload};
use dynarr_test_utils::filled;

/// Benchmark: 10K pushes into a default-capacity array.
fn bench_push_10k(c: &mut Criterion) {
    c.bench_function("push_10k", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::new();
            for i in 0..10_000u64 {
                arr.push(i);
            }
            black_box(arr.len());
        });
    });
}

/// Baseline: the same 10K pushes into `Vec`.
fn bench_vec_push_10k(c: &mut Criterion) {
    c.bench_function("vec_push_10k", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(8);
            for i in 0..10_000u64 {
                v.push(i);
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: 1K inserts at the front, each shifting the whole array.
fn bench_insert_front_1k(c: &mut Criterion) {
    c.bench_function("insert_front_1k", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::new();
            for i in 0..1_000i32 {
                arr.insert(0, i).unwrap();
            }
            black_box(arr.first().copied());
        });
    });
}

/// Benchmark: indexed reads across a 10K array.
fn bench_get_10k(c: &mut Criterion) {
    let arr = filled(10_000, 16_384);
    c.bench_function("get_10k", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in 0..arr.len() {
                sum += *arr.get(i).unwrap() as i64;
            }
            black_box(sum);
        });
    });
}

/// Benchmark: worst-case `index_of` miss on 10K elements.
fn bench_index_of_miss_10k(c: &mut Criterion) {
    let arr = filled(10_000, 16_384);
    c.bench_function("index_of_miss_10k", |b| {
        b.iter(|| black_box(arr.index_of(black_box(&-1))));
    });
}

/// Benchmark: replay a 10K-step seeded churn workload.
fn bench_churn_10k(c: &mut Criterion) {
    let ops = churn_workload(10_000, 42);
    c.bench_function("churn_10k", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::new();
            black_box(run_workload(&mut arr, &ops));
        });
    });
}

criterion_group!(
    benches,
    bench_push_10k,
    bench_vec_push_10k,
    bench_insert_front_1k,
    bench_get_10k,
    bench_index_of_miss_10k,
    bench_churn_10k
);
criterion_main!(benches);
