use std::collections::BTreeSet;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rank_tree::RankSet;

const N: usize = 10_000;

/// Deterministic pseudo-random key sequence (LCG, fixed seed).
fn random_keys(n: usize) -> Vec<i32> {
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i32);
    }
    keys
}

fn bench_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("RankSet", N), |b| {
        b.iter(|| {
            let mut set = RankSet::new();
            for key in 0..N as i32 {
                let _ = set.insert(key);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in 0..N as i32 {
                set.insert(key);
            }
            set
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("RankSet", N), |b| {
        b.iter(|| {
            let mut set = RankSet::new();
            for &key in &keys {
                let _ = set.insert(key);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &key in &keys {
                set.insert(key);
            }
            set
        });
    });

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut set = RankSet::new();
    for &key in &keys {
        let _ = set.insert(key);
    }
    let len = set.len();
    let step = len / 64 + 1;

    let mut group = c.benchmark_group("select_sweep");
    group.bench_function(BenchmarkId::new("RankSet", N), |b| {
        b.iter(|| {
            for rank in (1..=len).step_by(step) {
                let _ = black_box(set.select(rank));
            }
        });
    });
    group.finish();
}

fn bench_count_less(c: &mut Criterion) {
    let keys = random_keys(N);
    let probes = random_keys(256);

    let mut set = RankSet::new();
    for &key in &keys {
        let _ = set.insert(key);
    }
    let oracle: BTreeSet<i32> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("count_less");

    group.bench_function(BenchmarkId::new("RankSet", N), |b| {
        b.iter(|| {
            let mut total = 0usize;
            for probe in &probes {
                total += set.count_less(probe);
            }
            total
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet::range", N), |b| {
        b.iter(|| {
            let mut total = 0usize;
            for probe in &probes {
                total += oracle.range(..probe).count();
            }
            total
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_ordered,
    bench_insert_random,
    bench_select,
    bench_count_less,
);
criterion_main!(benches);
