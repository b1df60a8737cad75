#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion, black_box};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sentinel_tree::{Map, Set};

fn random_map(rng: &mut StdRng, n: usize) -> Map<usize, usize> {
    let mut map = Map::new();
    for _ in 0..n {
        let k = rng.gen_range(0..n);
        map.insert(k, k);
    }
    map
}

pub fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &n in &[100, 10_000] {
        group.bench_with_input(BenchmarkId::new("Random", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(17);
            let mut map = random_map(&mut rng, n);

            b.iter(|| {
                let k = rng.gen_range(0..n);
                map.insert(k, k);
            });
            black_box(map);
        });

        // Ascending keys degrade the tree into a list; this measures that worst case.
        group.bench_with_input(BenchmarkId::new("Sequential", n), &n, |b, &n| {
            let mut map = Map::new();
            for i in 0..n { map.insert(i * 2, i * 2); }

            let mut i = 1;
            b.iter(|| {
                map.insert(i, i);
                i = (i + 2) % n;
            });
            black_box(map);
        });
    }
}

pub fn find_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for &n in &[100, 10_000] {
        group.bench_with_input(BenchmarkId::new("Random", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(17);
            let mut keys: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();

            let mut map = Map::new();
            for &k in &keys { map.insert(k, k); }
            keys.shuffle(&mut rng);

            let mut i = 0;
            b.iter(|| {
                let t = map.get(&keys[i]);
                i = (i + 1) % n;
                black_box(t);
            });
        });

        group.bench_with_input(BenchmarkId::new("Sequential", n), &n, |b, &n| {
            let map: Map<_, _> = (0..n).map(|i| (i, i)).collect();

            let mut i = 0;
            b.iter(|| {
                let x = map.get(&i);
                i = (i + 1) % n;
                black_box(x);
            });
        });
    }
}

pub fn erase_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase");

    for &n in &[100, 10_000] {
        group.bench_with_input(BenchmarkId::new("Begin", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(17);
            let map = random_map(&mut rng, n);

            b.iter(|| {
                let mut map = map.clone();
                while let Ok(entry) = map.erase(map.begin().position()) { black_box(entry); }
            });
        });
    }
}

pub fn iter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");

    for &n in &[100, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("Ascending", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(17);
            let set: Set<u32> = (0..n).map(|_| rng.gen()).collect();

            b.iter(|| {
                for item in set.iter() { black_box(item); }
            });
        });
    }
}

pub fn merge_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for &n in &[100, 10_000] {
        group.bench_with_input(BenchmarkId::new("Interleaved", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(17);
            let evens: Set<usize> = (0..n).map(|_| rng.gen_range(0..n) * 2).collect();
            let odds: Set<usize> = (0..n).map(|_| rng.gen_range(0..n) * 2 + 1).collect();

            b.iter(|| {
                let (mut set, mut other) = (evens.clone(), odds.clone());
                set.merge(&mut other);
                black_box(set);
            });
        });
    }
}

criterion_group!(benches, insert_benchmark, find_benchmark, erase_benchmark, iter_benchmark,
                 merge_benchmark);
criterion_main!(benches);
