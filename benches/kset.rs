use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kset::*;
use std::sync::Arc;
use std::thread;

const SIZE: usize = 1000;

#[derive(Clone, Copy)]
struct RandomKeys {
    state: usize,
}

impl RandomKeys {
    fn new() -> Self {
        RandomKeys { state: 0 }
    }
}

impl Iterator for RandomKeys {
    type Item = usize;
    fn next(&mut self) -> Option<usize> {
        // Add 1 then multiply by some 32 bit prime.
        self.state = self.state.wrapping_add(1).wrapping_mul(3_787_392_781);
        Some(self.state)
    }
}

#[derive(Clone)]
struct User {
    id: usize,
    _payload: [u64; 4],
}

fn user(id: usize) -> User {
    User {
        id,
        _payload: [id as u64; 4],
    }
}

fn construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    group.throughput(Throughput::Elements(SIZE as u64));
    for kind in StoreKind::ALL {
        group.bench_function(BenchmarkId::new("key_only", kind), |b| {
            b.iter(|| black_box(AnyKeySet::with_keys(kind, RandomKeys::new().take(SIZE))));
        });
        group.bench_function(BenchmarkId::new("key_value", kind), |b| {
            b.iter(|| {
                black_box(AnyKeyValueSet::from_values(
                    kind,
                    |u: &User| u.id,
                    RandomKeys::new().take(SIZE).map(user),
                ))
            });
        });
    }
    group.finish();
}

fn algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("algebra");
    group.throughput(Throughput::Elements(SIZE as u64));
    for kind in StoreKind::ALL {
        let a = AnyKeySet::with_keys(kind, 0..SIZE);
        let b = AnyKeySet::with_keys(kind, (SIZE / 2)..(SIZE + SIZE / 2));
        group.bench_function(BenchmarkId::new("difference", kind), |bench| {
            bench.iter(|| black_box(a.difference(&b)));
        });
        group.bench_function(BenchmarkId::new("union", kind), |bench| {
            bench.iter(|| black_box(a.union(&b)));
        });
        group.bench_function(BenchmarkId::new("symmetric_difference", kind), |bench| {
            bench.iter(|| black_box(a.symmetric_difference(&b)));
        });
        group.bench_function(BenchmarkId::new("is_subset", kind), |bench| {
            bench.iter(|| black_box(a.is_subset(&b)));
        });
    }
    group.finish();
}

fn synced_append(c: &mut Criterion) {
    let threads = num_cpus::get().min(8);
    let mut group = c.benchmark_group("synced_append");
    group.throughput(Throughput::Elements((SIZE * threads) as u64));
    group.bench_function(BenchmarkId::from_parameter(threads), |b| {
        b.iter(|| {
            let set = Arc::new(SyncHashKeySet::new());
            let handles: Vec<_> = (0..threads)
                .map(|t| {
                    let set = Arc::clone(&set);
                    thread::spawn(move || {
                        for i in 0..SIZE {
                            set.append([t * SIZE + i]);
                        }
                    })
                })
                .collect();
            for h in handles {
                let _ = h.join();
            }
            black_box(set.len())
        });
    });
    group.finish();
}

criterion_group!(benches, construct, algebra, synced_append);
criterion_main!(benches);
