//! # Entity Store Benchmark
//!
//! One tick scans the whole pool several times (selection, pickup,
//! rendering). These measure those scans at full capacity.
//!
//! Run with: `cargo bench --package abyx_core`

#![allow(missing_docs)]

use abyx_core::{pickup_candidates, select_nearest, Entity, EntityStore};
use abyx_shared::{ResourceKind, Vec2};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const CAPACITY: usize = 1024;

fn populated_store(capacity: usize) -> EntityStore {
    let mut store = EntityStore::new(capacity);
    for i in 0..capacity {
        let pos = Vec2::new((i % 32) as f32 * 16.0, (i / 32) as f32 * 16.0);
        let entity = match i % 3 {
            0 => Entity::tree(pos, 3),
            1 => Entity::rock(pos, 3),
            _ => Entity::resource(ResourceKind::Wood, pos),
        };
        store.allocate(entity).expect("capacity sized to fit");
    }
    store
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_pool");
    for capacity in [256, CAPACITY] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &capacity| {
            b.iter(|| black_box(populated_store(capacity)).alive_count());
        });
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut store = populated_store(CAPACITY);
    c.bench_function("destroy_reallocate_last_slot", |b| {
        b.iter(|| {
            let handle = store.handle_at(CAPACITY - 1).expect("slot occupied");
            let entity = store.destroy(handle).expect("live handle");
            black_box(store.allocate(entity).expect("slot just freed"))
        });
    });
}

fn bench_queries(c: &mut Criterion) {
    let store = populated_store(CAPACITY);
    let cursor = Vec2::new(250.0, 250.0);

    c.bench_function("select_nearest_1024", |b| {
        b.iter(|| select_nearest(&store, black_box(cursor), 32.0, Entity::is_destructible));
    });

    c.bench_function("pickup_candidates_1024", |b| {
        b.iter(|| pickup_candidates(&store, black_box(cursor), 40.0));
    });
}

criterion_group!(benches, bench_fill, bench_churn, bench_queries);
criterion_main!(benches);
