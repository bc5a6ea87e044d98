//! Benchmarks for CPU-side field stepping.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use snowfield::{Sampler, SnowField, Vec2, MAX_FLAKES};

const EXTENT: Vec2 = Vec2::new(1920.0, 1080.0);

fn bench_step_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_step");

    group.bench_function("default_density", |b| {
        let mut field = SnowField::new(Sampler::with_seed(1));
        field.populate(600, EXTENT);
        b.iter(|| field.step_all(black_box(16.0), None, EXTENT))
    });

    group.bench_function("max_density", |b| {
        let mut field = SnowField::new(Sampler::with_seed(2));
        field.populate(MAX_FLAKES, EXTENT);
        b.iter(|| field.step_all(black_box(16.0), None, EXTENT))
    });

    group.bench_function("max_density_with_pointer", |b| {
        let mut field = SnowField::new(Sampler::with_seed(3));
        field.populate(MAX_FLAKES, EXTENT);
        let pointer = Some(EXTENT * 0.5);
        b.iter(|| field.step_all(black_box(16.0), pointer, EXTENT))
    });

    group.finish();
}

fn bench_populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_populate");

    group.bench_function("max_density", |b| {
        let mut field = SnowField::new(Sampler::with_seed(4));
        b.iter(|| {
            field.populate(MAX_FLAKES, EXTENT);
            black_box(field.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_step_all, bench_populate);
criterion_main!(benches);
