//! # Starfield Benchmarks
//!
//! Per-frame simulation and projection cost at both preset star counts.
//!
//! Run with: `cargo bench --bench starfield`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use starfield::{create_rng, project_field, StarField, StarQuad, StarfieldConfig};

fn field_for(count: usize) -> (StarfieldConfig, StarField) {
    let mut config = StarfieldConfig::new();
    config.star_count = count;
    let mut rng = create_rng(42);
    let field = StarField::initialize(&config, &mut rng).expect("valid bench config");
    (config, field)
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for count in [10_000usize, 600_000] {
        let (config, mut field) = field_for(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(field.advance(config.speed, config.dt())));
        });
    }

    group.finish();
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_field");

    for count in [10_000usize, 600_000] {
        let (config, field) = field_for(count);
        let mut quads: Vec<StarQuad> = Vec::with_capacity(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                quads.clear();
                quads.extend(project_field(&field, &config));
                black_box(quads.len())
            });
        });
    }

    group.finish();
}

fn bench_initialize(c: &mut Criterion) {
    let config = StarfieldConfig::compact();
    c.bench_function("initialize_compact", |b| {
        b.iter(|| {
            let mut rng = create_rng(7);
            black_box(StarField::initialize(&config, &mut rng).expect("valid config"))
        });
    });
}

criterion_group!(benches, bench_advance, bench_project, bench_initialize);
criterion_main!(benches);
