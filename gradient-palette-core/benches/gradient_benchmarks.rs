//! Gradient generation benchmarks
//!
//! Covers grid walking at a few sizes, deduplication, and serialization
//! of a generated palette to each format.
//!
//! Run with: `cargo bench --bench gradient_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gradient_palette::{
    create_gradient, deduplicate, presets, Hsv, OutputFormat, Palette, StepCounts,
};

fn benchmark_create_gradient(c: &mut Criterion) {
    let start = Hsv::new(40.0, 0.2, 0.3);
    let end = Hsv::new(300.0, 0.7, 0.8);

    let mut group = c.benchmark_group("create_gradient");
    for steps in [(6, 3, 4), (16, 8, 8), (36, 10, 10)] {
        let steps = StepCounts::from(steps);
        group.bench_with_input(
            BenchmarkId::from_parameter(steps.total()),
            &steps,
            |b, &steps| b.iter(|| create_gradient(black_box(start), black_box(end), steps)),
        );
    }
    group.finish();
}

fn benchmark_deduplicate(c: &mut Criterion) {
    let colors = presets::extensive_palette();
    c.bench_function("deduplicate_extensive", |b| {
        b.iter(|| deduplicate(black_box(&colors)))
    });
}

fn benchmark_writers(c: &mut Criterion) {
    let palette = Palette::new("bench", presets::extensive_palette());

    let mut group = c.benchmark_group("write_palette");
    for format in OutputFormat::ALL {
        group.bench_function(format.to_string(), |b| {
            b.iter(|| {
                let mut buffer = Vec::with_capacity(64 * 1024);
                let mut writer = format.writer(&mut buffer);
                palette.write_to(&mut writer).ok();
                drop(writer);
                black_box(buffer.len())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_create_gradient,
    benchmark_deduplicate,
    benchmark_writers
);
criterion_main!(benches);
