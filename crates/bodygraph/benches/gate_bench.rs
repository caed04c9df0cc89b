use bodygraph::definition::compute_definition;
use bodygraph::gates::gate_and_line;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::BTreeSet;

fn bench_gate_and_line(c: &mut Criterion) {
    c.bench_function("gate_and_line", |b| {
        b.iter(|| gate_and_line(black_box(213.7)))
    });

    c.bench_function("gate_and_line_full_circle", |b| {
        b.iter(|| {
            for step in 0..360 {
                black_box(gate_and_line(black_box(step as f64 + 0.5)));
            }
        })
    });
}

fn bench_compute_definition(c: &mut Criterion) {
    let active: BTreeSet<u8> = [1, 8, 3, 60, 20, 34, 10, 25, 46, 15, 21, 45, 6, 59, 41, 30]
        .into_iter()
        .collect();

    c.bench_function("compute_definition", |b| {
        b.iter(|| compute_definition(black_box(&active)))
    });
}

criterion_group!(benches, bench_gate_and_line, bench_compute_definition);
criterion_main!(benches);
