//! Generation benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use mcdata_codegen::java::JavaEmitter;
use mcdata_codegen::{Generator, GeneratorConfig, Synthesizer};
use mcdata_schema::DescriptorTables;
use std::hint::black_box;

fn benchmark_synthesize(c: &mut Criterion) {
    let config = GeneratorConfig::default();
    let tables = DescriptorTables::builtin(config.get_class_name());

    c.bench_function("synthesize_builtin", |b| {
        b.iter(|| Synthesizer::new(black_box(&tables), &config).synthesize())
    });
}

fn benchmark_emit(c: &mut Criterion) {
    let class = Generator::default().model().expect("model");

    c.bench_function("emit_builtin", |b| {
        b.iter(|| JavaEmitter::new(black_box(&class)).emit())
    });
}

fn benchmark_generate(c: &mut Criterion) {
    let generator = Generator::default();

    c.bench_function("generate_builtin", |b| b.iter(|| black_box(&generator).generate()));
}

criterion_group!(benches, benchmark_synthesize, benchmark_emit, benchmark_generate);
criterion_main!(benches);
