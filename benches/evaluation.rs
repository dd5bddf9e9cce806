use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lumina_calc::{evaluate, evaluate_expression, format_value};

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let expr = "2 + 3 * 4";

    group.bench_function("pipeline_arithmetic", |b| {
        b.iter(|| evaluate_expression(black_box(expr)))
    });

    group.bench_function("typed_arithmetic", |b| {
        b.iter(|| evaluate(black_box(expr)).unwrap())
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0 + 3.0 * 4.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";

    group.bench_function("pipeline_complex_arithmetic", |b| {
        b.iter(|| evaluate_expression(black_box(expr)))
    });

    group.bench_function("native_rust_complex_arithmetic", |b| {
        b.iter(|| black_box((10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0))
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });
}

/// Benchmark scientific function calls
fn benchmark_scientific_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scientific Function Evaluation");

    let expr = "sqrt(144) + sin(0) * cos(0)";

    group.bench_function("pipeline_scientific", |b| {
        b.iter(|| evaluate_expression(black_box(expr)))
    });

    group.bench_function("native_rust_scientific", |b| {
        b.iter(|| black_box(144.0_f64.sqrt() + 0.0_f64.sin() * 0.0_f64.cos()))
    });

    group.bench_function("meval_scientific", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });
}

/// Benchmark display formatting
fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("Display Formatting");

    group.bench_function("format_integer_with_grouping", |b| {
        b.iter(|| format_value(black_box(123_456_789.0)))
    });

    group.bench_function("format_fraction", |b| {
        b.iter(|| format_value(black_box(1.0 / 3.0)))
    });

    group.bench_function("native_to_string", |b| {
        b.iter(|| black_box(123_456_789.0_f64).to_string())
    });
}

/// Grouping benchmarks
criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_scientific_functions,
    benchmark_formatting,
);
criterion_main!(benches);
