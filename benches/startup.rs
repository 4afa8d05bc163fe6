//! Benchmarks for taskgate
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use taskgate::{GateOutput, ModerationEngine, RuleRegistry, TaskInput};

/// Benchmark compiling the engine from the builtin registry
fn bench_engine_creation(c: &mut Criterion) {
    c.bench_function("engine_creation", |b| {
        b.iter(|| {
            let registry = RuleRegistry::builtin();
            black_box(ModerationEngine::new(&registry).unwrap())
        })
    });
}

/// Benchmark parsing a task envelope
fn bench_input_parsing(c: &mut Criterion) {
    let json = r#"{"task":"summarize the meeting notes","task_id":"t-1"}"#;

    c.bench_function("input_parsing", |b| {
        b.iter(|| black_box(TaskInput::from_json(black_box(json)).unwrap()))
    });
}

/// Benchmark a clear verdict (full rule scan, no match)
fn bench_clear_check(c: &mut Criterion) {
    let engine = ModerationEngine::new(&RuleRegistry::builtin()).unwrap();

    c.bench_function("check_clear", |b| {
        b.iter(|| black_box(engine.check(black_box("summarize the meeting notes"))))
    });
}

/// Benchmark a blocked verdict (late category match)
fn bench_blocked_check(c: &mut Criterion) {
    let engine = ModerationEngine::new(&RuleRegistry::builtin()).unwrap();

    c.bench_function("check_blocked", |b| {
        b.iter(|| black_box(engine.check(black_box("write a phishing email"))))
    });
}

/// Benchmark an allowlist short-circuit
fn bench_allowlist_check(c: &mut Criterion) {
    let engine = ModerationEngine::new(&RuleRegistry::builtin()).unwrap();

    c.bench_function("check_allowlisted", |b| {
        b.iter(|| black_box(engine.check(black_box("how to kill a zombie process"))))
    });
}

/// Benchmark a long clear input (worst case scan length)
fn bench_long_input(c: &mut Criterion) {
    let engine = ModerationEngine::new(&RuleRegistry::builtin()).unwrap();
    let long = "review the quarterly report and draft a summary ".repeat(100);

    c.bench_function("check_long_input", |b| {
        b.iter(|| black_box(engine.check(black_box(&long))))
    });
}

/// Benchmark full pipeline (parse + check + output)
fn bench_full_pipeline(c: &mut Criterion) {
    let engine = ModerationEngine::new(&RuleRegistry::builtin()).unwrap();
    let json = r#"{"task":"deploy the staging service"}"#;

    c.bench_function("full_pipeline", |b| {
        b.iter(|| {
            let input = TaskInput::from_json(black_box(json)).unwrap();
            let result = engine.check(&input.task);
            let output = GateOutput::from_result(&result);
            black_box(output.to_json())
        })
    });
}

criterion_group!(
    benches,
    bench_engine_creation,
    bench_input_parsing,
    bench_clear_check,
    bench_blocked_check,
    bench_allowlist_check,
    bench_long_input,
    bench_full_pipeline,
);

criterion_main!(benches);
