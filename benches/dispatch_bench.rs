//! Benchmark for curried dispatch: accumulation, invocation, and
//! composed pipelines.
//!
//! Measures the per-call cost of the dispatch contract.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use currier::compose::compose_stages;
use currier::function::{ArityFunction, CurriedFunction};
use currier::value::Value;
use std::hint::black_box;

fn weighted(arity: usize) -> CurriedFunction {
    ArityFunction::of_arity(arity, |frame| {
        let mut total: i64 = 0;
        for (index, value) in frame.values().iter().enumerate() {
            let weight = i64::try_from(index + 1).unwrap_or(1);
            total = total.wrapping_add(value.as_int().unwrap_or(0).wrapping_mul(weight));
        }
        Ok(Value::Int(total))
    })
    .curried()
}

// =============================================================================
// Dispatch Benchmarks
// =============================================================================

fn benchmark_one_shot_call(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("one_shot_call");

    for arity in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("arity", arity), &arity, |bencher, &arity| {
            let function = weighted(arity);
            let arguments: Vec<Value> = (0..arity).map(|index| Value::Int(index as i64)).collect();
            bencher.iter(|| {
                let result = function.call(black_box(arguments.clone()));
                black_box(result)
            });
        });
    }

    group.finish();
}

fn benchmark_argument_at_a_time(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("argument_at_a_time");

    for arity in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("arity", arity), &arity, |bencher, &arity| {
            let function = weighted(arity);
            bencher.iter(|| {
                let mut current = Value::Function(function.clone());
                for index in 0..arity {
                    let callable = current.into_function().expect("still partial");
                    current = callable.call([Value::Int(index as i64)]).expect("in contract");
                }
                black_box(current)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Composition Benchmarks
// =============================================================================

fn benchmark_composed_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("composed_pipeline");

    let add_one = ArityFunction::of_arity(1, |frame| {
        Ok(Value::Int(frame.value(0).as_int().unwrap_or(0).wrapping_add(1)))
    })
    .curried();

    for stage_count in [2, 8, 32] {
        group.bench_with_input(
            BenchmarkId::new("stages", stage_count),
            &stage_count,
            |bencher, &stage_count| {
                let pipeline =
                    compose_stages(std::iter::repeat_n(add_one.clone(), stage_count));
                bencher.iter(|| {
                    let result = pipeline.apply(black_box(Value::Int(0)));
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_one_shot_call,
    benchmark_argument_at_a_time,
    benchmark_composed_pipeline
);
criterion_main!(benches);
