//! Benchmark for runtime-arity currying.
//!
//! Measures building chains, applying them one argument at a time, and
//! calling them positionally through `uncurry`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use recurry::curry::{curry, uncurry};
use std::hint::black_box;

fn fib_internal(count: u64, fib_last_last: u64, fib_last: u64) -> u64 {
    if count == 0 {
        fib_last
    } else {
        fib_internal(count - 1, fib_last, fib_last_last.wrapping_add(fib_last))
    }
}

// =============================================================================
// Building
// =============================================================================

fn benchmark_build(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry_build");

    group.bench_function("arity_3", |bencher| {
        bencher.iter(|| black_box(curry(3, fib_internal)));
    });

    group.finish();
}

// =============================================================================
// Application
// =============================================================================

fn benchmark_apply(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry_apply");

    let curried = curry(3, fib_internal).unwrap();
    group.bench_function("step_by_step", |bencher| {
        bencher.iter(|| {
            let result = curried
                .apply(black_box(20))
                .and_then(|chain| chain.apply(0))
                .and_then(|chain| chain.apply(1))
                .and_then(|chain| chain.into_value());
            black_box(result)
        });
    });

    group.bench_function("direct", |bencher| {
        bencher.iter(|| black_box(fib_internal(black_box(20), 0, 1)));
    });

    let partial = curried.apply(20).unwrap();
    group.bench_function("shared_partial", |bencher| {
        bencher.iter(|| {
            let result = partial.apply_all([black_box(0), 1]).and_then(|chain| chain.into_value());
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Positional calls
// =============================================================================

fn benchmark_uncurried_call(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("uncurried_call");

    let four = uncurry(4, curry(4, |a: u64, b: u64, c: u64, d: u64| a + b + c + d).unwrap());
    let six = uncurry(
        6,
        curry(6, |a: u64, b: u64, c: u64, d: u64, e: u64, f: u64| a + b + c + d + e + f).unwrap(),
    );

    group.bench_with_input(BenchmarkId::new("arity", 4), &four, |bencher, uncurried| {
        bencher.iter(|| black_box(uncurried.call(black_box([1, 2, 3, 4]))));
    });
    group.bench_with_input(BenchmarkId::new("arity", 6), &six, |bencher, uncurried| {
        bencher.iter(|| black_box(uncurried.call(black_box([1, 2, 3, 4, 5, 6]))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_build,
    benchmark_apply,
    benchmark_uncurried_call
);

criterion_main!(benches);
