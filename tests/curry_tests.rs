//! Integration tests for runtime-arity `curry` and `uncurry`.
//!
//! The Fibonacci helpers mirror three ways of writing the same accumulator
//! function:
//! - `fib_internal`: all three arguments at once
//! - `fib_internal_c`: curried, recursing through the whole chain
//! - `fib_internal_cc`: curried, choosing the remaining chain from `count`

#![cfg(feature = "curry")]

use recurry::curry::{Curried, CurryError, curry, uncurry};
use rstest::rstest;

fn fib_internal(count: u64, fib_last_last: u64, fib_last: u64) -> u64 {
    if count == 0 {
        fib_last
    } else {
        fib_internal(count - 1, fib_last, fib_last_last + fib_last)
    }
}

fn fib_internal_c() -> Curried<u64, u64> {
    Curried::function(|count: u64| {
        Curried::function(move |fib_last_last: u64| {
            Curried::try_function(move |fib_last: u64| {
                if count == 0 {
                    Ok(Curried::value(fib_last))
                } else {
                    fib_internal_c().apply_all([count - 1, fib_last, fib_last_last + fib_last])
                }
            })
        })
    })
}

fn fib_internal_cc() -> Curried<u64, u64> {
    Curried::function(|count: u64| {
        if count == 0 {
            Curried::function(|_: u64| Curried::function(|fib_last: u64| Curried::value(fib_last)))
        } else {
            Curried::function(move |fib_last_last: u64| {
                Curried::try_function(move |fib_last: u64| {
                    fib_internal_cc().apply_all([count - 1, fib_last, fib_last_last + fib_last])
                })
            })
        }
    })
}

fn apply_three(chain: &Curried<u64, u64>, arguments: [u64; 3]) -> u64 {
    chain
        .apply_all(arguments)
        .and_then(Curried::into_value)
        .unwrap()
}

// =============================================================================
// Fibonacci call sites
// =============================================================================

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(2, 2)]
#[case(3, 3)]
#[case(4, 5)]
#[case(5, 8)]
fn fib_helpers_agree(#[case] count: u64, #[case] expected: u64) {
    assert_eq!(fib_internal(count, 0, 1), expected);
    assert_eq!(apply_three(&fib_internal_c(), [count, 0, 1]), expected);
    assert_eq!(apply_three(&fib_internal_cc(), [count, 0, 1]), expected);
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(5)]
fn curry_of_fib_internal(#[case] count: u64) {
    let curried = curry(3, fib_internal).unwrap();
    assert_eq!(apply_three(&curried, [count, 0, 1]), fib_internal(count, 0, 1));
}

#[rstest]
#[case(2)]
#[case(4)]
#[case(5)]
fn uncurry_of_fib_internal_c(#[case] count: u64) {
    let uncurried = uncurry(3, fib_internal_c());
    assert_eq!(uncurried.call([count, 0, 1]), Ok(fib_internal(count, 0, 1)));
}

#[rstest]
fn uncurry_of_curry_of_fib_internal() {
    let round_trip = uncurry(3, curry(3, fib_internal).unwrap());
    for count in 2..=5 {
        assert_eq!(round_trip.call([count, 0, 1]), Ok(fib_internal(count, 0, 1)));
    }
    // The same uncurried value can be called repeatedly.
    assert_eq!(round_trip.call([5, 0, 1]), round_trip.call([5, 0, 1]));
}

// =============================================================================
// Chain shape
// =============================================================================

#[rstest]
fn curried_chain_is_function_until_last_argument() {
    let curried = curry(3, |a: i64, b: i64, c: i64| a * 100 + b * 10 + c).unwrap();
    assert!(curried.is_function());

    let first = curried.apply(1).unwrap();
    assert!(first.is_function());
    assert_eq!(first.depth(), 1);

    let second = first.apply(2).unwrap();
    assert!(second.is_function());
    assert_eq!(second.as_value(), None);

    let third = second.apply(3).unwrap();
    assert!(third.is_value());
    assert_eq!(third.depth(), 3);
    assert_eq!(third.into_value(), Ok(123));
}

#[rstest]
fn zero_arity_curry_returns_value_directly() {
    let curried = curry::<i64, _, _, _>(0, || 99_i64).unwrap();
    assert!(curried.is_value());
    assert_eq!(curried.into_value(), Ok(99));
}

#[rstest]
fn partial_applications_do_not_share_buffers() {
    let curried = curry(3, |a: String, b: String, c: String| format!("{a}{b}{c}")).unwrap();
    let x = curried.apply("x".to_string()).unwrap();
    let xy = x.apply("y".to_string()).unwrap();
    let xz = x.apply("z".to_string()).unwrap();

    assert_eq!(
        xy.apply("1".to_string()).unwrap().into_value(),
        Ok("xy1".to_string())
    );
    assert_eq!(
        xz.apply("2".to_string()).unwrap().into_value(),
        Ok("xz2".to_string())
    );
    assert_eq!(
        xy.apply("3".to_string()).unwrap().into_value(),
        Ok("xy3".to_string())
    );
}

#[rstest]
fn curry_supports_arities_up_to_six() {
    let curried = curry(6, |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8| {
        [a, b, c, d, e, f].iter().map(|&digit| u32::from(digit)).sum::<u32>()
    })
    .unwrap();
    let result = curried.apply_all([1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(result.into_value(), Ok(21));
}

// =============================================================================
// Result types without Clone
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
struct Sum(u64);

#[rstest]
#[case([1, 2], Sum(3))]
#[case([0, 0], Sum(0))]
fn uncurry_of_curry_with_non_clone_result(#[case] arguments: [u64; 2], #[case] expected: Sum) {
    let round_trip = uncurry(2, curry(2, |a: u64, b: u64| Sum(a + b)).unwrap());
    assert_eq!(round_trip.call_once(arguments), Ok(expected));
}

#[rstest]
fn non_clone_result_through_the_chain() {
    let curried = curry(3, |a: u64, b: u64, c: u64| Sum(a * b + c)).unwrap();
    let partial = curried.apply(4).unwrap();

    let first = partial.apply(5).unwrap().into_applied([1]).unwrap();
    let second = partial.apply(6).unwrap().into_applied([2]).unwrap();

    assert_eq!(first.into_value(), Ok(Sum(21)));
    assert_eq!(second.into_value(), Ok(Sum(26)));
}

#[rstest]
fn non_clone_result_short_call_is_reported() {
    let round_trip = uncurry(2, curry(2, |a: u64, b: u64| Sum(a + b)).unwrap());
    assert_eq!(
        round_trip.call_once([1]),
        Err(CurryError::ArityMismatch {
            expected: 2,
            actual: 1
        })
    );
}

// =============================================================================
// Arity violations
// =============================================================================

#[rstest]
fn fourth_application_of_three_arity_chain_is_arity_exceeded() {
    let complete = curry(3, fib_internal)
        .unwrap()
        .apply_all([5, 0, 1])
        .unwrap();

    assert_eq!(
        complete.apply(7).unwrap_err(),
        CurryError::ArityExceeded {
            arity: 3,
            supplied: 4
        }
    );
    // The completed chain is untouched by the failed application.
    assert_eq!(complete.as_value(), Some(&8));
}

#[rstest]
fn uncurry_beyond_curry_depth_is_arity_exceeded() {
    let two_levels = curry(2, |a: u64, b: u64| a + b).unwrap();
    assert_eq!(
        uncurry(3, two_levels).call([1, 2, 3]),
        Err(CurryError::ArityExceeded {
            arity: 2,
            supplied: 3
        })
    );
}

#[rstest]
#[case(2, CurryError::ArityMismatch { expected: 2, actual: 3 })]
#[case(4, CurryError::ArityMismatch { expected: 4, actual: 3 })]
fn declared_arity_must_match_function(#[case] arity: usize, #[case] expected: CurryError) {
    assert_eq!(curry(arity, fib_internal).unwrap_err(), expected);
}

#[rstest]
#[case(&[1, 2], CurryError::ArityMismatch { expected: 3, actual: 2 })]
#[case(&[1, 2, 3, 4], CurryError::ArityExceeded { arity: 3, supplied: 4 })]
fn positional_argument_count_must_match(#[case] arguments: &[u64], #[case] expected: CurryError) {
    let uncurried = uncurry(3, curry(3, fib_internal).unwrap());
    assert_eq!(uncurried.call(arguments.iter().copied()), Err(expected));
}

#[rstest]
fn uncurry_short_of_curry_depth_is_incomplete() {
    let uncurried = uncurry(2, fib_internal_c());
    assert_eq!(
        uncurried.call([5, 0]),
        Err(CurryError::Incomplete {
            arity: 2,
            supplied: 2
        })
    );
}

#[rstest]
fn errors_do_not_poison_later_calls() {
    let uncurried = uncurry(3, curry(3, fib_internal).unwrap());
    assert!(uncurried.call([1]).is_err());
    assert!(uncurried.call([1, 2, 3, 4]).is_err());
    assert_eq!(uncurried.call([4, 0, 1]), Ok(5));
}
