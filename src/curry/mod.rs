//! Curried and uncurried function representations.
//!
//! This module converts between a function taking all of its arguments at
//! once and a chain of functions taking one argument each.
//!
//! # Overview
//!
//! - [`curry`]: converts a function of a declared arity into a [`Curried`]
//!   chain
//! - [`uncurry`]: converts a [`Curried`] chain into an [`Uncurried`] function
//!   called with every argument at once
//! - [`Curried`]: a step awaiting the next argument, or the final value
//! - [`CurryError`]: arity contract violations
//! - `curry!` / `uncurry!` (feature `derive`): the same transformations at a
//!   compile-time arity
//!
//! The runtime surface works on functions whose parameters share one type
//! `A` and checks arities when the chain is built and while it is applied.
//! The macro surface accepts heterogeneous parameter types and turns every
//! arity violation into a compile error.
//!
//! # Examples
//!
//! ## Round trip
//!
//! ```rust
//! use recurry::curry::{curry, uncurry};
//!
//! fn fib(count: u64, previous: u64, last: u64) -> u64 {
//!     if count == 0 { last } else { fib(count - 1, last, previous + last) }
//! }
//!
//! let round_trip = uncurry(3, curry(3, fib).unwrap());
//! for count in 0..=5 {
//!     assert_eq!(round_trip.call([count, 0, 1]), Ok(fib(count, 0, 1)));
//! }
//! ```
//!
//! ## Over-application
//!
//! ```rust
//! use recurry::curry::{curry, CurryError};
//!
//! let add = curry(2, |first: i32, second: i32| first + second).unwrap();
//! let done = add.apply_all([1, 2]).unwrap();
//!
//! assert_eq!(done.apply(3).unwrap_err(), CurryError::ArityExceeded { arity: 2, supplied: 3 });
//! ```
//!
//! ## Compile-time arity
//!
//! ```rust
//! # #[cfg(feature = "derive")] {
//! use recurry::curry::{curry, uncurry};
//!
//! fn fib(count: u64, previous: u64, last: u64) -> u64 {
//!     if count == 0 { last } else { fib(count - 1, last, previous + last) }
//! }
//!
//! let curried = curry!(fib, 3);
//! assert_eq!(curried(5)(0)(1), 8);
//!
//! let from_four = curried(4);
//! assert_eq!(from_four(0)(1), 5);
//! assert_eq!(from_four(1)(1), 8);
//!
//! let label = curry!(|name: String, count: usize| format!("{name}: {count}"));
//! assert_eq!(label("apples".to_string())(3), "apples: 3");
//!
//! assert_eq!(curry!(|| 42), 42);
//!
//! let add = uncurry!(|a: i32| move |b: i32| a + b);
//! assert_eq!(add(2, 3), 5);
//!
//! let multiply = uncurry!(curry!(|a: i32, b: i32, c: i32| a * b * c), 3);
//! assert_eq!(multiply(2, 3, 4), 24);
//! # }
//! ```
//!
//! The following examples need the `derive` feature; without it they are
//! not compiled at all.
//!
//! A closure whose parameter count differs from the declared arity does not
//! compile:
//!
#![cfg_attr(feature = "derive", doc = "```rust,compile_fail")]
#![cfg_attr(not(feature = "derive"), doc = "```rust,ignore")]
//! use recurry::curry::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b, 3);
//! ```
//!
//! Neither does applying a completed chain:
//!
#![cfg_attr(feature = "derive", doc = "```rust,compile_fail")]
#![cfg_attr(not(feature = "derive"), doc = "```rust,ignore")]
//! use recurry::curry::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! let _ = add(1)(2)(3);
//! ```
//!
//! Nor uncurrying more levels than a chain has:
//!
#![cfg_attr(feature = "derive", doc = "```rust,compile_fail")]
#![cfg_attr(not(feature = "derive"), doc = "```rust,ignore")]
//! use recurry::curry::uncurry;
//!
//! let add = uncurry!(|a: i32| move |b: i32| a + b, 3);
//! let _ = add(1, 2, 3);
//! ```

mod curried;
mod error;
mod spread;
mod state;
mod transform;

pub use curried::Curried;
pub use error::{CurryError, CurryResult};
pub use spread::Spread;
pub use state::{ArgumentBuffer, CurryState, INLINE_ARGUMENTS};
pub use transform::{Uncurried, curry, uncurry};

#[cfg(feature = "derive")]
pub use recurry_macros::{curry, uncurry};
