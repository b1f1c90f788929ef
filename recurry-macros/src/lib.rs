//! Procedural macros for recurry.
//!
//! This crate provides the compile-time arity counterparts of
//! `recurry::curry::curry` and `recurry::curry::uncurry`:
//!
//! - [`curry!`]: converts a closure or function into nested unary closures
//! - [`uncurry!`]: converts nested unary closures into one closure taking every
//!   argument at once
//!
//! Because the arity is fixed when the macro expands, supplying the wrong
//! number of arguments is a type error rather than a runtime error.
//!
//! # Example
//!
//! ```rust,ignore
//! use recurry::curry::{curry, uncurry};
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! assert_eq!(add(5)(3), 8);
//!
//! let add_again = uncurry!(add, 2);
//! assert_eq!(add_again(5, 3), 8);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;
mod uncurry;

use proc_macro::TokenStream;

/// Converts a closure or function into curried form.
///
/// # Syntax
///
/// ```rust,ignore
/// curry!(|a, b, c| body)       // arity taken from the closure
/// curry!(|a, b, c| body, 3)    // declared arity, checked against the closure
/// curry!(function_name, 3)     // function path with arity
/// ```
///
/// # Examples
///
/// ```rust,ignore
/// use recurry::curry::curry;
///
/// fn fib(count: u64, previous: u64, last: u64) -> u64 {
///     if count == 0 { last } else { fib(count - 1, last, previous + last) }
/// }
///
/// let curried = curry!(fib, 3);
/// assert_eq!(curried(5)(0)(1), 8);
///
/// // Partial applications are reusable
/// let from_zero_one = curried(4);
/// assert_eq!(from_zero_one(0)(1), 5);
/// assert_eq!(from_zero_one(0)(1), 5);
/// ```
///
/// Arity zero evaluates the function, arity one wraps it:
///
/// ```rust,ignore
/// use recurry::curry::curry;
///
/// let value = curry!(|| 42);
/// assert_eq!(value, 42);
///
/// let double = curry!(|x: i32| x * 2);
/// assert_eq!(double(21), 42);
/// ```
///
/// A declared arity that does not match the closure is rejected:
///
/// ```rust,ignore
/// use recurry::curry::curry;
///
/// let add = curry!(|a: i32, b: i32| a + b, 3);
/// ```
///
/// So is applying a completed chain again:
///
/// ```rust,ignore
/// use recurry::curry::curry;
///
/// let add = curry!(|a: i32, b: i32| a + b);
/// let _ = add(1)(2)(3);
/// ```
///
/// # Type constraints
///
/// Every argument except the last must implement `Clone`, since partial
/// applications share earlier arguments through `Rc` and clone them out on
/// each call.
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::expand(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Converts a curried function into one taking every argument at once.
///
/// # Syntax
///
/// ```rust,ignore
/// uncurry!(curried, 3)                  // any expression with an arity
/// uncurry!(|a| move |b| move |c| body)  // arity taken from the closure chain
/// ```
///
/// # Examples
///
/// ```rust,ignore
/// use recurry::curry::{curry, uncurry};
///
/// let add = uncurry!(|a: i32| move |b: i32| a + b);
/// assert_eq!(add(2, 3), 5);
///
/// // Round trip through curry!
/// let multiply = uncurry!(curry!(|a: i32, b: i32, c: i32| a * b * c), 3);
/// assert_eq!(multiply(2, 3, 4), 24);
/// ```
///
/// Declaring more levels than the curried function has does not compile:
///
/// ```rust,ignore
/// use recurry::curry::uncurry;
///
/// let add = uncurry!(|a: i32| move |b: i32| a + b, 3);
/// ```
#[proc_macro]
pub fn uncurry(input: TokenStream) -> TokenStream {
    uncurry::expand(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
