//! # recurry
//!
//! Curry/uncurry transformations for fixed arities and anonymous recursion
//! through self-application.
//!
//! ## Overview
//!
//! - **Currying**: [`curry::curry`] turns an n-ary function into a chain of
//!   unary steps, [`curry::uncurry`] turns such a chain back into a function
//!   taking all of its arguments at once. Arity violations are reported as
//!   [`curry::CurryError`] values.
//! - **Static currying**: the `curry!` and `uncurry!` macros do the same at a
//!   compile-time arity, so mismatches are type errors.
//! - **Fixed points**: [`fix::self_app`] builds a recursive function from a
//!   body that only refers to itself through an accessor, [`fix::Rec`] is the
//!   self-referential value behind it and [`fix::fix`] is the open-recursion
//!   variant.
//!
//! ## Feature Flags
//!
//! - `curry`: runtime-arity curry and uncurry
//! - `fix`: fixed-point combinators
//! - `derive`: the `curry!` / `uncurry!` procedural macros
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use recurry::prelude::*;
//! use std::rc::Rc;
//!
//! fn fib(count: u64, previous: u64, last: u64) -> u64 {
//!     if count == 0 { last } else { fib(count - 1, last, previous + last) }
//! }
//!
//! let curried = curry(3, fib).unwrap();
//! let uncurried = uncurry(3, curried);
//! assert_eq!(uncurried.call([5, 0, 1]), Ok(fib(5, 0, 1)));
//!
//! let factorial: Rc<dyn Fn(u64) -> u64> = self_app(|rec: SelfAccessor<Rc<dyn Fn(u64) -> u64>>| {
//!     Rc::new(move |n| if n == 0 { 1 } else { n * rec.get()(n - 1) })
//! });
//! assert_eq!(factorial(5), 120);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and macros.
///
/// # Usage
///
/// ```rust
/// use recurry::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "curry")]
    pub use crate::curry::*;

    #[cfg(feature = "fix")]
    pub use crate::fix::*;
}

#[cfg(feature = "curry")]
pub mod curry;

#[cfg(feature = "fix")]
pub mod fix;
