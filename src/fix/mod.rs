//! Fixed-point combinators for anonymous recursion.
//!
//! A recursive function normally refers to itself by name. The combinators in
//! this module let a function be written without that name: its body receives
//! a handle to "itself" and recurses through the handle.
//!
//! # Overview
//!
//! - [`self_app`]: the self-application (Y-combinator) construction. The body
//!   receives a [`SelfAccessor`] and returns the recursive function.
//! - [`Rec`]: the self-referential function value behind [`self_app`], for
//!   writing `f(f)` directly.
//! - [`fix`]: open recursion, where the body receives the recursive call as a
//!   `&dyn Fn` parameter.
//!
//! # Stack depth
//!
//! None of these combinators limit or trampoline recursion. Each recursive
//! call costs stack frames, and a body without a base case overflows the
//! stack.
//!
//! # Examples
//!
//! Ackermann, written as a function that receives itself:
//!
//! ```rust
//! use recurry::fix::Rec;
//! use std::rc::Rc;
//!
//! type Ackermann = Rc<dyn Fn(u64, u64) -> u64>;
//!
//! let ack: Rec<Ackermann> = Rec::new(|rec: &Rec<Ackermann>| -> Ackermann {
//!     let rec = rec.clone();
//!     Rc::new(move |m: u64, n: u64| {
//!         if m == 0 {
//!             n + 1
//!         } else if n == 0 {
//!             rec.apply_self()(m - 1, 1)
//!         } else {
//!             rec.apply_self()(m - 1, rec.apply_self()(m, n - 1))
//!         }
//!     })
//! });
//!
//! assert_eq!(ack.apply_self()(3, 4), 125);
//! ```

mod open;
mod self_app;

pub use open::{Fix, fix};
pub use self_app::{Rec, RecFn, SelfAccessor, self_app};
