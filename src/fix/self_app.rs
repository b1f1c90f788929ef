//! Anonymous recursion through self-application.

use std::fmt;
use std::rc::Rc;

/// Shared single-argument function, the usual target type of [`self_app`].
pub type RecFn<T, R> = Rc<dyn Fn(T) -> R>;

/// A function value that receives itself.
///
/// `Rec<A>` is the nominal form of the recursive type `Rec<A> = Rec<A> -> A`:
/// it wraps a single call method instead of naming an infinitely expanding
/// function type. [`Rec::apply_self`] is `rec(rec)`.
///
/// # Examples
///
/// Factorial written as a function of itself, then applied to itself:
///
/// ```rust
/// use recurry::fix::{Rec, RecFn};
/// use std::rc::Rc;
///
/// let factorial: Rec<RecFn<u64, u64>> = Rec::new(|rec: &Rec<RecFn<u64, u64>>| -> RecFn<u64, u64> {
///     let rec = rec.clone();
///     Rc::new(move |n: u64| if n == 0 { 1 } else { n * rec.apply_self()(n - 1) })
/// });
///
/// assert_eq!(factorial.apply_self()(5), 120);
/// ```
pub struct Rec<A>(Rc<dyn Fn(&Rec<A>) -> A>);

impl<A> Rec<A> {
    /// Wraps a function that is handed a self-referential value.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&Self) -> A + 'static,
    {
        Self(Rc::new(body))
    }

    /// Calls the wrapped function with `rec`.
    pub fn call(&self, rec: &Self) -> A {
        (self.0)(rec)
    }

    /// Calls the wrapped function with itself.
    pub fn apply_self(&self) -> A {
        self.call(self)
    }
}

impl<A> Clone for Rec<A> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A> fmt::Debug for Rec<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Rec").finish_non_exhaustive()
    }
}

/// Zero-argument handle to the recursive function under construction.
///
/// Passed to the body of [`self_app`]; [`SelfAccessor::get`] yields the
/// recursive function. Evaluation is deferred until `get` is called, so
/// building the function never unrolls the recursion eagerly.
pub struct SelfAccessor<A>(Rc<dyn Fn() -> A>);

impl<A> SelfAccessor<A> {
    /// Creates an accessor from a thunk.
    pub fn new<F>(thunk: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self(Rc::new(thunk))
    }

    /// Returns the recursive function.
    pub fn get(&self) -> A {
        (self.0)()
    }
}

impl<A> Clone for SelfAccessor<A> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A> fmt::Debug for SelfAccessor<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SelfAccessor").finish_non_exhaustive()
    }
}

/// Builds a recursive function from a body that only refers to itself
/// through an accessor.
///
/// Internally a [`Rec`] `core` is defined as
/// `rec => body(SelfAccessor(() => rec(rec)))` and the result is
/// `core(core)`. Inside `body`, `self_accessor.get()` evaluates `rec(rec)`
/// again at the moment of the recursive call, which yields a function that
/// behaves exactly like the one returned here.
///
/// Termination is up to `body`: without a base case the recursion runs
/// until the stack overflows. No depth limit is imposed.
///
/// # Examples
///
/// ```rust
/// use recurry::fix::{self_app, RecFn, SelfAccessor};
/// use std::rc::Rc;
///
/// let factorial = self_app(|rec: SelfAccessor<RecFn<u64, u64>>| -> RecFn<u64, u64> {
///     Rc::new(move |n: u64| if n == 0 { 1 } else { n * rec.get()(n - 1) })
/// });
///
/// assert_eq!(factorial(5), 120);
/// assert_eq!(factorial(0), 1);
/// ```
///
/// Any target type works, including functions of several arguments:
///
/// ```rust
/// use recurry::fix::{self_app, SelfAccessor};
/// use std::rc::Rc;
///
/// type MaxNat = Rc<dyn Fn(u32, u32) -> u32>;
///
/// let max_nat = self_app(|rec: SelfAccessor<MaxNat>| -> MaxNat {
///     Rc::new(move |m: u32, n: u32| {
///         if m == 0 {
///             n
///         } else if n == 0 {
///             m
///         } else {
///             1 + rec.get()(m - 1, n - 1)
///         }
///     })
/// });
///
/// assert_eq!(max_nat(10, 6), 10);
/// assert_eq!(max_nat(6, 10), 10);
/// ```
pub fn self_app<A, F>(body: F) -> A
where
    A: 'static,
    F: Fn(SelfAccessor<A>) -> A + 'static,
{
    tracing::trace!("building fixed point by self-application");
    let core = Rec::new(move |rec: &Rec<A>| {
        let rec = rec.clone();
        body(SelfAccessor::new(move || rec.apply_self()))
    });
    core.apply_self()
}

static_assertions::assert_not_impl_any!(Rec<u64>: Send, Sync);
static_assertions::assert_not_impl_any!(SelfAccessor<u64>: Send, Sync);
