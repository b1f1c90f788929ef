//! `curry` and `uncurry`.

use std::rc::Rc;

use super::curried::Curried;
use super::error::{CurryError, CurryResult};
use super::spread::Spread;
use super::state::{ArgumentBuffer, CurryState};

type Spreader<A, R> = Rc<dyn Fn(ArgumentBuffer<A>) -> CurryResult<R>>;

/// Converts a function of `arity` arguments into a curried chain.
///
/// Every application records its argument into a private copy of the
/// argument buffer. Once `arity` arguments have been collected the function is
/// called with them in order and the chain completes with its result. With
/// `arity == 0` the function is called immediately and the returned chain is
/// already complete.
///
/// # Errors
///
/// Returns [`CurryError::ArityMismatch`] if `arity` differs from the number of
/// parameters of `function`.
///
/// # Examples
///
/// ```rust
/// use recurry::curry::{curry, CurryError};
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// let curried = curry(3, volume).unwrap();
/// let with_width = curried.apply(2).unwrap();
/// let with_width_height = with_width.apply(3).unwrap();
/// assert!(with_width_height.is_function());
///
/// let result = with_width_height.apply(4).unwrap();
/// assert_eq!(result.as_value(), Some(&24));
///
/// assert_eq!(
///     result.apply(5).unwrap_err(),
///     CurryError::ArityExceeded { arity: 3, supplied: 4 }
/// );
/// assert_eq!(
///     curry(2, volume).unwrap_err(),
///     CurryError::ArityMismatch { expected: 2, actual: 3 }
/// );
/// ```
pub fn curry<A, R, F, M>(arity: usize, function: F) -> CurryResult<Curried<A, R>>
where
    A: Clone + 'static,
    R: 'static,
    F: Spread<A, R, M> + 'static,
{
    if arity != F::ARITY {
        tracing::debug!(
            expected = arity,
            actual = F::ARITY,
            "declared arity does not match the function"
        );
        return Err(CurryError::ArityMismatch {
            expected: arity,
            actual: F::ARITY,
        });
    }

    tracing::trace!(arity, "building curried chain");
    let spreader: Spreader<A, R> =
        Rc::new(move |arguments| Spread::<A, R, M>::call_spread(&function, arguments));
    collect(spreader, CurryState::new(arity))
}

fn collect<A, R>(spreader: Spreader<A, R>, state: CurryState<A>) -> CurryResult<Curried<A, R>>
where
    A: Clone + 'static,
    R: 'static,
{
    if state.is_complete() {
        tracing::trace!(arity = state.arity(), "curried chain complete");
        return spreader(state.into_arguments()).map(Curried::value);
    }

    Ok(Curried::try_function(move |argument| {
        collect(Rc::clone(&spreader), state.fill(argument))
    }))
}

/// A curried chain exposed as a function of all of its arguments at once.
///
/// Built by [`uncurry`].
pub struct Uncurried<A, R> {
    arity: usize,
    curried: Curried<A, R>,
}

/// Converts a curried chain of `arity` levels into a function taking all
/// `arity` arguments in one call.
///
/// No check happens here: the chain's depth is only discovered while the
/// arguments are fed into it by [`Uncurried::call`].
///
/// # Examples
///
/// ```rust
/// use recurry::curry::{curry, uncurry};
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// let uncurried = uncurry(3, curry(3, add_three).unwrap());
/// assert_eq!(uncurried.call([1, 2, 3]), Ok(add_three(1, 2, 3)));
/// ```
pub const fn uncurry<A, R>(arity: usize, curried: Curried<A, R>) -> Uncurried<A, R> {
    Uncurried { arity, curried }
}

impl<A, R> Uncurried<A, R> {
    /// The declared number of positional arguments.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Borrows the underlying chain.
    ///
    /// ```rust
    /// use recurry::curry::{curry, uncurry};
    ///
    /// let uncurried = uncurry(2, curry(2, |first: u8, second: u8| first + second).unwrap());
    /// let step = uncurried.curried().apply(1).unwrap();
    /// assert_eq!(step.apply(2).unwrap().into_value(), Ok(3));
    /// ```
    pub const fn curried(&self) -> &Curried<A, R> {
        &self.curried
    }

    /// Returns the underlying chain, undoing [`uncurry`].
    pub fn into_curried(self) -> Curried<A, R> {
        self.curried
    }

    /// Consumes the function and feeds it the positional arguments.
    ///
    /// Behaves like [`Uncurried::call`] but works for result types that are
    /// not `Clone`.
    ///
    /// # Errors
    ///
    /// The same as [`Uncurried::call`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recurry::curry::{curry, uncurry};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Total(u64);
    ///
    /// let total = uncurry(2, curry(2, |a: u64, b: u64| Total(a + b)).unwrap());
    /// assert_eq!(total.call_once([1, 2]), Ok(Total(3)));
    /// ```
    pub fn call_once<I>(self, arguments: I) -> CurryResult<R>
    where
        I: IntoIterator<Item = A>,
    {
        let arguments = self.check_count(arguments)?;
        let arity = self.arity;
        self.curried
            .into_applied(arguments)?
            .into_value()
            .map_err(|error| declared_arity(error, arity))
    }

    fn check_count<I>(&self, arguments: I) -> CurryResult<ArgumentBuffer<A>>
    where
        I: IntoIterator<Item = A>,
    {
        let arguments: ArgumentBuffer<A> = arguments.into_iter().collect();
        let supplied = arguments.len();
        tracing::trace!(arity = self.arity, supplied, "calling uncurried chain");

        if supplied > self.arity {
            tracing::debug!(arity = self.arity, supplied, "too many positional arguments");
            return Err(CurryError::ArityExceeded {
                arity: self.arity,
                supplied,
            });
        }
        if supplied < self.arity {
            tracing::debug!(arity = self.arity, supplied, "too few positional arguments");
            return Err(CurryError::ArityMismatch {
                expected: self.arity,
                actual: supplied,
            });
        }
        Ok(arguments)
    }
}

impl<A, R: Clone> Uncurried<A, R> {
    /// Feeds the positional arguments into the chain one at a time and
    /// returns the final value.
    ///
    /// The chain itself is only cloned when no arguments are declared, since
    /// a zero-arity function hands out its stored value on every call. Use
    /// [`Uncurried::call_once`] for results that are not `Clone`.
    ///
    /// # Errors
    ///
    /// - [`CurryError::ArityExceeded`] if more arguments than the arity are
    ///   given, or if the chain completes before all of them are consumed.
    /// - [`CurryError::ArityMismatch`] if fewer arguments than the arity are
    ///   given.
    /// - [`CurryError::Incomplete`] if the chain still awaits arguments after
    ///   all of them were applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recurry::curry::{uncurry, Curried, CurryError};
    ///
    /// let two_levels: Curried<i32, i32> =
    ///     Curried::function(|first: i32| Curried::function(move |second: i32| Curried::value(first * second)));
    ///
    /// assert_eq!(uncurry(2, two_levels.clone()).call([6, 7]), Ok(42));
    /// assert_eq!(
    ///     uncurry(3, two_levels).call([6, 7, 8]),
    ///     Err(CurryError::ArityExceeded { arity: 2, supplied: 3 })
    /// );
    /// ```
    pub fn call<I>(&self, arguments: I) -> CurryResult<R>
    where
        I: IntoIterator<Item = A>,
    {
        let arguments = self.check_count(arguments)?;
        self.curried
            .apply_all(arguments)?
            .into_value()
            .map_err(|error| declared_arity(error, self.arity))
    }
}

fn declared_arity(error: CurryError, arity: usize) -> CurryError {
    match error {
        CurryError::Incomplete { supplied, .. } => CurryError::Incomplete { arity, supplied },
        other => other,
    }
}

impl<A, R: Clone> Clone for Uncurried<A, R> {
    fn clone(&self) -> Self {
        Self {
            arity: self.arity,
            curried: self.curried.clone(),
        }
    }
}

impl<A, R: std::fmt::Debug> std::fmt::Debug for Uncurried<A, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Uncurried")
            .field("arity", &self.arity)
            .field("curried", &self.curried)
            .finish()
    }
}
