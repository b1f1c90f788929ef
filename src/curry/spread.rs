//! Positional application of a collected argument buffer.
//!
//! [`Spread`] is implemented for every `Fn` taking 0 to 6 arguments of one
//! type `A`. The `Marker` parameter is the function's own pointer type
//! (`fn(A, A) -> R` for a binary function); it only exists so the blanket
//! implementations for the different arities do not overlap, and it is
//! always inferred.

use super::error::{CurryError, CurryResult};
use super::state::ArgumentBuffer;

/// A function that can be called with a buffer of positional arguments.
///
/// # Examples
///
/// ```rust
/// use recurry::curry::{ArgumentBuffer, Spread};
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// fn arity_of<F: Spread<i32, i32, M>, M>(_: &F) -> usize {
///     F::ARITY
/// }
///
/// assert_eq!(arity_of(&add_three), 3);
///
/// let arguments: ArgumentBuffer<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(add_three.call_spread(arguments), Ok(6));
/// ```
pub trait Spread<A, R, Marker> {
    /// The number of positional parameters of the function.
    const ARITY: usize;

    /// Calls the function with the buffer's contents as positional arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::ArityMismatch`] when the buffer does not hold
    /// exactly [`Self::ARITY`] arguments.
    fn call_spread(&self, arguments: ArgumentBuffer<A>) -> CurryResult<R>;
}

macro_rules! argument_type {
    ($argument:ident) => {
        A
    };
}

macro_rules! impl_spread {
    ($arity:literal => $($argument:ident)*) => {
        impl<A, R, F> Spread<A, R, fn($(argument_type!($argument)),*) -> R> for F
        where
            F: Fn($(argument_type!($argument)),*) -> R,
        {
            const ARITY: usize = $arity;

            #[allow(unused_mut, unused_variables)]
            fn call_spread(&self, arguments: ArgumentBuffer<A>) -> CurryResult<R> {
                let mismatch = CurryError::ArityMismatch {
                    expected: $arity,
                    actual: arguments.len(),
                };
                if arguments.len() != $arity {
                    return Err(mismatch);
                }
                let mut arguments = arguments.into_iter();
                $(
                    let Some($argument) = arguments.next() else {
                        return Err(mismatch);
                    };
                )*
                Ok(self($($argument),*))
            }
        }
    };
}

impl_spread!(0 =>);
impl_spread!(1 => first);
impl_spread!(2 => first second);
impl_spread!(3 => first second third);
impl_spread!(4 => first second third fourth);
impl_spread!(5 => first second third fourth fifth);
impl_spread!(6 => first second third fourth fifth sixth);
