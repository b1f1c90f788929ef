//! Error types for curried and uncurried application.
//!
//! Every error is local to the chain that produced it: a chain that reported
//! an error can still be applied to other arguments.

use thiserror::Error;

/// Result alias used throughout the `curry` module.
pub type CurryResult<T> = Result<T, CurryError>;

/// Represents a violation of an arity contract.
///
/// Each variant carries the arity that was expected and how many arguments
/// were actually supplied.
///
/// # Examples
///
/// ```rust
/// use recurry::curry::CurryError;
///
/// let error = CurryError::ArityExceeded { arity: 3, supplied: 4 };
/// assert_eq!(
///     error.to_string(),
///     "arity exceeded: chain of arity 3 received argument number 4"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum CurryError {
    /// The declared arity does not match the parameter count of the function,
    /// or fewer positional arguments were supplied than declared.
    #[error("arity mismatch: expected {expected} arguments, got {actual}")]
    ArityMismatch {
        /// The declared arity.
        expected: usize,
        /// The parameter count of the function, or the number of positional
        /// arguments supplied.
        actual: usize,
    },
    /// More arguments were applied than the arity permits.
    #[error("arity exceeded: chain of arity {arity} received argument number {supplied}")]
    ArityExceeded {
        /// The arity of the chain that was exceeded.
        arity: usize,
        /// The number of arguments supplied, including the rejected one.
        supplied: usize,
    },
    /// A value was requested from a chain that still awaits arguments.
    #[error("incomplete application: expected a value after {arity} arguments, chain still awaits more after {supplied}")]
    Incomplete {
        /// The arity at which the chain was expected to be complete.
        arity: usize,
        /// The number of arguments applied so far.
        supplied: usize,
    },
}

impl CurryError {
    /// Returns the number of arguments supplied when the error occurred.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recurry::curry::CurryError;
    ///
    /// assert_eq!(CurryError::Incomplete { arity: 2, supplied: 2 }.supplied(), 2);
    /// assert_eq!(CurryError::ArityMismatch { expected: 3, actual: 1 }.supplied(), 1);
    /// ```
    #[must_use]
    pub const fn supplied(&self) -> usize {
        match *self {
            Self::ArityMismatch { actual, .. } => actual,
            Self::ArityExceeded { supplied, .. } | Self::Incomplete { supplied, .. } => supplied,
        }
    }
}

static_assertions::assert_impl_all!(CurryError: std::error::Error, Send, Sync, Copy);
