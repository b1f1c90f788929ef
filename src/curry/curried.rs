//! The curried function value.

use std::fmt;
use std::rc::Rc;

use super::error::{CurryError, CurryResult};

type Step<A, R> = Rc<dyn Fn(A) -> CurryResult<Curried<A, R>>>;

enum Node<A, R> {
    Function(Step<A, R>),
    Value(R),
}

/// A function of one argument at a time.
///
/// A `Curried<A, R>` is either a step waiting for the next argument of type
/// `A`, or the final value of type `R`. It also remembers its depth, the
/// number of arguments applied to reach it, so applying one argument too many
/// can be reported as [`CurryError::ArityExceeded`] with the actual arity.
///
/// Steps are shared through [`Rc`], so cloning is cheap and a partial
/// application can be reused with different continuations.
///
/// # Examples
///
/// Hand-written curried addition:
///
/// ```rust
/// use recurry::curry::{Curried, CurryError};
///
/// let add: Curried<i32, i32> =
///     Curried::function(|first: i32| Curried::function(move |second: i32| Curried::value(first + second)));
///
/// let add_five = add.apply(5).unwrap();
/// assert!(add_five.is_function());
/// assert_eq!(add_five.apply(3).unwrap().into_value(), Ok(8));
/// assert_eq!(add_five.apply(10).unwrap().into_value(), Ok(15));
///
/// let done = add_five.apply(1).unwrap();
/// assert_eq!(done.apply(0).unwrap_err(), CurryError::ArityExceeded { arity: 2, supplied: 3 });
/// ```
pub struct Curried<A, R> {
    node: Node<A, R>,
    depth: usize,
}

impl<A, R> Curried<A, R> {
    /// Creates a step from a function returning the next link of the chain.
    pub fn function<F>(step: F) -> Self
    where
        F: Fn(A) -> Self + 'static,
    {
        Self::try_function(move |argument| Ok(step(argument)))
    }

    /// Creates a step from a fallible function.
    ///
    /// Errors returned by `step` are propagated by [`Curried::apply`].
    pub fn try_function<F>(step: F) -> Self
    where
        F: Fn(A) -> CurryResult<Self> + 'static,
    {
        Self {
            node: Node::Function(Rc::new(step)),
            depth: 0,
        }
    }

    /// Creates a completed chain holding `value`.
    pub const fn value(value: R) -> Self {
        Self {
            node: Node::Value(value),
            depth: 0,
        }
    }

    /// The number of arguments applied to reach this link.
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns `true` if the chain still awaits an argument.
    pub const fn is_function(&self) -> bool {
        matches!(self.node, Node::Function(_))
    }

    /// Returns `true` if the chain has produced its final value.
    pub const fn is_value(&self) -> bool {
        matches!(self.node, Node::Value(_))
    }

    /// Borrows the final value, if the chain is complete.
    pub const fn as_value(&self) -> Option<&R> {
        match &self.node {
            Node::Value(value) => Some(value),
            Node::Function(_) => None,
        }
    }

    /// Consumes the chain, returning its final value.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::Incomplete`] if the chain still awaits arguments.
    /// The chain was expected to be complete after its current depth, so
    /// both fields of the error carry that depth.
    pub fn into_value(self) -> CurryResult<R> {
        match self.node {
            Node::Value(value) => Ok(value),
            Node::Function(_) => Err(CurryError::Incomplete {
                arity: self.depth,
                supplied: self.depth,
            }),
        }
    }

    /// Applies one argument, returning the next link of the chain.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::ArityExceeded`] if the chain is already complete,
    /// or whatever error the step itself reports.
    pub fn apply(&self, argument: A) -> CurryResult<Self> {
        match &self.node {
            Node::Function(step) => {
                let mut next = step(argument)?;
                next.depth = self.depth + 1;
                Ok(next)
            }
            Node::Value(_) => {
                tracing::debug!(
                    arity = self.depth,
                    supplied = self.depth + 1,
                    "argument applied to a completed chain"
                );
                Err(CurryError::ArityExceeded {
                    arity: self.depth,
                    supplied: self.depth + 1,
                })
            }
        }
    }

    /// Consumes the chain and applies every argument in order.
    ///
    /// Unlike [`Curried::apply_all`] this never clones the chain, so it works
    /// for any result type.
    ///
    /// # Errors
    ///
    /// Fails on the first application that fails, see [`Curried::apply`].
    pub fn into_applied<I>(self, arguments: I) -> CurryResult<Self>
    where
        I: IntoIterator<Item = A>,
    {
        arguments
            .into_iter()
            .try_fold(self, |current, argument| current.apply(argument))
    }

    /// Applies every argument in order, leaving this chain untouched.
    ///
    /// Only an empty argument list clones the chain; otherwise the first
    /// application borrows it and the rest work on owned links.
    ///
    /// # Errors
    ///
    /// Fails on the first application that fails, see [`Curried::apply`].
    pub fn apply_all<I>(&self, arguments: I) -> CurryResult<Self>
    where
        I: IntoIterator<Item = A>,
        R: Clone,
    {
        let mut arguments = arguments.into_iter();
        match arguments.next() {
            Some(first) => self.apply(first)?.into_applied(arguments),
            None => Ok(self.clone()),
        }
    }
}

impl<A, R: Clone> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        let node = match &self.node {
            Node::Function(step) => Node::Function(Rc::clone(step)),
            Node::Value(value) => Node::Value(value.clone()),
        };
        Self {
            node,
            depth: self.depth,
        }
    }
}

impl<A, R: fmt::Debug> fmt::Debug for Curried<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node {
            Node::Function(_) => formatter
                .debug_struct("Curried::Function")
                .field("depth", &self.depth)
                .finish_non_exhaustive(),
            Node::Value(value) => formatter
                .debug_struct("Curried::Value")
                .field("depth", &self.depth)
                .field("value", value)
                .finish(),
        }
    }
}

static_assertions::assert_not_impl_any!(Curried<u64, u64>: Send, Sync);
