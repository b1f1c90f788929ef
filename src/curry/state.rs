//! The argument buffer threaded through a curry chain.

use smallvec::SmallVec;

/// Number of arguments a buffer holds before spilling to the heap.
pub const INLINE_ARGUMENTS: usize = 4;

/// Ordered buffer of collected positional arguments.
pub type ArgumentBuffer<A> = SmallVec<[A; INLINE_ARGUMENTS]>;

/// Arguments collected so far by one continuation of a curry chain.
///
/// The cursor is the number of collected arguments. [`CurryState::fill`]
/// returns a new state instead of mutating, so two continuations that branch
/// from the same partial application never see each other's arguments.
///
/// # Examples
///
/// ```rust
/// use recurry::curry::CurryState;
///
/// let empty = CurryState::new(2);
/// let left = empty.fill(1);
/// let right = empty.fill(10);
///
/// assert_eq!(left.fill(2).into_arguments().as_slice(), &[1, 2]);
/// assert_eq!(right.fill(20).into_arguments().as_slice(), &[10, 20]);
/// assert_eq!(empty.cursor(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurryState<A> {
    arity: usize,
    arguments: ArgumentBuffer<A>,
}

impl<A> CurryState<A> {
    /// Creates an empty state for a chain of the given arity.
    #[must_use]
    pub fn new(arity: usize) -> Self {
        Self {
            arity,
            arguments: SmallVec::with_capacity(arity),
        }
    }

    /// The declared arity of the chain.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// How many arguments have been collected.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` once every declared argument has been collected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cursor() >= self.arity
    }

    /// Consumes the state, returning the collected arguments in order.
    #[must_use]
    pub fn into_arguments(self) -> ArgumentBuffer<A> {
        self.arguments
    }
}

impl<A: Clone> CurryState<A> {
    /// Returns a copy of this state with `argument` recorded at the cursor.
    #[must_use]
    pub fn fill(&self, argument: A) -> Self {
        let mut arguments = SmallVec::with_capacity(self.arity.max(self.cursor() + 1));
        arguments.extend(self.arguments.iter().cloned());
        arguments.push(argument);
        Self {
            arity: self.arity,
            arguments,
        }
    }
}
