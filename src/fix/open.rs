//! Open recursion: the recursive call is passed in as an argument.

use std::marker::PhantomData;

/// Fixed point of a body that takes its own recursive call as a parameter.
///
/// Unlike [`self_app`](super::self_app), the recursive call is a borrowed
/// `&dyn Fn(T) -> R` pointing back at this value, so nothing is rebuilt on
/// each descent.
///
/// Built by [`fix`].
pub struct Fix<F, T, R> {
    body: F,
    marker: PhantomData<fn(T) -> R>,
}

/// Ties the knot of an open-recursive body.
///
/// # Examples
///
/// ```rust
/// use recurry::fix::fix;
///
/// let factorial = fix(|recur: &dyn Fn(u64) -> u64, n: u64| {
///     if n == 0 { 1 } else { n * recur(n - 1) }
/// });
/// assert_eq!(factorial.call(5), 120);
///
/// let ackermann = fix(|recur: &dyn Fn((u64, u64)) -> u64, (m, n): (u64, u64)| {
///     if m == 0 {
///         n + 1
///     } else if n == 0 {
///         recur((m - 1, 1))
///     } else {
///         recur((m - 1, recur((m, n - 1))))
///     }
/// });
/// assert_eq!(ackermann.call((3, 4)), 125);
/// ```
pub const fn fix<T, R, F>(body: F) -> Fix<F, T, R>
where
    F: Fn(&dyn Fn(T) -> R, T) -> R,
{
    Fix {
        body,
        marker: PhantomData,
    }
}

impl<F, T, R> Fix<F, T, R>
where
    F: Fn(&dyn Fn(T) -> R, T) -> R,
{
    /// Calls the recursive function.
    pub fn call(&self, argument: T) -> R {
        (self.body)(&|argument| self.call(argument), argument)
    }

    /// Converts into a plain closure.
    ///
    /// ```rust
    /// use recurry::fix::fix;
    ///
    /// let sum_to = fix(|recur: &dyn Fn(u32) -> u32, n: u32| if n == 0 { 0 } else { n + recur(n - 1) })
    ///     .into_fn();
    /// let totals: Vec<u32> = (0..5).map(sum_to).collect();
    /// assert_eq!(totals, vec![0, 1, 3, 6, 10]);
    /// ```
    pub fn into_fn(self) -> impl Fn(T) -> R {
        move |argument| self.call(argument)
    }
}

impl<F, T, R> std::fmt::Debug for Fix<F, T, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Fix").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(10, 55)]
    #[case(20, 6765)]
    fn test_fix_fibonacci(#[case] input: u64, #[case] expected: u64) {
        let fibonacci = fix(|recur: &dyn Fn(u64) -> u64, n: u64| {
            if n < 2 { n } else { recur(n - 1) + recur(n - 2) }
        });
        assert_eq!(fibonacci.call(input), expected);
    }

    #[rstest]
    fn test_fix_with_borrowed_state() {
        let names = ["a", "b", "c"];
        let join_from = fix(|recur: &dyn Fn(usize) -> String, index: usize| {
            if index >= names.len() {
                String::new()
            } else {
                format!("{}{}", names[index], recur(index + 1))
            }
        });
        assert_eq!(join_from.call(0), "abc");
        assert_eq!(join_from.call(2), "c");
    }

    #[rstest]
    fn test_into_fn_behaves_like_call() {
        let double_down = fix(|recur: &dyn Fn(u32) -> u32, n: u32| if n == 0 { 0 } else { 2 + recur(n - 1) });
        let expected = double_down.call(7);
        let function = double_down.into_fn();
        assert_eq!(function(7), expected);
        assert_eq!(function(7), 14);
    }

    #[rstest]
    fn test_debug_output() {
        let identity = fix(|_: &dyn Fn(u8) -> u8, n: u8| n);
        assert_eq!(format!("{identity:?}"), "Fix { .. }");
    }
}
