/// A pure state-transition function.
///
/// Implementations must not have side effects and must be total: every
/// `(state, action)` pair yields a next state. Actions the reducer does not
/// recognize should return a value equal to `state`.
///
/// Any `Fn(&S, &A) -> S` is a reducer, so plain functions and closures can be
/// handed to [`Store::new`](crate::Store::new) directly.
///
/// # Examples
///
/// ```
/// use tally::Reducer;
///
/// fn add(state: &i32, action: &i32) -> i32 {
///     state + action
/// }
///
/// assert_eq!(add.reduce(&1, &2), 3);
/// ```
pub trait Reducer<S, A> {
    /// Compute the state that follows `state` once `action` is applied.
    fn reduce(&self, state: &S, action: &A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(&S, &A) -> S,
{
    fn reduce(&self, state: &S, action: &A) -> S {
        self(state, action)
    }
}
