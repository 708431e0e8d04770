use super::action::CounterAction;
use crate::store::Store;
use serde::{Deserialize, Serialize};

/// State of the counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
}

/// A store holding the counter state.
pub type CounterStore = Store<CounterState, CounterAction>;

/// The counter's reducer.
///
/// `Increment` and `Decrement` move the count by one, wrapping at the `i64`
/// limits. Every other action returns the state unchanged.
pub fn counter_reducer(state: &CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::Increment => CounterState {
            count: state.count.wrapping_add(1),
        },
        CounterAction::Decrement => CounterState {
            count: state.count.wrapping_sub(1),
        },
        CounterAction::Unknown => *state,
    }
}

/// A counter store starting at zero.
pub fn counter_store() -> CounterStore {
    Store::new(counter_reducer, CounterState::default())
}
