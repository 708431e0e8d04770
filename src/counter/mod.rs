//! The counter: one integer, two actions, and a widget bound to its store.

mod action;
mod state;
mod widget;

pub use action::{ActionError, CounterAction};
pub use state::{counter_reducer, counter_store, CounterState, CounterStore};
pub use widget::{Control, CounterWidget};
