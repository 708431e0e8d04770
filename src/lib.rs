//! # Tally
//!
//! A small reducer-based state store with subscriptions.
//!
//! ## Store
//!
//! - [`Reducer`] - Pure `(state, action) -> state` transition
//! - [`Store`] - Owns one state value and an ordered list of listeners
//! - [`Subscription`] - Handle that removes a listener when unsubscribed or dropped
//!
//! ## Consumers
//!
//! - [`Binding`] - Live view of a store's state plus a [`Dispatcher`]
//! - [`CounterWidget`] - Headless counter with "Increment" and "Decrement" controls
//!
//! ```
//! use tally::{counter_store, CounterAction};
//!
//! let store = counter_store();
//! store.dispatch(CounterAction::Increment);
//! store.dispatch(CounterAction::Increment);
//! store.dispatch(CounterAction::Decrement);
//! assert_eq!(store.get_state().count, 1);
//! ```

pub mod binding;
pub mod counter;
pub mod reducer;
pub mod store;

// Re-export main types for convenience
pub use binding::{use_store, Binding, Dispatcher};
pub use counter::{
    counter_reducer, counter_store, ActionError, Control, CounterAction, CounterState,
    CounterStore, CounterWidget,
};
pub use reducer::Reducer;
pub use store::{ListenerId, Store, Subscription};
