//! Consumer-side bindings to a store.
//!
//! A [`Binding`] keeps the latest state of a store in view for as long as it
//! lives, and hands out a [`Dispatcher`] for sending actions back.

mod binding;

pub use binding::{use_store, Binding, Dispatcher};
