//! Reducer-driven state stores.
//!
//! A [`Store`] owns a single state value and an ordered list of listeners.
//! Every [`Store::dispatch`] runs the reducer, commits the result, and then
//! notifies each listener synchronously on the calling thread.

mod store;
mod subscription;

pub use store::Store;
pub use subscription::{ListenerId, Subscription};
