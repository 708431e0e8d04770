//! Pure state transitions.
//!
//! A reducer maps the current state and an action to the next state. The
//! store owns one and runs it on every dispatch.

mod reducer;

pub use reducer::Reducer;
