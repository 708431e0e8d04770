use super::subscription::{Detach, Listener, Registry, Subscription};
use crate::reducer::Reducer;
use parking_lot::{Mutex, RwLock};
use std::sync::{Arc, Weak};

/// A state container driven by a reducer.
///
/// The store holds one state value and replaces it wholesale on every
/// [`dispatch`](Store::dispatch). Listeners registered with
/// [`subscribe`](Store::subscribe) are called after each dispatch, in
/// registration order, on the dispatching thread.
///
/// Cloning a store yields another handle to the same state and listeners.
///
/// # Examples
///
/// ```
/// use tally::Store;
///
/// let store = Store::new(|count: &i64, step: &i64| count + step, 0);
/// let _subscription = store.subscribe(|count| println!("count is {count}"));
///
/// store.dispatch(2);
/// store.dispatch(3);
/// assert_eq!(store.get_state(), 5);
/// ```
pub struct Store<S, A> {
    state: Arc<RwLock<Arc<S>>>,
    listeners: Arc<Mutex<Registry<S>>>,
    reducer: Arc<dyn Reducer<S, A> + Send + Sync>,
}

impl<S, A> Store<S, A>
where
    S: Send + Sync + 'static,
    A: 'static,
{
    /// Create a store with the given reducer and initial state.
    pub fn new<R>(reducer: R, initial: S) -> Self
    where
        R: Reducer<S, A> + Send + Sync + 'static,
    {
        Self {
            state: Arc::new(RwLock::new(Arc::new(initial))),
            listeners: Arc::new(Mutex::new(Registry::new())),
            reducer: Arc::new(reducer),
        }
    }

    /// Get a clone of the current state.
    pub fn get_state(&self) -> S
    where
        S: Clone,
    {
        S::clone(&self.state.read())
    }

    /// Read the current state without cloning it.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        let state = self.current();
        f(&*state)
    }

    /// Apply `action` through the reducer and notify every listener.
    ///
    /// Listeners receive the state committed by this dispatch. They run after
    /// all locks are released, so they may read the store, subscribe,
    /// unsubscribe or dispatch again. The listener set is fixed when the
    /// notification pass starts.
    pub fn dispatch(&self, action: A) {
        let next = {
            let mut state = self.state.write();
            let next = Arc::new(self.reducer.reduce(&state, &action));
            *state = Arc::clone(&next);
            next
        };

        let listeners = self.listeners.lock().snapshot();
        tracing::trace!(listeners = listeners.len(), "dispatching action");
        for listener in listeners {
            listener(&*next);
        }
    }

    /// Register `listener` to be called after every dispatch.
    ///
    /// The returned [`Subscription`] removes this registration when
    /// unsubscribed or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let listener: Listener<S> = Arc::new(listener);
        let id = self.listeners.lock().insert(listener);
        tracing::trace!(%id, "listener subscribed");

        let registry = Arc::downgrade(&self.listeners);
        let registry: Weak<dyn Detach> = registry;
        Subscription::new(id, registry)
    }

    /// Number of listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Shared handle to the committed state, kept alive past the lock.
    pub(crate) fn current(&self) -> Arc<S> {
        Arc::clone(&self.state.read())
    }

    pub(crate) fn state_cell(&self) -> Arc<RwLock<Arc<S>>> {
        Arc::clone(&self.state)
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            listeners: Arc::clone(&self.listeners),
            reducer: Arc::clone(&self.reducer),
        }
    }
}
