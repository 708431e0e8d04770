use crate::store::{Store, Subscription};
use parking_lot::RwLock;
use std::sync::Arc;

/// Sends actions to a store. Cheap to clone.
pub struct Dispatcher<S, A> {
    store: Store<S, A>,
}

impl<S, A> Dispatcher<S, A>
where
    S: Send + Sync + 'static,
    A: 'static,
{
    /// Forward `action` to [`Store::dispatch`].
    pub fn dispatch(&self, action: A) {
        self.store.dispatch(action);
    }
}

impl<S, A> Clone for Dispatcher<S, A> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

/// A live view of a store's state.
///
/// On creation the binding captures the current state and subscribes to the
/// store; every notification refreshes the captured state from the store.
/// The subscription is released when the binding is detached or dropped.
pub struct Binding<S, A> {
    state: Arc<RwLock<Arc<S>>>,
    dispatcher: Dispatcher<S, A>,
    subscription: Subscription,
}

impl<S, A> Binding<S, A>
where
    S: Send + Sync + 'static,
    A: 'static,
{
    /// Bind to `store`.
    pub fn new(store: &Store<S, A>) -> Self {
        Self::with_on_change(store, |_| {})
    }

    /// Bind to `store`, calling `on_change` with the refreshed state after
    /// every notification.
    pub fn with_on_change<F>(store: &Store<S, A>, on_change: F) -> Self
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let state = Arc::new(RwLock::new(store.current()));
        let captured = Arc::clone(&state);
        let source = store.state_cell();

        // Refresh from the store rather than the notified value, so a
        // dispatch nested inside another listener never leaves this view behind.
        let subscription = store.subscribe(move |_| {
            let latest = Arc::clone(&source.read());
            *captured.write() = Arc::clone(&latest);
            on_change(&*latest);
        });
        tracing::debug!(id = %subscription.id(), "binding attached");

        Self {
            state,
            dispatcher: Dispatcher {
                store: store.clone(),
            },
            subscription,
        }
    }

    /// The latest captured state.
    pub fn state(&self) -> S
    where
        S: Clone,
    {
        S::clone(&self.state.read())
    }

    /// Read the latest captured state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let state = Arc::clone(&self.state.read());
        f(&*state)
    }

    /// A handle for dispatching actions to the bound store.
    pub fn dispatcher(&self) -> Dispatcher<S, A> {
        self.dispatcher.clone()
    }

    /// Dispatch `action` to the bound store.
    pub fn dispatch(&self, action: A) {
        self.dispatcher.dispatch(action);
    }

    /// The latest state paired with a dispatcher.
    pub fn split(&self) -> (S, Dispatcher<S, A>)
    where
        S: Clone,
    {
        (self.state(), self.dispatcher())
    }

    /// Release the subscription. Equivalent to dropping the binding.
    pub fn detach(self) {}
}

impl<S, A> Drop for Binding<S, A> {
    fn drop(&mut self) {
        tracing::debug!(id = %self.subscription.id(), "binding detached");
        self.subscription.unsubscribe();
    }
}

/// Bind to `store` and return the binding.
///
/// # Example
///
/// ```
/// use tally::{use_store, Store};
///
/// let store = Store::new(|count: &i32, delta: &i32| count + delta, 0);
/// let binding = use_store(&store);
///
/// let (_, dispatch) = binding.split();
/// dispatch.dispatch(5);
/// assert_eq!(binding.state(), 5);
/// ```
pub fn use_store<S, A>(store: &Store<S, A>) -> Binding<S, A>
where
    S: Send + Sync + 'static,
    A: 'static,
{
    Binding::new(store)
}
