use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};

pub(crate) type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Identifies one listener registration within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Ordered listener registrations of a store.
pub(crate) struct Registry<S> {
    next_id: u64,
    entries: Vec<(ListenerId, Listener<S>)>,
}

impl<S> Registry<S> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, listener: Listener<S>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Copy of the current listeners in registration order.
    pub(crate) fn snapshot(&self) -> Vec<Listener<S>> {
        self.entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Type-erased removal so a [`Subscription`] does not carry the state type.
pub(crate) trait Detach: Send + Sync {
    fn detach(&self, id: ListenerId) -> bool;
}

impl<S: 'static> Detach for Mutex<Registry<S>> {
    fn detach(&self, id: ListenerId) -> bool {
        let mut registry = self.lock();
        let before = registry.entries.len();
        registry.entries.retain(|(entry, _)| *entry != id);
        registry.entries.len() != before
    }
}

/// Handle to a listener registered with [`Store::subscribe`](crate::Store::subscribe).
///
/// Calling [`unsubscribe`](Subscription::unsubscribe) removes exactly that
/// registration. Dropping the handle does the same.
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription {
    id: ListenerId,
    registry: Option<Weak<dyn Detach>>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, registry: Weak<dyn Detach>) -> Self {
        Self {
            id,
            registry: Some(registry),
        }
    }

    /// The registration this handle controls.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether this handle still holds its registration.
    pub fn is_active(&self) -> bool {
        self.registry
            .as_ref()
            .is_some_and(|registry| registry.strong_count() > 0)
    }

    /// Stop notifications to this listener.
    ///
    /// Calling it again is a no-op. A notification pass already in progress
    /// still reaches the listener.
    pub fn unsubscribe(&mut self) {
        let Some(registry) = self.registry.take() else {
            return;
        };
        if let Some(registry) = registry.upgrade() {
            if registry.detach(self.id) {
                tracing::trace!(id = %self.id, "listener unsubscribed");
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
