//! Integration tests for Tally

use parking_lot::Mutex;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tally::{
    counter_store, use_store, Control, CounterAction, CounterState, CounterWidget, Store,
    Subscription,
};

#[test]
fn counter_end_to_end() {
    let store = counter_store();
    assert_eq!(store.get_state().count, 0);

    for _ in 0..3 {
        store.dispatch(CounterAction::Increment);
    }
    assert_eq!(store.get_state().count, 3);

    store.dispatch(CounterAction::Decrement);
    assert_eq!(store.get_state().count, 2);

    store.dispatch(CounterAction::Unknown);
    assert_eq!(store.get_state().count, 2);
}

#[test]
fn repeated_increments_and_decrements() {
    for start in [-7_i64, 0, 41] {
        let store = Store::new(tally::counter_reducer, CounterState { count: start });

        for step in 1..=5 {
            store.dispatch(CounterAction::Increment);
            assert_eq!(store.get_state().count, start + step);
        }
        for step in 1..=5 {
            store.dispatch(CounterAction::Decrement);
            assert_eq!(store.get_state().count, start + 5 - step);
        }
    }
}

#[test]
fn unknown_action_leaves_state_equal() {
    let store = counter_store();
    store.dispatch(CounterAction::Increment);
    let before = store.get_state();

    let action = CounterAction::from_json(r#"{"type":"RESET"}"#).unwrap();
    store.dispatch(action);

    assert_eq!(store.get_state(), before);
}

#[test]
fn listeners_called_once_per_dispatch_in_order() {
    let store = counter_store();
    let calls = Arc::new(Mutex::new(Vec::new()));

    let subscriptions: Vec<Subscription> = (0..3)
        .map(|index| {
            let calls = calls.clone();
            store.subscribe(move |_| calls.lock().push(index))
        })
        .collect();

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Unknown);

    assert_eq!(*calls.lock(), vec![0, 1, 2, 0, 1, 2]);
    assert_eq!(subscriptions.len(), store.listener_count());
}

#[test]
fn unsubscribe_stops_notifications_and_is_idempotent() {
    let store = counter_store();
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = counter.clone();
    let _other = store.subscribe(|_| {});

    let mut subscription = store.subscribe(move |_| {
        counter_clone.fetch_add(1, Ordering::SeqCst);
    });

    store.dispatch(CounterAction::Increment);
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    subscription.unsubscribe();
    subscription.unsubscribe();
    assert!(!subscription.is_active());
    assert_eq!(store.listener_count(), 1);

    store.dispatch(CounterAction::Increment);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn unsubscribe_during_notification() {
    let store = counter_store();
    let later_calls = Arc::new(AtomicUsize::new(0));
    let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

    let slot_clone = slot.clone();
    let _remover = store.subscribe(move |_| {
        if let Some(mut subscription) = slot_clone.lock().take() {
            subscription.unsubscribe();
        }
    });

    let later_calls_clone = later_calls.clone();
    *slot.lock() = Some(store.subscribe(move |_| {
        later_calls_clone.fetch_add(1, Ordering::SeqCst);
    }));

    // The pass that removes the listener was already snapshotted.
    store.dispatch(CounterAction::Increment);
    assert_eq!(later_calls.load(Ordering::SeqCst), 1);

    store.dispatch(CounterAction::Increment);
    assert_eq!(later_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.listener_count(), 1);
}

#[test]
fn listener_unsubscribes_itself() {
    let store = counter_store();
    let calls = Arc::new(AtomicUsize::new(0));
    let own: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

    let own_clone = own.clone();
    let calls_clone = calls.clone();
    *own.lock() = Some(store.subscribe(move |_| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        if let Some(mut subscription) = own_clone.lock().take() {
            subscription.unsubscribe();
        }
    }));

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Increment);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.listener_count(), 0);
    assert_eq!(store.get_state().count, 2);
}

#[test]
fn panicking_listener_propagates_after_commit() {
    let store = counter_store();
    let later_calls = Arc::new(AtomicUsize::new(0));

    let _failing = store.subscribe(|_| panic!("listener failed"));
    let later_calls_clone = later_calls.clone();
    let _later = store.subscribe(move |_| {
        later_calls_clone.fetch_add(1, Ordering::SeqCst);
    });

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        store.dispatch(CounterAction::Increment);
    }));

    assert!(result.is_err());
    assert_eq!(store.get_state().count, 1);
    assert_eq!(later_calls.load(Ordering::SeqCst), 0);
    assert_eq!(store.listener_count(), 2);
}

#[test]
fn subscribe_during_notification_waits_for_next_dispatch() {
    let store = counter_store();
    let added_calls = Arc::new(AtomicUsize::new(0));
    let added: Arc<Mutex<Vec<Subscription>>> = Arc::new(Mutex::new(Vec::new()));

    let registrar = store.clone();
    let added_clone = added.clone();
    let added_calls_clone = added_calls.clone();
    let _adder = store.subscribe(move |state: &CounterState| {
        if state.count == 1 {
            let calls = added_calls_clone.clone();
            added_clone.lock().push(registrar.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            }));
        }
    });

    store.dispatch(CounterAction::Increment);
    assert_eq!(added_calls.load(Ordering::SeqCst), 0);

    store.dispatch(CounterAction::Increment);
    assert_eq!(added_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn binding_split_tracks_store() {
    let store = counter_store();
    let binding = use_store(&store);
    let (state, dispatch) = binding.split();
    assert_eq!(state.count, 0);

    dispatch.dispatch(CounterAction::Increment);
    dispatch.dispatch(CounterAction::Increment);
    assert_eq!(binding.state().count, 2);

    drop(binding);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn widget_round_trip() {
    let store = counter_store();
    let widget = CounterWidget::mount(&store);

    for control in [Control::Increment, Control::Increment, Control::Increment] {
        widget.press(control);
    }
    widget.press(Control::Decrement);
    store.dispatch(CounterAction::Unknown);

    assert_eq!(widget.count(), 2);
    assert_eq!(widget.renders(), 5);

    widget.unmount();
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn store_shared_across_threads() {
    let store = counter_store();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || {
                for _ in 0..250 {
                    store.dispatch(CounterAction::Increment);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(store.get_state().count, 1000);
}
