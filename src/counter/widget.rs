use super::action::CounterAction;
use super::state::{CounterState, CounterStore};
use crate::binding::Binding;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// An interactive control of the counter widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Increment,
    Decrement,
}

impl Control {
    /// Controls in display order.
    pub const ALL: [Control; 2] = [Control::Increment, Control::Decrement];

    /// Text shown on the control.
    pub fn label(self) -> &'static str {
        match self {
            Control::Increment => "Increment",
            Control::Decrement => "Decrement",
        }
    }

    /// The action dispatched when this control is pressed.
    pub fn action(self) -> CounterAction {
        match self {
            Control::Increment => CounterAction::Increment,
            Control::Decrement => CounterAction::Decrement,
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A headless counter widget: shows the count, and dispatches on presses.
///
/// # Example
///
/// ```
/// use tally::{counter_store, Control, CounterWidget};
///
/// let store = counter_store();
/// let widget = CounterWidget::mount(&store);
///
/// widget.press(Control::Increment);
/// widget.press(Control::Increment);
/// widget.press(Control::Decrement);
/// assert_eq!(widget.count(), 1);
/// ```
pub struct CounterWidget {
    binding: Binding<CounterState, CounterAction>,
    renders: Arc<AtomicUsize>,
}

impl CounterWidget {
    /// Attach a widget to `store`.
    pub fn mount(store: &CounterStore) -> Self {
        let renders = Arc::new(AtomicUsize::new(0));
        let renders_clone = Arc::clone(&renders);
        let binding = Binding::with_on_change(store, move |_| {
            renders_clone.fetch_add(1, Ordering::SeqCst);
        });

        Self { binding, renders }
    }

    /// The count currently on display.
    pub fn count(&self) -> i64 {
        self.binding.with(|state| state.count)
    }

    /// The widget's controls in display order.
    pub fn controls(&self) -> [Control; 2] {
        Control::ALL
    }

    /// Handle a press of `control`.
    pub fn press(&self, control: Control) {
        self.binding.dispatch(control.action());
    }

    /// How many store changes the widget has observed since mounting.
    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }

    /// Detach from the store.
    pub fn unmount(self) {
        self.binding.detach();
    }
}
