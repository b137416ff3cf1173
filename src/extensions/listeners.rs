use serde::{Deserialize, Serialize};

use crate::interaction::{CaptureState, SelectorHandle};

/// Notifications delivered to registered listeners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// A handle's committed value changed.
    ValueChanged { handle: SelectorHandle, value: f64 },
    /// A press captured one or both handles.
    GestureStarted { capture: CaptureState },
    /// The captured gesture was released or cancelled.
    GestureEnded,
}

/// Observer of selection changes.
///
/// Listeners are invoked synchronously after each committed mutation, in
/// registration order.
pub trait SelectionListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: SelectionEvent);
}

/// Adapts a closure into a [`SelectionListener`].
pub struct FnListener<F> {
    id: String,
    callback: F,
}

impl<F> FnListener<F>
where
    F: FnMut(SelectionEvent),
{
    pub fn new(id: impl Into<String>, callback: F) -> Self {
        Self {
            id: id.into(),
            callback,
        }
    }
}

impl<F> SelectionListener for FnListener<F>
where
    F: FnMut(SelectionEvent),
{
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: SelectionEvent) {
        (self.callback)(event);
    }
}
