use tracing::trace;

use crate::extensions::SelectionEvent;
use crate::interaction::SelectorHandle;

use super::{SelectionState, SelectorController};

impl SelectorController {
    pub(super) fn emit_event(&mut self, event: SelectionEvent) {
        trace!(?event, listeners = self.listeners.len(), "dispatch selection event");
        for listener in self.listeners.values_mut() {
            listener.on_event(event);
        }
    }

    /// Replaces the whole selection, then notifies each handle whose value
    /// differs from before.
    ///
    /// All values are stored before any listener runs, so listeners never
    /// observe a half-applied update.
    pub(super) fn apply_selection(&mut self, next: SelectionState) {
        let previous = self.selection.replace(next);
        for &handle in next.handles() {
            let Some(value) = next.value_of(handle) else {
                continue;
            };
            let unchanged = previous
                .and_then(|state| state.value_of(handle))
                .is_some_and(|old| old == value);
            if !unchanged {
                self.emit_event(SelectionEvent::ValueChanged { handle, value });
            }
        }
    }

    /// Commits one handle's value. Returns `true` when it changed.
    pub(super) fn commit_value(&mut self, handle: SelectorHandle, value: f64) -> bool {
        let Some(slot) = self
            .selection
            .as_mut()
            .and_then(|selection| selection.slot_mut(handle))
        else {
            return false;
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        self.emit_event(SelectionEvent::ValueChanged { handle, value });
        true
    }
}
