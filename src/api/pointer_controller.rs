use tracing::trace;

use crate::extensions::SelectionEvent;
use crate::interaction::{
    CaptureState, HandlePositions, PointerSession, SelectorHandle, clamp_drag_position,
    resolve_press,
};

use super::SelectorController;

impl SelectorController {
    /// Starts a gesture at `(x, y)`.
    ///
    /// Returns `true` when the press captured a handle. Presses without bound
    /// data, outside every hit zone, or at non-finite coordinates are no-ops.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.end_gesture();
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let Some(positions) = self.handle_positions() else {
            trace!(x, y, "press ignored without bound data");
            return false;
        };

        let capture = resolve_press(positions, x, y, self.config.hit_zone, self.config.gesture);
        trace!(x, y, ?capture, "pointer down");
        if capture == CaptureState::Idle {
            return false;
        }

        self.session = Some(PointerSession::begin(capture, x, y));
        self.emit_event(SelectionEvent::GestureStarted { capture });
        true
    }

    /// Drags the captured handle towards `x`.
    ///
    /// Never fails: positions are clamped and unusable input is ignored.
    pub fn pointer_move(&mut self, x: f64) {
        if !x.is_finite() {
            return;
        }
        let gesture = self.config.gesture;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let before = session.capture();
        let handle = session.on_move(x, gesture);
        let after = session.capture();
        if before != after {
            trace!(?before, ?after, x, "resolved ambiguous capture");
        }
        if let Some(handle) = handle {
            self.drag_handle_to(handle, x);
        }
    }

    pub fn pointer_up(&mut self) {
        trace!("pointer up");
        self.end_gesture();
    }

    pub fn pointer_cancel(&mut self) {
        trace!("pointer cancel");
        self.end_gesture();
    }

    pub(super) fn end_gesture(&mut self) {
        if self.session.take().is_some() {
            self.emit_event(SelectionEvent::GestureEnded);
        }
    }

    fn drag_handle_to(&mut self, handle: SelectorHandle, x: f64) {
        let (Some(positions), Some(domain), Some(current)) = (
            self.handle_positions(),
            self.domain(),
            self.selected_value(handle),
        ) else {
            return;
        };

        let position = clamp_drag_position(handle, x, positions, self.config.viewport);
        let value = domain.clamp(self.value_at_position(position).unwrap_or(current));

        // Re-check ordering in value space; pixel round trips are not exact.
        let value = match (handle, positions) {
            (SelectorHandle::Min, HandlePositions::Dual { .. }) => self
                .selected_value(SelectorHandle::Max)
                .map_or(value, |max| value.min(max)),
            (SelectorHandle::Max, HandlePositions::Dual { .. }) => self
                .selected_value(SelectorHandle::Min)
                .map_or(value, |min| value.max(min)),
            _ => value,
        };

        if self.commit_value(handle, value) {
            trace!(?handle, position, value, "drag committed value");
        }
    }
}
