use tracing::{debug, warn};

use crate::error::{GraphError, GraphResult};
use crate::interaction::SelectorMode;

use super::{SelectionState, SelectorController};

impl SelectorController {
    /// Sets both handles of a range selector.
    ///
    /// `None` defaults to the domain bound on that side. Values are clamped
    /// into the domain and `max` is raised to `min` when they cross. The call
    /// is ignored (returns `Ok(false)`) while a pointer gesture is active.
    pub fn set_values(&mut self, min: Option<f64>, max: Option<f64>) -> GraphResult<bool> {
        if self.config.mode != SelectorMode::Dual {
            return Err(GraphError::InvalidInput(
                "set_values requires a dual selector".to_owned(),
            ));
        }
        let domain = self.require_domain()?;
        if self.is_gesture_active() {
            warn!(?min, ?max, "ignoring set_values during pointer gesture");
            return Ok(false);
        }

        let min = domain.clamp(min.unwrap_or(domain.min));
        let max = domain.clamp(max.unwrap_or(domain.max)).max(min);
        debug!(min, max, "set selector values");
        self.apply_selection(SelectionState::Dual { min, max });
        Ok(true)
    }

    /// Sets the handle of a value selector.
    ///
    /// `None` defaults to the domain start. Ignored while a gesture is active.
    pub fn set_value(&mut self, value: Option<f64>) -> GraphResult<bool> {
        if self.config.mode != SelectorMode::Single {
            return Err(GraphError::InvalidInput(
                "set_value requires a single selector".to_owned(),
            ));
        }
        let domain = self.require_domain()?;
        if self.is_gesture_active() {
            warn!(?value, "ignoring set_value during pointer gesture");
            return Ok(false);
        }

        let value = domain.clamp(value.unwrap_or(domain.min));
        debug!(value, "set selector value");
        self.apply_selection(SelectionState::Single { value });
        Ok(true)
    }
}
