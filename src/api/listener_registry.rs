use tracing::warn;

use crate::error::{GraphError, GraphResult};
use crate::extensions::{FnListener, SelectionEvent, SelectionListener};

use super::SelectorController;

impl SelectorController {
    /// Registers a listener with a unique identifier.
    pub fn register_listener(&mut self, listener: Box<dyn SelectionListener>) -> GraphResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(GraphError::InvalidInput(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.listeners.contains_key(&listener_id) {
            warn!(listener_id, "rejecting duplicate listener registration");
            return Err(GraphError::InvalidInput(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        self.listeners.insert(listener_id, listener);
        Ok(())
    }

    /// Registers a closure as a listener.
    pub fn on_selection_event<F>(&mut self, id: impl Into<String>, callback: F) -> GraphResult<()>
    where
        F: FnMut(SelectionEvent) + 'static,
    {
        self.register_listener(Box::new(FnListener::new(id, callback)))
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        self.listeners.shift_remove(listener_id).is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners.contains_key(listener_id)
    }
}
