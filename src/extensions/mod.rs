//! Hooks for host code observing the selector engine.

pub mod listeners;

pub use listeners::{FnListener, SelectionEvent, SelectionListener};
