mod controller;
mod controller_config;
mod data_controller;
mod geometry_controller;
mod listener_dispatch;
mod listener_registry;
mod pointer_controller;
mod selection_controller;
mod validation;

pub use controller::{SelectionState, SelectorController};
pub use controller_config::SelectorControllerConfig;
pub use geometry_controller::SelectorPositions;

pub use crate::extensions::{FnListener, SelectionEvent, SelectionListener};
pub use crate::interaction::{CaptureState, SelectorHandle, SelectorMode};
