//! pointgraph: headless engine for spline point graphs with range selectors.
//!
//! The crate fits a smooth Bézier curve through data knots, maps between
//! domain values and viewport pixels, aggregates binned counts over a
//! selected sub-range, and runs the pointer state machine for one or two
//! draggable selector handles. Painting and platform event plumbing stay in
//! the host UI layer.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{SelectorController, SelectorControllerConfig};
pub use error::{GraphError, GraphResult};
