pub mod axis_labels;
pub mod bins;
pub mod curve;
pub mod points;
pub mod scale;
pub mod spline;
pub mod types;

pub use axis_labels::{AxisLabel, MAX_MIDDLE_LABELS, evenly_spaced_labels};
pub use bins::{Bin, BinSeries, approximate_count};
pub use curve::{CurveGeometry, ProjectedCurve, project_curve};
pub use points::{GraphData, PointSeries};
pub use scale::{CoordinateMapper, affine_map, to_position, to_value};
pub use spline::{BezierControlPoints, CubicSegment, fit_bezier_spline};
pub use types::{DomainRange, Point, Viewport};
