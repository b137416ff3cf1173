use serde::{Deserialize, Serialize};

use crate::core::points::PointSeries;
use crate::core::scale::affine_map;
use crate::core::spline::{BezierControlPoints, CubicSegment, fit_bezier_spline};
use crate::core::types::{Point, Viewport};
use crate::error::{GraphError, GraphResult};

/// Knots plus the control points fitted through them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGeometry {
    pub knots: Vec<Point>,
    pub control_points: BezierControlPoints,
}

impl CurveGeometry {
    pub fn fit(knots: Vec<Point>) -> GraphResult<Self> {
        let control_points = fit_bezier_spline(&knots)?;
        Ok(Self {
            knots,
            control_points,
        })
    }

    #[must_use]
    pub fn segments(&self) -> Vec<CubicSegment> {
        self.control_points.segments(&self.knots)
    }
}

/// Curve in pixel space, framed by the baseline it should be closed against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedCurve {
    pub baseline_start: Point,
    pub curve: CurveGeometry,
    pub baseline_end: Point,
}

/// Projects `series` into the rectangle spanned by `viewport` and `[top, bottom]`.
///
/// `x` maps from the series domain onto the viewport and `y` maps from
/// `[0, max_y]` onto `[bottom, top]`. A series with a single distinct `x`
/// is drawn as a flat line across the whole viewport at its tallest value.
pub fn project_curve(
    series: &PointSeries,
    viewport: Viewport,
    top: f64,
    bottom: f64,
) -> GraphResult<ProjectedCurve> {
    let viewport = viewport.validate()?;
    if !top.is_finite() || !bottom.is_finite() {
        return Err(GraphError::InvalidInput(
            "curve vertical bounds must be finite".to_owned(),
        ));
    }

    let max_y = series.max_y();
    let project_y = |y: f64| {
        if max_y == 0.0 {
            bottom
        } else {
            affine_map(y, 0.0, max_y, bottom, top)
        }
    };

    let domain = series.domain();
    let knots = if domain.is_degenerate() {
        let y = project_y(max_y);
        vec![Point::new(viewport.left, y), Point::new(viewport.right, y)]
    } else {
        series
            .points()
            .iter()
            .map(|point| {
                Point::new(
                    affine_map(point.x, domain.min, domain.max, viewport.left, viewport.right),
                    project_y(point.y),
                )
            })
            .collect()
    };

    Ok(ProjectedCurve {
        baseline_start: Point::new(viewport.left, bottom),
        curve: CurveGeometry::fit(knots)?,
        baseline_end: Point::new(viewport.right, bottom),
    })
}
