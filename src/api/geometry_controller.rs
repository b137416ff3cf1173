use smallvec::SmallVec;

use crate::core::{
    AxisLabel, BezierControlPoints, CoordinateMapper, CurveGeometry, ProjectedCurve,
    evenly_spaced_labels, project_curve,
};
use crate::error::{GraphError, GraphResult};
use crate::interaction::{HandlePositions, SelectorHandle};

use super::{SelectionState, SelectorController};

/// Pixel centres of the handles, min before max.
pub type SelectorPositions = SmallVec<[f64; 2]>;

impl SelectorController {
    /// Pixel position of each handle, empty when no data is bound.
    #[must_use]
    pub fn selector_positions(&self) -> SelectorPositions {
        match self.handle_positions() {
            Some(HandlePositions::Single(value)) => SmallVec::from_slice(&[value]),
            Some(HandlePositions::Dual { min, max }) => SmallVec::from_slice(&[min, max]),
            None => SmallVec::new(),
        }
    }

    /// Data-space knots and fitted control points.
    ///
    /// A single knot yields no segments.
    pub fn curve_segments(&self) -> GraphResult<Option<CurveGeometry>> {
        let Some(data) = &self.data else {
            return Ok(None);
        };
        let knots = data.knots().points().to_vec();
        if knots.len() < 2 {
            return Ok(Some(CurveGeometry {
                knots,
                control_points: BezierControlPoints {
                    first: Vec::new(),
                    second: Vec::new(),
                },
            }));
        }
        CurveGeometry::fit(knots).map(Some)
    }

    /// Curve in pixel space between `top` (largest value) and `bottom` (zero).
    pub fn projected_curve(&self, top: f64, bottom: f64) -> GraphResult<Option<ProjectedCurve>> {
        let Some(data) = &self.data else {
            return Ok(None);
        };
        project_curve(data.knots(), self.config.viewport, top, bottom).map(Some)
    }

    /// `middle_count + 2` evenly spaced labels across the domain, empty when
    /// no data is bound.
    pub fn axis_labels(&self, middle_count: usize) -> GraphResult<Vec<AxisLabel>> {
        match self.domain() {
            Some(domain) => evenly_spaced_labels(domain, self.config.viewport, middle_count),
            None => Ok(Vec::new()),
        }
    }

    /// Approximate count of the bound bins inside `[min, max]`.
    pub fn approximate_count(&self, min: f64, max: f64) -> GraphResult<f64> {
        let data = self.data.as_ref().ok_or(GraphError::NoDataBound)?;
        let bins = data.bins().ok_or_else(|| {
            GraphError::InvalidInput("approximate counts require bin data".to_owned())
        })?;
        Ok(bins.approximate_count(min, max))
    }

    /// Domain interval under the selection; a single handle selects from the
    /// domain start.
    #[must_use]
    pub fn selected_range(&self) -> Option<(f64, f64)> {
        let domain = self.domain()?;
        Some(self.selection?.covered_range(domain))
    }

    /// Approximate count under the selection, when bins are bound.
    #[must_use]
    pub fn selected_count(&self) -> Option<f64> {
        let (min, max) = self.selected_range()?;
        let bins = self.data.as_ref()?.bins()?;
        Some(bins.approximate_count(min, max))
    }

    pub(super) fn handle_positions(&self) -> Option<HandlePositions> {
        let selection = self.selection?;
        let domain = self.domain()?;
        let viewport = self.config.viewport;

        // A single-valued domain fills the whole viewport.
        let Ok(mapper) = CoordinateMapper::new(domain, viewport) else {
            return Some(match selection {
                SelectionState::Single { .. } => HandlePositions::Single(viewport.left),
                SelectionState::Dual { .. } => HandlePositions::Dual {
                    min: viewport.left,
                    max: viewport.right,
                },
            });
        };

        Some(match selection {
            SelectionState::Single { value } => HandlePositions::Single(mapper.to_position(value)),
            SelectionState::Dual { min, max } => HandlePositions::Dual {
                min: mapper.to_position(min),
                max: mapper.to_position(max),
            },
        })
    }

    /// Domain value under `position`, or `None` when the mapping has no inverse.
    pub(super) fn value_at_position(&self, position: f64) -> Option<f64> {
        let mapper = CoordinateMapper::new(self.domain()?, self.config.viewport).ok()?;
        mapper.to_value(position).ok()
    }

    pub(super) fn selected_value(&self, handle: SelectorHandle) -> Option<f64> {
        self.selection?.value_of(handle)
    }
}
