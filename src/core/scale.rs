use crate::core::types::{DomainRange, Viewport};
use crate::error::{GraphError, GraphResult};

/// Affine mapping between domain values and horizontal viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    domain: DomainRange,
    viewport: Viewport,
}

impl CoordinateMapper {
    pub fn new(domain: DomainRange, viewport: Viewport) -> GraphResult<Self> {
        if domain.is_degenerate() {
            return Err(GraphError::DegenerateDomain { value: domain.min });
        }
        let viewport = viewport.validate()?;
        Ok(Self { domain, viewport })
    }

    #[must_use]
    pub fn domain(self) -> DomainRange {
        self.domain
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn to_position(self, value: f64) -> f64 {
        affine_map(
            value,
            self.domain.min,
            self.domain.max,
            self.viewport.left,
            self.viewport.right,
        )
    }

    /// Inverse of [`Self::to_position`].
    ///
    /// A zero-width viewport has no inverse and is rejected.
    pub fn to_value(self, position: f64) -> GraphResult<f64> {
        if self.viewport.width() == 0.0 {
            return Err(GraphError::InvalidViewport {
                left: self.viewport.left,
                right: self.viewport.right,
            });
        }
        Ok(affine_map(
            position,
            self.viewport.left,
            self.viewport.right,
            self.domain.min,
            self.domain.max,
        ))
    }
}

/// Maps `value` from domain space to a viewport position.
pub fn to_position(value: f64, domain: DomainRange, viewport: Viewport) -> GraphResult<f64> {
    if !value.is_finite() {
        return Err(GraphError::InvalidInput("value must be finite".to_owned()));
    }
    Ok(CoordinateMapper::new(domain, viewport)?.to_position(value))
}

/// Maps a viewport `position` back to a domain value.
pub fn to_value(position: f64, domain: DomainRange, viewport: Viewport) -> GraphResult<f64> {
    if !position.is_finite() {
        return Err(GraphError::InvalidInput(
            "position must be finite".to_owned(),
        ));
    }
    CoordinateMapper::new(domain, viewport)?.to_value(position)
}

/// Linear interpolation of `x` from `[from_min, from_max]` onto `[to_min, to_max]`.
///
/// Both endpoints map exactly. Callers guarantee `from_min != from_max`.
#[must_use]
pub fn affine_map(x: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    if x == from_min {
        return to_min;
    }
    if x == from_max {
        return to_max;
    }
    (to_max - to_min) / (from_max - from_min) * (x - from_min) + to_min
}
