use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// A point in data space, or a control point once fitted or projected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Horizontal pixel extent the domain maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f64,
    pub right: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite() && self.right.is_finite() && self.right >= self.left
    }

    /// Clamps a pixel position into `[left, right]`.
    #[must_use]
    pub fn clamp(self, position: f64) -> f64 {
        position.max(self.left).min(self.right)
    }

    pub(crate) fn validate(self) -> GraphResult<Self> {
        if !self.is_valid() {
            return Err(GraphError::InvalidViewport {
                left: self.left,
                right: self.right,
            });
        }
        Ok(self)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            left: 0.0,
            right: 1.0,
        }
    }
}

/// Inclusive value range covered by the bound data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainRange {
    pub min: f64,
    pub max: f64,
}

impl DomainRange {
    pub fn new(min: f64, max: f64) -> GraphResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GraphError::InvalidInput(
                "domain bounds must be finite".to_owned(),
            ));
        }
        if max < min {
            return Err(GraphError::InvalidInput(format!(
                "domain max ({max}) must be >= min ({min})"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max == self.min
    }

    /// Clamps into `[min, max]`. NaN collapses to `min`.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_clamp_collapses_nan_to_min() {
        let domain = DomainRange::new(-5.0, 5.0).expect("valid domain");
        assert_eq!(domain.clamp(f64::NAN), -5.0);
        assert_eq!(domain.clamp(f64::INFINITY), 5.0);
        assert_eq!(domain.clamp(1.5), 1.5);
    }

    #[test]
    fn inverted_domain_is_rejected() {
        assert!(DomainRange::new(3.0, 1.0).is_err());
        assert!(DomainRange::new(1.0, 1.0).expect("point domain").is_degenerate());
    }

    #[test]
    fn viewport_validation_accepts_zero_width() {
        assert!(Viewport::new(10.0, 10.0).is_valid());
        assert!(!Viewport::new(10.0, 9.0).is_valid());
        assert!(!Viewport::new(f64::NAN, 9.0).is_valid());
    }
}
