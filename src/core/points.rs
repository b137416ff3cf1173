use serde::Serialize;

use crate::core::bins::BinSeries;
use crate::core::types::{DomainRange, Point};
use crate::error::{GraphError, GraphResult};

/// Ordered knots a curve passes through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointSeries {
    points: Vec<Point>,
}

impl PointSeries {
    /// Accepts a non-empty list of finite points with non-decreasing `x`.
    pub fn new(points: Vec<Point>) -> GraphResult<Self> {
        if points.is_empty() {
            return Err(GraphError::InvalidInput(
                "point series must not be empty".to_owned(),
            ));
        }
        if let Some(index) = points.iter().position(|point| !point.is_finite()) {
            return Err(GraphError::InvalidInput(format!(
                "point {index} has a non-finite coordinate"
            )));
        }
        if let Some(index) = points.windows(2).position(|pair| pair[1].x < pair[0].x) {
            return Err(GraphError::InvalidInput(format!(
                "points must be sorted by x (point {} precedes point {})",
                index + 1,
                index
            )));
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point's `x` to last point's `x`.
    #[must_use]
    pub fn domain(&self) -> DomainRange {
        DomainRange {
            min: self.points[0].x,
            max: self.points[self.points.len() - 1].x,
        }
    }

    /// Largest `y`, floored at zero; the vertical axis always starts at zero.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.points.iter().fold(0.0, |acc, point| acc.max(point.y))
    }
}

/// Domain data bound to a selector controller.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphData {
    Points(PointSeries),
    Bins(BinSeries),
}

impl GraphData {
    #[must_use]
    pub fn knots(&self) -> &PointSeries {
        match self {
            Self::Points(points) => points,
            Self::Bins(bins) => bins.knots(),
        }
    }

    #[must_use]
    pub fn domain(&self) -> DomainRange {
        match self {
            Self::Points(points) => points.domain(),
            Self::Bins(bins) => bins.domain(),
        }
    }

    #[must_use]
    pub fn bins(&self) -> Option<&BinSeries> {
        match self {
            Self::Points(_) => None,
            Self::Bins(bins) => Some(bins),
        }
    }
}

impl From<PointSeries> for GraphData {
    fn from(points: PointSeries) -> Self {
        Self::Points(points)
    }
}

impl From<BinSeries> for GraphData {
    fn from(bins: BinSeries) -> Self {
        Self::Bins(bins)
    }
}
