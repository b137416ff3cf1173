use serde::{Deserialize, Serialize};

use crate::core::points::PointSeries;
use crate::core::types::{DomainRange, Point};
use crate::error::{GraphError, GraphResult};

/// Contiguous domain interval carrying an aggregate count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub from: f64,
    pub to: f64,
    pub count: f64,
}

impl Bin {
    pub fn new(from: f64, to: f64, count: f64) -> GraphResult<Self> {
        Self { from, to, count }.validate()
    }

    #[must_use]
    pub fn middle(self) -> f64 {
        (self.from + self.to) / 2.0
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.to - self.from
    }

    /// Length of `[query_min, query_max]` that falls inside this bin.
    #[must_use]
    pub fn overlap(self, query_min: f64, query_max: f64) -> f64 {
        (self.to.min(query_max) - self.from.max(query_min)).max(0.0)
    }

    fn validate(self) -> GraphResult<Self> {
        if !self.from.is_finite() || !self.to.is_finite() || !self.count.is_finite() {
            return Err(GraphError::InvalidInput(
                "bin bounds and count must be finite".to_owned(),
            ));
        }
        if self.from >= self.to {
            return Err(GraphError::InvalidInput(format!(
                "bin `from` ({}) must be < `to` ({})",
                self.from, self.to
            )));
        }
        if self.count < 0.0 {
            return Err(GraphError::InvalidInput(format!(
                "bin count must be >= 0, got {}",
                self.count
            )));
        }
        Ok(self)
    }
}

/// Approximates the count inside `[query_min, query_max]`.
///
/// Each bin's count is treated as uniformly spread across its width, so a
/// partially covered bin contributes proportionally. Bins must be sorted,
/// contiguous and of non-zero width; this is not checked here.
#[must_use]
pub fn approximate_count(bins: &[Bin], query_min: f64, query_max: f64) -> f64 {
    bins.iter()
        .map(|bin| bin.overlap(query_min, query_max) * bin.count / bin.width())
        .sum()
}

/// Validated bin sequence together with the knots a curve is drawn through.
#[derive(Debug, Clone, PartialEq)]
pub struct BinSeries {
    bins: Vec<Bin>,
    knots: PointSeries,
}

impl BinSeries {
    /// Validates each bin and derives the curve knots.
    ///
    /// Knots are the left edge at half the first count, the middles of all
    /// but the last bin, and the right edge at half the last count.
    pub fn new(bins: Vec<Bin>) -> GraphResult<Self> {
        if bins.is_empty() {
            return Err(GraphError::InvalidInput(
                "bin series must not be empty".to_owned(),
            ));
        }
        for bin in &bins {
            bin.validate()?;
        }

        let (first, last) = (bins[0], bins[bins.len() - 1]);
        let mut knots = Vec::with_capacity(bins.len() + 1);
        knots.push(Point::new(first.from, first.count / 2.0));
        knots.extend(
            bins[..bins.len() - 1]
                .iter()
                .map(|bin| Point::new(bin.middle(), bin.count)),
        );
        knots.push(Point::new(last.to, last.count / 2.0));

        let knots = PointSeries::new(knots)?;
        Ok(Self { bins, knots })
    }

    #[must_use]
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    #[must_use]
    pub fn knots(&self) -> &PointSeries {
        &self.knots
    }

    /// First bin's lower bound to last bin's upper bound.
    #[must_use]
    pub fn domain(&self) -> DomainRange {
        DomainRange {
            min: self.bins[0].from,
            max: self.bins[self.bins.len() - 1].to,
        }
    }

    #[must_use]
    pub fn total_count(&self) -> f64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    #[must_use]
    pub fn approximate_count(&self, query_min: f64, query_max: f64) -> f64 {
        approximate_count(&self.bins, query_min, query_max)
    }
}
