//! Open cubic Bézier spline fitting.
//!
//! Given `n + 1` ordered knots, the fitter produces `n` cubic segments whose
//! joints are C¹ (and C²) continuous, with natural end conditions. The first
//! control points come from a tridiagonal system solved in one forward and
//! one backward sweep; the second control points follow from continuity.

use serde::{Deserialize, Serialize};

use crate::core::types::Point;
use crate::error::{GraphError, GraphResult};

/// Control points for every segment of a fitted spline.
///
/// Segment `i` runs from `knots[i]` to `knots[i + 1]` through
/// `first[i]` and `second[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierControlPoints {
    pub first: Vec<Point>,
    pub second: Vec<Point>,
}

impl BezierControlPoints {
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.first.len()
    }

    /// Pairs control points with the knots they were fitted from.
    ///
    /// Returns an empty list when `knots` does not match the segment count.
    #[must_use]
    pub fn segments(&self, knots: &[Point]) -> Vec<CubicSegment> {
        if knots.len() != self.first.len() + 1 {
            return Vec::new();
        }

        knots
            .windows(2)
            .zip(self.first.iter().zip(&self.second))
            .map(|(pair, (first, second))| CubicSegment {
                start: pair[0],
                first_control: *first,
                second_control: *second,
                end: pair[1],
            })
            .collect()
    }
}

/// One cubic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub start: Point,
    pub first_control: Point,
    pub second_control: Point,
    pub end: Point,
}

impl CubicSegment {
    /// Evaluates the segment at `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(self, t: f64) -> Point {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point::new(
            b0 * self.start.x
                + b1 * self.first_control.x
                + b2 * self.second_control.x
                + b3 * self.end.x,
            b0 * self.start.y
                + b1 * self.first_control.y
                + b2 * self.second_control.y
                + b3 * self.end.y,
        )
    }

    /// First derivative with respect to `t`.
    #[must_use]
    pub fn tangent_at(self, t: f64) -> Point {
        let u = 1.0 - t;
        let d0 = 3.0 * u * u;
        let d1 = 6.0 * u * t;
        let d2 = 3.0 * t * t;
        Point::new(
            d0 * (self.first_control.x - self.start.x)
                + d1 * (self.second_control.x - self.first_control.x)
                + d2 * (self.end.x - self.second_control.x),
            d0 * (self.first_control.y - self.start.y)
                + d1 * (self.second_control.y - self.first_control.y)
                + d2 * (self.end.y - self.second_control.y),
        )
    }

    /// Second derivative with respect to `t`.
    #[must_use]
    pub fn second_derivative_at(self, t: f64) -> Point {
        let u = 1.0 - t;
        let start_weight = 6.0 * u;
        let end_weight = 6.0 * t;
        Point::new(
            start_weight * (self.second_control.x - 2.0 * self.first_control.x + self.start.x)
                + end_weight * (self.end.x - 2.0 * self.second_control.x + self.first_control.x),
            start_weight * (self.second_control.y - 2.0 * self.first_control.y + self.start.y)
                + end_weight * (self.end.y - 2.0 * self.second_control.y + self.first_control.y),
        )
    }
}

/// Fits an open Bézier spline through `knots`.
///
/// Fails with [`GraphError::InvalidInput`] for fewer than two knots or any
/// non-finite coordinate.
pub fn fit_bezier_spline(knots: &[Point]) -> GraphResult<BezierControlPoints> {
    if knots.len() < 2 {
        return Err(GraphError::InvalidInput(
            "at least two knots are required".to_owned(),
        ));
    }
    if let Some(index) = knots.iter().position(|knot| !knot.is_finite()) {
        return Err(GraphError::InvalidInput(format!(
            "knot {index} has a non-finite coordinate"
        )));
    }

    let n = knots.len() - 1;

    // Straight line: 3*P1 = 2*P0 + P3, P2 = 2*P1 - P0.
    if n == 1 {
        let first = Point::new(
            (2.0 * knots[0].x + knots[1].x) / 3.0,
            (2.0 * knots[0].y + knots[1].y) / 3.0,
        );
        let second = Point::new(2.0 * first.x - knots[0].x, 2.0 * first.y - knots[0].y);
        return Ok(BezierControlPoints {
            first: vec![first],
            second: vec![second],
        });
    }

    let xs = solve_first_control_coords(&right_hand_side(knots, |p| p.x));
    let ys = solve_first_control_coords(&right_hand_side(knots, |p| p.y));

    let mut first = Vec::with_capacity(n);
    let mut second = Vec::with_capacity(n);
    for i in 0..n {
        first.push(Point::new(xs[i], ys[i]));
        if i < n - 1 {
            second.push(Point::new(
                2.0 * knots[i + 1].x - xs[i + 1],
                2.0 * knots[i + 1].y - ys[i + 1],
            ));
        } else {
            second.push(Point::new(
                (knots[n].x + xs[n - 1]) / 2.0,
                (knots[n].y + ys[n - 1]) / 2.0,
            ));
        }
    }

    Ok(BezierControlPoints { first, second })
}

fn right_hand_side(knots: &[Point], coord: impl Fn(&Point) -> f64) -> Vec<f64> {
    let n = knots.len() - 1;
    let mut rhs = vec![0.0; n];
    rhs[0] = coord(&knots[0]) + 2.0 * coord(&knots[1]);
    for i in 1..n - 1 {
        rhs[i] = 4.0 * coord(&knots[i]) + 2.0 * coord(&knots[i + 1]);
    }
    rhs[n - 1] = (8.0 * coord(&knots[n - 1]) + coord(&knots[n])) / 2.0;
    rhs
}

/// Thomas algorithm for the natural-spline system.
///
/// Diagonal is `2` on the first row, `4` inside, `3.5` on the last row; all
/// off-diagonal entries are `1`.
fn solve_first_control_coords(rhs: &[f64]) -> Vec<f64> {
    let n = rhs.len();
    let mut solution = vec![0.0; n];
    let mut scratch = vec![0.0; n];

    let mut pivot = 2.0;
    solution[0] = rhs[0] / pivot;

    for i in 1..n {
        scratch[i] = 1.0 / pivot;
        let diagonal = if i < n - 1 { 4.0 } else { 3.5 };
        pivot = diagonal - scratch[i];
        solution[i] = (rhs[i] - solution[i - 1]) / pivot;
    }

    for i in 1..n {
        solution[n - i - 1] -= scratch[n - i] * solution[n - i];
    }

    solution
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_matches_hand_computed_two_row_system() {
        // [2 1; 1 3.5] x = [2 5] => x = [1/3, 4/3]
        let x = solve_first_control_coords(&[2.0, 5.0]);
        assert!((x[0] - 1.0 / 3.0).abs() <= 1e-12);
        assert!((x[1] - 4.0 / 3.0).abs() <= 1e-12);
    }

    #[test]
    fn segments_require_matching_knot_count() {
        let knots = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let cps = fit_bezier_spline(&knots).expect("fit");
        assert_eq!(cps.segments(&knots).len(), 1);
        assert!(cps.segments(&knots[..1]).is_empty());
    }
}
