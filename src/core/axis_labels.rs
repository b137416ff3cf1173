use serde::{Deserialize, Serialize};

use crate::core::types::{DomainRange, Viewport};
use crate::error::{GraphError, GraphResult};

/// Upper bound on labels requested between the two domain endpoints.
pub const MAX_MIDDLE_LABELS: usize = 10_000;

/// Domain value and pixel position of one evenly spaced axis label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub value: f64,
    pub position: f64,
}

/// Lays out `middle_count + 2` labels from `domain.min` at `viewport.left`
/// to `domain.max` at `viewport.right`.
///
/// Fails with [`GraphError::InvalidInput`] above [`MAX_MIDDLE_LABELS`].
pub fn evenly_spaced_labels(
    domain: DomainRange,
    viewport: Viewport,
    middle_count: usize,
) -> GraphResult<Vec<AxisLabel>> {
    if middle_count > MAX_MIDDLE_LABELS {
        return Err(GraphError::InvalidInput(format!(
            "middle label count {middle_count} exceeds {MAX_MIDDLE_LABELS}"
        )));
    }

    let intervals = (middle_count + 1) as f64;
    Ok((0..middle_count + 2)
        .map(|index| {
            let fraction = index as f64 / intervals;
            AxisLabel {
                value: domain.min + fraction * domain.span(),
                position: viewport.left + fraction * viewport.width(),
            }
        })
        .collect())
}
