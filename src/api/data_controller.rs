use tracing::debug;

use crate::core::{Bin, BinSeries, GraphData, Point, PointSeries};
use crate::error::GraphResult;

use super::{SelectionState, SelectorController};

impl SelectorController {
    /// Binds knots for the curve. An empty list clears the data.
    pub fn bind_points(&mut self, points: Vec<Point>) -> GraphResult<()> {
        if points.is_empty() {
            self.clear_data();
            return Ok(());
        }
        let series = PointSeries::new(points)?;
        self.bind_data(series.into());
        Ok(())
    }

    /// Binds counted bins; the curve runs through knots derived from them.
    /// An empty list clears the data.
    pub fn bind_bins(&mut self, bins: Vec<Bin>) -> GraphResult<()> {
        if bins.is_empty() {
            self.clear_data();
            return Ok(());
        }
        let series = BinSeries::new(bins)?;
        self.bind_data(series.into());
        Ok(())
    }

    /// Replaces the bound data and resets the selection to the domain bounds.
    ///
    /// Any gesture in progress is cancelled first.
    pub fn bind_data(&mut self, data: GraphData) {
        let domain = data.domain();
        debug!(
            knots = data.knots().len(),
            bins = data.bins().map_or(0, |bins| bins.bins().len()),
            domain_min = domain.min,
            domain_max = domain.max,
            "bind graph data"
        );
        self.end_gesture();
        self.data = Some(data);
        self.apply_selection(SelectionState::initial(self.config.mode, domain));
    }

    /// Drops the bound data and the selection without notifying value changes.
    pub fn clear_data(&mut self) {
        debug!(had_data = self.data.is_some(), "clear graph data");
        self.end_gesture();
        self.data = None;
        self.selection = None;
    }
}
