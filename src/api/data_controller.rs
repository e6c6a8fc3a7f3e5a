use std::sync::Arc;

use tracing::debug;

use crate::convert::{CategoricalTable, convert};
use crate::core::{SelectionId, TooltipItem};
use crate::error::TornadoResult;
use crate::interaction::SelectionSnapshot;
use crate::render::Renderer;

use super::TornadoChart;

impl<R: Renderer> TornadoChart<R> {
    /// Replaces the chart data and runs a full render pass.
    ///
    /// Missing or empty input renders a blank chart; it is not an error.
    pub fn set_data(&mut self, table: CategoricalTable) -> TornadoResult<()> {
        self.view = convert(&table, &self.config, &self.services);
        self.table = table;
        debug!(
            categories = self.view.categories.len(),
            series = self.view.series.len(),
            "set chart data"
        );
        self.render()
    }

    /// Drops all data and renders a blank chart.
    pub fn clear_data(&mut self) -> TornadoResult<()> {
        self.set_data(CategoricalTable::default())
    }

    /// Installs a new selection snapshot and re-renders.
    ///
    /// The snapshot is read once per pass; hosts replace it between passes
    /// instead of mutating points in place.
    pub fn set_selection(&mut self, selection: Arc<dyn SelectionSnapshot>) -> TornadoResult<()> {
        debug!(has_selection = selection.has_selection(), "set selection");
        self.selection = selection;
        self.render()
    }

    /// Tooltip payload of the column under `(x, y)` in the last frame.
    #[must_use]
    pub fn tooltip_at(&self, x: f64, y: f64) -> Option<&[TooltipItem]> {
        self.frame
            .hit_test(x, y)
            .map(|column| column.tooltip.as_slice())
    }

    /// Identity of the column under `(x, y)`, for host-side selection.
    #[must_use]
    pub fn identity_at(&self, x: f64, y: f64) -> Option<&SelectionId> {
        self.frame.hit_test(x, y).map(|column| &column.identity)
    }
}
