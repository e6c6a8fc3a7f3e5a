use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::{ConvertedView, Margins, PlotArea};
use crate::error::TornadoResult;
use crate::interaction::SelectionSnapshot;
use crate::layout::{LayoutOptions, layout_frame};
use crate::render::Renderer;

use super::{TornadoChart, apply_legend_margin};

impl<R: Renderer> TornadoChart<R> {
    /// Runs one full window/layout/render pass over the current data.
    pub fn render(&mut self) -> TornadoResult<()> {
        let viewport = self.config.viewport;
        let outer = PlotArea::inside_margins(viewport, Margins::CHART);

        let legend = if self.config.legend.show {
            self.view.legend.as_ref()
        } else {
            None
        };
        let margin = self
            .legend_host
            .layout(legend, &self.config.legend, viewport);
        let mut plot = apply_legend_margin(outer, margin, self.config.legend.position);

        let window = self
            .scroll
            .compute_window(self.view.categories.len(), plot.height);
        let scroll_track = if self.scroll.is_active() {
            let width = self.config.scroll.scrollbar_width.min(plot.width);
            plot.width -= width;
            Some(PlotArea::new(plot.right(), plot.y, width, plot.height))
        } else {
            None
        };

        let selection = Arc::clone(&self.selection);
        let options = LayoutOptions::new(&self.config.labels, &self.config.categories)
            .with_selection_active(selection.has_selection());
        let mut frame = self.scroll.render_window(&self.view, |mut windowed, _| {
            stamp_selection(&mut windowed, selection.as_ref());
            layout_frame(&windowed, plot, options, &self.services)
        });
        frame.scrollbar = scroll_track.and_then(|track| self.scroll.geometry(track));
        frame.legend = legend.cloned();

        trace!(
            start = window.window.start,
            end = window.window.end,
            start_fraction = window.start_fraction,
            end_fraction = window.end_fraction,
            "resolved scroll window"
        );

        let render_frame = frame.to_render_frame(viewport);
        self.frame = frame;
        self.scroll_track = scroll_track;
        self.frame_pending = false;
        self.renderer.render(&render_frame)?;
        debug!(
            columns = self.frame.columns.len(),
            categories = self.frame.categories.len(),
            scrolling = self.scroll_track.is_some(),
            "rendered frame"
        );
        Ok(())
    }
}

/// Copies the pass-start selection state onto the windowed points.
fn stamp_selection(view: &mut ConvertedView, selection: &dyn SelectionSnapshot) {
    for point in view
        .data_points
        .iter_mut()
        .chain(view.highlighted_data_points.iter_mut())
    {
        point.selected = selection.is_selected(&point.identity);
    }
}
