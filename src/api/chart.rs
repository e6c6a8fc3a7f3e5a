use std::sync::Arc;

use crate::convert::{CategoricalTable, convert};
use crate::core::{ConvertedView, PlotArea, Viewport};
use crate::error::{TornadoError, TornadoResult};
use crate::format::FormatServices;
use crate::interaction::{InteractionMode, InteractionState, NoSelection, SelectionSnapshot};
use crate::layout::TornadoFrame;
use crate::render::Renderer;
use crate::scroll::{ScrollWindow, ScrollWindowController};

use super::{LegendHost, NoLegend, TornadoChartConfig};

/// Main orchestration facade consumed by host applications.
///
/// `TornadoChart` owns the converted data, scroll state and last laid-out
/// frame, and drives the renderer. Every input runs at most one synchronous
/// convert/window/layout/render pass.
pub struct TornadoChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: TornadoChartConfig,
    pub(super) services: FormatServices,
    pub(super) legend_host: Box<dyn LegendHost>,
    pub(super) selection: Arc<dyn SelectionSnapshot>,
    pub(super) table: CategoricalTable,
    pub(super) view: ConvertedView,
    pub(super) scroll: ScrollWindowController,
    pub(super) scroll_track: Option<PlotArea>,
    pub(super) interaction: InteractionState,
    pub(super) frame: TornadoFrame,
    pub(super) frame_pending: bool,
}

impl<R: Renderer> TornadoChart<R> {
    pub fn new(renderer: R, config: TornadoChartConfig) -> TornadoResult<Self> {
        if !config.viewport.is_valid() {
            return Err(TornadoError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        config.validate()?;

        Ok(Self {
            renderer,
            scroll: ScrollWindowController::new(config.scroll),
            config,
            services: FormatServices::default(),
            legend_host: Box::new(NoLegend),
            selection: Arc::new(NoSelection),
            table: CategoricalTable::default(),
            view: ConvertedView::empty(),
            scroll_track: None,
            interaction: InteractionState::default(),
            frame: TornadoFrame::default(),
            frame_pending: false,
        })
    }

    /// Replaces the formatter, text measurer and color resolver.
    #[must_use]
    pub fn with_services(mut self, services: FormatServices) -> Self {
        self.services = services;
        self
    }

    #[must_use]
    pub fn with_legend_host(mut self, legend_host: impl LegendHost + 'static) -> Self {
        self.legend_host = Box::new(legend_host);
        self
    }

    #[must_use]
    pub fn config(&self) -> &TornadoChartConfig {
        &self.config
    }

    /// Applies new settings, reconverts the current data and re-renders.
    pub fn set_config(&mut self, config: TornadoChartConfig) -> TornadoResult<()> {
        config.validate()?;
        self.scroll.set_settings(config.scroll);
        self.config = config;
        self.view = convert(&self.table, &self.config, &self.services);
        self.render()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Resizes the chart. A zero-sized viewport renders an empty frame.
    pub fn set_viewport(&mut self, viewport: Viewport) -> TornadoResult<()> {
        self.config.viewport = viewport;
        self.render()
    }

    #[must_use]
    pub fn services(&self) -> &FormatServices {
        &self.services
    }

    /// Full, unwindowed data of the current update cycle.
    #[must_use]
    pub fn view(&self) -> &ConvertedView {
        &self.view
    }

    /// Geometry of the last render pass.
    #[must_use]
    pub fn frame(&self) -> &TornadoFrame {
        &self.frame
    }

    #[must_use]
    pub fn scroll_window(&self) -> ScrollWindow {
        self.scroll.current_window()
    }

    #[must_use]
    pub fn scroll_controller(&self) -> &ScrollWindowController {
        &self.scroll
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
