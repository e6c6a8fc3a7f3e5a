use crate::core::{LegendData, PlotArea, Viewport};

use super::{LegendPosition, LegendSettings};

/// Space the legend component reserves along its docking edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LegendMargin {
    pub width: f64,
    pub height: f64,
}

/// External legend component.
///
/// It draws the legend itself and reports back how much of the viewport it
/// consumed. It is called on every render pass, with `None` when no legend
/// should be shown.
pub trait LegendHost {
    fn layout(
        &mut self,
        legend: Option<&LegendData>,
        settings: &LegendSettings,
        viewport: Viewport,
    ) -> LegendMargin;
}

/// Legend host for charts without a legend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLegend;

impl LegendHost for NoLegend {
    fn layout(
        &mut self,
        _legend: Option<&LegendData>,
        _settings: &LegendSettings,
        _viewport: Viewport,
    ) -> LegendMargin {
        LegendMargin::default()
    }
}

/// Legend host that reserves a fixed margin whenever a legend is shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLegend {
    pub margin: LegendMargin,
}

impl FixedLegend {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            margin: LegendMargin { width, height },
        }
    }
}

impl LegendHost for FixedLegend {
    fn layout(
        &mut self,
        legend: Option<&LegendData>,
        _settings: &LegendSettings,
        _viewport: Viewport,
    ) -> LegendMargin {
        if legend.is_some() {
            self.margin
        } else {
            LegendMargin::default()
        }
    }
}

/// Shrinks `plot` by the legend margin on its docking edge.
#[must_use]
pub fn apply_legend_margin(
    plot: PlotArea,
    margin: LegendMargin,
    position: LegendPosition,
) -> PlotArea {
    let width = margin.width.clamp(0.0, plot.width);
    let height = margin.height.clamp(0.0, plot.height);
    match position {
        LegendPosition::Top => {
            PlotArea::new(plot.x, plot.y + height, plot.width, plot.height - height)
        }
        LegendPosition::Bottom => PlotArea::new(plot.x, plot.y, plot.width, plot.height - height),
        LegendPosition::Left => {
            PlotArea::new(plot.x + width, plot.y, plot.width - width, plot.height)
        }
        LegendPosition::Right => PlotArea::new(plot.x, plot.y, plot.width - width, plot.height),
    }
}
