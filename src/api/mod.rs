mod chart;
mod chart_config;
mod data_controller;
mod interaction_controller;
mod legend;
mod render_coordinator;

pub use chart::TornadoChart;
pub use chart_config::{
    CategoryAxisPosition, CategoryAxisSettings, DataLabelSettings, LegendPosition,
    LegendSettings, ScrollSettings, TornadoChartConfig,
};
pub use legend::{FixedLegend, LegendHost, LegendMargin, NoLegend, apply_legend_margin};
