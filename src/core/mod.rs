pub mod data;
pub mod primitives;
pub mod scale;
pub mod types;
pub mod windowing;

pub use data::{
    Category, ConvertedView, DataPoint, LegendData, LegendEntry, MAX_SERIES, Series, SeriesList,
    TooltipItem,
};
pub use scale::{ValueScale, column_width};
pub use types::{Margins, PlotArea, SelectionId, Viewport};
pub use windowing::{CategoryWindow, categories_in_window, points_in_window, view_in_window};
