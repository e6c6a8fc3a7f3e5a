use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::SelectionId;
use crate::render::Color;

/// Maximum number of compared measures; extra value columns are dropped.
pub const MAX_SERIES: usize = 2;

/// One row of the category column, formatted and measured for the gutter.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub raw: String,
    pub text: String,
    pub text_width: f64,
    pub text_height: f64,
    /// Position in the full, unwindowed category list.
    pub index: usize,
}

/// One compared measure.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub fill: Color,
    /// User cap on this series' scale maximum.
    pub axis_end: Option<f64>,
    pub identity: SelectionId,
    pub format_string: Option<String>,
}

pub type SeriesList = SmallVec<[Series; MAX_SERIES]>;

/// Name/value pair shown when hovering a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipItem {
    pub display_name: String,
    pub value: String,
}

/// One (category × series) cell.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub value: f64,
    pub highlight_value: Option<f64>,
    pub min_value: f64,
    pub max_value: f64,
    pub category_index: usize,
    pub series_index: usize,
    pub color: Color,
    pub selected: bool,
    pub highlight: bool,
    pub identity: SelectionId,
    pub tooltip: Vec<TooltipItem>,
}

/// One legend row per series.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub identity: SelectionId,
}

/// Legend description handed to the external legend component.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegendData {
    pub title: Option<String>,
    pub entries: Vec<LegendEntry>,
}

/// Normalized chart data for one update cycle.
///
/// `data_points` and `highlighted_data_points` are series-major: series 0 fills
/// `[0, N)`, series 1 fills `[N, 2N)` for `N` categories.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConvertedView {
    pub categories: Vec<Category>,
    pub series: SeriesList,
    pub data_points: Vec<DataPoint>,
    pub highlighted_data_points: Vec<DataPoint>,
    pub has_highlights: bool,
    pub has_dynamic_series: bool,
    pub legend: Option<LegendData>,
    pub min_value: f64,
    pub max_value: f64,
    pub max_label_width: f64,
    pub max_label_height: f64,
    pub category_display_name: String,
}

impl ConvertedView {
    /// The "nothing to render" result for missing or empty input.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.series.is_empty() || self.data_points.is_empty()
    }

    /// Points the render path should draw: highlighted variants when present.
    #[must_use]
    pub fn render_points(&self) -> &[DataPoint] {
        if self.has_highlights && !self.highlighted_data_points.is_empty() {
            &self.highlighted_data_points
        } else {
            &self.data_points
        }
    }
}
