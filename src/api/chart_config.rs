use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{TornadoError, TornadoResult};
use crate::format::{DisplayUnits, FontSpec, MAX_PRECISION, PaletteSettings};
use crate::render::Color;

const DEFAULT_FONT_FAMILY: &str = "Segoe UI, wf_segoe-ui_normal, helvetica, arial, sans-serif";
/// 9pt at 96 dpi.
const DEFAULT_FONT_SIZE_PX: f64 = 12.0;

/// Data label options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataLabelSettings {
    pub show: bool,
    pub font_family: String,
    pub font_size_px: f64,
    /// `None` lets the format string (or the formatter default) decide.
    pub precision: Option<u8>,
    pub display_units: DisplayUnits,
    /// Text color for labels drawn inside a bar.
    pub inside_fill: Color,
    /// Text color for labels drawn next to a bar.
    pub outside_fill: Color,
}

impl Default for DataLabelSettings {
    fn default() -> Self {
        Self {
            show: true,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            font_size_px: DEFAULT_FONT_SIZE_PX,
            precision: None,
            display_units: DisplayUnits::Auto,
            inside_fill: Color::WHITE,
            outside_fill: Color::BLACK,
        }
    }
}

impl DataLabelSettings {
    #[must_use]
    pub fn font(&self) -> FontSpec {
        FontSpec::new(self.font_family.clone(), self.font_size_px)
    }
}

/// Side of the plot that hosts the category gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryAxisPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryAxisSettings {
    pub show: bool,
    pub position: CategoryAxisPosition,
    pub font_family: String,
    pub font_size_px: f64,
    pub fill: Color,
}

impl Default for CategoryAxisSettings {
    fn default() -> Self {
        Self {
            show: true,
            position: CategoryAxisPosition::Left,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            font_size_px: DEFAULT_FONT_SIZE_PX,
            fill: Color::GRAY,
        }
    }
}

impl CategoryAxisSettings {
    #[must_use]
    pub fn font(&self) -> FontSpec {
        FontSpec::new(self.font_family.clone(), self.font_size_px)
    }
}

/// Where the external legend component docks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendSettings {
    pub show: bool,
    pub position: LegendPosition,
    pub show_title: bool,
    /// Overrides the grouping column name as the legend title.
    pub title_text: Option<String>,
    pub label_color: Color,
    pub font_size_px: f64,
}

impl Default for LegendSettings {
    fn default() -> Self {
        Self {
            show: true,
            position: LegendPosition::Top,
            show_title: true,
            title_text: None,
            label_color: Color::BLACK,
            font_size_px: DEFAULT_FONT_SIZE_PX,
        }
    }
}

/// Category virtualization tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    /// Rows shorter than this trigger scrolling instead of squeezing.
    pub category_min_height: f64,
    pub min_thumb_length: f64,
    pub scrollbar_width: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            category_min_height: 25.0,
            min_thumb_length: 15.0,
            scrollbar_width: 8.0,
        }
    }
}

/// Public chart configuration.
///
/// Serializable so hosts can persist/load chart setup as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TornadoChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub labels: DataLabelSettings,
    #[serde(default)]
    pub categories: CategoryAxisSettings,
    #[serde(default)]
    pub legend: LegendSettings,
    #[serde(default)]
    pub palette: PaletteSettings,
    #[serde(default)]
    pub scroll: ScrollSettings,
}

impl TornadoChartConfig {
    /// Creates a config with default settings for `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            labels: DataLabelSettings::default(),
            categories: CategoryAxisSettings::default(),
            legend: LegendSettings::default(),
            palette: PaletteSettings::default(),
            scroll: ScrollSettings::default(),
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: DataLabelSettings) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_categories(mut self, categories: CategoryAxisSettings) -> Self {
        self.categories = categories;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendSettings) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: PaletteSettings) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_scroll(mut self, scroll: ScrollSettings) -> Self {
        self.scroll = scroll;
        self
    }

    /// Rejects settings the layout math cannot honor.
    pub fn validate(&self) -> TornadoResult<()> {
        for (name, size) in [
            ("label font size", self.labels.font_size_px),
            ("category font size", self.categories.font_size_px),
            ("legend font size", self.legend.font_size_px),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(TornadoError::InvalidSettings(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        if let Some(precision) = self.labels.precision {
            if precision > MAX_PRECISION {
                return Err(TornadoError::InvalidSettings(format!(
                    "label precision must be <= {MAX_PRECISION}"
                )));
            }
        }

        let scroll = self.scroll;
        if !scroll.category_min_height.is_finite() || scroll.category_min_height <= 0.0 {
            return Err(TornadoError::InvalidSettings(
                "category min height must be finite and > 0".to_owned(),
            ));
        }
        if !scroll.min_thumb_length.is_finite() || scroll.min_thumb_length <= 0.0 {
            return Err(TornadoError::InvalidSettings(
                "scrollbar min thumb length must be finite and > 0".to_owned(),
            ));
        }
        if !scroll.scrollbar_width.is_finite() || scroll.scrollbar_width < 0.0 {
            return Err(TornadoError::InvalidSettings(
                "scrollbar width must be finite and >= 0".to_owned(),
            ));
        }

        for color in [
            self.labels.inside_fill,
            self.labels.outside_fill,
            self.categories.fill,
            self.legend.label_color,
            self.palette.foreground,
        ] {
            color
                .validate()
                .map_err(|e| TornadoError::InvalidSettings(e.to_string()))?;
        }

        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> TornadoResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TornadoError::InvalidSettings(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> TornadoResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| TornadoError::InvalidSettings(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
