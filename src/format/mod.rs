//! Formatting, measurement and palette contracts consumed by the converter and
//! layout engine, with headless default implementations.

mod color;
mod text;
mod value;

use std::fmt;
use std::sync::Arc;

pub use color::{ColorResolver, DefaultColorResolver, PaletteSettings};
pub use text::{ELLIPSIS, FontSpec, HeuristicTextMeasurer, TextMeasurer, TextSize};
pub use value::{DefaultValueFormatter, DisplayUnits, MAX_PRECISION, ValueFormatter};

/// Bundle of injected collaborators shared by one chart instance.
#[derive(Clone)]
pub struct FormatServices {
    pub formatter: Arc<dyn ValueFormatter>,
    pub measurer: Arc<dyn TextMeasurer>,
    pub colors: Arc<dyn ColorResolver>,
}

impl FormatServices {
    #[must_use]
    pub fn new(
        formatter: Arc<dyn ValueFormatter>,
        measurer: Arc<dyn TextMeasurer>,
        colors: Arc<dyn ColorResolver>,
    ) -> Self {
        Self {
            formatter,
            measurer,
            colors,
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Arc<dyn ValueFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Arc<dyn ColorResolver>) -> Self {
        self.colors = colors;
        self
    }
}

impl Default for FormatServices {
    fn default() -> Self {
        Self::new(
            Arc::new(DefaultValueFormatter),
            Arc::new(HeuristicTextMeasurer),
            Arc::new(DefaultColorResolver),
        )
    }
}

impl fmt::Debug for FormatServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatServices").finish_non_exhaustive()
    }
}
