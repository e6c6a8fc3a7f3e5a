use serde::{Deserialize, Serialize};

/// Host-supplied drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Fixed outer margins around the plot, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const CHART: Self = Self {
        top: 10.0,
        right: 5.0,
        bottom: 10.0,
        left: 5.0,
    };
}

/// Axis-aligned pixel rectangle used for derived layout regions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Viewport minus fixed margins, saturating at zero size.
    #[must_use]
    pub fn inside_margins(viewport: Viewport, margins: Margins) -> Self {
        Self {
            x: margins.left,
            y: margins.top,
            width: (f64::from(viewport.width) - margins.left - margins.right).max(0.0),
            height: (f64::from(viewport.height) - margins.top - margins.bottom).max(0.0),
        }
    }

    #[must_use]
    pub fn has_area(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

/// Opaque identity of one (category, series, measure) cell.
///
/// Selection collaborators only compare tokens for equality. Cell tokens carry
/// the category's row index so repeated or null category values stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SelectionId {
    pub category: Option<String>,
    #[serde(default)]
    pub category_index: Option<usize>,
    pub series: Option<String>,
    pub measure: Option<String>,
}

impl SelectionId {
    #[must_use]
    pub fn new(
        category: Option<String>,
        series: Option<String>,
        measure: Option<String>,
    ) -> Self {
        Self {
            category,
            category_index: None,
            series,
            measure,
        }
    }

    #[must_use]
    pub fn with_category_index(mut self, index: usize) -> Self {
        self.category_index = Some(index);
        self
    }

    /// Identity of a whole series, used by legend entries.
    #[must_use]
    pub fn for_series(series: Option<String>, measure: Option<String>) -> Self {
        Self::new(None, series, measure)
    }
}
