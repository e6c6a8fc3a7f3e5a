//! Text measurement hooks for label layout.
//!
//! Shaping lives in the host. Layout only needs rough bounds and a way to
//! shorten strings, so measurement is injected through [`TextMeasurer`].

use serde::{Deserialize, Serialize};

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "\u{2026}";

/// Font family and pixel size used to measure one kind of label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f64,
}

impl FontSpec {
    #[must_use]
    pub fn new(family: impl Into<String>, size_px: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
        }
    }
}

/// Measured pixel bounds of a string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str, font: &FontSpec) -> TextSize;

    /// Returns `text` unchanged when it fits `max_width`, otherwise the longest
    /// prefix that fits once [`ELLIPSIS`] is appended.
    ///
    /// Returns an empty string when not even the ellipsis fits.
    fn truncate_to_fit(&self, text: &str, font: &FontSpec, max_width: f64) -> String {
        if self.measure(text, font).width <= max_width {
            return text.to_owned();
        }
        if max_width.is_nan()
            || max_width <= 0.0
            || self.measure(ELLIPSIS, font).width > max_width
        {
            return String::new();
        }

        let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let fits = |count: usize| {
            let end = boundaries.get(count).copied().unwrap_or(text.len());
            let candidate = format!("{}{ELLIPSIS}", &text[..end]);
            self.measure(&candidate, font).width <= max_width
        };

        // Largest prefix length whose ellipsized form fits.
        let (mut low, mut high) = (0usize, boundaries.len());
        while low < high {
            let mid = (low + high).div_ceil(2);
            if fits(mid) {
                low = mid;
            } else {
                high = mid - 1;
            }
        }

        let end = boundaries.get(low).copied().unwrap_or(text.len());
        format!("{}{ELLIPSIS}", text[..end].trim_end())
    }
}

/// Heuristic measurer for headless use: average glyph width of 0.6em and a
/// line height of 1em.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> TextSize {
        TextSize {
            width: 0.6 * font.size_px * text.chars().count() as f64,
            height: font.size_px,
        }
    }
}
