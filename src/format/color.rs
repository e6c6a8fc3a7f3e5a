use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Theme palette state relevant to series fills.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    pub high_contrast: bool,
    /// Theme foreground used for every series in high-contrast mode.
    pub foreground: Color,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            high_contrast: false,
            foreground: Color::BLACK,
        }
    }
}

/// Resolves the fill for one series.
pub trait ColorResolver: Send + Sync {
    fn resolve(
        &self,
        series_index: usize,
        user_override: Option<Color>,
        palette: &PaletteSettings,
    ) -> Color;
}

/// Two-color default palette: `purple` for the first series, `teal` for the second.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultColorResolver;

impl DefaultColorResolver {
    pub const PALETTE: [Color; 2] = [Color::PURPLE, Color::TEAL];
}

impl ColorResolver for DefaultColorResolver {
    fn resolve(
        &self,
        series_index: usize,
        user_override: Option<Color>,
        palette: &PaletteSettings,
    ) -> Color {
        if palette.high_contrast {
            return palette.foreground;
        }
        user_override.unwrap_or(Self::PALETTE[series_index % Self::PALETTE.len()])
    }
}
