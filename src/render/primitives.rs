use serde::{Deserialize, Serialize};

use crate::error::{TornadoError, TornadoResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// CSS `purple` (#800080).
    pub const PURPLE: Self = Self::rgb(128.0 / 255.0, 0.0, 128.0 / 255.0);
    /// CSS `teal` (#008080).
    pub const TEAL: Self = Self::rgb(0.0, 128.0 / 255.0, 128.0 / 255.0);
    /// Default category label gray (#777777).
    pub const GRAY: Self = Self::rgb(119.0 / 255.0, 119.0 / 255.0, 119.0 / 255.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> TornadoResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let channel = |range: std::ops::Range<usize>| -> TornadoResult<f64> {
            let raw = digits.get(range).ok_or_else(|| invalid_hex(input))?;
            let value = u8::from_str_radix(raw, 16).map_err(|_| invalid_hex(input))?;
            Ok(f64::from(value) / 255.0)
        };

        match digits.len() {
            3 => {
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                Self::from_hex(&expanded)
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid_hex(input)),
        }
    }

    /// Returns the same color with its alpha multiplied by `opacity`.
    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            alpha: (self.alpha * opacity).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn validate(self) -> TornadoResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TornadoError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn invalid_hex(input: &str) -> TornadoError {
    TornadoError::InvalidData(format!("invalid hex color `{input}`"))
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> TornadoResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(TornadoError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(TornadoError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled rectangle in pixel space, optionally rotated around `(pivot_x, pivot_y)`.
///
/// The pivot is relative to the rectangle's own top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub rotation_degrees: f64,
    pub pivot_x: f64,
    pub pivot_y: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            rotation_degrees: 0.0,
            pivot_x: 0.0,
            pivot_y: 0.0,
        }
    }

    #[must_use]
    pub const fn with_rotation(mut self, degrees: f64, pivot_x: f64, pivot_y: f64) -> Self {
        self.rotation_degrees = degrees;
        self.pivot_x = pivot_x;
        self.pivot_y = pivot_y;
        self
    }

    pub fn validate(self) -> TornadoResult<()> {
        for value in [
            self.x,
            self.y,
            self.rotation_degrees,
            self.pivot_x,
            self.pivot_y,
        ] {
            if !value.is_finite() {
                return Err(TornadoError::InvalidData(
                    "rect geometry must be finite".to_owned(),
                ));
            }
        }
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(TornadoError::InvalidData(
                "rect width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(TornadoError::InvalidData(
                "rect height must be finite and >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space. `y` is the vertical center.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    /// Untruncated text for hover titles when `text` was shortened.
    pub title: Option<String>,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn validate(&self) -> TornadoResult<()> {
        if self.text.is_empty() {
            return Err(TornadoError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(TornadoError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(TornadoError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
