use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, column_width};

/// Rotation applied to left-mirrored columns.
pub const MIRROR_ROTATION_DEGREES: f64 = 180.0;

/// Row metrics shared by every column of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowMetrics {
    /// Width available to columns (both halves in two-series mode).
    pub available_width: f64,
    pub row_height: f64,
    pub column_padding: f64,
    /// Visible categories per series.
    pub category_count: usize,
}

impl RowMetrics {
    #[must_use]
    pub fn row_pitch(self) -> f64 {
        self.row_height + self.column_padding
    }
}

/// Geometry of one column relative to the columns area origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnShape {
    pub dx: f64,
    pub dy: f64,
    pub width: f64,
    pub height: f64,
    pub rotation_degrees: f64,
    pub pivot_x: f64,
    pub pivot_y: f64,
    /// Left-mirrored series 0 in two-series mode.
    pub mirrored: bool,
}

/// Width available to one column on its own side of the midline.
#[must_use]
pub fn side_width(available_width: f64, series_count: usize) -> f64 {
    if series_count >= 2 {
        available_width / 2.0
    } else {
        available_width
    }
}

/// Computes the shape of the point at flattened index `index`.
///
/// Widths scale against the point's own side, so in two-series mode a bar at
/// the scale maximum fills exactly half of `available_width`.
///
/// `inset_factor` is the highlight shape factor: highlighted variants are
/// inset by `row_height * (1 - factor) / 2` on both sides when highlights are
/// present. `1.0` disables the inset.
#[must_use]
pub fn column_shape(
    point: &DataPoint,
    index: usize,
    series_count: usize,
    metrics: RowMetrics,
    highlighted_variant: bool,
    inset_factor: f64,
) -> ColumnShape {
    let side = side_width(metrics.available_width, series_count);
    let width = column_width(point.value, point.min_value, point.max_value, side);

    let row = if metrics.category_count == 0 {
        0
    } else {
        index % metrics.category_count
    };
    let inset = if highlighted_variant {
        (metrics.row_height * (1.0 - inset_factor) / 2.0).clamp(0.0, metrics.row_height / 2.0)
    } else {
        0.0
    };
    let height = (metrics.row_height - 2.0 * inset).max(0.0);
    let dy = metrics.row_pitch() * row as f64 + inset;

    let mirrored = series_count >= 2 && point.series_index == 0;
    let (dx, rotation_degrees) = if series_count >= 2 {
        if mirrored {
            (side - width, MIRROR_ROTATION_DEGREES)
        } else {
            (side, 0.0)
        }
    } else {
        (0.0, 0.0)
    };

    ColumnShape {
        dx,
        dy,
        width,
        height,
        rotation_degrees,
        pivot_x: width / 2.0,
        pivot_y: height / 2.0,
        mirrored,
    }
}

/// Lays out every point of a windowed, series-major list.
#[must_use]
pub fn layout_columns(
    points: &[DataPoint],
    series_count: usize,
    metrics: RowMetrics,
    highlighted_variants: bool,
    inset_factor: f64,
) -> Vec<ColumnShape> {
    if metrics.category_count == 0 || series_count == 0 {
        return Vec::new();
    }
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            column_shape(
                point,
                index,
                series_count,
                metrics,
                highlighted_variants && point.highlight,
                inset_factor,
            )
        })
        .collect()
}
