use serde::{Deserialize, Serialize};

use crate::api::DataLabelSettings;
use crate::core::DataPoint;
use crate::format::{DisplayUnits, FontSpec, FormatServices};
use crate::layout::columns::{ColumnShape, side_width};
use crate::render::{Color, TextHAlign};

/// Gap between a label and the bar edge it sits next to.
pub const LABEL_PADDING: f64 = 2.5;
/// Space reserved around a label when sizing its width budget.
pub const LABEL_MARGIN: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelPlacement {
    Inside,
    Outside,
}

/// Computed data label for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelData {
    /// Anchor offset from the columns area origin.
    pub dx: f64,
    pub text: String,
    /// Unformatted value, kept for tooltips.
    pub source_value: f64,
    pub color: Color,
    pub placement: LabelPlacement,
    pub h_align: TextHAlign,
    pub width: f64,
    pub height: f64,
}

/// Inside placement requires the bar to exceed the label width plus
/// [`LABEL_PADDING`]; equality places the label outside.
#[must_use]
pub fn label_fits_inside(bar_width: f64, label_width: f64) -> bool {
    bar_width > label_width + LABEL_PADDING
}

/// Width budget for a label: the larger of the space beside the bar on its
/// own side and the bar itself, each less [`LABEL_MARGIN`].
#[must_use]
pub fn label_max_width(shape: &ColumnShape, available_width: f64, series_count: usize) -> f64 {
    let side = side_width(available_width, series_count);
    let outside = side - shape.width - LABEL_MARGIN;
    let inside = shape.width - LABEL_MARGIN;
    outside.max(inside).max(0.0)
}

/// Places the value label of `point` around `shape`.
///
/// Returns `None` when the formatted text cannot fit even as an ellipsis.
#[must_use]
pub fn place_label(
    point: &DataPoint,
    shape: &ColumnShape,
    context: LabelContext<'_>,
    services: &FormatServices,
) -> Option<LabelData> {
    let max_width = label_max_width(shape, context.available_width, context.series_count);
    let formatted = services.formatter.format(
        point.value,
        context.format_string,
        context.settings.precision,
        context.display_units,
    );
    let text = services
        .measurer
        .truncate_to_fit(&formatted, context.font, max_width);
    if text.is_empty() {
        return None;
    }
    let size = services.measurer.measure(&text, context.font);

    let (dx, placement, h_align, color) = if label_fits_inside(shape.width, size.width) {
        (
            shape.dx + shape.width / 2.0,
            LabelPlacement::Inside,
            TextHAlign::Center,
            context.settings.inside_fill,
        )
    } else if shape.mirrored {
        (
            shape.dx - LABEL_PADDING,
            LabelPlacement::Outside,
            TextHAlign::Right,
            context.settings.outside_fill,
        )
    } else {
        (
            shape.dx + shape.width + LABEL_PADDING,
            LabelPlacement::Outside,
            TextHAlign::Left,
            context.settings.outside_fill,
        )
    };

    Some(LabelData {
        dx,
        text,
        source_value: point.value,
        color,
        placement,
        h_align,
        width: size.width,
        height: size.height,
    })
}

/// Per-series inputs shared by every label of one pass.
#[derive(Debug, Clone, Copy)]
pub struct LabelContext<'a> {
    pub settings: &'a DataLabelSettings,
    pub font: &'a FontSpec,
    pub format_string: Option<&'a str>,
    /// Concrete units, already resolved from `Auto`.
    pub display_units: DisplayUnits,
    pub available_width: f64,
    pub series_count: usize,
}
