//! Geometry core: turns a windowed [`ConvertedView`] and a plot rectangle into
//! positioned columns, labels, the category gutter and the midline.
//!
//! Layout is a pure function of its inputs. Degenerate input (no categories,
//! no plot area, rows thinner than a pixel) yields an empty frame instead of
//! an error.

mod columns;
mod frame;
mod labels;

pub use columns::{
    ColumnShape, MIRROR_ROTATION_DEGREES, RowMetrics, column_shape, layout_columns, side_width,
};
pub use frame::{
    AXIS_LINE_COLOR, AXIS_LINE_WIDTH, AxisLine, CategoryLabelGeometry, ColumnGeometry,
    ColumnKey, ColumnLabel, SCROLLBAR_THUMB_COLOR, SCROLLBAR_TRACK_COLOR, TornadoFrame,
};
pub use labels::{
    LABEL_MARGIN, LABEL_PADDING, LabelContext, LabelData, LabelPlacement, label_fits_inside,
    label_max_width, place_label,
};

use tracing::{trace, warn};

use crate::api::{CategoryAxisPosition, CategoryAxisSettings, DataLabelSettings};
use crate::core::{ConvertedView, DataPoint, PlotArea};
use crate::format::FormatServices;
use crate::render::TextHAlign;

/// Share of each row pitch left empty between neighbouring rows.
pub const COLUMN_PADDING_RATIO: f64 = 0.2;
/// Height factor of highlighted sub-shapes relative to the row.
pub const HIGHLIGHT_SHAPE_FACTOR: f64 = 1.0;
/// Horizontal space around category labels inside the gutter.
pub const CATEGORY_LABEL_MARGIN: f64 = 15.0;
/// The gutter never takes more than this share of the plot width.
pub const MAX_CATEGORY_GUTTER_RATIO: f64 = 0.3;
/// Rows thinner than this are not drawn at all.
pub const MIN_ROW_PITCH: f64 = 1.0;
pub const DEFAULT_OPACITY: f64 = 1.0;
pub const DIMMED_OPACITY: f64 = 0.4;

/// Settings consumed by one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions<'a> {
    pub labels: &'a DataLabelSettings,
    pub categories: &'a CategoryAxisSettings,
    pub highlight_shape_factor: f64,
    /// Any point is selected; unselected points are dimmed.
    pub selection_active: bool,
}

impl<'a> LayoutOptions<'a> {
    #[must_use]
    pub fn new(labels: &'a DataLabelSettings, categories: &'a CategoryAxisSettings) -> Self {
        Self {
            labels,
            categories,
            highlight_shape_factor: HIGHLIGHT_SHAPE_FACTOR,
            selection_active: false,
        }
    }

    #[must_use]
    pub fn with_selection_active(mut self, selection_active: bool) -> Self {
        self.selection_active = selection_active;
        self
    }

    #[must_use]
    pub fn with_highlight_shape_factor(mut self, factor: f64) -> Self {
        self.highlight_shape_factor = factor;
        self
    }
}

/// Width reserved for category labels.
#[must_use]
pub fn category_gutter_width(
    max_label_width: f64,
    plot_width: f64,
    settings: &CategoryAxisSettings,
) -> f64 {
    if !settings.show || plot_width <= 0.0 {
        return 0.0;
    }
    (max_label_width.max(0.0) + CATEGORY_LABEL_MARGIN).min(plot_width * MAX_CATEGORY_GUTTER_RATIO)
}

/// Row metrics for `category_count` rows stacked in `plot_height`.
///
/// Returns `None` when there are no rows or each row would be thinner than
/// [`MIN_ROW_PITCH`].
#[must_use]
pub fn row_metrics(
    plot_height: f64,
    category_count: usize,
    available_width: f64,
) -> Option<RowMetrics> {
    if category_count == 0 || plot_height <= 0.0 || available_width <= 0.0 {
        return None;
    }
    let pitch = plot_height / category_count as f64;
    if pitch < MIN_ROW_PITCH {
        return None;
    }
    let column_padding = pitch * COLUMN_PADDING_RATIO;
    Some(RowMetrics {
        available_width,
        row_height: pitch - column_padding,
        column_padding,
        category_count,
    })
}

/// Fill opacity for a point given the pass-wide selection/highlight state.
#[must_use]
pub fn column_opacity(point: &DataPoint, selection_active: bool, has_highlights: bool) -> f64 {
    let emphasized = if selection_active {
        point.selected
    } else if has_highlights {
        point.highlight
    } else {
        true
    };
    if emphasized {
        DEFAULT_OPACITY
    } else {
        DIMMED_OPACITY
    }
}

/// Lays out the visible slice of a chart inside `plot`.
#[must_use]
pub fn layout_frame(
    view: &ConvertedView,
    plot: PlotArea,
    options: LayoutOptions<'_>,
    services: &FormatServices,
) -> TornadoFrame {
    let empty = TornadoFrame {
        plot,
        ..TornadoFrame::default()
    };
    if view.is_empty() || !plot.has_area() {
        return empty;
    }

    let series_count = view.series.len();
    let category_count = view.categories.len();
    let gutter = category_gutter_width(view.max_label_width, plot.width, options.categories);
    let available_width = plot.width - gutter;
    let Some(metrics) = row_metrics(plot.height, category_count, available_width) else {
        warn!(
            plot_width = plot.width,
            plot_height = plot.height,
            category_count,
            "viewport too small for categories; skipping layout"
        );
        return empty;
    };
    let columns_x = match options.categories.position {
        CategoryAxisPosition::Left => plot.x + gutter,
        CategoryAxisPosition::Right => plot.x,
    };

    let points = view.render_points();
    let shapes = layout_columns(
        points,
        series_count,
        metrics,
        view.has_highlights,
        options.highlight_shape_factor,
    );

    let label_font = options.labels.font();
    let show_labels = options.labels.show
        && services.measurer.measure("0", &label_font).height < metrics.row_height;
    let display_units = options.labels.display_units.resolve(view.max_value);

    let columns = points
        .iter()
        .zip(shapes.iter())
        .map(|(point, shape)| {
            let label = if show_labels {
                let context = LabelContext {
                    settings: options.labels,
                    font: &label_font,
                    format_string: view
                        .series
                        .get(point.series_index)
                        .and_then(|series| series.format_string.as_deref()),
                    display_units,
                    available_width,
                    series_count,
                };
                place_label(point, shape, context, services).map(|data| ColumnLabel {
                    x: columns_x + data.dx,
                    y: plot.y + shape.dy + shape.height / 2.0,
                    font_size_px: label_font.size_px,
                    data,
                })
            } else {
                None
            };

            ColumnGeometry {
                key: ColumnKey {
                    category_index: point.category_index,
                    series_index: point.series_index,
                },
                x: columns_x + shape.dx,
                y: plot.y + shape.dy,
                width: shape.width,
                height: shape.height,
                rotation_degrees: shape.rotation_degrees,
                pivot_x: shape.pivot_x,
                pivot_y: shape.pivot_y,
                fill: point.color,
                opacity: column_opacity(point, options.selection_active, view.has_highlights),
                label,
                identity: point.identity.clone(),
                tooltip: point.tooltip.clone(),
            }
        })
        .collect();

    let categories = layout_category_labels(
        view, metrics, gutter, columns_x, plot, options, services,
    );

    let axis_line = (series_count == 2).then(|| AxisLine {
        x: columns_x + available_width / 2.0,
        y1: plot.y,
        y2: plot.y + metrics.row_pitch() * category_count as f64 - metrics.column_padding,
    });

    trace!(
        category_count,
        series_count,
        gutter,
        row_height = metrics.row_height,
        show_labels,
        "laid out frame"
    );

    TornadoFrame {
        plot,
        columns,
        categories,
        axis_line,
        scrollbar: None,
        legend: None,
    }
}

fn layout_category_labels(
    view: &ConvertedView,
    metrics: RowMetrics,
    gutter: f64,
    columns_x: f64,
    plot: PlotArea,
    options: LayoutOptions<'_>,
    services: &FormatServices,
) -> Vec<CategoryLabelGeometry> {
    let settings = options.categories;
    if !settings.show || gutter <= 0.0 || view.max_label_height > metrics.row_pitch() {
        return Vec::new();
    }

    let font = settings.font();
    let text_budget = gutter - CATEGORY_LABEL_MARGIN;
    let (x, h_align) = match settings.position {
        CategoryAxisPosition::Left => (columns_x - CATEGORY_LABEL_MARGIN / 2.0, TextHAlign::Right),
        CategoryAxisPosition::Right => (
            columns_x + metrics.available_width + CATEGORY_LABEL_MARGIN / 2.0,
            TextHAlign::Left,
        ),
    };

    view.categories
        .iter()
        .enumerate()
        .filter_map(|(row, category)| {
            let text = services
                .measurer
                .truncate_to_fit(&category.text, &font, text_budget);
            if text.is_empty() {
                return None;
            }
            Some(CategoryLabelGeometry {
                category_index: category.index,
                text,
                full_text: category.text.clone(),
                x,
                y: plot.y + metrics.row_pitch() * row as f64 + metrics.row_height / 2.0,
                h_align,
                color: settings.fill,
                font_size_px: settings.font_size_px,
            })
        })
        .collect()
}
