//! Normalizes a [`CategoricalTable`] plus display settings into a
//! [`ConvertedView`] of typed, series-major data points.

mod table;

pub use table::{
    CategoricalTable, CategoryColumn, CategoryValue, SeriesGroup, SeriesObjects, ValueColumn,
};

use tracing::{debug, trace};

use crate::api::TornadoChartConfig;
use crate::core::primitives::format_category_date;
use crate::core::{
    Category, ConvertedView, DataPoint, LegendData, LegendEntry, MAX_SERIES, SelectionId, Series,
    SeriesList, TooltipItem, ValueScale,
};
use crate::format::{DisplayUnits, FormatServices};

/// Text shown for null categories.
pub const BLANK_CATEGORY_TEXT: &str = "(Blank)";
/// Tooltip row name for cross-highlighted values.
pub const HIGHLIGHTED_TOOLTIP_NAME: &str = "Highlighted";

/// Converts host data into chart data for one update cycle.
///
/// Missing category data, missing value columns and zero-length value arrays
/// produce [`ConvertedView::empty`]; this is "nothing to render", not an error.
#[must_use]
pub fn convert(
    table: &CategoricalTable,
    config: &TornadoChartConfig,
    services: &FormatServices,
) -> ConvertedView {
    let Some(category_column) = table
        .category
        .as_ref()
        .filter(|column| !column.values.is_empty())
    else {
        debug!("no category data; converted view is empty");
        return ConvertedView::empty();
    };

    let columns: Vec<&ValueColumn> = table.values.iter().take(MAX_SERIES).collect();
    if columns.is_empty() || columns.iter().any(|column| column.values.is_empty()) {
        debug!(
            value_columns = table.values.len(),
            "no value data; converted view is empty"
        );
        return ConvertedView::empty();
    }
    if table.values.len() > MAX_SERIES {
        trace!(
            dropped = table.values.len() - MAX_SERIES,
            "ignoring value columns beyond the second series"
        );
    }

    let scale = ValueScale::from_series(columns.iter().map(|column| column.values.iter()));
    let has_dynamic_series = columns.iter().any(|column| column.group.is_some());
    let has_highlights = columns.iter().any(|column| column.highlights.is_some());

    let series: SeriesList = columns
        .iter()
        .enumerate()
        .map(|(index, column)| build_series(index, column, config, services))
        .collect();

    let categories = build_categories(category_column, config, services);
    let max_label_width = categories
        .iter()
        .map(|category| category.text_width)
        .fold(0.0, f64::max);
    let max_label_height = categories
        .iter()
        .map(|category| category.text_height)
        .fold(0.0, f64::max);

    let capacity = categories.len() * series.len();
    let mut data_points = Vec::with_capacity(capacity);
    let mut highlighted_data_points = Vec::with_capacity(if has_highlights { capacity } else { 0 });

    for (series_index, (column, meta)) in columns.iter().zip(series.iter()).enumerate() {
        let max_value = meta.axis_end.unwrap_or(scale.max);
        for category in &categories {
            let raw = column
                .values
                .get(category.index)
                .copied()
                .flatten()
                .filter(|value| value.is_finite());
            let value = raw.unwrap_or(0.0);
            let identity = SelectionId::new(
                Some(category.raw.clone()),
                column.group.as_ref().map(|group| group.name.clone()),
                column.query_name.clone(),
            )
            .with_category_index(category.index);

            let point = DataPoint {
                value,
                highlight_value: None,
                min_value: scale.min,
                max_value,
                category_index: category.index,
                series_index,
                color: meta.fill,
                selected: false,
                highlight: false,
                identity,
                tooltip: build_tooltip(category_column, category, meta, value, None, services),
            };

            if has_highlights {
                let raw_highlight = column
                    .highlights
                    .as_ref()
                    .and_then(|highlights| highlights.get(category.index).copied().flatten())
                    .filter(|value| value.is_finite());
                let highlighted_value = raw_highlight.unwrap_or(value);
                highlighted_data_points.push(DataPoint {
                    value: highlighted_value,
                    highlight_value: raw_highlight,
                    highlight: raw_highlight.is_some(),
                    tooltip: build_tooltip(
                        category_column,
                        category,
                        meta,
                        value,
                        raw_highlight,
                        services,
                    ),
                    ..point.clone()
                });
            }

            data_points.push(point);
        }
    }

    let legend = has_dynamic_series.then(|| LegendData {
        title: legend_title(table, config),
        entries: series
            .iter()
            .map(|series| LegendEntry {
                label: series.name.clone(),
                color: series.fill,
                identity: series.identity.clone(),
            })
            .collect(),
    });

    debug!(
        categories = categories.len(),
        series = series.len(),
        points = data_points.len(),
        has_highlights,
        has_dynamic_series,
        min_value = scale.min,
        max_value = scale.max,
        "converted data view"
    );

    ConvertedView {
        categories,
        series,
        data_points,
        highlighted_data_points,
        has_highlights,
        has_dynamic_series,
        legend,
        min_value: scale.min,
        max_value: scale.max,
        max_label_width,
        max_label_height,
        category_display_name: category_column.display_name.clone(),
    }
}

fn build_series(
    index: usize,
    column: &ValueColumn,
    config: &TornadoChartConfig,
    services: &FormatServices,
) -> Series {
    let group = column.group.as_ref();
    let name = group
        .map(|group| group.name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| column.display_name.clone());
    let fill_override = group
        .and_then(|group| group.objects.fill)
        .or(column.objects.fill);
    let axis_end = group
        .and_then(|group| group.objects.axis_end)
        .or(column.objects.axis_end)
        .filter(|value| value.is_finite());

    Series {
        name,
        fill: services
            .colors
            .resolve(index, fill_override, &config.palette),
        axis_end,
        identity: SelectionId::for_series(
            group.map(|group| group.name.clone()),
            column.query_name.clone(),
        ),
        format_string: column.format_string.clone(),
    }
}

fn build_categories(
    column: &CategoryColumn,
    config: &TornadoChartConfig,
    services: &FormatServices,
) -> Vec<Category> {
    let font = config.categories.font();
    column
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let (raw, text) = match value {
                CategoryValue::Text(text) => (text.clone(), text.clone()),
                CategoryValue::Number(number) => (
                    number.to_string(),
                    services.formatter.format(
                        *number,
                        column.format_string.as_deref(),
                        None,
                        DisplayUnits::None,
                    ),
                ),
                CategoryValue::Date(time) => (
                    time.to_rfc3339(),
                    format_category_date(*time, column.format_string.as_deref()),
                ),
                CategoryValue::Null => (String::new(), BLANK_CATEGORY_TEXT.to_owned()),
            };
            let size = services.measurer.measure(&text, &font);
            Category {
                raw,
                text,
                text_width: size.width,
                text_height: size.height,
                index,
            }
        })
        .collect()
}

fn build_tooltip(
    category_column: &CategoryColumn,
    category: &Category,
    series: &Series,
    value: f64,
    highlight: Option<f64>,
    services: &FormatServices,
) -> Vec<TooltipItem> {
    let format = |value: f64| {
        services.formatter.format(
            value,
            series.format_string.as_deref(),
            None,
            DisplayUnits::None,
        )
    };

    let mut items = vec![
        TooltipItem {
            display_name: category_column.display_name.clone(),
            value: category.text.clone(),
        },
        TooltipItem {
            display_name: series.name.clone(),
            value: format(value),
        },
    ];
    if let Some(highlight) = highlight {
        items.push(TooltipItem {
            display_name: HIGHLIGHTED_TOOLTIP_NAME.to_owned(),
            value: format(highlight),
        });
    }
    items
}

fn legend_title(table: &CategoricalTable, config: &TornadoChartConfig) -> Option<String> {
    if !config.legend.show_title {
        return None;
    }
    config
        .legend
        .title_text
        .clone()
        .or_else(|| table.series_title.clone())
}
