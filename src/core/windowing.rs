use crate::core::{Category, ConvertedView, DataPoint};

/// Resolved contiguous category range `[start, end)` in full-list indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryWindow {
    pub start: usize,
    pub end: usize,
}

impl CategoryWindow {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    #[must_use]
    pub fn full(total: usize) -> Self {
        Self::new(0, total)
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Returns categories whose full-list index falls inside `window`.
#[must_use]
pub fn categories_in_window(categories: &[Category], window: CategoryWindow) -> Vec<Category> {
    categories
        .iter()
        .filter(|category| window.contains(category.index))
        .cloned()
        .collect()
}

/// Returns points whose category index falls inside `window`, keeping order.
#[must_use]
pub fn points_in_window(points: &[DataPoint], window: CategoryWindow) -> Vec<DataPoint> {
    points
        .iter()
        .filter(|point| window.contains(point.category_index))
        .cloned()
        .collect()
}

/// Copies `view` restricted to `window`.
///
/// Scale bounds, series, legend and label metrics stay those of the full view
/// so bar widths do not change while scrolling.
#[must_use]
pub fn view_in_window(view: &ConvertedView, window: CategoryWindow) -> ConvertedView {
    ConvertedView {
        categories: categories_in_window(&view.categories, window),
        data_points: points_in_window(&view.data_points, window),
        highlighted_data_points: points_in_window(&view.highlighted_data_points, window),
        series: view.series.clone(),
        has_highlights: view.has_highlights,
        has_dynamic_series: view.has_dynamic_series,
        legend: view.legend.clone(),
        min_value: view.min_value,
        max_value: view.max_value,
        max_label_width: view.max_label_width,
        max_label_height: view.max_label_height,
        category_display_name: view.category_display_name.clone(),
    }
}
