use crate::core::{LegendData, PlotArea, SelectionId, TooltipItem, Viewport};
use crate::layout::LabelData;
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};
use crate::scroll::ScrollbarGeometry;

/// Stable identity of a column across passes, for keyed diffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnKey {
    pub category_index: usize,
    pub series_index: usize,
}

/// Draw command for one visible data point, in viewport pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnGeometry {
    pub key: ColumnKey,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation_degrees: f64,
    pub pivot_x: f64,
    pub pivot_y: f64,
    pub fill: Color,
    pub opacity: f64,
    pub label: Option<ColumnLabel>,
    pub identity: SelectionId,
    pub tooltip: Vec<TooltipItem>,
}

impl ColumnGeometry {
    /// Hit test against the unrotated bounds; 180° about the center maps the
    /// rectangle onto itself.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Data label positioned in viewport pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLabel {
    pub data: LabelData,
    pub x: f64,
    /// Vertical center of the row.
    pub y: f64,
    pub font_size_px: f64,
}

/// One entry of the category gutter.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLabelGeometry {
    pub category_index: usize,
    pub text: String,
    /// Untruncated text for the hover title.
    pub full_text: String,
    pub x: f64,
    pub y: f64,
    pub h_align: TextHAlign,
    pub color: Color,
    pub font_size_px: f64,
}

impl CategoryLabelGeometry {
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.text != self.full_text
    }
}

/// Vertical midline separating the two series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLine {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
}

pub const AXIS_LINE_COLOR: Color = Color::GRAY;
pub const AXIS_LINE_WIDTH: f64 = 1.0;
pub const SCROLLBAR_TRACK_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.05);
pub const SCROLLBAR_THUMB_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.3);

/// Complete geometry of one layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TornadoFrame {
    /// Plot area after margins, legend and scrollbar.
    pub plot: PlotArea,
    pub columns: Vec<ColumnGeometry>,
    pub categories: Vec<CategoryLabelGeometry>,
    pub axis_line: Option<AxisLine>,
    pub scrollbar: Option<ScrollbarGeometry>,
    pub legend: Option<LegendData>,
}

impl TornadoFrame {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.categories.is_empty() && self.axis_line.is_none()
    }

    /// Topmost column under `(x, y)`.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&ColumnGeometry> {
        self.columns.iter().rev().find(|column| column.contains(x, y))
    }

    /// Lowers the geometry into backend primitives.
    #[must_use]
    pub fn to_render_frame(&self, viewport: Viewport) -> RenderFrame {
        let mut frame = RenderFrame::new(viewport);

        for column in &self.columns {
            frame.rects.push(
                RectPrimitive::new(
                    column.x,
                    column.y,
                    column.width,
                    column.height,
                    column.fill.with_opacity(column.opacity),
                )
                .with_rotation(column.rotation_degrees, column.pivot_x, column.pivot_y),
            );
        }

        if let Some(scrollbar) = self.scrollbar {
            for (area, color) in [
                (scrollbar.track, SCROLLBAR_TRACK_COLOR),
                (scrollbar.thumb, SCROLLBAR_THUMB_COLOR),
            ] {
                frame
                    .rects
                    .push(RectPrimitive::new(area.x, area.y, area.width, area.height, color));
            }
        }

        if let Some(axis) = self.axis_line {
            frame.lines.push(LinePrimitive::new(
                axis.x,
                axis.y1,
                axis.x,
                axis.y2,
                AXIS_LINE_WIDTH,
                AXIS_LINE_COLOR,
            ));
        }

        for category in &self.categories {
            let mut text = TextPrimitive::new(
                category.text.clone(),
                category.x,
                category.y,
                category.font_size_px,
                category.color,
                category.h_align,
            );
            if category.is_truncated() {
                text = text.with_title(category.full_text.clone());
            }
            frame.texts.push(text);
        }

        for column in &self.columns {
            if let Some(label) = &column.label {
                frame.texts.push(TextPrimitive::new(
                    label.data.text.clone(),
                    label.x,
                    label.y,
                    label.font_size_px,
                    label.data.color,
                    label.data.h_align,
                ));
            }
        }

        frame
    }
}
