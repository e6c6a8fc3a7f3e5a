//! Category virtualization: scrollbar state, thumb drag/wheel handling and
//! the mapping from scroll fractions to a window of whole category rows.

use tracing::{debug, trace};

use crate::api::ScrollSettings;
use crate::core::{CategoryWindow, ConvertedView, PlotArea, view_in_window};

/// Tolerance for snapping `fraction * total` onto an integer before flooring.
const INDEX_EPSILON: f64 = 1e-9;

/// Thumb sizing for an active scrollbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbMetrics {
    /// Drawn thumb length, never below the configured minimum.
    pub length: f64,
    /// `natural / length` when the thumb was enlarged, else `1.0`.
    pub scale_multiplier: f64,
}

/// Visible fraction of the category range plus the resolved index window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWindow {
    pub start_fraction: f64,
    pub end_fraction: f64,
    pub window: CategoryWindow,
}

impl ScrollWindow {
    #[must_use]
    pub fn full(total: usize) -> Self {
        Self {
            start_fraction: 0.0,
            end_fraction: 1.0,
            window: CategoryWindow::full(total),
        }
    }
}

/// Track and thumb rectangles of an active scrollbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarGeometry {
    pub track: PlotArea,
    pub thumb: PlotArea,
}

/// Returns `true` when the categories need more height than the viewport has.
#[must_use]
pub fn is_scroll_active(total: usize, category_min_height: f64, viewport_height: f64) -> bool {
    viewport_height > 0.0
        && category_min_height > 0.0
        && total as f64 * category_min_height > viewport_height
}

/// Computes the thumb length for `content_height` shown in `viewport_height`.
#[must_use]
pub fn thumb_metrics(
    content_height: f64,
    viewport_height: f64,
    min_thumb_length: f64,
) -> ThumbMetrics {
    if content_height <= 0.0 || viewport_height <= 0.0 {
        return ThumbMetrics {
            length: viewport_height.max(0.0),
            scale_multiplier: 1.0,
        };
    }

    let natural = viewport_height * viewport_height / content_height;
    if natural < min_thumb_length {
        let length = min_thumb_length.min(viewport_height);
        ThumbMetrics {
            length,
            scale_multiplier: natural / length,
        }
    } else {
        ThumbMetrics {
            length: natural,
            scale_multiplier: 1.0,
        }
    }
}

fn floor_index(scaled: f64) -> f64 {
    let rounded = scaled.round();
    if (scaled - rounded).abs() <= INDEX_EPSILON {
        rounded
    } else {
        scaled.floor()
    }
}

/// Resolves a fraction pair into whole category indices.
///
/// When floor rounding would yield more rows than fit, one row is dropped:
/// the start advances if its fractional remainder is larger than the end's,
/// otherwise the end retreats.
#[must_use]
pub fn resolve_window(
    start_fraction: f64,
    end_fraction: f64,
    total: usize,
    viewport_height: f64,
    category_min_height: f64,
) -> CategoryWindow {
    if total == 0 {
        return CategoryWindow::full(0);
    }
    let total_f = total as f64;
    let start_fraction = sanitize_fraction(start_fraction);
    let end_fraction = sanitize_fraction(end_fraction).max(start_fraction);

    let start_scaled = start_fraction * total_f;
    let end_scaled = end_fraction * total_f;
    let start_floor = floor_index(start_scaled);
    let end_floor = floor_index(end_scaled);
    let mut start = (start_floor.max(0.0) as usize).min(total);
    let mut end = (end_floor.max(0.0) as usize).clamp(start, total);

    if end_fraction - start_fraction < 1.0 && category_min_height > 0.0 {
        let rows_fit = (viewport_height / category_min_height).floor().max(0.0) as usize;
        if rows_fit < end - start {
            let start_remainder = start_scaled - start_floor;
            let end_remainder = end_scaled - end_floor;
            if start_remainder > end_remainder {
                start += 1;
            } else {
                end -= 1;
            }
        }
    }

    CategoryWindow::new(start, end)
}

fn sanitize_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// Pointer drag state for the thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ThumbDrag {
    /// Pointer offset from the thumb top at grab time.
    grab_offset: f64,
}

/// Owns scrollbar state across render passes.
///
/// The thumb lives in track-local pixels `[top, bottom]` inside
/// `[0, viewport_height]`; the normalized `scroll_position` survives resizes
/// and data updates.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollWindowController {
    settings: ScrollSettings,
    total: usize,
    viewport_height: f64,
    metrics: Option<ThumbMetrics>,
    thumb_top: f64,
    scroll_position: f64,
    drag: Option<ThumbDrag>,
}

impl ScrollWindowController {
    #[must_use]
    pub fn new(settings: ScrollSettings) -> Self {
        Self {
            settings,
            total: 0,
            viewport_height: 0.0,
            metrics: None,
            thumb_top: 0.0,
            scroll_position: 0.0,
            drag: None,
        }
    }

    pub fn set_settings(&mut self, settings: ScrollSettings) {
        self.settings = settings;
        self.relayout();
    }

    #[must_use]
    pub fn settings(&self) -> ScrollSettings {
        self.settings
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.metrics.is_some()
    }

    #[must_use]
    pub fn thumb(&self) -> Option<ThumbMetrics> {
        self.metrics
    }

    /// Normalized thumb position in `[0, 1]`.
    #[must_use]
    pub fn scroll_position(&self) -> f64 {
        self.scroll_position
    }

    /// Thumb `[top, bottom]` in track pixels, when active.
    #[must_use]
    pub fn thumb_pixels(&self) -> Option<(f64, f64)> {
        self.metrics
            .map(|metrics| (self.thumb_top, self.thumb_top + metrics.length))
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Updates content and viewport extents and returns the resulting window.
    pub fn compute_window(&mut self, total: usize, viewport_height: f64) -> ScrollWindow {
        if total != self.total || viewport_height != self.viewport_height {
            trace!(total, viewport_height, "scroll extents changed");
        }
        self.total = total;
        self.viewport_height = viewport_height.max(0.0);
        self.relayout();
        self.current_window()
    }

    /// Window for the current thumb position without changing extents.
    #[must_use]
    pub fn current_window(&self) -> ScrollWindow {
        let Some(metrics) = self.metrics else {
            return ScrollWindow::full(self.total);
        };

        let (start_fraction, end_fraction) = self.fractions(metrics);
        ScrollWindow {
            start_fraction,
            end_fraction,
            window: resolve_window(
                start_fraction,
                end_fraction,
                self.total,
                self.viewport_height,
                self.settings.category_min_height,
            ),
        }
    }

    /// Restricts `view` to the current window and hands the slice to
    /// `on_window_ready`.
    pub fn render_window<T, F>(&self, view: &ConvertedView, on_window_ready: F) -> T
    where
        F: FnOnce(ConvertedView, ScrollWindow) -> T,
    {
        let window = self.current_window();
        let windowed = if window.window == CategoryWindow::full(view.categories.len()) {
            view.clone()
        } else {
            view_in_window(view, window.window)
        };
        on_window_ready(windowed, window)
    }

    /// Moves the thumb so that `scroll_position` becomes `position`.
    pub fn scroll_to(&mut self, position: f64) -> bool {
        let Some(metrics) = self.metrics else {
            return false;
        };
        let travel = (self.viewport_height - metrics.length).max(0.0);
        self.set_thumb_top(sanitize_fraction(position) * travel)
    }

    /// Applies one wheel event: half a thumb length per tick, in the delta's
    /// direction (positive scrolls toward later categories).
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        let Some(metrics) = self.metrics else {
            return false;
        };
        if delta_y == 0.0 || !delta_y.is_finite() {
            return false;
        }
        let step = metrics.length / 2.0 * delta_y.signum();
        self.set_thumb_top(self.thumb_top + step)
    }

    /// Starts a thumb drag at track-local `y`.
    ///
    /// Pressing the track outside the thumb first centers the thumb on the
    /// press point. Returns `false` when the scrollbar is inactive or `y` is
    /// outside the track.
    pub fn begin_drag(&mut self, y: f64) -> bool {
        let Some(metrics) = self.metrics else {
            return false;
        };
        if !(0.0..=self.viewport_height).contains(&y) {
            return false;
        }

        let bottom = self.thumb_top + metrics.length;
        if y < self.thumb_top || y > bottom {
            self.set_thumb_top(y - metrics.length / 2.0);
        }
        self.drag = Some(ThumbDrag {
            grab_offset: y - self.thumb_top,
        });
        debug!(y, thumb_top = self.thumb_top, "begin scrollbar drag");
        true
    }

    /// Moves an active drag to track-local `y`.
    pub fn drag_to(&mut self, y: f64) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        if !y.is_finite() {
            return false;
        }
        self.set_thumb_top(y - drag.grab_offset)
    }

    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            debug!(scroll_position = self.scroll_position, "end scrollbar drag");
        }
    }

    /// Track and thumb rectangles when the track occupies `track`.
    #[must_use]
    pub fn geometry(&self, track: PlotArea) -> Option<ScrollbarGeometry> {
        let metrics = self.metrics?;
        Some(ScrollbarGeometry {
            track,
            thumb: PlotArea::new(track.x, track.y + self.thumb_top, track.width, metrics.length),
        })
    }

    fn relayout(&mut self) {
        let content_height = self.total as f64 * self.settings.category_min_height;
        if !is_scroll_active(
            self.total,
            self.settings.category_min_height,
            self.viewport_height,
        ) {
            if self.metrics.take().is_some() {
                debug!("scrolling deactivated");
            }
            self.thumb_top = 0.0;
            self.drag = None;
            return;
        }

        let metrics = thumb_metrics(
            content_height,
            self.viewport_height,
            self.settings.min_thumb_length,
        );
        if self.metrics.is_none() {
            debug!(
                thumb_length = metrics.length,
                scale_multiplier = metrics.scale_multiplier,
                "scrolling activated"
            );
        }
        self.metrics = Some(metrics);
        let travel = (self.viewport_height - metrics.length).max(0.0);
        self.thumb_top = self.scroll_position * travel;
    }

    /// Clamps by shifting the whole thumb, so its length never changes.
    fn set_thumb_top(&mut self, top: f64) -> bool {
        let Some(metrics) = self.metrics else {
            return false;
        };
        let travel = (self.viewport_height - metrics.length).max(0.0);
        let top = if top.is_nan() { 0.0 } else { top.clamp(0.0, travel) };
        let changed = top != self.thumb_top;
        self.thumb_top = top;
        self.scroll_position = if travel > 0.0 { top / travel } else { 0.0 };
        if changed {
            trace!(
                thumb_top = top,
                scroll_position = self.scroll_position,
                "thumb moved"
            );
        }
        changed
    }

    fn fractions(&self, metrics: ThumbMetrics) -> (f64, f64) {
        let viewport_height = self.viewport_height;
        if viewport_height <= 0.0 {
            return (0.0, 1.0);
        }
        let effective_length = metrics.length * metrics.scale_multiplier;
        let start_px = self.scroll_position * (viewport_height - effective_length);
        let end_px = start_px + effective_length;
        (
            sanitize_fraction(start_px / viewport_height),
            sanitize_fraction(end_px / viewport_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_when_content_fits() {
        assert!(!is_scroll_active(6, 25.0, 480.0));
        assert!(!is_scroll_active(20, 25.0, 500.0));
        assert!(is_scroll_active(21, 25.0, 500.0));
        assert!(!is_scroll_active(21, 25.0, 0.0));
    }

    #[test]
    fn thumb_is_floored_with_scale_multiplier() {
        let metrics = thumb_metrics(25_000.0, 250.0, 15.0);
        assert_eq!(metrics.length, 15.0);
        assert!((metrics.scale_multiplier - 2.5 / 15.0).abs() <= 1e-12);

        let natural = thumb_metrics(1_250.0, 250.0, 15.0);
        assert_eq!(natural.length, 50.0);
        assert_eq!(natural.scale_multiplier, 1.0);
    }

    #[test]
    fn rounding_correction_prefers_larger_start_remainder() {
        // 10.5 rows worth of fractions across 100 categories with room for 10.
        let window = resolve_window(0.127, 0.232, 100, 250.0, 25.0);
        // floor(12.7)=12, floor(23.2)=23 -> 11 rows; start remainder 0.7 > 0.2.
        assert_eq!(window, CategoryWindow::new(13, 23));

        let window = resolve_window(0.121, 0.228, 100, 250.0, 25.0);
        // floor(12.1)=12, floor(22.8)=22 -> 10 rows, fits.
        assert_eq!(window, CategoryWindow::new(12, 22));

        let window = resolve_window(0.121, 0.238, 100, 250.0, 25.0);
        // 12..23 is 11 rows; start remainder 0.1 < end remainder 0.8.
        assert_eq!(window, CategoryWindow::new(12, 22));
    }

    #[test]
    fn wheel_moves_half_a_thumb_and_clamps() {
        let mut controller = ScrollWindowController::new(ScrollSettings::default());
        controller.compute_window(50, 250.0);
        assert_eq!(controller.thumb_pixels(), Some((0.0, 50.0)));

        assert!(controller.wheel(120.0));
        assert_eq!(controller.thumb_pixels(), Some((25.0, 75.0)));

        assert!(controller.wheel(-3.0));
        assert!(!controller.wheel(-3.0), "already at the top");
        assert_eq!(controller.thumb_pixels(), Some((0.0, 50.0)));

        for _ in 0..20 {
            controller.wheel(1.0);
        }
        assert_eq!(controller.thumb_pixels(), Some((200.0, 250.0)));
        assert_eq!(controller.scroll_position(), 1.0);
    }

    #[test]
    fn track_press_centers_thumb_then_drags() {
        let mut controller = ScrollWindowController::new(ScrollSettings::default());
        controller.compute_window(50, 250.0);

        assert!(controller.begin_drag(125.0));
        assert_eq!(controller.thumb_pixels(), Some((100.0, 150.0)));
        assert!(controller.drag_to(135.0));
        assert_eq!(controller.thumb_pixels(), Some((110.0, 160.0)));
        controller.end_drag();
        assert!(!controller.drag_to(10.0));
    }

    #[test]
    fn scroll_position_survives_resize() {
        let mut controller = ScrollWindowController::new(ScrollSettings::default());
        controller.compute_window(50, 250.0);
        controller.scroll_to(0.5);
        let window = controller.compute_window(50, 500.0);
        assert_eq!(controller.scroll_position(), 0.5);
        assert_eq!(window.window.len(), 20);
    }
}
