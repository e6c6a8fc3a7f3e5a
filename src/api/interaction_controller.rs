use tracing::trace;

use crate::error::TornadoResult;
use crate::render::Renderer;

use super::TornadoChart;

impl<R: Renderer> TornadoChart<R> {
    /// Pointer press in viewport pixels. Returns `true` when it grabbed the
    /// scrollbar.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.interaction.on_pointer_move(x, y);
        let Some(track) = self.scroll_track else {
            return false;
        };
        if x < track.x || x > track.right() || y < track.y || y > track.bottom() {
            return false;
        }
        let position = self.scroll.scroll_position();
        if !self.scroll.begin_drag(y - track.y) {
            return false;
        }
        self.interaction.on_drag_start();
        if self.scroll.scroll_position() != position {
            self.frame_pending = true;
        }
        true
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.interaction.on_pointer_move(x, y);
        if let Some(track) = self.scroll_track {
            if self.scroll.drag_to(y - track.y) {
                self.frame_pending = true;
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.scroll.end_drag();
        self.interaction.on_drag_end();
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// Applies a wheel event. Positive `delta_y` scrolls toward later
    /// categories.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        let moved = self.scroll.wheel(delta_y);
        if moved {
            self.frame_pending = true;
        }
        moved
    }

    /// Moves the scroll thumb to a normalized position in `[0, 1]`.
    pub fn scroll_to(&mut self, position: f64) -> bool {
        let moved = self.scroll.scroll_to(position);
        if moved {
            self.frame_pending = true;
        }
        moved
    }

    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.frame_pending
    }

    /// Renders once if any input since the last pass requested it.
    ///
    /// Hosts call this from their next-animation-frame callback so bursts of
    /// wheel or drag events collapse into a single pass.
    pub fn flush_frame(&mut self) -> TornadoResult<bool> {
        if !self.frame_pending {
            return Ok(false);
        }
        trace!("flushing pending frame");
        self.render()?;
        Ok(true)
    }
}
