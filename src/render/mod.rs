mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::TornadoResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame`. Each
/// pass carries the complete scene; retained-mode backends diff it themselves.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> TornadoResult<()>;
}
