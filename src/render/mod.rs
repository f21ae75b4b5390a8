pub mod frame;
pub mod null_renderer;

pub use frame::{RenderFrame, ScrollbarThumb};
pub use null_renderer::NullRenderer;

use crate::error::ViewResult;

/// Rendering backend boundary: receives one frame per render cycle.
///
/// The engine decides which slice of data to draw and at what panel height;
/// axis formatting, tooltips, and line-vs-candle drawing belong entirely to
/// the implementor.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame<'_>) -> ViewResult<()>;
}
