use crate::error::ViewResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch inconsistent viewport
/// state before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_visible_count: usize,
    pub last_panel_height_px: f64,
    pub render_calls: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame<'_>) -> ViewResult<()> {
        frame.validate()?;
        self.last_visible_count = frame.visible.len();
        self.last_panel_height_px = frame.panel_height_px;
        self.render_calls += 1;
        Ok(())
    }
}
