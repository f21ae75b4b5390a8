use tracing::trace;

use crate::interaction::{CaptureGuard, DragSession};
use crate::render::Renderer;

use super::ViewportEngine;

impl<R: Renderer> ViewportEngine<R> {
    /// Opens a panel-resize drag session anchored at the press coordinate
    /// and the current panel height.
    pub fn begin_resize_drag(&mut self, client_y: f64, capture: CaptureGuard) {
        if !client_y.is_finite() {
            return;
        }

        self.session.close();
        self.session = DragSession::Resize {
            anchor_client_y: client_y,
            anchor_height_px: self.panel_height_px,
            guard: capture,
        };
        trace!(
            anchor = client_y,
            height = self.panel_height_px,
            "resize drag opened"
        );
    }

    /// Applies one resize pointer-move immediately; resizing must feel
    /// continuous, so this path has no debounce.
    pub(super) fn resize_drag_move(
        &mut self,
        anchor_client_y: f64,
        anchor_height_px: f64,
        client_y: f64,
    ) {
        if !client_y.is_finite() {
            return;
        }
        let sizing = self.config.panel_size;
        self.panel_height_px = (anchor_height_px + (client_y - anchor_client_y))
            .clamp(sizing.min_height_px, sizing.max_height_px);
    }

    /// Reacts to a containing-viewport height change.
    ///
    /// This is a passive subscription, not a gesture: the fitted height
    /// overwrites any manual resize.
    pub fn on_container_resize(&mut self, container_height_px: f64) {
        if !container_height_px.is_finite() {
            return;
        }
        self.panel_height_px = self.config.panel_size.fitted_height(container_height_px);
    }
}
