use tracing::trace;

use crate::core::view_window;
use crate::interaction::{CaptureGuard, DragSession};
use crate::render::Renderer;

use super::ViewportEngine;

impl<R: Renderer> ViewportEngine<R> {
    /// Opens a scrollbar-thumb drag session.
    ///
    /// The session pins the press coordinate, the range start at press time,
    /// and the window span, which stays fixed for the whole gesture. Any
    /// session already open is closed first; the two drag controls are
    /// mutually exclusive. With an empty series the press is a no-op and the
    /// capture releases immediately.
    pub fn begin_scrollbar_drag(&mut self, client_x: f64, capture: CaptureGuard) {
        let Some(range) = self.view.range else {
            return;
        };
        if !client_x.is_finite() {
            return;
        }

        self.session.close();
        self.session = DragSession::Scrollbar {
            anchor_client_x: client_x,
            anchor_range_start: range.start,
            span: range.span(),
            guard: capture,
        };
        trace!(
            anchor = client_x,
            start = range.start,
            "scrollbar drag opened"
        );
    }

    /// Applies one scrollbar pointer-move: travel over the track maps onto
    /// the full series length, shifted from the anchored range start.
    ///
    /// Zoom stays untouched; after a pan the range is the source of truth
    /// and the zoom factor is advisory.
    pub(super) fn scrollbar_drag_move(
        &mut self,
        anchor_client_x: f64,
        anchor_range_start: usize,
        span: usize,
        client_x: f64,
    ) {
        let Some(track_span) = self.track_span else {
            return;
        };
        if !client_x.is_finite() {
            return;
        }
        let len = self.series.len();
        if len == 0 {
            return;
        }

        let move_percent = (client_x - anchor_client_x) / track_span.width_px;
        let range = view_window::panned_window(len, anchor_range_start, span, move_percent);
        self.view.range = Some(range);
    }
}
