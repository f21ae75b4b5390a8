use tracing::{debug, trace};

use crate::core::view_window::{self, VisibleRange};
use crate::render::Renderer;

use super::ViewportEngine;
use super::engine::ViewState;

impl<R: Renderer> ViewportEngine<R> {
    /// Records a wheel event over the plotting surface.
    ///
    /// Conventions:
    /// - `delta_y > 0` zooms out, otherwise zooms in
    /// - the cursor fraction is measured against the plot span; events that
    ///   arrive before the surface has been measured are ignored
    /// - bursts are coalesced: only the last event inside the debounce
    ///   window is committed, by [`ViewportEngine::tick`]
    pub fn on_wheel(&mut self, delta_y: f64, pointer_client_x: f64, now_ms: u64) {
        let Some(plot_span) = self.plot_span else {
            trace!("wheel event ignored: plot surface not measured");
            return;
        };
        if !delta_y.is_finite() {
            trace!("wheel event ignored: non-finite delta");
            return;
        }

        let cursor_fraction = plot_span.fraction_of(pointer_client_x);
        self.wheel.schedule(
            delta_y,
            cursor_fraction,
            now_ms,
            self.config.wheel_zoom.debounce_ms,
        );
    }

    /// Advances the debounce clock, committing a due zoom.
    ///
    /// Returns `true` when a pending zoom was committed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(pending) = self.wheel.take_due(now_ms) else {
            return false;
        };
        self.commit_wheel_zoom(pending.delta_y, pending.cursor_fraction)
    }

    fn commit_wheel_zoom(&mut self, delta_y: f64, cursor_fraction: f64) -> bool {
        let len = self.series.len();
        let Some(current) = self.view.range else {
            return false;
        };

        let tuning = self.config.wheel_zoom;
        let step = if delta_y > 0.0 {
            tuning.zoom_out_factor
        } else {
            tuning.zoom_in_factor
        };
        let new_zoom = (self.view.zoom * step).clamp(tuning.zoom_min, tuning.zoom_max);

        if new_zoom <= tuning.zoom_min {
            self.view = ViewState {
                zoom: tuning.zoom_min,
                range: VisibleRange::full(len),
            };
            debug!(zoom = tuning.zoom_min, "wheel zoom reset to full extent");
            return true;
        }

        let visible_count = view_window::zoomed_visible_count(len, new_zoom);
        let range = view_window::anchored_window(len, current, cursor_fraction, visible_count);
        trace!(
            zoom = new_zoom,
            start = range.start,
            end = range.end,
            "wheel zoom committed"
        );
        self.view = ViewState {
            zoom: new_zoom,
            range: Some(range),
        };
        true
    }
}
