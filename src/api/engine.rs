use tracing::debug;

use crate::core::view_window::VisibleRange;
use crate::core::{DerivedPoint, PriceDomain, PricePoint, SurfaceSpan, derive_series};
use crate::error::ViewResult;
use crate::interaction::{DragSession, GestureMode, WheelDebounce};
use crate::render::{RenderFrame, Renderer, ScrollbarThumb};

use super::ViewportEngineConfig;

/// Viewport state shared by every transition: the advisory zoom factor plus
/// the authoritative visible index window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ViewState {
    pub(super) zoom: f64,
    pub(super) range: Option<VisibleRange>,
}

/// Main orchestration facade consumed by host applications.
///
/// `ViewportEngine` owns the derived series, the visible index window, panel
/// height, and the gesture/debounce machinery; the renderer only ever sees
/// the [`RenderFrame`] built from that state.
pub struct ViewportEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) series: Vec<DerivedPoint>,
    pub(super) price_domain: Option<PriceDomain>,
    pub(super) view: ViewState,
    pub(super) panel_height_px: f64,
    pub(super) plot_span: Option<SurfaceSpan>,
    pub(super) track_span: Option<SurfaceSpan>,
    pub(super) wheel: WheelDebounce,
    pub(super) session: DragSession,
    pub(super) config: ViewportEngineConfig,
}

impl<R: Renderer> ViewportEngine<R> {
    /// Creates an engine with an empty series and a validated config.
    pub fn new(renderer: R, config: ViewportEngineConfig) -> ViewResult<Self> {
        let config = config.validate()?;
        let panel_height_px = config.panel_size.fitted_height(config.container_height_px);

        Ok(Self {
            renderer,
            series: Vec::new(),
            price_domain: None,
            view: ViewState {
                zoom: config.wheel_zoom.zoom_min,
                range: None,
            },
            panel_height_px,
            plot_span: None,
            track_span: None,
            wheel: WheelDebounce::default(),
            session: DragSession::Idle,
            config,
        })
    }

    /// Replaces the series and resets the viewport to full extent.
    ///
    /// Any open drag session is closed and any pending debounced zoom is
    /// dropped; panel height is left as-is.
    pub fn set_series(&mut self, points: Vec<PricePoint>) {
        let original_count = points.len();
        self.series = derive_series(points);
        debug!(
            original_count,
            derived_count = self.series.len(),
            "set price series"
        );
        self.price_domain =
            PriceDomain::from_series(&self.series, self.config.domain_padding_ratio);
        self.view = ViewState {
            zoom: self.config.wheel_zoom.zoom_min,
            range: VisibleRange::full(self.series.len()),
        };
        self.wheel.cancel();
        self.session.close();
    }

    /// Updates the measured horizontal extent of the plotting surface.
    ///
    /// Wheel events arriving while this is `None` are ignored.
    pub fn set_plot_span(&mut self, span: Option<SurfaceSpan>) {
        self.plot_span = span;
    }

    /// Updates the measured horizontal extent of the scrollbar track.
    pub fn set_track_span(&mut self, span: Option<SurfaceSpan>) {
        self.track_span = span;
    }

    /// Routes a global pointer-move into the open drag session, if any.
    pub fn drag_pointer_move(&mut self, client_x: f64, client_y: f64) {
        match &self.session {
            DragSession::Scrollbar {
                anchor_client_x,
                anchor_range_start,
                span,
                ..
            } => {
                let (anchor_x, anchor_start, span) = (*anchor_client_x, *anchor_range_start, *span);
                self.scrollbar_drag_move(anchor_x, anchor_start, span, client_x);
            }
            DragSession::Resize {
                anchor_client_y,
                anchor_height_px,
                ..
            } => {
                let (anchor_y, anchor_height) = (*anchor_client_y, *anchor_height_px);
                self.resize_drag_move(anchor_y, anchor_height, client_y);
            }
            DragSession::Idle => {}
        }
    }

    /// Closes the open drag session and releases its pointer capture.
    ///
    /// A release with no open session is a no-op.
    pub fn end_drag(&mut self) {
        self.session.close();
    }

    #[must_use]
    pub fn series(&self) -> &[DerivedPoint] {
        &self.series
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.view.zoom
    }

    #[must_use]
    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.view.range
    }

    #[must_use]
    pub fn panel_height_px(&self) -> f64 {
        self.panel_height_px
    }

    #[must_use]
    pub fn price_domain(&self) -> Option<PriceDomain> {
        self.price_domain
    }

    #[must_use]
    pub fn gesture_mode(&self) -> GestureMode {
        self.session.mode()
    }

    #[must_use]
    pub fn has_pending_zoom(&self) -> bool {
        self.wheel.is_pending()
    }

    #[must_use]
    pub fn config(&self) -> ViewportEngineConfig {
        self.config
    }

    /// Visible slice consumed by rendering; recomputed from current state,
    /// never cached across transitions.
    #[must_use]
    pub fn visible_slice(&self) -> &[DerivedPoint] {
        match self.view.range {
            Some(range) => self.series.get(range.start..=range.end).unwrap_or(&[]),
            None => &[],
        }
    }

    /// Thumb metrics for an optional scrollbar position indicator.
    ///
    /// Present only while zoomed in; fractions are of the full series length.
    #[must_use]
    pub fn scrollbar_thumb(&self) -> Option<ScrollbarThumb> {
        let range = self.view.range?;
        if self.view.zoom <= self.config.wheel_zoom.zoom_min {
            return None;
        }
        let len = self.series.len() as f64;
        Some(ScrollbarThumb {
            left_ratio: range.start as f64 / len,
            width_ratio: range.count() as f64 / len,
        })
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ViewResult<()> {
        let visible: &[DerivedPoint] = match self.view.range {
            Some(range) => self.series.get(range.start..=range.end).unwrap_or(&[]),
            None => &[],
        };
        let thumb = self.scrollbar_thumb();
        let frame = RenderFrame {
            visible,
            price_domain: self.price_domain,
            panel_height_px: self.panel_height_px,
            zoom: self.view.zoom,
            range: self.view.range,
            thumb,
        };
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
