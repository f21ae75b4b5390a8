use serde::{Deserialize, Serialize};
use tracing::trace;

/// Host-side hook releasing a global pointer subscription.
///
/// Drag gestures must keep observing pointer movement after the pointer
/// leaves the originating control, so the host acquires a window-level
/// subscription on press. The engine owns the matching release through
/// [`CaptureGuard`] so it happens exactly once on every exit path, including
/// engine teardown mid-drag.
pub trait PointerCapture {
    fn release(&mut self);
}

/// Scoped wrapper around a host pointer capture.
///
/// Dropping the guard releases the capture; releasing twice is impossible.
pub struct CaptureGuard {
    capture: Option<Box<dyn PointerCapture>>,
}

impl CaptureGuard {
    #[must_use]
    pub fn new(capture: Box<dyn PointerCapture>) -> Self {
        Self {
            capture: Some(capture),
        }
    }

    /// Guard for hosts that manage their pointer subscription themselves.
    #[must_use]
    pub fn untracked() -> Self {
        Self { capture: None }
    }

    fn release(&mut self) {
        if let Some(mut capture) = self.capture.take() {
            capture.release();
            trace!("pointer capture released");
        }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureGuard")
            .field("armed", &self.capture.is_some())
            .finish()
    }
}

/// Which gesture, if any, is currently driving viewport state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureMode {
    Idle,
    ScrollbarPan,
    PanelResize,
}

/// One press-move-release interaction tracked by the engine.
///
/// A session exists only between the press and the matching release; closing
/// or dropping it releases the pointer capture.
#[derive(Debug)]
pub enum DragSession {
    Idle,
    Scrollbar {
        anchor_client_x: f64,
        anchor_range_start: usize,
        /// Window span at press time; fixed for the whole gesture.
        span: usize,
        guard: CaptureGuard,
    },
    Resize {
        anchor_client_y: f64,
        anchor_height_px: f64,
        guard: CaptureGuard,
    },
}

impl DragSession {
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        match self {
            Self::Idle => GestureMode::Idle,
            Self::Scrollbar { .. } => GestureMode::ScrollbarPan,
            Self::Resize { .. } => GestureMode::PanelResize,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Closes the session; the replaced value's guard releases on drop.
    pub fn close(&mut self) {
        *self = Self::Idle;
    }
}

/// Pending cursor-anchored zoom, committed once its deadline passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingWheelZoom {
    pub delta_y: f64,
    pub cursor_fraction: f64,
    pub due_at_ms: u64,
}

/// Trailing-edge debounce for bursty wheel input.
///
/// At most one scheduled commit exists per controller; scheduling again
/// supersedes the previous task, so only the final event in a burst is
/// applied to viewport state.
#[derive(Debug, Default)]
pub struct WheelDebounce {
    pending: Option<PendingWheelZoom>,
}

impl WheelDebounce {
    pub fn schedule(&mut self, delta_y: f64, cursor_fraction: f64, now_ms: u64, debounce_ms: u64) {
        self.pending = Some(PendingWheelZoom {
            delta_y,
            cursor_fraction,
            due_at_ms: now_ms.saturating_add(debounce_ms),
        });
    }

    /// Takes the pending task once its deadline has passed.
    pub fn take_due(&mut self, now_ms: u64) -> Option<PendingWheelZoom> {
        if self.pending.is_some_and(|p| now_ms >= p.due_at_ms) {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
