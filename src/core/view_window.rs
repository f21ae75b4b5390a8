use serde::{Deserialize, Serialize};

/// Inclusive index window into the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    /// Full-extent window, or `None` when the series is empty.
    #[must_use]
    pub fn full(len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Self {
                start: 0,
                end: len - 1,
            })
        }
    }

    /// Number of visible points (`end` is inclusive).
    #[must_use]
    pub fn count(self) -> usize {
        self.end - self.start + 1
    }

    /// Index distance between the window edges; held fixed for a pan gesture.
    #[must_use]
    pub fn span(self) -> usize {
        self.end - self.start
    }
}

/// Intended visible count for a zoom factor, never below one point.
#[must_use]
pub fn zoomed_visible_count(len: usize, zoom: f64) -> usize {
    let intended = (len as f64 / zoom).floor() as usize;
    intended.clamp(1, len.max(1))
}

/// Cursor-anchored zoom window.
///
/// Conventions:
/// - `cursor_fraction` is the pointer position as a fraction of the plot
///   width; it is clamped to `[0, 1]` so the function stays total
/// - `visible_count` must already be within `[1, len]`
/// - the window centers on the sample under the cursor, then clamps to the
///   series bounds
///
/// Anchoring on the cursor keeps the point under the pointer visually
/// stationary while zooming.
#[must_use]
pub fn anchored_window(
    len: usize,
    current: VisibleRange,
    cursor_fraction: f64,
    visible_count: usize,
) -> VisibleRange {
    if len == 0 {
        return VisibleRange { start: 0, end: 0 };
    }
    let fraction = if cursor_fraction.is_finite() {
        cursor_fraction.clamp(0.0, 1.0)
    } else {
        0.5
    };
    let visible_count = visible_count.clamp(1, len.max(1));

    let center = current.start as f64 + fraction * current.span() as f64;
    let max_start = (len - visible_count) as f64;
    let start = (center - visible_count as f64 / 2.0)
        .floor()
        .clamp(0.0, max_start) as usize;
    let end = (start + visible_count).min(len - 1);

    VisibleRange { start, end }
}

/// Pan window with a session-fixed span.
///
/// `move_percent` is the pointer travel as a fraction of the scrollbar track
/// width; the travel maps onto the full series length. The start clamp keeps
/// `end` on the last valid index.
#[must_use]
pub fn panned_window(
    len: usize,
    anchor_start: usize,
    span: usize,
    move_percent: f64,
) -> VisibleRange {
    if len == 0 {
        return VisibleRange { start: 0, end: 0 };
    }
    let span = span.min(len - 1);
    let shift = if move_percent.is_finite() {
        move_percent
    } else {
        0.0
    };

    let target = anchor_start as f64 + shift * len as f64;
    let max_start = ((len - 1) - span) as f64;
    let start = target.round().clamp(0.0, max_start) as usize;

    VisibleRange {
        start,
        end: start + span,
    }
}
