use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult};

/// Horizontal extent of a measured control, in client-space pixels.
///
/// The host reports these after layout; gesture handlers that need a
/// measurement treat an unset span as "not measured yet" and ignore the
/// event rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpan {
    pub left_px: f64,
    pub width_px: f64,
}

impl SurfaceSpan {
    pub fn new(left_px: f64, width_px: f64) -> ViewResult<Self> {
        if !left_px.is_finite() || !width_px.is_finite() || width_px <= 0.0 {
            return Err(ViewError::InvalidGeometry {
                left: left_px,
                width: width_px,
            });
        }
        Ok(Self { left_px, width_px })
    }

    /// Pointer position as a clamped fraction of this span's width.
    #[must_use]
    pub fn fraction_of(self, client_x: f64) -> f64 {
        if !client_x.is_finite() {
            return 0.5;
        }
        ((client_x - self.left_px) / self.width_px).clamp(0.0, 1.0)
    }
}
