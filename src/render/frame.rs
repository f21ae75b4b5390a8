use crate::core::{DerivedPoint, PriceDomain, VisibleRange};
use crate::error::{ViewError, ViewResult};

/// Scrollbar thumb metrics expressed as fractions of the track width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarThumb {
    pub left_ratio: f64,
    pub width_ratio: f64,
}

/// Backend-agnostic snapshot handed to the rendering collaborator each cycle.
///
/// An empty frame (`range == None`) means "nothing to draw", not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame<'a> {
    pub visible: &'a [DerivedPoint],
    pub price_domain: Option<PriceDomain>,
    pub panel_height_px: f64,
    pub zoom: f64,
    pub range: Option<VisibleRange>,
    pub thumb: Option<ScrollbarThumb>,
}

impl RenderFrame<'_> {
    pub fn validate(&self) -> ViewResult<()> {
        match self.range {
            Some(range) => {
                if range.start > range.end || range.count() != self.visible.len() {
                    return Err(ViewError::InvalidData(
                        "render frame slice does not match its visible range".to_owned(),
                    ));
                }
                let Some(domain) = self.price_domain else {
                    return Err(ViewError::InvalidData(
                        "render frame with data requires a price domain".to_owned(),
                    ));
                };
                if !domain.min.is_finite() || !domain.max.is_finite() || domain.min > domain.max {
                    return Err(ViewError::InvalidData(
                        "render frame price domain must be finite and ordered".to_owned(),
                    ));
                }
            }
            None => {
                if !self.visible.is_empty() {
                    return Err(ViewError::InvalidData(
                        "render frame without a range must carry an empty slice".to_owned(),
                    ));
                }
            }
        }

        if !self.panel_height_px.is_finite() || self.panel_height_px <= 0.0 {
            return Err(ViewError::InvalidData(
                "render frame panel height must be finite and > 0".to_owned(),
            ));
        }

        if let Some(thumb) = self.thumb {
            let in_unit = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
            if !in_unit(thumb.left_ratio) || !in_unit(thumb.width_ratio) {
                return Err(ViewError::InvalidData(
                    "render frame thumb ratios must be within [0, 1]".to_owned(),
                ));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
