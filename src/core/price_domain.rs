use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::series::DerivedPoint;

/// Vertical axis bounds for the whole series, padding included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceDomain {
    pub min: f64,
    pub max: f64,
}

impl PriceDomain {
    /// Fits bounds from the entire series' low/high extremes with symmetric
    /// padding proportional to the price spread.
    ///
    /// Returns `None` for an empty series; callers must not render an axis in
    /// that case. The domain intentionally tracks the full series rather than
    /// the visible slice so the axis stays stable across zoom levels.
    #[must_use]
    pub fn from_series(points: &[DerivedPoint], padding_ratio: f64) -> Option<Self> {
        let min_low = points
            .iter()
            .map(|p| OrderedFloat(p.point.low))
            .min()?
            .into_inner();
        let max_high = points
            .iter()
            .map(|p| OrderedFloat(p.point.high))
            .max()?
            .into_inner();

        let padding = (max_high - min_low) * padding_ratio;
        Some(Self {
            min: min_low - padding,
            max: max_high + padding,
        })
    }

    #[must_use]
    pub fn spread(self) -> f64 {
        self.max - self.min
    }
}
