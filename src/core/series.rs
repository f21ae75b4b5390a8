use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[cfg(feature = "parallel-transform")]
use rayon::prelude::*;

use crate::core::patterns::{self, CandlePattern};
use crate::error::{ViewError, ViewResult};

/// Canonical OHLC sample for one slot of the price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PricePoint {
    /// Builds a validated sample from raw floating values.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(time: f64, open: f64, high: f64, low: f64, close: f64) -> ViewResult<Self> {
        if !time.is_finite()
            || !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
        {
            return Err(ViewError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(ViewError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(ViewError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            time,
            open,
            high,
            low,
            close,
        })
    }

    /// Converts strongly-typed temporal/decimal input into a validated sample.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ViewResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    /// Absolute open-to-close body size.
    #[must_use]
    pub fn body(self) -> f64 {
        (self.close - self.open).abs()
    }
}

/// Up/down classification driving per-point display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// `Up` only on a strict close-above-open candle.
    #[must_use]
    pub fn of(point: PricePoint) -> Self {
        if point.close > point.open {
            Self::Up
        } else {
            Self::Down
        }
    }
}

/// `PricePoint` plus render-oriented derivations, 1:1 with the series by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedPoint {
    pub point: PricePoint,
    /// Scalar consumed by line rendering; mirrors the closing price.
    pub value: f64,
    pub trend: Trend,
    #[serde(default)]
    pub patterns: SmallVec<[CandlePattern; 2]>,
}

/// Normalizes a raw series into derived points, preserving order and length.
///
/// Pure and deterministic; an empty input yields an empty output so every
/// downstream computation tolerates `N = 0`.
#[must_use]
pub fn derive_series(points: Vec<PricePoint>) -> Vec<DerivedPoint> {
    let hits = patterns::detect_patterns(&points);

    #[cfg(feature = "parallel-transform")]
    let mut derived: Vec<DerivedPoint> = points.par_iter().map(|p| derive_single(*p)).collect();

    #[cfg(not(feature = "parallel-transform"))]
    let mut derived: Vec<DerivedPoint> = points.iter().map(|p| derive_single(*p)).collect();

    for hit in hits {
        derived[hit.index].patterns.push(hit.pattern);
    }
    derived
}

fn derive_single(point: PricePoint) -> DerivedPoint {
    DerivedPoint {
        point,
        value: point.close,
        trend: Trend::of(point),
        patterns: SmallVec::new(),
    }
}

pub(crate) fn decimal_to_f64(value: Decimal, field_name: &str) -> ViewResult<f64> {
    value.to_f64().ok_or_else(|| {
        ViewError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub(crate) fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}
