//! Interface boundary for the fetch/poll collaborator.
//!
//! The engine never performs network I/O. Hosts fetch a series payload,
//! parse it through these types, and hand the points to
//! [`crate::api::ViewportEngine::set_series`]. Symbol, timeframe, interval,
//! and chart-type parameters stay opaque strings.

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::PricePoint;
use crate::error::{ViewError, ViewResult};

const RECORD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One OHLC row as served by the quote backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
}

impl HistoricalRecord {
    /// Parses the wire row into a validated sample.
    pub fn to_point(&self) -> ViewResult<PricePoint> {
        let parsed = NaiveDateTime::parse_from_str(&self.date, RECORD_DATE_FORMAT)
            .map_err(|e| {
                ViewError::InvalidData(format!("unparseable record date {:?}: {e}", self.date))
            })?;
        let time = parsed.and_utc().timestamp_millis() as f64 / 1000.0;
        PricePoint::new(time, self.open, self.high, self.low, self.close)
    }
}

/// Series payload served per symbol request.
///
/// Every field except `historical` is metadata the controller passes through
/// to the host UI untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPayload {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub historical: Vec<HistoricalRecord>,
}

impl SeriesPayload {
    /// Converts the historical rows into engine input, preserving order.
    pub fn to_points(&self) -> ViewResult<Vec<PricePoint>> {
        self.historical
            .iter()
            .map(HistoricalRecord::to_point)
            .collect()
    }
}

/// Backend envelope: either a payload or an `{"error": ...}` report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeedResponse {
    Failure { error: String },
    Payload(SeriesPayload),
}

impl FeedResponse {
    pub fn from_json_str(input: &str) -> ViewResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ViewError::InvalidData(format!("failed to parse feed response: {e}")))
    }

    /// Unwraps the payload, mapping a backend failure report to an error.
    pub fn into_payload(self) -> ViewResult<SeriesPayload> {
        match self {
            Self::Payload(payload) => Ok(payload),
            Self::Failure { error } => Err(ViewError::InvalidData(format!(
                "feed reported failure: {error}"
            ))),
        }
    }
}

/// Opaque request descriptor for the quote backend.
///
/// Parameter values are passed through untouched; the controller does not
/// interpret them. Parameters keep insertion order so request paths are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedRequest {
    pub symbol: String,
    #[serde(default)]
    pub params: IndexMap<String, String>,
}

impl FeedRequest {
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            params: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Builds the backend request path, e.g. `/stock/AAPL?timeframe=1mo`.
    #[must_use]
    pub fn request_path(&self) -> String {
        let mut path = format!("/stock/{}", self.symbol);
        for (i, (key, value)) in self.params.iter().enumerate() {
            path.push(if i == 0 { '?' } else { '&' });
            path.push_str(key);
            path.push('=');
            path.push_str(value);
        }
        path
    }
}

/// Deterministic live-poll cadence driven by an explicit millisecond clock.
///
/// Hosts call [`PollSchedule::poll_due`] from their frame/timer loop and
/// re-fetch when it fires; the schedule never performs I/O itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollSchedule {
    pub interval_ms: u64,
    live: bool,
    next_due_ms: Option<u64>,
}

impl PollSchedule {
    pub const DEFAULT_INTERVAL_MS: u64 = 5_000;

    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            live: false,
            next_due_ms: None,
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Starts or stops live polling; enabling schedules the first poll one
    /// interval from `now_ms`.
    pub fn set_live(&mut self, live: bool, now_ms: u64) {
        self.live = live;
        self.next_due_ms = live.then(|| now_ms.saturating_add(self.interval_ms));
    }

    /// Reports whether a poll is due, advancing the deadline when it fires.
    pub fn poll_due(&mut self, now_ms: u64) -> bool {
        if !self.live {
            return false;
        }
        match self.next_due_ms {
            Some(due) if now_ms >= due => {
                self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
                true
            }
            _ => false,
        }
    }
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL_MS)
    }
}
