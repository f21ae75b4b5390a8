use serde::{Deserialize, Serialize};

use crate::core::series::PricePoint;

/// Candlestick reversal patterns recognized by the series transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandlePattern {
    BullishEngulfing,
    BearishEngulfing,
    MorningStar,
    EveningStar,
}

/// One recognized pattern anchored to a series index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternHit {
    pub index: usize,
    pub pattern: CandlePattern,
}

/// Scans a series for reversal patterns.
///
/// A candle reports at most one pattern; engulfing checks win over the
/// simplified star checks.
#[must_use]
pub fn detect_patterns(bars: &[PricePoint]) -> Vec<PatternHit> {
    let mut hits = Vec::new();

    for i in 1..bars.len() {
        let current = bars[i];
        let previous = bars[i - 1];
        let current_body = current.body();

        let previous_red = previous.close < previous.open;
        let previous_green = previous.close > previous.open;
        let current_green = current.close > current.open;
        let current_red = current.close < current.open;

        let pattern = if previous_red
            && current_green
            && current.open < previous.close
            && current.close > previous.open
        {
            Some(CandlePattern::BullishEngulfing)
        } else if previous_green
            && current_red
            && current.open > previous.close
            && current.close < previous.open
        {
            Some(CandlePattern::BearishEngulfing)
        } else if i > 1
            && bars[i - 2].close < bars[i - 2].open
            && previous.body() < current_body * 0.3
            && current_green
        {
            Some(CandlePattern::MorningStar)
        } else if i > 1
            && bars[i - 2].close > bars[i - 2].open
            && previous.body() < current_body * 0.3
            && current_red
        {
            Some(CandlePattern::EveningStar)
        } else {
            None
        };

        if let Some(pattern) = pattern {
            hits.push(PatternHit { index: i, pattern });
        }
    }

    hits
}
