use stockview_rs::core::patterns::{CandlePattern, detect_patterns};
use stockview_rs::core::{PricePoint, derive_series};

fn bar(open: f64, high: f64, low: f64, close: f64) -> PricePoint {
    PricePoint::new(0.0, open, high, low, close).expect("valid test candle")
}

#[test]
fn bullish_engulfing_wraps_the_previous_red_body() {
    let bars = vec![
        bar(10.0, 10.5, 8.5, 9.0),
        bar(8.8, 10.5, 8.5, 10.2),
    ];

    let hits = detect_patterns(&bars);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 1);
    assert_eq!(hits[0].pattern, CandlePattern::BullishEngulfing);
}

#[test]
fn bearish_engulfing_wraps_the_previous_green_body() {
    let bars = vec![
        bar(9.0, 10.5, 8.5, 10.0),
        bar(10.2, 10.5, 8.5, 8.8),
    ];

    let hits = detect_patterns(&bars);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 1);
    assert_eq!(hits[0].pattern, CandlePattern::BearishEngulfing);
}

#[test]
fn morning_star_needs_a_small_middle_body() {
    let bars = vec![
        bar(10.0, 10.2, 8.8, 9.0),
        bar(9.0, 9.2, 8.9, 9.05),
        bar(9.05, 9.8, 9.0, 9.55),
    ];

    let hits = detect_patterns(&bars);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 2);
    assert_eq!(hits[0].pattern, CandlePattern::MorningStar);
}

#[test]
fn evening_star_mirrors_the_morning_star() {
    let bars = vec![
        bar(9.0, 10.2, 8.8, 10.0),
        bar(10.0, 10.1, 9.8, 9.95),
        bar(9.95, 10.0, 9.2, 9.45),
    ];

    let hits = detect_patterns(&bars);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 2);
    assert_eq!(hits[0].pattern, CandlePattern::EveningStar);
}

#[test]
fn a_candle_reports_at_most_one_pattern() {
    // The last candle qualifies as both a bullish engulfing and a morning
    // star; the engulfing check wins.
    let bars = vec![
        bar(10.0, 10.1, 9.8, 9.9),
        bar(9.9, 10.0, 8.9, 9.0),
        bar(8.9, 13.2, 8.5, 13.0),
    ];

    let hits = detect_patterns(&bars);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 2);
    assert_eq!(hits[0].pattern, CandlePattern::BullishEngulfing);
}

#[test]
fn a_flat_series_reports_nothing() {
    let bars = vec![bar(10.0, 10.5, 9.5, 10.0); 6];
    assert!(detect_patterns(&bars).is_empty());
}

#[test]
fn derivation_attaches_hits_to_their_points() {
    let bars = vec![
        bar(10.0, 10.5, 8.5, 9.0),
        bar(8.8, 10.5, 8.5, 10.2),
        bar(10.2, 10.6, 10.0, 10.4),
    ];

    let derived = derive_series(bars);
    assert!(derived[0].patterns.is_empty());
    assert_eq!(derived[1].patterns.len(), 1);
    assert_eq!(derived[1].patterns[0], CandlePattern::BullishEngulfing);
    assert!(derived[2].patterns.is_empty());
}
