use std::cell::Cell;
use std::rc::Rc;

use stockview_rs::api::{ViewportEngine, ViewportEngineConfig};
use stockview_rs::core::{PricePoint, SurfaceSpan, VisibleRange};
use stockview_rs::interaction::{CaptureGuard, GestureMode, PointerCapture};
use stockview_rs::render::NullRenderer;

fn sample_points(n: usize) -> Vec<PricePoint> {
    (0..n)
        .map(|i| {
            let base = 100.0 + i as f64 * 0.25;
            let open = base;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            let low = open.min(close) - 0.5;
            let high = open.max(close) + 0.5;
            PricePoint::new(i as f64 * 60.0, open, high, low, close)
                .expect("valid generated point")
        })
        .collect()
}

fn zoomed_engine(n: usize) -> ViewportEngine<NullRenderer> {
    let config = ViewportEngineConfig::new(900.0);
    let mut engine = ViewportEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_series(sample_points(n));
    engine.set_plot_span(Some(SurfaceSpan::new(0.0, 1000.0).expect("plot span")));
    engine.set_track_span(Some(SurfaceSpan::new(0.0, 500.0).expect("track span")));

    // Zoom in twice around the center so the window can travel both ways.
    for i in 0..2u64 {
        let now = i * 100;
        engine.on_wheel(-1.0, 500.0, now);
        assert!(engine.tick(now + 50));
    }
    assert!(engine.zoom() > 1.0);
    engine
}

struct CountingCapture {
    releases: Rc<Cell<usize>>,
}

impl PointerCapture for CountingCapture {
    fn release(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

fn counting_guard() -> (CaptureGuard, Rc<Cell<usize>>) {
    let releases = Rc::new(Cell::new(0));
    let guard = CaptureGuard::new(Box::new(CountingCapture {
        releases: Rc::clone(&releases),
    }));
    (guard, releases)
}

#[test]
fn drag_moves_shift_start_by_track_travel() {
    let mut engine = zoomed_engine(100);
    let before = engine.visible_range().expect("zoomed range");

    engine.begin_scrollbar_drag(100.0, CaptureGuard::untracked());
    assert_eq!(engine.gesture_mode(), GestureMode::ScrollbarPan);

    // 20px over a 500px track is 4% of the series: four indexes.
    engine.drag_pointer_move(120.0, 0.0);
    let after = engine.visible_range().expect("zoomed range");
    assert_eq!(after.start, before.start + 4);
    assert_eq!(after.span(), before.span());
}

#[test]
fn span_is_preserved_across_the_whole_gesture() {
    let mut engine = zoomed_engine(100);
    let before = engine.visible_range().expect("zoomed range");

    engine.begin_scrollbar_drag(100.0, CaptureGuard::untracked());
    for client_x in [120.0, 40.0, 600.0, -300.0, 275.0] {
        engine.drag_pointer_move(client_x, 0.0);
        let range = engine.visible_range().expect("zoomed range");
        assert_eq!(range.span(), before.span());
        assert!(range.end < 100);
    }
}

#[test]
fn drag_clamps_at_both_edges() {
    let mut engine = zoomed_engine(100);
    let span = engine.visible_range().expect("zoomed range").span();

    engine.begin_scrollbar_drag(100.0, CaptureGuard::untracked());

    engine.drag_pointer_move(-10_000.0, 0.0);
    assert_eq!(
        engine.visible_range(),
        Some(VisibleRange {
            start: 0,
            end: span
        })
    );

    engine.drag_pointer_move(10_000.0, 0.0);
    assert_eq!(
        engine.visible_range(),
        Some(VisibleRange {
            start: 99 - span,
            end: 99
        })
    );
}

#[test]
fn panning_leaves_zoom_untouched() {
    let mut engine = zoomed_engine(100);
    let zoom_before = engine.zoom();

    engine.begin_scrollbar_drag(100.0, CaptureGuard::untracked());
    engine.drag_pointer_move(180.0, 0.0);
    engine.end_drag();

    assert_eq!(engine.zoom(), zoom_before);
}

#[test]
fn release_stops_the_gesture_even_outside_the_control() {
    let mut engine = zoomed_engine(100);

    engine.begin_scrollbar_drag(100.0, CaptureGuard::untracked());
    // Pointer wanders far outside the scrollbar before the release arrives.
    engine.drag_pointer_move(2_000.0, -500.0);
    engine.end_drag();

    let after_release = engine.visible_range();
    engine.drag_pointer_move(300.0, 0.0);
    assert_eq!(engine.visible_range(), after_release);
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
}

#[test]
fn stale_release_is_a_no_op() {
    let mut engine = zoomed_engine(100);
    let before = engine.visible_range();

    engine.end_drag();
    assert_eq!(engine.visible_range(), before);
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
}

#[test]
fn capture_releases_exactly_once_on_end_drag() {
    let mut engine = zoomed_engine(100);
    let (guard, releases) = counting_guard();

    engine.begin_scrollbar_drag(100.0, guard);
    assert_eq!(releases.get(), 0);

    engine.end_drag();
    assert_eq!(releases.get(), 1);

    engine.end_drag();
    engine.drag_pointer_move(300.0, 0.0);
    assert_eq!(releases.get(), 1);
}

#[test]
fn capture_releases_on_engine_teardown_mid_drag() {
    let mut engine = zoomed_engine(100);
    let (guard, releases) = counting_guard();

    engine.begin_scrollbar_drag(100.0, guard);
    drop(engine);

    assert_eq!(releases.get(), 1);
}

#[test]
fn starting_a_new_session_releases_the_previous_capture() {
    let mut engine = zoomed_engine(100);
    let (scrollbar_guard, scrollbar_releases) = counting_guard();
    let (resize_guard, resize_releases) = counting_guard();

    engine.begin_scrollbar_drag(100.0, scrollbar_guard);
    engine.begin_resize_drag(10.0, resize_guard);

    assert_eq!(scrollbar_releases.get(), 1);
    assert_eq!(resize_releases.get(), 0);
    assert_eq!(engine.gesture_mode(), GestureMode::PanelResize);
}

#[test]
fn press_on_an_empty_series_releases_capture_immediately() {
    let config = ViewportEngineConfig::new(900.0);
    let mut engine = ViewportEngine::new(NullRenderer::default(), config).expect("engine init");
    let (guard, releases) = counting_guard();

    engine.begin_scrollbar_drag(100.0, guard);

    assert_eq!(releases.get(), 1);
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
}

#[test]
fn moves_without_a_measured_track_are_ignored() {
    let mut engine = zoomed_engine(100);
    engine.set_track_span(None);
    let before = engine.visible_range();

    engine.begin_scrollbar_drag(100.0, CaptureGuard::untracked());
    engine.drag_pointer_move(400.0, 0.0);

    assert_eq!(engine.visible_range(), before);
}

#[test]
fn replacing_the_series_closes_an_open_session() {
    let mut engine = zoomed_engine(100);
    let (guard, releases) = counting_guard();

    engine.begin_scrollbar_drag(100.0, guard);
    engine.set_series(sample_points(40));

    assert_eq!(releases.get(), 1);
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
}
