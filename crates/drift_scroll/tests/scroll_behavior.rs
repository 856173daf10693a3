//! End-to-end scroll behavior: gesture sessions, physics hand-offs,
//! delegate ordering, and timer lifecycle, driven frame by frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use drift_animation::FrameTimer;
use drift_core::{Point, Size};
use drift_scroll::{
    Axis, IndicatorVisibility, ScrollView, ScrollViewDelegate, SharedDelegate,
};

/// Records every delegate callback in arrival order.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl ScrollViewDelegate for Recorder {
    fn did_scroll(&mut self, _offset: Point) {
        self.events.push("didScroll".into());
    }
    fn will_begin_dragging(&mut self) {
        self.events.push("willBeginDragging".into());
    }
    fn did_end_dragging(&mut self) {
        self.events.push("didEndDragging".into());
    }
    fn will_show_scroll_indicator(&mut self, axis: Axis) {
        self.events.push(format!("willShow:{axis:?}"));
    }
    fn did_show_scroll_indicator(&mut self, axis: Axis) {
        self.events.push(format!("didShow:{axis:?}"));
    }
    fn will_hide_scroll_indicator(&mut self, axis: Axis) {
        self.events.push(format!("willHide:{axis:?}"));
    }
    fn did_hide_scroll_indicator(&mut self, axis: Axis) {
        self.events.push(format!("didHide:{axis:?}"));
    }
}

fn recorder() -> (Rc<RefCell<Recorder>>, SharedDelegate) {
    let recorder = Rc::new(RefCell::new(Recorder::default()));
    let shared: SharedDelegate = recorder.clone();
    (recorder, shared)
}

fn count(recorder: &Rc<RefCell<Recorder>>, event: &str) -> usize {
    recorder
        .borrow()
        .events
        .iter()
        .filter(|e| e.as_str() == event)
        .count()
}

/// Frame timer reporting its running state through a shared flag.
struct FlagTimer(Rc<Cell<bool>>);

impl FrameTimer for FlagTimer {
    fn start(&mut self) {
        self.0.set(true);
    }
    fn stop(&mut self) {
        self.0.set(false);
    }
}

/// contentSize (100,1000), bounds (100,300), inset zero.
fn tall_view() -> ScrollView {
    let mut view = ScrollView::new(Size::new(100.0, 300.0));
    view.set_content_size(Size::new(100.0, 1000.0));
    view
}

#[test]
fn test_max_offset_scenario() {
    let view = tall_view();
    assert_eq!(view.min_offset(), Point::ZERO);
    assert_eq!(view.max_offset().y, 700.0);
}

#[test]
fn test_pull_release_bounce_settles_exactly_on_bound() {
    let mut view = tall_view();

    view.begin_drag();
    view.drag_by(0.0, 750.0, 0.01);

    // Displayed offset is resisted: strictly between the bound and the
    // raw pointer position
    let displayed = view.unrounded_content_offset().y;
    assert!(displayed > 700.0 && displayed < 750.0, "displayed = {displayed}");
    assert!((view.pull_offset().y - (displayed - 700.0)).abs() < 1e-4);

    view.end_drag(0.02);
    assert!(view.decelerating());
    assert!(!view.dragging());

    let mut frames = 0;
    while view.decelerating() {
        view.on_tick();
        frames += 1;
        assert!(frames < 1200, "bounce must settle");
    }
    assert_eq!(view.unrounded_content_offset().y, 700.0);
    assert!(!view.decelerating());
    assert_eq!(view.bounce_offset(), Point::ZERO);
}

#[test]
fn test_throw_decays_exponentially_per_frame() {
    // Very tall content so the throw never reaches a bound
    let mut view = ScrollView::new(Size::new(100.0, 300.0));
    view.set_content_size(Size::new(100.0, 1.0e5));

    view.begin_drag();
    // 20 px every 10 ms -> 2000 px/s
    for i in 0..8 {
        view.drag_by(0.0, 20.0, i as f64 * 0.01);
    }
    view.end_drag(0.07);
    assert!(view.decelerating());

    let rate = view.deceleration_rate();
    let per_frame = rate.powf(1.0 / 60.0);
    let stop_speed = view.config().stop_speed;

    let mut prev = view.unrounded_content_offset().y;
    let mut prev_delta = None::<f32>;
    let mut frames = 0;
    while view.decelerating() {
        view.on_tick();
        frames += 1;
        assert!(frames < 3600, "throw must terminate");

        let y = view.unrounded_content_offset().y;
        let delta = y - prev;
        prev = y;
        if let Some(prev_delta) = prev_delta {
            // offset advances by v/60 with v *= rate^(1/60) each frame
            let ratio = delta / prev_delta;
            assert!(
                (ratio - per_frame).abs() < 1.0e-3,
                "frame {frames}: ratio {ratio} vs {per_frame}"
            );
        }
        if view.decelerating() {
            prev_delta = Some(delta);
        }
    }

    // First frame's step reflects the 2000 px/s release velocity
    assert!(frames > 60, "a 2000 px/s flick coasts for over a second");
    // Terminates once speed falls under the epsilon
    let final_speed = prev_delta.unwrap_or(0.0) * 60.0;
    assert!(final_speed.abs() >= stop_speed * per_frame * 0.5);
}

#[test]
fn test_fast_throw_into_edge_bounces_past_bound() {
    let mut view = tall_view();
    view.set_content_offset(Point::new(0.0, 650.0), false);

    view.begin_drag();
    for i in 0..8 {
        view.drag_by(0.0, 4.0, i as f64 * 0.01);
    }
    view.end_drag(0.07);
    assert!(view.decelerating());

    // The throw crosses 700 and the residual momentum carries the
    // offset out of bounds before the spring pulls it home
    let mut peak = 0.0f32;
    let mut frames = 0;
    while view.decelerating() {
        view.on_tick();
        peak = peak.max(view.unrounded_content_offset().y);
        frames += 1;
        assert!(frames < 1200);
    }
    assert!(peak > 700.0, "bounce should overshoot the bound, peak = {peak}");
    assert_eq!(view.unrounded_content_offset().y, 700.0);
}

#[test]
fn test_drag_callbacks_fire_once_per_session() {
    let mut view = tall_view();
    let (recorder, shared) = recorder();
    view.set_delegate(&shared);

    view.begin_drag();
    view.begin_drag(); // redundant
    view.drag_by(0.0, 50.0, 0.01);
    view.drag_by(0.0, 50.0, 0.02);
    view.end_drag(0.5);
    view.end_drag(0.5); // redundant

    assert_eq!(count(&recorder, "willBeginDragging"), 1);
    assert_eq!(count(&recorder, "didEndDragging"), 1);
}

#[test]
fn test_set_content_offset_is_idempotent() {
    let mut view = tall_view();
    let (recorder, shared) = recorder();
    view.set_delegate(&shared);

    view.set_content_offset(Point::new(0.0, 200.0), false);
    assert_eq!(count(&recorder, "didScroll"), 1);

    // Same target again: state identical, no second notification
    view.set_content_offset(Point::new(0.0, 200.0), false);
    assert_eq!(count(&recorder, "didScroll"), 1);
    assert_eq!(view.content_offset(), Point::new(0.0, 200.0));
}

#[test]
fn test_indicator_show_ordering_on_mouse_enter() {
    let mut view = ScrollView::new(Size::new(100.0, 300.0));
    let (recorder, shared) = recorder();
    view.set_delegate(&shared);
    view.set_indicator_visibility(Axis::Vertical, IndicatorVisibility::WhileMouseInside);
    view.set_indicator_visibility(Axis::Horizontal, IndicatorVisibility::Never);
    view.set_content_size(Size::new(100.0, 1000.0));
    assert!(!view.indicator_showing(Axis::Vertical));

    view.set_mouse_inside(true);

    assert!(view.indicator_showing(Axis::Vertical));
    let events = recorder.borrow().events.clone();
    assert_eq!(events, vec!["willShow:Vertical", "didShow:Vertical"]);

    // No duplicate transition when the desired state does not change
    view.set_mouse_inside(true);
    assert_eq!(recorder.borrow().events.len(), 2);

    view.set_mouse_inside(false);
    let events = recorder.borrow().events.clone();
    assert_eq!(
        events,
        vec![
            "willShow:Vertical",
            "didShow:Vertical",
            "willHide:Vertical",
            "didHide:Vertical"
        ]
    );
}

#[test]
fn test_unscrollable_content_never_shows_indicator() {
    let mut view = ScrollView::new(Size::new(100.0, 300.0));
    view.set_content_size(Size::new(100.0, 200.0));
    view.set_always_bounce_vertical(true);
    view.set_indicator_visibility(Axis::Vertical, IndicatorVisibility::Always);
    assert!(!view.indicator_showing(Axis::Vertical));

    // Pull still works, but no indicator appears
    view.begin_drag();
    view.drag_by(0.0, 40.0, 0.01);
    assert!(view.pull_offset().y > 0.0);
    assert!(!view.indicator_showing(Axis::Vertical));
}

#[test]
fn test_frame_timer_runs_only_while_animating() {
    let running = Rc::new(Cell::new(false));
    let mut view = tall_view();
    view.set_frame_timer(FlagTimer(running.clone()));
    assert!(!running.get());

    // Dragging is pointer-driven, not timer-driven
    view.begin_drag();
    view.drag_by(0.0, 50.0, 0.01);
    assert!(!running.get());
    view.end_drag(0.5);
    assert!(!running.get());

    view.set_content_offset(Point::new(0.0, 400.0), true);
    assert!(running.get());
    let mut frames = 0;
    while running.get() {
        view.on_tick();
        frames += 1;
        assert!(frames < 1200, "glide must settle and stop the timer");
    }
    assert_eq!(view.unrounded_content_offset().y, 400.0);
}

#[test]
fn test_dropped_delegate_detaches_cleanly() {
    let mut view = tall_view();
    let (recorder, shared) = recorder();
    view.set_delegate(&shared);
    drop(shared);
    drop(recorder);

    // Weak reference is dead: scrolling must not panic or leak events
    view.set_content_offset(Point::new(0.0, 100.0), false);
    assert_eq!(view.content_offset(), Point::new(0.0, 100.0));
}

#[test]
fn test_new_animated_target_replaces_previous() {
    let mut view = tall_view();
    view.set_content_offset(Point::new(0.0, 600.0), true);
    for _ in 0..5 {
        view.on_tick();
    }
    let mid = view.unrounded_content_offset().y;
    assert!(mid > 0.0 && mid < 600.0);

    // Replacement, not queueing
    view.set_content_offset(Point::new(0.0, 100.0), true);
    for _ in 0..600 {
        view.on_tick();
    }
    assert_eq!(view.unrounded_content_offset().y, 100.0);
}
