//! Scroll view controller
//!
//! [`ScrollView`] owns the content offset and everything that moves it:
//! drag deltas, rubber-band pulls, post-release throws, spring bounces,
//! animated offset glides, and continuous edge-scrolling. The host feeds
//! pointer gestures in (`begin_drag`/`drag_by`/`end_drag`), injects a
//! [`FrameTimer`], and calls [`ScrollView::on_tick`] once per frame
//! while the timer runs.
//!
//! All coordinates are in content space with the origin at the top-left:
//! the offset is the top-left point of the visible window into the
//! content, so its valid range per axis is `[-inset, content - visible
//! + inset]`. Drag deltas are offset-space deltas (the host flips sign
//! for natural scrolling before calling in).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use drift_animation::{
    decay_velocity, resist, unresist, AnimationScheduler, FrameTimer, Spring, SpringId,
    VelocityTracker, FRAME_DURATION,
};
use drift_core::events::event_types::*;
use drift_core::{EdgeInsets, Point, Rect, Size};
use tracing::trace;

use crate::config::{Axis, IndicatorStyle, IndicatorVisibility, ScrollConfig};
use crate::delegate::{DelegateCapabilities, ScrollViewDelegate, SharedDelegate};
use crate::indicator::{IndicatorCoordinator, IndicatorInputs};
use crate::state::{AnimationMode, AxisMotion, PullState, ScrollPhase, StateTransitions};

fn get(p: Point, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => p.x,
        Axis::Vertical => p.y,
    }
}

fn set(p: &mut Point, axis: Axis, value: f32) {
    match axis {
        Axis::Horizontal => p.x = value,
        Axis::Vertical => p.y = value,
    }
}

fn extent(s: Size, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => s.width,
        Axis::Vertical => s.height,
    }
}

/// A scrollable container's physics and state core.
pub struct ScrollView {
    config: ScrollConfig,
    bounds: Size,
    content_size: Size,
    content_inset: EdgeInsets,
    resize_knob_size: Size,
    // Unrounded: sub-pixel drag precision accumulates here, rounding
    // happens only in `content_offset`
    offset: Point,
    phase: ScrollPhase,
    mode: AnimationMode,
    pull: PullState,
    velocity: VelocityTracker,
    springs: AnimationScheduler,
    timer: Option<Box<dyn FrameTimer>>,
    timer_running: bool,
    delegate: Option<Weak<RefCell<dyn ScrollViewDelegate>>>,
    caps: DelegateCapabilities,
    indicators: IndicatorCoordinator,
    mouse_inside: bool,
    knob_tracking: bool,
}

impl ScrollView {
    pub fn new(bounds: Size) -> Self {
        Self::with_config(bounds, ScrollConfig::default())
    }

    pub fn with_config(bounds: Size, config: ScrollConfig) -> Self {
        let mut indicators = IndicatorCoordinator::default();
        for axis in Axis::ALL {
            indicators.set_visibility(axis, IndicatorVisibility::default());
        }
        Self {
            config,
            bounds: bounds.sanitized(),
            content_size: Size::ZERO,
            content_inset: EdgeInsets::ZERO,
            resize_knob_size: Size::ZERO,
            offset: Point::ZERO,
            phase: ScrollPhase::default(),
            mode: AnimationMode::Idle,
            pull: PullState::default(),
            velocity: VelocityTracker::new(),
            springs: AnimationScheduler::new(),
            timer: None,
            timer_running: false,
            delegate: None,
            caps: DelegateCapabilities::none(),
            indicators,
            mouse_inside: false,
            knob_tracking: false,
        }
    }

    // ==== Offset range ====

    /// Smallest valid offset (top-left, pulled in by the insets).
    pub fn min_offset(&self) -> Point {
        Point::new(-self.content_inset.left, -self.content_inset.top)
    }

    /// Largest valid offset. Never smaller than `min_offset`.
    pub fn max_offset(&self) -> Point {
        let min = self.min_offset();
        Point::new(
            (self.content_size.width - self.bounds.width + self.content_inset.right).max(min.x),
            (self.content_size.height - self.bounds.height + self.content_inset.bottom).max(min.y),
        )
    }

    fn range(&self, axis: Axis) -> (f32, f32) {
        (get(self.min_offset(), axis), get(self.max_offset(), axis))
    }

    fn clamp(&self, p: Point) -> Point {
        let min = self.min_offset();
        let max = self.max_offset();
        Point::new(p.x.clamp(min.x, max.x), p.y.clamp(min.y, max.y))
    }

    /// Content exceeds the visible bounds on `axis`.
    fn scrollable(&self, axis: Axis) -> bool {
        let (min, max) = self.range(axis);
        max > min
    }

    /// Pull saturation distance for `axis`.
    fn limit(&self, axis: Axis) -> f32 {
        extent(self.bounds, axis) * self.config.max_overscroll
    }

    fn can_pull(&self, axis: Axis) -> bool {
        if !self.config.bounces {
            return false;
        }
        let always = match axis {
            Axis::Horizontal => self.config.always_bounce_horizontal,
            Axis::Vertical => self.config.always_bounce_vertical,
        };
        self.scrollable(axis) || always
    }

    // ==== Content geometry ====

    /// The content offset, rounded to whole pixels for presentation.
    pub fn content_offset(&self) -> Point {
        self.offset.rounded()
    }

    /// The offset with sub-pixel precision intact.
    pub fn unrounded_content_offset(&self) -> Point {
        self.offset
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size.sanitized();
        self.reclamp_if_settled();
        self.sync_indicators();
    }

    pub fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    pub fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.content_inset = inset.sanitized();
        self.reclamp_if_settled();
        self.sync_indicators();
    }

    /// Visible size of the view.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds.sanitized();
        self.reclamp_if_settled();
        self.sync_indicators();
    }

    pub fn resize_knob_size(&self) -> Size {
        self.resize_knob_size
    }

    pub fn set_resize_knob_size(&mut self, size: Size) {
        self.resize_knob_size = size.sanitized();
    }

    /// The window into the content: origin is the offset, size the bounds.
    pub fn visible_rect(&self) -> Rect {
        Rect {
            origin: self.offset,
            size: self.bounds,
        }
    }

    // A geometry change only snaps the offset home when nothing is in
    // flight; an active pull or bounce clamps when it settles.
    fn reclamp_if_settled(&mut self) {
        if self.phase.is_dragging() || !self.mode.is_idle() {
            return;
        }
        let clamped = self.clamp(self.offset);
        self.apply_offset(clamped);
    }

    // ==== Offset mutation ====

    /// Set the content offset, clamped to the valid range.
    ///
    /// Animated requests glide there on a spring and replace any
    /// animation already in flight; there is no queue.
    pub fn set_content_offset(&mut self, offset: Point, animated: bool) {
        let target = self.clamp(offset.sanitized());
        self.cancel_animations();
        if self.phase.is_decelerating() {
            self.phase = self.phase.on_event(SETTLED).unwrap_or(self.phase);
        }

        if animated {
            let mut spring_x = None;
            let mut spring_y = None;
            if (target.x - self.offset.x).abs() > f32::EPSILON {
                let mut spring = Spring::new(self.config.glide_spring, self.offset.x);
                spring.set_target(target.x);
                spring_x = Some(self.springs.add_spring(spring));
            }
            if (target.y - self.offset.y).abs() > f32::EPSILON {
                let mut spring = Spring::new(self.config.glide_spring, self.offset.y);
                spring.set_target(target.y);
                spring_y = Some(self.springs.add_spring(spring));
            }
            if spring_x.is_some() || spring_y.is_some() {
                trace!(x = target.x, y = target.y, "animated scroll");
                self.mode = AnimationMode::Offset {
                    spring_x,
                    spring_y,
                    target,
                };
            }
        } else {
            self.apply_offset(target);
        }

        self.sync_indicators();
        self.sync_timer();
    }

    /// Scroll the minimal distance that brings `rect` fully into view.
    /// No movement if it is already visible.
    pub fn scroll_rect_to_visible(&mut self, rect: Rect, animated: bool) {
        let visible = self.visible_rect();
        if visible.contains_rect(&rect) {
            return;
        }
        let mut target = self.offset;
        if rect.min_x() < visible.min_x() {
            target.x = rect.min_x();
        } else if rect.max_x() > visible.max_x() {
            target.x += rect.max_x() - visible.max_x();
        }
        if rect.min_y() < visible.min_y() {
            target.y = rect.min_y();
        } else if rect.max_y() > visible.max_y() {
            target.y += rect.max_y() - visible.max_y();
        }
        self.set_content_offset(target, animated);
    }

    pub fn scroll_to_top(&mut self, animated: bool) {
        let target = Point::new(self.offset.x, self.min_offset().y);
        self.set_content_offset(target, animated);
    }

    pub fn scroll_to_bottom(&mut self, animated: bool) {
        let target = Point::new(self.offset.x, self.max_offset().y);
        self.set_content_offset(target, animated);
    }

    /// True while an animated scroll is gliding toward the top.
    pub fn is_scrolling_to_top(&self) -> bool {
        match self.mode {
            AnimationMode::Offset { target, .. } => {
                (target.y - self.min_offset().y).abs() < 0.5
            }
            _ => false,
        }
    }

    fn apply_offset(&mut self, new: Point) {
        let new = new.sanitized();
        if new == self.offset {
            return;
        }
        self.offset = new;
        trace!(x = new.x, y = new.y, "scroll");
        if self.caps.did_scroll {
            let offset = self.offset;
            self.with_delegate(move |d| d.did_scroll(offset));
        }
    }

    /// Tear down whatever animation currently owns the offset. The
    /// current animated position becomes the new baseline.
    fn cancel_animations(&mut self) {
        match self.mode {
            AnimationMode::Offset {
                spring_x, spring_y, ..
            } => {
                if let Some(id) = spring_x {
                    self.springs.remove_spring(id);
                }
                if let Some(id) = spring_y {
                    self.springs.remove_spring(id);
                }
            }
            AnimationMode::Momentum { x, y } => {
                for motion in [x, y] {
                    if let AxisMotion::Bounce { spring } = motion {
                        self.springs.remove_spring(spring);
                    }
                }
            }
            AnimationMode::Idle | AnimationMode::Continuous { .. } => {}
        }
        self.mode = AnimationMode::Idle;
    }

    // ==== Drag gesture ====

    /// A drag gesture started. Cancels any in-flight animation (the
    /// animated position becomes the drag baseline) and, if the offset
    /// is out of bounds, converts the displayed excursion back to a raw
    /// pull so the gesture continues seamlessly.
    pub fn begin_drag(&mut self) {
        if !self.config.scroll_enabled {
            return;
        }
        let Some(next) = self.phase.on_event(DRAG) else {
            return;
        };
        self.phase = next;
        self.cancel_animations();
        self.velocity.clear();
        self.pull.clear();

        for axis in Axis::ALL {
            let (min, max) = self.range(axis);
            let pos = get(self.offset, axis);
            let excursion = if pos < min {
                pos - min
            } else if pos > max {
                pos - max
            } else {
                0.0
            };
            if excursion != 0.0 {
                let raw = unresist(excursion, self.limit(axis));
                self.pull.set(axis, raw, true);
            }
        }

        trace!("drag began");
        if self.caps.will_begin_dragging {
            self.with_delegate(|d| d.will_begin_dragging());
        }
        self.sync_indicators();
        self.sync_timer();
    }

    /// Apply a drag delta (offset-space) at host-monotonic time `now`
    /// (seconds).
    ///
    /// In bounds the delta moves the offset one-to-one. Past a bound the
    /// raw excursion keeps accumulating unresisted while the displayed
    /// offset goes through the resistance curve, so reversing the drag
    /// unwinds the pull without fighting.
    pub fn drag_by(&mut self, dx: f32, dy: f32, now: f64) {
        if !self.phase.is_dragging() {
            return;
        }
        self.velocity.push(dx, dy, now);

        let mut new = self.offset;
        for (axis, delta) in [(Axis::Horizontal, dx), (Axis::Vertical, dy)] {
            let (min, max) = self.range(axis);
            // Where the pointer "really" is: the unresisted position
            let virtual_pos = if self.pull.pulling(axis) {
                let raw = self.pull.raw(axis);
                (if raw < 0.0 { min } else { max }) + raw
            } else {
                get(self.offset, axis)
            };
            let moved = virtual_pos + delta;

            if moved < min && self.can_pull(axis) {
                let raw = moved - min;
                self.pull.set(axis, raw, true);
                set(&mut new, axis, min + resist(raw, self.limit(axis)));
            } else if moved > max && self.can_pull(axis) {
                let raw = moved - max;
                self.pull.set(axis, raw, true);
                set(&mut new, axis, max + resist(raw, self.limit(axis)));
            } else {
                self.pull.set(axis, 0.0, false);
                set(&mut new, axis, moved.clamp(min, max));
            }
        }

        self.phase = self.phase.on_event(SCROLL).unwrap_or(self.phase);
        self.apply_offset(new);
        self.sync_indicators();
    }

    /// The drag gesture ended at host-monotonic time `now` (seconds).
    /// A pulled axis bounces back regardless of velocity; an in-bounds
    /// axis becomes a throw when the release speed clears the threshold.
    pub fn end_drag(&mut self, now: f64) {
        if !self.phase.is_dragging() {
            return;
        }
        let (vx, vy) = self.velocity.estimate(now);
        self.velocity.clear();
        self.release(vx, vy);
    }

    fn release(&mut self, vx: f32, vy: f32) {
        let x = self.release_axis(Axis::Horizontal, vx);
        let y = self.release_axis(Axis::Vertical, vy);
        self.pull.clear();

        let bouncing = x.is_bouncing() || y.is_bouncing();
        let moving = !x.is_idle() || !y.is_idle();
        let event = if bouncing {
            HIT_EDGE
        } else if moving {
            SCROLL_END
        } else {
            DRAG_END
        };
        self.phase = self.phase.on_event(event).unwrap_or(ScrollPhase::Idle);
        self.mode = if moving {
            AnimationMode::Momentum { x, y }
        } else {
            AnimationMode::Idle
        };
        trace!(vx, vy, bouncing, "drag ended");

        if self.caps.did_end_dragging {
            self.with_delegate(|d| d.did_end_dragging());
        }
        self.sync_indicators();
        self.sync_timer();
    }

    fn release_axis(&mut self, axis: Axis, velocity: f32) -> AxisMotion {
        let (min, max) = self.range(axis);
        let pos = get(self.offset, axis);
        // Out of range at release: either a pull past a bound, or the
        // range moved under the gesture (content shrank mid-drag).
        // Either way the axis must come home, pull flag or not.
        if pos < min || pos > max {
            let bound = pos.clamp(min, max);
            if self.config.bounces {
                let mut spring = Spring::new(self.config.bounce_spring, pos);
                spring.set_target(bound);
                return AxisMotion::Bounce {
                    spring: self.springs.add_spring(spring),
                };
            }
            let mut new = self.offset;
            set(&mut new, axis, bound);
            self.apply_offset(new);
            return AxisMotion::Idle;
        }
        let velocity = velocity * self.config.throw_multiplier;
        if velocity.abs() >= self.config.min_throw_speed && max > min {
            AxisMotion::Throw { velocity }
        } else {
            AxisMotion::Idle
        }
    }

    // ==== Continuous scroll ====

    /// Scroll continuously toward a drag point sitting outside the
    /// visible rect (content coordinates), e.g. while a selection drag
    /// hovers past an edge. Scrolling runs until the point moves back
    /// inside or [`end_continuous_scroll`] is called; calling this again
    /// just updates the point.
    ///
    /// [`end_continuous_scroll`]: ScrollView::end_continuous_scroll
    pub fn begin_continuous_scroll(&mut self, location: Point, _animated: bool) {
        if !matches!(self.mode, AnimationMode::Continuous { .. }) {
            self.cancel_animations();
            if self.phase.is_decelerating() {
                self.phase = self.phase.on_event(SETTLED).unwrap_or(self.phase);
            }
        }
        self.mode = AnimationMode::Continuous {
            location: location.sanitized(),
        };
        self.sync_indicators();
        self.sync_timer();
    }

    pub fn end_continuous_scroll(&mut self, _animated: bool) {
        if matches!(self.mode, AnimationMode::Continuous { .. }) {
            self.mode = AnimationMode::Idle;
            // The range may have moved since the last tick clamped
            let landing = self.clamp(self.offset);
            self.apply_offset(landing);
            self.sync_indicators();
            self.sync_timer();
        }
    }

    // ==== Frame tick ====

    /// Advance whichever animation is active by one frame. The host
    /// calls this once per frame while the injected timer is started.
    pub fn on_tick(&mut self) {
        let dt = FRAME_DURATION;
        self.springs.tick(dt);

        match self.mode {
            AnimationMode::Idle => {}
            AnimationMode::Offset {
                spring_x,
                spring_y,
                target,
            } => self.tick_offset(spring_x, spring_y, target),
            AnimationMode::Momentum { x, y } => self.tick_momentum(x, y, dt),
            AnimationMode::Continuous { location } => self.tick_continuous(location, dt),
        }

        if self.indicators.tick(dt) {
            self.sync_indicators();
        }
        self.sync_timer();
    }

    fn tick_offset(
        &mut self,
        spring_x: Option<SpringId>,
        spring_y: Option<SpringId>,
        target: Point,
    ) {
        let mut new = self.offset;
        let mut settled = true;
        if let Some(spring) = spring_x.and_then(|id| self.springs.get_spring(id)) {
            new.x = spring.value();
            settled &= spring.is_settled();
        }
        if let Some(spring) = spring_y.and_then(|id| self.springs.get_spring(id)) {
            new.y = spring.value();
            settled &= spring.is_settled();
        }

        if settled {
            if let Some(id) = spring_x {
                self.springs.remove_spring(id);
            }
            if let Some(id) = spring_y {
                self.springs.remove_spring(id);
            }
            self.mode = AnimationMode::Idle;
            // Land exactly on the (re-clamped) target
            let landing = self.clamp(target);
            self.apply_offset(landing);
            self.sync_indicators();
        } else {
            self.apply_offset(new);
        }
    }

    fn tick_momentum(&mut self, x: AxisMotion, y: AxisMotion, dt: f32) {
        let mut new = self.offset;
        let x = self.tick_axis(Axis::Horizontal, x, dt, &mut new);
        let y = self.tick_axis(Axis::Vertical, y, dt, &mut new);
        self.apply_offset(new);

        if x.is_idle() && y.is_idle() {
            self.mode = AnimationMode::Idle;
            self.phase = self.phase.on_event(SETTLED).unwrap_or(self.phase);
            let landing = self.clamp(self.offset);
            self.apply_offset(landing);
            trace!("momentum settled");
            self.sync_indicators();
        } else {
            self.mode = AnimationMode::Momentum { x, y };
        }
    }

    fn tick_axis(&mut self, axis: Axis, motion: AxisMotion, dt: f32, new: &mut Point) -> AxisMotion {
        let (min, max) = self.range(axis);
        match motion {
            AxisMotion::Idle => AxisMotion::Idle,
            AxisMotion::Throw { velocity } => {
                let velocity = decay_velocity(velocity, self.config.deceleration_rate, dt);
                let pos = get(*new, axis) + velocity * dt;
                if pos < min || pos > max {
                    let bound = pos.clamp(min, max);
                    set(new, axis, bound);
                    if self.config.bounces {
                        // Hand the residual momentum to the bounce
                        let mut spring = Spring::new(self.config.bounce_spring, bound);
                        spring.set_target(bound);
                        spring.set_velocity(velocity);
                        trace!(?axis, velocity, "throw hit edge");
                        AxisMotion::Bounce {
                            spring: self.springs.add_spring(spring),
                        }
                    } else {
                        AxisMotion::Idle
                    }
                } else if velocity.abs() < self.config.stop_speed {
                    set(new, axis, pos);
                    AxisMotion::Idle
                } else {
                    set(new, axis, pos);
                    AxisMotion::Throw { velocity }
                }
            }
            AxisMotion::Bounce { spring } => match self.springs.get_spring(spring) {
                Some(s) if s.is_settled() => {
                    set(new, axis, s.target());
                    self.springs.remove_spring(spring);
                    AxisMotion::Idle
                }
                Some(s) => {
                    set(new, axis, s.value());
                    AxisMotion::Bounce { spring }
                }
                None => AxisMotion::Idle,
            },
        }
    }

    fn tick_continuous(&mut self, location: Point, dt: f32) {
        let mut new = self.offset;
        for axis in Axis::ALL {
            let (min, max) = self.range(axis);
            let vis_min = get(self.offset, axis);
            let vis_max = vis_min + extent(self.bounds, axis);
            let loc = get(location, axis);
            let beyond = if loc < vis_min {
                loc - vis_min
            } else if loc > vis_max {
                loc - vis_max
            } else {
                0.0
            };
            if beyond != 0.0 {
                let speed = (beyond.abs() * self.config.continuous_scroll_gain)
                    .min(self.config.max_continuous_scroll_speed);
                let pos = (get(new, axis) + beyond.signum() * speed * dt).clamp(min, max);
                set(&mut new, axis, pos);
            }
        }
        self.apply_offset(new);
    }

    // The frame timer runs only while something needs per-frame work.
    fn sync_timer(&mut self) {
        let need = !self.mode.is_idle() || self.indicators.flash_active();
        if need == self.timer_running {
            return;
        }
        if let Some(timer) = &mut self.timer {
            if need {
                timer.start();
            } else {
                timer.stop();
            }
        }
        self.timer_running = need;
    }

    /// Inject the host's frame source. While started, the host must call
    /// [`on_tick`] once per frame on the thread that owns this view.
    ///
    /// [`on_tick`]: ScrollView::on_tick
    pub fn set_frame_timer(&mut self, timer: impl FrameTimer + 'static) {
        self.timer = Some(Box::new(timer));
        self.timer_running = false;
        self.sync_timer();
    }

    // ==== Delegate ====

    /// Attach a delegate. The view holds only a weak reference, and the
    /// capability record is queried once here, not per event.
    pub fn set_delegate(&mut self, delegate: &SharedDelegate) {
        self.caps = delegate.borrow().capabilities();
        self.delegate = Some(Rc::downgrade(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
        self.caps = DelegateCapabilities::none();
    }

    /// The attached delegate, if it is still alive.
    pub fn delegate(&self) -> Option<SharedDelegate> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    fn with_delegate(&self, f: impl FnOnce(&mut dyn ScrollViewDelegate)) {
        if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
            f(&mut *delegate.borrow_mut());
        }
    }

    // ==== State queries ====

    pub fn dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// True while a throw or bounce is running the offset down.
    pub fn decelerating(&self) -> bool {
        matches!(self.mode, AnimationMode::Momentum { .. })
    }

    fn excursion(&self) -> Point {
        let clamped = self.clamp(self.offset);
        Point::new(self.offset.x - clamped.x, self.offset.y - clamped.y)
    }

    /// Displayed rubber-band displacement while dragging past a bound.
    pub fn pull_offset(&self) -> Point {
        if self.phase.is_dragging() {
            self.excursion()
        } else {
            Point::ZERO
        }
    }

    /// Out-of-bounds displacement while a bounce is in flight.
    pub fn bounce_offset(&self) -> Point {
        if self.decelerating() {
            self.excursion()
        } else {
            Point::ZERO
        }
    }

    // ==== Configuration ====

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn bounces(&self) -> bool {
        self.config.bounces
    }

    pub fn set_bounces(&mut self, bounces: bool) {
        self.config.bounces = bounces;
    }

    pub fn always_bounce_vertical(&self) -> bool {
        self.config.always_bounce_vertical
    }

    pub fn set_always_bounce_vertical(&mut self, always: bool) {
        self.config.always_bounce_vertical = always;
    }

    pub fn always_bounce_horizontal(&self) -> bool {
        self.config.always_bounce_horizontal
    }

    pub fn set_always_bounce_horizontal(&mut self, always: bool) {
        self.config.always_bounce_horizontal = always;
    }

    pub fn scroll_enabled(&self) -> bool {
        self.config.scroll_enabled
    }

    /// Disabling scrolling mid-drag releases the gesture with no
    /// momentum; a pulled axis still bounces home.
    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        self.config.scroll_enabled = enabled;
        if !enabled && self.phase.is_dragging() {
            self.velocity.clear();
            self.release(0.0, 0.0);
        }
    }

    pub fn deceleration_rate(&self) -> f32 {
        self.config.deceleration_rate
    }

    pub fn set_deceleration_rate(&mut self, rate: f32) {
        self.config.deceleration_rate = rate.clamp(1.0e-6, 1.0);
    }

    // ==== Indicators ====

    pub fn indicator_visibility(&self, axis: Axis) -> IndicatorVisibility {
        self.indicators.visibility(axis)
    }

    pub fn set_indicator_visibility(&mut self, axis: Axis, visibility: IndicatorVisibility) {
        self.indicators.set_visibility(axis, visibility);
        self.sync_indicators();
    }

    pub fn indicator_showing(&self, axis: Axis) -> bool {
        self.indicators.showing(axis)
    }

    pub fn indicator_style(&self) -> IndicatorStyle {
        self.config.indicator_style
    }

    pub fn set_indicator_style(&mut self, style: IndicatorStyle) {
        self.config.indicator_style = style;
    }

    /// The pointer entered or left the view. Feeds the
    /// `WhileMouseInside` visibility policy.
    pub fn set_mouse_inside(&mut self, inside: bool) {
        self.mouse_inside = inside;
        self.sync_indicators();
    }

    /// The user grabbed or released an indicator knob. A tracked knob
    /// pins its indicator visible.
    pub fn set_knob_tracking(&mut self, tracking: bool) {
        self.knob_tracking = tracking;
        self.sync_indicators();
    }

    /// Insets the content should keep clear of visible indicators.
    pub fn scroll_indicator_insets(&self) -> EdgeInsets {
        let lane = self.config.indicator_thickness + 2.0 * self.config.indicator_padding;
        EdgeInsets::new(
            0.0,
            0.0,
            if self.indicators.showing(Axis::Horizontal) {
                lane
            } else {
                0.0
            },
            if self.indicators.showing(Axis::Vertical) {
                lane
            } else {
                0.0
            },
        )
    }

    /// Length available to the indicator track along `axis`. The resize
    /// knob (when present) owns the trailing corner; otherwise the
    /// perpendicular indicator's lane is kept clear when it is showing.
    pub fn indicator_track_length(&self, axis: Axis) -> f32 {
        let mut length = extent(self.bounds, axis) - 2.0 * self.config.indicator_padding;
        let knob = extent(self.resize_knob_size, axis);
        if knob > 0.0 {
            length -= knob;
        } else if self.indicators.showing(axis.other()) {
            length -= self.config.indicator_thickness + 2.0 * self.config.indicator_padding;
        }
        length.max(0.0)
    }

    /// Show the indicators briefly regardless of policy, then let the
    /// policy take back over.
    pub fn flash_scroll_indicators(&mut self) {
        self.indicators.flash(self.config.flash_duration);
        self.sync_indicators();
        self.sync_timer();
    }

    fn sync_indicators(&mut self) {
        let scrolling = self.phase.is_dragging() || !self.mode.is_idle();
        for axis in Axis::ALL {
            let inputs = IndicatorInputs {
                scrollable: self.scrollable(axis),
                scrolling,
                mouse_inside: self.mouse_inside,
                knob_tracking: self.knob_tracking,
            };
            let Some(show) = self.indicators.plan(axis, inputs) else {
                continue;
            };
            if show {
                if self.caps.will_show_indicator {
                    self.with_delegate(|d| d.will_show_scroll_indicator(axis));
                }
                self.indicators.set_showing(axis, true);
                trace!(?axis, "indicator shown");
                if self.caps.did_show_indicator {
                    self.with_delegate(|d| d.did_show_scroll_indicator(axis));
                }
            } else {
                if self.caps.will_hide_indicator {
                    self.with_delegate(|d| d.will_hide_scroll_indicator(axis));
                }
                self.indicators.set_showing(axis, false);
                trace!(?axis, "indicator hidden");
                if self.caps.did_hide_indicator {
                    self.with_delegate(|d| d.did_hide_scroll_indicator(axis));
                }
            }
        }
    }
}
