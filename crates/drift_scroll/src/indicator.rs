//! Scroll indicator coordination
//!
//! Tracks, per axis, the visibility policy and whether the indicator is
//! currently on screen, plus the countdown for `flash_scroll_indicators`.
//! The coordinator never fires callbacks itself: the view asks it to
//! [`plan`] a transition, fires the will-callback, applies the flip,
//! then fires the did-callback, so observers always see the
//! will -> change -> did order.
//!
//! [`plan`]: IndicatorCoordinator::plan

use crate::config::{Axis, IndicatorVisibility};

/// Everything the visibility decision depends on, snapshotted by the
/// view each time indicators are re-evaluated.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorInputs {
    /// Content exceeds the visible bounds on this axis
    pub scrollable: bool,
    /// A drag, throw, bounce, or animated scroll is in progress
    pub scrolling: bool,
    /// The pointer is inside the scroll view
    pub mouse_inside: bool,
    /// The user is dragging an indicator knob directly
    pub knob_tracking: bool,
}

/// Per-axis indicator visibility state.
#[derive(Debug, Clone)]
pub struct IndicatorCoordinator {
    visibility_x: IndicatorVisibility,
    visibility_y: IndicatorVisibility,
    showing_x: bool,
    showing_y: bool,
    flash_remaining: f32,
}

impl Default for IndicatorCoordinator {
    fn default() -> Self {
        Self {
            visibility_x: IndicatorVisibility::default(),
            visibility_y: IndicatorVisibility::default(),
            showing_x: false,
            showing_y: false,
            flash_remaining: 0.0,
        }
    }
}

impl IndicatorCoordinator {
    pub fn visibility(&self, axis: Axis) -> IndicatorVisibility {
        match axis {
            Axis::Horizontal => self.visibility_x,
            Axis::Vertical => self.visibility_y,
        }
    }

    pub fn set_visibility(&mut self, axis: Axis, visibility: IndicatorVisibility) {
        match axis {
            Axis::Horizontal => self.visibility_x = visibility,
            Axis::Vertical => self.visibility_y = visibility,
        }
    }

    pub fn showing(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.showing_x,
            Axis::Vertical => self.showing_y,
        }
    }

    pub fn set_showing(&mut self, axis: Axis, showing: bool) {
        match axis {
            Axis::Horizontal => self.showing_x = showing,
            Axis::Vertical => self.showing_y = showing,
        }
    }

    /// Start (or restart) a flash: indicators stay up for `duration`
    /// seconds regardless of policy.
    pub fn flash(&mut self, duration: f32) {
        self.flash_remaining = duration.max(0.0);
    }

    pub fn flash_active(&self) -> bool {
        self.flash_remaining > 0.0
    }

    /// Advance the flash countdown. Returns true when the flash expires
    /// on this tick, so the view re-evaluates visibility once.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.flash_remaining <= 0.0 {
            return false;
        }
        self.flash_remaining -= dt;
        self.flash_remaining <= 0.0
    }

    /// Whether the indicator on `axis` should be visible under the
    /// current policy and inputs. An unscrollable axis never shows,
    /// regardless of policy or flash.
    pub fn desired(&self, axis: Axis, inputs: IndicatorInputs) -> bool {
        if !inputs.scrollable {
            return false;
        }
        if self.flash_active() || inputs.knob_tracking {
            return true;
        }
        match self.visibility(axis) {
            IndicatorVisibility::Never => false,
            IndicatorVisibility::WhileScrolling => inputs.scrolling,
            IndicatorVisibility::WhileMouseInside => inputs.mouse_inside,
            IndicatorVisibility::Always => true,
        }
    }

    /// Compare the desired state against the current one. Returns
    /// `Some(new_state)` when the indicator must flip, `None` when it is
    /// already correct.
    pub fn plan(&self, axis: Axis, inputs: IndicatorInputs) -> Option<bool> {
        let desired = self.desired(axis, inputs);
        if desired != self.showing(axis) {
            Some(desired)
        } else {
            None
        }
    }
}
