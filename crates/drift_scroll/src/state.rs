//! Scroll state machines
//!
//! Two layers of state. [`ScrollPhase`] is the coarse gesture machine
//! visible through `dragging`/`decelerating`. [`AnimationMode`] is the
//! single tagged variant naming whichever animation currently owns the
//! offset; the variants are mutually exclusive by construction, as is
//! each axis's motion within a momentum phase.

use drift_animation::SpringId;
use drift_core::events::event_types::*;
use drift_core::Point;

use crate::config::Axis;

/// Trait for states that respond to event ids with transitions.
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + std::fmt::Debug {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}

/// Coarse gesture phase of the scroll view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    /// No gesture and no momentum
    #[default]
    Idle,
    /// Pointer down, deltas tracking the pointer
    Dragging,
    /// Released: a throw or bounce is running the offset down
    Decelerating,
}

impl StateTransitions for ScrollPhase {
    fn on_event(&self, event: u32) -> Option<Self> {
        match (self, event) {
            (ScrollPhase::Idle, DRAG) => Some(ScrollPhase::Dragging),
            // Grabbing mid-flight cancels the momentum
            (ScrollPhase::Decelerating, DRAG) => Some(ScrollPhase::Dragging),
            (ScrollPhase::Dragging, SCROLL) => Some(ScrollPhase::Dragging),
            (ScrollPhase::Dragging, DRAG_END) => Some(ScrollPhase::Idle),
            // Released with velocity -> throw
            (ScrollPhase::Dragging, SCROLL_END) => Some(ScrollPhase::Decelerating),
            // Released while pulled out of bounds -> bounce
            (ScrollPhase::Dragging, HIT_EDGE) => Some(ScrollPhase::Decelerating),
            (ScrollPhase::Decelerating, SETTLED) => Some(ScrollPhase::Idle),
            _ => None,
        }
    }
}

impl ScrollPhase {
    pub fn is_dragging(&self) -> bool {
        matches!(self, ScrollPhase::Dragging)
    }

    pub fn is_decelerating(&self) -> bool {
        matches!(self, ScrollPhase::Decelerating)
    }
}

/// Post-release motion of a single axis. A throw that crosses a content
/// bound becomes a bounce carrying the residual velocity; the two never
/// coexist on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisMotion {
    Idle,
    /// Momentum scrolling with exponential velocity decay
    Throw { velocity: f32 },
    /// Spring snap-back toward the nearest bound
    Bounce { spring: SpringId },
}

impl AxisMotion {
    pub fn is_idle(&self) -> bool {
        matches!(self, AxisMotion::Idle)
    }

    pub fn is_bouncing(&self) -> bool {
        matches!(self, AxisMotion::Bounce { .. })
    }
}

/// The animation (if any) that currently owns the content offset.
/// Starting a new mode always cancels and replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationMode {
    Idle,
    /// Animated `set_content_offset` glide toward `target`
    Offset {
        spring_x: Option<SpringId>,
        spring_y: Option<SpringId>,
        target: Point,
    },
    /// Post-release throw/bounce, tracked per axis
    Momentum { x: AxisMotion, y: AxisMotion },
    /// Continuous scroll while a drag point sits outside the bounds
    Continuous { location: Point },
}

impl AnimationMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, AnimationMode::Idle)
    }
}

/// Rubber-band bookkeeping during an active drag. `raw_*` accumulate
/// the unresisted pointer excursion past the bound; the displayed
/// offset is `bound + resist(raw)`. Exists only while dragging.
#[derive(Debug, Clone, Copy, Default)]
pub struct PullState {
    pub raw_x: f32,
    pub raw_y: f32,
    pub x_pulling: bool,
    pub y_pulling: bool,
}

impl PullState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn pulling(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.x_pulling,
            Axis::Vertical => self.y_pulling,
        }
    }

    pub fn raw(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.raw_x,
            Axis::Vertical => self.raw_y,
        }
    }

    pub fn set(&mut self, axis: Axis, raw: f32, pulling: bool) {
        match axis {
            Axis::Horizontal => {
                self.raw_x = raw;
                self.x_pulling = pulling;
            }
            Axis::Vertical => {
                self.raw_y = raw;
                self.y_pulling = pulling;
            }
        }
    }
}
