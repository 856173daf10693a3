//! Scroll delegate
//!
//! Hosts observe the scroll view through [`ScrollViewDelegate`]. Every
//! callback has an empty default body, so implementors override only
//! what they care about; [`DelegateCapabilities`] lets an implementor
//! declare up front which callbacks it actually handles, and the view
//! caches that record when the delegate is attached so hot paths skip
//! the dynamic dispatch for unhandled notifications.

use std::cell::RefCell;
use std::rc::Rc;

use drift_core::Point;

use crate::config::Axis;

/// A delegate shared with the scroll view. The view keeps only a weak
/// reference, so dropping the host's `Rc` detaches the delegate.
pub type SharedDelegate = Rc<RefCell<dyn ScrollViewDelegate>>;

/// Which delegate callbacks an implementor handles. Cached by the view
/// once at attach time; a flag left `false` means the corresponding
/// callback is never invoked on that delegate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelegateCapabilities {
    pub did_scroll: bool,
    pub will_begin_dragging: bool,
    pub did_end_dragging: bool,
    pub will_show_indicator: bool,
    pub did_show_indicator: bool,
    pub will_hide_indicator: bool,
    pub did_hide_indicator: bool,
}

impl DelegateCapabilities {
    /// All callbacks handled (the default for delegates that do not
    /// override [`ScrollViewDelegate::capabilities`]).
    pub fn all() -> Self {
        Self {
            did_scroll: true,
            will_begin_dragging: true,
            did_end_dragging: true,
            will_show_indicator: true,
            did_show_indicator: true,
            will_hide_indicator: true,
            did_hide_indicator: true,
        }
    }

    /// No callbacks handled.
    pub fn none() -> Self {
        Self {
            did_scroll: false,
            will_begin_dragging: false,
            did_end_dragging: false,
            will_show_indicator: false,
            did_show_indicator: false,
            will_hide_indicator: false,
            did_hide_indicator: false,
        }
    }
}

impl Default for DelegateCapabilities {
    fn default() -> Self {
        Self::all()
    }
}

/// Observer for scroll view activity. All methods default to no-ops.
pub trait ScrollViewDelegate {
    /// Declare which callbacks this delegate handles. Queried once when
    /// the delegate is attached.
    fn capabilities(&self) -> DelegateCapabilities {
        DelegateCapabilities::all()
    }

    /// The content offset changed. Fired at most once per offset change,
    /// with the new (unrounded) offset.
    fn did_scroll(&mut self, _offset: Point) {}

    /// A drag gesture is about to start tracking the pointer.
    fn will_begin_dragging(&mut self) {}

    /// The drag gesture ended. Fired after the follow-on mode (throw,
    /// bounce, or idle) is chosen but before the first frame advances
    /// it, so `decelerating` already reflects the follow-on motion.
    fn did_end_dragging(&mut self) {}

    /// The indicator on `axis` is about to become visible.
    fn will_show_scroll_indicator(&mut self, _axis: Axis) {}

    /// The indicator on `axis` became visible.
    fn did_show_scroll_indicator(&mut self, _axis: Axis) {}

    /// The indicator on `axis` is about to hide.
    fn will_hide_scroll_indicator(&mut self, _axis: Axis) {}

    /// The indicator on `axis` hid.
    fn did_hide_scroll_indicator(&mut self, _axis: Axis) {}
}
