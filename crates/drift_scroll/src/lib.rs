//! Drift scroll core
//!
//! The scrolling-physics and indicator-management heart of a scrollable
//! container: it owns a content offset larger than the visible bounds,
//! turns drag gestures into throws with momentum and rubber-band pulls
//! with spring snap-back, and coordinates scroll-indicator visibility
//! and delegate notifications.
//!
//! Rendering, the view tree, and event plumbing are the host's job; the
//! host feeds pointer gestures in, injects a [`FrameTimer`], and reads
//! the offset back out each frame.
//!
//! The rubber-band physics deliberately differ from native scroll
//! views:
//!
//! 1. The pull resistance is not a fixed 0.5x multiplier of the
//!    excursion. It is exponential, so the harder you pull the stronger
//!    it tugs.
//! 2. While pulled out, pushing back the other way is unresisted: the
//!    raw excursion unwinds one-to-one, so the view never feels like it
//!    is fighting a change of mind.
//!
//! [`FrameTimer`]: drift_animation::FrameTimer

pub mod config;
pub mod delegate;
pub mod indicator;
pub mod state;
pub mod view;

pub use config::{Axis, IndicatorStyle, IndicatorVisibility, ScrollConfig};
pub use delegate::{DelegateCapabilities, ScrollViewDelegate, SharedDelegate};
pub use state::{AnimationMode, AxisMotion, ScrollPhase};
pub use view::ScrollView;
