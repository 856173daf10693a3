//! Scroll configuration
//!
//! All physics tunables live here as a plain structured record with
//! named fields; nothing is bit-packed and every constant has a
//! sensible default.

use drift_animation::{SpringConfig, DEFAULT_DECELERATION_RATE};

/// A scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The perpendicular axis.
    pub fn other(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Scroll indicator style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorStyle {
    /// Dark indicator suitable for light backgrounds (default)
    #[default]
    Dark,
    /// Light indicator suitable for dark backgrounds
    Light,
}

/// When a scroll indicator should be displayed.
///
/// Indicators are never displayed when the content does not exceed the
/// visible bounds on that axis, regardless of this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorVisibility {
    /// Never show the indicator
    Never,
    /// Show only while a drag, throw, bounce, or animated scroll is active
    WhileScrolling,
    /// Show only while the mouse is inside the scroll view
    WhileMouseInside,
    /// Always show the indicator (default)
    #[default]
    Always,
}

/// Configuration for scroll behavior
#[derive(Debug, Clone, Copy)]
pub struct ScrollConfig {
    /// Enable rubber-band pull and spring bounce at content edges
    pub bounces: bool,
    /// Allow vertical pull even when the content fits the bounds
    pub always_bounce_vertical: bool,
    /// Allow horizontal pull even when the content fits the bounds
    pub always_bounce_horizontal: bool,
    /// Master switch for drag/scroll input
    pub scroll_enabled: bool,
    /// Per-second velocity retention for throws (see `drift_animation::decay`)
    pub deceleration_rate: f32,
    /// Multiplier applied to the estimated release velocity when a throw starts
    pub throw_multiplier: f32,
    /// Minimum release speed (px/s) for a drag to become a throw
    pub min_throw_speed: f32,
    /// Speed (px/s) below which a throw is considered settled
    pub stop_speed: f32,
    /// Spring used for the bounce snap-back
    pub bounce_spring: SpringConfig,
    /// Spring used for animated `set_content_offset` glides
    pub glide_spring: SpringConfig,
    /// Pull saturation distance as a fraction of the viewport (0.0-0.5)
    pub max_overscroll: f32,
    /// Continuous-scroll speed gain: px/s of scrolling per px the drag
    /// point sits beyond the visible edge
    pub continuous_scroll_gain: f32,
    /// Continuous-scroll speed ceiling (px/s)
    pub max_continuous_scroll_speed: f32,
    /// Indicator style for both axes
    pub indicator_style: IndicatorStyle,
    /// Indicator thickness in px
    pub indicator_thickness: f32,
    /// Padding between indicator and view edge in px
    pub indicator_padding: f32,
    /// How long `flash_scroll_indicators` keeps the indicators up (seconds)
    pub flash_duration: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            bounces: true,
            always_bounce_vertical: false,
            always_bounce_horizontal: false,
            scroll_enabled: true,
            deceleration_rate: DEFAULT_DECELERATION_RATE,
            throw_multiplier: 1.0,
            min_throw_speed: 50.0,
            stop_speed: 10.0,
            // Elastic snap-back: very stiff, slightly overdamped spring
            // (critical damping for k=3000, m=1 is 2*sqrt(3000) ~ 109.5)
            // so release snaps home fast with no rebound
            bounce_spring: SpringConfig::new(3000.0, 110.0, 1.0),
            glide_spring: SpringConfig::snappy(),
            max_overscroll: 0.3,
            continuous_scroll_gain: 10.0,
            max_continuous_scroll_speed: 1200.0,
            indicator_style: IndicatorStyle::default(),
            indicator_thickness: 6.0,
            indicator_padding: 2.0,
            flash_duration: 1.0,
        }
    }
}

impl ScrollConfig {
    /// Config with rubber-band pull and bounce disabled: scrolling stops
    /// hard at the content boundary.
    pub fn no_bounce() -> Self {
        Self {
            bounces: false,
            ..Default::default()
        }
    }

    /// Config with a softer, wobblier bounce spring
    pub fn gentle_bounce() -> Self {
        Self {
            bounce_spring: SpringConfig::new(900.0, 50.0, 1.0),
            ..Default::default()
        }
    }
}
