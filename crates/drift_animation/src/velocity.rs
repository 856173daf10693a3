//! Pointer velocity estimation
//!
//! Tracks the recent drag samples and estimates the instantaneous
//! velocity at release. Samples older than a short window are discarded
//! so a pause before letting go yields near-zero velocity instead of
//! replaying a stale flick.

use smallvec::SmallVec;

/// One recorded drag movement: the delta applied and when it happened
/// (seconds, host-monotonic).
#[derive(Debug, Clone, Copy)]
pub struct ScrollSample {
    pub dx: f32,
    pub dy: f32,
    pub t: f64,
}

/// Samples older than this (seconds) no longer contribute to the
/// velocity estimate.
const SAMPLE_WINDOW: f64 = 0.1;

/// Time spans below this are treated as zero velocity rather than
/// dividing by a near-zero dt.
const MIN_TIME_SPAN: f64 = 1.0e-4;

/// Velocity estimator over a short ring of recent drag samples.
#[derive(Debug, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[ScrollSample; 8]>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a drag delta at time `t`.
    pub fn push(&mut self, dx: f32, dy: f32, t: f64) {
        self.prune(t);
        self.samples.push(ScrollSample { dx, dy, t });
    }

    /// Forget everything (drag session ended or was cancelled).
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Estimate `(vx, vy)` in units per second as of time `now`.
    ///
    /// Each sample's delta covers the interval since its predecessor, so
    /// the first retained sample only anchors the time span. Returns
    /// zero when fewer than two fresh samples remain or when the span is
    /// too small to divide by.
    pub fn estimate(&mut self, now: f64) -> (f32, f32) {
        self.prune(now);

        let Some(first) = self.samples.first() else {
            return (0.0, 0.0);
        };
        let Some(last) = self.samples.last() else {
            return (0.0, 0.0);
        };

        let span = last.t - first.t;
        if self.samples.len() < 2 || span < MIN_TIME_SPAN {
            return (0.0, 0.0);
        }

        let mut dx = 0.0f32;
        let mut dy = 0.0f32;
        for sample in self.samples.iter().skip(1) {
            dx += sample.dx;
            dy += sample.dy;
        }

        (dx / span as f32, dy / span as f32)
    }

    fn prune(&mut self, now: f64) {
        self.samples.retain(|s| now - s.t <= SAMPLE_WINDOW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_drag_velocity() {
        let mut tracker = VelocityTracker::new();
        // 5 px every 10 ms -> 500 px/s
        for i in 0..8 {
            tracker.push(0.0, 5.0, i as f64 * 0.01);
        }
        let (vx, vy) = tracker.estimate(0.07);
        assert_eq!(vx, 0.0);
        assert!((vy - 500.0).abs() < 10.0, "vy = {vy}");
    }

    #[test]
    fn test_pause_before_release_yields_zero() {
        let mut tracker = VelocityTracker::new();
        for i in 0..8 {
            tracker.push(0.0, 5.0, i as f64 * 0.01);
        }
        // Finger held still for 300 ms before release
        let (vx, vy) = tracker.estimate(0.07 + 0.3);
        assert_eq!((vx, vy), (0.0, 0.0));
    }

    #[test]
    fn test_near_zero_time_span_is_zero_velocity() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0.0, 100.0, 1.0);
        tracker.push(0.0, 100.0, 1.0);
        let (_, vy) = tracker.estimate(1.0);
        assert_eq!(vy, 0.0);
    }

    #[test]
    fn test_single_sample_is_zero_velocity() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0.0, 40.0, 0.5);
        assert_eq!(tracker.estimate(0.5), (0.0, 0.0));
    }

    #[test]
    fn test_clear_resets_tracker() {
        let mut tracker = VelocityTracker::new();
        for i in 0..4 {
            tracker.push(3.0, 0.0, i as f64 * 0.01);
        }
        tracker.clear();
        assert_eq!(tracker.estimate(0.04), (0.0, 0.0));
    }
}
