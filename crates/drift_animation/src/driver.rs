//! Frame tick capability
//!
//! The scroll core never talks to a platform timer directly. The host
//! injects a `FrameTimer`: a periodic 60 Hz source that, while started,
//! calls back into the scroll view once per frame. The view starts it
//! lazily when an animation becomes active and stops it when everything
//! has settled, so an idle view causes no wakeups. Tests drive frames
//! synchronously instead of depending on wall-clock timing.

/// Duration of one animation frame (fixed 60 Hz tick).
pub const FRAME_DURATION: f32 = 1.0 / 60.0;

/// Start/stop handle for a periodic frame source owned by the host.
///
/// While started, the host must invoke the scroll view's tick entry
/// point once per frame on the same thread that mutates the view.
pub trait FrameTimer {
    fn start(&mut self);
    fn stop(&mut self);
}

/// A manually driven timer for hosts without a real frame source and for
/// tests: it only records whether the tick loop should be running.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualFrameTimer {
    running: bool,
}

impl ManualFrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl FrameTimer for ManualFrameTimer {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }
}
