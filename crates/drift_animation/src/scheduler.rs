//! Animation scheduler
//!
//! Owns the pool of active springs and steps them each frame. The scroll
//! view keeps `SpringId` handles for whichever springs its current
//! animation mode needs and reads their values back after each tick.

use crate::spring::Spring;
use slotmap::{new_key_type, SlotMap};
use tracing::trace;

new_key_type! {
    pub struct SpringId;
}

/// Spring pool ticked by the animation driver.
#[derive(Default)]
pub struct AnimationScheduler {
    springs: SlotMap<SpringId, Spring>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_spring(&mut self, spring: Spring) -> SpringId {
        let id = self.springs.insert(spring);
        trace!(?id, target = spring.target(), "spring added");
        id
    }

    pub fn get_spring(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id)
    }

    pub fn get_spring_mut(&mut self, id: SpringId) -> Option<&mut Spring> {
        self.springs.get_mut(id)
    }

    pub fn remove_spring(&mut self, id: SpringId) -> Option<Spring> {
        let spring = self.springs.remove(id);
        if spring.is_some() {
            trace!(?id, "spring removed");
        }
        spring
    }

    /// Advance all springs by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        for (_, spring) in self.springs.iter_mut() {
            spring.step(dt);
        }
    }

    /// Check if any spring is still in motion
    pub fn has_active_animations(&self) -> bool {
        self.springs.iter().any(|(_, s)| !s.is_settled())
    }

    /// Get the number of springs in the scheduler
    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }
}
