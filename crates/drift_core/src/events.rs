//! Event identifiers
//!
//! Shared event-type ids consumed by the scroll gesture state machine.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// Drag began (pointer down + first move)
    pub const DRAG: EventType = 6;
    /// Drag ended (pointer up after drag)
    pub const DRAG_END: EventType = 7;
    /// Scroll delta applied during an active gesture
    pub const SCROLL: EventType = 30;
    /// Scroll gesture ended with residual velocity (momentum follows)
    pub const SCROLL_END: EventType = 31;
    /// An animated offset crossed a content bound
    pub const HIT_EDGE: EventType = 32;
    /// The active animation came to rest
    pub const SETTLED: EventType = 33;
}
