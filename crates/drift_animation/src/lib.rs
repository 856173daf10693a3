//! Drift Animation System
//!
//! Spring physics, momentum decay, and rubber-band resistance for the
//! scroll core.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Momentum Decay**: exponential velocity decay for throw scrolling
//! - **Pull Resistance**: saturating-exponential rubber-band curve
//! - **Velocity Tracking**: pointer-sample velocity estimation with a
//!   staleness cutoff
//! - **Interruptible**: springs accept an initial velocity so an
//!   interrupted throw hands its momentum to the bounce

pub mod decay;
pub mod driver;
pub mod resistance;
pub mod scheduler;
pub mod spring;
pub mod velocity;

pub use decay::{decay_velocity, DEFAULT_DECELERATION_RATE};
pub use driver::{FrameTimer, ManualFrameTimer, FRAME_DURATION};
pub use resistance::{resist, unresist};
pub use scheduler::{AnimationScheduler, SpringId};
pub use spring::{Spring, SpringConfig};
pub use velocity::VelocityTracker;
