//! Damped spring physics
//!
//! A single-value spring integrated with RK4. Springs drive the bounce
//! snap-back and animated offset changes; they accept an initial velocity
//! so an interrupted throw can hand its momentum over.

/// Spring tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Spring stiffness (restoring force per unit displacement)
    pub stiffness: f32,
    /// Damping coefficient (opposing force per unit velocity)
    pub damping: f32,
    /// Mass of the animated value
    pub mass: f32,
    /// Displacement below which the spring may settle
    pub rest_delta: f32,
    /// Speed below which the spring may settle
    pub rest_speed: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }

    /// Soft spring with a slow, smooth approach
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Firm spring with minimal overshoot
    pub fn stiff() -> Self {
        Self::new(210.0, 20.0, 1.0)
    }

    /// Fast spring for quick but smooth transitions
    pub fn snappy() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Underdamped spring with visible oscillation
    pub fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(170.0, 26.0, 1.0)
    }
}

/// A damped spring animating a single f32 value toward a target.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring at rest at `value`.
    pub fn new(config: SpringConfig, value: f32) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Seed the spring with an initial velocity (momentum hand-off).
    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// True once displacement and speed are both below the rest thresholds.
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Advance the spring by `dt` seconds using RK4 integration.
    ///
    /// When the spring comes to rest it snaps exactly onto the target so
    /// `value()` never reports a residual sub-epsilon displacement.
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let accel = |x: f32, v: f32| -> f32 {
            (-self.config.stiffness * (x - self.target) - self.config.damping * v)
                / self.config.mass
        };

        let (x0, v0) = (self.value, self.velocity);

        let k1x = v0;
        let k1v = accel(x0, v0);

        let k2x = v0 + 0.5 * dt * k1v;
        let k2v = accel(x0 + 0.5 * dt * k1x, v0 + 0.5 * dt * k1v);

        let k3x = v0 + 0.5 * dt * k2v;
        let k3v = accel(x0 + 0.5 * dt * k2x, v0 + 0.5 * dt * k2v);

        let k4x = v0 + dt * k3v;
        let k4v = accel(x0 + dt * k3x, v0 + dt * k3v);

        self.value = x0 + (dt / 6.0) * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v0 + (dt / 6.0) * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}
