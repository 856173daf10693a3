//! Momentum decay
//!
//! Exponential velocity decay used for throw (momentum) scrolling. The
//! rate is a per-second retention factor: after one second a throw keeps
//! `rate` of its velocity, after `dt` seconds it keeps `rate^dt`.

/// Default per-second velocity retention. Tuned so a flick decays with an
/// iOS-like momentum feel when integrated at 60 Hz.
pub const DEFAULT_DECELERATION_RATE: f32 = 0.135;

/// Decay `velocity` over `dt` seconds at the given per-second retention
/// rate. Rates outside (0, 1] are clamped so a misconfigured rate can
/// never accelerate the throw.
pub fn decay_velocity(velocity: f32, rate: f32, dt: f32) -> f32 {
    let rate = rate.clamp(1e-6, 1.0);
    velocity * rate.powf(dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_matches_power_law_accumulation() {
        // Frame-by-frame decay must equal v * rate^(n * dt)
        let rate = DEFAULT_DECELERATION_RATE;
        let dt = 1.0 / 60.0;

        let mut v = 2000.0f32;
        for _ in 0..60 {
            v = decay_velocity(v, rate, dt);
        }

        let expected = 2000.0 * rate.powf(1.0);
        assert!(
            (v - expected).abs() < expected * 1e-3,
            "after 1s of frames v={v}, expected {expected}"
        );
    }

    #[test]
    fn test_decay_preserves_sign() {
        let v = decay_velocity(-1200.0, DEFAULT_DECELERATION_RATE, 1.0 / 60.0);
        assert!(v < 0.0);
        assert!(v.abs() < 1200.0);
    }

    #[test]
    fn test_decay_clamps_bad_rates() {
        // A rate above 1.0 must not speed the throw up
        let v = decay_velocity(100.0, 1.5, 1.0 / 60.0);
        assert!(v <= 100.0);

        // Zero/negative rates kill the velocity quickly but stay finite
        let v = decay_velocity(100.0, 0.0, 1.0 / 60.0);
        assert!(v.is_finite());
        assert!(v < 100.0);
    }
}
