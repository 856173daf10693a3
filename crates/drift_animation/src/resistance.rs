//! Pull resistance
//!
//! Rubber-band curve applied while the user drags past the content
//! bounds. Unlike the fixed 0.5x multiplier of native scroll views, the
//! curve is a saturating exponential: the harder the pull, the stronger
//! it tugs back, and the displayed excursion can never exceed `limit`.
//!
//! The raw pointer excursion is accumulated unresisted by the caller;
//! only the *displayed* offset goes through this curve. Reversing the
//! drag therefore unwinds the pull one-to-one instead of fighting the
//! user.

/// Map a raw overscroll excursion to its displayed (resisted) distance.
///
/// `resist(x) = limit * (1 - exp(-|x| / limit))`, sign-preserving.
///
/// Properties: passes through the origin, strictly monotonic, always
/// smaller in magnitude than the raw excursion, and asymptotic to
/// `limit`. `limit` is the tunable saturation distance (typically a
/// fraction of the viewport).
pub fn resist(excursion: f32, limit: f32) -> f32 {
    if limit <= 0.0 || excursion == 0.0 {
        return 0.0;
    }
    excursion.signum() * limit * (1.0 - (-excursion.abs() / limit).exp())
}

/// Inverse of [`resist`]: recover the raw excursion that produces a
/// given displayed distance. Used when a drag grabs the content while
/// it is already displaced (mid-bounce), so the pull continues from an
/// equivalent raw position.
///
/// Displayed distances at or beyond `limit` (which `resist` can only
/// approach asymptotically) are capped to a large finite excursion.
pub fn unresist(displayed: f32, limit: f32) -> f32 {
    if limit <= 0.0 || displayed == 0.0 {
        return 0.0;
    }
    let ratio = (displayed.abs() / limit).min(0.9999);
    displayed.signum() * -limit * (1.0 - ratio).ln()
}
