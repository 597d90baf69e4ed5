//! The shared "attention" profile.
//!
//! Every layer that intensifies toward the middle of a section reads [`focus`]; scaling and offsets
//! happen at the consumer, never by reshaping the ramp.

/// Fraction of a window spent ramping in (and, mirrored, ramping out).
pub const FOCUS_RAMP: f64 = 0.2;

/// Triangular 0 -> 1 -> 0 ramp with a flat plateau over the middle 60% of `local_t`.
pub fn focus(local_t: f64) -> f64 {
    let v = if local_t <= FOCUS_RAMP {
        local_t / FOCUS_RAMP
    } else if local_t <= 1.0 - FOCUS_RAMP {
        1.0
    } else {
        (1.0 - local_t) / FOCUS_RAMP
    };
    crate::foundation::math::clamp01(v)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/focus.rs"]
mod tests;
