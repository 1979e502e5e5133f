//! Bounded (0,1) <-> unbounded (logit) mapping.

/// Input clamp applied before exponentiation in [`to_bounded`].
pub const LOGIT_CLAMP: f64 = 60.0;

/// Distance from 0 and 1 that [`to_unbounded`] clamps its input to.
pub const BOUND_EPSILON: f64 = 1e-9;

/// Largest `f64` strictly below 1.0 (1 - 2^-53).
const LARGEST_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Map an unbounded value into the open interval (0, 1).
///
/// The input is clamped to `[-LOGIT_CLAMP, LOGIT_CLAMP]`. Near the upper clamp
/// the logistic rounds to exactly 1.0 in binary64, so the result is capped at
/// the largest representable value below 1. NaN maps to the midpoint.
pub fn to_bounded(z: f64) -> f64 {
    if z.is_nan() {
        return 0.5;
    }
    let z = z.clamp(-LOGIT_CLAMP, LOGIT_CLAMP);
    (1.0 / (1.0 + (-z).exp())).min(LARGEST_BELOW_ONE)
}

/// Map a bounded value back into unbounded space.
///
/// The input is clamped to `[BOUND_EPSILON, 1 - BOUND_EPSILON]`, so the result
/// always lies within roughly +/-20.72. NaN maps to 0.
pub fn to_unbounded(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    let x = x.clamp(BOUND_EPSILON, 1.0 - BOUND_EPSILON);
    (x / (1.0 - x)).ln()
}
