//! Shared numeric guards for the failure-theory and fatigue formulas.
//!
//! Every theory in this crate divides by a stress or strength that a caller
//! can legitimately drive to zero. The constants and helpers here are used by
//! all of them so the near-zero behavior is identical across theories.

/// Stress magnitudes below this are treated as numerically zero.
pub const NEAR_ZERO_STRESS: f64 = 1e-6;

/// Replacement magnitude for a near-zero stress before a ratio is formed.
pub const CLAMPED_STRESS: f64 = 1e-4;

/// Divisor guard for the linear cyclic criteria (Goodman, Soderberg).
pub const LINEAR_GUARD: f64 = 1e-8;

/// Divisor guard for the Gerber quadratic.
pub const QUADRATIC_GUARD: f64 = 1e-9;

/// Replaces a stress within [`NEAR_ZERO_STRESS`] of zero by [`CLAMPED_STRESS`],
/// so that ratios formed from it stay finite. Values outside the window pass
/// through unchanged.
pub fn clamp_near_zero(stress: f64) -> f64 {
    if stress < NEAR_ZERO_STRESS && stress > -NEAR_ZERO_STRESS {
        CLAMPED_STRESS
    } else {
        stress
    }
}

/// Division with a small positive guard added to the denominator.
pub fn guarded_div(numerator: f64, denominator: f64, guard: f64) -> f64 {
    numerator / (denominator + guard)
}

/// Rounds `value` to `digits` decimal digits.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp_near_zero() {
        assert_eq!(clamp_near_zero(0.0), CLAMPED_STRESS);
        assert_eq!(clamp_near_zero(1e-7), CLAMPED_STRESS);
        assert_eq!(clamp_near_zero(-1e-7), CLAMPED_STRESS);
        assert_eq!(clamp_near_zero(1e-6), 1e-6);
        assert_eq!(clamp_near_zero(-1e-6), -1e-6);
        assert_eq!(clamp_near_zero(50.0), 50.0);
        assert_eq!(clamp_near_zero(-50.0), -50.0);
    }

    #[test]
    fn test_guarded_div() {
        assert_relative_eq!(guarded_div(1.0, 0.0, 1e-8), 1e8, epsilon = 1e-3);
        assert_relative_eq!(guarded_div(10.0, 5.0, 1e-8), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456789, 6), 1.234568);
        assert_eq!(round_to(1.23456789, 2), 1.23);
        assert_eq!(round_to(-1.125, 2), -1.13);
        assert_eq!(round_to(100.0, 6), 100.0);
    }
}
