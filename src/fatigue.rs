//! Bilinear S-N fatigue-life model.
//!
//! The curve is piecewise log-linear in (ln N, strength) space with three
//! segments: a low-cycle segment from `(1, Sut)` to the low-cycle knee at
//! `(Nlow, Sy)`, a high-cycle segment from there to the endurance knee at
//! `(Nend, Se)`, and the flat endurance plateau beyond. Strengths carry
//! whatever unit the caller uses, cycle counts are plain `f64`.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Fits `strength = slope * ln(n) + intercept` through two curve points.
fn log_fit(point_0: (f64, f64), point_1: (f64, f64)) -> (f64, f64) {
    let (n_0, s_0) = point_0;
    let (n_1, s_1) = point_1;
    let slope = (s_0 - s_1) / (n_0.ln() - n_1.ln());
    let intercept = s_1 - slope * n_1.ln();
    (slope, intercept)
}

/// Material S-N curve parameters.
///
/// `Default` carries the values of a common test alloy in kpsi, handy for
/// exploratory use.
///
/// # Examples
///
/// ```
/// use stresscheck::fatigue::SnCurve;
///
/// let curve = SnCurve::default();
/// let strength = curve.fatigue_strength(1.0e4);
/// assert!((strength - 73.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnCurve {
    /// Ultimate tensile strength, the curve value at one cycle.
    pub ultimate_strength: f64,
    /// Yield strength, the curve value at the low-cycle knee.
    pub yield_strength: f64,
    /// Endurance strength, the plateau beyond the endurance knee.
    pub endurance_strength: f64,
    /// Cycle count at the knee between the low- and high-cycle segments.
    pub low_cycle_knee: f64,
    /// Cycle count at the knee where the curve flattens out.
    pub endurance_knee: f64,
}

impl Default for SnCurve {
    fn default() -> Self {
        SnCurve {
            ultimate_strength: 110.0,
            yield_strength: 95.0,
            endurance_strength: 40.0,
            low_cycle_knee: 1.0e2,
            endurance_knee: 1.0e7,
        }
    }
}

impl SnCurve {
    /// Validates the curve parameters: strengths must be positive and
    /// monotonically ordered, knees must bracket a nonempty high-cycle
    /// segment.
    pub fn validate(&self) -> Result<()> {
        if self.endurance_strength <= 0.0 {
            return Err(anyhow!(
                "endurance_strength must be greater than 0.0, got {}",
                self.endurance_strength
            ));
        }
        if self.yield_strength < self.endurance_strength {
            return Err(anyhow!(
                "yield_strength must be at least endurance_strength, got {} < {}",
                self.yield_strength,
                self.endurance_strength
            ));
        }
        if self.ultimate_strength < self.yield_strength {
            return Err(anyhow!(
                "ultimate_strength must be at least yield_strength, got {} < {}",
                self.ultimate_strength,
                self.yield_strength
            ));
        }
        if self.low_cycle_knee <= 1.0 {
            return Err(anyhow!(
                "low_cycle_knee must be greater than 1, got {}",
                self.low_cycle_knee
            ));
        }
        if self.endurance_knee <= self.low_cycle_knee {
            return Err(anyhow!(
                "endurance_knee must be greater than low_cycle_knee, got {} <= {}",
                self.endurance_knee,
                self.low_cycle_knee
            ));
        }
        Ok(())
    }

    /// The fatigue strength the material sustains for `cycles` load cycles.
    ///
    /// Cycle counts past the endurance knee (and any negative input) land on
    /// the endurance plateau.
    pub fn fatigue_strength(&self, cycles: f64) -> f64 {
        if cycles >= 0.0 && cycles < self.low_cycle_knee {
            let (slope, intercept) = log_fit(
                (1.0, self.ultimate_strength),
                (self.low_cycle_knee, self.yield_strength),
            );
            slope * cycles.ln() + intercept
        } else if cycles >= self.low_cycle_knee && cycles < self.endurance_knee {
            let (slope, intercept) = log_fit(
                (self.low_cycle_knee, self.yield_strength),
                (self.endurance_knee, self.endurance_strength),
            );
            slope * cycles.ln() + intercept
        } else {
            self.endurance_strength
        }
    }

    /// The cycle count at which fatigue failure is expected under a fully
    /// reversed stress amplitude of `strength`.
    ///
    /// Amplitudes at or below the endurance strength return the endurance
    /// knee; life beyond it is unbounded and callers treat the knee as the
    /// infinite-life marker.
    pub fn cycles_to_failure(&self, strength: f64) -> f64 {
        if strength <= self.endurance_strength {
            self.endurance_knee
        } else if strength < self.yield_strength {
            let (slope, intercept) = log_fit(
                (self.low_cycle_knee, self.yield_strength),
                (self.endurance_knee, self.endurance_strength),
            );
            ((strength - intercept) / slope).exp()
        } else {
            let (slope, intercept) = log_fit(
                (1.0, self.ultimate_strength),
                (self.low_cycle_knee, self.yield_strength),
            );
            ((strength - intercept) / slope).exp()
        }
    }

    /// The three segment endpoints `(cycles, strength)`, for callers that
    /// draw the curve.
    pub fn breakpoints(&self) -> [(f64, f64); 3] {
        [
            (1.0, self.ultimate_strength),
            (self.low_cycle_knee, self.yield_strength),
            (self.endurance_knee, self.endurance_strength),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_strength_at_segment_anchors() {
        let curve = SnCurve::default();
        assert_relative_eq!(curve.fatigue_strength(1.0), 110.0, epsilon = 1e-9);
        assert_relative_eq!(curve.fatigue_strength(1.0e2), 95.0, epsilon = 1e-9);
        assert_relative_eq!(curve.fatigue_strength(1.0e7), 40.0, epsilon = 1e-9);
        assert_relative_eq!(curve.fatigue_strength(1.0e9), 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_high_cycle_interpolation() {
        // two decades past the low-cycle knee on the default curve
        let curve = SnCurve::default();
        assert_relative_eq!(curve.fatigue_strength(1.0e4), 73.0, epsilon = 1e-9);
    }

    #[test]
    fn test_continuity_at_knees() {
        let curve = SnCurve::default();
        let below_low = curve.fatigue_strength(curve.low_cycle_knee - 1e-6);
        assert_relative_eq!(below_low, curve.yield_strength, epsilon = 1e-5);
        let below_end = curve.fatigue_strength(curve.endurance_knee - 1.0);
        assert_relative_eq!(below_end, curve.endurance_strength, epsilon = 1e-5);
    }

    #[test]
    fn test_cycle_inversion_round_trip() {
        let curve = SnCurve::default();

        // high-cycle segment
        let cycles = curve.cycles_to_failure(73.0);
        assert_relative_eq!(cycles, 1.0e4, max_relative = 1e-9);

        // low-cycle segment
        let cycles = curve.cycles_to_failure(100.0);
        assert!(cycles > 1.0 && cycles < curve.low_cycle_knee);
        assert_relative_eq!(curve.fatigue_strength(cycles), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inversion_boundaries() {
        let curve = SnCurve::default();
        assert_relative_eq!(
            curve.cycles_to_failure(curve.yield_strength),
            curve.low_cycle_knee,
            max_relative = 1e-9
        );
        // at or below the endurance strength life is unbounded
        assert_eq!(curve.cycles_to_failure(40.0), curve.endurance_knee);
        assert_eq!(curve.cycles_to_failure(12.5), curve.endurance_knee);
    }

    #[test]
    fn test_negative_cycles_land_on_plateau() {
        let curve = SnCurve::default();
        assert_eq!(curve.fatigue_strength(-5.0), curve.endurance_strength);
    }

    #[test]
    fn test_validation() {
        assert!(SnCurve::default().validate().is_ok());

        let inverted = SnCurve {
            yield_strength: 120.0,
            ..SnCurve::default()
        };
        assert!(inverted.validate().is_err());

        let no_plateau = SnCurve {
            endurance_knee: 50.0,
            ..SnCurve::default()
        };
        assert!(no_plateau.validate().is_err());

        let degenerate = SnCurve {
            low_cycle_knee: 1.0,
            ..SnCurve::default()
        };
        assert!(degenerate.validate().is_err());
    }
}
