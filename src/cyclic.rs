//! Safety criteria for cyclic loading with a nonzero mean stress.
//!
//! Each criterion compares an alternating/midrange stress pair against a
//! failure envelope in the (midrange, alternating) plane and reports the
//! factor by which the load could scale before crossing it. The envelopes
//! share the endurance strength on the alternating axis and differ in how
//! they fall off towards the midrange axis.
//!
//! Every denominator carries a small guard term, so the criteria stay
//! defined for zero loads and never divide by an exact zero.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::fatigue::SnCurve;
use crate::numeric::{guarded_div, LINEAR_GUARD, QUADRATIC_GUARD};
use crate::safety::FactorOfSafety;

/// A cyclic load decomposed into its alternating and midrange components,
/// both non-negative magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CyclicLoad {
    /// Stress amplitude about the mean.
    pub alternating: f64,
    /// Mean (midrange) stress of the cycle.
    pub midrange: f64,
}

impl CyclicLoad {
    pub fn new(alternating: f64, midrange: f64) -> Self {
        CyclicLoad {
            alternating,
            midrange,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.alternating < 0.0 {
            return Err(anyhow!(
                "alternating must not be negative, got {}",
                self.alternating
            ));
        }
        if self.midrange < 0.0 {
            return Err(anyhow!(
                "midrange must not be negative, got {}",
                self.midrange
            ));
        }
        Ok(())
    }
}

/// Modified-Goodman criterion: a straight envelope from the endurance
/// strength to the ultimate strength.
pub fn modified_goodman(load: &CyclicLoad, curve: &SnCurve) -> FactorOfSafety {
    let usage = guarded_div(load.alternating, curve.endurance_strength, LINEAR_GUARD)
        + guarded_div(load.midrange, curve.ultimate_strength, LINEAR_GUARD);
    FactorOfSafety::Finite(1.0 / (usage + LINEAR_GUARD))
}

/// Soderberg criterion: as Goodman but falling to the yield strength, the
/// most conservative of the three lines.
pub fn soderberg(load: &CyclicLoad, curve: &SnCurve) -> FactorOfSafety {
    let usage = guarded_div(load.alternating, curve.endurance_strength, LINEAR_GUARD)
        + guarded_div(load.midrange, curve.yield_strength, LINEAR_GUARD);
    FactorOfSafety::Finite(1.0 / (usage + LINEAR_GUARD))
}

/// Gerber criterion: a parabolic envelope through the same axis crossings as
/// Goodman.
///
/// The factor is the positive root of
/// `n^2 (Sm/Sut)^2 + n (Sa/Se) - 1 = 0`; the negative root has no physical
/// meaning and is discarded by construction.
pub fn gerber(load: &CyclicLoad, curve: &SnCurve) -> FactorOfSafety {
    let quadratic = guarded_div(load.midrange, curve.ultimate_strength, QUADRATIC_GUARD).powi(2);
    let linear = guarded_div(load.alternating, curve.endurance_strength, QUADRATIC_GUARD);
    let p = guarded_div(linear, quadratic, QUADRATIC_GUARD);
    let q = -1.0 / (quadratic + QUADRATIC_GUARD);
    FactorOfSafety::Finite(-p / 2.0 + ((p / 2.0).powi(2) - q).sqrt())
}

/// Goodman envelope endpoints, for plotting.
pub fn goodman_line(curve: &SnCurve) -> [(f64, f64); 2] {
    [
        (0.0, curve.endurance_strength),
        (curve.ultimate_strength, 0.0),
    ]
}

/// Soderberg envelope endpoints, for plotting.
pub fn soderberg_line(curve: &SnCurve) -> [(f64, f64); 2] {
    [(0.0, curve.endurance_strength), (curve.yield_strength, 0.0)]
}

/// First-cycle yield boundary, the line joining the yield strength on both
/// axes.
pub fn yield_line(curve: &SnCurve) -> [(f64, f64); 2] {
    [(0.0, curve.yield_strength), (curve.yield_strength, 0.0)]
}

/// Samples the Gerber parabola `Sa = Se (1 - (Sm/Sut)^2)` from the
/// alternating axis to the ultimate strength. At least two points are
/// produced.
pub fn gerber_curve(curve: &SnCurve, samples: usize) -> Vec<(f64, f64)> {
    let count = samples.max(2);
    (0..count)
        .map(|i| {
            let midrange = curve.ultimate_strength * i as f64 / (count - 1) as f64;
            let alternating = curve.endurance_strength
                * (1.0 - (midrange / curve.ultimate_strength).powi(2));
            (midrange, alternating)
        })
        .collect()
}

/// The load line through the origin with slope `Sa/Sm`, drawn out to
/// `extent` on the midrange axis.
pub fn load_line(load: &CyclicLoad, extent: f64) -> [(f64, f64); 2] {
    let slope = guarded_div(load.alternating, load.midrange, LINEAR_GUARD);
    [(0.0, 0.0), (extent, slope * extent)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_curve() -> SnCurve {
        SnCurve::default()
    }

    #[test]
    fn test_modified_goodman() {
        // usage 20/40 + 33/110 = 0.8
        let load = CyclicLoad::new(20.0, 33.0);
        let factor = modified_goodman(&load, &reference_curve());
        assert_relative_eq!(factor.value().unwrap(), 1.25, epsilon = 1e-6);
    }

    #[test]
    fn test_soderberg() {
        let curve = SnCurve {
            yield_strength: 90.0,
            ..SnCurve::default()
        };
        // usage 20/40 + 30/90 = 5/6
        let load = CyclicLoad::new(20.0, 30.0);
        let factor = soderberg(&load, &curve);
        assert_relative_eq!(factor.value().unwrap(), 1.2, epsilon = 1e-6);
    }

    #[test]
    fn test_soderberg_is_most_conservative() {
        let curve = reference_curve();
        for &(alternating, midrange) in &[(20.0, 33.0), (5.0, 70.0), (30.0, 10.0)] {
            let load = CyclicLoad::new(alternating, midrange);
            let goodman = modified_goodman(&load, &curve).value().unwrap();
            let soderberg = soderberg(&load, &curve).value().unwrap();
            assert!(soderberg <= goodman + 1e-9);
        }
    }

    #[test]
    fn test_gerber_root_satisfies_quadratic() {
        let curve = SnCurve {
            ultimate_strength: 100.0,
            ..SnCurve::default()
        };
        let load = CyclicLoad::new(20.0, 30.0);
        let n = gerber(&load, &curve).value().unwrap();
        // n^2 (30/100)^2 + n (20/40) - 1 = 0
        let residual = n.powi(2) * (load.midrange / curve.ultimate_strength).powi(2)
            + n * (load.alternating / curve.endurance_strength)
            - 1.0;
        assert!(n > 0.0);
        assert!(residual.abs() < 1e-6, "residual {}", residual);
        assert_relative_eq!(n, 1.5612498, epsilon = 1e-5);
    }

    #[test]
    fn test_gerber_bounds_goodman() {
        // the parabola lies outside the straight line for any mixed load
        let curve = reference_curve();
        for &(alternating, midrange) in &[(20.0, 33.0), (15.0, 60.0), (35.0, 5.0)] {
            let load = CyclicLoad::new(alternating, midrange);
            let gerber = gerber(&load, &curve).value().unwrap();
            let goodman = modified_goodman(&load, &curve).value().unwrap();
            assert!(gerber >= goodman - 1e-6);
        }
    }

    #[test]
    fn test_zero_midrange_reduces_to_endurance_ratio() {
        let curve = reference_curve();
        let load = CyclicLoad::new(20.0, 0.0);
        let gerber = gerber(&load, &curve).value().unwrap();
        let goodman = modified_goodman(&load, &curve).value().unwrap();
        assert_relative_eq!(gerber, 2.0, epsilon = 1e-4);
        assert_relative_eq!(goodman, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_unloaded_is_guarded_not_singular() {
        let load = CyclicLoad::new(0.0, 0.0);
        let factor = modified_goodman(&load, &reference_curve());
        assert!(factor.is_safe());
        assert!(factor.value().unwrap() > 1e7);
    }

    #[test]
    fn test_load_validation() {
        assert!(CyclicLoad::new(20.0, 0.0).validate().is_ok());
        assert!(CyclicLoad::new(-1.0, 10.0).validate().is_err());
        assert!(CyclicLoad::new(10.0, -0.5).validate().is_err());
    }

    #[test]
    fn test_envelope_polylines() {
        let curve = reference_curve();

        assert_eq!(goodman_line(&curve), [(0.0, 40.0), (110.0, 0.0)]);
        assert_eq!(soderberg_line(&curve), [(0.0, 40.0), (95.0, 0.0)]);
        assert_eq!(yield_line(&curve), [(0.0, 95.0), (95.0, 0.0)]);

        let parabola = gerber_curve(&curve, 5);
        assert_eq!(parabola.len(), 5);
        assert_relative_eq!(parabola[0].1, 40.0, epsilon = 1e-9);
        assert_relative_eq!(parabola[2].0, 55.0, epsilon = 1e-9);
        assert_relative_eq!(parabola[2].1, 30.0, epsilon = 1e-9);
        assert_relative_eq!(parabola[4].1, 0.0, epsilon = 1e-9);

        let line = load_line(&CyclicLoad::new(20.0, 40.0), 110.0);
        assert_relative_eq!(line[1].1, 55.0, epsilon = 1e-4);
    }
}
