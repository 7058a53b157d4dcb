//! Static failure theories for ductile materials.
//!
//! Ductile parts fail by yielding, so both theories here compare an
//! equivalent stress against the tensile yield strength. The inputs are the
//! in-plane principal stresses of a planar state; the out-of-plane principal
//! stress is zero.

use crate::material::DuctileStrength;
use crate::safety::{FactorOfSafety, SafetyResult};
use crate::stress::{tresca_equivalent, von_mises_equivalent};

/// Distortion-energy (von Mises) theory.
///
/// The factor of safety is the yield strength over the von Mises equivalent
/// stress. A stress-free state has no defined factor and reports
/// [`FactorOfSafety::Infinite`].
pub fn von_mises(sigma_a: f64, sigma_b: f64, material: &DuctileStrength) -> SafetyResult {
    let equivalent = von_mises_equivalent(sigma_a, sigma_b);
    let factor = if equivalent == 0.0 {
        FactorOfSafety::Infinite
    } else {
        FactorOfSafety::Finite(material.yield_strength / equivalent)
    };
    SafetyResult {
        equivalent_stress: equivalent,
        factor_of_safety: factor,
    }
}

/// Maximum-shear-stress (Tresca) theory.
///
/// The reported equivalent stress is the maximum shear between the two
/// in-plane principal stresses. The factor of safety accounts for the
/// out-of-plane zero: when both principal stresses share a sign, the largest
/// shear plane runs against that zero instead.
pub fn tresca(sigma_a: f64, sigma_b: f64, material: &DuctileStrength) -> SafetyResult {
    let (sigma_1, sigma_2) = if sigma_b > sigma_a {
        (sigma_b, sigma_a)
    } else {
        (sigma_a, sigma_b)
    };
    let shear = tresca_equivalent(sigma_1, sigma_2);

    let factor = if sigma_1 >= 0.0 && sigma_2 >= 0.0 {
        // both tensile, governing shear is sigma_1 against the zero stress
        if sigma_1 == 0.0 {
            FactorOfSafety::Infinite
        } else {
            FactorOfSafety::Finite(material.yield_strength / sigma_1)
        }
    } else if sigma_1 >= 0.0 && sigma_2 < 0.0 {
        // opposite signs, the in-plane shear governs
        FactorOfSafety::Finite(material.yield_strength / (2.0 * shear))
    } else {
        // both compressive, governing shear is sigma_2 against the zero stress
        FactorOfSafety::Finite(-material.yield_strength / sigma_2)
    };

    SafetyResult {
        equivalent_stress: shear,
        factor_of_safety: factor,
    }
}
