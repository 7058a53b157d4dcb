//! Static failure theories for brittle materials.
//!
//! Brittle parts fracture rather than yield, and usually carry far more
//! compression than tension. Each theory takes the two in-plane principal
//! stresses and a [`BrittleStrength`], locates the governing region of its
//! failure envelope, and reports the governing stress together with the
//! factor of safety against fracture.
//!
//! Principal stresses with a magnitude below `1e-6` are clamped to a small
//! positive value first, so the region ratios stay well defined. Factors of
//! safety are reported rounded to two decimals, as positive magnitudes.

use crate::material::BrittleStrength;
use crate::numeric::{clamp_near_zero, round_to};
use crate::safety::{FactorOfSafety, SafetyResult};

fn fracture_result(governing_stress: f64, raw_factor: f64) -> SafetyResult {
    SafetyResult {
        equivalent_stress: governing_stress,
        factor_of_safety: FactorOfSafety::Finite(round_to(raw_factor, 2).abs()),
    }
}

/// Maximum-normal-stress theory.
///
/// The envelope is a rectangle bounded by the tensile strength on the
/// positive axes and the compressive strength on the negative axes. The
/// input order is preserved; each sign quadrant picks the principal stress
/// whose axis the load line crosses first.
pub fn maximum_normal_stress(
    sigma_1: f64,
    sigma_3: f64,
    material: &BrittleStrength,
) -> SafetyResult {
    let s1 = clamp_near_zero(sigma_1);
    let s3 = clamp_near_zero(sigma_3);
    let tensile = material.ultimate_tensile;
    let compressive = material.ultimate_compressive;

    if s1 >= 0.0 && s3 >= 0.0 {
        // first quadrant, the larger tension governs
        if s1 >= s3 {
            fracture_result(s1, tensile / s1)
        } else {
            fracture_result(s3, tensile / s3)
        }
    } else if s1 < 0.0 && s3 >= 0.0 {
        // second quadrant, the corner ratio decides which axis is hit
        if -tensile / compressive > s3 / s1 {
            fracture_result(s3, tensile / s3)
        } else {
            fracture_result(s1, compressive / s1)
        }
    } else if s1 < 0.0 && s3 < 0.0 {
        // third quadrant, the deeper compression governs
        if s3 / s1 <= 1.0 {
            fracture_result(s1, compressive / s1)
        } else {
            fracture_result(s3, compressive / s3)
        }
    } else if -compressive / tensile > s3 / s1 {
        // fourth quadrant, compression side of the corner
        fracture_result(s3, compressive / s3)
    } else {
        fracture_result(s1, tensile / s1)
    }
}

/// Modified-Mohr theory.
///
/// Matches the maximum-normal-stress rectangle in the first quadrant and for
/// mild sign mixes, but chamfers the fourth quadrant towards the compressive
/// strength once the compressive principal dominates the tensile one. In the
/// chamfered region the governing stress is the radial distance
/// `sqrt(s1^2 + s3^2)` of the load point.
pub fn modified_mohr(sigma_1: f64, sigma_3: f64, material: &BrittleStrength) -> SafetyResult {
    let (sigma_1, sigma_3) = if sigma_1 < sigma_3 {
        (sigma_3, sigma_1)
    } else {
        (sigma_1, sigma_3)
    };
    let s1 = clamp_near_zero(sigma_1);
    let s3 = clamp_near_zero(sigma_3);
    let tensile = material.ultimate_tensile;
    let compressive = material.ultimate_compressive;

    if s3 >= 0.0 {
        fracture_result(s1, tensile / s1)
    } else if s1 >= 0.0 && (s3 / s1).abs() <= 1.0 {
        fracture_result(s1, tensile / s1)
    } else if s1 >= 0.0 {
        let inverse_factor =
            ((compressive - tensile) * s1) / (compressive * tensile) - s3 / compressive;
        fracture_result((s1.powi(2) + s3.powi(2)).sqrt(), 1.0 / inverse_factor)
    } else {
        fracture_result(s3, -compressive / s3)
    }
}

/// Coulomb-Mohr theory.
///
/// The most conservative of the brittle envelopes. A straight line joins the
/// tensile strength on the `s1` axis to the compressive strength on the
/// negative `s3` axis, cutting the entire fourth quadrant. As with
/// modified-Mohr, the governing stress on the line is the radial distance of
/// the load point.
pub fn coulomb_mohr(sigma_1: f64, sigma_3: f64, material: &BrittleStrength) -> SafetyResult {
    let (sigma_1, sigma_3) = if sigma_1 < sigma_3 {
        (sigma_3, sigma_1)
    } else {
        (sigma_1, sigma_3)
    };
    let s1 = clamp_near_zero(sigma_1);
    let s3 = clamp_near_zero(sigma_3);
    let tensile = material.ultimate_tensile;
    let compressive = material.ultimate_compressive;

    if s3 >= 0.0 {
        fracture_result(s1, tensile / s1)
    } else if s1 >= 0.0 {
        let inverse_factor = s1 / tensile - s3 / compressive;
        fracture_result((s1.powi(2) + s3.powi(2)).sqrt(), 1.0 / inverse_factor)
    } else {
        fracture_result(s3, -compressive / s3)
    }
}
