//! Static-failure and fatigue-life assessment for planar stress states.
//!
//! The crate decomposes a planar stress state into its principal form, runs
//! the classical static failure theories (von Mises, Tresca, maximum normal
//! stress, modified-Mohr, Coulomb-Mohr), and estimates fatigue life and
//! cyclic safety from a bilinear S-N curve (modified-Goodman, Gerber,
//! Soderberg). `analysis` ties everything together over scenario files.

pub mod analysis;
pub mod beam;
pub mod brittle;
pub mod config;
pub mod cyclic;
pub mod ductile;
pub mod fatigue;
pub mod material;
pub mod numeric;
pub mod safety;
pub mod section;
pub mod stress;
pub mod units;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

// When the "wasm" feature is enabled, use wasm_bindgen to expose the planar
// decomposition to the host environment.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn run_planar_analysis(sigma_x: f64, sigma_y: f64, tau_xy: f64) -> Vec<f64> {
    let state = stress::PlanarStressState::new(sigma_x, sigma_y, tau_xy);
    let principal = state.principal_stresses();
    let angles = state.principal_angles();
    let (tau_max, tau_min) = state.max_shear();
    // Flat layout for the JavaScript side: principal pair, angle pair, shear pair.
    vec![
        principal.sigma_1,
        principal.sigma_3,
        angles.theta_1,
        angles.theta_2,
        tau_max,
        tau_min,
    ]
}
