//! Stress state at the support of an end-loaded cantilever.
//!
//! A worked load case for feeding the failure theories: a cantilever of
//! length `l` carries a point force at the free end, inclined at an angle in
//! the section plane, plus an axial torque. The bending components at the
//! fixed support combine into one normal stress at the governing fiber, and
//! the torque contributes the shear, giving a planar stress state.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::section::CrossSection;
use crate::stress::PlanarStressState;

/// An end-loaded cantilever. Force in N, torque in N*m, length and section
/// dimensions in mm, so the resulting stresses come out in N/mm^2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CantileverBeam {
    /// Magnitude of the end load.
    pub force: f64,
    /// Axial torque at the free end.
    #[serde(default)]
    pub torque: f64,
    /// Beam length from support to load.
    pub length: f64,
    /// Inclination of the end load in the section plane, in degrees.
    /// Zero loads along the section x axis.
    #[serde(default)]
    pub angle_degrees: f64,
    pub section: CrossSection,
}

/// Component stresses at the support, kept separate for display alongside
/// the combined state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BeamStressBreakdown {
    /// Bending stress from the force component along the section y axis.
    pub sigma_xx: f64,
    /// Bending stress from the force component along the section x axis.
    pub sigma_yy: f64,
    /// Combined normal stress at the governing fiber.
    pub sigma_max: f64,
    /// Torsional shear at the outer fiber.
    pub tau_xy: f64,
    pub i_xx: f64,
    pub i_yy: f64,
    pub polar_moment: f64,
}

impl CantileverBeam {
    pub fn validate(&self) -> Result<()> {
        if self.length <= 0.0 {
            return Err(anyhow!(
                "length must be greater than 0.0, got {}",
                self.length
            ));
        }
        self.section.validate()?;
        Ok(())
    }

    /// Component stresses at the fixed support.
    pub fn stress_breakdown(&self) -> BeamStressBreakdown {
        let angle = self.angle_degrees.to_radians();
        let force_x = self.force * angle.cos();
        let force_y = self.force * angle.sin();

        let (i_xx, i_yy) = self.section.area_moments();
        let (extent_x, extent_y) = match self.section {
            CrossSection::Rectangle { width, height } => (width, height),
            CrossSection::Circle { diameter } => (diameter, diameter),
        };

        // M*c/I with c as half the section extent on each bending axis
        let sigma_yy = force_x * self.length * extent_x / (2.0 * i_yy);
        let sigma_xx = force_y * self.length * extent_y / (2.0 * i_xx);

        // torque arrives in N*m while every length is mm
        let polar_moment = self.section.polar_moment();
        let tau_xy = self.torque * 1000.0 * self.section.outer_fiber_radius() / polar_moment;

        BeamStressBreakdown {
            sigma_xx,
            sigma_yy,
            sigma_max: sigma_xx + sigma_yy,
            tau_xy,
            i_xx,
            i_yy,
            polar_moment,
        }
    }

    /// The planar stress state at the governing support fiber, ready for the
    /// failure theories. The combined bending stress acts alone on its axis.
    pub fn support_stress_state(&self) -> PlanarStressState {
        let breakdown = self.stress_breakdown();
        PlanarStressState::new(breakdown.sigma_max, 0.0, breakdown.tau_xy)
    }
}
