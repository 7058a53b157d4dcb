//! A module for material strength properties used by the failure theories.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Represents a ductile material, which fails by yielding.
///
/// The yield strength is taken to be the same magnitude in tension and in
/// compression, as the ductile theories assume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuctileStrength {
    /// Tensile yield strength of the material in appropriate units.
    pub yield_strength: f64,
}

impl DuctileStrength {
    pub fn new(yield_strength: f64) -> Self {
        DuctileStrength { yield_strength }
    }

    /// Validates the `DuctileStrength` struct to ensure the yield strength
    /// is defined correctly.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if the strength is positive. Otherwise, it returns
    /// an error detailing the issue.
    pub fn validate(&self) -> Result<()> {
        if self.yield_strength <= 0.0 {
            return Err(anyhow!(
                "yield_strength must be greater than 0.0, got {}",
                self.yield_strength
            ));
        }
        Ok(())
    }
}

/// Represents a brittle material, which fails by fracture and is typically
/// much stronger in compression than in tension.
///
/// Both strengths are stored as positive magnitudes.
///
/// # Examples
///
/// ```
/// use stresscheck::material::BrittleStrength;
///
/// let cast_iron = BrittleStrength::new(214.0, 751.0);
/// assert!(cast_iron.validate().is_ok());
///
/// let bad_input = BrittleStrength::new(214.0, -751.0);
/// assert!(bad_input.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrittleStrength {
    /// Ultimate tensile strength of the material in appropriate units.
    pub ultimate_tensile: f64,
    /// Ultimate compressive strength, as a positive magnitude.
    pub ultimate_compressive: f64,
}

impl BrittleStrength {
    pub fn new(ultimate_tensile: f64, ultimate_compressive: f64) -> Self {
        BrittleStrength {
            ultimate_tensile,
            ultimate_compressive,
        }
    }

    /// Validates the `BrittleStrength` struct to ensure both strength
    /// magnitudes are defined correctly.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if both magnitudes are positive. Otherwise, it
    /// returns an error detailing the issue.
    pub fn validate(&self) -> Result<()> {
        if self.ultimate_tensile <= 0.0 {
            return Err(anyhow!(
                "ultimate_tensile must be greater than 0.0, got {}",
                self.ultimate_tensile
            ));
        }
        if self.ultimate_compressive <= 0.0 {
            return Err(anyhow!(
                "ultimate_compressive must be greater than 0.0, got {}",
                self.ultimate_compressive
            ));
        }
        Ok(())
    }
}
