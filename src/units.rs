//! Stress unit conversions between SI (N/mm^2) and US customary (psi).

use serde::{Deserialize, Serialize};

pub const NMM2_TO_PSI: f64 = 145.037738;
pub const PSI_TO_NMM2: f64 = 0.00689475728;
pub const KSI_TO_NMM2: f64 = 6.89475728;

pub fn nmm2_to_psi(value: f64) -> f64 {
    value * NMM2_TO_PSI
}

pub fn psi_to_nmm2(value: f64) -> f64 {
    value * PSI_TO_NMM2
}

pub fn ksi_to_nmm2(value: f64) -> f64 {
    value * KSI_TO_NMM2
}

pub fn nmm2_to_ksi(value: f64) -> f64 {
    value / KSI_TO_NMM2
}

/// Unit system a scenario's stresses and strengths are expressed in. Purely
/// a label for reports plus a conversion helper; the formulas are unit
/// agnostic as long as one system is used throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StressUnit {
    #[default]
    Si,
    Uscs,
}

impl StressUnit {
    pub fn label(&self) -> &'static str {
        match self {
            StressUnit::Si => "N/mm^2",
            StressUnit::Uscs => "psi",
        }
    }

    /// Converts a stress value from `self` into `target`.
    pub fn convert_to(&self, target: StressUnit, value: f64) -> f64 {
        match (self, target) {
            (StressUnit::Si, StressUnit::Uscs) => nmm2_to_psi(value),
            (StressUnit::Uscs, StressUnit::Si) => psi_to_nmm2(value),
            _ => value,
        }
    }
}
