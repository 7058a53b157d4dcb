//! Headless evaluation of a full scenario into a serializable report.
//!
//! This is the driver loop a GUI or service would call on every input
//! change: resolve the stress input, decompose it, then run every theory the
//! scenario's material data supports. Batch variants fan the static theories
//! out over many stress states in parallel.

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

use crate::brittle::{coulomb_mohr, maximum_normal_stress, modified_mohr};
use crate::config::{load_scenario, Scenario};
use crate::cyclic::{gerber, modified_goodman, soderberg, CyclicLoad};
use crate::ductile::{tresca, von_mises};
use crate::fatigue::SnCurve;
use crate::material::{BrittleStrength, DuctileStrength};
use crate::safety::{FactorOfSafety, SafetyResult};
use crate::stress::{PlanarStressState, PrincipalAngles, PrincipalStresses};
use crate::units::StressUnit;

/// The stress decomposition every report carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StressSummary {
    pub state: PlanarStressState,
    pub principal: PrincipalStresses,
    pub angles: PrincipalAngles,
    pub tau_max: f64,
    pub tau_min: f64,
}

/// Safety results of the two yield theories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DuctileReport {
    pub von_mises: SafetyResult,
    pub tresca: SafetyResult,
}

/// Safety results of the three fracture theories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrittleReport {
    pub maximum_normal_stress: SafetyResult,
    pub modified_mohr: SafetyResult,
    pub coulomb_mohr: SafetyResult,
}

/// Mean-stress criteria plus the S-N life estimate for the alternating
/// component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CyclicReport {
    pub modified_goodman: FactorOfSafety,
    pub soderberg: FactorOfSafety,
    pub gerber: FactorOfSafety,
    /// Expected cycles to fatigue failure at the alternating amplitude.
    pub life_cycles: f64,
    /// True when the amplitude sits on the endurance plateau.
    pub infinite_life: bool,
}

/// Everything one scenario evaluation produced. Sections whose material data
/// was absent are omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub scenario: String,
    pub unit: StressUnit,
    pub stress: StressSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ductile: Option<DuctileReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brittle: Option<BrittleReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cyclic: Option<CyclicReport>,
}

impl AnalysisReport {
    /// The report as pretty-printed JSON, the machine-readable output format.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("cannot serialize report to JSON")
    }
}

/// Decomposes a stress state into principal stresses, angles and extreme
/// shear.
pub fn summarize_stress(state: &PlanarStressState) -> StressSummary {
    let (tau_max, tau_min) = state.max_shear();
    StressSummary {
        state: *state,
        principal: state.principal_stresses(),
        angles: state.principal_angles(),
        tau_max,
        tau_min,
    }
}

/// Runs both yield theories on a principal pair.
pub fn evaluate_ductile(
    principal: &PrincipalStresses,
    material: &DuctileStrength,
) -> DuctileReport {
    DuctileReport {
        von_mises: von_mises(principal.sigma_1, principal.sigma_3, material),
        tresca: tresca(principal.sigma_1, principal.sigma_3, material),
    }
}

/// Runs all three fracture theories on a principal pair.
pub fn evaluate_brittle(
    principal: &PrincipalStresses,
    material: &BrittleStrength,
) -> BrittleReport {
    BrittleReport {
        maximum_normal_stress: maximum_normal_stress(
            principal.sigma_1,
            principal.sigma_3,
            material,
        ),
        modified_mohr: modified_mohr(principal.sigma_1, principal.sigma_3, material),
        coulomb_mohr: coulomb_mohr(principal.sigma_1, principal.sigma_3, material),
    }
}

/// Runs the mean-stress criteria and the S-N life estimate for a cyclic
/// load.
pub fn evaluate_cyclic(load: &CyclicLoad, curve: &SnCurve) -> CyclicReport {
    let life_cycles = curve.cycles_to_failure(load.alternating);
    CyclicReport {
        modified_goodman: modified_goodman(load, curve),
        soderberg: soderberg(load, curve),
        gerber: gerber(load, curve),
        life_cycles,
        infinite_life: life_cycles >= curve.endurance_knee,
    }
}

/// Validates a scenario and evaluates every section its material data
/// supports.
pub fn evaluate_scenario(scenario: &Scenario) -> Result<AnalysisReport> {
    scenario.validate()?;
    let state = scenario.resolve_stress()?;
    let stress = summarize_stress(&state);

    let ductile = scenario
        .material
        .ductile
        .as_ref()
        .map(|material| evaluate_ductile(&stress.principal, material));
    let brittle = scenario
        .material
        .brittle
        .as_ref()
        .map(|material| evaluate_brittle(&stress.principal, material));
    let cyclic = scenario
        .cyclic
        .as_ref()
        .zip(scenario.material.fatigue.as_ref())
        .map(|(load, curve)| evaluate_cyclic(load, curve));

    Ok(AnalysisReport {
        scenario: scenario.name.clone(),
        unit: scenario.unit,
        stress,
        ductile,
        brittle,
        cyclic,
    })
}

/// Loads, validates and evaluates a scenario file in one call.
pub fn run_scenario<P: AsRef<Path>>(path: P) -> Result<AnalysisReport> {
    let scenario = load_scenario(path)?;
    evaluate_scenario(&scenario)
}

/// Yield-theory results for a batch of stress states, evaluated in parallel.
pub fn evaluate_ductile_batch(
    states: &[PlanarStressState],
    material: &DuctileStrength,
) -> Vec<DuctileReport> {
    states
        .par_iter()
        .map(|state| evaluate_ductile(&state.principal_stresses(), material))
        .collect()
}

/// Fracture-theory results for a batch of stress states, evaluated in
/// parallel.
pub fn evaluate_brittle_batch(
    states: &[PlanarStressState],
    material: &BrittleStrength,
) -> Vec<BrittleReport> {
    states
        .par_iter()
        .map(|state| evaluate_brittle(&state.principal_stresses(), material))
        .collect()
}
