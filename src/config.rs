//! A module for loading and validating scenario files for a stress
//! assessment run.
//!
//! A scenario names the load case, the material data, and one stress input,
//! either direct components (numbers or expressions over named parameters)
//! or a cantilever load case. Files are YAML or TOML, chosen by extension.

use anyhow::{anyhow, Context, Result};
use evalexpr::{eval_with_context, ContextWithMutableVariables, HashMapContext};
use hashbrown::HashMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::beam::CantileverBeam;
use crate::cyclic::CyclicLoad;
use crate::fatigue::SnCurve;
use crate::material::{BrittleStrength, DuctileStrength};
use crate::stress::PlanarStressState;
use crate::units::StressUnit;

/// A stress component given either as a plain number or as an expression
/// over the scenario's named parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentValue {
    Number(f64),
    Expression(String),
}

impl ComponentValue {
    fn resolve(&self, context: &HashMapContext) -> Result<f64> {
        match self {
            ComponentValue::Number(value) => Ok(*value),
            ComponentValue::Expression(expression) => {
                let value = eval_with_context(expression.as_str(), context)
                    .map_err(|e| anyhow!("cannot evaluate expression '{}': {}", expression, e))?;
                value
                    .as_number()
                    .map_err(|e| anyhow!("expression '{}' is not numeric: {}", expression, e))
            }
        }
    }
}

/// The stress-state section of a scenario.
///
/// # Examples
///
/// ```
/// use hashbrown::HashMap;
/// use stresscheck::config::{ComponentValue, StressInput};
///
/// let mut parameters = HashMap::new();
/// parameters.insert(String::from("F"), 4000.0);
/// parameters.insert(String::from("A"), 50.0);
///
/// let input = StressInput {
///     parameters,
///     sigma_x: ComponentValue::Expression(String::from("F / A")),
///     sigma_y: ComponentValue::Number(0.0),
///     tau_xy: ComponentValue::Number(0.0),
/// };
/// assert!(input.validate().is_ok());
/// assert_eq!(input.resolve().unwrap().sigma_x, 80.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressInput {
    /// Named values the component expressions may refer to.
    #[serde(default)]
    pub parameters: HashMap<String, f64>,
    pub sigma_x: ComponentValue,
    pub sigma_y: ComponentValue,
    pub tau_xy: ComponentValue,
}

impl StressInput {
    /// Validates parameter names and values. Names must be identifier-like
    /// so they can appear in expressions.
    pub fn validate(&self) -> Result<()> {
        let re = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
        for (name, value) in self.parameters.iter() {
            if !re.is_match(name) {
                return Err(anyhow!(
                    "parameter name '{}' is not a valid identifier",
                    name
                ));
            }
            if !value.is_finite() {
                return Err(anyhow!("parameter '{}' must be finite, got {}", name, value));
            }
        }
        Ok(())
    }

    /// Evaluates the three components against the parameters into a plain
    /// stress state.
    pub fn resolve(&self) -> Result<PlanarStressState> {
        let mut context = HashMapContext::new();
        for (name, value) in self.parameters.iter() {
            context
                .set_value(name.clone(), (*value).into())
                .map_err(|e| anyhow!("cannot insert parameter '{}' into context: {}", name, e))?;
        }
        Ok(PlanarStressState::new(
            self.sigma_x.resolve(&context).context("cannot resolve sigma_x")?,
            self.sigma_y.resolve(&context).context("cannot resolve sigma_y")?,
            self.tau_xy.resolve(&context).context("cannot resolve tau_xy")?,
        ))
    }
}

/// Material data for a scenario. Theories whose data is absent are skipped
/// by the analysis, but at least one model must be given.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialConfig {
    pub ductile: Option<DuctileStrength>,
    pub brittle: Option<BrittleStrength>,
    pub fatigue: Option<SnCurve>,
}

impl MaterialConfig {
    pub fn validate(&self) -> Result<()> {
        if self.ductile.is_none() && self.brittle.is_none() && self.fatigue.is_none() {
            return Err(anyhow!(
                "material must define at least one of ductile, brittle, fatigue"
            ));
        }
        if let Some(ductile) = &self.ductile {
            ductile.validate()?;
        }
        if let Some(brittle) = &self.brittle {
            brittle.validate()?;
        }
        if let Some(fatigue) = &self.fatigue {
            fatigue.validate()?;
        }
        Ok(())
    }
}

/// One complete load case: a name, material data, exactly one stress input,
/// and optionally a cyclic load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display name of the load case.
    pub name: String,
    /// Unit system the stresses and strengths are expressed in.
    #[serde(default)]
    pub unit: StressUnit,
    pub material: MaterialConfig,
    /// Direct component input. Exactly one of `stress` and `beam` is set.
    pub stress: Option<StressInput>,
    /// Cantilever load case whose support state feeds the theories.
    pub beam: Option<CantileverBeam>,
    /// Cyclic load for the mean-stress criteria. Requires fatigue material
    /// data.
    pub cyclic: Option<CyclicLoad>,
}

impl Scenario {
    /// Validates the scenario and every section it carries.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow!("name must not be empty, got {:?}", self.name));
        }
        match (&self.stress, &self.beam) {
            (Some(_), Some(_)) => {
                return Err(anyhow!(
                    "scenario '{}' defines both stress and beam inputs, pick one",
                    self.name
                ))
            }
            (None, None) => {
                return Err(anyhow!(
                    "scenario '{}' defines neither a stress nor a beam input",
                    self.name
                ))
            }
            _ => (),
        }
        self.material.validate()?;
        if let Some(stress) = &self.stress {
            stress.validate()?;
        }
        if let Some(beam) = &self.beam {
            beam.validate()?;
        }
        if let Some(cyclic) = &self.cyclic {
            cyclic.validate()?;
            if self.material.fatigue.is_none() {
                return Err(anyhow!(
                    "scenario '{}' has a cyclic load but no fatigue material data",
                    self.name
                ));
            }
        }
        Ok(())
    }

    /// The stress state the theories run on, from whichever input the file
    /// used.
    pub fn resolve_stress(&self) -> Result<PlanarStressState> {
        if let Some(stress) = &self.stress {
            return stress.resolve();
        }
        if let Some(beam) = &self.beam {
            return Ok(beam.support_stress_state());
        }
        Err(anyhow!("scenario '{}' has no stress input", self.name))
    }
}

/// Loads a scenario from a YAML (`.yaml`/`.yml`) or TOML (`.toml`) file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the extension is not a
/// supported format, or the content does not parse into a [`Scenario`].
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read scenario file {}", path.display()))?;
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let scenario = match extension {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse YAML scenario {}", path.display()))?,
        "toml" => toml::from_str(&content)
            .with_context(|| format!("cannot parse TOML scenario {}", path.display()))?,
        other => {
            return Err(anyhow!(
                "unsupported scenario format '{}' for {}",
                other,
                path.display()
            ))
        }
    };
    Ok(scenario)
}
