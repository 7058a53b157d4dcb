//! Planar Cauchy stress states and their principal decomposition.

extern crate nalgebra as na;
use na::{Matrix2, Vector3};
use serde::{Deserialize, Serialize};
use std::path::Path;

use anyhow::{Context, Result};

use crate::numeric::round_to;

/// Guard added to the angle denominator when sigma_x equals sigma_y.
const ANGLE_GUARD: f64 = 1e-6;

/// A 2D Cauchy stress state in one consistent unit system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarStressState {
    pub sigma_x: f64,
    pub sigma_y: f64,
    pub tau_xy: f64,
}

/// In-plane principal stresses, ordered so that `sigma_1 >= sigma_3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrincipalStresses {
    pub sigma_1: f64,
    pub sigma_3: f64,
}

/// Orientations of the principal axes in degrees, 90 degrees apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrincipalAngles {
    pub theta_1: f64,
    pub theta_2: f64,
}

impl PlanarStressState {
    pub fn new(sigma_x: f64, sigma_y: f64, tau_xy: f64) -> Self {
        PlanarStressState {
            sigma_x,
            sigma_y,
            tau_xy,
        }
    }

    /// Builds a state from a symmetric 2x2 stress matrix. Only the upper
    /// off-diagonal entry is read for the shear component.
    pub fn from_matrix(matrix: &Matrix2<f64>) -> Self {
        PlanarStressState {
            sigma_x: matrix[(0, 0)],
            sigma_y: matrix[(1, 1)],
            tau_xy: matrix[(0, 1)],
        }
    }

    // Converts the component form to a Matrix2
    pub fn to_matrix(&self) -> Matrix2<f64> {
        Matrix2::new(
            self.sigma_x, self.tau_xy, // Row 1: σxx, τxy
            self.tau_xy, self.sigma_y, // Row 2: τxy, σyy
        )
    }

    // Converts to a Vector3 following Voigt notation: [σxx, σyy, τxy]
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.sigma_x, self.sigma_y, self.tau_xy)
    }

    // Converts a Voigt Vector3 back to the component form
    pub fn from_vector(vector: &Vector3<f64>) -> Self {
        PlanarStressState {
            sigma_x: vector[0],
            sigma_y: vector[1],
            tau_xy: vector[2],
        }
    }

    /// The in-plane principal stresses.
    ///
    /// The circle mean and radius are rounded to 6 decimal digits before the
    /// components are formed, so that near-equal principal stresses do not
    /// flip order on floating-point noise. The swap guard enforces
    /// `sigma_1 >= sigma_3` regardless.
    pub fn principal_stresses(&self) -> PrincipalStresses {
        let radius = round_to(
            (((self.sigma_x - self.sigma_y) / 2.0).powi(2) + self.tau_xy.powi(2)).sqrt(),
            6,
        );
        let mean = round_to((self.sigma_x + self.sigma_y) / 2.0, 6);

        let mut sigma_1 = mean + radius;
        let mut sigma_3 = mean - radius;
        if sigma_1 < sigma_3 {
            std::mem::swap(&mut sigma_1, &mut sigma_3);
        }

        PrincipalStresses { sigma_1, sigma_3 }
    }

    /// The principal axis orientations in degrees.
    ///
    /// For an isotropic state (`sigma_x == sigma_y`, `tau_xy == 0`) the
    /// orientation is arbitrary; the guarded denominator then yields a
    /// defined but meaningless angle.
    pub fn principal_angles(&self) -> PrincipalAngles {
        let theta_1 = (0.5
            * (2.0 * self.tau_xy / (self.sigma_x - self.sigma_y + ANGLE_GUARD)).atan())
        .to_degrees();
        PrincipalAngles {
            theta_1,
            theta_2: theta_1 + 90.0,
        }
    }

    /// The extreme in-plane shear stresses `(tau_max, -tau_max)`.
    pub fn max_shear(&self) -> (f64, f64) {
        let tau_max =
            (((self.sigma_x - self.sigma_y) / 2.0).powi(2) + self.tau_xy.powi(2)).sqrt();
        (tau_max, -tau_max)
    }
}

/// The von Mises equivalent stress for two in-plane principal stresses.
/// Non-negative for any input pair.
pub fn von_mises_equivalent(sigma_a: f64, sigma_b: f64) -> f64 {
    (sigma_a.powi(2) - sigma_a * sigma_b + sigma_b.powi(2)).sqrt()
}

/// The Tresca (maximum shear) equivalent stress. The inputs may arrive in
/// either order.
pub fn tresca_equivalent(sigma_a: f64, sigma_b: f64) -> f64 {
    let (s1, s2) = if sigma_b > sigma_a {
        (sigma_b, sigma_a)
    } else {
        (sigma_a, sigma_b)
    };
    (s1 - s2) / 2.0
}

/// Row layout of a stress-state batch file.
#[derive(Debug, Clone, Deserialize)]
pub struct StressFileFormat {
    /// Single-character field delimiter.
    pub delimiter: String,
    /// Number of leading rows to skip.
    pub header_rows: usize,
}

/// Reads planar stress states from a delimited text file with one
/// `sigma_x, sigma_y, tau_xy` triple per row. Rows that do not parse into
/// exactly three numbers are skipped.
pub fn read_states_from_file<P: AsRef<Path>>(
    path: P,
    format: &StressFileFormat,
) -> Result<Vec<PlanarStressState>> {
    let path = path.as_ref();
    let delimiter = format.delimiter.bytes().next().unwrap_or(b' ');
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("cannot open stress file {}", path.display()))?;

    let mut states = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("cannot read row {} of {}", row, path.display()))?;
        if row < format.header_rows {
            continue;
        }
        let values: Vec<f64> = record
            .iter()
            .filter_map(|field| field.parse().ok())
            .collect();
        if values.len() == 3 {
            states.push(PlanarStressState::new(values[0], values[1], values[2]));
        }
    }

    Ok(states)
}
