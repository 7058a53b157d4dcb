//! Second moments of area for simple cross-sections.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A beam cross-section. Dimensions are in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum CrossSection {
    Rectangle { width: f64, height: f64 },
    Circle { diameter: f64 },
}

impl CrossSection {
    /// Second moments of area `(I_xx, I_yy)` about the centroidal axes.
    /// The x axis runs along the width, so `I_xx` resists bending that
    /// displaces material along the height.
    pub fn area_moments(&self) -> (f64, f64) {
        match *self {
            CrossSection::Rectangle { width, height } => (
                width * height.powi(3) / 12.0,
                width.powi(3) * height / 12.0,
            ),
            CrossSection::Circle { diameter } => {
                let i = PI * (diameter / 2.0).powi(4) / 4.0;
                (i, i)
            }
        }
    }

    /// Polar second moment of area about the centroid.
    pub fn polar_moment(&self) -> f64 {
        match *self {
            CrossSection::Rectangle { width, height } => {
                width * height * (width.powi(2) + height.powi(2)) / 12.0
            }
            CrossSection::Circle { diameter } => PI * (diameter / 2.0).powi(4) / 2.0,
        }
    }

    /// Distance from the centroid to the outermost fiber, where torsional
    /// shear peaks. For a rectangle that is the corner.
    pub fn outer_fiber_radius(&self) -> f64 {
        match *self {
            CrossSection::Rectangle { width, height } => {
                ((width / 2.0).powi(2) + (height / 2.0).powi(2)).sqrt()
            }
            CrossSection::Circle { diameter } => diameter / 2.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            CrossSection::Rectangle { width, height } => {
                if width <= 0.0 {
                    return Err(anyhow!("width must be greater than 0.0, got {}", width));
                }
                if height <= 0.0 {
                    return Err(anyhow!("height must be greater than 0.0, got {}", height));
                }
            }
            CrossSection::Circle { diameter } => {
                if diameter <= 0.0 {
                    return Err(anyhow!(
                        "diameter must be greater than 0.0, got {}",
                        diameter
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangle_moments() {
        let section = CrossSection::Rectangle {
            width: 12.0,
            height: 2.0,
        };
        let (i_xx, i_yy) = section.area_moments();
        assert_relative_eq!(i_xx, 8.0, epsilon = 1e-9);
        assert_relative_eq!(i_yy, 288.0, epsilon = 1e-9);
        assert_relative_eq!(section.polar_moment(), 296.0, epsilon = 1e-9);
        // polar moment equals the sum of the planar ones
        assert_relative_eq!(section.polar_moment(), i_xx + i_yy, epsilon = 1e-9);
    }

    #[test]
    fn test_circle_moments() {
        let section = CrossSection::Circle { diameter: 2.0 };
        let (i_xx, i_yy) = section.area_moments();
        assert_relative_eq!(i_xx, PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(i_yy, PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(section.polar_moment(), PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_outer_fiber_radius() {
        let rectangle = CrossSection::Rectangle {
            width: 6.0,
            height: 8.0,
        };
        assert_relative_eq!(rectangle.outer_fiber_radius(), 5.0, epsilon = 1e-12);

        let circle = CrossSection::Circle { diameter: 10.0 };
        assert_relative_eq!(circle.outer_fiber_radius(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_validation() {
        assert!(CrossSection::Circle { diameter: 20.0 }.validate().is_ok());
        assert!(CrossSection::Circle { diameter: 0.0 }.validate().is_err());
        assert!(CrossSection::Rectangle {
            width: -1.0,
            height: 5.0
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_shape_tagged_deserialization() {
        let section: CrossSection =
            serde_yaml::from_str("shape: rectangle\nwidth: 10.0\nheight: 4.0").unwrap();
        assert_eq!(
            section,
            CrossSection::Rectangle {
                width: 10.0,
                height: 4.0
            }
        );
    }
}
