//! Result types shared by all failure theories.

use serde::ser::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Unitless margin of a material strength against a design stress.
///
/// The `Infinite` variant is reported when the governing equivalent stress is
/// exactly zero, so display layers can format the sentinel (typically "Inf")
/// without probing for NaN or an arbitrary large float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FactorOfSafety {
    Finite(f64),
    Infinite,
}

impl FactorOfSafety {
    /// The numeric value for finite factors, `None` when infinite.
    pub fn value(&self) -> Option<f64> {
        match self {
            FactorOfSafety::Finite(v) => Some(*v),
            FactorOfSafety::Infinite => None,
        }
    }

    /// True when the theory predicts survival, i.e. the factor is at least
    /// 1.0 or infinite.
    pub fn is_safe(&self) -> bool {
        match self {
            FactorOfSafety::Finite(v) => *v >= 1.0,
            FactorOfSafety::Infinite => true,
        }
    }
}

impl PartialOrd for FactorOfSafety {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (FactorOfSafety::Infinite, FactorOfSafety::Infinite) => Some(Ordering::Equal),
            (FactorOfSafety::Infinite, FactorOfSafety::Finite(_)) => Some(Ordering::Greater),
            (FactorOfSafety::Finite(_), FactorOfSafety::Infinite) => Some(Ordering::Less),
            (FactorOfSafety::Finite(a), FactorOfSafety::Finite(b)) => a.partial_cmp(b),
        }
    }
}

impl fmt::Display for FactorOfSafety {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FactorOfSafety::Finite(v) => write!(f, "{}", v),
            FactorOfSafety::Infinite => write!(f, "Inf"),
        }
    }
}

impl Serialize for FactorOfSafety {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FactorOfSafety::Finite(v) => serializer.serialize_f64(*v),
            FactorOfSafety::Infinite => serializer.serialize_str("Inf"),
        }
    }
}

/// Equivalent stress and safety factor reported by one failure theory.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SafetyResult {
    pub equivalent_stress: f64,
    pub factor_of_safety: FactorOfSafety,
}
