use crate::errors::{EosError, EosResult};
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compressibility factors assigned to the vapor and liquid phase.
///
/// The vapor phase is always the largest real root, the liquid phase the
/// smallest one. If the cubic equation has only a single real root, no
/// liquid phase exists.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PhaseAssignment {
    pub vapor: f64,
    pub liquid: Option<f64>,
}

impl PhaseAssignment {
    /// Classify a set of real roots. Returns `None` for an empty set.
    pub fn select(roots: &[f64]) -> Option<Self> {
        match roots.iter().copied().minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(z) => Some(Self {
                vapor: z,
                liquid: None,
            }),
            MinMaxResult::MinMax(min, max) => Some(Self {
                vapor: max,
                liquid: Some(min),
            }),
        }
    }

    pub fn is_two_phase(&self) -> bool {
        self.liquid.is_some()
    }

    /// Compressibility factor of the liquid phase.
    pub fn liquid(&self, temperature: f64, pressure: f64) -> EosResult<f64> {
        self.liquid
            .ok_or(EosError::SinglePhase(temperature, pressure))
    }
}

impl fmt::Display for PhaseAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.liquid {
            Some(z) => write!(f, "Z_vapor = {:.8}, Z_liquid = {:.8}", self.vapor, z),
            None => write!(f, "Z_vapor = {:.8}, no liquid root", self.vapor),
        }
    }
}
