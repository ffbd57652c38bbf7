use crate::equation_of_state::CubicEquationOfState;
use crate::errors::{EosError, EosResult};
use crate::fugacity::{liquid_fugacity, vapor_fugacity, FugacityState};
use crate::phase::PhaseAssignment;

/// Difference between vapor and liquid fugacity of a pure substance
/// as function of pressure at fixed temperature.
pub struct FugacityBalance<'a, E> {
    eos: &'a E,
    temperature: f64,
}

impl<'a, E: CubicEquationOfState> FugacityBalance<'a, E> {
    pub fn new(eos: &'a E, temperature: f64) -> EosResult<Self> {
        if !(temperature > 0.0) || !temperature.is_finite() {
            return Err(EosError::InvalidState(
                String::from("FugacityBalance"),
                String::from("temperature"),
                temperature,
            ));
        }
        Ok(Self { eos, temperature })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Solve the cubic equation, assign the phases and evaluate both fugacities.
    ///
    /// The liquid fugacity is referenced to the trial pressure itself.
    pub fn evaluate(&self, pressure: f64) -> EosResult<(PhaseAssignment, FugacityState)> {
        let t = self.temperature;
        let solution = self.eos.compressibility(t, pressure)?;
        let phases = solution.phases()?;
        let z_liquid = phases.liquid(t, pressure)?;

        let phi_vapor = self
            .eos
            .fugacity_coefficient(phases.vapor, &solution.parameters)?;
        let phi_liquid = self
            .eos
            .fugacity_coefficient(z_liquid, &solution.parameters)?;
        let state = FugacityState {
            phi_vapor,
            phi_liquid,
            f_vapor: vapor_fugacity(phi_vapor, pressure),
            f_liquid: liquid_fugacity(phi_liquid, z_liquid, pressure, pressure, t),
        };
        Ok((phases, state))
    }

    pub fn state(&self, pressure: f64) -> EosResult<FugacityState> {
        self.evaluate(pressure).map(|(_, state)| state)
    }

    /// Signed fugacity mismatch $f^V-f^L$ in Pa.
    pub fn mismatch(&self, pressure: f64) -> EosResult<f64> {
        Ok(self.state(pressure)?.mismatch())
    }

    /// Magnitude of the fugacity mismatch in Pa.
    pub fn error(&self, pressure: f64) -> EosResult<f64> {
        Ok(self.state(pressure)?.error())
    }

    /// Central finite difference of the signed mismatch with respect to pressure.
    pub fn derivative(&self, pressure: f64, step: f64) -> EosResult<f64> {
        let forward = self.mismatch(pressure + step)?;
        let backward = self.mismatch(pressure - step)?;
        Ok((forward - backward) / (2.0 * step))
    }
}
