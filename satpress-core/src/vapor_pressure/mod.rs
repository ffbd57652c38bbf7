//! Vapor pressures of pure substances from the equality of fugacities.
use crate::correlation::AntoineRecord;
use crate::equation_of_state::CubicEquationOfState;
use crate::errors::{EosError, EosResult};
use crate::fugacity::FugacityState;
use crate::phase::PhaseAssignment;
use crate::SolverOptions;
use serde::{Deserialize, Serialize};
use std::fmt;

mod balance;
mod curve;
pub use balance::FugacityBalance;
pub use curve::VaporPressureCurve;

const MAX_ITER_VAPOR_PRESSURE: usize = 100;
const TOL_VAPOR_PRESSURE: f64 = 1e-5;
const STEP_VAPOR_PRESSURE: f64 = 0.01;

/// Data of a single Newton step.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct IterationEvent {
    pub iteration: usize,
    /// Pressure at the start of the step in Pa.
    pub pressure: f64,
    /// Signed fugacity mismatch in Pa.
    pub mismatch: f64,
    /// Magnitude of the fugacity mismatch in Pa.
    pub error: f64,
    /// Finite difference derivative of the mismatch.
    pub derivative: f64,
    /// Updated pressure in Pa.
    pub new_pressure: f64,
}

/// Receiver of the progress of a vapor pressure iteration.
pub trait IterationObserver {
    fn observe(&mut self, event: &IterationEvent);
}

impl<F: FnMut(&IterationEvent)> IterationObserver for F {
    fn observe(&mut self, event: &IterationEvent) {
        self(event)
    }
}

/// Outcome of a vapor pressure iteration that did not fail.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverStatus {
    /// The pressure change dropped below the tolerance.
    Converged,
    /// The maximum number of iterations was reached.
    Exhausted,
}

/// Converged (or exhausted) vapor pressure of a pure substance.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VaporPressure {
    /// Temperature in K.
    pub temperature: f64,
    /// Initial estimate of the pressure in Pa.
    pub initial_pressure: f64,
    /// Vapor pressure in Pa.
    pub pressure: f64,
    pub iterations: usize,
    pub converged: bool,
    /// Compressibility factors at the final pressure, if both phases exist there.
    pub phases: Option<PhaseAssignment>,
    /// Fugacities at the final pressure, if both phases exist there.
    pub fugacities: Option<FugacityState>,
}

impl VaporPressure {
    /// Calculate the vapor pressure of a pure substance at given temperature
    /// starting from an initial estimate of the pressure.
    pub fn pure<E: CubicEquationOfState>(
        eos: &E,
        temperature: f64,
        initial_pressure: f64,
        options: SolverOptions,
    ) -> EosResult<Self> {
        Self::pure_with_observer(
            eos,
            temperature,
            initial_pressure,
            options,
            &mut |_: &IterationEvent| {},
        )
    }

    /// Calculate the vapor pressure starting from the estimate of a vapor pressure correlation.
    pub fn from_correlation<E: CubicEquationOfState>(
        eos: &E,
        antoine: &AntoineRecord,
        temperature: f64,
        options: SolverOptions,
    ) -> EosResult<Self> {
        let initial_pressure = antoine.vapor_pressure(temperature)?;
        Self::pure(eos, temperature, initial_pressure, options)
    }

    /// Calculate the vapor pressure and report every Newton step to `observer`.
    ///
    /// The pressure is updated with Newton steps on the signed fugacity
    /// mismatch, whose derivative is approximated by a central finite
    /// difference. Exhausting the iterations is not an error; the result
    /// is flagged as not converged instead.
    pub fn pure_with_observer<E, O>(
        eos: &E,
        temperature: f64,
        initial_pressure: f64,
        options: SolverOptions,
        observer: &mut O,
    ) -> EosResult<Self>
    where
        E: CubicEquationOfState,
        O: IterationObserver + ?Sized,
    {
        let (max_iter, tol, verbosity) =
            options.unwrap_or(MAX_ITER_VAPOR_PRESSURE, TOL_VAPOR_PRESSURE);
        let step = options.step.unwrap_or(STEP_VAPOR_PRESSURE);
        if !(initial_pressure > 0.0) || !initial_pressure.is_finite() {
            return Err(EosError::InvalidState(
                String::from("VaporPressure::pure"),
                String::from("initial pressure"),
                initial_pressure,
            ));
        }
        if !(step > 0.0) {
            return Err(EosError::InvalidState(
                String::from("VaporPressure::pure"),
                String::from("step"),
                step,
            ));
        }
        let balance = FugacityBalance::new(eos, temperature)?;

        log_iter!(
            verbosity,
            " iter |    pressure    |    mismatch     |   derivative    |  new pressure"
        );
        log_iter!(verbosity, "{:-<78}", "");

        let mut pressure = initial_pressure;
        for i in 1..=max_iter {
            let mismatch = balance.mismatch(pressure)?;
            let derivative = balance.derivative(pressure, step)?;
            if derivative == 0.0 {
                log_result!(
                    verbosity,
                    "VaporPressure::pure: derivative vanished in step {}\n",
                    i
                );
                return Err(EosError::ZeroDerivative(
                    String::from("VaporPressure::pure"),
                    pressure,
                ));
            }

            let new_pressure = pressure - mismatch / derivative;
            observer.observe(&IterationEvent {
                iteration: i,
                pressure,
                mismatch,
                error: mismatch.abs(),
                derivative,
                new_pressure,
            });
            log_iter!(
                verbosity,
                " {:4} | {:14.6} | {:15.8e} | {:15.8e} | {:14.6}",
                i,
                pressure,
                mismatch,
                derivative,
                new_pressure
            );

            if !new_pressure.is_finite() {
                return Err(EosError::IterationFailed(String::from(
                    "VaporPressure::pure",
                )));
            }
            if (new_pressure - pressure).abs() < tol {
                log_result!(
                    verbosity,
                    "VaporPressure::pure: calculation converged in {} step(s)\n",
                    i
                );
                return Ok(Self::new(&balance, initial_pressure, new_pressure, i, true));
            }
            pressure = new_pressure;
        }
        log_result!(
            verbosity,
            "VaporPressure::pure: no convergence after {} step(s)\n",
            max_iter
        );
        Ok(Self::new(&balance, initial_pressure, pressure, max_iter, false))
    }

    fn new<E: CubicEquationOfState>(
        balance: &FugacityBalance<E>,
        initial_pressure: f64,
        pressure: f64,
        iterations: usize,
        converged: bool,
    ) -> Self {
        let (phases, fugacities) = balance.evaluate(pressure).ok().unzip();
        Self {
            temperature: balance.temperature(),
            initial_pressure,
            pressure,
            iterations,
            converged,
            phases,
            fugacities,
        }
    }

    pub fn status(&self) -> SolverStatus {
        if self.converged {
            SolverStatus::Converged
        } else {
            SolverStatus::Exhausted
        }
    }

    /// Enthalpy of vaporization in J/mol from the residual enthalpies of both phases.
    pub fn enthalpy_of_vaporization<E: CubicEquationOfState>(&self, eos: &E) -> EosResult<f64> {
        let phases = self
            .phases
            .ok_or(EosError::SinglePhase(self.temperature, self.pressure))?;
        let z_liquid = phases.liquid(self.temperature, self.pressure)?;
        let h_vapor = eos.residual_enthalpy(self.temperature, self.pressure, phases.vapor)?;
        let h_liquid = eos.residual_enthalpy(self.temperature, self.pressure, z_liquid)?;
        Ok(h_vapor - h_liquid)
    }
}

impl fmt::Display for VaporPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T = {:.5} K, p = {:.5} Pa ({} after {} iteration(s), initial p = {:.5} Pa)",
            self.temperature,
            self.pressure,
            if self.converged {
                "converged"
            } else {
                "not converged"
            },
            self.iterations,
            self.initial_pressure
        )
    }
}
