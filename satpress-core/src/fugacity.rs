//! Fugacity coefficients and phase fugacities of the generalized cubic equation of state.
use crate::equation_of_state::{CubicForm, EosParameters};
use crate::errors::{EosError, EosResult};
use crate::RGAS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bound of the logarithmic fugacity coefficient before exponentiation.
pub const LN_PHI_LIMIT: f64 = 700.0;

/// Logarithmic fugacity coefficient
///
/// $$\ln\varphi=Z-1-\ln(Z-B)-\frac{A}{B\delta}\ln\left(\frac{2Z+B(u+\delta)}{2Z+B(u-\delta)}\right)$$
///
/// with $\delta=\sqrt{u^2-4w}$. For $B=0$ or $\delta=0$ the last term is replaced by
/// its limit $\frac{A}{Z+uB/2}$.
pub fn ln_fugacity_coefficient(
    z: f64,
    parameters: &EosParameters,
    form: CubicForm,
) -> EosResult<f64> {
    let EosParameters { a, b } = *parameters;
    if !(z - b > 0.0) {
        return Err(EosError::InvalidState(
            String::from("fugacity coefficient"),
            String::from("Z - B"),
            z - b,
        ));
    }
    let delta = form.delta();
    let attraction = if b == 0.0 || delta == 0.0 {
        a / (z + 0.5 * form.u * b)
    } else {
        a / (b * delta) * ((2.0 * z + b * (form.u + delta)) / (2.0 * z + b * (form.u - delta))).ln()
    };
    let ln_phi = z - 1.0 - (z - b).ln() - attraction;
    if ln_phi.is_nan() {
        return Err(EosError::InvalidState(
            String::from("fugacity coefficient"),
            String::from("ln(phi)"),
            ln_phi,
        ));
    }
    Ok(ln_phi)
}

/// Fugacity coefficient with the exponent clamped to `±LN_PHI_LIMIT`.
pub fn fugacity_coefficient(
    z: f64,
    parameters: &EosParameters,
    form: CubicForm,
) -> EosResult<f64> {
    Ok(ln_fugacity_coefficient(z, parameters, form)?
        .clamp(-LN_PHI_LIMIT, LN_PHI_LIMIT)
        .exp())
}

/// Fugacity of the vapor phase in Pa.
pub fn vapor_fugacity(phi: f64, pressure: f64) -> f64 {
    phi * pressure
}

/// Fugacity of the liquid phase in Pa including the Poynting correction
///
/// $$f^L=\varphi^L p^\mathrm{ref}\exp\left(\frac{v^L(p-p^\mathrm{ref})}{RT}\right),\quad v^L=\frac{Z^LRT}{p^\mathrm{ref}}$$
pub fn liquid_fugacity(
    phi: f64,
    z: f64,
    pressure: f64,
    reference_pressure: f64,
    temperature: f64,
) -> f64 {
    let rt = RGAS * temperature;
    let molar_volume = z * rt / reference_pressure;
    phi * reference_pressure * (molar_volume * (pressure - reference_pressure) / rt).exp()
}

/// Fugacity coefficients and fugacities of coexisting vapor and liquid phases.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct FugacityState {
    pub phi_vapor: f64,
    pub phi_liquid: f64,
    pub f_vapor: f64,
    pub f_liquid: f64,
}

impl FugacityState {
    /// Signed difference $f^V-f^L$ in Pa.
    pub fn mismatch(&self) -> f64 {
        self.f_vapor - self.f_liquid
    }

    /// Absolute difference $|f^V-f^L|$ in Pa.
    pub fn error(&self) -> f64 {
        self.mismatch().abs()
    }
}

impl fmt::Display for FugacityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "phi_vapor = {:.8}, phi_liquid = {:.8}, f_vapor = {:.5} Pa, f_liquid = {:.5} Pa",
            self.phi_vapor, self.phi_liquid, self.f_vapor, self.f_liquid
        )
    }
}
