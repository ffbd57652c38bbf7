use crate::errors::{EosError, EosResult};
use num_dual::{first_derivative, DualNum};
use serde::{Deserialize, Serialize};
use std::f64::consts::LN_10;
use std::fmt;

/// Conversion factor from bar to Pa.
const BAR: f64 = 1e5;

/// Coefficients of the Antoine equation
///
/// $$\log_{10}\left(\frac{p^\mathrm{sat}}{\mathrm{bar}}\right)=A-\frac{B}{T/\mathrm{K}+C}$$
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AntoineRecord {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl AntoineRecord {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    fn validate(&self, temperature: f64) -> EosResult<()> {
        if temperature <= 0.0 || temperature.is_nan() {
            return Err(EosError::InvalidState(
                String::from("Antoine equation"),
                String::from("temperature"),
                temperature,
            ));
        }
        if temperature + self.c <= 0.0 {
            return Err(EosError::InvalidState(
                String::from("Antoine equation"),
                String::from("T + C"),
                temperature + self.c,
            ));
        }
        Ok(())
    }

    /// Natural logarithm of the vapor pressure in Pa.
    pub fn ln_pressure<D: DualNum<f64> + Copy>(&self, temperature: D) -> D {
        (-(temperature + self.c).recip() * self.b + self.a) * LN_10 + BAR.ln()
    }

    /// Vapor pressure in Pa at the given temperature in K.
    pub fn vapor_pressure(&self, temperature: f64) -> EosResult<f64> {
        self.validate(temperature)?;
        Ok(self.ln_pressure(temperature).exp())
    }

    /// Temperature derivative of the logarithmic vapor pressure in 1/K.
    pub fn dln_pressure_dt(&self, temperature: f64) -> EosResult<f64> {
        self.validate(temperature)?;
        let (_, dln_p) = first_derivative(|t| self.ln_pressure(t), temperature);
        Ok(dln_p)
    }
}

impl fmt::Display for AntoineRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AntoineRecord(a={}, b={}, c={})", self.a, self.b, self.c)
    }
}
