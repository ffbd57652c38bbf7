use crate::errors::{EosError, EosResult};
use crate::fugacity;
use crate::phase::PhaseAssignment;
use crate::RGAS;
use arrayvec::ArrayVec;
use nalgebra::Matrix3;
use num_dual::{first_derivative, DualNum};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Relative size of the imaginary part below which an eigenvalue of the
/// companion matrix is considered a real root.
const IMAG_TOL: f64 = 1e-10;
const MAX_POLISH_STEPS: usize = 3;

/// Denominator of the attractive term of the generalized cubic equation of state
///
/// $$p=\frac{RT}{v-b}-\frac{a}{v^2+ubv+wb^2}$$
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CubicForm {
    pub u: f64,
    pub w: f64,
}

impl CubicForm {
    pub const PENG_ROBINSON: Self = Self { u: 2.0, w: -1.0 };

    /// $\sqrt{u^2-4w}$
    pub fn delta(&self) -> f64 {
        (self.u * self.u - 4.0 * self.w).sqrt()
    }

    /// Coefficients `[c2, c1, c0]` of the monic cubic $Z^3+c_2Z^2+c_1Z+c_0=0$.
    pub fn coefficients(&self, parameters: &EosParameters) -> [f64; 3] {
        let Self { u, w } = *self;
        let EosParameters { a, b } = *parameters;
        [
            -(1.0 + b - u * b),
            a + w * b * b - u * b - u * b * b,
            -(a * b + w * b * b + w * b * b * b),
        ]
    }
}

/// Dimensionless parameters of a cubic equation of state at given temperature and pressure.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct EosParameters {
    /// $A=\frac{ap}{(RT)^2}$
    pub a: f64,
    /// $B=\frac{bp}{RT}$
    pub b: f64,
}

impl EosParameters {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

/// Admissible real roots of the cubic equation in ascending order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CompressibilityRoots(ArrayVec<f64, 3>);

impl CompressibilityRoots {
    /// Sort up to three roots in ascending order.
    pub fn new(mut roots: ArrayVec<f64, 3>) -> Self {
        roots.sort_by(f64::total_cmp);
        Self(roots)
    }

    /// Classify the roots into a vapor and a liquid compressibility factor.
    pub fn phases(&self) -> Option<PhaseAssignment> {
        PhaseAssignment::select(self)
    }
}

impl TryFrom<&[f64]> for CompressibilityRoots {
    type Error = EosError;

    fn try_from(roots: &[f64]) -> EosResult<Self> {
        ArrayVec::try_from(roots).map(Self::new).map_err(|_| {
            EosError::Error(format!(
                "a cubic equation has at most three roots, got {}",
                roots.len()
            ))
        })
    }
}

impl Deref for CompressibilityRoots {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

/// Result of the solution of the cubic equation at given temperature and pressure.
#[derive(Clone, Debug, PartialEq)]
pub struct CubicSolution {
    pub roots: CompressibilityRoots,
    pub parameters: EosParameters,
    /// Coefficients `[c2, c1, c0]` of the monic cubic in $Z$.
    pub coefficients: [f64; 3],
}

impl CubicSolution {
    /// Classify the roots into a vapor and a liquid compressibility factor.
    pub fn phases(&self) -> EosResult<PhaseAssignment> {
        self.roots
            .phases()
            .ok_or_else(|| EosError::Error(String::from("empty set of compressibility factors")))
    }
}

/// Real roots of $Z^3+c_2Z^2+c_1Z+c_0=0$ in ascending order.
///
/// All three roots are obtained as eigenvalues of the companion matrix.
/// Eigenvalues with a negligible imaginary part are kept and refined with
/// Newton steps on the polynomial.
pub fn real_roots(coefficients: [f64; 3]) -> ArrayVec<f64, 3> {
    let [c2, c1, c0] = coefficients;
    #[rustfmt::skip]
    let companion = Matrix3::new(
        -c2, -c1, -c0,
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
    );
    let mut roots: ArrayVec<f64, 3> = companion
        .complex_eigenvalues()
        .iter()
        .filter(|z| z.im.abs() <= IMAG_TOL * (1.0 + z.re.abs()))
        .map(|z| polish(z.re, coefficients))
        .collect();
    roots.sort_by(f64::total_cmp);
    roots
}

fn polish(mut z: f64, [c2, c1, c0]: [f64; 3]) -> f64 {
    let f = |z: f64| ((z + c2) * z + c1) * z + c0;
    for _ in 0..MAX_POLISH_STEPS {
        let df = (3.0 * z + 2.0 * c2) * z + c1;
        if df == 0.0 {
            break;
        }
        let z_new = z - f(z) / df;
        if !(f(z_new).abs() < f(z).abs()) {
            break;
        }
        z = z_new;
    }
    z
}

/// A pure substance modelled with a cubic equation of state.
///
/// Implementors supply the temperature dependent attraction parameter,
/// the co-volume and the form of the attractive term. Root solving,
/// fugacity coefficients and residual enthalpies are shared by all
/// variants.
pub trait CubicEquationOfState {
    /// Form of the denominator of the attractive term.
    fn form(&self) -> CubicForm;

    /// Critical temperature in K.
    fn critical_temperature(&self) -> f64;

    /// Attraction parameter $a(T)$ in Pa m⁶/mol².
    fn attraction<D: DualNum<f64> + Copy>(&self, temperature: D) -> D;

    /// Co-volume $b$ in m³/mol.
    fn covolume(&self) -> f64;

    /// Whether a real root of the cubic is retained.
    fn is_admissible_root(&self, _z: f64) -> bool {
        true
    }

    /// Dimensionless parameters $A$ and $B$.
    fn parameters(&self, temperature: f64, pressure: f64) -> EosResult<EosParameters> {
        if !(temperature > 0.0) || !temperature.is_finite() {
            return Err(EosError::InvalidState(
                String::from("cubic equation of state"),
                String::from("temperature"),
                temperature,
            ));
        }
        if !(pressure > 0.0) || !pressure.is_finite() {
            return Err(EosError::InvalidState(
                String::from("cubic equation of state"),
                String::from("pressure"),
                pressure,
            ));
        }
        let rt = RGAS * temperature;
        Ok(EosParameters::new(
            self.attraction(temperature) * pressure / (rt * rt),
            self.covolume() * pressure / rt,
        ))
    }

    /// Solve the cubic equation for all admissible compressibility factors.
    fn compressibility(&self, temperature: f64, pressure: f64) -> EosResult<CubicSolution> {
        let parameters = self.parameters(temperature, pressure)?;
        let coefficients = self.form().coefficients(&parameters);
        let mut roots = real_roots(coefficients);
        roots.retain(|z| self.is_admissible_root(*z));
        let roots = CompressibilityRoots::new(roots);
        if roots.is_empty() {
            return Err(EosError::NoRealRoots(temperature, pressure));
        }
        Ok(CubicSolution {
            roots,
            parameters,
            coefficients,
        })
    }

    /// Fugacity coefficient of a phase with compressibility factor `z`.
    fn fugacity_coefficient(&self, z: f64, parameters: &EosParameters) -> EosResult<f64> {
        fugacity::fugacity_coefficient(z, parameters, self.form())
    }

    /// Residual molar enthalpy in J/mol of a phase with compressibility factor `z`.
    fn residual_enthalpy(&self, temperature: f64, pressure: f64, z: f64) -> EosResult<f64> {
        let parameters = self.parameters(temperature, pressure)?;
        if !(z - parameters.b > 0.0) {
            return Err(EosError::InvalidState(
                String::from("residual enthalpy"),
                String::from("Z - B"),
                z - parameters.b,
            ));
        }
        let rt = RGAS * temperature;
        let (a, da_dt) = first_derivative(|t| self.attraction(t), temperature);
        let CubicForm { u, .. } = self.form();
        let delta = self.form().delta();
        let b = self.covolume();
        let departure = if parameters.b == 0.0 || delta == 0.0 {
            pressure / (rt * (z + 0.5 * u * parameters.b))
        } else {
            let bb = parameters.b;
            ((2.0 * z + bb * (u + delta)) / (2.0 * z + bb * (u - delta))).ln() / (b * delta)
        };
        Ok(rt * (z - 1.0) + (temperature * da_dt - a) * departure)
    }
}
