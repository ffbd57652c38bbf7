use num_dual::DualNum;
use serde::{Deserialize, Serialize};

/// Temperature dependence of the attraction parameter.
pub trait AlphaFunction {
    /// Slope $m(\omega)$ of the Soave-type alpha function.
    fn m(&self, acentric_factor: f64) -> f64;

    /// $\alpha=\left(1+m\left(1-\sqrt{T_r}\right)\right)^2$
    #[inline]
    fn alpha<D: DualNum<f64> + Copy>(&self, acentric_factor: f64, reduced_temperature: D) -> D {
        ((-reduced_temperature.sqrt() + 1.0) * self.m(acentric_factor) + 1.0).powi(2)
    }
}

/// Soave's alpha function for the Redlich-Kwong equation of state.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RedlichKwong1972;

impl AlphaFunction for RedlichKwong1972 {
    #[inline]
    fn m(&self, w: f64) -> f64 {
        0.48 + w * (1.574 - w * 0.176)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PengRobinson1976;

impl AlphaFunction for PengRobinson1976 {
    #[inline]
    fn m(&self, w: f64) -> f64 {
        0.37464 + w * (1.54226 - w * 0.26992)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum Alpha {
    RedlichKwong1972(RedlichKwong1972),
    PengRobinson1976(PengRobinson1976),
}

impl AlphaFunction for Alpha {
    fn m(&self, acentric_factor: f64) -> f64 {
        match self {
            Self::RedlichKwong1972(alpha) => alpha.m(acentric_factor),
            Self::PengRobinson1976(alpha) => alpha.m(acentric_factor),
        }
    }
}

impl From<RedlichKwong1972> for Alpha {
    fn from(alpha: RedlichKwong1972) -> Self {
        Self::RedlichKwong1972(alpha)
    }
}

impl From<PengRobinson1976> for Alpha {
    fn from(alpha: PengRobinson1976) -> Self {
        Self::PengRobinson1976(alpha)
    }
}
