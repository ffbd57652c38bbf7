use crate::parameter::ParameterError;
use thiserror::Error;

/// Error type for improperly defined states and convergence problems.
#[derive(Error, Debug)]
pub enum EosError {
    #[error("{0}")]
    Error(String),
    #[error("Invalid state in {0}: {1} = {2}.")]
    InvalidState(String, String, f64),
    #[error("The cubic equation of state has no admissible real root at T = {0} K and p = {1} Pa.")]
    NoRealRoots(f64, f64),
    #[error("Only a single phase exists at T = {0} K and p = {1} Pa.")]
    SinglePhase(f64, f64),
    #[error("`{0}` aborted: the estimated derivative vanished at p = {1} Pa.")]
    ZeroDerivative(String, f64),
    #[error("`{0}` encountered illegal values during the iteration.")]
    IterationFailed(String),
    #[error(transparent)]
    ParameterError(#[from] ParameterError),
    #[cfg(feature = "rayon")]
    #[error(transparent)]
    RayonError(#[from] rayon::ThreadPoolBuildError),
}

impl EosError {
    /// Returns `true` if the inputs lie outside of the domain of the model,
    /// e.g. a non-positive temperature or a state without two phases.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidState(..) | Self::NoRealRoots(..) | Self::SinglePhase(..)
        )
    }
}

/// Convenience type for `Result<T, EosError>`.
pub type EosResult<T> = Result<T, EosError>;
