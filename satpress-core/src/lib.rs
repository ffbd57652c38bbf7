#![warn(clippy::all)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_arguments)]

/// Print messages with level `Verbosity::Iter` or higher.
#[macro_export]
macro_rules! log_iter {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::Verbosity::Iter {
            println!($($arg)*);
        }
    }
}

/// Print messages with level `Verbosity::Result` or higher.
#[macro_export]
macro_rules! log_result {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::Verbosity::Result {
            println!($($arg)*);
        }
    }
}

mod correlation;
mod equation_of_state;
mod errors;
pub mod fugacity;
pub mod parameter;
mod phase;
mod vapor_pressure;

pub use correlation::AntoineRecord;
pub use equation_of_state::{
    real_roots, CompressibilityRoots, CubicEquationOfState, CubicForm, CubicSolution,
    EosParameters,
};
pub use errors::{EosError, EosResult};
pub use phase::PhaseAssignment;
pub use vapor_pressure::{
    FugacityBalance, IterationEvent, IterationObserver, SolverStatus, VaporPressure,
    VaporPressureCurve,
};

/// Universal gas constant in J/(mol K).
pub const RGAS: f64 = 8.3144598;

/// Level of detail in the iteration output.
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq, Eq)]
pub enum Verbosity {
    /// Do not print output.
    #[default]
    None,
    /// Print information about the success of failure of the iteration.
    Result,
    /// Print a detailed output for every iteration.
    Iter,
}

/// Options for the vapor pressure solver.
///
/// If the values are [None], solver specific default
/// values are used.
#[derive(Copy, Clone, Debug, Default)]
pub struct SolverOptions {
    /// Maximum number of iterations.
    pub max_iter: Option<usize>,
    /// Tolerance for the change of pressure between two iterations in Pa.
    pub tol: Option<f64>,
    /// Pressure perturbation of the finite difference derivative in Pa.
    pub step: Option<f64>,
    /// Iteration output indicated by the [Verbosity] enum.
    pub verbosity: Verbosity,
}

impl SolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    pub fn tol(mut self, tol: f64) -> Self {
        self.tol = Some(tol);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn unwrap_or(self, max_iter: usize, tol: f64) -> (usize, f64, Verbosity) {
        (
            self.max_iter.unwrap_or(max_iter),
            self.tol.unwrap_or(tol),
            self.verbosity,
        )
    }
}
