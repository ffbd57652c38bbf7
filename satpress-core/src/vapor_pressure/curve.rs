use super::VaporPressure;
use crate::correlation::AntoineRecord;
use crate::equation_of_state::CubicEquationOfState;
use crate::errors::{EosError, EosResult};
use crate::SolverOptions;
use ndarray::{Array1, ArrayView1};
#[cfg(feature = "rayon")]
use ndarray::Axis;
#[cfg(feature = "rayon")]
use rayon::{prelude::*, ThreadPool};

/// Vapor pressures of a pure substance at several temperatures.
#[derive(Clone, Debug)]
pub struct VaporPressureCurve {
    pub points: Vec<VaporPressure>,
}

impl VaporPressureCurve {
    /// Create a vapor pressure curve from a list of vapor pressures.
    pub fn new(points: Vec<VaporPressure>) -> Self {
        Self { points }
    }

    fn solve_temperatures<E: CubicEquationOfState>(
        eos: &E,
        antoine: &AntoineRecord,
        temperatures: ArrayView1<f64>,
        options: SolverOptions,
    ) -> Vec<VaporPressure> {
        temperatures
            .iter()
            .filter_map(|&t| VaporPressure::from_correlation(eos, antoine, t, options).ok())
            .collect()
    }

    /// Calculate the vapor pressure at every given temperature.
    ///
    /// Temperatures at which the calculation fails, e.g. because only a
    /// single phase exists, are skipped.
    pub fn pure<E: CubicEquationOfState>(
        eos: &E,
        antoine: &AntoineRecord,
        temperatures: &Array1<f64>,
        options: SolverOptions,
    ) -> Self {
        Self::new(Self::solve_temperatures(
            eos,
            antoine,
            temperatures.view(),
            options,
        ))
    }

    /// Calculate the vapor pressure at `npoints` equidistant temperatures
    /// between `min_temperature` and the critical temperature, excluding the latter.
    pub fn linspace<E: CubicEquationOfState>(
        eos: &E,
        antoine: &AntoineRecord,
        min_temperature: f64,
        npoints: usize,
        options: SolverOptions,
    ) -> EosResult<Self> {
        let temperatures = Self::temperatures(eos, min_temperature, npoints)?;
        Ok(Self::pure(eos, antoine, &temperatures, options))
    }

    fn temperatures<E: CubicEquationOfState>(
        eos: &E,
        min_temperature: f64,
        npoints: usize,
    ) -> EosResult<Array1<f64>> {
        let tc = eos.critical_temperature();
        if !(min_temperature > 0.0 && min_temperature < tc) {
            return Err(EosError::InvalidState(
                String::from("VaporPressureCurve"),
                String::from("minimum temperature"),
                min_temperature,
            ));
        }
        if npoints == 0 {
            return Err(EosError::Error(String::from(
                "VaporPressureCurve: at least one point is required.",
            )));
        }
        let max_temperature =
            min_temperature + (tc - min_temperature) * ((npoints - 1) as f64 / npoints as f64);
        Ok(Array1::linspace(min_temperature, max_temperature, npoints))
    }

    /// Temperatures in K.
    pub fn temperature(&self) -> Array1<f64> {
        self.points.iter().map(|p| p.temperature).collect()
    }

    /// Vapor pressures in Pa.
    pub fn pressure(&self) -> Array1<f64> {
        self.points.iter().map(|p| p.pressure).collect()
    }

    /// Initial estimates of the vapor pressures in Pa.
    pub fn initial_pressure(&self) -> Array1<f64> {
        self.points.iter().map(|p| p.initial_pressure).collect()
    }

    pub fn iterations(&self) -> Array1<usize> {
        self.points.iter().map(|p| p.iterations).collect()
    }

    pub fn converged(&self) -> Array1<bool> {
        self.points.iter().map(|p| p.converged).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(feature = "rayon")]
impl VaporPressureCurve {
    /// Calculate the vapor pressures of `linspace` on a thread pool,
    /// distributing chunks of `chunksize` temperatures to the workers.
    pub fn par_pure<E: CubicEquationOfState + Sync>(
        eos: &E,
        antoine: &AntoineRecord,
        min_temperature: f64,
        npoints: usize,
        chunksize: usize,
        thread_pool: ThreadPool,
        options: SolverOptions,
    ) -> EosResult<Self> {
        if chunksize == 0 {
            return Err(EosError::Error(String::from(
                "VaporPressureCurve: the chunk size must be positive.",
            )));
        }
        let temperatures = Self::temperatures(eos, min_temperature, npoints)?;

        let points: Vec<VaporPressure> = thread_pool.install(|| {
            temperatures
                .axis_chunks_iter(Axis(0), chunksize)
                .into_par_iter()
                .map(|t| Self::solve_temperatures(eos, antoine, t, options))
                .flatten()
                .collect()
        });
        Ok(Self::new(points))
    }
}
