use satpress_core::parameter::{Identifier, Parameter, ParameterError, PureRecord};
use satpress_core::AntoineRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cubic parameters for a single substance.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct CubicRecord {
    /// critical temperature in Kelvin
    pub tc: f64,
    /// critical pressure in Pascal
    pub pc: f64,
    /// acentric factor
    pub acentric_factor: f64,
}

impl CubicRecord {
    /// Create a new pure substance record for the cubic equation of state.
    pub fn new(tc: f64, pc: f64, acentric_factor: f64) -> Self {
        Self {
            tc,
            pc,
            acentric_factor,
        }
    }
}

impl fmt::Display for CubicRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CubicRecord(tc={} K", self.tc)?;
        write!(f, ", pc={} Pa", self.pc)?;
        write!(f, ", acentric factor={})", self.acentric_factor)
    }
}

/// Validated cubic parameters of a pure substance.
#[derive(Debug, Clone)]
pub struct CubicParameters {
    /// Critical temperature in Kelvin
    pub tc: f64,
    /// Critical pressure in Pascal
    pub pc: f64,
    pub acentric_factor: f64,
    pure_record: PureRecord<CubicRecord>,
}

impl CubicParameters {
    /// Build parameters from the critical properties without identifier or correlation.
    pub fn new_simple(tc: f64, pc: f64, acentric_factor: f64) -> Result<Self, ParameterError> {
        let record = CubicRecord::new(tc, pc, acentric_factor);
        Self::from_record(PureRecord::new(Identifier::default(), record, None))
    }

    /// Vapor pressure correlation of the substance, if present.
    pub fn antoine(&self) -> Result<&AntoineRecord, ParameterError> {
        self.pure_record.antoine()
    }
}

impl Parameter for CubicParameters {
    type Pure = CubicRecord;

    fn from_record(pure_record: PureRecord<CubicRecord>) -> Result<Self, ParameterError> {
        let CubicRecord {
            tc,
            pc,
            acentric_factor,
        } = pure_record.model_record;
        for (name, value) in [("tc", tc), ("pc", pc)] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ParameterError::IncompatibleParameters(format!(
                    "{} of {} has to be positive, got {}.",
                    name, pure_record.identifier, value
                )));
            }
        }
        if !acentric_factor.is_finite() {
            return Err(ParameterError::IncompatibleParameters(format!(
                "acentric factor of {} has to be finite.",
                pure_record.identifier
            )));
        }
        Ok(Self {
            tc,
            pc,
            acentric_factor,
            pure_record,
        })
    }

    fn record(&self) -> &PureRecord<CubicRecord> {
        &self.pure_record
    }
}

impl fmt::Display for CubicParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pure_record)
    }
}
