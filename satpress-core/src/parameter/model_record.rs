use super::identifier::Identifier;
use super::{IdentifierOption, ParameterError};
use crate::correlation::AntoineRecord;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A collection of parameters of a pure substance.
///
/// Besides the parameters of the equation of state (`model_record`),
/// a record can carry the coefficients of a vapor pressure correlation
/// that is used to initialize the fugacity balance.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PureRecord<M> {
    pub identifier: Identifier,
    pub model_record: M,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antoine: Option<AntoineRecord>,
}

impl<M> PureRecord<M> {
    /// Create a new `PureRecord`.
    pub fn new(identifier: Identifier, model_record: M, antoine: Option<AntoineRecord>) -> Self {
        Self {
            identifier,
            model_record,
            antoine,
        }
    }

    /// Return the vapor pressure correlation of the substance.
    pub fn antoine(&self) -> Result<&AntoineRecord, ParameterError> {
        self.antoine.as_ref().ok_or_else(|| {
            ParameterError::MissingParameters(format!("antoine coefficients of {}", self.identifier))
        })
    }

    /// Create pure substance parameters from a json file.
    pub fn from_json<P>(
        substances: &[&str],
        file: P,
        identifier_option: IdentifierOption,
    ) -> Result<Vec<Self>, ParameterError>
    where
        P: AsRef<Path>,
        M: DeserializeOwned,
    {
        let reader = BufReader::new(File::open(file)?);
        let file_records: Vec<Self> = serde_json::from_reader(reader)?;
        Self::select(substances, file_records, identifier_option)
    }

    /// Pick the queried substances from a list of records, preserving
    /// the order of `substances`.
    pub(super) fn select(
        substances: &[&str],
        file_records: Vec<Self>,
        identifier_option: IdentifierOption,
    ) -> Result<Vec<Self>, ParameterError> {
        // create list of substances
        let mut queried: HashSet<String> = substances.iter().map(|s| s.to_string()).collect();
        // raise error on duplicate detection
        if queried.len() != substances.len() {
            return Err(ParameterError::IncompatibleParameters(
                "A substance was defined more than once.".to_string(),
            ));
        }

        // build map, draining list of queried substances in the process
        let mut records: HashMap<String, Self> = HashMap::with_capacity(substances.len());
        for record in file_records {
            if let Some(id) = record.identifier.key(identifier_option) {
                if let Some(id) = queried.take(id) {
                    records.insert(id, record);
                }
            }
            // all parameters parsed
            if queried.is_empty() {
                break;
            }
        }

        // report missing parameters
        if !queried.is_empty() {
            let mut missing: Vec<_> = queried.into_iter().collect();
            missing.sort();
            return Err(ParameterError::ComponentsNotFound(format!("{:?}", missing)));
        };

        // collect into vec in correct order
        substances
            .iter()
            .map(|&s| {
                records
                    .remove(s)
                    .ok_or_else(|| ParameterError::ComponentsNotFound(s.to_string()))
            })
            .collect()
    }
}

impl<M> std::fmt::Display for PureRecord<M>
where
    M: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PureRecord(")?;
        write!(f, "\n\tidentifier={},", self.identifier)?;
        write!(f, "\n\tmodel_record={},", self.model_record)?;
        if let Some(antoine) = &self.antoine {
            write!(f, "\n\tantoine={},", antoine)?;
        }
        write!(f, "\n)")
    }
}
