//! Structures and traits that can be used to build model parameters for equations of state.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

mod identifier;
mod model_record;

pub use identifier::{Identifier, IdentifierOption};
pub use model_record::PureRecord;

/// Constructor methods for parameters.
///
/// By implementing `Parameter` for a type, you define how parameters
/// of an equation of state are constructed from the record of a
/// single substance.
pub trait Parameter
where
    Self: Sized,
{
    type Pure: Clone + DeserializeOwned;

    /// Creates parameters from the record of a pure substance.
    fn from_record(pure_record: PureRecord<Self::Pure>) -> Result<Self, ParameterError>;

    /// Return the record that was used to construct the parameters.
    fn record(&self) -> &PureRecord<Self::Pure>;

    /// Creates parameters for a substance stored in a json file.
    fn from_json<P>(
        substance: &str,
        file: P,
        identifier_option: IdentifierOption,
    ) -> Result<Self, ParameterError>
    where
        P: AsRef<Path>,
    {
        let record = PureRecord::from_json(&[substance], file, identifier_option)?
            .pop()
            .ok_or(ParameterError::InsufficientInformation)?;
        Self::from_record(record)
    }

    /// Creates parameters for a substance of a component table.
    fn from_table(
        table: &ComponentTable<Self::Pure>,
        substance: &str,
    ) -> Result<Self, ParameterError> {
        Self::from_record(table.get(substance)?.clone())
    }
}

/// Immutable collection of pure substance records, keyed by the
/// identifier selected on construction.
///
/// The table is read once (e.g. at program start) and passed explicitly
/// to every calculation that needs component constants.
#[derive(Debug, Clone)]
pub struct ComponentTable<M> {
    records: IndexMap<String, PureRecord<M>>,
    identifier_option: IdentifierOption,
}

impl<M> ComponentTable<M> {
    /// Build a table from a list of records.
    ///
    /// Records that do not provide the requested identifier are ignored.
    pub fn new(
        pure_records: Vec<PureRecord<M>>,
        identifier_option: IdentifierOption,
    ) -> Result<Self, ParameterError> {
        let mut records = IndexMap::with_capacity(pure_records.len());
        for record in pure_records {
            if let Some(id) = record.identifier.key(identifier_option).map(str::to_owned) {
                if records.contains_key(&id) {
                    return Err(ParameterError::IncompatibleParameters(format!(
                        "The substance '{}' was defined more than once.",
                        id
                    )));
                }
                records.insert(id, record);
            }
        }
        Ok(Self {
            records,
            identifier_option,
        })
    }

    /// Read a table from a json file containing a list of pure records.
    pub fn from_json<P>(file: P, identifier_option: IdentifierOption) -> Result<Self, ParameterError>
    where
        P: AsRef<Path>,
        M: DeserializeOwned,
    {
        let reader = BufReader::new(File::open(file)?);
        Self::new(serde_json::from_reader(reader)?, identifier_option)
    }

    /// Read a table from a json string containing a list of pure records.
    pub fn from_json_str(json: &str, identifier_option: IdentifierOption) -> Result<Self, ParameterError>
    where
        M: DeserializeOwned,
    {
        Self::new(serde_json::from_str(json)?, identifier_option)
    }

    /// Return the record of a substance.
    pub fn get(&self, substance: &str) -> Result<&PureRecord<M>, ParameterError> {
        self.records
            .get(substance)
            .ok_or_else(|| ParameterError::ComponentsNotFound(format!("{:?}", [substance])))
    }

    /// Return the records of several substances in the given order.
    pub fn select(&self, substances: &[&str]) -> Result<Vec<&PureRecord<M>>, ParameterError> {
        let missing: Vec<_> = substances
            .iter()
            .filter(|s| !self.records.contains_key(**s))
            .collect();
        if !missing.is_empty() {
            return Err(ParameterError::ComponentsNotFound(format!("{:?}", missing)));
        }
        substances.iter().map(|s| self.get(s)).collect()
    }

    /// The identifier option used as key of the table.
    pub fn identifier_option(&self) -> IdentifierOption {
        self.identifier_option
    }

    /// Keys of all substances in the table.
    pub fn substances(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PureRecord<M>)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Error type for incomplete parameter information and IO problems.
#[derive(Error, Debug)]
pub enum ParameterError {
    #[error(transparent)]
    FileIO(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("The following component(s) were not found: {0}")]
    ComponentsNotFound(String),
    #[error("The identifier '{0}' is not known. ['cas', 'name', 'iupac_name', 'smiles', 'inchi', 'formula']")]
    IdentifierNotFound(String),
    #[error("Information missing.")]
    InsufficientInformation,
    #[error("Incompatible parameters: {0}")]
    IncompatibleParameters(String),
    #[error("Missing parameters: {0}")]
    MissingParameters(String),
}
