use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier field used as key of a component table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierOption {
    Cas,
    #[default]
    Name,
    IupacName,
    Smiles,
    Inchi,
    Formula,
}

impl IdentifierOption {
    const ALL: [Self; 6] = [
        Self::Cas,
        Self::Name,
        Self::IupacName,
        Self::Smiles,
        Self::Inchi,
        Self::Formula,
    ];

    /// Field name as it appears in the json records.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cas => "cas",
            Self::Name => "name",
            Self::IupacName => "iupac_name",
            Self::Smiles => "smiles",
            Self::Inchi => "inchi",
            Self::Formula => "formula",
        }
    }
}

/// Names and keys under which a substance can be looked up.
///
/// All fields are optional; a record is only reachable through a
/// [ComponentTable](super::ComponentTable) keyed by a field it provides.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Identifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iupac_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smiles: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inchi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl Identifier {
    /// Value of the requested field, if present.
    pub fn key(&self, option: IdentifierOption) -> Option<&str> {
        let field = match option {
            IdentifierOption::Cas => &self.cas,
            IdentifierOption::Name => &self.name,
            IdentifierOption::IupacName => &self.iupac_name,
            IdentifierOption::Smiles => &self.smiles,
            IdentifierOption::Inchi => &self.inchi,
            IdentifierOption::Formula => &self.formula,
        };
        field.as_deref()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<_> = IdentifierOption::ALL
            .iter()
            .filter_map(|&option| {
                self.key(option)
                    .map(|key| format!("{}={}", option.label(), key))
            })
            .collect();
        write!(f, "Identifier({})", ids.join(", "))
    }
}
