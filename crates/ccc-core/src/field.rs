//! Code families a country can be looked up by.

use serde::{Deserialize, Serialize};

use crate::record::CountryRecord;

/// A country code family.
///
/// The canonical name of each family is the dataset column it is stored in:
/// - **cca2**: ISO 3166-1 alpha-2
/// - **cca3**: ISO 3166-1 alpha-3
/// - **ccn3**: ISO 3166-1 numeric
/// - **tld**: Internet country code top-level domain
/// - **cioc**: International Olympic Committee code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeField {
    /// ISO 3166-1 alpha-2 (e.g., "US").
    #[serde(rename = "cca2")]
    Alpha2,
    /// ISO 3166-1 alpha-3 (e.g., "USA").
    #[serde(rename = "cca3")]
    Alpha3,
    /// ISO 3166-1 numeric (e.g., "840").
    #[serde(rename = "ccn3")]
    Numeric,
    /// Top-level domain (e.g., ".us").
    Tld,
    /// Olympic committee code (e.g., "USA").
    Cioc,
}

impl CodeField {
    /// All families, in dataset column order.
    pub const ALL: [CodeField; 5] = [
        CodeField::Alpha2,
        CodeField::Alpha3,
        CodeField::Numeric,
        CodeField::Tld,
        CodeField::Cioc,
    ];

    /// Returns the dataset column name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CodeField::Alpha2 => "cca2",
            CodeField::Alpha3 => "cca3",
            CodeField::Numeric => "ccn3",
            CodeField::Tld => "tld",
            CodeField::Cioc => "cioc",
        }
    }

    /// Returns a human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            CodeField::Alpha2 => "Alpha-2",
            CodeField::Alpha3 => "Alpha-3",
            CodeField::Numeric => "Numeric",
            CodeField::Tld => "TLD",
            CodeField::Cioc => "CIOC",
        }
    }

    /// Reads this field from a record.
    pub fn get<'a>(&self, record: &'a CountryRecord) -> &'a str {
        match self {
            CodeField::Alpha2 => &record.alpha2,
            CodeField::Alpha3 => &record.alpha3,
            CodeField::Numeric => &record.numeric,
            CodeField::Tld => &record.tld,
            CodeField::Cioc => &record.cioc,
        }
    }
}

impl std::fmt::Display for CodeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CodeField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "cca2" | "alpha2" | "alpha-2" => Ok(CodeField::Alpha2),
            "cca3" | "alpha3" | "alpha-3" => Ok(CodeField::Alpha3),
            "ccn3" | "numeric" => Ok(CodeField::Numeric),
            "tld" => Ok(CodeField::Tld),
            "cioc" | "ioc" => Ok(CodeField::Cioc),
            _ => Err(format!("Unknown code field: {s}")),
        }
    }
}
