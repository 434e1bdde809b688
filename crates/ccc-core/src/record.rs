//! Country record type.

use serde::{Deserialize, Serialize};

/// One country or territory.
///
/// Field names serialize as the dataset column names (`cca2`, `cca3`,
/// `ccn3`, `tld`, `cioc`). Values are kept as text: numeric codes keep
/// their leading zeros ("004" for Afghanistan).
///
/// Any field may be empty when the dataset has no value for it, e.g.
/// territories without an Olympic committee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-2 code.
    #[serde(rename = "cca2")]
    pub alpha2: String,

    /// ISO 3166-1 alpha-3 code.
    #[serde(rename = "cca3")]
    pub alpha3: String,

    /// ISO 3166-1 numeric code.
    #[serde(rename = "ccn3")]
    pub numeric: String,

    /// Primary top-level domain, including the leading dot.
    pub tld: String,

    /// International Olympic Committee code.
    pub cioc: String,
}

impl CountryRecord {
    /// Create a record from its five codes.
    pub fn new(
        alpha2: impl Into<String>,
        alpha3: impl Into<String>,
        numeric: impl Into<String>,
        tld: impl Into<String>,
        cioc: impl Into<String>,
    ) -> Self {
        Self {
            alpha2: alpha2.into(),
            alpha3: alpha3.into(),
            numeric: numeric.into(),
            tld: tld.into(),
            cioc: cioc.into(),
        }
    }
}
