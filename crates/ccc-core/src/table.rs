//! Country lookup table.
//!
//! A [`CountryTable`] is an ordered, immutable list of [`CountryRecord`]s.
//! The bundled dataset is parsed once per process and shared through
//! [`CountryTable::embedded`]; other tables are ordinary owned values built
//! from records, CSV or world-countries JSON.

use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::embedded;
use crate::error::{Result, TableError};
use crate::field::CodeField;
use crate::record::CountryRecord;

static EMBEDDED: LazyLock<CountryTable> = LazyLock::new(|| {
    CountryTable::from_csv_str(embedded::COUNTRIES_CSV, embedded::COUNTRIES_SOURCE)
        .expect("embedded country dataset must parse")
});

/// Ordered, read-only sequence of country records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryTable {
    records: Vec<CountryRecord>,
}

impl CountryTable {
    /// Build a table from records, keeping their order.
    ///
    /// Duplicate alpha-2 or alpha-3 values are logged but kept; lookups
    /// return the first record in table order.
    pub fn new(records: Vec<CountryRecord>) -> Self {
        warn_duplicates(&records, CodeField::Alpha2);
        warn_duplicates(&records, CodeField::Alpha3);
        Self { records }
    }

    /// The process-wide table built from the embedded dataset.
    ///
    /// Parsed on first access and never rebuilt.
    ///
    /// # Panics
    ///
    /// Panics if the embedded dataset is malformed, which is a build defect.
    pub fn embedded() -> &'static CountryTable {
        &EMBEDDED
    }

    /// All records in table order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Iterate over records in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parse the CSV dataset format (`cca2,cca3,ccn3,tld,cioc`).
    pub fn from_csv_str(content: &str, source_name: &str) -> Result<Self> {
        let cursor = Cursor::new(content.as_bytes());
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(cursor);

        let mut records = Vec::new();
        for result in reader.deserialize::<CountryRecord>() {
            let record = result.map_err(|e| TableError::CsvParse {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
            records.push(record);
        }

        tracing::debug!(
            source = %source_name,
            records = records.len(),
            "Loaded country table from CSV"
        );
        Ok(Self::new(records))
    }

    /// Parse the `world-countries` JSON shape.
    ///
    /// Each entry carries `cca2`, `cca3`, `ccn3`, a `tld` array and an
    /// optional `cioc`. The first TLD becomes the record's TLD; missing or
    /// `null` values become empty strings. Other keys are ignored.
    pub fn from_world_countries_json(content: &str, source_name: &str) -> Result<Self> {
        let entries: Vec<WorldCountryEntry> =
            serde_json::from_str(content).map_err(|e| TableError::JsonParse {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;

        let records: Vec<CountryRecord> = entries
            .into_iter()
            .map(WorldCountryEntry::into_record)
            .collect();

        tracing::debug!(
            source = %source_name,
            records = records.len(),
            "Loaded country table from world-countries JSON"
        );
        Ok(Self::new(records))
    }

    /// Load a dataset file, choosing the parser by extension.
    pub fn load_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|v| v.to_str())
            .map(str::to_ascii_lowercase);
        let source_name = path.display().to_string();

        match extension.as_deref() {
            Some("csv") => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| TableError::io(path, e))?;
                Self::from_csv_str(&content, &source_name)
            }
            Some("json") => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| TableError::io(path, e))?;
                Self::from_world_countries_json(&content, &source_name)
            }
            _ => Err(TableError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl FromIterator<CountryRecord> for CountryTable {
    fn from_iter<I: IntoIterator<Item = CountryRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CountryTable {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[derive(Debug, Deserialize)]
struct WorldCountryEntry {
    #[serde(default)]
    cca2: Option<String>,
    #[serde(default)]
    cca3: Option<String>,
    #[serde(default)]
    ccn3: Option<String>,
    #[serde(default)]
    tld: Option<Vec<String>>,
    #[serde(default)]
    cioc: Option<String>,
}

impl WorldCountryEntry {
    fn into_record(self) -> CountryRecord {
        CountryRecord {
            alpha2: self.cca2.unwrap_or_default(),
            alpha3: self.cca3.unwrap_or_default(),
            numeric: self.ccn3.unwrap_or_default(),
            tld: self
                .tld
                .and_then(|tlds| tlds.into_iter().next())
                .unwrap_or_default(),
            cioc: self.cioc.unwrap_or_default(),
        }
    }
}

fn warn_duplicates(records: &[CountryRecord], field: CodeField) {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    for (row, record) in records.iter().enumerate() {
        let value = field.get(record);
        if value.is_empty() {
            continue;
        }
        if let Some(first) = seen.get(value) {
            tracing::warn!(
                field = %field,
                value = %value,
                first_row = first,
                shadowed_row = row,
                "Duplicate country code; later record is unreachable by this field"
            );
        } else {
            seen.insert(value, row);
        }
    }
}
