//! Field-to-field code conversion.
//!
//! Every conversion is the same operation: find the first record whose
//! `from` field equals the input, then read its `to` field. The family
//! façades in [`crate::facade`] only fix the two fields.

use crate::error::ConvertError;
use crate::facade::{Alpha2, Alpha3, Cioc, Numeric, TopLevelDomain};
use crate::field::CodeField;
use crate::record::CountryRecord;
use crate::table::CountryTable;

/// What a conversion does when no record matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MissPolicy {
    /// Fail with [`ConvertError::NotFound`].
    #[default]
    FailOnMiss,
    /// Return the input unchanged.
    PassthroughOnMiss,
}

impl MissPolicy {
    /// Build a policy from an `ignore_error` flag.
    pub const fn from_ignore_error(ignore_error: bool) -> Self {
        if ignore_error {
            Self::PassthroughOnMiss
        } else {
            Self::FailOnMiss
        }
    }
}

impl From<bool> for MissPolicy {
    fn from(ignore_error: bool) -> Self {
        Self::from_ignore_error(ignore_error)
    }
}

/// Convert `value` from one code family to another using `table`.
///
/// Matching is exact and first-match-wins in table order. An empty target
/// value on the matched record is returned as-is.
pub fn convert(
    table: &CountryTable,
    from: CodeField,
    to: CodeField,
    value: &str,
    policy: MissPolicy,
) -> Result<String, ConvertError> {
    if let Some(record) = find(table, from, value) {
        let converted = to.get(record);
        tracing::trace!(%from, %to, %value, %converted, "Country code converted");
        return Ok(converted.to_string());
    }

    match policy {
        MissPolicy::PassthroughOnMiss => {
            tracing::debug!(%from, %to, %value, "Country not found, passing value through");
            Ok(value.to_string())
        }
        MissPolicy::FailOnMiss => {
            tracing::debug!(%from, %to, %value, "Country not found");
            Err(ConvertError::not_found(from, value))
        }
    }
}

fn find<'t>(table: &'t CountryTable, field: CodeField, value: &str) -> Option<&'t CountryRecord> {
    table.iter().find(|record| field.get(record) == value)
}

/// Converter bound to one country table.
#[derive(Debug, Clone, Copy)]
pub struct CodeConverter<'t> {
    table: &'t CountryTable,
}

impl CodeConverter<'static> {
    /// Converter over the embedded dataset.
    pub fn embedded() -> Self {
        Self::new(CountryTable::embedded())
    }
}

impl Default for CodeConverter<'static> {
    fn default() -> Self {
        Self::embedded()
    }
}

impl<'t> CodeConverter<'t> {
    pub fn new(table: &'t CountryTable) -> Self {
        Self { table }
    }

    /// The table this converter reads.
    pub fn table(&self) -> &'t CountryTable {
        self.table
    }

    /// See [`convert`].
    pub fn convert(
        &self,
        from: CodeField,
        to: CodeField,
        value: &str,
        policy: impl Into<MissPolicy>,
    ) -> Result<String, ConvertError> {
        convert(self.table, from, to, value, policy.into())
    }

    /// First record whose `field` equals `value`.
    pub fn find(&self, field: CodeField, value: &str) -> Option<&'t CountryRecord> {
        find(self.table, field, value)
    }

    /// Like [`CodeConverter::find`], but fails with `NotFound` on a miss.
    pub fn lookup(&self, field: CodeField, value: &str) -> Result<&'t CountryRecord, ConvertError> {
        self.find(field, value)
            .ok_or_else(|| ConvertError::not_found(field, value))
    }

    pub fn alpha2(&self) -> Alpha2<'t> {
        Alpha2::new(*self)
    }

    pub fn alpha3(&self) -> Alpha3<'t> {
        Alpha3::new(*self)
    }

    pub fn numeric(&self) -> Numeric<'t> {
        Numeric::new(*self)
    }

    pub fn tld(&self) -> TopLevelDomain<'t> {
        TopLevelDomain::new(*self)
    }

    pub fn cioc(&self) -> Cioc<'t> {
        Cioc::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CountryTable {
        CountryTable::new(vec![
            CountryRecord::new("US", "USA", "840", ".us", "USA"),
            CountryRecord::new("CA", "CAN", "124", ".ca", "CAN"),
            CountryRecord::new("AQ", "ATA", "010", ".aq", ""),
        ])
    }

    #[test]
    fn converts_between_fields() {
        let table = table();
        let result = convert(
            &table,
            CodeField::Alpha2,
            CodeField::Numeric,
            "CA",
            MissPolicy::FailOnMiss,
        );
        assert_eq!(result.unwrap(), "124");
    }

    #[test]
    fn same_field_returns_matched_value() {
        let table = table();
        let converter = CodeConverter::new(&table);
        assert_eq!(
            converter
                .convert(CodeField::Tld, CodeField::Tld, ".ca", false)
                .unwrap(),
            ".ca"
        );
    }

    #[test]
    fn empty_target_is_returned_not_missed() {
        let table = table();
        let converter = CodeConverter::new(&table);
        assert_eq!(
            converter
                .convert(CodeField::Alpha2, CodeField::Cioc, "AQ", false)
                .unwrap(),
            ""
        );
    }

    #[test]
    fn miss_fails_by_default() {
        let table = table();
        let converter = CodeConverter::new(&table);
        let err = converter
            .convert(CodeField::Numeric, CodeField::Alpha2, "999", MissPolicy::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Country not found for ccn3 999");
        assert_eq!(
            err,
            ConvertError::NotFound {
                field: CodeField::Numeric,
                value: "999".to_string()
            }
        );
    }

    #[test]
    fn miss_passes_through_when_requested() {
        let table = table();
        let converter = CodeConverter::new(&table);
        let result = converter.convert(
            CodeField::Alpha3,
            CodeField::Alpha2,
            "ZZZ",
            MissPolicy::PassthroughOnMiss,
        );
        assert_eq!(result.unwrap(), "ZZZ");
    }

    #[test]
    fn matching_is_exact() {
        let table = table();
        let converter = CodeConverter::new(&table);
        for input in ["us", " US", "US ", "USA"] {
            assert!(
                converter
                    .convert(CodeField::Alpha2, CodeField::Alpha3, input, false)
                    .is_err(),
                "{input:?} should not match"
            );
        }
        assert!(
            converter
                .convert(CodeField::Tld, CodeField::Alpha2, "us", false)
                .is_err()
        );
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        let table = CountryTable::new(vec![
            CountryRecord::new("UM", "UMI", "581", ".us", ""),
            CountryRecord::new("US", "USA", "840", ".us", "USA"),
        ]);
        let converter = CodeConverter::new(&table);
        assert_eq!(
            converter
                .convert(CodeField::Tld, CodeField::Alpha2, ".us", false)
                .unwrap(),
            "UM"
        );
        // Empty values are matchable too.
        assert_eq!(
            converter
                .convert(CodeField::Cioc, CodeField::Alpha2, "", false)
                .unwrap(),
            "UM"
        );
    }

    #[test]
    fn lookup_returns_full_record() {
        let table = table();
        let converter = CodeConverter::new(&table);
        let record = converter.lookup(CodeField::Cioc, "CAN").unwrap();
        assert_eq!(record.alpha2, "CA");
        assert!(converter.lookup(CodeField::Cioc, "XYZ").is_err());
    }

    #[test]
    fn empty_table_always_misses() {
        let table = CountryTable::default();
        let converter = CodeConverter::new(&table);
        assert!(
            converter
                .convert(CodeField::Alpha2, CodeField::Alpha3, "US", false)
                .is_err()
        );
        assert_eq!(
            converter
                .convert(CodeField::Alpha2, CodeField::Alpha3, "US", true)
                .unwrap(),
            "US"
        );
    }

    #[test]
    fn policy_from_flag() {
        assert_eq!(MissPolicy::from(false), MissPolicy::FailOnMiss);
        assert_eq!(MissPolicy::from(true), MissPolicy::PassthroughOnMiss);
    }
}
