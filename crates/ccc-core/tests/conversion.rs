//! Conversion behavior against a small substitute table.

use ccc_core::{CodeConverter, CodeField, ConvertError, CountryRecord, CountryTable, MissPolicy};

fn north_america() -> CountryTable {
    CountryTable::new(vec![
        CountryRecord::new("US", "USA", "840", ".us", "USA"),
        CountryRecord::new("CA", "CAN", "124", ".ca", "CAN"),
    ])
}

#[test]
fn alpha2_conversions() {
    let table = north_america();
    let converter = CodeConverter::new(&table);
    let alpha2 = converter.alpha2();

    assert_eq!(alpha2.to_alpha3("US", false).unwrap(), "USA");
    assert_eq!(alpha2.to_numeric("US", false).unwrap(), "840");
    assert_eq!(alpha2.to_tld("US", false).unwrap(), ".us");
    assert_eq!(alpha2.to_cioc("US", false).unwrap(), "USA");

    let err = alpha2.to_alpha3("XX", false).unwrap_err();
    assert_eq!(err.to_string(), "Country not found for cca2 XX");
}

#[test]
fn alpha3_conversions() {
    let table = north_america();
    let converter = CodeConverter::new(&table);
    let alpha3 = converter.alpha3();

    assert_eq!(alpha3.to_alpha2("USA", false).unwrap(), "US");
    assert_eq!(alpha3.to_alpha2("CAN", false).unwrap(), "CA");
    assert_eq!(alpha3.to_numeric("USA", false).unwrap(), "840");
    assert_eq!(alpha3.to_tld("USA", false).unwrap(), ".us");
    assert_eq!(alpha3.to_cioc("USA", false).unwrap(), "USA");

    let err = alpha3.to_alpha2("XYZ", false).unwrap_err();
    assert_eq!(err.to_string(), "Country not found for cca3 XYZ");
}

#[test]
fn numeric_conversions() {
    let table = north_america();
    let converter = CodeConverter::new(&table);
    let numeric = converter.numeric();

    assert_eq!(numeric.to_alpha2("840", false).unwrap(), "US");
    assert_eq!(numeric.to_alpha3("840", false).unwrap(), "USA");
    assert_eq!(numeric.to_tld("840", false).unwrap(), ".us");
    assert_eq!(numeric.to_cioc("840", false).unwrap(), "USA");

    let err = numeric.to_alpha2("999", false).unwrap_err();
    assert_eq!(err.to_string(), "Country not found for ccn3 999");
}

#[test]
fn tld_conversions() {
    let table = north_america();
    let converter = CodeConverter::new(&table);
    let tld = converter.tld();

    assert_eq!(tld.to_alpha2(".us", false).unwrap(), "US");
    assert_eq!(tld.to_alpha3(".us", false).unwrap(), "USA");
    assert_eq!(tld.to_numeric(".us", false).unwrap(), "840");
    assert_eq!(tld.to_cioc(".us", false).unwrap(), "USA");

    let err = tld.to_alpha2(".xyz", false).unwrap_err();
    assert_eq!(err.to_string(), "Country not found for tld .xyz");
    assert_eq!(
        err,
        ConvertError::NotFound {
            field: CodeField::Tld,
            value: ".xyz".to_string(),
        }
    );
}

#[test]
fn cioc_conversions() {
    let table = north_america();
    let converter = CodeConverter::new(&table);
    let cioc = converter.cioc();

    assert_eq!(cioc.to_alpha2("USA", false).unwrap(), "US");
    assert_eq!(cioc.to_alpha3("USA", false).unwrap(), "USA");
    assert_eq!(cioc.to_numeric("USA", false).unwrap(), "840");
    assert_eq!(cioc.to_tld("USA", false).unwrap(), ".us");

    let err = cioc.to_alpha2("XYZ", false).unwrap_err();
    assert_eq!(err.to_string(), "Country not found for cioc XYZ");
}

#[test]
fn passthrough_returns_input() {
    let table = north_america();
    let converter = CodeConverter::new(&table);

    assert_eq!(converter.cioc().to_alpha2("XYZ", true).unwrap(), "XYZ");
    assert_eq!(
        converter
            .tld()
            .to_numeric(".xyz", MissPolicy::PassthroughOnMiss)
            .unwrap(),
        ".xyz"
    );
    // Hits are unaffected by the policy.
    assert_eq!(converter.alpha2().to_alpha3("CA", true).unwrap(), "CAN");
}

#[test]
fn repeated_calls_are_deterministic() {
    let table = north_america();
    let converter = CodeConverter::new(&table);
    let first = converter.numeric().to_alpha3("124", false).unwrap();
    for _ in 0..10 {
        assert_eq!(converter.numeric().to_alpha3("124", false).unwrap(), first);
    }
    let miss = converter.numeric().to_alpha3("000", false).unwrap_err();
    assert_eq!(converter.numeric().to_alpha3("000", false).unwrap_err(), miss);
}

#[test]
fn converter_is_shareable_across_threads() {
    let table = north_america();
    let converter = CodeConverter::new(&table);
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["US", "CA"]
            .into_iter()
            .map(|code| scope.spawn(move || converter.alpha2().to_alpha3(code, false)))
            .collect();
        let results: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        assert_eq!(results, vec!["USA".to_string(), "CAN".to_string()]);
    });
}
