//! Embedded country dataset.
//!
//! The dataset is embedded at compile time using `include_str!()`, so the
//! default table needs no runtime file I/O or path resolution.
//!
//! # Format
//!
//! CSV with header `cca2,cca3,ccn3,tld,cioc`, one row per country or
//! territory, ordered by alpha-3 code. Empty cells mean "no value".

/// Source name reported in logs and errors for the embedded dataset.
pub const COUNTRIES_SOURCE: &str = "countries.csv";

/// Country dataset (ISO 3166-1 codes, primary TLD, IOC code).
pub const COUNTRIES_CSV: &str = include_str!("../data/countries.csv");
