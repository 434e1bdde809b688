//! ISO 3166-1 country code conversion.
//!
//! This crate provides:
//!
//! - **Country records** with alpha-2, alpha-3, numeric, TLD and IOC codes
//! - **Lookup tables** built from embedded data or loaded from CSV / JSON
//! - **A generic converter** between any two code families
//! - **Family façades** (`Alpha2`, `Alpha3`, `Numeric`, `TopLevelDomain`, `Cioc`)
//!
//! # Module Organization
//!
//! - [`field`]: The closed set of code families (`CodeField`)
//! - [`record`]: One country entry (`CountryRecord`)
//! - [`embedded`]: Dataset bundled at compile time
//! - [`table`]: Immutable ordered lookup table and its loaders
//! - [`converter`]: First-match lookup and miss policy
//! - [`facade`]: Named per-family conversion operations
//! - [`error`]: Conversion and loading errors
//!
//! # Matching Rules
//!
//! Lookups are exact string comparisons in table order. There is no case
//! folding, trimming or normalization of the TLD's leading dot. When several
//! records share a value, the first one wins.
//!
//! # Example
//!
//! ```
//! use ccc_core::{CodeConverter, MissPolicy};
//!
//! let converter = CodeConverter::embedded();
//! assert_eq!(converter.alpha2().to_alpha3("DE", MissPolicy::FailOnMiss).unwrap(), "DEU");
//! assert_eq!(converter.cioc().to_alpha2("GER", false).unwrap(), "DE");
//!
//! // Unknown codes pass through when asked to.
//! assert_eq!(converter.alpha3().to_alpha2("ZZZ", true).unwrap(), "ZZZ");
//! ```

#![deny(unsafe_code)]

pub mod converter;
pub mod embedded;
pub mod error;
pub mod facade;
pub mod field;
pub mod record;
pub mod table;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use converter::{CodeConverter, MissPolicy, convert};
pub use error::{ConvertError, Result, TableError};
pub use facade::{Alpha2, Alpha3, Cioc, Numeric, TopLevelDomain};
pub use field::CodeField;
pub use record::CountryRecord;
pub use table::CountryTable;
