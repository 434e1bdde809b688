//! Per-family conversion façades.
//!
//! Each façade fixes the source family and exposes one method per target
//! family. All twenty methods forward to [`CodeConverter::convert`] with the
//! caller's miss policy unchanged.
//!
//! ```
//! use ccc_core::{CodeConverter, CountryRecord, CountryTable};
//!
//! let table = CountryTable::new(vec![
//!     CountryRecord::new("US", "USA", "840", ".us", "USA"),
//! ]);
//! let converter = CodeConverter::new(&table);
//!
//! assert_eq!(converter.numeric().to_tld("840", false).unwrap(), ".us");
//! assert!(converter.tld().to_alpha2(".xyz", false).is_err());
//! ```

use crate::converter::{CodeConverter, MissPolicy};
use crate::error::ConvertError;
use crate::field::CodeField;

macro_rules! facade {
    (
        $(#[$meta:meta])*
        $name:ident from $from:ident {
            $( $(#[$method_meta:meta])* $method:ident => $to:ident, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'t> {
            converter: CodeConverter<'t>,
        }

        impl<'t> $name<'t> {
            /// Source family of every conversion on this façade.
            pub const FROM: CodeField = CodeField::$from;

            pub fn new(converter: CodeConverter<'t>) -> Self {
                Self { converter }
            }

            $(
                $(#[$method_meta])*
                pub fn $method(
                    &self,
                    code: &str,
                    policy: impl Into<MissPolicy>,
                ) -> Result<String, ConvertError> {
                    self.converter
                        .convert(CodeField::$from, CodeField::$to, code, policy)
                }
            )+
        }
    };
}

facade! {
    /// Conversions from ISO 3166-1 alpha-2 codes.
    Alpha2 from Alpha2 {
        /// Alpha-2 to alpha-3 (e.g., "US" -> "USA").
        to_alpha3 => Alpha3,
        /// Alpha-2 to numeric (e.g., "US" -> "840").
        to_numeric => Numeric,
        /// Alpha-2 to top-level domain (e.g., "US" -> ".us").
        to_tld => Tld,
        /// Alpha-2 to Olympic committee code (e.g., "DE" -> "GER").
        to_cioc => Cioc,
    }
}

facade! {
    /// Conversions from ISO 3166-1 alpha-3 codes.
    Alpha3 from Alpha3 {
        to_alpha2 => Alpha2,
        to_numeric => Numeric,
        to_tld => Tld,
        to_cioc => Cioc,
    }
}

facade! {
    /// Conversions from ISO 3166-1 numeric codes.
    ///
    /// Numeric codes are matched as text, so "4" does not find "004".
    Numeric from Numeric {
        to_alpha2 => Alpha2,
        to_alpha3 => Alpha3,
        to_tld => Tld,
        to_cioc => Cioc,
    }
}

facade! {
    /// Conversions from country code top-level domains.
    ///
    /// The leading dot is part of the code: ".us" matches, "us" does not.
    TopLevelDomain from Tld {
        to_alpha2 => Alpha2,
        to_alpha3 => Alpha3,
        to_numeric => Numeric,
        to_cioc => Cioc,
    }
}

facade! {
    /// Conversions from International Olympic Committee codes.
    Cioc from Cioc {
        to_alpha2 => Alpha2,
        to_alpha3 => Alpha3,
        to_numeric => Numeric,
        to_tld => Tld,
    }
}
