//! Subcommand implementations.

use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use ccc_core::{CodeConverter, CountryTable, MissPolicy};

use crate::cli::{ConvertArgs, ListArgs, LookupArgs};
use crate::output::{convert_codes, record_table, records_json};

/// Resolve the table to convert with: a dataset file if given, else the bundled one.
pub fn load_table(data: Option<&Path>) -> Result<Cow<'static, CountryTable>> {
    match data {
        Some(path) => {
            let table = CountryTable::load_path(path)
                .with_context(|| format!("load country dataset {}", path.display()))?;
            info!(path = %path.display(), records = table.len(), "Using country dataset");
            if table.is_empty() {
                warn!(path = %path.display(), "Country dataset has no records");
            }
            Ok(Cow::Owned(table))
        }
        None => Ok(Cow::Borrowed(CountryTable::embedded())),
    }
}

/// Write one converted code per line to `out` and one error per miss to `err`.
///
/// Returns true when every code converted (or passed through).
pub fn run_convert<W: Write, E: Write>(
    table: &CountryTable,
    args: &ConvertArgs,
    out: &mut W,
    err: &mut E,
) -> Result<bool> {
    let converter = CodeConverter::new(table);
    let policy = MissPolicy::from_ignore_error(args.ignore_error);
    let conversions = convert_codes(
        &converter,
        args.from,
        args.to,
        args.codes.as_slice(),
        policy,
    );

    let mut all_ok = true;
    for conversion in conversions {
        match conversion.result {
            Ok(value) => writeln!(out, "{value}").context("write conversion")?,
            Err(error) => {
                writeln!(err, "error: {error}").context("write conversion error")?;
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

pub fn run_lookup(table: &CountryTable, args: &LookupArgs) -> Result<()> {
    let converter = CodeConverter::new(table);
    let record = converter.lookup(args.from, &args.code)?;
    if args.json {
        let json = serde_json::to_string_pretty(record).context("serialize record")?;
        println!("{json}");
    } else {
        println!("{}", record_table([record]));
    }
    Ok(())
}

pub fn run_list(table: &CountryTable, args: &ListArgs) -> Result<()> {
    if args.json {
        println!("{}", records_json(table).context("serialize records")?);
    } else {
        println!("{}", record_table(table));
    }
    Ok(())
}
