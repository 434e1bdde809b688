//! Rendering of conversion results and country records.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use ccc_core::{CodeConverter, CodeField, ConvertError, CountryRecord, MissPolicy};

/// Outcome of converting one input code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub result: Result<String, ConvertError>,
}

/// Convert each code in order with the same fields and policy.
pub fn convert_codes<S: AsRef<str>>(
    converter: &CodeConverter<'_>,
    from: CodeField,
    to: CodeField,
    codes: &[S],
    policy: MissPolicy,
) -> Vec<Conversion> {
    codes
        .iter()
        .map(|code| {
            let input = code.as_ref();
            Conversion {
                input: input.to_string(),
                result: converter.convert(from, to, input, policy),
            }
        })
        .collect()
}

/// Build a table with one row per record, columns in dataset order.
pub fn record_table<'a, I>(records: I) -> Table
where
    I: IntoIterator<Item = &'a CountryRecord>,
{
    let mut table = Table::new();
    table.set_header(CodeField::ALL.iter().map(|field| header_cell(field.label())));
    apply_table_style(&mut table);
    for record in records {
        table.add_row(CodeField::ALL.iter().map(|field| field.get(record)));
    }
    table
}

/// Serialize records as a pretty-printed JSON array.
pub fn records_json<'a, I>(records: I) -> serde_json::Result<String>
where
    I: IntoIterator<Item = &'a CountryRecord>,
{
    let records: Vec<&CountryRecord> = records.into_iter().collect();
    serde_json::to_string_pretty(&records)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_row_per_record() {
        let records = [
            CountryRecord::new("US", "USA", "840", ".us", "USA"),
            CountryRecord::new("CA", "CAN", "124", ".ca", "CAN"),
        ];
        let mut table = record_table(&records);
        assert_eq!(table.column_count(), 5);
        assert_eq!(table.row_iter().count(), 2);
    }
}
