//! Raw row → canonical record coercion.
//!
//! Normalization is a pure function of its input row. Every column is
//! optional: per-sheet schemas drift, so a missing column reads the same as
//! an empty cell. Unparsable numerics become `None`, never zero and never
//! an error.

use crate::columns::{
    COL_APPLICATION_FEE_CURRENCY, COL_APPLICATION_FEE_PRICE, COL_CITY, COL_COUNTRY, COL_DURATION,
    COL_FIELD, COL_INSTITUTION_TYPE, COL_LEVEL, COL_MAJOR, COL_PICTURE, COL_SPECIALITY,
    COL_TUITION_CURRENCY, COL_TUITION_PRICE, COL_UNIVERSITY_NAME, ColumnKey, TAG_COLUMN_PREFIX,
};
use crate::data::{ProgramRecord, RawRow};
use crate::types::Tag;

/// Coerce one raw row into a canonical [`ProgramRecord`].
pub fn normalize_row(row: &RawRow) -> ProgramRecord {
    ProgramRecord {
        university_name: COL_UNIVERSITY_NAME.text(row),
        speciality: COL_SPECIALITY.text(row),
        major: COL_MAJOR.text(row),
        field: COL_FIELD.text(row),
        program_level: COL_LEVEL.text(row),
        institution_type: COL_INSTITUTION_TYPE.text(row),
        country: COL_COUNTRY.text(row),
        city: COL_CITY.text(row),
        tuition_price: price(row, COL_TUITION_PRICE),
        tuition_currency: COL_TUITION_CURRENCY.text(row),
        application_fee_price: price(row, COL_APPLICATION_FEE_PRICE),
        application_fee_currency: COL_APPLICATION_FEE_CURRENCY.text(row),
        duration: COL_DURATION.text(row),
        picture_url: COL_PICTURE.text(row),
        tags: collect_tags(row),
    }
}

/// Price magnitudes are non-negative when present; a negative parse is as
/// unusable as text garbage and coerces to `None` too.
fn price(row: &RawRow, key: ColumnKey) -> Option<f64> {
    key.number(row).filter(|value| *value >= 0.0)
}

/// Collect tag-column values in source column order.
fn collect_tags(row: &RawRow) -> Vec<Tag> {
    row.iter()
        .filter(|(name, _)| name.trim().starts_with(TAG_COLUMN_PREFIX))
        .filter_map(|(_, cell)| cell.trimmed_text())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CellValue;

    fn row(cells: &[(&str, CellValue)]) -> RawRow {
        cells
            .iter()
            .map(|(name, cell)| (name.to_string(), cell.clone()))
            .collect()
    }

    #[test]
    fn unparsable_tuition_normalizes_to_none() {
        let raw = row(&[
            ("University Name", CellValue::Text("McGill University".into())),
            ("Tuition Price", CellValue::Text("N/A".into())),
        ]);
        let record = normalize_row(&raw);
        assert_eq!(record.university_name.as_deref(), Some("McGill University"));
        assert_eq!(record.tuition_price, None);
    }

    #[test]
    fn missing_columns_stay_none() {
        let record = normalize_row(&RawRow::new());
        assert_eq!(record, ProgramRecord::default());
    }

    #[test]
    fn numeric_cells_pass_through() {
        let raw = row(&[
            ("Tuition Price", CellValue::Number(18_500.0)),
            ("Application Fee Price", CellValue::Text(" 120 ".into())),
        ]);
        let record = normalize_row(&raw);
        assert_eq!(record.tuition_price, Some(18_500.0));
        assert_eq!(record.application_fee_price, Some(120.0));
    }

    #[test]
    fn negative_prices_coerce_to_none() {
        let raw = row(&[("Tuition Price", CellValue::Number(-500.0))]);
        assert_eq!(normalize_row(&raw).tuition_price, None);
    }

    #[test]
    fn tags_keep_source_column_order() {
        let raw = row(&[
            ("Tag 1", CellValue::Text("STEM".into())),
            ("Country", CellValue::Text("Canada".into())),
            ("Tag 2", CellValue::Text("  Co-op ".into())),
            ("Tag 3", CellValue::Empty),
        ]);
        assert_eq!(normalize_row(&raw).tags, vec!["STEM", "Co-op"]);
    }
}
