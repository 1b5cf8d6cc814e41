use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::presentation::MISSING_FIELD_PLACEHOLDER;

pub use crate::types::{ColumnName, GroupName, Tag};

/// One scalar spreadsheet cell as delivered by a sheet source.
///
/// Variant order matters for untagged deserialization: numbers must be
/// tried before text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric cell.
    Number(f64),
    /// Text cell; may be blank.
    Text(String),
    /// Explicitly empty cell.
    Empty,
}

impl CellValue {
    /// Trimmed, non-blank text content of the cell.
    ///
    /// Numeric cells render through their shortest display form so text
    /// fields survive sheets that store them as numbers.
    pub fn trimmed_text(&self) -> Option<String> {
        match self {
            CellValue::Number(value) => Some(value.to_string()),
            CellValue::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            CellValue::Empty => None,
        }
    }

    /// Locale-agnostic numeric content of the cell.
    ///
    /// Text parses through `f64`; anything unparsable or non-finite is
    /// `None`, never an error and never zero.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(text) => text.trim().parse::<f64>().ok(),
            CellValue::Empty => None,
        };
        value.filter(|value| value.is_finite())
    }
}

/// Ordered `column → cell` mapping for one raw row.
///
/// Insertion order is the source column order, which tag collection relies
/// on.
pub type RawRow = IndexMap<ColumnName, CellValue>;

/// One named sheet of raw rows, as delivered by a `SheetSource`.
#[derive(Clone, Debug)]
pub struct SheetGroup {
    /// Sheet/tab name within the source.
    pub name: GroupName,
    /// Raw rows in sheet order.
    pub rows: Vec<RawRow>,
}

/// Canonical program/offering entry produced by the normalizer.
///
/// Immutable once produced; no downstream component mutates a record in
/// place. Text fields stay `None` when the source row lacks them; the
/// `"N/A"` placeholder belongs to presentation, see [`text_or_placeholder`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub university_name: Option<String>,
    pub speciality: Option<String>,
    pub major: Option<String>,
    pub field: Option<String>,
    pub program_level: Option<String>,
    pub institution_type: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    /// Currency-agnostic yearly tuition magnitude. `None` when missing or
    /// unparsable, never zero.
    pub tuition_price: Option<f64>,
    pub tuition_currency: Option<String>,
    /// One-time application fee magnitude; same null semantics as tuition.
    pub application_fee_price: Option<f64>,
    pub application_fee_currency: Option<String>,
    pub duration: Option<String>,
    pub picture_url: Option<String>,
    /// Zero or more tags, in source column order.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Presentation-time substitution for missing text fields.
///
/// The normalizer preserves `None` rather than faking data; hosts call this
/// at the rendering boundary.
pub fn text_or_placeholder(field: Option<&str>) -> &str {
    field.unwrap_or(MISSING_FIELD_PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_text_drops_blank_cells() {
        assert_eq!(
            CellValue::Text("  McGill  ".into()).trimmed_text(),
            Some("McGill".to_string())
        );
        assert_eq!(CellValue::Text("   ".into()).trimmed_text(), None);
        assert_eq!(CellValue::Empty.trimmed_text(), None);
        assert_eq!(
            CellValue::Number(4.0).trimmed_text(),
            Some("4".to_string())
        );
    }

    #[test]
    fn as_number_coerces_text_and_rejects_garbage() {
        assert_eq!(CellValue::Number(12000.0).as_number(), Some(12000.0));
        assert_eq!(CellValue::Text(" 99.5 ".into()).as_number(), Some(99.5));
        assert_eq!(CellValue::Text("N/A".into()).as_number(), None);
        assert_eq!(CellValue::Text("".into()).as_number(), None);
        assert_eq!(CellValue::Text("NaN".into()).as_number(), None);
        assert_eq!(CellValue::Empty.as_number(), None);
    }

    #[test]
    fn record_serializes_missing_numerics_as_explicit_null() {
        let record = ProgramRecord {
            university_name: Some("McGill University".into()),
            ..ProgramRecord::default()
        };
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["tuition_price"], serde_json::Value::Null);
        assert_eq!(json["university_name"], "McGill University");
    }

    #[test]
    fn placeholder_applies_only_at_presentation() {
        assert_eq!(text_or_placeholder(None), "N/A");
        assert_eq!(text_or_placeholder(Some("Public")), "Public");
    }
}
