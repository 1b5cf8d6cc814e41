use crate::data::{CellValue, RawRow};

/// Canonical identifier for a spreadsheet column.
///
/// Sheets carry heterogeneous schemas, so every lookup is optional; a
/// missing column reads the same as an empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnKey {
    name: &'static str,
}

impl ColumnKey {
    /// Create a column key with a canonical static name.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Return the raw column label.
    pub const fn as_str(&self) -> &'static str {
        self.name
    }

    /// Borrow this column's cell from a raw row, when the sheet carries it.
    pub fn cell<'a>(&self, row: &'a RawRow) -> Option<&'a CellValue> {
        row.get(self.name)
    }

    /// Trimmed, non-blank text content of this column, if any.
    pub fn text(&self, row: &RawRow) -> Option<String> {
        self.cell(row).and_then(CellValue::trimmed_text)
    }

    /// Locale-agnostic numeric content of this column, if parsable.
    pub fn number(&self, row: &RawRow) -> Option<f64> {
        self.cell(row).and_then(CellValue::as_number)
    }
}

/// `University Name` column.
pub const COL_UNIVERSITY_NAME: ColumnKey = ColumnKey::new("University Name");
/// `Speciality` column.
pub const COL_SPECIALITY: ColumnKey = ColumnKey::new("Speciality");
/// `Major` column.
pub const COL_MAJOR: ColumnKey = ColumnKey::new("Major");
/// `Field` column.
pub const COL_FIELD: ColumnKey = ColumnKey::new("Field");
/// `Level` column (program level).
pub const COL_LEVEL: ColumnKey = ColumnKey::new("Level");
/// `Institution Type` column.
pub const COL_INSTITUTION_TYPE: ColumnKey = ColumnKey::new("Institution Type");
/// `Country` column.
pub const COL_COUNTRY: ColumnKey = ColumnKey::new("Country");
/// `City` column.
pub const COL_CITY: ColumnKey = ColumnKey::new("City");
/// `Tuition Price` column.
pub const COL_TUITION_PRICE: ColumnKey = ColumnKey::new("Tuition Price");
/// `Tuition Currency` column.
pub const COL_TUITION_CURRENCY: ColumnKey = ColumnKey::new("Tuition Currency");
/// `Application Fee Price` column.
pub const COL_APPLICATION_FEE_PRICE: ColumnKey = ColumnKey::new("Application Fee Price");
/// `Application Fee Currency` column.
pub const COL_APPLICATION_FEE_CURRENCY: ColumnKey = ColumnKey::new("Application Fee Currency");
/// `Duration` column.
pub const COL_DURATION: ColumnKey = ColumnKey::new("Duration");
/// `Picture` column (logo/image URL).
pub const COL_PICTURE: ColumnKey = ColumnKey::new("Picture");

/// Prefix marking tag columns (`Tags`, `Tag 1`, `Tag 2`, ...).
pub const TAG_COLUMN_PREFIX: &str = "Tag";
