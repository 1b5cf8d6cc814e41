//! Sheet source interfaces and built-in sources.
//!
//! A `SheetSource` is the only externally-latent collaborator in the
//! pipeline: it delivers raw rows grouped into named sheets, and the
//! catalog cache hides its latency behind a staleness window. Spreadsheet
//! API clients live outside this crate; what ships here is an in-memory
//! source for tests and fixed datasets, and a CSV-workbook source.

use crate::data::SheetGroup;
use crate::errors::CatalogError;
use crate::types::SourceId;

mod csv_workbook;
pub use csv_workbook::{CsvWorkbookConfig, CsvWorkbookSource};

/// Supplier of raw sheet rows.
///
/// `fetch_groups` is a blocking call. For a fixed backing dataset the
/// output should be deterministic, including sheet order, so aggregation
/// and cap sampling reproduce across refreshes.
pub trait SheetSource: Send + Sync {
    /// Stable source identifier, used as the snapshot cache key.
    fn id(&self) -> &str;

    /// Fetch every sheet of raw rows, in source order.
    ///
    /// Errors (unreachable backend, malformed schema) propagate to the
    /// caller as a fetch failure; they are never masked as empty sheets.
    fn fetch_groups(&self) -> Result<Vec<SheetGroup>, CatalogError>;
}

/// In-memory sheet source for tests and small fixed datasets.
pub struct InMemorySheetSource {
    id: SourceId,
    groups: Vec<SheetGroup>,
}

impl InMemorySheetSource {
    /// Create an in-memory source from prebuilt sheet groups.
    pub fn new(id: impl Into<SourceId>, groups: Vec<SheetGroup>) -> Self {
        Self {
            id: id.into(),
            groups,
        }
    }
}

impl SheetSource for InMemorySheetSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn fetch_groups(&self) -> Result<Vec<SheetGroup>, CatalogError> {
        Ok(self.groups.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CellValue, RawRow};

    #[test]
    fn in_memory_source_returns_groups_in_order() {
        let mut row = RawRow::new();
        row.insert("Country".to_string(), CellValue::Text("Canada".into()));
        let source = InMemorySheetSource::new(
            "fixture",
            vec![
                SheetGroup {
                    name: "first".to_string(),
                    rows: vec![row],
                },
                SheetGroup {
                    name: "second".to_string(),
                    rows: Vec::new(),
                },
            ],
        );

        let groups = source.fetch_groups().expect("fetch");
        assert_eq!(source.id(), "fixture");
        let names: Vec<&str> = groups.iter().map(|group| group.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(groups[0].rows.len(), 1);
    }
}
