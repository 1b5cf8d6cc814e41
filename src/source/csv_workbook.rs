//! Directory-of-CSV-files workbook source.
//!
//! Treats a directory as one workbook: every `.csv` file is a sheet named
//! by its file stem, with the first row as headers. Cells arrive as text;
//! numeric coercion is the normalizer's job.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::constants::workbook::SHEET_EXTENSION;
use crate::data::{CellValue, RawRow, SheetGroup};
use crate::errors::CatalogError;
use crate::source::SheetSource;
use crate::types::{ColumnName, SourceId};

/// Configuration for a CSV workbook source.
#[derive(Clone, Debug)]
pub struct CsvWorkbookConfig {
    /// Stable source identifier used as the snapshot cache key.
    pub source_id: SourceId,
    /// Directory holding one `.csv` file per sheet.
    pub root: PathBuf,
    /// Whether to descend into subdirectories while collecting sheets.
    pub recursive: bool,
}

impl CsvWorkbookConfig {
    /// Create a config for a workbook directory with explicit id and root.
    pub fn new(source_id: impl Into<SourceId>, root: impl Into<PathBuf>) -> Self {
        Self {
            source_id: source_id.into(),
            root: root.into(),
            recursive: false,
        }
    }

    /// Override whether subdirectories are scanned for sheets.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

/// Sheet source backed by a directory of CSV files.
///
/// Sheets are ordered by path so aggregation order, and therefore cap
/// sampling, is stable across fetches of unchanged data.
pub struct CsvWorkbookSource {
    config: CsvWorkbookConfig,
}

impl CsvWorkbookSource {
    /// Create a workbook source from its configuration.
    pub fn new(config: CsvWorkbookConfig) -> Self {
        Self { config }
    }

    fn fetch_failed(&self, reason: impl ToString) -> CatalogError {
        CatalogError::FetchFailed {
            source_id: self.config.source_id.clone(),
            reason: reason.to_string(),
        }
    }

    fn schema_invalid(&self, details: impl ToString) -> CatalogError {
        CatalogError::SchemaInvalid {
            source_id: self.config.source_id.clone(),
            details: details.to_string(),
        }
    }

    fn sheet_paths(&self) -> Result<Vec<PathBuf>, CatalogError> {
        let mut walker = WalkDir::new(&self.config.root).min_depth(1);
        if !self.config.recursive {
            walker = walker.max_depth(1);
        }
        let mut paths = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|err| self.fetch_failed(err))?;
            let path = entry.into_path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(SHEET_EXTENSION) {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    fn read_sheet(&self, path: &Path) -> Result<SheetGroup, CatalogError> {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("sheet")
            .to_string();
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|err| self.fetch_failed(err))?;
        let headers: Vec<ColumnName> = reader
            .headers()
            .map_err(|err| self.schema_invalid(err))?
            .iter()
            .map(|header| header.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|err| self.schema_invalid(err))?;
            let mut row = RawRow::with_capacity(headers.len());
            for (idx, header) in headers.iter().enumerate() {
                let cell = match record.get(idx) {
                    Some("") | None => CellValue::Empty,
                    Some(text) => CellValue::Text(text.to_string()),
                };
                row.insert(header.clone(), cell);
            }
            rows.push(row);
        }
        debug!(sheet = %name, rows = rows.len(), "read workbook sheet");
        Ok(SheetGroup { name, rows })
    }
}

impl SheetSource for CsvWorkbookSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn fetch_groups(&self) -> Result<Vec<SheetGroup>, CatalogError> {
        let paths = self.sheet_paths()?;
        if paths.is_empty() {
            warn!(
                source_id = %self.config.source_id,
                root = %self.config.root.display(),
                "workbook directory holds no sheets"
            );
        }
        paths.iter().map(|path| self.read_sheet(path)).collect()
    }
}
