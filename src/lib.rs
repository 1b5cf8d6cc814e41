#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Sheet-group aggregation and cap sampling.
pub mod aggregate;
/// Read-through snapshot cache.
pub mod cache;
/// The catalog facade tying source, cache, and query passes together.
pub mod catalog;
/// Canonical spreadsheet column keys.
pub mod columns;
/// Catalog configuration types.
pub mod config;
/// Centralized constants used across filtering, paging, and caching.
pub mod constants;
/// Raw cell/row types and the canonical program record.
pub mod data;
/// Reusable example runners shared by the demo binaries.
pub mod example_apps;
/// Filter criteria and clause evaluation.
pub mod filter;
/// Raw row → record normalization.
pub mod normalize;
/// Page-window math.
pub mod paginate;
/// Caller-owned query state and outcomes.
pub mod query;
/// Sheet source traits and built-in sources.
pub mod source;
/// Shared type aliases.
pub mod types;

mod errors;

pub use aggregate::{AggregateOutcome, aggregate};
pub use cache::{CatalogCache, CatalogSnapshot};
pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use data::{CellValue, ProgramRecord, RawRow, SheetGroup, text_or_placeholder};
pub use errors::CatalogError;
pub use filter::{
    CategoricalField, FilterSpec, TuitionRange, filter, filter_options, observed_tuition_range,
};
pub use normalize::normalize_row;
pub use paginate::{PageWindow, paginate};
pub use query::{QueryOutcome, QueryState};
pub use source::{CsvWorkbookConfig, CsvWorkbookSource, InMemorySheetSource, SheetSource};
pub use types::{ColumnName, FieldValue, GroupName, SearchQuery, SourceId, Tag};
