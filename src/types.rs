/// Stable identifier for the source that produced a set of sheets.
/// Used as the cache key for aggregated snapshots.
/// Examples: `programs_workbook`, `sheets::fall_intake`
pub type SourceId = String;
/// Name of one sheet/tab within a source.
/// Examples: `Canada Programs`, `Masters`
pub type GroupName = String;
/// Raw spreadsheet column label.
/// Examples: `University Name`, `Tuition Price`
pub type ColumnName = String;
/// Exact categorical value used in equality filters and option lists.
/// Examples: `Canada`, `Master`, `Public`
pub type FieldValue = String;
/// Free-text input matched against university name and speciality.
/// Example: `software eng`
pub type SearchQuery = String;
/// Program tag text, kept in source column order.
/// Examples: `STEM`, `Co-op`
pub type Tag = String;
