/// Constants used by filter evaluation and option lists.
pub mod filters {
    /// Sentinel option meaning "no constraint on this field".
    ///
    /// Prepended to every option list; never valid as record data.
    pub const ALL_OPTION: &str = "All";
}

/// Constants used when rendering records for display.
pub mod presentation {
    /// Placeholder substituted for missing text fields at presentation time.
    /// Records themselves keep `None`.
    pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";
}

/// Constants used by aggregation and cap sampling.
pub mod aggregate {
    /// Default hard cap on the aggregated record count.
    pub const DEFAULT_SAMPLE_CAP: usize = 10_000;
    /// Default RNG seed for cap sampling. Constant across calls so repeated
    /// queries against unchanged data reproduce the same sample.
    pub const DEFAULT_SAMPLE_SEED: u64 = 42;
}

/// Constants used by page-window math.
pub mod paging {
    /// Default number of record cards per page window.
    pub const DEFAULT_PAGE_SIZE: usize = 16;
}

/// Constants used by the read-through catalog cache.
pub mod cache {
    use std::time::Duration;

    /// Default bounded-staleness window for cached snapshots.
    pub const DEFAULT_REFRESH_TTL: Duration = Duration::from_secs(3600);
}

/// Constants used by the CSV workbook source.
pub mod workbook {
    /// File extension treated as a sheet within a workbook directory.
    pub const SHEET_EXTENSION: &str = "csv";
}
